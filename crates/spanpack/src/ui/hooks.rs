//! Presentation hooks for notifications and confirmations.
//!
//! The driver never talks to the terminal directly for these affordances; it
//! goes through the two traits below so tests can substitute recording fakes.

use std::io::{self, BufRead, Write};

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    /// Short tag prefixed to console notices.
    pub fn tag(&self) -> &'static str {
        match self {
            NoticeKind::Info => "info",
            NoticeKind::Success => "ok",
            NoticeKind::Warning => "warn",
            NoticeKind::Error => "error",
        }
    }
}

/// Delivers user-facing notices.
pub trait Notifier {
    fn notify(&mut self, kind: NoticeKind, message: &str);
}

/// Asks the user to approve a destructive action.
pub trait Confirmer {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Writes tagged notices to stdout.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, kind: NoticeKind, message: &str) {
        println!("[{}] {message}", kind.tag());
    }
}

/// Prompts on stdout and reads a y/N answer from stdin.
#[derive(Debug, Default)]
pub struct ConsoleConfirmer;

impl Confirmer for ConsoleConfirmer {
    fn confirm(&mut self, message: &str) -> bool {
        print!("{message} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes" | "Yes")
    }
}

/// Approves everything without prompting. Used when confirmation is disabled
/// in the configuration.
#[derive(Debug, Default)]
pub struct AutoConfirmer;

impl Confirmer for AutoConfirmer {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Records every notice for later assertions.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        pub notices: Vec<(NoticeKind, String)>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&mut self, kind: NoticeKind, message: &str) {
            self.notices.push((kind, message.to_string()));
        }
    }

    /// Answers every confirmation with a fixed response.
    #[derive(Debug)]
    pub struct ScriptedConfirmer {
        pub answer: bool,
        pub asked: usize,
    }

    impl ScriptedConfirmer {
        pub fn new(answer: bool) -> Self {
            Self { answer, asked: 0 }
        }
    }

    impl Confirmer for ScriptedConfirmer {
        fn confirm(&mut self, _message: &str) -> bool {
            self.asked += 1;
            self.answer
        }
    }
}
