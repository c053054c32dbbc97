//! Interactive command loop.

use anyhow::{Result, anyhow};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};

use crate::app::inventory::Inventory;
use crate::infra::config::Config;
use crate::ui::hooks::{
    AutoConfirmer, Confirmer, ConsoleConfirmer, ConsoleNotifier, NoticeKind, Notifier,
};
use crate::ui::render;

const HELP: &str = "commands: capacity <value> · add <volume> <weight> · remove <index> · \
                    list · solve · reset · help · quit";

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Capacity(f64),
    Add { volume: f64, weight: f64 },
    Remove(usize),
    List,
    Solve,
    Reset,
    Help,
    Quit,
}

/// Parse one input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or("");
    let args: Vec<&str> = parts.collect();

    match verb {
        "capacity" | "cap" => match args.as_slice() {
            [value] => {
                let value: f64 = value
                    .parse()
                    .map_err(|_| anyhow!("'{value}' is not a number"))?;
                Ok(Command::Capacity(value))
            }
            _ => Err(anyhow!("usage: capacity <value>")),
        },
        "add" => match args.as_slice() {
            [volume, weight] => {
                let volume: f64 = volume
                    .parse()
                    .map_err(|_| anyhow!("'{volume}' is not a number"))?;
                let weight: f64 = weight
                    .parse()
                    .map_err(|_| anyhow!("'{weight}' is not a number"))?;
                Ok(Command::Add { volume, weight })
            }
            _ => Err(anyhow!("usage: add <volume> <weight>")),
        },
        "remove" | "rm" => match args.as_slice() {
            [index] => {
                let index: usize = index
                    .parse()
                    .map_err(|_| anyhow!("'{index}' is not an item index"))?;
                Ok(Command::Remove(index))
            }
            _ => Err(anyhow!("usage: remove <index>")),
        },
        "list" | "ls" => Ok(Command::List),
        "solve" => Ok(Command::Solve),
        "reset" => Ok(Command::Reset),
        "help" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(anyhow!("unknown command '{other}' (try 'help')")),
    }
}

/// Primary entry point for the interactive loop.
pub struct UiApp {
    config: Config,
    inventory: Inventory,
    notifier: Box<dyn Notifier>,
    confirmer: Box<dyn Confirmer>,
}

impl UiApp {
    /// Build the app with console hooks, honoring the configured
    /// confirmation policy.
    pub fn new(config: Config) -> Self {
        let confirmer: Box<dyn Confirmer> = if config.defaults.confirm_destructive {
            Box::new(ConsoleConfirmer)
        } else {
            Box::new(AutoConfirmer)
        };
        Self::with_hooks(config, Box::new(ConsoleNotifier), confirmer)
    }

    /// Build the app with injected presentation hooks.
    pub fn with_hooks(
        config: Config,
        notifier: Box<dyn Notifier>,
        confirmer: Box<dyn Confirmer>,
    ) -> Self {
        Self {
            config,
            inventory: Inventory::new(),
            notifier,
            confirmer,
        }
    }

    /// Run the read-eval loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let mut editor = Reedline::create();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("spanpack".into()),
            DefaultPromptSegment::Empty,
        );

        self.notifier
            .notify(NoticeKind::Info, "type 'help' for commands");

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match parse_command(line) {
                        Ok(command) => {
                            if !self.execute(command) {
                                break;
                            }
                        }
                        Err(err) => self.notifier.notify(NoticeKind::Error, &err.to_string()),
                    }
                }
                Signal::CtrlC | Signal::CtrlD => break,
            }
        }
        Ok(())
    }

    /// Execute one command. Returns `false` when the loop should stop.
    pub fn execute(&mut self, command: Command) -> bool {
        match command {
            Command::Capacity(value) => {
                self.inventory.set_capacity(value);
                self.notifier.notify(
                    NoticeKind::Info,
                    &format!("capacity set to {value} {}", self.config.units.volume),
                );
            }
            Command::Add { volume, weight } => match self.inventory.add_item(volume, weight) {
                Ok(_) => {
                    self.notifier.notify(
                        NoticeKind::Success,
                        &format!("item #{} added", self.inventory.len() - 1),
                    );
                }
                Err(err) => self.notifier.notify(NoticeKind::Error, &err.to_string()),
            },
            Command::Remove(index) => {
                if !self
                    .confirmer
                    .confirm(&format!("Remove item #{index}? This cannot be undone."))
                {
                    self.notifier.notify(NoticeKind::Info, "nothing removed");
                    return true;
                }
                match self.inventory.remove_item(index) {
                    Ok(_) => self
                        .notifier
                        .notify(NoticeKind::Success, &format!("item #{index} removed")),
                    Err(err) => self.notifier.notify(NoticeKind::Error, &err.to_string()),
                }
            }
            Command::List => {
                if self.inventory.is_empty() {
                    self.notifier.notify(NoticeKind::Info, "no items yet");
                } else {
                    let table = render::item_table(
                        self.inventory.items(),
                        self.inventory.selection(),
                        &self.config,
                    );
                    print!("{table}");
                }
            }
            Command::Solve => self.solve(),
            Command::Reset => {
                if !self
                    .confirmer
                    .confirm("Reset capacity, items, and selection?")
                {
                    self.notifier.notify(NoticeKind::Info, "nothing reset");
                    return true;
                }
                self.inventory.clear();
                self.notifier
                    .notify(NoticeKind::Success, "all data has been reset");
            }
            Command::Help => self.notifier.notify(NoticeKind::Info, HELP),
            Command::Quit => return false,
        }
        true
    }

    fn solve(&mut self) {
        if self.inventory.is_empty() {
            self.notifier
                .notify(NoticeKind::Error, "please add at least one item");
            return;
        }
        if self.inventory.capacity() <= 0.0 {
            self.notifier
                .notify(NoticeKind::Error, "please set a capacity greater than zero");
            return;
        }

        let capacity = self.inventory.capacity();
        match self.inventory.solve().cloned() {
            Some(selection) => {
                self.notifier
                    .notify(NoticeKind::Success, "optimal selection found");
                print!("{}", render::solution_summary(&selection, capacity, &self.config));
                print!(
                    "{}",
                    render::item_table(self.inventory.items(), Some(&selection), &self.config)
                );
            }
            None => self.notifier.notify(
                NoticeKind::Warning,
                "no contiguous selection fits within the capacity",
            ),
        }
    }
}
