use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use spanpack::app::solver::select_best_range;
use spanpack::domain::model::Item;
use spanpack::infra::config::Config;
use spanpack::ui::app::UiApp;
use spanpack::ui::render;

#[derive(Parser)]
#[command(
    name = "spanpack",
    version,
    about = "Find the heaviest contiguous run of items that fits a volume capacity"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single instance and print the result
    Solve {
        /// Maximum total volume the selection may occupy
        #[arg(long)]
        capacity: f64,
        /// An item as VOLUME:WEIGHT; repeat in sequence order
        #[arg(long = "item", value_name = "VOLUME:WEIGHT")]
        items: Vec<Item>,
        /// Emit the selection as JSON (null when nothing fits)
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    spanpack::init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Solve {
            capacity,
            items,
            json,
        }) => solve_once(capacity, &items, json),
        Some(Commands::Completions { shell }) => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "spanpack", &mut io::stdout());
            Ok(())
        }
        None => {
            let config = Config::load()?;
            let mut app = UiApp::new(config);
            app.run()
        }
    }
}

fn solve_once(capacity: f64, items: &[Item], json: bool) -> Result<()> {
    let selection = select_best_range(capacity, items);

    if json {
        println!("{}", serde_json::to_string_pretty(&selection)?);
        return Ok(());
    }

    match selection {
        Some(selection) => {
            let config = Config::load()?;
            print!("{}", render::solution_summary(&selection, capacity, &config));
            print!("{}", render::item_table(items, Some(&selection), &config));
        }
        None => println!("no contiguous selection fits within capacity {capacity}"),
    }
    Ok(())
}
