use anyhow::Result;
use clap::{Parser, Subcommand};
use rampart_autopilot::agent::run_match;
use rampart_autopilot::engine::{Channel, UnitClass, UnitRoster};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rampart-autopilot")]
#[command(about = "Autopilot agent for a two-lane, turn-based tower-defense arena")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a match against the engine over stdin/stdout (harness default)
    Run,
    /// Print the unit roster resolved from a match config document
    InspectConfig {
        #[arg(long)]
        input: PathBuf,
    },
    /// List the unit archetypes the agent understands
    ListUnits,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command.unwrap_or(Commands::Run) {
        Commands::Run => run_match(&mut Channel::stdio()),
        Commands::InspectConfig { input } => {
            let roster = UnitRoster::from_config_file(&input)?;
            println!("starting_health={}", roster.starting_health());
            for class in UnitClass::ALL {
                let attrs = roster.attrs(class);
                println!(
                    "{}: shorthand={} cost={} damage={} range={}",
                    class.as_str(),
                    attrs.shorthand,
                    attrs.cost,
                    attrs.damage,
                    attrs.range,
                );
            }
            Ok(())
        }
        Commands::ListUnits => {
            for class in UnitClass::ALL {
                println!("{:12} {}", class.as_str(), class.role());
            }
            Ok(())
        }
    }
}
