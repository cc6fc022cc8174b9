use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use board_core::{
    apply_command, load_settings, BoardState, BoardView, Collaborators, CommandOutcome,
    ConfirmPrompt, FixedAnswer, OrderFactory, SequentialOrderFactory, Settings, UuidOrderFactory,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use shared::{error::ApiError, protocol::BoardCommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Replay scripted interactions against an in-memory order board")]
struct Cli {
    /// Settings file; defaults to ./order_board.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply a JSON array of board commands and print the resulting board.
    Replay {
        script: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Issue `order-1`, `order-2`, ... instead of random ids.
        #[arg(long)]
        deterministic_ids: bool,
        /// Confirm every delete without asking.
        #[arg(long)]
        assume_yes: bool,
    },
    /// List the tables offered by the add form.
    Tables,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct StepReport {
    index: usize,
    command: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<CommandOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ApiError>,
}

#[derive(Debug, Serialize)]
struct ReplayReport {
    steps: Vec<StepReport>,
    board: BoardView,
}

/// Reads y/n answers from stdin; anything but `y`/`yes` declines.
struct StdinConfirm;

impl ConfirmPrompt for StdinConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        eprint!("{message} [y/N] ");
        let _ = io::stderr().flush();
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

fn replay(
    commands: Vec<BoardCommand>,
    factory: &mut dyn OrderFactory,
    confirm: &mut dyn ConfirmPrompt,
    settings: &Settings,
) -> ReplayReport {
    let mut state = BoardState::new();
    let mut deps = Collaborators {
        factory,
        confirm,
        delete_prompt: &settings.confirm_delete_message,
    };

    let steps = commands
        .into_iter()
        .enumerate()
        .map(|(index, command)| {
            let name = command.name();
            match apply_command(&mut state, &mut deps, command) {
                Ok(outcome) => StepReport {
                    index,
                    command: name,
                    outcome: Some(outcome),
                    error: None,
                },
                Err(err) => StepReport {
                    index,
                    command: name,
                    outcome: None,
                    error: Some(err.into()),
                },
            }
        })
        .collect();

    ReplayReport {
        steps,
        board: BoardView::project(&state),
    }
}

fn print_text(report: &ReplayReport) {
    for step in &report.steps {
        match (&step.outcome, &step.error) {
            (_, Some(error)) => println!(
                "#{:<3} {:<12} ignored: {}",
                step.index, step.command, error.message
            ),
            (Some(outcome), None) => {
                println!("#{:<3} {:<12} {:?}", step.index, step.command, outcome)
            }
            (None, None) => println!("#{:<3} {}", step.index, step.command),
        }
    }
    println!();
    print!("{}", report.board.render_text());
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Replay {
            script,
            format,
            deterministic_ids,
            assume_yes,
        } => {
            let raw = fs::read_to_string(&script)
                .with_context(|| format!("failed to read script '{}'", script.display()))?;
            let commands: Vec<BoardCommand> = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse script '{}'", script.display()))?;
            tracing::info!(commands = commands.len(), script = %script.display(), "replaying board script");

            let mut factory: Box<dyn OrderFactory> = if deterministic_ids {
                Box::new(SequentialOrderFactory::default())
            } else {
                Box::new(UuidOrderFactory)
            };
            let mut confirm: Box<dyn ConfirmPrompt> = if assume_yes {
                Box::new(FixedAnswer(true))
            } else {
                Box::new(StdinConfirm)
            };

            let report = replay(commands, factory.as_mut(), confirm.as_mut(), &settings);
            match format {
                OutputFormat::Text => print_text(&report),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Command::Tables => {
            for table in &settings.tables {
                println!("{table}");
            }
        }
    }

    Ok(())
}
