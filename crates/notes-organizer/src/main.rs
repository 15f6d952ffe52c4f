mod config;
mod error;
mod organize;
mod store;
mod thoughts;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use store::ArtifactStore;

#[derive(Parser)]
#[command(name = "notes-organizer", about = "Organize dated trainer notes into current thoughts")]
struct Cli {
    /// Directory holding the notes files (overrides NOTES_BASE_DIR)
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    /// `organize` when no subcommand is given.
    fn command_or_default(self) -> Command {
        self.command.unwrap_or(Command::Organize {
            json: false,
            dry_run: false,
        })
    }
}

#[derive(Subcommand)]
enum Command {
    /// Rebuild current thoughts and append newly detected evolution (default)
    Organize {
        /// Print the run report as JSON on stdout
        #[arg(long)]
        json: bool,
        /// Compute everything but write no files
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the current thoughts relevant to a topic
    Thoughts {
        topic: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env(cli.base_dir.clone())?;
    info!(
        base_dir = %config.base_dir.display(),
        raw_notes = %config.raw_notes_file,
        "configuration loaded"
    );
    let store = ArtifactStore::new(&config);

    match cli.command_or_default() {
        Command::Organize { json, dry_run } => {
            let now = chrono::Local::now().naive_local();
            let report = organize::run_organize(&store, &now, dry_run).inspect_err(|e| {
                tracing::error!(error = %e, "organize failed");
            })?;

            let Some(report) = report else {
                println!("解析できるメモが見つかりませんでした");
                return Ok(());
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "{}日分のメモから{}個の気づきを発見しました",
                    report.dates, report.notes
                );
                if report.written {
                    println!("{}を更新しました", config.current_thoughts_file);
                }
                if report.events.is_empty() {
                    println!("新しい考えの変化は検出されませんでした");
                } else if !report.written {
                    println!("考えの変化{}件を検出しました", report.events.len());
                } else {
                    println!(
                        "考えの変化{}件を{}に記録しました",
                        report.events.len(),
                        config.evolution_log_file
                    );
                }
            }
        }
        Command::Thoughts { topic } => {
            let thoughts = thoughts::run_thoughts(&store, &topic)?.unwrap_or_default();
            for thought in thoughts {
                println!("{thought}");
            }
        }
    }

    Ok(())
}
