use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pioclean::AppError;

#[derive(Parser)]
#[command(name = "pioclean")]
#[command(version)]
#[command(
    about = "Remove vendored example directories from PlatformIO libdeps caches before a build",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pre-build cleanup
    #[clap(visible_alias = "r")]
    Run {
        /// Project root (defaults to $PLATFORMIO_PROJECT_DIR, then the current directory)
        #[arg(long)]
        project_dir: Option<PathBuf>,
        /// Report what would be removed without deleting anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Show the configured cleanup targets
    #[clap(visible_alias = "ls")]
    List {
        /// Project root (defaults to $PLATFORMIO_PROJECT_DIR, then the current directory)
        #[arg(long)]
        project_dir: Option<PathBuf>,
        /// Emit the target list as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Run { project_dir, dry_run } => pioclean::run(project_dir, dry_run).map(|_| ()),
        Commands::List { project_dir, json } => list(project_dir, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn list(project_dir: Option<PathBuf>, json: bool) -> Result<(), AppError> {
    let targets = pioclean::targets(project_dir)?;

    if json {
        let paths: Vec<String> =
            targets.iter().map(|target| target.relative().display().to_string()).collect();
        let rendered = serde_json::to_string_pretty(&paths).map_err(|err| {
            AppError::Configuration(format!("Failed to render target list: {err}"))
        })?;
        println!("{rendered}");
    } else {
        for target in &targets {
            println!("{}", target.relative().display());
        }
    }

    Ok(())
}
