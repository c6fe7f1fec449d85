//! switchy-demo: run the switch gallery headlessly.

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use switchy_demo::{check_config, run_gallery, GalleryArgs};

#[derive(Parser)]
#[command(name = "switchy-demo")]
#[command(about = "Headless gallery of animated toggle switches")]
#[command(version)]
struct Cli {
    /// Tracing filter directive; RUST_LOG takes precedence
    #[arg(long, global = true, default_value = switchy::logging::DEFAULT_FILTER)]
    log: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the gallery, apply clicks, simulate frames, and print the result
    Gallery(GalleryArgs),

    /// Check gallery config validity
    Check {
        /// Path to the config file
        #[arg(default_value = "gallery.yaml")]
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    switchy::logging::init(&cli.log);

    let mut stdout = io::stdout().lock();
    let result = match &cli.command {
        Commands::Gallery(args) => run_gallery(args, &mut stdout),
        Commands::Check { config } => check_config(config, &mut stdout).map(|_| ()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_gallery_args() {
        let cli = Cli::parse_from([
            "switchy-demo",
            "--log",
            "switchy=debug",
            "gallery",
            "--click",
            "iswitch",
            "--click",
            "heart-switch",
            "--frames",
            "5",
            "--json",
        ]);
        assert_eq!(cli.log, "switchy=debug");
        match cli.command {
            Commands::Gallery(args) => {
                assert_eq!(args.clicks, ["iswitch", "heart-switch"]);
                assert_eq!(args.frames, 5);
                assert!(args.json);
                assert!(args.config.is_none());
            }
            Commands::Check { .. } => panic!("expected gallery"),
        }
    }

    #[test]
    fn test_check_default_path() {
        let cli = Cli::parse_from(["switchy-demo", "check"]);
        assert_eq!(cli.log, "warn");
        assert!(matches!(cli.command, Commands::Check { config } if config == PathBuf::from("gallery.yaml")));
    }
}
