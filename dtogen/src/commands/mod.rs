mod bake;
mod check;
mod init;
mod tree;

use bake::BakeCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use init::InitCommand;
use tree::TreeCommand;

/// Extension trait for exiting on definition book errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for dtogen_matrix::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "dtogen")]
#[command(version)]
#[command(about = "Generate DTO classes from a layered definition matrix")]
pub(crate) struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Bake(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Tree(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter dtogen.toml and definition matrix
    Init(InitCommand),

    /// Generate DTO classes from dtogen.toml
    Bake(BakeCommand),

    /// Validate the definition matrix without generating code
    Check(CheckCommand),

    /// Print the reconstructed definition tree
    Tree(TreeCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_bake_flags() {
        let cli = Cli::parse_from([
            "dtogen", "-v", "bake", "-c", "book.toml", "-l", "ts", "--dry-run",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Bake(cmd) => {
                assert_eq!(cmd.config, std::path::PathBuf::from("book.toml"));
                assert_eq!(cmd.language, Some(dtogen_matrix::Language::TypeScript));
                assert!(cmd.dry_run);
                assert!(!cmd.visualize);
            }
            _ => panic!("expected bake"),
        }
    }

    #[test]
    fn test_parse_json_language() {
        let cli = Cli::parse_from(["dtogen", "bake", "--language", "json"]);
        match cli.command {
            Commands::Bake(cmd) => {
                assert_eq!(cmd.language, Some(dtogen_matrix::Language::Json));
            }
            _ => panic!("expected bake"),
        }
    }
}
