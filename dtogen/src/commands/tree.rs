use std::path::PathBuf;

use clap::Args;
use dtogen_codegen::outline::DisplayStyle;
use dtogen_matrix::DtogenToml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TreeCommand {
    /// Path to dtogen.toml (defaults to ./dtogen.toml)
    #[arg(short, long, default_value = "dtogen.toml")]
    pub config: PathBuf,

    /// List every field with its type under its definition
    #[arg(long)]
    pub fields: bool,

    /// Print definition names only, indented by nesting
    #[arg(long, conflicts_with = "fields")]
    pub names: bool,
}

impl TreeCommand {
    fn style(&self) -> DisplayStyle {
        if self.fields {
            DisplayStyle::WithFields
        } else if self.names {
            DisplayStyle::Simple
        } else {
            DisplayStyle::TreeBox
        }
    }

    pub fn run(&self) -> Result<()> {
        let file = DtogenToml::open(&self.config).unwrap_or_exit();
        let matrix = file.load_matrix().unwrap_or_exit();

        let report = ops::tree(matrix, self.style())?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::commands::{Cli, Commands};

    fn parse(args: &[&str]) -> TreeCommand {
        let cli = Cli::parse_from(["dtogen", "tree"].iter().chain(args));
        match cli.command {
            Commands::Tree(cmd) => cmd,
            _ => panic!("expected tree"),
        }
    }

    #[test]
    fn test_style_selection() {
        assert!(matches!(parse(&[]).style(), DisplayStyle::TreeBox));
        assert!(matches!(parse(&["--fields"]).style(), DisplayStyle::WithFields));
        assert!(matches!(parse(&["--names"]).style(), DisplayStyle::Simple));
    }

    #[test]
    fn test_names_conflicts_with_fields() {
        let result = Cli::try_parse_from(["dtogen", "tree", "--names", "--fields"]);
        assert!(result.is_err());
    }
}
