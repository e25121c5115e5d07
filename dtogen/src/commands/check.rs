use std::path::PathBuf;

use clap::Args;
use dtogen_matrix::DtogenToml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to dtogen.toml (defaults to ./dtogen.toml)
    #[arg(short, long, default_value = "dtogen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let file = DtogenToml::open(&self.config).unwrap_or_exit();
        let matrix = file.load_matrix().unwrap_or_exit();

        let report = ops::check(matrix, &self.config)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
