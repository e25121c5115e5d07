use std::path::PathBuf;

use clap::Args;
use dtogen_matrix::{DtogenToml, Language};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    language::LanguageSupport,
    ops::{self, BakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    /// Path to dtogen.toml (defaults to ./dtogen.toml)
    #[arg(short, long, default_value = "dtogen.toml")]
    pub config: PathBuf,

    /// Output directory for generated resources
    #[arg(short, long, env = "DTOGEN_OUTPUT", default_value = ".")]
    pub output: PathBuf,

    /// Target language (overrides the book's `meta.language`)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write pipeline snapshots to <output>/.dtogen/debug
    #[arg(long)]
    pub visualize: bool,
}

impl BakeCommand {
    pub fn run(&self) -> Result<()> {
        let file = DtogenToml::open(&self.config).unwrap_or_exit();
        let matrix = file.load_matrix().unwrap_or_exit();

        let language = self.language.unwrap_or(matrix.language);
        let report = ops::bake(
            matrix,
            LanguageSupport::get(language),
            BakeOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
                visualize: self.visualize,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
