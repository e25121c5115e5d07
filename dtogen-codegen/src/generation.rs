//! Laying rendered resources out as files.

use std::path::Path;

use dtogen_core::{File, WriteResult, resource_path};
use eyre::Result;

use crate::{
    language::{GenerateResult, PreviewFile},
    render::Resources,
};

/// Place every resource at `<package dir>/<name>.<extension>`.
pub fn layout_resources(resources: &Resources, package: &str, extension: &str) -> Vec<PreviewFile> {
    resources
        .iter()
        .map(|(name, content)| PreviewFile {
            path: resource_path(Path::new(""), package, name, extension)
                .to_string_lossy()
                .into_owned(),
            content: content.clone(),
        })
        .collect()
}

/// Write laid-out files below `output_dir`, replacing existing ones.
pub fn write_resources(files: &[PreviewFile], output_dir: &Path) -> Result<GenerateResult> {
    let mut result = GenerateResult::default();
    for file in files {
        let path = output_dir.join(&file.path);
        match File::new(&path, file.content.as_str()).write()? {
            WriteResult::Written => result.written.push(path),
            WriteResult::Skipped => result.skipped.push(path),
        }
    }
    tracing::info!(
        written = result.written.len(),
        dir = %output_dir.display(),
        "resources written"
    );
    Ok(result)
}
