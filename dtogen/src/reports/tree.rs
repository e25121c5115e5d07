//! Tree command report.

use super::output::{Output, Report};

/// The reconstructed definition tree of a book.
#[derive(Debug)]
pub struct TreeReport {
    pub project: String,
    pub definition_count: usize,
    pub tree: String,
}

impl Report for TreeReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&self.project);
        out.newline();
        if self.tree.is_empty() {
            out.preformatted("(no definitions)");
        } else {
            out.preformatted(&self.tree);
        }
        out.newline();
        out.preformatted(&format!(
            "{} definition{}",
            self.definition_count,
            if self.definition_count == 1 { "" } else { "s" }
        ));
    }
}
