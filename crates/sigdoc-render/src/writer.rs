//! Markdown output: one file per declaration, fragments appended in order.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::RenderError;

/// Appends rendered fragments to `{output_dir}/{Declaration}.md`.
#[derive(Debug, Clone)]
pub struct MarkdownWriter {
    output_dir: PathBuf,
}

impl MarkdownWriter {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Target file for a declaration.
    #[must_use]
    pub fn path_for(&self, declaration_name: &str) -> PathBuf {
        self.output_dir.join(format!("{declaration_name}.md"))
    }

    /// Append `fragment` and a blank line to the declaration's file.
    ///
    /// Creates the output directory on first use. Returns the file path.
    ///
    /// # Errors
    /// Returns [`RenderError::Io`] if the directory or file cannot be written.
    pub fn append(&self, declaration_name: &str, fragment: &str) -> Result<PathBuf, RenderError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| RenderError::Io {
            path: self.output_dir.clone(),
            source,
        })?;

        let path = self.path_for(declaration_name);
        let body = strip_filename_line(fragment, declaration_name);
        let io_err = |source| RenderError::Io {
            path: path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(io_err)?;
        write!(file, "{body}\n\n").map_err(io_err)?;
        Ok(path)
    }
}

/// Drop the first `filename: {name}.md` line a model may prepend.
///
/// The name is matched in lowercase, the form the few-shot example uses.
fn strip_filename_line(fragment: &str, declaration_name: &str) -> String {
    let marker = format!("filename: {}.md\n", declaration_name.to_lowercase());
    fragment.replacen(&marker, "", 1)
}
