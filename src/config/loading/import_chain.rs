use std::path::{Path, PathBuf};

use crate::{DocsiteError, Result};

/// Stack of configuration files currently being imported.
///
/// A file is pushed when the loader enters it and popped when the loader is
/// done with it, so the stack always mirrors the active import chain.
/// Entering a file that is still on the stack means the imports form a
/// cycle, and loading fails with the full chain in the error.
pub struct ImportChain {
    stack: Vec<PathBuf>,
}

impl ImportChain {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Enters a file, failing if it is already part of the active chain.
    pub fn enter(&mut self, path: &Path) -> Result<()> {
        if self.stack.iter().any(|visited| visited == path) {
            let mut chain: Vec<String> = self.stack.iter().map(|p| display_name(p)).collect();
            chain.push(display_name(path));

            return Err(DocsiteError::CircularImport { chain });
        }

        self.stack.push(path.to_path_buf());
        Ok(())
    }

    /// Leaves the most recently entered file.
    pub fn leave(&mut self) {
        self.stack.pop();
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}
