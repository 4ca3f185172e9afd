use std::collections::HashSet;
use std::path::{Path, PathBuf};

use console::style;
use tracing::debug;
use walkdir::WalkDir;

use crate::constants::discovery::DOCUMENT_EXTENSIONS;
use crate::progress::ProgressReporter;

/// Finds graph documents under the paths given on the command line
pub struct DocumentDiscovery {
    seen: HashSet<PathBuf>,
}

impl Default for DocumentDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentDiscovery {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    /// Collect documents from files and directories.
    ///
    /// Files named explicitly are taken as-is. Directories are walked for
    /// `.json` and `.toml` files. Missing paths are reported and skipped.
    pub fn discover_all(
        &mut self,
        paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Vec<PathBuf> {
        let mut documents = Vec::new();

        for path in paths {
            if !path.exists() {
                eprintln!(
                    "{} Path '{}' does not exist",
                    style("⚠").yellow(),
                    path.display()
                );
                continue;
            }

            if path.is_file() {
                self.push(path.clone(), &mut documents);
                continue;
            }

            for entry in WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e.path()))
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file() && is_document(e.path()))
            {
                if let Some(p) = progress {
                    p.checking_document(entry.path());
                }
                self.push(entry.into_path(), &mut documents);
            }
        }

        // Sort by path for consistent output
        documents.sort();
        debug!(count = documents.len(), "discovered graph documents");
        documents
    }

    fn push(&mut self, path: PathBuf, documents: &mut Vec<PathBuf>) {
        let key = path.canonicalize().unwrap_or_else(|_| path.clone());
        if self.seen.insert(key) {
            documents.push(path);
        }
    }
}

fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext))
}

fn is_skipped_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.') || name == "target" || name == "node_modules")
}
