//! Output sinks: where rendered files land.
//!
//! The engine walks templates and renders content; the sink owns the
//! side effects. That split keeps the fan-out logic testable without
//! touching the real filesystem.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

/// Destination for rendered output.
pub trait RenderSink {
    /// Create a directory (and any missing parents). Existing directories
    /// are not an error.
    fn ensure_dir(&mut self, path: &Path) -> io::Result<()>;

    /// Create or truncate a file with the given contents.
    fn write_file(&mut self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Sink writing to the real filesystem.
#[derive(Debug, Default)]
pub struct FsSink;

impl RenderSink for FsSink {
    fn ensure_dir(&mut self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}

/// In-memory sink for tests: records directories and file contents,
/// overwriting on collision exactly like the filesystem would.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub dirs: BTreeSet<PathBuf>,
    pub files: BTreeMap<PathBuf, String>,
}

impl RenderSink for MemorySink {
    fn ensure_dir(&mut self, path: &Path) -> io::Result<()> {
        self.dirs.insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
