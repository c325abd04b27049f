//! Byte-stream collaborator a store reads from and writes to

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Source and sink for a store's text.
///
/// Every call acquires its own handle and releases it before returning (or,
/// for readers, when the returned reader is dropped).
#[cfg_attr(test, mockall::automock)]
pub trait Backing {
    /// Open a fresh line reader over the current content.
    fn open_reader(&self) -> io::Result<Box<dyn BufRead>>;

    /// Replace the whole content with `contents`.
    fn write_all(&self, contents: &str) -> io::Result<()>;

    /// Human-readable location used in logs and errors.
    fn location(&self) -> String;
}

/// File on the local filesystem
#[derive(Debug, Clone)]
pub struct FileBacking {
    path: PathBuf,
    atomic_writes: bool,
    file_permissions: Option<u32>,
}

impl FileBacking {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            atomic_writes: false,
            file_permissions: None,
        }
    }

    /// Write to a sibling temp file and rename it over the target.
    pub fn with_atomic_writes(mut self, atomic_writes: bool) -> Self {
        self.atomic_writes = atomic_writes;
        self
    }

    /// Unix mode applied to the file after each write. Ignored elsewhere.
    pub fn with_file_permissions(mut self, mode: Option<u32>) -> Self {
        self.file_permissions = mode;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn apply_permissions(&self, target: &Path) -> io::Result<()> {
        #[cfg(unix)]
        {
            if let Some(mode) = self.file_permissions {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(target, fs::Permissions::from_mode(mode))?;
            }
        }
        #[cfg(not(unix))]
        let _ = target;

        Ok(())
    }
}

impl Backing for FileBacking {
    fn open_reader(&self) -> io::Result<Box<dyn BufRead>> {
        let file = File::open(&self.path)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn write_all(&self, contents: &str) -> io::Result<()> {
        if self.atomic_writes {
            let temp_path = self.temp_path();

            let written = fs::write(&temp_path, contents)
                .and_then(|()| self.apply_permissions(&temp_path))
                .and_then(|()| fs::rename(&temp_path, &self.path));
            if written.is_err() {
                let _ = fs::remove_file(&temp_path);
            }
            written?;
        } else {
            fs::write(&self.path, contents)?;
            self.apply_permissions(&self.path)?;
        }

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
