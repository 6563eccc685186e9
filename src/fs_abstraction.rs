//! Filesystem abstraction layer for testability
//!
//! The render and install steps go through [`FileSystem`] so their
//! error paths can be exercised with mockall-generated mocks instead of
//! a real `/etc/hosts`.

use std::fs::{File, FileTimes, Permissions};
use std::io::{self, Write};
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

#[cfg(test)]
use mockall::automock;

/// Mode of files written through [`FileSystem::write_atomic`]; hosts files
/// must stay world-readable.
pub const HOSTS_FILE_MODE: u32 = 0o644;

/// Trait abstracting filesystem operations for dependency injection.
///
/// # Example (testing)
/// ```ignore
/// use hostsgen::fs_abstraction::MockFileSystem;
///
/// let mut mock_fs = MockFileSystem::new();
/// mock_fs.expect_read_to_string()
///     .returning(|_| Ok("0.0.0.0 ads.example.com\n".to_string()));
/// ```
#[cfg_attr(test, automock)]
pub trait FileSystem: Send + Sync {
    /// Read file contents as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write bytes to a file in place, truncating it first.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Replace a file atomically: readers see either the old or the new content.
    /// The result has mode [`HOSTS_FILE_MODE`].
    fn write_atomic(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Copy a file, carrying permissions and timestamps over where possible.
    fn copy_preserving(&self, from: &Path, to: &Path) -> io::Result<u64>;
}

/// Real filesystem implementation using std::fs.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn write_atomic(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        // The temp file must live on the same filesystem for the rename
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut temp_file = NamedTempFile::new_in(parent)?;
        // Temp files are created 0600
        temp_file
            .as_file()
            .set_permissions(Permissions::from_mode(HOSTS_FILE_MODE))?;
        temp_file.write_all(contents)?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn copy_preserving(&self, from: &Path, to: &Path) -> io::Result<u64> {
        // std::fs::copy already carries the permission bits
        let bytes = std::fs::copy(from, to)?;

        let times = std::fs::metadata(from).and_then(|meta| {
            Ok(FileTimes::new()
                .set_accessed(meta.accessed()?)
                .set_modified(meta.modified()?))
        });
        let applied = times.and_then(|times| File::options().write(true).open(to)?.set_times(times));
        if let Err(e) = applied {
            debug!("Could not preserve timestamps on {:?}: {}", to, e);
        }

        Ok(bytes)
    }
}

static REAL_FS: RealFileSystem = RealFileSystem;

/// Get a reference to the global real filesystem instance.
pub fn real_fs() -> &'static RealFileSystem {
    &REAL_FS
}
