//! Raw Sample Export
//!
//! Writes one decimal nanosecond value per line, no header, to
//! `runtimes_{timestamp}.csv`. The file is held under an exclusive advisory
//! lock while it is written; if another writer already holds the lock the
//! export is abandoned without touching the file.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::os::fd::AsRawFd;
use std::path::{Path, PathBuf};

/// What happened to an export attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Samples were written to this path
    Saved(PathBuf),
    /// Another writer holds the lock on this path; nothing was written
    LockContended(PathBuf),
}

/// `runtimes_{timestamp}.csv`
pub fn export_file_name(timestamp: i64) -> String {
    format!("runtimes_{timestamp}.csv")
}

/// Exclusive `flock` held until dropped
struct FileLock<'a> {
    file: &'a File,
}

impl<'a> FileLock<'a> {
    /// Try to take the lock without blocking; `None` if someone else holds it.
    fn try_exclusive(file: &'a File) -> io::Result<Option<Self>> {
        let ret = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) };
        if ret == 0 {
            return Ok(Some(Self { file }));
        }
        let err = io::Error::last_os_error();
        if err.kind() == io::ErrorKind::WouldBlock {
            Ok(None)
        } else {
            Err(err)
        }
    }

    fn release(self) -> io::Result<()> {
        let ret = unsafe { libc::flock(self.file.as_raw_fd(), libc::LOCK_UN) };
        std::mem::forget(self);
        if ret == 0 {
            Ok(())
        } else {
            Err(io::Error::last_os_error())
        }
    }
}

impl Drop for FileLock<'_> {
    fn drop(&mut self) {
        unsafe {
            libc::flock(self.file.as_raw_fd(), libc::LOCK_UN);
        }
    }
}

/// Save `samples` into `dir`, in measurement order.
pub fn save_samples(dir: &Path, samples: &[u64], timestamp: i64) -> io::Result<ExportOutcome> {
    let path = dir.join(export_file_name(timestamp));
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&path)?;

    let Some(lock) = FileLock::try_exclusive(&file)? else {
        tracing::warn!(path = %path.display(), "export file is locked by another writer");
        return Ok(ExportOutcome::LockContended(path));
    };

    // Only truncate once the lock is ours.
    file.set_len(0)?;
    let mut writer = BufWriter::new(&file);
    for nanos in samples {
        writeln!(writer, "{nanos}")?;
    }
    writer.flush()?;
    drop(writer);
    file.sync_all()?;
    lock.release()?;

    tracing::debug!(path = %path.display(), samples = samples.len(), "exported samples");
    Ok(ExportOutcome::Saved(path))
}
