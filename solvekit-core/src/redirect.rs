//! Standard Stream Redirection
//!
//! Solutions talk to the process's real standard streams, so redirection has to
//! happen at the file descriptor level rather than by swapping Rust handles.
//!
//! - [`OutputSuppression`] points fd 1 and fd 2 at `/dev/null` for the duration of
//!   a timed call and puts the originals back when restored or dropped.
//! - [`StdinFeed`] keeps an input buffer in an in-memory file and installs it as
//!   fd 0 before every call, rewound to the start.
//!
//! Both guards mutate process-wide state. Only one of each may be alive at a time.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd, RawFd};

const NULL_DEVICE: &str = "/dev/null";

/// Duplicate a descriptor, returning an owned copy.
fn dup(fd: RawFd) -> io::Result<OwnedFd> {
    let ret = unsafe { libc::dup(fd) };
    if ret < 0 {
        return Err(io::Error::last_os_error());
    }
    // SAFETY: `ret` is a freshly duplicated descriptor nobody else owns.
    Ok(unsafe { OwnedFd::from_raw_fd(ret) })
}

/// Make `target` refer to the same open file as `source`.
fn dup2(source: RawFd, target: RawFd) -> io::Result<()> {
    loop {
        let ret = unsafe { libc::dup2(source, target) };
        if ret >= 0 {
            return Ok(());
        }
        let err = io::Error::last_os_error();
        if err.kind() != io::ErrorKind::Interrupted {
            return Err(err);
        }
    }
}

/// Guard that silences standard output and standard error.
///
/// Buffered Rust output is flushed before the swap so harness output written
/// earlier is not lost, and flushed again before restoring so anything the
/// solution left in the buffer is discarded instead of leaking afterwards.
#[derive(Debug)]
pub struct OutputSuppression {
    saved_stdout: Option<OwnedFd>,
    saved_stderr: Option<OwnedFd>,
}

impl OutputSuppression {
    /// Redirect fd 1 and fd 2 to the null device.
    pub fn engage() -> io::Result<Self> {
        io::stdout().flush()?;
        io::stderr().flush()?;

        let sink = OpenOptions::new().write(true).open(NULL_DEVICE)?;
        let mut guard = Self {
            saved_stdout: Some(dup(libc::STDOUT_FILENO)?),
            saved_stderr: None,
        };
        guard.saved_stderr = Some(dup(libc::STDERR_FILENO)?);

        // On failure the guard drops here and restores whatever was swapped.
        dup2(sink.as_raw_fd(), libc::STDOUT_FILENO)?;
        dup2(sink.as_raw_fd(), libc::STDERR_FILENO)?;
        Ok(guard)
    }

    /// Put the original descriptors back.
    pub fn restore(mut self) -> io::Result<()> {
        self.restore_inner()
    }

    fn restore_inner(&mut self) -> io::Result<()> {
        // Discard whatever the solution left buffered.
        let _ = io::stdout().flush();

        let mut result = Ok(());
        for (saved, target) in [
            (self.saved_stdout.take(), libc::STDOUT_FILENO),
            (self.saved_stderr.take(), libc::STDERR_FILENO),
        ] {
            if let Some(fd) = saved {
                if let Err(e) = dup2(fd.as_raw_fd(), target) {
                    result = result.and(Err(e));
                }
            }
        }
        result
    }
}

impl Drop for OutputSuppression {
    fn drop(&mut self) {
        let _ = self.restore_inner();
    }
}

/// Cached input installed as the process's standard input.
#[derive(Debug)]
pub struct StdinFeed {
    source: File,
    len: u64,
    saved_stdin: Option<OwnedFd>,
}

impl StdinFeed {
    /// Copy `bytes` into an in-memory file and remember the current fd 0.
    ///
    /// Standard input is not touched until [`StdinFeed::refresh`] is called.
    pub fn new(bytes: &[u8]) -> io::Result<Self> {
        let mut source = backing_file()?;
        source.write_all(bytes)?;
        source.flush()?;
        Ok(Self {
            source,
            len: bytes.len() as u64,
            saved_stdin: Some(dup(libc::STDIN_FILENO)?),
        })
    }

    /// Size of the cached input in bytes
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Whether the cached input is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Install the full buffer as fd 0, positioned at the start.
    ///
    /// Must be called before every invocation: a solution may have consumed
    /// the stream, and Rust's global stdin buffer may still hold bytes from
    /// the previous call.
    pub fn refresh(&mut self) -> io::Result<()> {
        discard_buffered_stdin()?;
        // fd 0 shares this file's offset once duplicated onto it.
        self.source.seek(SeekFrom::Start(0))?;
        dup2(self.source.as_raw_fd(), libc::STDIN_FILENO)
    }

    /// Restore the original standard input.
    pub fn release(mut self) -> io::Result<()> {
        self.restore_inner()
    }

    fn restore_inner(&mut self) -> io::Result<()> {
        let Some(saved) = self.saved_stdin.take() else {
            return Ok(());
        };
        let drained = discard_buffered_stdin();
        dup2(saved.as_raw_fd(), libc::STDIN_FILENO)?;
        drained
    }
}

impl Drop for StdinFeed {
    fn drop(&mut self) {
        let _ = self.restore_inner();
    }
}

/// Empty Rust's process-wide stdin buffer.
///
/// fd 0 is pointed at the null device first so the read stops at whatever was
/// already buffered instead of blocking on the real stream.
fn discard_buffered_stdin() -> io::Result<()> {
    let null = File::open(NULL_DEVICE)?;
    dup2(null.as_raw_fd(), libc::STDIN_FILENO)?;
    let mut leftover = Vec::new();
    io::stdin().lock().read_to_end(&mut leftover)?;
    if !leftover.is_empty() {
        tracing::trace!(bytes = leftover.len(), "discarded unread stdin bytes");
    }
    Ok(())
}

#[cfg(target_os = "linux")]
fn backing_file() -> io::Result<File> {
    let fd = unsafe { libc::memfd_create(c"solvekit-stdin".as_ptr(), libc::MFD_CLOEXEC) };
    if fd < 0 {
        return Err(io::Error::last_os_error());
    }
    // SAFETY: memfd_create returned a new descriptor we now own.
    Ok(unsafe { File::from_raw_fd(fd) })
}

#[cfg(not(target_os = "linux"))]
fn backing_file() -> io::Result<File> {
    tempfile::tempfile()
}
