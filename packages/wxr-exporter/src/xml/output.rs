//! Output targets for the export document.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::PathBuf;

use crate::error::{ExportError, Result};

/// Destination sentinel that selects standard output.
pub const STDOUT_SENTINEL: &str = "-";

/// Where the export document is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// A file, created or truncated on open.
    File(PathBuf),
    /// The process's standard output.
    Stdout,
    /// An in-memory buffer returned as a string when the export finishes.
    Memory,
}

impl OutputTarget {
    /// Map an optional destination to a target.
    ///
    /// `None` selects the in-memory buffer and `"-"` selects standard output.
    ///
    /// # Examples
    /// ```
    /// use wxr_exporter::xml::OutputTarget;
    ///
    /// assert_eq!(OutputTarget::from_destination(None), OutputTarget::Memory);
    /// assert_eq!(OutputTarget::from_destination(Some("-")), OutputTarget::Stdout);
    /// assert_eq!(
    ///     OutputTarget::from_destination(Some("site.xml")),
    ///     OutputTarget::File("site.xml".into())
    /// );
    /// ```
    #[must_use]
    pub fn from_destination(destination: Option<&str>) -> Self {
        match destination {
            None => Self::Memory,
            Some(STDOUT_SENTINEL) => Self::Stdout,
            Some(path) => Self::File(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdout => f.write_str("<stdout>"),
            Self::Memory => f.write_str("<memory>"),
        }
    }
}

/// What a finished export yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutput {
    /// Number of bytes written to a file or standard output.
    Written(u64),
    /// The complete document held in memory.
    Document(String),
}

impl ExportOutput {
    /// The in-memory document, if the export targeted memory.
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        match self {
            Self::Document(doc) => Some(doc),
            Self::Written(_) => None,
        }
    }

    #[must_use]
    pub fn into_document(self) -> Option<String> {
        match self {
            Self::Document(doc) => Some(doc),
            Self::Written(_) => None,
        }
    }
}

enum SinkInner {
    File(BufWriter<File>),
    Stdout(BufWriter<Stdout>),
    Memory(Vec<u8>),
}

/// An opened output target that counts the bytes written to it.
///
/// Buffered sinks flush when dropped, so the handle is released on every
/// exit path, including errors in the middle of a document.
pub struct Sink {
    inner: SinkInner,
    written: u64,
}

impl Sink {
    /// Open a target for writing.
    pub fn open(target: &OutputTarget) -> Result<Self> {
        let inner = match target {
            OutputTarget::File(path) => {
                let file = File::create(path).map_err(|source| ExportError::Open {
                    target: target.to_string(),
                    source,
                })?;
                SinkInner::File(BufWriter::new(file))
            }
            OutputTarget::Stdout => SinkInner::Stdout(BufWriter::new(io::stdout())),
            OutputTarget::Memory => SinkInner::Memory(Vec::new()),
        };
        Ok(Self { inner, written: 0 })
    }

    /// Bytes accepted so far.
    #[must_use]
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// Flush and turn the sink into the export result.
    pub fn finish(mut self) -> Result<ExportOutput> {
        self.flush()?;
        match self.inner {
            SinkInner::Memory(buffer) => String::from_utf8(buffer)
                .map(ExportOutput::Document)
                .map_err(|e| ExportError::Xml(e.to_string())),
            SinkInner::File(_) | SinkInner::Stdout(_) => Ok(ExportOutput::Written(self.written)),
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = match &mut self.inner {
            SinkInner::File(w) => w.write(buf)?,
            SinkInner::Stdout(w) => w.write(buf)?,
            SinkInner::Memory(w) => w.write(buf)?,
        };
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.inner {
            SinkInner::File(w) => w.flush(),
            SinkInner::Stdout(w) => w.flush(),
            SinkInner::Memory(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_returns_document() {
        let mut sink = Sink::open(&OutputTarget::Memory).unwrap();
        sink.write_all(b"<rss/>").unwrap();
        assert_eq!(sink.bytes_written(), 6);
        assert_eq!(
            sink.finish().unwrap(),
            ExportOutput::Document("<rss/>".to_string())
        );
    }

    #[test]
    fn test_file_sink_counts_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xml");
        let mut sink = Sink::open(&OutputTarget::File(path.clone())).unwrap();
        sink.write_all(b"hello").unwrap();
        assert_eq!(sink.finish().unwrap(), ExportOutput::Written(5));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }

    #[test]
    fn test_open_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.xml");
        let result = Sink::open(&OutputTarget::File(path));
        assert!(matches!(result, Err(ExportError::Open { .. })));
    }
}
