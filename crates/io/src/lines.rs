//! Lazy line iteration over a text file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::IoError;

/// A lazy, forward-only iterator over the lines of a text file.
///
/// One line is read per `next` call through a buffered reader; the file is
/// never loaded whole. The underlying handle is dropped, closing the file,
/// at end of input or on the first read failure. Read failures are logged
/// and reported as end of input rather than propagated; only opening can
/// fail loudly.
#[derive(Debug)]
pub struct LineSource {
    reader: Option<BufReader<File>>,
}

impl LineSource {
    /// Opens the file at `path` for line iteration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileNotFound`] if `path` does not exist and
    /// [`IoError::Open`] if it exists but cannot be opened for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, IoError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = File::open(path).map_err(|e| IoError::Open {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "corpus opened");
        Ok(Self {
            reader: Some(BufReader::new(file)),
        })
    }
}

impl Iterator for LineSource {
    type Item = String;

    /// Returns the next line without its trailing newline.
    fn next(&mut self) -> Option<String> {
        let reader = self.reader.as_mut()?;
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                // End of input: release the handle.
                self.reader = None;
                None
            }
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(line)
            }
            Err(e) => {
                warn!(error = %e, "read failure treated as end of input");
                self.reader = None;
                None
            }
        }
    }
}
