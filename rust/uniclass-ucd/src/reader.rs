//! Streaming reader over a PPUCD dump.

use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
};

use uniclass_common::{Error, Result};

use crate::Record;

/// Options controlling how a [`RecordReader`] validates its input.
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    /// Reject a `cp`/`block` record whose start lies before the start of the
    /// previous record. Override semantics rely on nested records following
    /// the record they refine.
    pub require_sorted: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        ReaderOptions {
            require_sorted: true,
        }
    }
}

/// Iterator yielding the `cp` and `block` records of a PPUCD dump, in input
/// order.
///
/// Comments, blank lines and other record kinds are skipped. The first error
/// (IO failure, malformed line, unsorted input) is yielded once and ends the
/// iteration.
pub struct RecordReader<R> {
    lines: Lines<R>,
    options: ReaderOptions,
    line: usize,
    previous_start: Option<u32>,
    skipped: usize,
    done: bool,
}

impl RecordReader<BufReader<File>> {
    /// Opens the PPUCD file at `path`.
    pub fn open(path: impl AsRef<Path>, options: ReaderOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path.display().to_string(), e))?;
        Ok(RecordReader::new(BufReader::new(file), options))
    }
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R, options: ReaderOptions) -> Self {
        RecordReader {
            lines: reader.lines(),
            options,
            line: 0,
            previous_start: None,
            skipped: 0,
            done: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Number of consumed lines that did not produce a record.
    pub fn lines_skipped(&self) -> usize {
        self.skipped
    }

    fn read_next(&mut self) -> Option<Result<Record>> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(e) => {
                    return Some(Err(Error::io(format!("line {}", self.line + 1), e)));
                }
            };
            self.line += 1;

            let record = match Record::parse(&text, self.line) {
                Ok(Some(record)) => record,
                Ok(None) => {
                    self.skipped += 1;
                    continue;
                }
                Err(e) => return Some(Err(e)),
            };

            let start = record.range.start();
            if let Some(previous) = self.previous_start {
                if self.options.require_sorted && start < previous {
                    return Some(Err(Error::unsorted_input(self.line, start, previous)));
                }
            }
            self.previous_start = Some(start);
            return Some(Ok(record));
        }
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let next = self.read_next();
        if !matches!(next, Some(Ok(_))) {
            self.done = true;
        }
        next
    }
}
