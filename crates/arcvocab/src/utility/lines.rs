//! # Numbered Line Reader

use std::io::BufRead;

use crate::errors::{CorpusError, CorpusResult};

const UTF8_BOM: &str = "\u{feff}";

/// Iterator over the lines of a [`BufRead`], with 1-based line numbers.
///
/// * Line endings (``\n`` or ``\r\n``) are stripped.
/// * A leading byte-order mark on the first line is stripped.
/// * A line which is not valid UTF-8 is a [`CorpusError::Format`] error.
pub struct NumberedLines<R: BufRead> {
    reader: R,
    line_no: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> NumberedLines<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            buf: Vec::new(),
        }
    }

    /// The number of the last line returned.
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> Iterator for NumberedLines<R> {
    type Item = CorpusResult<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(err) => return Some(Err(err.into())),
        }
        self.line_no += 1;

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        let line_no = self.line_no;
        let line = match String::from_utf8(std::mem::take(&mut self.buf)) {
            Ok(line) => line,
            Err(err) => {
                return Some(Err(CorpusError::format(
                    line_no,
                    format!("invalid UTF-8: {}", err.utf8_error()),
                )));
            }
        };

        let line = match line.strip_prefix(UTF8_BOM) {
            Some(rest) if line_no == 1 => rest.to_string(),
            _ => line,
        };

        Some(Ok((line_no, line)))
    }
}
