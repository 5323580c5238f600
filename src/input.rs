//! Instruction file validation and line source

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, PathError, Result};

/// Check that `path` names an existing regular file.
pub fn validate_instructions_path(path: &Path) -> Result<&Path, PathError> {
    if !path.exists() {
        return Err(PathError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(PathError::NotAFile(path.to_path_buf()));
    }
    Ok(path)
}

/// Validate `path` and open it as a line source.
pub fn open_instructions(
    path: &Path,
    max_line_length: Option<usize>,
) -> Result<InstructionLines<BufReader<File>>> {
    let path = validate_instructions_path(path)?;
    let file = File::open(path)?;
    log::debug!("Reading instructions from {}", path.display());
    Ok(InstructionLines::new(BufReader::new(file), max_line_length))
}

/// Lazy, forward-only sequence of non-blank lines.
///
/// Yields the line with its terminator stripped. Lines longer than the
/// configured limit fail the sequence rather than being truncated.
pub struct InstructionLines<R> {
    reader: R,
    max_line_length: Option<usize>,
    line_number: usize,
    buf: String,
}

impl<R: BufRead> InstructionLines<R> {
    pub fn new(reader: R, max_line_length: Option<usize>) -> Self {
        Self {
            reader,
            max_line_length,
            line_number: 0,
            buf: String::new(),
        }
    }

    /// 1-based number of the last line read (blank lines included)
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for InstructionLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }
            self.line_number += 1;

            let line = self.buf.trim_end_matches(['\n', '\r']);
            if let Some(limit) = self.max_line_length
                && line.len() > limit
            {
                return Some(Err(Error::LineTooLong {
                    line_number: self.line_number,
                    limit,
                }));
            }
            if line.trim().is_empty() {
                continue;
            }
            return Some(Ok(line.to_string()));
        }
    }
}
