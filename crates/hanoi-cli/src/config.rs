// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Problem-size input.
//!
//! The input file names the largest number of disks to solve. The first
//! whitespace-delimited token is read as that number; everything after `#` on
//! a line is a comment. Sizes `1..=N` are then solved by every selected
//! algorithm. Validation happens here so the solvers can assume `N >= 1`.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};
use thiserror::Error;

/// Failures while reading the problem size.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input contains no problem size")]
    Missing,
    #[error("could not parse token '{token}' as an integer")]
    Parse { token: String },
    #[error("problem size must be a positive integer, got {value}")]
    NonPositive { value: i64 },
    #[error("problem size {value} is larger than {}", u32::MAX)]
    TooLarge { value: i64 },
}

/// Reads the maximum problem size from a text source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProblemSizeLoader;

impl ProblemSizeLoader {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Reads the problem size from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<u32, ConfigError> {
        for line in rdr.lines() {
            let line = line?;
            let content = match line.split_once('#') {
                Some((before, _)) => before,
                None => line.as_str(),
            };
            if let Some(token) = content.split_whitespace().next() {
                return parse_size(token);
            }
        }
        Err(ConfigError::Missing)
    }

    /// Reads the problem size from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<u32, ConfigError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Reads the problem size from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<u32, ConfigError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Reads the problem size from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<u32, ConfigError> {
        self.from_reader(s.as_bytes())
    }
}

fn parse_size(token: &str) -> Result<u32, ConfigError> {
    let value: i64 = token.parse().map_err(|_| ConfigError::Parse {
        token: token.to_owned(),
    })?;
    if value < 1 {
        return Err(ConfigError::NonPositive { value });
    }
    u32::try_from(value).map_err(|_| ConfigError::TooLarge { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_first_token() {
        let loader = ProblemSizeLoader::new();
        assert_eq!(loader.from_str("7").unwrap(), 7);
        assert_eq!(loader.from_str("  12 99\n3").unwrap(), 12);
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let data = "# largest number of disks\n\n   # still nothing\n  5 # five\n";
        assert_eq!(ProblemSizeLoader::new().from_str(data).unwrap(), 5);
    }

    #[test]
    fn test_empty_input_is_missing() {
        let res = ProblemSizeLoader::new().from_str("  \n# only a comment\n");
        assert!(matches!(res, Err(ConfigError::Missing)));
    }

    #[test]
    fn test_non_integer_token() {
        match ProblemSizeLoader::new().from_str("seven") {
            Err(ConfigError::Parse { token }) => assert_eq!(token, "seven"),
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_and_negative_are_rejected() {
        let loader = ProblemSizeLoader::new();
        assert!(matches!(
            loader.from_str("0"),
            Err(ConfigError::NonPositive { value: 0 })
        ));
        assert!(matches!(
            loader.from_str("-3"),
            Err(ConfigError::NonPositive { value: -3 })
        ));
    }

    #[test]
    fn test_too_large_is_rejected() {
        let res = ProblemSizeLoader::new().from_str("4294967296");
        assert!(matches!(
            res,
            Err(ConfigError::TooLarge { value: 4294967296 })
        ));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "4").unwrap();
        assert_eq!(ProblemSizeLoader::new().from_path(file.path()).unwrap(), 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let res = ProblemSizeLoader::new().from_path(dir.path().join("absent.txt"));
        assert!(matches!(res, Err(ConfigError::Io(_))));
    }
}
