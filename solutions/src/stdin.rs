//! Whitespace-separated token reading for judge-style solutions

use std::io::{self, BufRead};
use std::str::FromStr;

/// Reads tokens from standard input, one line at a time.
pub struct Scanner<R> {
    reader: R,
    tokens: Vec<String>,
}

impl Scanner<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            tokens: Vec::new(),
        }
    }

    /// Next token parsed as `T`; `Ok(None)` at end of input.
    pub fn next<T>(&mut self) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        while self.tokens.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.tokens = line.split_whitespace().rev().map(str::to_owned).collect();
        }
        match self.tokens.pop() {
            Some(token) => Ok(Some(token.parse()?)),
            None => Ok(None),
        }
    }

    /// Next token, failing at end of input
    pub fn read<T>(&mut self) -> Result<T, Box<dyn std::error::Error + Send + Sync>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.next()?.ok_or_else(|| "unexpected end of input".into())
    }
}
