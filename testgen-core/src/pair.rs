use std::fmt;
use std::io::{self, Write};

/// One generated test case: two operands drawn independently from the same stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutputPair {
    pub a: u32,
    pub b: u32,
}

impl OutputPair {
    pub fn new(a: u32, b: u32) -> Self {
        OutputPair { a, b }
    }
}

/// Format: "<a> <b>", no trailing newline
impl fmt::Display for OutputPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.a, self.b)
    }
}

/// Write a pair as one newline-terminated line.
pub fn write_pair<W: Write + ?Sized>(out: &mut W, pair: &OutputPair) -> io::Result<()> {
    writeln!(out, "{}", pair)
}
