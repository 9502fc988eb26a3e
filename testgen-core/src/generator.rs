use crate::{write_pair, OutputPair};
use mtrandom::{Mt19937, UniformInt};
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

/// Smallest value either operand can take
pub const RANGE_MIN: u32 = 1;
/// Largest value either operand can take
pub const RANGE_MAX: u32 = 1000;

const OPERANDS: UniformInt = match UniformInt::new(RANGE_MIN, RANGE_MAX) {
    Ok(dist) => dist,
    Err(_) => panic!("operand range is inverted"),
};

/// Generator for random addition test cases
pub struct PairGenerator {
    rng: Mt19937,
    dist: UniformInt,
}

impl PairGenerator {
    /// Create a new pair generator with a given seed
    pub fn new(seed: u32) -> Self {
        PairGenerator {
            rng: Mt19937::new(seed),
            dist: OPERANDS,
        }
    }

    /// Draw `a`, then `b`, from the one stream
    pub fn generate(&mut self) -> OutputPair {
        let a = self.dist.sample(&mut self.rng);
        let b = self.dist.sample(&mut self.rng);
        OutputPair { a, b }
    }
}

/// Seed from the wall clock at microsecond resolution, truncated to 32 bits.
///
/// A clock set before the Unix epoch seeds with 0.
pub fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_micros() as u32)
        .unwrap_or(0)
}

/// Generate one pair from `seed` and write it to `out`.
pub fn run_with_seed<W: Write + ?Sized>(seed: u32, out: &mut W) -> io::Result<()> {
    let mut generator = PairGenerator::new(seed);
    let pair = generator.generate();
    write_pair(out, &pair)?;
    out.flush()
}

/// Print one time-seeded pair to standard output.
pub fn run() -> io::Result<()> {
    run_with_seed(time_seed(), &mut io::stdout().lock())
}
