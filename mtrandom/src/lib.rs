// MT19937 is the 32-bit Mersenne Twister from Matsumoto & Nishimura (1998).
// Seeding follows init_genrand, so a given u32 seed reproduces the same stream
// as the reference C code and the C++ std::mt19937 engine.

use std::fmt;

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// Anything that can hand out uniformly distributed 32-bit words.
///
/// Distributions sample through this trait rather than a concrete engine,
/// so tests can feed them scripted values.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;
}

/// 32-bit Mersenne Twister.
#[derive(Clone)]
pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

impl Mt19937 {
    /// Seed used by the reference implementation when none is given.
    pub const DEFAULT_SEED: u32 = 5489;

    /// Create a new generator from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        let mut state = [0u32; N];
        state[0] = seed;
        for i in 1..N {
            let prev = state[i - 1];
            state[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }

        // index == N forces a twist on the first draw
        Self { state, index: N }
    }

    /// Regenerate the whole state block.
    fn twist(&mut self) {
        for k in 0..N {
            let y = (self.state[k] & UPPER_MASK) | (self.state[(k + 1) % N] & LOWER_MASK);
            let mut next = self.state[(k + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[k] = next;
        }
        self.index = 0;
    }

    /// Generate the next tempered output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }

        let mut y = self.state[self.index];
        self.index += 1;

        // Tempering
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    /// Advance the stream by `n` draws, throwing the values away.
    pub fn discard(&mut self, n: u64) {
        for _ in 0..n {
            self.next_u32();
        }
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl fmt::Debug for Mt19937 {
    // 624 words of state are noise in debug output
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt19937")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl RandomSource for Mt19937 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Mt19937::next_u32(self)
    }
}

// ============================================================================
// Uniform integer distribution
// ============================================================================

/// Error returned when a range has its bounds the wrong way round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeError {
    pub low: u32,
    pub high: u32,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid range [{}, {}]: low bound exceeds high bound",
            self.low, self.high
        )
    }
}

impl std::error::Error for RangeError {}

/// Uniform distribution over the closed interval `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformInt {
    low: u32,
    high: u32,
}

impl UniformInt {
    pub const fn new(low: u32, high: u32) -> Result<Self, RangeError> {
        if low > high {
            return Err(RangeError { low, high });
        }
        Ok(Self { low, high })
    }

    pub const fn low(&self) -> u32 {
        self.low
    }

    pub const fn high(&self) -> u32 {
        self.high
    }

    /// Draw one value from `rng`.
    ///
    /// Uses Lemire's nearly divisionless method, which is also what the C++
    /// standard library reaches for with 32-bit engines. Consumes one draw
    /// in the common case and more only when a draw lands in the biased zone.
    #[inline]
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> u32 {
        // Span of the full u32 domain does not fit in a u32
        let Some(span) = (self.high - self.low).checked_add(1) else {
            return rng.next_u32();
        };

        let mut m = (rng.next_u32() as u64) * (span as u64);
        let mut l = m as u32;

        if l < span {
            let t = span.wrapping_neg() % span;
            while l < t {
                m = (rng.next_u32() as u64) * (span as u64);
                l = m as u32;
            }
        }

        self.low + (m >> 32) as u32
    }
}
