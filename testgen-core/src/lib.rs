mod generator;
mod pair;

pub use generator::{run, run_with_seed, time_seed, PairGenerator, RANGE_MAX, RANGE_MIN};
pub use pair::{write_pair, OutputPair};
