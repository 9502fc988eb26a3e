use clap::Parser;
use std::io;

#[derive(Parser)]
#[command(name = "testgen")]
#[command(version)]
#[command(
    about = "Print one random addition test case: two integers in [1, 1000]",
    long_about = None
)]
struct Args {
    /// Leftover arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _ignored: Vec<String>,
}

fn main() -> io::Result<()> {
    Args::parse();

    // Seeded from the current time on every run
    testgen_core::run()
}
