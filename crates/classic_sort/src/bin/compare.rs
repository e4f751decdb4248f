use std::error::Error;

use clap::Parser;
use classic_sort::harness::{self, DEFAULT_CONFIG, HarnessConfig};

/// Checks every bounded sort against the std sort on four input
/// distributions and prints the mean time per run in seconds.
#[derive(Debug, Parser)]
#[command(name = "compare")]
struct Args {
    /// Length of the generated lists.
    #[arg(long, default_value_t = DEFAULT_CONFIG.size)]
    size: usize,
    /// Largest random key.
    #[arg(long, default_value_t = DEFAULT_CONFIG.max_value)]
    max_value: u32,
    /// Adjacent swaps used for the almost sorted list.
    #[arg(long, default_value_t = DEFAULT_CONFIG.swaps)]
    swaps: usize,
    /// Timed runs per algorithm.
    #[arg(long, default_value_t = DEFAULT_CONFIG.count)]
    count: u32,
    #[arg(long, default_value_t = DEFAULT_CONFIG.seed)]
    seed: u64,
}

impl From<Args> for HarnessConfig {
    fn from(args: Args) -> Self {
        Self {
            size: args.size,
            max_value: args.max_value,
            swaps: args.swaps,
            count: args.count,
            seed: args.seed,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = HarnessConfig::from(Args::parse());
    for report in harness::run_all(&config)? {
        print!("{report}");
    }
    Ok(())
}
