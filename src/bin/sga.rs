//! Runs the default SGA and prints the best value found.
//!
//! Usage: `sga [seed]`. Set `RUST_LOG=debug` for per-generation records.

use std::process::ExitCode;
use u_sga::sga::{GenerationStats, SgaConfig, SgaRunner};

fn main() -> ExitCode {
    env_logger::init();

    let mut config = SgaConfig::default();
    if let Some(arg) = std::env::args().nth(1) {
        match arg.parse::<u64>() {
            Ok(seed) => config = config.with_seed(seed),
            Err(e) => {
                eprintln!("invalid seed {arg:?}: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let mut report = |stats: &GenerationStats| {
        println!(
            "generation {:>3}  size {:>2}  distinct {:>2}  max {:.6}",
            stats.generation,
            stats.next_generation_size,
            stats.distinct_count,
            stats.generation_max_fitness
        );
    };

    match SgaRunner::run_with_observer(&config, &mut report) {
        Ok(result) => {
            println!(
                "best fitness {:.6} at x = {:.6} ({})",
                result.best_fitness, result.best_phenotype, result.best_genotype
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("sga failed: {e}");
            ExitCode::FAILURE
        }
    }
}
