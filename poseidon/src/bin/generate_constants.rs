//! Regenerates the canonical Hades round-constant table.
//!
//! Constant `i` is `sha256("{name}{i}")` read as a big-endian integer and
//! reduced mod p; round `r` uses constants `width * r .. width * (r + 1)`.

use std::fmt::Write;

use anyhow::{ensure, Result};
use felt252_field::Felt;
use log::{info, LevelFilter};
use sha2::{Digest, Sha256};
use structopt::StructOpt;

#[derive(Clone, StructOpt, Debug)]
#[structopt(name = "generate_constants")]
struct Options {
    /// Verbosity level
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,

    /// Seed prefix hashed together with the constant index
    #[structopt(long, default_value = "Hades")]
    name: String,

    /// Number of rounds, full and partial
    #[structopt(long, default_value = "91")]
    rounds: usize,

    /// State width
    #[structopt(long, default_value = "3")]
    width: usize,
}

fn round_constant(name: &str, index: usize) -> Result<Felt> {
    let digest = Sha256::digest(format!("{name}{index}").as_bytes());
    Ok(Felt::from_be_bytes(&digest)?)
}

fn render(options: &Options) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "#[rustfmt::skip]")?;
    writeln!(
        out,
        "pub(crate) const ROUND_CONSTANTS_CANONICAL: [[[u64; 4]; {}]; {}] = [",
        options.width, options.rounds
    )?;
    for round in 0..options.rounds {
        writeln!(out, "    [")?;
        for column in 0..options.width {
            let limbs = round_constant(&options.name, options.width * round + column)?
                .to_canonical()
                .limbs;
            writeln!(
                out,
                "        [{:#018x}, {:#018x}, {:#018x}, {:#018x}],",
                limbs[0], limbs[1], limbs[2], limbs[3]
            )?;
        }
        writeln!(out, "    ],")?;
    }
    writeln!(out, "];")?;
    Ok(out)
}

fn main() -> Result<()> {
    let options = Options::from_args();

    let log_level = match options.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .try_init()?;

    ensure!(options.width >= 2, "width must be at least 2, got {}", options.width);
    ensure!(options.rounds > 0, "at least one round is required");

    info!(
        "Generating {} round constants from seed prefix {:?}",
        options.rounds * options.width,
        options.name
    );
    let table = render(&options)?;
    print!("{table}");
    info!("Wrote {} rows", options.rounds);
    Ok(())
}
