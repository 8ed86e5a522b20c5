//! pglz CLI - compress or decompress files in the pglz datum format.
//!
//! The format carries no framing: the raw length of a compressed file must
//! be supplied out-of-band when decompressing, exactly as the storage
//! layers that use this format keep it next to the datum.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};

use pglz::{compress, decompress, Strategy};

/// Compress or decompress pglz streams.
#[derive(Parser, Debug)]
#[command(name = "pglz")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress INPUT into OUTPUT; fails if the strategy refuses the input.
    Compress {
        /// Input file
        input: PathBuf,
        /// Output file
        output: PathBuf,
        /// Compression strategy
        #[arg(short, long, value_enum, default_value = "default")]
        strategy: StrategyArg,
    },
    /// Decompress INPUT into OUTPUT.
    Decompress {
        /// Input file (a raw pglz stream)
        input: PathBuf,
        /// Output file
        output: PathBuf,
        /// Raw (uncompressed) size of the stream, kept out-of-band
        #[arg(short, long)]
        raw_size: usize,
        /// Accept a partial result instead of requiring an exact stream
        #[arg(long)]
        partial: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    /// Gate small inputs, require 25% savings
    Default,
    /// Compress anything that saves at least a byte
    Always,
    /// Default gates plus skip-after-match for throughput
    Skip,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Default => Strategy::DEFAULT,
            StrategyArg::Always => Strategy::ALWAYS,
            StrategyArg::Skip => Strategy::SKIP,
        }
    }
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("pglz: {msg}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), String> {
    match args.command {
        Command::Compress {
            input,
            output,
            strategy,
        } => {
            let data = fs::read(&input).map_err(|e| format!("{}: {e}", input.display()))?;

            let start = Instant::now();
            let packed = compress(&data, &strategy.into())
                .map_err(|e| format!("{}: {e}", input.display()))?;
            let elapsed = start.elapsed();

            fs::write(&output, &packed).map_err(|e| format!("{}: {e}", output.display()))?;

            println!(
                "{} -> {}: {} -> {} bytes ({:.1}%) in {:.2?}",
                input.display(),
                output.display(),
                data.len(),
                packed.len(),
                100.0 * packed.len() as f64 / data.len().max(1) as f64,
                elapsed
            );
            println!("note: raw size {} must be stored out-of-band", data.len());
            Ok(())
        }
        Command::Decompress {
            input,
            output,
            raw_size,
            partial,
        } => {
            let packed = fs::read(&input).map_err(|e| format!("{}: {e}", input.display()))?;

            let start = Instant::now();
            let data = decompress(&packed, raw_size, !partial)
                .map_err(|e| format!("{}: {e}", input.display()))?;
            let elapsed = start.elapsed();

            fs::write(&output, &data).map_err(|e| format!("{}: {e}", output.display()))?;

            println!(
                "{} -> {}: {} -> {} bytes in {:.2?}",
                input.display(),
                output.display(),
                packed.len(),
                data.len(),
                elapsed
            );
            Ok(())
        }
    }
}
