//! Secure digits CLI
//!
//! Without arguments runs the interactive menu. With `--algorithm` and
//! `--digits` prints a single batch.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use secure_digits::core::stats::{expected_probability, DigitTally};
use secure_digits::core::{generate_batch_with, Algorithm, BATCH_SIZE, MAX_DIGITS};
use secure_digits::crypto::random::OsSecureRandom;
use secure_digits::menu::{write_batch, Session};

/// Print batches of random decimal digits drawn from the OS CSPRNG
#[derive(Parser)]
#[command(name = "secure-digits")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Algorithm label (ChaCha20, AES-CTR, 3DES)
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Number of digits per draw (1-100)
    #[arg(short, long, requires = "algorithm", allow_negative_numbers = true)]
    digits: Option<i64>,

    /// Tally digit frequencies over this many batches instead of printing them
    #[arg(long, requires = "algorithm", conflicts_with = "digits")]
    tally: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only digits and prompts
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    match (cli.algorithm, cli.digits, cli.tally) {
        (Some(algorithm), _, Some(batches)) => tally(algorithm, batches),
        (Some(algorithm), Some(digits), None) => one_shot(algorithm, digits),
        (Some(_), None, None) => {
            anyhow::bail!("--algorithm needs either --digits or --tally")
        }
        (None, ..) => {
            let stdin = io::stdin();
            let mut session = Session::new(stdin.lock(), io::stdout(), OsSecureRandom::new());
            Ok(session.run()?.exit_code())
        }
    }
}

fn one_shot(algorithm: Algorithm, digits: i64) -> anyhow::Result<u8> {
    let batch = generate_batch_with(&mut OsSecureRandom::new(), algorithm.label(), digits)?;
    write_batch(&mut io::stdout().lock(), algorithm.label(), &batch)?;
    Ok(0)
}

fn tally(algorithm: Algorithm, batches: u64) -> anyhow::Result<u8> {
    let mut rng = OsSecureRandom::new();
    let mut tally = DigitTally::new();
    for _ in 0..batches {
        let batch = generate_batch_with(&mut rng, algorithm.label(), MAX_DIGITS as i64)?;
        tally.extend(&batch);
    }

    let mut out = io::stdout().lock();
    writeln!(
        out,
        "{} batches of {} x {} digits using {} ({} digits)",
        batches,
        BATCH_SIZE,
        MAX_DIGITS,
        algorithm,
        tally.total()
    )?;
    writeln!(out, "digit  count      observed  expected")?;
    for d in 0..10u8 {
        writeln!(
            out,
            "{:>5}  {:>9}  {:>8.5}  {:>8.5}",
            d,
            tally.count(d),
            tally.frequency(d),
            expected_probability(d)
        )?;
    }
    writeln!(out, "max deviation: {:.5}", tally.max_deviation())?;
    Ok(0)
}
