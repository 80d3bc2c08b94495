//! truerng CLI
//!
//! Entry point for the `truerng` command-line tool. Prints JSON to stdout.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;
use truerng::protocol::VerifySignature;
use truerng::{
    BlobFormat, Blobs, ClientConfig, DecimalFractions, Gaussians, Integers, RawPayload, SignedData,
    Strings, TrueRng, Uuids,
};

const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Parser)]
#[command(name = "truerng")]
#[command(about = "True random numbers from RANDOM.org", version)]
struct Cli {
    /// Path to config file (default: ~/.config/truerng/config.toml)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Random integers in [min, max]
    Integers {
        #[arg(short, default_value_t = 1)]
        n: u32,
        #[arg(long, allow_negative_numbers = true)]
        min: i64,
        #[arg(long, allow_negative_numbers = true)]
        max: i64,
        /// Draw without replacement (all values distinct)
        #[arg(long)]
        unique: bool,
        /// Request a signed result
        #[arg(long)]
        signed: bool,
    },

    /// Random decimal fractions in [0, 1)
    Decimals {
        #[arg(short, default_value_t = 1)]
        n: u32,
        #[arg(long, default_value_t = 8)]
        places: u32,
        #[arg(long)]
        unique: bool,
        #[arg(long)]
        signed: bool,
    },

    /// Samples from a Gaussian distribution
    Gaussians {
        #[arg(short, default_value_t = 1)]
        n: u32,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        mean: f64,
        #[arg(long, default_value_t = 1.0)]
        stddev: f64,
        #[arg(long, default_value_t = 8)]
        digits: u32,
        #[arg(long)]
        signed: bool,
    },

    /// Random strings over an alphabet
    Strings {
        #[arg(short, default_value_t = 1)]
        n: u32,
        #[arg(long)]
        length: u32,
        #[arg(long, default_value = ALPHANUMERIC)]
        characters: String,
        #[arg(long)]
        unique: bool,
        #[arg(long)]
        signed: bool,
    },

    /// Version 4 UUIDs
    Uuids {
        #[arg(short, default_value_t = 1)]
        n: u32,
        #[arg(long)]
        signed: bool,
    },

    /// Random binary blobs
    Blobs {
        #[arg(short, default_value_t = 1)]
        n: u32,
        /// Size in bits (multiple of 8)
        #[arg(long)]
        size: u32,
        /// base64 or hex
        #[arg(long, default_value = "base64")]
        format: BlobFormat,
        #[arg(long)]
        signed: bool,
    },

    /// Show quota of the configured API key
    Usage,

    /// Verify a signed result previously printed with --signed
    Verify {
        /// File holding the signed output
        file: PathBuf,
    },
}

/// What `--signed` prints; `random` and `signature` are what `verify` reads back.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignedOutput<'a, T> {
    data: &'a [T],
    random: &'a RawPayload,
    signature: &'a str,
    hashed_api_key: &'a str,
    serial_number: i64,
    completion_time: &'a str,
}

impl<'a, T> From<&'a SignedData<T>> for SignedOutput<'a, T> {
    fn from(signed: &'a SignedData<T>) -> Self {
        Self {
            data: &signed.data,
            random: &signed.raw,
            signature: &signed.signature,
            hashed_api_key: &signed.hashed_api_key,
            serial_number: signed.serial_number,
            completion_time: &signed.completion_time,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match ClientConfig::resolve(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    };

    let rng = match TrueRng::from_config(&config) {
        Ok(rng) => rng,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&rng, cli.command) {
        eprintln!("Error (code {}): {}", e.code(), e.message());
        process::exit(1);
    }
}

fn emit<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

fn emit_signed<T: Serialize>(signed: &SignedData<T>) {
    emit(&SignedOutput::from(signed));
}

fn run(rng: &TrueRng, command: Commands) -> truerng::Result<()> {
    match command {
        Commands::Integers { n, min, max, unique, signed } => {
            let params = Integers::new(n, min, max).with_replacement(!unique);
            if signed {
                emit_signed(&rng.generate_signed_integers(&params)?);
            } else {
                emit(&rng.generate_integers(&params)?);
            }
        }
        Commands::Decimals { n, places, unique, signed } => {
            let params = DecimalFractions::new(n, places).with_replacement(!unique);
            if signed {
                emit_signed(&rng.generate_signed_decimal_fractions(&params)?);
            } else {
                emit(&rng.generate_decimal_fractions(&params)?);
            }
        }
        Commands::Gaussians { n, mean, stddev, digits, signed } => {
            let params = Gaussians::new(n, mean, stddev, digits);
            if signed {
                emit_signed(&rng.generate_signed_gaussians(&params)?);
            } else {
                emit(&rng.generate_gaussians(&params)?);
            }
        }
        Commands::Strings { n, length, characters, unique, signed } => {
            let params = Strings::new(n, length, characters).with_replacement(!unique);
            if signed {
                emit_signed(&rng.generate_signed_strings(&params)?);
            } else {
                emit(&rng.generate_strings(&params)?);
            }
        }
        Commands::Uuids { n, signed } => {
            let params = Uuids::new(n);
            if signed {
                emit_signed(&rng.generate_signed_uuids(&params)?);
            } else {
                emit(&rng.generate_uuids(&params)?);
            }
        }
        Commands::Blobs { n, size, format, signed } => {
            let params = Blobs::new(n, size).with_format(format);
            if signed {
                emit_signed(&rng.generate_signed_blobs(&params)?);
            } else {
                emit(&rng.generate_blobs(&params)?);
            }
        }
        Commands::Usage => {
            emit(&rng.get_usage()?);
        }
        Commands::Verify { file } => {
            let content = match std::fs::read_to_string(&file) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error reading {}: {}", file.display(), e);
                    process::exit(1);
                }
            };
            let saved: VerifySignature = match serde_json::from_str(&content) {
                Ok(v) => v,
                Err(e) => {
                    eprintln!("Error parsing {}: {}", file.display(), e);
                    process::exit(1);
                }
            };
            let authentic = rng.verify_signature(&saved.random, &saved.signature)?;
            emit(&serde_json::json!({ "authentic": authentic }));
        }
    }
    Ok(())
}
