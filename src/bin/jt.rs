//! jt: Convert JSON to MySQL JSON_TABLE format
//!
//! Usage:
//!   # Read from file, output to stdout
//!   jt data.json
//!
//!   # Read from stdin, output to stdout
//!   echo '[{"id": 1, "name": "Alice"}]' | jt
//!
//!   # Collated string columns
//!   jt -c utf8mb4_general_ci data.json

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use jt::{convert, Options};
use std::fs;
use std::io::{stdin, Read};

#[derive(Parser, Debug)]
#[command(name = "jt")]
#[command(about = "Convert JSON to MySQL JSON_TABLE format", long_about = None)]
struct Args {
    /// Input file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Collation for string columns
    #[arg(long, short = 'c')]
    collation: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let input = match &args.input {
        Some(path) => fs::read(path).with_context(|| format!("reading {path}"))?,
        None => {
            let mut buf = Vec::new();
            stdin().read_to_end(&mut buf).context("reading stdin")?;
            buf
        }
    };

    let opts = Options {
        string_collation: args.collation.unwrap_or_default(),
    };

    let result = convert(&input, &opts)?;
    println!("{result}");

    Ok(())
}
