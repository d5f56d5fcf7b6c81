use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PresetArg {
    Default,
    Compact,
    Pretty,
}

#[derive(Parser, Debug)]
#[command(name = "arbor-cli", about = "Validate and reformat JSON", version)]
struct Args {
    /// Validate only; print a diagnostic and exit non-zero on invalid input
    #[arg(short, long)]
    check: bool,

    /// Formatting preset
    #[arg(long, value_enum, default_value_t = PresetArg::Default)]
    preset: PresetArg,

    /// Sort object keys byte-wise instead of keeping insertion order
    #[arg(long)]
    sort_keys: bool,

    /// Write the result to a file (atomic replace) instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path)?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    if args.check {
        if let Err(e) = arbor::validate(&buf) {
            bail!("{e}");
        }
        println!("OK");
        return Ok(());
    }

    let mut config = match args.preset {
        PresetArg::Default => arbor::FormatConfig::default(),
        PresetArg::Compact => arbor::FormatConfig::compact(),
        PresetArg::Pretty => arbor::FormatConfig::pretty(),
    };
    if args.sort_keys {
        config.sort_keys = true;
    }

    let value = arbor::parse(&buf)?;
    match &args.output {
        Some(path) => {
            arbor::io::write_file(&value, path, &config)?;
        }
        None => {
            let text = arbor::format(&value, &config)?;
            print!("{text}");
            if !text.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}
