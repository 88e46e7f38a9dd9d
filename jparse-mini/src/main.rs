//! Command-line interface for jparse-mini.
//!
//! Parses MiniJava files and reports syntax diagnostics, dumps the token
//! stream, or prints the dimensions of the generated tables. Set `RUST_LOG`
//! to `debug` to follow recovery decisions, or `trace` for every action.

use anyhow::{Context, Result, bail};
use clap::{Parser as ClapParser, Subcommand};
use jparse_mini::{parse_source, tables, tokenize};
use std::path::{Path, PathBuf};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parses a MiniJava file and reports syntax errors
    Parse {
        /// Input file with MiniJava source
        #[arg(short, long)]
        input: PathBuf,

        /// Print the syntax tree back as source
        #[arg(long)]
        source: bool,

        /// Print parser statistics
        #[arg(long)]
        stats: bool,

        /// Print the reduced rules in order
        #[arg(long)]
        rules: bool,
    },

    /// Prints the dimensions of the MiniJava tables
    Info,

    /// Prints the token stream of a MiniJava file
    Tokens {
        /// Input file with MiniJava source
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("can't read {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Parse {
            input,
            source,
            stats,
            rules,
        } => {
            let text = read_input(&input)?;
            let result = parse_source(&text)?;
            for diagnostic in &result.diagnostics {
                eprintln!("{}: {}", input.display(), diagnostic);
            }
            if rules {
                let tables = tables()?;
                for rule in &result.reductions {
                    println!("{}", tables.prod_name(jparse::ProdID(u16::from(*rule))));
                }
            }
            if stats {
                println!("{:#?}", result.stats);
            }
            match &result.unit {
                Some(unit) if source => print!("{}", unit.to_source()),
                Some(unit) => println!("{:#?}", unit),
                None => bail!(
                    "{}: parse failed after {} recoveries",
                    input.display(),
                    result.stats.recoveries
                ),
            }
        }

        Commands::Info => {
            let tables = tables()?;
            println!("{:#?}", tables.info());
        }

        Commands::Tokens { input } => {
            let text = read_input(&input)?;
            for token in tokenize(&text)? {
                match token.span {
                    Some(span) => println!("{}\t{:?}\t{}", span.start, token.token_id, token),
                    None => println!("-\t{:?}\t{}", token.token_id, token),
                }
            }
        }
    }
    Ok(())
}
