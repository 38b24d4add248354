//! Dump the geometry tables of a lattice as comma-separated text.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use bwsl_lattice::{parse_size, Boundaries, BravaisKind, LatticeConfig, Table};
use clap::Parser;
use env_logger::Env;
use log::info;

#[derive(Parser, Debug)]
#[command(name = "bwsl-dump")]
#[command(about = "Dump positions, vectors, momenta or pairwise distances of a lattice")]
#[command(version)]
struct Cli {
    /// Table to write: positions, vectors, momenta, pairs or distances
    #[arg(default_value = "distances")]
    table: Table,

    /// Bravais lattice: chain, square, cubic or triangular
    #[arg(short, long, default_value = "square")]
    kind: BravaisKind,

    /// Grid extents, e.g. 4,4 or 8x8x8
    #[arg(short, long, default_value = "4,4")]
    size: String,

    /// Use open instead of periodic boundaries
    #[arg(long)]
    open: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Result<LatticeConfig, Box<dyn Error>> {
        let boundaries = if self.open {
            Boundaries::Open
        } else {
            Boundaries::Closed
        };
        let config =
            LatticeConfig::new(self.kind, parse_size(&self.size)?).with_boundaries(boundaries);
        config.validate()?;
        Ok(config)
    }
}

fn run<W: Write>(cli: &Cli, out: W) -> Result<u64, Box<dyn Error>> {
    let config = cli.config()?;
    info!(
        "building {} lattice {:?} with {} boundaries",
        config.kind, config.size, config.boundaries
    );
    let lattice = config.build()?;
    let rows = lattice.write_table(cli.table, out)?;
    info!("wrote {rows} {} rows", cli.table);
    Ok(rows)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match &cli.output {
        Some(path) => {
            info!("writing to {}", path.display());
            run(&cli, BufWriter::new(File::create(path)?))?;
        }
        None => {
            run(&cli, BufWriter::new(io::stdout().lock()))?;
        }
    }
    Ok(())
}
