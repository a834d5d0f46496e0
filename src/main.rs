use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use mergeseq::{LogSink, MergeSequence, Traced};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mergeseq", about = "Lazy merge-sort sequences over in-memory lists")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sort integers read from a file, one value per line.
    Sort {
        /// Input file (one integer per line; blank lines are skipped).
        input: PathBuf,
        /// Emit a trace event around every pulled element.
        #[arg(long)]
        trace: bool,
    },
    /// Shuffle 1..=count, sort it back, and verify the result.
    Demo {
        /// Number of elements to shuffle and sort.
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Seed for the shuffle (random when omitted).
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sort { input, trace } => run_sort(input, trace)?,
        Commands::Demo { count, seed } => run_demo(count, seed)?,
    }

    Ok(())
}

fn run_sort(input_path: PathBuf, trace: bool) -> Result<()> {
    let values = read_values_file(&input_path)
        .with_context(|| format!("failed to read values from {}", input_path.display()))?;

    let Some(sequence) = MergeSequence::build(values) else {
        bail!("input file {} holds no values", input_path.display());
    };

    if trace {
        for value in Traced::new(sequence.traverse(), LogSink::new()) {
            println!("{value}");
        }
    } else {
        for value in sequence.traverse() {
            println!("{value}");
        }
    }

    Ok(())
}

fn run_demo(count: usize, seed: Option<u64>) -> Result<()> {
    if count == 0 {
        bail!("demo needs at least one element");
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut list: Vec<usize> = (1..=count).collect();
    list.shuffle(&mut rng);
    tracing::debug!(?list, "original list");

    let sequence =
        MergeSequence::build(list).context("non-empty list should build a sequence")?;

    let mut sorted = Vec::with_capacity(count);
    for value in sequence.traverse() {
        tracing::debug!(value = *value, "collected element");
        sorted.push(*value);
    }

    if sorted.len() != count {
        bail!("traversal emitted {} of {} elements", sorted.len(), count);
    }
    for (index, value) in sorted.iter().enumerate() {
        if *value != index + 1 {
            bail!("position {index} holds {value}, expected {}", index + 1);
        }
    }

    println!(
        "sorted {} shuffled elements through a depth-{} tree",
        count,
        sequence.depth()
    );

    Ok(())
}

fn read_values_file(path: &PathBuf) -> Result<Vec<i64>> {
    let reader = BufReader::new(File::open(path)?);
    let mut values = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value: i64 = trimmed
            .parse()
            .with_context(|| format!("line {} is not an integer: {trimmed:?}", idx + 1))?;
        values.push(value);
    }

    Ok(values)
}
