use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use gcgen::gc::Constraint;
use gcgen::generate;
use gcgen::logger;
use gcgen::output::{self, OutputFormat};

use anyhow::{bail, Context, Result};
use log::{error, info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "gcgen",
    about = "Random nucleotide sequence generator with sliding-window GC-content control"
)]
struct Opt {
    /// Length of each sequence in bp; repeat for multiple sequences
    #[structopt(short, long = "length", required = true)]
    length: Vec<usize>,

    /// Number of sequences to generate; a single --length is reused for all
    #[structopt(short, long)]
    number: Option<usize>,

    /// Desired GC content in percent
    #[structopt(short = "g", long = "gc", default_value = "50")]
    desired_gc: u8,

    /// Acceptable range above or below the desired GC content, in percent
    #[structopt(short, long, default_value = "3")]
    range: u8,

    /// Window size in bp for applying the GC content constraint
    #[structopt(short, long, default_value = "50")]
    window: usize,

    /// Output format: fasta or tab
    #[structopt(short, long, default_value = "fasta")]
    format: OutputFormat,

    /// Seed for reproducibility
    #[structopt(short, long, default_value = "321")]
    seed: u64,

    /// Give up on a window after this many rejected replacement candidates
    #[structopt(long, default_value = "10000")]
    max_attempts: usize,

    /// Give up on a sequence after this many window repairs
    #[structopt(long, default_value = "10000")]
    max_repairs: usize,

    /// Write records to this file instead of stdout
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn main() {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = logger::init(level) {
        eprintln!("failed to install logger: {}", e);
    }

    if let Err(e) = run(opt) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(opt: Opt) -> Result<()> {
    let lengths = resolve_lengths(&opt.length, opt.number)?;
    if opt.desired_gc > 100 {
        bail!(
            "desired GC content must be between 0 and 100, got {}",
            opt.desired_gc
        );
    }

    let constraint = Constraint {
        desired_gc: opt.desired_gc,
        tolerance: opt.range,
        window_size: opt.window,
    };

    info!(
        "generating {} sequence(s) with GC {}±{}% over {} bp windows (seed {}, {} output)",
        lengths.len(),
        constraint.desired_gc,
        constraint.tolerance,
        constraint.window_size,
        opt.seed,
        opt.format
    );

    // One stream for the whole batch: reruns with the same seed and the same
    // length list reproduce every record byte for byte.
    let mut rng = StdRng::seed_from_u64(opt.seed);

    let mut records = Vec::with_capacity(lengths.len());
    for (i, &length) in lengths.iter().enumerate() {
        let record = generate::sequence(
            length,
            &constraint,
            opt.max_attempts,
            opt.max_repairs,
            &mut rng,
        )
        .with_context(|| format!("sequence {} ({} bp)", i + 1, length))?;
        info!(
            "sequence {}: {} bp, GC {}%, windowed GC {}-{}%",
            i + 1,
            record.length,
            record.overall_gc_percent,
            record.windowed_gc_min,
            record.windowed_gc_max
        );
        records.push(record);
    }

    match &opt.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create '{}'", path.display()))?;
            output::write_report(BufWriter::new(file), opt.format, &records)?;
            info!("wrote {} record(s) to {}", records.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            output::write_report(stdout.lock(), opt.format, &records)?;
        }
    }

    Ok(())
}

/// Turns the --length list and optional --number into one length per
/// sequence. A single length replicates to --number copies; several lengths
/// must agree with --number when both are given.
fn resolve_lengths(lengths: &[usize], number: Option<usize>) -> Result<Vec<usize>> {
    match number {
        Some(0) => bail!("--number must be at least 1"),
        Some(n) if lengths.len() == 1 => Ok(vec![lengths[0]; n]),
        Some(n) if n != lengths.len() => bail!(
            "{} lengths given but {} sequences requested; specify one length per sequence",
            lengths.len(),
            n
        ),
        _ => Ok(lengths.to_vec()),
    }
}
