use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::error::GcgenError;
use crate::generate::GeneratedSequence;

/// Column header emitted once at the top of tab-delimited output.
pub const TAB_HEADER: &str =
    "sequence number\trandom sequence\tlength\tGC content\tactual windowed GC content range";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Fasta,
    Tab,
}

impl FromStr for OutputFormat {
    type Err = GcgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fasta" => Ok(OutputFormat::Fasta),
            "tab" => Ok(OutputFormat::Tab),
            _ => Err(GcgenError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Fasta => write!(f, "fasta"),
            OutputFormat::Tab => write!(f, "tab"),
        }
    }
}

/// Writes one FASTA record: a metadata header line, then the whole sequence
/// on a single line. Sequences here are short enough not to wrap.
pub fn write_fasta<W: Write>(
    out: &mut W,
    index: usize,
    record: &GeneratedSequence,
) -> io::Result<()> {
    writeln!(
        out,
        ">sequence{} length:{}, GC content:{}%, actual windowed GC content range:{}-{}%",
        index,
        record.length,
        record.overall_gc_percent,
        record.windowed_gc_min,
        record.windowed_gc_max
    )?;
    out.write_all(&record.sequence)?;
    writeln!(out)
}

/// Writes one tab-delimited row. The header is [`write_report`]'s job.
pub fn write_tab<W: Write>(out: &mut W, index: usize, record: &GeneratedSequence) -> io::Result<()> {
    write!(out, "{}\t", index)?;
    out.write_all(&record.sequence)?;
    writeln!(
        out,
        "\t{}\t{}%\t{}-{}%",
        record.length,
        record.overall_gc_percent,
        record.windowed_gc_min,
        record.windowed_gc_max
    )
}

/// Renders a whole batch in the requested format, indices 1-based in batch
/// order. Tab output gets its column header exactly once, before the first
/// row.
pub fn write_report<W: Write>(
    mut out: W,
    format: OutputFormat,
    records: &[GeneratedSequence],
) -> io::Result<()> {
    match format {
        OutputFormat::Fasta => {
            for (i, record) in records.iter().enumerate() {
                write_fasta(&mut out, i + 1, record)?;
            }
        }
        OutputFormat::Tab => {
            writeln!(out, "{}", TAB_HEADER)?;
            for (i, record) in records.iter().enumerate() {
                write_tab(&mut out, i + 1, record)?;
            }
        }
    }
    out.flush()
}
