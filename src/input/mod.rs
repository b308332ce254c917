//! Caller-side input collection and validation
//!
//! Sequences arrive either literally on the command line or as FASTA files.
//! Empty input is rejected here, before the engine runs, so the engine never
//! sees a zero-length sequence from the CLI path.

use anyhow::{anyhow, bail, Context, Result};
use bio::io::fasta;
use clap::Args;
use std::path::{Path, PathBuf};

use crate::align::ScoringScheme;

/// Arguments shared by the `global` and `local` subcommands
#[derive(Args, Debug)]
pub struct AlignArgs {
    /// First sequence, given literally
    #[arg(conflicts_with = "query")]
    pub seq1: Option<String>,
    /// Second sequence, given literally
    #[arg(conflicts_with = "subject")]
    pub seq2: Option<String>,
    /// Read the first sequence from a FASTA file instead
    #[arg(short, long)]
    pub query: Option<PathBuf>,
    /// Read the second sequence from a FASTA file instead
    #[arg(short, long)]
    pub subject: Option<PathBuf>,
    /// Match reward
    #[arg(long, default_value_t = 1)]
    pub reward: i32,
    /// Mismatch penalty
    #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
    pub penalty: i32,
    /// Gap penalty
    #[arg(long, default_value_t = -2, allow_hyphen_values = true)]
    pub gap: i32,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Suppress the score-table and backtrace-path grids
    #[arg(long, default_value_t = false)]
    pub no_tables: bool,
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

impl AlignArgs {
    pub fn scheme(&self) -> ScoringScheme {
        ScoringScheme::new(self.reward, self.penalty, self.gap)
    }
}

/// Resolve both input sequences, rejecting empty input immediately
pub fn resolve_sequences(args: &AlignArgs) -> Result<(Vec<u8>, Vec<u8>)> {
    let query = resolve_one(args.seq1.as_deref(), args.query.as_deref(), "sequence 1")?;
    let subject = resolve_one(args.seq2.as_deref(), args.subject.as_deref(), "sequence 2")?;
    Ok((query, subject))
}

fn resolve_one(literal: Option<&str>, path: Option<&Path>, what: &str) -> Result<Vec<u8>> {
    let seq = match (literal, path) {
        (Some(s), _) => s.trim().as_bytes().to_vec(),
        (None, Some(p)) => {
            read_first_record(p).with_context(|| format!("reading {}", p.display()))?
        }
        (None, None) => bail!("{what} missing: pass it literally or via a FASTA file"),
    };
    if seq.is_empty() {
        bail!("{what} is empty");
    }
    Ok(seq)
}

fn read_first_record(path: &Path) -> Result<Vec<u8>> {
    let reader = fasta::Reader::from_file(path)?;
    let record = reader
        .records()
        .filter_map(|r| r.ok())
        .next()
        .ok_or_else(|| anyhow!("no FASTA records in {}", path.display()))?;
    Ok(record.seq().to_vec())
}
