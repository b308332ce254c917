//! One alignment request end to end: inputs, engine, report

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Duration;

use crate::align::{self, AlignMode};
use crate::input::{resolve_sequences, AlignArgs};
use crate::report::{pairwise, table};

/// Show a spinner while filling tables at least this large
const SPINNER_CELL_THRESHOLD: usize = 1 << 20;

pub fn run(args: AlignArgs, mode: AlignMode) -> Result<()> {
    let (query, subject) = resolve_sequences(&args)?;
    let scheme = args.scheme();

    if args.verbose {
        eprintln!(
            "Aligning {} x {} residues ({:?}, match={} mismatch={} gap={})...",
            query.len(),
            subject.len(),
            mode,
            scheme.match_score,
            scheme.mismatch,
            scheme.gap
        );
    }

    let spinner = if query.len() * subject.len() >= SPINNER_CELL_THRESHOLD {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        bar.set_message("filling score table...");
        bar.enable_steady_tick(Duration::from_millis(100));
        Some(bar)
    } else {
        None
    };

    let result = align::align(&query, &subject, mode, &scheme)?;

    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }

    let stdout = io::stdout();
    let mut writer: Box<dyn Write> = if let Some(path) = &args.out {
        Box::new(BufWriter::new(File::create(path)?))
    } else {
        Box::new(BufWriter::new(stdout.lock()))
    };

    writeln!(writer, "Alignment score: {}", result.score)?;
    if mode == AlignMode::Local {
        writeln!(
            writer,
            "Best cell: ({}, {})",
            result.end_pos.0, result.end_pos.1
        )?;
    }
    writeln!(
        writer,
        "Identity: {:.1}% ({} matches, {} mismatches, {} gaps over {} columns)",
        result.identity(),
        result.matches,
        result.mismatches,
        result.gaps,
        result.alignment_len()
    )?;
    writeln!(writer)?;

    pairwise::write_alignment(&mut writer, &result.aligned_query, &result.aligned_subject)?;

    if !args.no_tables {
        writeln!(writer, "Score table:")?;
        table::write_score_table(&mut writer, &result.scores, &query, &subject)?;
        writeln!(writer)?;
        writeln!(writer, "Backtrace path:")?;
        table::write_path_table(&mut writer, &result.path, &query, &subject)?;
    }

    writer.flush()?;
    Ok(())
}
