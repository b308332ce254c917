//! Blocked rendering of the aligned pair
//!
//! Traditional side-by-side view with a midline marking identical columns.

use std::io::{self, Write};

use crate::align::GAP_CHAR;

/// Residues per display line
pub const DEFAULT_LINE_LENGTH: usize = 60;

/// Write the aligned pair in blocks with a match midline
pub fn write_alignment<W: Write>(
    writer: &mut W,
    aligned_query: &[u8],
    aligned_subject: &[u8],
) -> io::Result<()> {
    write_alignment_with_width(writer, aligned_query, aligned_subject, DEFAULT_LINE_LENGTH)
}

pub fn write_alignment_with_width<W: Write>(
    writer: &mut W,
    aligned_query: &[u8],
    aligned_subject: &[u8],
    line_length: usize,
) -> io::Result<()> {
    let chunks = aligned_query
        .chunks(line_length)
        .zip(aligned_subject.chunks(line_length));

    for (q_chunk, s_chunk) in chunks {
        let midline: String = q_chunk
            .iter()
            .zip(s_chunk.iter())
            .map(|(&q, &s)| {
                if q == s && q != GAP_CHAR {
                    '|'
                } else {
                    ' '
                }
            })
            .collect();

        writeln!(writer, "Seq1  {}", String::from_utf8_lossy(q_chunk))?;
        writeln!(writer, "      {}", midline)?;
        writeln!(writer, "Seq2  {}", String::from_utf8_lossy(s_chunk))?;
        writeln!(writer)?;
    }

    Ok(())
}
