use crate::dump::BYTES_PER_LINE;
use crate::error::DumpError;
use crate::format::{INDEX_FIELD_WIDTH, octet_field_width};

/// Reconstructs the original byte sequence from dump text.
///
/// Each line is expected in the dump format: an index column of
/// [`INDEX_FIELD_WIDTH`] characters, the octet column, then the printable
/// rendering (which is ignored). The index column's content is skipped, not
/// interpreted, so renumbered or hand-edited dumps still patch back as long
/// as the octet column is intact.
///
/// # Errors
///
/// Returns a malformed-line error tagged with the 1-based line number if a
/// line is shorter than the index column, holds a non-hex character in the
/// octet column, or carries an odd number of hex digits.
pub fn parse_dump(text: &str) -> Result<Vec<u8>, DumpError> {
    let mut bytes = Vec::new();

    for (i, line) in text.lines().enumerate() {
        bytes.extend(parse_dump_line(line, i + 1)?);
    }

    Ok(bytes)
}

/// Reconstructs the bytes of a single dump line.
///
/// `line_no` is only used to tag errors; see [`parse_dump`] for the expected
/// line shape and failure modes.
pub fn parse_dump_line(line: &str, line_no: usize) -> Result<Vec<u8>, DumpError> {
    let mut chars = line.chars();

    if chars.by_ref().take(INDEX_FIELD_WIDTH).count() < INDEX_FIELD_WIDTH {
        return Err(DumpError::LineTooShort { line: line_no });
    }

    // Everything past the octet column is the printable rendering, which may
    // itself contain hex-looking characters, so the scan stops at the column
    // boundary.
    let digits: String = chars
        .take(octet_field_width(BYTES_PER_LINE))
        .filter(|c| !c.is_whitespace())
        .collect();

    hex::decode(&digits).map_err(|source| DumpError::InvalidOctet {
        line: line_no,
        source,
    })
}
