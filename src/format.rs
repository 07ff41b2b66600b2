use std::io::{self, BufWriter, Write};

use crate::dump::{BYTES_PER_LINE, Fragment, dump};
use crate::error::DumpError;

/// Width of the line-index column, in characters.
///
/// Indexes that need more digits simply widen the column for their own line.
pub const INDEX_FIELD_WIDTH: usize = 8;

/// Width of the octet column for a given bytes-per-line setting: two hex
/// digits and a separator per byte, plus two more spaces before the
/// printable column.
pub const fn octet_field_width(chunk_size: usize) -> usize {
    2 + chunk_size * 3
}

/// Renders fragments produced with the default chunk size into output lines.
pub fn format(fragments: &[Fragment]) -> Vec<String> {
    format_with(fragments, BYTES_PER_LINE)
}

/// Renders fragments into output lines, sizing the octet column for groups
/// of at most `chunk_size` bytes.
///
/// Each line carries the fragment's decimal index left-justified to
/// [`INDEX_FIELD_WIDTH`], the space-joined octets left-justified to
/// [`octet_field_width`], the printable rendering verbatim, and a trailing
/// newline. Short final groups leave the octet column space-padded so the
/// printable column stays aligned. No fragments yield no lines.
pub fn format_with(fragments: &[Fragment], chunk_size: usize) -> Vec<String> {
    fragments
        .iter()
        .map(|fragment| render_line(fragment, chunk_size))
        .collect()
}

fn render_line(fragment: &Fragment, chunk_size: usize) -> String {
    let octets = fragment.octets.items.join(" ");
    let printable: String = fragment.printable.items.iter().collect();

    format!(
        "{index:<index_width$}{octets:<octet_width$}{printable}\n",
        index = fragment.index(),
        index_width = INDEX_FIELD_WIDTH,
        octet_width = octet_field_width(chunk_size),
    )
}

/// Dumps `bytes` into `sink`, one write per line.
///
/// The sink is any [`Write`] implementation, so output can be redirected or
/// captured without touching global state; callers that care about syscall
/// overhead should hand in something buffered.
///
/// # Examples
///
/// ```
/// let mut sink = Vec::new();
/// hxd::write_dump(b"abc", &mut sink).unwrap();
///
/// let text = String::from_utf8(sink).unwrap();
/// assert!(text.starts_with("0       61 62 63"));
/// ```
///
/// # Errors
///
/// Returns [`DumpError::Io`] if the sink rejects a write.
pub fn write_dump<W: Write>(bytes: &[u8], sink: &mut W) -> Result<(), DumpError> {
    for line in format(&dump(bytes)) {
        sink.write_all(line.as_bytes())?;
    }

    Ok(())
}

/// Dumps `bytes` to standard output, the default sink.
///
/// # Errors
///
/// Returns [`DumpError::Io`] if writing to stdout fails.
pub fn print_dump(bytes: &[u8]) -> Result<(), DumpError> {
    let stdout = io::stdout();
    let mut sink = BufWriter::new(stdout.lock());

    write_dump(bytes, &mut sink)?;
    sink.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dump::{Chunk, dump_with};

    #[test]
    fn no_fragments_render_no_lines() {
        assert!(format(&[]).is_empty());
    }

    #[test]
    fn full_and_partial_lines_share_column_widths() {
        let mut bytes = vec![0x01, 0x02, 0x03, 0xFF];
        bytes.extend_from_slice(b"Hello cruel world");

        let lines = format(&dump(&bytes));

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "0       01 02 03 FF 48 65 6C 6C 6F 20 63 72 75 65 6C 20   ....Hello cruel \n"
        );
        assert_eq!(
            lines[1],
            "1       77 6F 72 6C 64                                    world\n"
        );
    }

    #[test]
    fn single_byte_line_pads_the_whole_octet_column() {
        let lines = format(&dump(&[0xFF]));

        assert_eq!(
            lines,
            vec!["0       FF                                                .\n"]
        );
    }

    #[test]
    fn octet_field_tracks_chunk_size() {
        let fragments = dump_with(b"abcd", 2).unwrap();
        let lines = format_with(&fragments, 2);

        assert_eq!(lines[0], "0       61 62   ab\n");
        assert_eq!(lines[1], "1       63 64   cd\n");
    }

    #[test]
    fn wide_index_widens_its_own_field() {
        let fragment = Fragment {
            octets: Chunk {
                index: 123_456_789,
                items: vec!["AB".to_string()],
            },
            printable: Chunk {
                index: 123_456_789,
                items: vec!['.'],
            },
        };

        assert_eq!(render_line(&fragment, 1), "123456789AB   .\n");
    }

    #[test]
    fn write_dump_is_one_line_per_fragment() {
        let mut sink = Vec::new();
        write_dump(b"Hello cruel world", &mut sink).unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn write_dump_of_empty_input_writes_nothing() {
        let mut sink = Vec::new();
        write_dump(&[], &mut sink).unwrap();

        assert!(sink.is_empty());
    }
}
