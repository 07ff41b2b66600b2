use crate::error::DumpError;

/// Number of bytes rendered per output line when no other chunk size is
/// requested.
pub const BYTES_PER_LINE: usize = 16;

/// Maps each byte to its two-character uppercase hexadecimal octet.
///
/// Every value 0-255 has exactly one rendering, zero-padded on the left
/// (`0x00` → `"00"`, `0xFF` → `"FF"`); this mapping cannot fail.
pub fn to_hex(bytes: &[u8]) -> Vec<String> {
    bytes.iter().map(|byte| format!("{byte:02X}")).collect()
}

/// Maps each byte to a display character.
///
/// Bytes in the printable ASCII range, SP (0x20) through ~ (0x7E), stand for
/// themselves; everything else becomes `.`.
pub fn to_printable(bytes: &[u8]) -> Vec<char> {
    bytes
        .iter()
        .map(|&byte| match byte {
            0x20..=0x7e => byte as char,
            _ => '.',
        })
        .collect()
}

/// A group of consecutive items tagged with its position among all groups of
/// the same partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<T> {
    /// Zero-based position of this group, in emission order.
    pub index: usize,
    /// The group's items: up to the configured chunk size of them, in input
    /// order.
    pub items: Vec<T>,
}

/// Splits `items` into groups of at most `size` elements, tagging each group
/// with its zero-based index.
///
/// Groups cover the input exactly once, in order, with no gaps or overlaps;
/// only the final group may be shorter than `size`, and it is not padded.
/// Empty input yields no groups at all, not one empty group.
///
/// # Errors
///
/// Returns [`DumpError::InvalidChunkSize`] if `size` is zero.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Chunk<T>>, DumpError> {
    if size == 0 {
        return Err(DumpError::InvalidChunkSize);
    }

    Ok(chunked(items, size))
}

// Callers guarantee a non-zero size.
fn chunked<T: Clone>(items: &[T], size: usize) -> Vec<Chunk<T>> {
    items
        .chunks(size)
        .enumerate()
        .map(|(index, items)| Chunk {
            index,
            items: items.to_vec(),
        })
        .collect()
}

/// One output line's worth of source bytes: the hex octets and the printable
/// rendering of the same byte group, sharing one index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Two-character uppercase hex octets for the group.
    pub octets: Chunk<String>,
    /// Display characters for the same group, element for element.
    pub printable: Chunk<char>,
}

impl Fragment {
    /// The index shared by both views.
    pub fn index(&self) -> usize {
        self.octets.index
    }

    /// Number of source bytes behind this fragment.
    pub fn len(&self) -> usize {
        self.octets.items.len()
    }

    /// `true` when the fragment covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.octets.items.is_empty()
    }
}

/// Renders `bytes` into dump fragments using [`BYTES_PER_LINE`]-sized
/// groups.
///
/// Both encodings run over the whole input, each is chunked, and the two
/// chunk sequences are zipped position by position. Total: any byte
/// sequence, including the empty one, produces a fragment list (possibly
/// empty).
pub fn dump(bytes: &[u8]) -> Vec<Fragment> {
    pair(
        chunked(&to_hex(bytes), BYTES_PER_LINE),
        chunked(&to_printable(bytes), BYTES_PER_LINE),
    )
}

/// Renders `bytes` into dump fragments of at most `chunk_size` bytes each.
///
/// # Errors
///
/// Returns [`DumpError::InvalidChunkSize`] if `chunk_size` is zero.
pub fn dump_with(bytes: &[u8], chunk_size: usize) -> Result<Vec<Fragment>, DumpError> {
    if chunk_size == 0 {
        return Err(DumpError::InvalidChunkSize);
    }

    Ok(pair(
        chunked(&to_hex(bytes), chunk_size),
        chunked(&to_printable(bytes), chunk_size),
    ))
}

fn pair(octets: Vec<Chunk<String>>, printable: Vec<Chunk<char>>) -> Vec<Fragment> {
    octets
        .into_iter()
        .zip(printable)
        .map(|(octets, printable)| {
            // Both partitions chunk the same input with the same size, so
            // indexes line up pairwise.
            debug_assert_eq!(octets.index, printable.index);
            Fragment { octets, printable }
        })
        .collect()
}
