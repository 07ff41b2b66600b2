use std::io;

use thiserror::Error;

/// Failures surfaced by the dump and patch operations.
///
/// The forward pipeline is total over byte input; errors only arise from the
/// chunk-size precondition, from malformed patch input, or from the output
/// sink itself.
#[derive(Error, Debug)]
pub enum DumpError {
    /// A chunk size of zero was passed to the chunker.
    #[error("chunk size must be at least 1")]
    InvalidChunkSize,

    /// A dump line ended before the index column did.
    #[error("malformed dump line {line}: shorter than the index column")]
    LineTooShort {
        /// 1-based line number within the parsed dump text.
        line: usize,
    },

    /// The octet column held something other than whitespace-separated
    /// two-digit hex pairs.
    #[error("malformed dump line {line}: {source}")]
    InvalidOctet {
        /// 1-based line number within the parsed dump text.
        line: usize,
        /// Decoder failure: a non-hex character or an odd digit count.
        source: hex::FromHexError,
    },

    /// A read from the input or a write to the output sink failed.
    #[error("stream failure: {0}")]
    Io(#[from] io::Error),
}
