//! # hxd
//!
//! `hxd` renders binary data as a human-readable hex dump: fixed-width rows
//! pairing a line index, an uppercase octet listing, and a
//! printable-character rendering of the same bytes.
//!
//! # Features
//! - Pure chunk/encode/format pipeline over in-memory bytes, exposed step by
//!   step ([`chunk`], [`to_hex`], [`to_printable`], [`dump`], [`format`]).
//! - Injectable output sink ([`write_dump`]), so dumps can be redirected or
//!   captured in tests without touching global state.
//! - Patch mode ([`parse_dump`]) rebuilding the original binary from dump
//!   text.
//! - Thin CLI over files or standard streams.

#![warn(missing_docs)]

mod config;
mod dump;
mod error;
mod format;
mod reverse;

pub use config::Config;
pub use dump::{BYTES_PER_LINE, Chunk, Fragment, chunk, dump, dump_with, to_hex, to_printable};
pub use error::DumpError;
pub use format::{
    INDEX_FIELD_WIDTH, format, format_with, octet_field_width, print_dump, write_dump,
};
pub use reverse::{parse_dump, parse_dump_line};

use std::io::{BufWriter, Read as _, Write as _};

use anyhow::Context;

/// Result type for application-level operations.
pub type AppResult<T> = anyhow::Result<T>;

/// Performs the appropriate operation, depending on the provided [`Config`].
///
/// Reads the whole input into memory, then either renders it as dump lines
/// or, with `reverse` set, patches dump text back into binary. Output goes
/// through a buffered writer around the configured sink.
///
/// # Examples
///
/// ```no_run
/// use hxd::Config;
///
/// let config = Config {
///     reverse: false,
///     input: Box::new(std::io::stdin().lock()),
///     output: Box::new(std::io::stdout().lock()),
/// };
///
/// if let Err(err) = hxd::run(config) {
///     eprintln!("Error: {err}");
///     std::process::exit(1);
/// }
/// ```
///
/// # Errors
///
/// Returns an error if a stream fails, if reverse input is not UTF-8 text,
/// or if reverse input contains a malformed dump line.
pub fn run(config: Config) -> AppResult<()> {
    let Config {
        reverse,
        mut input,
        output,
    } = config;

    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .context("failed to read from input")?;

    let mut writer = BufWriter::new(output);

    if reverse {
        let text = String::from_utf8(bytes).context("dump input is not valid UTF-8")?;
        let binary = parse_dump(&text)?;
        writer
            .write_all(&binary)
            .context("failed to write to output")?;
    } else {
        write_dump(&bytes, &mut writer)?;
    }

    writer.flush().context("failed to flush output")?;

    Ok(())
}
