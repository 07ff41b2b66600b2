use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::Context;

use crate::AppResult;

/// Streams and mode for one invocation.
///
/// Input and output are injected as trait objects so the same pipeline runs
/// against files, standard streams, or in-memory buffers in tests.
pub struct Config {
    /// If `true`, patches dump text back into binary; otherwise dumps.
    pub reverse: bool,

    /// Input source to read from (e.g., file or stdin).
    pub input: Box<dyn Read>,

    /// Output destination to write to (e.g., file or stdout).
    pub output: Box<dyn Write>,
}

impl Config {
    /// Resolves optional input and output paths into streams.
    ///
    /// A missing input path, or the literal `-`, selects standard input. A
    /// missing output path selects standard output; an existing output file
    /// is appended to, a missing one is created.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be opened.
    pub fn build(
        infile: Option<&Path>,
        outfile: Option<&Path>,
        reverse: bool,
    ) -> AppResult<Self> {
        let input: Box<dyn Read> = match infile {
            Some(path) if path != Path::new("-") => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                Box::new(file)
            }
            _ => Box::new(io::stdin().lock()),
        };

        let output: Box<dyn Write> = match outfile {
            Some(path) => {
                let file = match File::options().append(true).open(path) {
                    Ok(file) => file,
                    // Create the file if it doesn't exist
                    Err(_) => File::create(path)
                        .with_context(|| format!("failed to create {}", path.display()))?,
                };
                Box::new(file)
            }
            None => Box::new(io::stdout().lock()),
        };

        Ok(Self {
            reverse,
            input,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_file_is_an_error() {
        let result = Config::build(Some(Path::new("definitely/not/here.bin")), None, false);

        assert!(result.is_err());
    }

    #[test]
    fn input_file_is_opened_for_reading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.bin");
        std::fs::write(&path, b"abc").unwrap();

        let mut config = Config::build(Some(&path), None, false).unwrap();

        let mut contents = Vec::new();
        config.input.read_to_end(&mut contents).unwrap();
        assert_eq!(contents, b"abc");
    }

    #[test]
    fn missing_output_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let config = Config::build(None, Some(&path), false).unwrap();
        drop(config);

        assert!(path.exists());
    }
}
