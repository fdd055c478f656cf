use std::fs;
use std::io::{self, Read};
use std::ops::Range;
use std::path::{Path, PathBuf};

use ddlweave_lib::split_statement_ranges;

/// Where the DDL comes from: a file, `-` for stdin, or inline text.
pub struct InputArgs {
    pub path: Option<PathBuf>,
    pub text: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("input is required: pass a FILE, `-` for stdin, or -s/--sql")]
    Missing,
}

/// A loaded DDL script.
pub struct Input {
    pub text: String,
    /// Display name for diagnostics; `None` for stdin and inline text.
    pub path: Option<String>,
}

impl Input {
    pub fn inline(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            path: None,
        }
    }

    pub fn load(args: &InputArgs) -> Result<Self, InputError> {
        if let Some(text) = &args.text {
            return Ok(Self::inline(text.clone()));
        }

        match args.path.as_deref() {
            Some(path) if path.as_os_str() == "-" => load_stdin(),
            Some(path) => load_file(path),
            None => Err(InputError::Missing),
        }
    }

    /// Byte ranges of the statements in the script.
    pub fn statements(&self) -> Vec<Range<usize>> {
        split_statement_ranges(&self.text)
    }
}

fn load_stdin() -> Result<Input, InputError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(InputError::Stdin)?;
    Ok(Input::inline(buf))
}

fn load_file(path: &Path) -> Result<Input, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Input {
        text,
        path: Some(path.display().to_string()),
    })
}
