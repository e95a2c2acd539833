// Command line options shared by the decoding utilities

use crate::formats::{example, load_hex_file, InputError};
use crate::packet::DecoderConfig;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArgsError {
    #[error("{0} needs a value")]
    MissingValue(String),

    #[error("Invalid number for {flag}: {value:?}")]
    InvalidNumber { flag: String, value: String },

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("No input file or example given")]
    NoInput,

    #[error(transparent)]
    Input(#[from] InputError),
}

pub type Result<T> = std::result::Result<T, ArgsError>;

/// Parsed command line: one input (file or built-in example) plus options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Path of a hex input file
    pub path: Option<String>,
    /// 1-based built-in example number; wins over `path`
    pub example: Option<usize>,
    pub max_depth: Option<usize>,
    pub json: bool,
}

impl Options {
    /// Parse arguments, not including the program name
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Options::default();
        let mut iter = args.into_iter();

        while let Some(arg) = iter.next() {
            match arg.as_ref() {
                "--json" => options.json = true,
                "--example" => options.example = Some(number_for("--example", iter.next())?),
                "--max-depth" => options.max_depth = Some(number_for("--max-depth", iter.next())?),
                flag if flag.starts_with("--") => {
                    return Err(ArgsError::UnknownOption(flag.to_string()))
                }
                path => options.path = Some(path.to_string()),
            }
        }

        Ok(options)
    }

    /// Decoder configuration with any `--max-depth` override applied
    pub fn config(&self) -> DecoderConfig {
        match self.max_depth {
            Some(max_depth) => DecoderConfig::new().with_max_depth(max_depth),
            None => DecoderConfig::default(),
        }
    }

    /// Hex text of the selected input
    pub fn input_text(&self) -> Result<String> {
        match (self.example, &self.path) {
            (Some(number), _) => {
                tracing::info!("Using built-in example #{}", number);
                Ok(example(number)?.hex.to_string())
            }
            (None, Some(path)) => {
                tracing::info!("Reading transmission from {}", path);
                Ok(load_hex_file(path)?)
            }
            (None, None) => Err(ArgsError::NoInput),
        }
    }
}

fn number_for<S: AsRef<str>>(flag: &str, value: Option<S>) -> Result<usize> {
    let value = value.ok_or_else(|| ArgsError::MissingValue(flag.to_string()))?;
    value
        .as_ref()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber {
            flag: flag.to_string(),
            value: value.as_ref().to_string(),
        })
}
