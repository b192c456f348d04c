use crate::constants::exit_codes;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// The input is not well-formed YAML.
    #[error("Failed to decode document. Original error: {0}")]
    Decode(#[source] serde_yaml::Error),

    /// The input is YAML, but its top level is not a string-keyed mapping.
    #[error("Failed to decode document: expected a top-level mapping with string keys, found {found}.")]
    DecodeShape { found: String },

    #[error("Could not find variables key '{key}' (it must hold a mapping).")]
    MissingVariables { key: String },

    #[error("Invalid template at '{path}'. Original error: {source}")]
    TemplateSyntax {
        path: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to render '{path}'. Original error: {source}")]
    TemplateExecution {
        path: String,
        #[source]
        source: minijinja::Error,
    },

    /// Should not happen for trees produced by the decoder.
    #[error("Failed to encode document. Original error: {0}")]
    Encode(#[source] serde_yaml::Error),

    #[error("A valid input file is required.")]
    InputRequired,

    #[error("Input file '{path}' does not exist.")]
    InputNotFound { path: String },

    #[error("Cannot proceed: output file '{path}' already exists. Use --force to overwrite it.")]
    OutputExists { path: String },
}

/// Convenience type alias for Results with helmtpl's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    log::debug!("{err:?}");
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
