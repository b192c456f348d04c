//! Constants used throughout helmtpl

/// Top-level key holding the substitution variables
pub const DEFAULT_VARS_KEY: &str = "vars";

/// Extension given to a derived output file
pub const OUTPUT_EXTENSION: &str = "yaml";

/// Separator used when reporting the key path of a rendered value
pub const KEY_PATH_SEPARATOR: &str = ".";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}
