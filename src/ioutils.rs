use crate::{
    constants::OUTPUT_EXTENSION,
    error::{Error, Result},
};
use std::path::{Path, PathBuf};

/// Checks that an input file was given and exists.
pub fn validate_input<P: AsRef<Path>>(input: P) -> Result<PathBuf> {
    let input = input.as_ref();
    if input.as_os_str().is_empty() {
        return Err(Error::InputRequired);
    }
    if !input.exists() {
        return Err(Error::InputNotFound { path: input.display().to_string() });
    }
    Ok(input.to_path_buf())
}

/// Output path used when none is given: next to the input, named after the
/// part of the input's file name before its first `.`.
///
/// `charts/app.values.tpl` becomes `charts/app.yaml`.
pub fn default_output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    let input = input.as_ref();
    let file_name =
        input.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();
    let dir = input.parent().unwrap_or_else(|| Path::new(""));
    dir.join(format!("{stem}.{OUTPUT_EXTENSION}"))
}

/// Resolves the output path and makes sure it is safe to write to.
///
/// An existing output is only accepted with `force`; it is left in place
/// until the rendered document is written.
pub fn get_output_path<P: AsRef<Path>>(
    input: P,
    output: Option<&Path>,
    force: bool,
) -> Result<PathBuf> {
    let output = match output {
        Some(output) if !output.as_os_str().is_empty() => output.to_path_buf(),
        _ => default_output_path(input),
    };
    if output.exists() && !force {
        return Err(Error::OutputExists { path: output.display().to_string() });
    }
    Ok(output)
}

pub fn read_input<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    std::fs::read(path.as_ref()).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, creating parent directories as needed.
pub fn write_output<P: AsRef<Path>>(dest_path: P, content: &[u8]) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}
