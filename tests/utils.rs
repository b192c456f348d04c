use helmtpl::{error::Result, Engine};
use serde_yaml::Value;

/// Runs the default engine over `input` and returns the output as text.
pub fn render(input: &str) -> Result<String> {
    let out = Engine::default().run(input.as_bytes())?;
    Ok(String::from_utf8(out).expect("engine output is UTF-8"))
}

/// Parses YAML text into a generic value for structural comparisons.
pub fn yaml(text: &str) -> Value {
    serde_yaml::from_str(text).expect("valid YAML")
}
