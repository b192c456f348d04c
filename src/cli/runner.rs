use crate::{
    cli::Args,
    constants::DEFAULT_VARS_KEY,
    engine::Engine,
    error::Result,
    ioutils::{get_output_path, read_input, validate_input, write_output},
};
use log::debug;
use std::path::PathBuf;

/// Renders one input file into one output file.
pub struct Runner {
    args: Args,
    engine: Engine,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args, engine: Engine::new(DEFAULT_VARS_KEY) }
    }

    /// Validates paths, renders the input and writes the output.
    ///
    /// Nothing is written unless the engine succeeds. Returns the output path.
    pub fn run(self) -> Result<PathBuf> {
        let input = validate_input(&self.args.input)?;
        let output = get_output_path(&input, self.args.output.as_deref(), self.args.force)?;
        debug!("Templating input from {} to {}", input.display(), output.display());

        let data = read_input(&input)?;
        let rendered = self.engine.run(&data)?;

        write_output(&output, &rendered)?;
        debug!("Wrote {} bytes to {}", rendered.len(), output.display());
        Ok(output)
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<PathBuf> {
    Runner::new(args).run()
}
