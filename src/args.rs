use clap::Parser;

/// Conway's Game of Life on a wrapping board sized to the terminal.
#[derive(Parser, Debug)]
#[command(version, about, allow_hyphen_values = true)]
pub struct Args {
    /// Delay between frames, e.g. `200ms`, `1s` or `1m30s`. Invalid values
    /// fall back to the default.
    #[arg(allow_hyphen_values = true)]
    pub duration: Option<String>,
    /// Anything after the duration; ignored.
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}
