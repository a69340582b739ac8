/// Evaluation limits and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Deepest allowed chain of nested inline commands on one line.
    pub max_depth: usize,
    /// Message of the info entry returned when a program logs nothing.
    pub no_output_message: String,
}

impl Config {
    pub const DEFAULT_MAX_DEPTH: usize = 64;
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            no_output_message: "no output".to_string(),
        }
    }
}
