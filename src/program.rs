use crate::error::InputTypeError;

/// Program input: either source text or lines that were already split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Program {
    Source(String),
    Lines(Vec<String>),
}

impl Program {
    /// Raw lines in order, before any trimming or comment removal.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Program::Source(source) => source.split('\n').collect(),
            Program::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }

    /// Interpret raw bytes (a file or piped stdin) as program text.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, InputTypeError> {
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(Program::Source(text.to_string())),
            Err(err) => Err(InputTypeError(format!(
                "binary data (invalid UTF-8 at byte {})",
                err.valid_up_to()
            ))),
        }
    }
}

impl From<&str> for Program {
    fn from(source: &str) -> Self {
        Program::Source(source.to_string())
    }
}

impl From<String> for Program {
    fn from(source: String) -> Self {
        Program::Source(source)
    }
}

impl From<Vec<String>> for Program {
    fn from(lines: Vec<String>) -> Self {
        Program::Lines(lines)
    }
}

impl From<Vec<&str>> for Program {
    fn from(lines: Vec<&str>) -> Self {
        Program::Lines(lines.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Program {
    fn from(lines: &[&str]) -> Self {
        Program::Lines(lines.iter().map(|line| line.to_string()).collect())
    }
}
