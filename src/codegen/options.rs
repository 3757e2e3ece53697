use crate::error::CodeGenError;

/// How much of each imported file the generated script processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingMode {
    /// Every record.
    #[default]
    All,
    /// Only the first `custom_count` records, truncated immediately after
    /// load so the cost cap applies before any transform runs.
    Custom,
}

/// Execution parameters embedded into the generated script.
///
/// The model parameters are emitted once, globally; every inference call site
/// in the script references them, so the script is runnable standalone.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionOptions {
    pub processing_mode: ProcessingMode,
    /// Record cap for `ProcessingMode::Custom`; must be at least 1.
    pub custom_count: Option<u64>,
    pub model: String,
    /// Sampling temperature, in [0, 1].
    pub temperature: f64,
    /// Maximum tokens per inference call; -1 means unlimited.
    pub max_tokens: i64,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            processing_mode: ProcessingMode::All,
            custom_count: None,
            model: "llama3.2".to_string(),
            temperature: 0.7,
            max_tokens: -1,
        }
    }
}

impl ExecutionOptions {
    pub fn validate(&self) -> Result<(), CodeGenError> {
        if self.processing_mode == ProcessingMode::Custom {
            match self.custom_count {
                None => {
                    return Err(CodeGenError::InvalidOptions(
                        "custom processing mode requires a record count".to_string(),
                    ));
                }
                Some(0) => {
                    return Err(CodeGenError::InvalidOptions(
                        "custom record count must be at least 1".to_string(),
                    ));
                }
                Some(_) => {}
            }
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(CodeGenError::InvalidOptions(format!(
                "temperature must be within [0, 1], got {}",
                self.temperature
            )));
        }
        if self.max_tokens < -1 {
            return Err(CodeGenError::InvalidOptions(format!(
                "max tokens must be -1 (unlimited) or non-negative, got {}",
                self.max_tokens
            )));
        }
        Ok(())
    }
}
