use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqrtError {
    #[error("Invalid domain: cannot take the square root of {value}")]
    InvalidDomain { value: f64 },

    #[error("Non-finite input: {value}")]
    NonFiniteInput { value: f64 },

    #[error("No convergence for {value} after {iterations} iterations (last estimate {last_estimate})")]
    ConvergenceFailure {
        value: f64,
        iterations: usize,
        last_estimate: f64,
    },

    #[error("Numeric overflow while iterating on {value}")]
    NumericOverflow { value: f64 },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SqrtError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SqrtError::InvalidDomain { .. } | SqrtError::NonFiniteInput { .. } => {
                ErrorSeverity::Medium
            }
            SqrtError::ConvergenceFailure { .. } | SqrtError::NumericOverflow { .. } => {
                ErrorSeverity::High
            }
            SqrtError::ConfigValidationError { .. }
            | SqrtError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            SqrtError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給使用者的修正建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SqrtError::InvalidDomain { .. } => "Pass a non-negative number",
            SqrtError::NonFiniteInput { .. } => "Pass a finite number (not NaN or infinity)",
            SqrtError::ConvergenceFailure { .. } => {
                "Raise solver.max_iterations or loosen solver.tolerance"
            }
            SqrtError::NumericOverflow { .. } => {
                "The input is too large for double precision squaring; use a smaller value"
            }
            SqrtError::ConfigValidationError { .. }
            | SqrtError::InvalidConfigValueError { .. } => {
                "Check the [solver] table of the configuration file"
            }
            SqrtError::IoError(_) => "Make sure the file exists and is readable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SqrtError::InvalidDomain { value } => {
                format!("{} is negative and has no real square root", value)
            }
            SqrtError::ConvergenceFailure { value, .. } => {
                format!("The square root of {} did not converge", value)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SqrtError>;
