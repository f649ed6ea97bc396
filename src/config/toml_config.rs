use crate::core::driver::DEFAULT_VALUE;
use crate::core::newton::NewtonSqrt;
use crate::domain::model::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use crate::utils::error::{Result, SqrtError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const MAX_ITERATIONS_LIMIT: usize = 10_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default)]
    pub solver: SolverSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolverSettings {
    pub tolerance: Option<f64>,
    pub max_iterations: Option<usize>,
    pub log_level: Option<String>,
    pub value: Option<f64>,
}

impl SolverConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SqrtError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SqrtError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(tolerance) = self.solver.tolerance {
            // also rejects NaN
            if !(tolerance > 0.0 && tolerance <= 1.0) {
                return Err(SqrtError::InvalidConfigValueError {
                    field: "solver.tolerance".to_string(),
                    value: tolerance.to_string(),
                    reason: "Tolerance must be in (0, 1]".to_string(),
                });
            }
        }

        if let Some(max_iterations) = self.solver.max_iterations {
            validation::validate_range(
                "solver.max_iterations",
                max_iterations,
                1,
                MAX_ITERATIONS_LIMIT,
            )?;
        }

        if let Some(level) = &self.solver.log_level {
            validation::validate_non_empty_string("solver.log_level", level)?;
            validation::validate_one_of("solver.log_level", level, &LOG_LEVELS)?;
        }

        if let Some(value) = self.solver.value {
            validation::validate_finite("solver.value", value)?;
        }

        Ok(())
    }

    /// 載入並驗證配置 (未指定路徑時使用預設值)
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.validate_config()?;
        Ok(config)
    }

    pub fn tolerance(&self) -> f64 {
        self.solver.tolerance.unwrap_or(DEFAULT_TOLERANCE)
    }

    pub fn max_iterations(&self) -> usize {
        self.solver.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.solver.log_level.as_deref()
    }

    pub fn value(&self) -> f64 {
        self.solver.value.unwrap_or(DEFAULT_VALUE)
    }

    pub fn solver(&self) -> NewtonSqrt {
        NewtonSqrt::new(self.tolerance(), self.max_iterations())
    }
}

impl Validate for SolverConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
