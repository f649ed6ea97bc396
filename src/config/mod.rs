pub mod toml_config;

pub use toml_config::SolverConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "newton-sqrt")]
#[command(about = "Square root by Newton-Raphson iteration")]
pub struct CliConfig {
    /// Number to take the square root of (overrides solver.value)
    #[arg(allow_negative_numbers = true)]
    pub value: Option<f64>,

    /// Path to a TOML file with a [solver] table
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
