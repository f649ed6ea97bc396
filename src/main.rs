use clap::Parser;
use newton_sqrt::utils::logger;
use newton_sqrt::{format_root, CliConfig, SolverConfig, SqrtDriver};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入並驗證配置, 之後才依 log_level 初始化日誌
    let config = match SolverConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            if let Some(path) = &cli.config {
                eprintln!("❌ Failed to load config file '{}'", path);
            }
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    match config.log_level() {
        Some(level) if !cli.verbose => logger::init_with_level(level),
        _ => logger::init_cli_logger(cli.verbose),
    }
    tracing::debug!("CLI config: {:?}", cli);

    let value = cli.value.unwrap_or_else(|| config.value());
    let driver = SqrtDriver::new(config.solver());

    match driver.run(value) {
        Ok(convergence) => {
            println!("{}", format_root(convergence.root));
            Ok(())
        }
        Err(e) => {
            tracing::error!("sqrt({}) failed: {} (Severity: {:?})", value, e, e.severity());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
