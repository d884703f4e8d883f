use anyhow::Context;
use clap::Parser;
use pattern_demo::app::{self, MenuChoice};
use pattern_demo::config::{DemoConfig, DemoSelection};
use pattern_demo::core::Observer;
use pattern_demo::utils::{logger, validation::Validate};
use pattern_demo::{CliConfig, ConsoleObserver, FanoutObserver, TracingObserver};
use std::sync::Arc;

fn load_config(cli: &CliConfig) -> anyhow::Result<DemoConfig> {
    let mut config = match &cli.config {
        Some(path) => DemoConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path.display()))?,
        None => DemoConfig::default(),
    };
    cli.apply_overrides(&mut config);
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證配置：日誌層級也在其中，必須早於初始化日誌
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, config.log_level(), config.logging.format);
    tracing::debug!("CLI config: {:?}", cli);

    // 主控台輸出與結構化日誌同時接收元件通知
    let observer: Arc<dyn Observer> = Arc::new(FanoutObserver::new(vec![
        Arc::new(ConsoleObserver::stdout()) as Arc<dyn Observer>,
        Arc::new(TracingObserver),
    ]));

    let mut stdout = std::io::stdout();

    let result = match cli.run {
        Some(selection) => {
            tracing::info!("🚀 Running {:?} demo non-interactively", selection);
            match selection {
                DemoSelection::Facade => app::run_facade_demo(&config, observer, &mut stdout),
                DemoSelection::Strategy => app::run_strategy_demo(&config, observer, &mut stdout),
                DemoSelection::All => app::run_all(&config, observer, &mut stdout),
            }
        }
        None => {
            let stdin = std::io::stdin();
            app::run_menu(stdin.lock(), &mut stdout, |choice, out| match choice {
                MenuChoice::Facade => app::run_facade_demo(&config, observer.clone(), out),
                MenuChoice::Strategy => app::run_strategy_demo(&config, observer.clone(), out),
                MenuChoice::All => app::run_all(&config, observer.clone(), out),
                MenuChoice::Exit => Ok(()),
            })
        }
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Demo failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
