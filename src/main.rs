use clap::Parser;
use dragon_seat::core::summary::{render_outcome, render_roster};
use dragon_seat::utils::error::ErrorSeverity;
use dragon_seat::utils::{logger, validation::Validate};
use dragon_seat::{CliConfig, LocalStorage, SeatingEngine, SessionPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting dragon-seat");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let dry_run = config.dry_run;
    let storage = LocalStorage::new(".");
    let pipeline = SessionPipeline::new(storage, config);
    let engine = SeatingEngine::new(pipeline);

    let result = if dry_run {
        tracing::info!("🔍 DRY RUN MODE - no files will be written");
        engine.preview().await
    } else {
        engine.run().await
    };

    match result {
        Ok(run) => {
            println!("{}", render_roster(&run.outcome.roster));
            println!("{}", render_outcome(&run.outcome));
            if let Some(output_path) = run.output_path {
                println!("📁 Output saved to: {}", output_path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Seating failed: {} (Severity: {:?})",
                e,
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
