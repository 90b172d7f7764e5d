use clap::Parser;
use dragon_seat::core::summary::{render_outcome, render_roster};
use dragon_seat::core::ConfigProvider;
use dragon_seat::utils::error::ErrorSeverity;
use dragon_seat::utils::{logger, validation::Validate};
use dragon_seat::{LocalStorage, SeatingEngine, SessionPipeline, SortMethod, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-seating")]
#[command(about = "Dragon-boat seating driven by a TOML session file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "seating.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the roster sort order from config
    #[arg(long, value_enum)]
    sort: Option<SortMethod>,

    /// Dry run - show the seating without writing files
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚣 Starting TOML-based seating tool");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(sort) = args.sort {
        config.roster.sort = Some(sort);
        tracing::info!("🔧 Sort order overridden to: {}", sort.label());
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    let storage = LocalStorage::new(".");
    let pipeline = SessionPipeline::new(storage, config);
    let engine = SeatingEngine::new(pipeline);

    let result = if args.dry_run {
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
                println!("✅ Seating complete!");
                println!("📁 Output saved to: {}", output_path);
            }
        }
        Err(e) => {
            tracing::error!("❌ Seating failed: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

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

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Session Summary:");
    println!("  Session: {}", config.session_name());
    if let Some(description) = &config.session.description {
        println!("  Description: {}", description);
    }
    println!("  Roster files: {}", config.roster_files().join(", "));
    if !config.extra_paddlers().is_empty() {
        println!("  Inline paddlers: {}", config.extra_paddlers().len());
    }
    println!("  Sort: {}", config.sort_method().label());
    println!("  Output: {}", config.output_path());
    println!(
        "  Files: {}, {}{}",
        config.roster_filename(),
        config.assignment_filename(),
        config
            .report_filename()
            .map(|r| format!(", {}", r))
            .unwrap_or_default()
    );

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
