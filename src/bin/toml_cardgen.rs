use bingo_cardgen::core::ConfigProvider;
use bingo_cardgen::utils::error::ErrorSeverity;
use bingo_cardgen::utils::{logger, validation::Validate};
use bingo_cardgen::{CardPipeline, GeneratorEngine, LocalStorage, TomlConfig};
use clap::Parser;

#[derive(Parser)]
#[command(name = "toml-cardgen")]
#[command(about = "Bingo card generator driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "cardgen.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override the number of cards from config
    #[arg(long)]
    count: Option<usize>,

    /// Validate the configuration and show what would be generated
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based card generator");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 套用命令列覆蓋設定
    if let Some(count) = args.count {
        config.generation.count = count;
        tracing::info!("🔧 Card count overridden to: {}", count);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no cards will be generated");
        println!(
            "Would write {} cards to {}",
            config.card_count(),
            std::path::Path::new(config.output_path())
                .join(config.output_file())
                .display()
        );
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path());
    let pipeline = CardPipeline::new(storage, config);
    let engine = GeneratorEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(summary) => {
            println!(
                "Wrote {} cards to {}",
                summary.card_count, summary.output_location
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Card generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
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

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("   Cards: {}", config.card_count());
    tracing::info!("   User: {}", config.user_id());
    tracing::info!(
        "   Output: {}/{} ({})",
        config.output_path(),
        config.output_file(),
        if config.pretty() { "pretty" } else { "compact" }
    );
    match config.seed() {
        Some(seed) => tracing::info!("   Seed: {}", seed),
        None => tracing::info!("   Seed: system entropy"),
    }
    match config.max_attempts() {
        Some(limit) => tracing::info!("   Max attempts: {}", limit),
        None => tracing::info!("   Max attempts: unbounded"),
    }
}
