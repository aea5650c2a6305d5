use clap::Parser;
use mala_direta_pcl::utils::error::ErrorSeverity;
use mala_direta_pcl::utils::{logger, validation::Validate};
use mala_direta_pcl::{BatchProcessor, CliConfig, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mala-direta-pcl");

    // 驗證配置
    if let Err(e) = config.validate().and_then(|_| config.resolve_print_config()) {
        tracing::error!("❌ Configuration failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
    tracing::debug!("Print configuration: {:?}", config.print);

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let files = config.batch_files();
    let print = config.print.clone();
    let processor = BatchProcessor::new(LocalStorage::new("."), config);

    match processor.convert_files(&files, &print).await {
        Ok(converted) => {
            for file in &converted {
                println!(
                    "✅ {} -> {} ({} pages, {} bytes)",
                    file.file_name, file.location, file.page_count, file.size_bytes
                );
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
