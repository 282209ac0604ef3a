use clap::Parser;
use ctd_algo::utils::{logger, validation::Validate};
use ctd_algo::{AlgoEngine, CliConfig, CtdPipeline, LocalStorage, ThresholdFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_container_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting ctd-algo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建存儲和管道
    let storage = LocalStorage::new();
    let pipeline = CtdPipeline::new(storage, config, ThresholdFilter);

    // 創建引擎並運行
    let engine = AlgoEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Algorithm run completed successfully!");
            tracing::info!("📁 Results saved to: {}", output_path);
            println!("✅ Algorithm run completed successfully!");
            println!("📁 Results saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Algorithm run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ctd_algo::utils::error::ErrorSeverity::Low => 0,
                ctd_algo::utils::error::ErrorSeverity::Medium => 2,
                ctd_algo::utils::error::ErrorSeverity::High => 1,
                ctd_algo::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
