use clap::Parser;
use ruv_demo::utils::{logger, validation::Validate};
use ruv_demo::{CliConfig, DemoEngine, DemoError, ReqwestTransport};
use std::time::Duration;

fn exit_with(e: &DemoError) -> ! {
    tracing::error!(
        "❌ Demo failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.severity().exit_code())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let transport = match ReqwestTransport::new(Duration::from_secs(config.timeout_seconds)) {
        Ok(transport) => transport,
        Err(e) => exit_with(&e),
    };

    let engine = DemoEngine::new_with_monitoring(transport, config, cli.monitor);
    let mut out = std::io::stdout();

    let result = if cli.check_only {
        engine.check(&mut out).await
    } else {
        engine.run(&mut out).await.map(|_| ())
    };

    match result {
        Ok(()) => {
            tracing::info!("✅ Demo completed");
            Ok(())
        }
        Err(e) => exit_with(&e),
    }
}
