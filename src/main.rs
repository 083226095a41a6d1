use birthday_predictor::adapters::console::{ConsoleCapture, ConsolePresenter, ConsoleSpeaker};
use birthday_predictor::domain::model::SessionStatus;
use birthday_predictor::utils::error::{ErrorSeverity, PredictorError};
use birthday_predictor::utils::{logger, validation::Validate};
use birthday_predictor::{CliConfig, GameEngine, Session};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting birthday-predictor");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.load_game_config().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    println!("🎂 Voice Interactive Birthday Predictor");
    println!("Answer yes/no (or y/n), or just tell me the date like \"26 October\".");
    println!();

    let mut engine = GameEngine::with_options(
        Session::new(config.classifier()),
        ConsoleCapture::stdin(),
        ConsoleSpeaker,
        ConsolePresenter,
        config.engine_options(),
    );

    match engine.run_session().await {
        Ok(summary) if summary.status == SessionStatus::Finished => {
            tracing::info!("Session finished after {} turns", summary.turns);
        }
        Ok(summary) => {
            println!("👋 Stopped after {} questions without a final answer.", summary.attempts);
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn exit_with(e: &PredictorError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
