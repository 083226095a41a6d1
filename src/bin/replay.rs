use anyhow::{bail, Context};
use birthday_predictor::adapters::memory::{RecordingPresenter, RecordingSpeaker, ScriptedCapture};
use birthday_predictor::core::dates::DateSequence;
use birthday_predictor::core::extraction::parse_date_from_text;
use birthday_predictor::core::interpreter::MatchMode;
use birthday_predictor::domain::model::{Reply, SessionSummary};
use birthday_predictor::utils::{logger, validation::Validate};
use birthday_predictor::{GameConfig, GameEngine, Session};
use clap::Parser;
use std::path::PathBuf;

type ReplayEngine = GameEngine<ScriptedCapture, RecordingSpeaker, RecordingPresenter>;

#[derive(Parser)]
#[command(name = "replay")]
#[command(about = "Replays recorded answers, or plays against a known birthday")]
struct Args {
    /// File with one transcript per line; blank lines count as failed captures
    #[arg(short, long, conflicts_with = "target")]
    transcript: Option<PathBuf>,

    /// Answer every question truthfully for this date, e.g. "26 october"
    #[arg(long)]
    target: Option<String>,

    /// Path to TOML game configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How yes/no words are found in an answer: "word" (default) matches whole
    /// words only; "substring" is the legacy behavior, where a token may sit
    /// inside another word, so "nyep" reads as yes
    #[arg(long, value_enum)]
    match_mode: Option<MatchMode>,

    /// Print the session summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let mut config = match &args.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(mode) = args.match_mode {
        config.matching.mode = mode;
    }
    config.validate()?;

    let session = Session::new(config.classifier());
    let options = config.engine_options();

    let (summary, engine) = match (&args.transcript, &args.target) {
        (Some(path), _) => {
            let content = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read transcript '{}'", path.display()))?;
            tracing::info!("Replaying {} recorded answers", content.lines().count());

            let capture = ScriptedCapture::from_lines(content.lines());
            let mut engine = GameEngine::with_options(
                session,
                capture,
                RecordingSpeaker::default(),
                RecordingPresenter::default(),
                options,
            );
            let summary = engine.run_session().await?;
            (summary, engine)
        }
        (None, Some(target)) => {
            let dates = DateSequence::new();
            let Some(target_index) = parse_date_from_text(&target.to_lowercase(), &dates) else {
                bail!("'{}' is not a day and month, try something like \"26 october\"", target);
            };

            let mut engine = GameEngine::with_options(
                session,
                ScriptedCapture::default(),
                RecordingSpeaker::default(),
                RecordingPresenter::default(),
                options,
            );
            let summary = play_towards(&mut engine, target_index)?;
            (summary, engine)
        }
        (None, None) => bail!("either --transcript or --target is required"),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for line in &engine.presenter().questions {
            println!("❓ {}", line);
        }
        match &summary.resolution {
            Some(resolution) => println!("✅ {} via {:?}", resolution.label, resolution.method),
            None => println!("⚠️ No birthday found after {} questions", summary.attempts),
        }
    }

    Ok(())
}

/// Answers each question as someone born on `target` would.
fn play_towards(engine: &mut ReplayEngine, target: usize) -> anyhow::Result<SessionSummary> {
    let mut reply = engine.start()?;

    while let Reply::Question { probe_index, .. } = reply {
        reply = if target <= probe_index {
            engine.answer_yes()?
        } else {
            engine.answer_no()?
        };
    }

    Ok(engine.session().summary())
}
