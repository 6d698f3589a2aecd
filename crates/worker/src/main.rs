use anyhow::Context;
use clap::Parser;
use sentiscore_core::domain::contract::BatchInput;
use sentiscore_core::Scorer;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod batch;

#[derive(Debug, Parser)]
#[command(name = "sentiscore_worker")]
struct Args {
    /// Batch file (JSON `{"requests": [...]}`). Use `-` to read stdin.
    #[arg(long)]
    input: PathBuf,

    /// Word -> score JSON table. Overrides SENTISCORE_LEXICON_PATH.
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Pretty-print the snapshot.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut settings = sentiscore_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();
    if let Some(path) = args.lexicon {
        settings.lexicon_path = Some(path);
    }

    let scorer = Scorer::new(settings.load_lexicon()?);

    let text = read_input(&args.input)?;
    let requests = BatchInput::from_json_str(&text)?
        .validate()
        .with_context(|| format!("invalid batch input {}", args.input.display()))?;

    let snapshot = batch::run_batch(&scorer, requests, chrono::Utc::now());
    tracing::info!(
        scored = snapshot.items.len(),
        failed = snapshot.failures.len(),
        "batch complete"
    );

    let out = if args.pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    println!("{out}");

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        return std::io::read_to_string(std::io::stdin()).context("failed to read stdin");
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read batch input {}", path.display()))
}

fn init_sentry(settings: &sentiscore_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
