use anyhow::{Context, Result};
use clap::Parser;
use flashcard::card::{AttributeName, CardSettings, Flashcard, ViewTree};
use flashcard::cli::{validate_model, Args};
use flashcard::config::Config;
use flashcard::logging::init_tracing;
use flashcard::ui::{self, App};
use std::time::Duration;

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let log_path = init_tracing(&config.logging).context("opening log file")?;
    tracing::info!(
        config = %config_path.display(),
        log = %log_path.display(),
        "starting flashcard"
    );

    let card = build_card(&args, &config)?;
    let app = App::new(card, Duration::from_millis(config.animation.frame_interval_ms))
        .with_model_source(args.value_file.clone());

    ui::run(app).context("terminal UI failed")?;
    tracing::info!("exiting");
    Ok(())
}

fn build_card(args: &Args, config: &Config) -> Result<Flashcard<ViewTree>> {
    let raw_model = args.model_json()?;
    validate_model(&raw_model)?;

    let mut card = Flashcard::new(None, CardSettings::from(config));
    for (name, value) in args.attributes(&config.card) {
        card.set_attribute(name.as_str(), &value)?;
    }
    card.set_attribute(AttributeName::Value.as_str(), &raw_model)?;
    card.connect(ViewTree::new());
    Ok(card)
}
