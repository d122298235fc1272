//! Command-line arguments for the terminal host.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::card::{AttributeName, CardModel};
use crate::config::CardDefaults;

/// Shown when neither `--value` nor `--value-file` is given.
pub const SAMPLE_MODEL: &str = r#"{"name":"Dog","image":"https://example.com/dog.png","description":"A domesticated descendant of the wolf."}"#;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "flashcard", version, about = "Flippable flashcard in the terminal")]
pub struct Args {
    /// Config file (default: ~/.config/flashcard/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Card model as a JSON object
    #[arg(long, conflicts_with = "value_file")]
    pub value: Option<String>,

    /// Read the card model from a JSON file
    #[arg(long)]
    pub value_file: Option<PathBuf>,

    /// Front selector: name, image, description, auto or literal content
    #[arg(long)]
    pub front: Option<String>,

    /// Back selector
    #[arg(long)]
    pub back: Option<String>,

    /// Initial face: up or down
    #[arg(long)]
    pub face: Option<String>,

    /// Whether clicking flips the card
    #[arg(long)]
    pub flippable: Option<bool>,

    /// Start with the card hidden
    #[arg(long)]
    pub hidden: Option<bool>,
}

impl Args {
    /// The raw JSON for the `value` attribute.
    pub fn model_json(&self) -> Result<String> {
        if let Some(value) = &self.value {
            return Ok(value.clone());
        }
        if let Some(path) = &self.value_file {
            return fs::read_to_string(path)
                .with_context(|| format!("reading card model from '{}'", path.display()));
        }
        Ok(SAMPLE_MODEL.to_string())
    }

    /// Startup attributes: CLI flags override config defaults.
    ///
    /// `value` is not included; see [`Args::model_json`].
    pub fn attributes(&self, defaults: &CardDefaults) -> Vec<(AttributeName, String)> {
        let flag = |value: bool| value.to_string();
        vec![
            (
                AttributeName::Front,
                self.front.clone().unwrap_or_else(|| defaults.front.clone()),
            ),
            (
                AttributeName::Back,
                self.back.clone().unwrap_or_else(|| defaults.back.clone()),
            ),
            (
                AttributeName::Face,
                self.face.clone().unwrap_or_else(|| defaults.face.clone()),
            ),
            (
                AttributeName::Flippable,
                flag(self.flippable.unwrap_or(defaults.flippable)),
            ),
            (
                AttributeName::Hidden,
                flag(self.hidden.unwrap_or(defaults.hidden)),
            ),
        ]
    }
}

/// Check a model string before handing it to the widget, for a better
/// error message at startup.
pub fn validate_model(raw: &str) -> Result<CardModel> {
    CardModel::from_json(raw).context("invalid card model")
}
