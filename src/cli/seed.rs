//! Seed command
//!
//! Loads bill data into the store: the bundled sample bills, or a JSON file
//! of laws to add. With `--reset` the store is cleared first.

use agora_core::{Comment, Law, LawStore, Tally};
use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

use crate::server::load_config;

/// Bundled sample bills (compiled into the binary)
pub const SAMPLE_LAWS: &str = include_str!("../../config/sample_laws.json");

/// Arguments for the seed command
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Clear all laws, votes, and comments before loading
    #[arg(long)]
    pub reset: bool,

    /// JSON file with an array of laws to load (defaults to the bundled samples)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Law shape accepted in seed files; tallies and comments may be omitted
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedLaw {
    id: String,
    title: String,
    description: String,
    #[serde(default)]
    mp_comment: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    votes: Tally,
    #[serde(default)]
    comments: Vec<SeedComment>,
}

#[derive(Debug, Deserialize)]
struct SeedComment {
    author: String,
    content: String,
}

impl From<SeedLaw> for Law {
    fn from(seed: SeedLaw) -> Self {
        Law {
            id: seed.id,
            title: seed.title,
            description: seed.description,
            mp_comment: seed.mp_comment,
            link: seed.link,
            votes: seed.votes,
            comments: seed
                .comments
                .into_iter()
                .map(|c| Comment::new(c.author, c.content))
                .collect(),
        }
    }
}

/// Run the seed command
pub async fn run(args: SeedArgs) -> Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    let db_path = config.database.require_path()?;

    let store = LawStore::from_path(&db_path)
        .await
        .context("Failed to open law store")?;

    let laws = match &args.file {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            parse_laws(&content)?
        }
        None => parse_laws(SAMPLE_LAWS)?,
    };

    if args.reset {
        store.replace_all(&laws).await?;
        info!("Store reset; {} laws loaded", laws.len());
        return Ok(());
    }

    let mut inserted = 0;
    for law in &laws {
        if store.insert_law(law).await? {
            inserted += 1;
            info!("Added law {}", law.id);
        } else {
            info!("Law {} already exists, skipping", law.id);
        }
    }
    info!("Seed finished: {} added, {} skipped", inserted, laws.len() - inserted);

    Ok(())
}

fn parse_laws(content: &str) -> Result<Vec<Law>> {
    let seeds: Vec<SeedLaw> =
        serde_json::from_str(content).context("Failed to parse law data")?;
    Ok(seeds.into_iter().map(Law::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_samples_parse() {
        let laws = parse_laws(SAMPLE_LAWS).unwrap();
        assert_eq!(laws.len(), 3);
        assert_eq!(laws[0].id, "BILL1");
        assert_eq!(laws[0].votes, Tally { yes: 0, no: 0 });
        assert!(laws[0].comments.is_empty());
    }

    #[test]
    fn test_seed_law_defaults() {
        let laws = parse_laws(r#"[{"id":"X","title":"t","description":"d"}]"#).unwrap();
        assert_eq!(laws[0].mp_comment, "");
        assert_eq!(laws[0].votes, Tally::default());
    }

    #[test]
    fn test_seed_law_with_comments() {
        let laws = parse_laws(
            r#"[{"id":"X","title":"t","description":"d",
                 "comments":[{"author":"Alice","content":"hello"}]}]"#,
        )
        .unwrap();
        assert_eq!(laws[0].comments.len(), 1);
        assert_eq!(laws[0].comments[0].author, "Alice");
    }
}
