//! Card decks — the built-in showcase deck and loading decks from a file.
//!
//! Deck files are a list of `[card]` sections:
//!
//! ```text
//! # my deck
//! [card]
//! id = 1
//! title = Serene Abstract
//! description = A calming blend of colors and textures.
//! image_url = https://placehold.co/600x400.png
//! hint = abstract serenity
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::carousel::Card;

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400.png";

/// Why a deck file could not be loaded.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("cannot read deck {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: `{key}` appears before any [card] section")]
    OutsideSection { line: usize, key: String },
    #[error("line {line}: unknown card field `{key}`")]
    UnknownField { line: usize, key: String },
    #[error("line {line}: expected `key = value` or `[card]`")]
    Malformed { line: usize },
    #[error("card starting on line {line} has no `{field}`")]
    MissingField { line: usize, field: &'static str },
    #[error("duplicate card id `{0}`")]
    DuplicateId(String),
}

/// The three showcase cards.
pub fn builtin() -> Vec<Card> {
    let card = |id: &str, title: &str, description: &str, hint: &str| Card {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        image_url: PLACEHOLDER_IMAGE.into(),
        hint: hint.into(),
    };
    vec![
        card(
            "1",
            "Serene Abstract",
            "A calming blend of colors and textures.",
            "abstract serenity",
        ),
        card(
            "2",
            "Urban Dreams",
            "Dynamic cityscape at twilight.",
            "city twilight",
        ),
        card(
            "3",
            "Nature's Whisper",
            "Lush green landscapes beckon.",
            "forest path",
        ),
    ]
}

pub fn load(path: &Path) -> Result<Vec<Card>, DeckError> {
    let contents = std::fs::read_to_string(path).map_err(|source| DeckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cards = parse(&contents)?;
    tracing::debug!(path = %path.display(), count = cards.len(), "loaded deck");
    Ok(cards)
}

/// Fields collected for one `[card]` section.
#[derive(Default)]
struct Draft {
    line: usize,
    id: Option<String>,
    title: Option<String>,
    description: String,
    image_url: String,
    hint: String,
}

impl Draft {
    fn finish(self) -> Result<Card, DeckError> {
        let line = self.line;
        Ok(Card {
            id: self.id.ok_or(DeckError::MissingField { line, field: "id" })?,
            title: self
                .title
                .ok_or(DeckError::MissingField { line, field: "title" })?,
            description: self.description,
            image_url: self.image_url,
            hint: self.hint,
        })
    }
}

pub fn parse(s: &str) -> Result<Vec<Card>, DeckError> {
    let mut drafts: Vec<Draft> = Vec::new();

    for (i, raw) in s.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.eq_ignore_ascii_case("[card]") {
            drafts.push(Draft {
                line: line_no,
                ..Draft::default()
            });
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(DeckError::Malformed { line: line_no });
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"').to_string();

        let Some(draft) = drafts.last_mut() else {
            return Err(DeckError::OutsideSection {
                line: line_no,
                key: key.into(),
            });
        };
        match key {
            "id" => draft.id = Some(value),
            "title" => draft.title = Some(value),
            "description" => draft.description = value,
            "image_url" => draft.image_url = value,
            "hint" => draft.hint = value,
            _ => {
                return Err(DeckError::UnknownField {
                    line: line_no,
                    key: key.into(),
                })
            }
        }
    }

    let mut seen = HashSet::new();
    let mut cards = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let card = draft.finish()?;
        if !seen.insert(card.id.clone()) {
            return Err(DeckError::DuplicateId(card.id));
        }
        cards.push(card);
    }
    Ok(cards)
}
