//! Normalized lookup result and the upstream JSON shape it is built from.

use serde::Deserialize;

/// One looked-up word with its meanings, in upstream order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Never empty.
    pub word: String,
    pub meanings: Vec<MeaningEntry>,
}

/// One part-of-speech meaning. Only the first upstream definition is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeaningEntry {
    pub part_of_speech: String,
    pub definition: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

/// Result of a single lookup.
///
/// Every variant except `Found` reaches the user as the same not-found reply; the variants are
/// kept apart for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(WordEntry),
    /// The API answered 404.
    NotFound,
    /// Network error, timeout, or a non-404 error status.
    Transport(String),
    /// The body did not have the expected shape.
    Parse(String),
}

impl LookupOutcome {
    /// Collapses the outcome to the public "entry or absent" result.
    pub fn into_entry(self) -> Option<WordEntry> {
        match self {
            LookupOutcome::Found(entry) => Some(entry),
            _ => None,
        }
    }

    /// Short label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupOutcome::Found(_) => "found",
            LookupOutcome::NotFound => "not_found",
            LookupOutcome::Transport(_) => "transport_error",
            LookupOutcome::Parse(_) => "parse_error",
        }
    }
}

/// One element of the API's top-level array.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiEntry {
    pub word: String,
    pub meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiMeaning {
    pub part_of_speech: String,
    pub definitions: Vec<ApiDefinition>,
    /// Missing and `null` both mean empty.
    #[serde(default)]
    pub synonyms: Option<Vec<String>>,
    #[serde(default)]
    pub antonyms: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiDefinition {
    pub definition: String,
}

impl TryFrom<ApiEntry> for WordEntry {
    type Error = String;

    /// Keeps the first definition of each meaning; a meaning without definitions rejects the entry.
    fn try_from(entry: ApiEntry) -> Result<Self, Self::Error> {
        if entry.word.is_empty() {
            return Err("entry has an empty word".to_string());
        }
        let meanings = entry
            .meanings
            .into_iter()
            .map(|meaning| {
                let definition = meaning
                    .definitions
                    .into_iter()
                    .next()
                    .ok_or_else(|| {
                        format!("meaning ({}) has no definitions", meaning.part_of_speech)
                    })?
                    .definition;
                Ok(MeaningEntry {
                    part_of_speech: meaning.part_of_speech,
                    definition,
                    synonyms: meaning.synonyms.unwrap_or_default(),
                    antonyms: meaning.antonyms.unwrap_or_default(),
                })
            })
            .collect::<Result<Vec<_>, String>>()?;
        Ok(WordEntry {
            word: entry.word,
            meanings,
        })
    }
}
