use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Token whose index is the reserved CTC blank.
const BLANK_TOKEN: &str = "<pad>";

/// Token rendered as a word boundary instead of literal text.
const WORD_DELIMITER_TOKEN: &str = "|";

/// Tokens that never contribute characters to a transcription.
const STRUCTURAL_TOKENS: &[&str] = &["<s>", "</s>", "<unk>"];

/// Fixed index-to-token table, loaded once at startup and shared read-only by
/// every request.
///
/// The on-disk format is the tokenizer `vocab.json` shipped with CTC acoustic
/// models: a JSON object mapping each token to its class index.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    tokens: Vec<String>,
    blank_id: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("failed to read vocabulary file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse vocabulary file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("vocabulary has no '{BLANK_TOKEN}' blank token")]
    MissingBlank,
    #[error("vocabulary index {0} is assigned to more than one token")]
    DuplicateIndex(usize),
}

impl Vocabulary {
    pub fn from_json_file(path: &Path) -> Result<Self, VocabularyError> {
        let content = fs::read_to_string(path)?;
        let map: HashMap<String, usize> = serde_json::from_str(&content)?;
        Self::from_token_map(map)
    }

    pub fn from_token_map(map: HashMap<String, usize>) -> Result<Self, VocabularyError> {
        let size = map.values().max().map_or(0, |max| max + 1);
        let mut slots: Vec<Option<String>> = vec![None; size];
        for (token, id) in map {
            if slots[id].is_some() {
                return Err(VocabularyError::DuplicateIndex(id));
            }
            slots[id] = Some(token);
        }
        let tokens = slots
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect();
        Self::from_tokens(tokens)
    }

    /// Build from an ordered token list; the blank token must be present.
    pub fn from_tokens(tokens: Vec<String>) -> Result<Self, VocabularyError> {
        let blank_id = tokens
            .iter()
            .position(|t| t == BLANK_TOKEN)
            .ok_or(VocabularyError::MissingBlank)?;
        Ok(Self { tokens, blank_id })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn blank_id(&self) -> usize {
        self.blank_id
    }

    pub fn token(&self, id: usize) -> Option<&str> {
        self.tokens.get(id).map(String::as_str)
    }

    pub fn is_word_delimiter(&self, id: usize) -> bool {
        self.token(id) == Some(WORD_DELIMITER_TOKEN)
    }

    pub fn is_structural(&self, id: usize) -> bool {
        self.token(id)
            .is_some_and(|t| STRUCTURAL_TOKENS.contains(&t))
    }
}
