//! Urdu-aware tokenization.
//!
//! Urdu prose and verse mix the Arabic-block marks (`۔` full stop, `،` comma,
//! `؛` semicolon, `؟` question mark) with Latin `! : . ,`. The tokenizer
//! treats every char of its punctuation set as a boundary and, depending on
//! the [`TokenizeMode`], keeps those marks as tokens, leaves them attached to
//! words, or drops them.

use crate::utils::error::{PhilologyError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PUNCTUATION: &str = "۔،؛؟!:.,";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizeMode {
    #[default]
    KeepPunctuation,
    Whitespace,
    StripPunctuation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    Word,
    Punctuation,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Word => write!(f, "WORD"),
            TokenKind::Punctuation => write!(f, "PUNCTUATION"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    punctuation: Vec<char>,
    boundary: Regex,
}

impl Tokenizer {
    pub fn new(punctuation: &str) -> Result<Self> {
        let mut marks: Vec<char> = Vec::new();
        for c in punctuation.chars().filter(|c| !c.is_whitespace()) {
            if !marks.contains(&c) {
                marks.push(c);
            }
        }

        if marks.is_empty() {
            return Err(PhilologyError::InvalidConfigValueError {
                field: "tokenize.punctuation".to_string(),
                value: punctuation.to_string(),
                reason: "Punctuation set must contain at least one mark".to_string(),
            });
        }

        let class: String = marks
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        let boundary = Regex::new(&format!(r"\s+|[{}]", class)).map_err(|e| {
            PhilologyError::processing(format!("Invalid punctuation pattern: {}", e))
        })?;

        Ok(Self {
            punctuation: marks,
            boundary,
        })
    }

    /// Tokenizer with the default Urdu punctuation set.
    pub fn urdu() -> Result<Self> {
        Self::new(DEFAULT_PUNCTUATION)
    }

    pub fn punctuation(&self) -> &[char] {
        &self.punctuation
    }

    pub fn is_punctuation_char(&self, c: char) -> bool {
        self.punctuation.contains(&c)
    }

    pub fn tokenize(&self, text: &str, mode: TokenizeMode) -> Vec<String> {
        match mode {
            TokenizeMode::KeepPunctuation => self.split_keeping_marks(text),
            TokenizeMode::Whitespace => text.split_whitespace().map(str::to_string).collect(),
            TokenizeMode::StripPunctuation => {
                let cleaned: String = text
                    .chars()
                    .map(|c| if self.is_punctuation_char(c) { ' ' } else { c })
                    .collect();
                cleaned.split_whitespace().map(str::to_string).collect()
            }
        }
    }

    fn split_keeping_marks(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut last = 0;

        for m in self.boundary.find_iter(text) {
            if m.start() > last {
                tokens.push(text[last..m.start()].to_string());
            }
            // 空白只是分隔符，標點本身保留為 token
            if !m.as_str().chars().all(char::is_whitespace) {
                tokens.push(m.as_str().to_string());
            }
            last = m.end();
        }

        if last < text.len() {
            tokens.push(text[last..].to_string());
        }

        tokens
    }

    pub fn classify(&self, token: &str) -> TokenKind {
        if !token.is_empty() && token.chars().all(|c| self.is_punctuation_char(c)) {
            TokenKind::Punctuation
        } else {
            TokenKind::Word
        }
    }

    pub fn words<'a>(&self, tokens: &'a [String]) -> Vec<&'a str> {
        tokens
            .iter()
            .filter(|t| self.classify(t) == TokenKind::Word)
            .map(String::as_str)
            .collect()
    }
}
