// src/classify.rs
//! Space-topic gate: keyword categories, config loading, regex compilation,
//! and the whole-word match test applied to feed text.

use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_KEYWORDS_TOML: &str = include_str!("../config/keywords.toml");

pub const ENV_KEYWORDS_CONFIG_PATH: &str = "KEYWORDS_CONFIG_PATH";

/// Classifier built from the embedded default keyword lists. Shared by the
/// binary and by tests that don't need a custom vocabulary.
pub static DEFAULT_CLASSIFIER: Lazy<KeywordClassifier> = Lazy::new(|| {
    KeywordClassifier::from_toml_str(DEFAULT_KEYWORDS_TOML).expect("embedded keywords.toml is valid")
});

/// Keyword categories as they appear in `config/keywords.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordConfig {
    pub celestial_bodies: Vec<String>,
    pub space_exploration: Vec<String>,
    pub space_science: Vec<String>,
}

impl KeywordConfig {
    fn all_keywords(&self) -> impl Iterator<Item = &str> {
        self.celestial_bodies
            .iter()
            .chain(self.space_exploration.iter())
            .chain(self.space_science.iter())
            .map(String::as_str)
    }
}

#[derive(Debug)]
struct CompiledKeyword {
    keyword: String,
    re: Regex,
}

/// Whole-word, case-insensitive keyword matcher. One compiled boundary
/// pattern per keyword; a single hit anywhere qualifies the text. No
/// stemming, no scoring, no negation handling.
#[derive(Debug)]
pub struct KeywordClassifier {
    patterns: Vec<CompiledKeyword>,
}

impl KeywordClassifier {
    /// Load from a TOML file. Uses KEYWORDS_CONFIG_PATH or falls back to the
    /// embedded default lists.
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var(ENV_KEYWORDS_CONFIG_PATH) {
            Ok(p) => {
                let path = PathBuf::from(p);
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("reading keywords config at {}", path.display()))?;
                Self::from_toml_str(&content)
            }
            Err(_) => Self::from_toml_str(DEFAULT_KEYWORDS_TOML),
        }
    }

    /// Build from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let cfg: KeywordConfig = toml::from_str(toml_str).context("parsing keywords toml")?;
        Self::from_config(&cfg)
    }

    pub fn from_config(cfg: &KeywordConfig) -> anyhow::Result<Self> {
        let mut patterns = Vec::new();
        for kw in cfg.all_keywords() {
            let kw = kw.trim();
            if kw.is_empty() {
                continue;
            }
            // Word boundaries avoid partial matches ("planets" must not hit
            // "planet"); multi-word keywords keep their inner whitespace.
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(kw)))
                .with_context(|| format!("keyword `{kw}` regex error"))?;
            patterns.push(CompiledKeyword {
                keyword: kw.to_string(),
                re,
            });
        }
        Ok(Self { patterns })
    }

    /// True if the text contains a whole-word match of any configured keyword.
    pub fn is_space_related(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.re.is_match(text))
    }

    /// All keywords that hit in `text`, for diagnostics.
    pub fn matched_keywords(&self, text: &str) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| p.re.is_match(text))
            .map(|p| p.keyword.clone())
            .collect()
    }

    pub fn keyword_count(&self) -> usize {
        self.patterns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> KeywordClassifier {
        KeywordClassifier::from_toml_str(DEFAULT_KEYWORDS_TOML).expect("load default keywords")
    }

    #[test]
    fn embedded_config_compiles() {
        let c = classifier();
        assert!(c.keyword_count() > 50, "expected the full keyword bank");
    }

    #[test]
    fn whole_word_hit_qualifies() {
        let c = classifier();
        assert!(c.is_space_related("Apollo 11 landed on the Moon."));
        assert!(c.is_space_related("A new comet was discovered."));
        assert!(c.is_space_related("The International Space Station completed its 100,000th orbit."));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let c = classifier();
        assert!(c.is_space_related("NASA announced a new mission."));
        assert!(c.is_space_related("nasa announced a new mission."));
        assert!(c.is_space_related("The HUBBLE telescope was serviced."));
    }

    #[test]
    fn substring_does_not_match() {
        let c = classifier();
        // "planets" is not a whole-word match for keyword "planet", and is
        // not a keyword itself.
        assert!(!c.is_space_related("The planets aligned for the gala."));
        // "sunday" must not hit "sun".
        assert!(!c.is_space_related("The treaty was signed on a quiet sunday."));
    }

    #[test]
    fn compound_keyword_matches_as_its_own_entry() {
        let c = classifier();
        // "planetary" hits because it is a configured keyword, not because of
        // any stemming of "planet".
        assert!(c.is_space_related("A planetary alignment was observed."));
        let matched = c.matched_keywords("A planetary alignment was observed.");
        assert!(matched.iter().any(|k| k == "planetary"));
        assert!(!matched.iter().any(|k| k == "planet"));
    }

    #[test]
    fn multi_word_keywords_match() {
        let c = classifier();
        assert!(c.is_space_related("A black hole was imaged for the first time."));
        assert!(c.is_space_related("The space shuttle Discovery launched."));
    }

    #[test]
    fn unrelated_text_fails() {
        let c = classifier();
        assert!(!c.is_space_related("The treaty of Versailles was signed."));
        assert!(!c.is_space_related("A new parliament was elected in 1952."));
    }

    #[test]
    fn custom_toml_overrides_vocabulary() {
        let toml = r#"
celestial_bodies = ["zubenelgenubi"]
space_exploration = []
space_science = []
"#;
        let c = KeywordClassifier::from_toml_str(toml).expect("custom toml");
        assert!(c.is_space_related("Observations of Zubenelgenubi continued."));
        assert!(!c.is_space_related("Apollo 11 landed on the Moon."));
    }
}
