//! Message catalogue for user-facing strings
//!
//! Templates live in a YAML catalogue keyed by dotted message ids, with
//! `{0}`-style positional placeholders. The built-in English catalogue is
//! embedded; hosts can load their own with [`MessageCatalogue::from_yaml`].

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_MESSAGES: &str = include_str!("messages.yaml");

static DEFAULT_CATALOGUE: OnceLock<MessageCatalogue> = OnceLock::new();
static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

/// Errors from loading a message catalogue.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("Failed to parse message catalogue: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A keyed set of message templates.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageCatalogue {
    #[serde(flatten)]
    messages: HashMap<String, String>,
}

impl MessageCatalogue {
    /// Load a catalogue from a flat `key: template` YAML mapping.
    pub fn from_yaml(yaml: &str) -> Result<Self, BundleError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Look up a template and substitute positional placeholders. A missing
    /// key comes back as `!key!` so it shows up in output without failing
    /// the pass; placeholders without a matching argument stay as written.
    pub fn message(&self, key: &str, args: &[&str]) -> String {
        match self.messages.get(key) {
            Some(template) => substitute(template, args),
            None => format!("!{}!", key),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn substitute(template: &str, args: &[&str]) -> String {
    let placeholder =
        PLACEHOLDER.get_or_init(|| Regex::new(r"\{(\d+)\}").expect("placeholder pattern is valid"));
    placeholder
        .replace_all(template, |caps: &Captures<'_>| {
            let index: usize = caps[1].parse().unwrap_or(usize::MAX);
            match args.get(index) {
                Some(arg) => (*arg).to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Look up a message in the built-in catalogue.
pub fn message(key: &str, args: &[&str]) -> String {
    default_catalogue().message(key, args)
}

fn default_catalogue() -> &'static MessageCatalogue {
    DEFAULT_CATALOGUE.get_or_init(|| {
        MessageCatalogue::from_yaml(DEFAULT_MESSAGES).unwrap_or_else(|_| MessageCatalogue {
            messages: HashMap::new(),
        })
    })
}
