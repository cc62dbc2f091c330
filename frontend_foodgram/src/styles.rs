// frontend_foodgram/src/styles.rs
use std::collections::HashMap;

use gloo::console::error;
use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;
use yew::prelude::*;

const TECHNOLOGIES_STYLES: &str = include_str!("../config/technologies.styles.json");

static TECHNOLOGIES_CLASSES: Lazy<ClassMap> = Lazy::new(|| {
    match ClassMap::from_json(TECHNOLOGIES_STYLES) {
        Ok(map) => {
            for key in map.missing_keys() {
                error!(format!("No class name configured for style key `{}`", key.name()));
            }
            map
        }
        Err(err) => {
            error!(format!("Failed to load technologies styles, rendering unstyled: {}", err));
            ClassMap::default()
        }
    }
});

/// Logical style keys used by the information pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleKey {
    Title,
    Content,
    Section,
    SectionHeader,
    Text,
    List,
    ListItem,
}

impl StyleKey {
    pub const ALL: [StyleKey; 7] = [
        StyleKey::Title,
        StyleKey::Content,
        StyleKey::Section,
        StyleKey::SectionHeader,
        StyleKey::Text,
        StyleKey::List,
        StyleKey::ListItem,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StyleKey::Title => "title",
            StyleKey::Content => "content",
            StyleKey::Section => "section",
            StyleKey::SectionHeader => "sectionHeader",
            StyleKey::Text => "text",
            StyleKey::List => "list",
            StyleKey::ListItem => "listItem",
        }
    }
}

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("invalid style map: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ClassMap(HashMap<String, String>);

impl ClassMap {
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn get(&self, key: StyleKey) -> Option<&str> {
        self.0.get(key.name()).map(String::as_str)
    }

    /// Empty classes for unknown keys, so markup still renders unstyled.
    pub fn class(&self, key: StyleKey) -> Classes {
        match self.get(key) {
            Some(name) => classes!(name.to_string()),
            None => Classes::new(),
        }
    }

    pub fn missing_keys(&self) -> Vec<StyleKey> {
        StyleKey::ALL
            .into_iter()
            .filter(|key| self.get(*key).is_none())
            .collect()
    }
}

pub fn technologies(key: StyleKey) -> Classes {
    TECHNOLOGIES_CLASSES.class(key)
}
