//! Named icon sets that tiles draw their values from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::error::GameError;

/// Built-in theme used when nothing else is configured.
pub const DEFAULT_THEME: &str = "numbers";

const EMOJIS: [&str; 20] = [
    "😃", "😂", "😍", "🤩", "🥳", "😎", "😇", "🤖", "🤡", "👽", "🎃", "💀", "👻", "🦄", "🐵", "🐶",
    "🐱", "🐭", "🐹", "🐰",
];

const ANIMALS: [&str; 20] = [
    "🐶", "🐱", "🐻", "🐰", "🦊", "🐼", "🦁", "🐸", "🐯", "🐮", "🐷", "🐵", "🦉", "🦆", "🦇", "🦄",
    "🐢", "🐙", "🦎", "🦕",
];

const FRUITS: [&str; 20] = [
    "🍎", "🍌", "🍇", "🍉", "🍒", "🥭", "🍍", "🍓", "🥥", "🍋", "🍊", "🥝", "🍑", "🍈", "🥑", "🥦",
    "🍅", "🌽", "🍆", "🥕",
];

const SPORTS: [&str; 20] = [
    "⚽", "🏀", "🏈", "🎾", "⚾", "🏐", "🏉", "🥎", "🥊", "🏓", "🏸", "🥋", "⛳", "🏹", "🏒", "🏂",
    "🛹", "🎿", "🛼", "🚴",
];

const NUMBER_COUNT: u32 = 50;

/// Opaque displayable value carried by a tile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconSymbol(String);

impl IconSymbol {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IconSymbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A named, ordered set of symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    symbols: Vec<IconSymbol>,
}

impl Theme {
    pub fn new(name: impl Into<String>, symbols: Vec<IconSymbol>) -> Self {
        Self {
            name: name.into(),
            symbols,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbols(&self) -> &[IconSymbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Ordered lookup of every theme a session can pick from.
///
/// Custom themes replace a built-in theme of the same name in place and are
/// otherwise appended after the built-ins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

impl ThemeRegistry {
    /// Registry holding only the built-in themes.
    pub fn builtin() -> Self {
        let numbers = (1..=NUMBER_COUNT)
            .map(|n| IconSymbol::new(n.to_string()))
            .collect();
        Self {
            themes: vec![
                Theme::new("numbers", numbers),
                Theme::new("emojis", glyphs(&EMOJIS)),
                Theme::new("animals", glyphs(&ANIMALS)),
                Theme::new("fruits", glyphs(&FRUITS)),
                Theme::new("sports", glyphs(&SPORTS)),
            ],
        }
    }

    pub fn with_custom(mut self, custom: impl IntoIterator<Item = Theme>) -> Self {
        for theme in custom {
            match self.themes.iter_mut().find(|t| t.name == theme.name) {
                Some(existing) => *existing = theme,
                None => self.themes.push(theme),
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Result<&Theme, GameError> {
        self.themes
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| GameError::UnknownTheme {
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> Vec<String> {
        self.themes.iter().map(|t| t.name.clone()).collect()
    }
}

fn glyphs(set: &[&str]) -> Vec<IconSymbol> {
    set.iter().map(|s| IconSymbol::from(*s)).collect()
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
