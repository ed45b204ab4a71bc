//! Plugin identifier validation and title derivation.

use std::fmt;

use crate::domain::error::DomainError;

/// Maximum accepted identifier length, in bytes.
pub const MAX_NAME_LEN: usize = 64;

/// A validated kebab-case plugin identifier.
///
/// Invariant: matches `^[a-z][a-z0-9]*(-[a-z0-9]+)*$` and is at most
/// [`MAX_NAME_LEN`] characters. Constructed only through [`PluginName::parse`],
/// so holding one proves validation already happened.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginName(String);

impl PluginName {
    /// Validate a raw identifier.
    ///
    /// The pattern is checked before the length bound so that each failure
    /// mode gets its own diagnostic.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if !is_kebab_case(raw) {
            return Err(DomainError::NotKebabCase {
                name: raw.to_string(),
            });
        }
        if raw.len() > MAX_NAME_LEN {
            return Err(DomainError::NameTooLong {
                name: raw.to_string(),
                length: raw.len(),
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Title-cased display form: `my-plugin` becomes `My Plugin`.
    pub fn title(&self) -> String {
        title_case(&self.0)
    }
}

impl fmt::Display for PluginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Capitalize each hyphen-separated word and join with spaces.
///
/// Shared with the skill renderer, which applies it to the derived
/// `<plugin-name>-skill` identifier rather than the plugin name itself.
pub fn title_case(name: &str) -> String {
    name.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// `^[a-z][a-z0-9]*(-[a-z0-9]+)*$`, checked without a regex engine.
///
/// The first word must start with a letter; subsequent words may start with
/// a digit. Empty words reject leading, trailing, and doubled hyphens.
fn is_kebab_case(s: &str) -> bool {
    let mut words = s.split('-');

    // split() always yields at least one item, possibly empty.
    let first = words.next().unwrap_or_default();
    let mut chars = first.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    if !chars.all(is_word_char) {
        return false;
    }

    words.all(|w| !w.is_empty() && w.chars().all(is_word_char))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

// ── tests ─────────────────────────────────────────────────────────────────────
