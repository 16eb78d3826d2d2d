//! Creator representation and personal-name splitting

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Role a creator plays for a citation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CreatorRole {
    #[default]
    Author,
}

impl CreatorRole {
    /// The creator type string used by reference managers
    pub fn as_str(&self) -> &'static str {
        match self {
            CreatorRole::Author => "author",
        }
    }
}

/// A person credited on a citation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Creator {
    pub role: CreatorRole,
    pub given_name: String,
    pub family_name: String,
}

impl Creator {
    /// Create an author from already-segmented name parts
    pub fn author(given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self {
            role: CreatorRole::Author,
            given_name: given_name.into(),
            family_name: family_name.into(),
        }
    }

    /// Create an author from a free-form personal name
    pub fn author_from_name(name: &str) -> Self {
        let PersonName { given, family } = split_name(name);
        Self::author(given, family)
    }

    /// Format as "Given Family" for display
    pub fn display_name(&self) -> String {
        if self.given_name.is_empty() {
            self.family_name.clone()
        } else {
            format!("{} {}", self.given_name, self.family_name)
        }
    }
}

/// A personal name split into its given and family components
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersonName {
    pub given: String,
    pub family: String,
}

lazy_static! {
    static ref HONORIFICS: HashSet<&'static str> = {
        ["dr", "prof", "professor", "mr", "mrs", "ms", "sir"]
            .into_iter()
            .collect()
    };

    static ref SUFFIXES: HashSet<&'static str> = {
        ["jr", "sr", "ii", "iii", "iv", "phd", "md", "esq"]
            .into_iter()
            .collect()
    };

    /// Lowercase particles that belong to the family name
    static ref PARTICLES: HashSet<&'static str> = {
        [
            "van", "von", "der", "den", "de", "da", "del", "della", "di", "du", "dos", "la",
            "le", "ter", "ten",
        ]
        .into_iter()
        .collect()
    };
}

/// Split a free-form personal name into given and family names.
///
/// Handles both "Given Family" and "Family, Given" forms. Honorifics such as
/// "Dr." are dropped, as are generational and degree suffixes. Lowercase
/// particles ("van", "de") preceding the surname stay with the family name.
pub fn split_name(name: &str) -> PersonName {
    let collapsed = collapse_whitespace(name);
    if collapsed.is_empty() {
        return PersonName::default();
    }

    // "Family, Given" unless everything after the comma is a suffix
    let segments: Vec<&str> = collapsed
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let named: Vec<&str> = segments
        .iter()
        .copied()
        .filter(|s| !is_suffix(s))
        .collect();
    if named.len() >= 2 {
        let family = strip_suffixes(named[0]);
        let given = strip_honorifics(&named[1..].join(" "));
        return PersonName { given, family };
    }

    let joined = named.first().copied().unwrap_or_default();
    let mut tokens: Vec<&str> = joined.split(' ').collect();

    while tokens.len() > 1 && is_honorific(tokens[0]) {
        tokens.remove(0);
    }
    while tokens.len() > 1 && tokens.last().is_some_and(|t| is_suffix(t)) {
        tokens.pop();
    }

    let Some(last) = tokens.pop() else {
        return PersonName::default();
    };

    let mut family_start = tokens.len();
    while family_start > 0 && is_particle(tokens[family_start - 1]) {
        family_start -= 1;
    }

    let mut family_parts: Vec<&str> = tokens[family_start..].to_vec();
    family_parts.push(last);

    PersonName {
        given: tokens[..family_start].join(" "),
        family: family_parts.join(" "),
    }
}

fn normalized_token(token: &str) -> String {
    token.trim_end_matches(['.', ',']).to_lowercase()
}

fn is_honorific(token: &str) -> bool {
    HONORIFICS.contains(normalized_token(token).as_str())
}

fn is_suffix(token: &str) -> bool {
    SUFFIXES.contains(normalized_token(token).replace('.', "").as_str())
}

fn is_particle(token: &str) -> bool {
    // Capitalised forms are treated as given names
    token.chars().next().is_some_and(char::is_lowercase) && PARTICLES.contains(token)
}

fn strip_honorifics(given: &str) -> String {
    let tokens: Vec<&str> = given.split(' ').collect();
    let start = tokens
        .iter()
        .take(tokens.len().saturating_sub(1))
        .take_while(|t| is_honorific(t))
        .count();
    tokens[start..].join(" ")
}

fn strip_suffixes(family: &str) -> String {
    let mut tokens: Vec<&str> = family.split(' ').collect();
    while tokens.len() > 1 && tokens.last().is_some_and(|t| is_suffix(t)) {
        tokens.pop();
    }
    tokens.join(" ")
}

/// Collapse runs of whitespace into a single space and trim.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
