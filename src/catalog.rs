//! The card catalog and alias mapping files.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use anyhow::Context;
use fs_err as fs;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// A card identifier. Catalog files are inconsistent about whether codes
/// are JSON strings or integers, so both deserialize to the same
/// normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardCode(String);

impl CardCode {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CardCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(formatter)
    }
}

impl From<&str> for CardCode {
    fn from(code: &str) -> Self {
        CardCode(code.to_owned())
    }
}

impl From<u64> for CardCode {
    fn from(code: u64) -> Self {
        CardCode(code.to_string())
    }
}

impl<'de> Deserialize<'de> for CardCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CardCodeVisitor)
    }
}

struct CardCodeVisitor;

impl<'de> Visitor<'de> for CardCodeVisitor {
    type Value = CardCode;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a card code as a string or an integer")
    }

    fn visit_str<E>(self, code: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(CardCode(code.to_owned()))
    }

    fn visit_u64<E>(self, code: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(CardCode(code.to_string()))
    }

    fn visit_i64<E>(self, code: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(CardCode(code.to_string()))
    }
}

/// One record from the catalog file. Records missing a code are kept by
/// the parser; the download loop decides how to report them.
#[derive(Debug, Clone, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub code: Option<CardCode>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub points: i64,
}

impl Card {
    /// Name for log output, falling back to the code when the catalog
    /// carries no display name.
    pub fn display_name(&self) -> String {
        match (&self.name, &self.code) {
            (Some(name), _) => name.clone(),
            (None, Some(code)) => format!("Card {}", code),
            (None, None) => "unnamed card".to_owned(),
        }
    }
}

/// The catalog file: a JSON array of card records.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let catalog = serde_json::from_str(&contents)
            .with_context(|| format!("malformed catalog file {}", path.display()))?;

        Ok(catalog)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Index by code for alias lookups. Records without a code are left
    /// out.
    pub fn index(&self) -> BTreeMap<&CardCode, &Card> {
        self.cards
            .iter()
            .filter_map(|card| card.code.as_ref().map(|code| (code, card)))
            .collect()
    }
}

/// The alias file: a JSON object mapping an original card code to the
/// alias codes that share its points value.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct AliasMap {
    aliases: BTreeMap<CardCode, Vec<CardCode>>,
}

impl AliasMap {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let aliases = serde_json::from_str(&contents)
            .with_context(|| format!("malformed alias file {}", path.display()))?;

        Ok(aliases)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CardCode, &[CardCode])> {
        self.aliases
            .iter()
            .map(|(original, aliases)| (original, aliases.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_parse_from_strings_and_integers() {
        let cards: Vec<Card> = serde_json::from_str(
            r#"[{"code": "12345", "points": 3}, {"code": 67890, "points": 5}]"#,
        )
        .unwrap();

        assert_eq!(cards[0].code, Some(CardCode::from("12345")));
        assert_eq!(cards[1].code, Some(CardCode::from("67890")));
    }

    #[test]
    fn missing_points_default_to_zero() {
        let card: Card = serde_json::from_str(r#"{"code": "1", "name": "Kuriboh"}"#).unwrap();

        assert_eq!(card.points, 0);
    }

    #[test]
    fn records_without_a_code_still_parse() {
        let card: Card = serde_json::from_str(r#"{"name": "mystery", "points": 2}"#).unwrap();

        assert_eq!(card.code, None);
        assert_eq!(card.display_name(), "mystery");
    }

    #[test]
    fn display_name_falls_back_to_the_code() {
        let card: Card = serde_json::from_str(r#"{"code": 42}"#).unwrap();

        assert_eq!(card.display_name(), "Card 42");
    }

    #[test]
    fn catalog_indexes_only_coded_records() {
        let catalog: Catalog = serde_json::from_str(
            r#"[{"code": "1", "points": 10}, {"name": "no code"}, {"code": 2, "points": 20}]"#,
        )
        .unwrap();

        let index = catalog.index();
        assert_eq!(index.len(), 2);
        assert_eq!(index[&CardCode::from("1")].points, 10);
        assert_eq!(index[&CardCode::from("2")].points, 20);
    }

    #[test]
    fn alias_values_accept_integer_codes() {
        let aliases: AliasMap =
            serde_json::from_str(r#"{"100": [200, "300"], "400": []}"#).unwrap();

        assert_eq!(aliases.len(), 2);
        let entries: Vec<_> = aliases.iter().collect();
        assert_eq!(
            entries[0],
            (
                &CardCode::from("100"),
                &[CardCode::from("200"), CardCode::from("300")][..]
            )
        );
    }
}
