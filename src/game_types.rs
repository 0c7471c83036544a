//! Game concept types for the combat model: damage types, armour types and game modes.

use std::fmt;

use crate::data::parser_utils::{parse_section, type_name_list};
use crate::error::ErrorKind;
use crate::game_constants::{ARMOUR_TYPES_TAG, DAMAGE_TYPES_TAG};

// =============================================================================
// Damage / Armour
// =============================================================================

/// A named damage category (`Damage_Default`, `Damage_Fighter`, ...).
///
/// Two damage types are the same type when their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Damage(String);

impl Damage {
    pub fn new(name: impl Into<String>) -> Self {
        Damage(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Parse the text of a `<Damage_Types>` section.
    pub fn parse_list(text: &str) -> Result<Vec<Damage>, ErrorKind> {
        let names = parse_section(DAMAGE_TYPES_TAG, text, type_name_list)?;
        Ok(names.into_iter().map(Damage::new).collect())
    }
}

impl fmt::Display for Damage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Damage {
    fn from(name: &str) -> Self {
        Damage::new(name)
    }
}

/// A named armour category (`Armor_Default`, `Armor_Structure`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Armour(String);

impl Armour {
    pub fn new(name: impl Into<String>) -> Self {
        Armour(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Parse the text of an `<Armor_Types>` section.
    pub fn parse_list(text: &str) -> Result<Vec<Armour>, ErrorKind> {
        let names = parse_section(ARMOUR_TYPES_TAG, text, type_name_list)?;
        Ok(names.into_iter().map(Armour::new).collect())
    }
}

impl fmt::Display for Armour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Armour {
    fn from(name: &str) -> Self {
        Armour::new(name)
    }
}

// =============================================================================
// Game mode
// =============================================================================

/// Which ruleset the host engine runs, and so which types it hardcodes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bin", derive(clap::ValueEnum))]
pub enum GameMode {
    /// Star Wars: Empire at War.
    #[cfg_attr(feature = "bin", value(name = "eaw"))]
    EaW,
    /// Forces of Corruption expansion.
    #[cfg_attr(feature = "bin", value(name = "foc"))]
    FoC,
    #[default]
    #[cfg_attr(feature = "bin", value(skip))]
    Undefined,
}

impl GameMode {
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::EaW => "EaW",
            GameMode::FoC => "FoC",
            GameMode::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn damage_list_keeps_order_and_duplicates() {
        let parsed = Damage::parse_list("Damage_B, Damage_A\nDamage_B").unwrap();
        let names: Vec<_> = parsed.iter().map(Damage::name).collect();
        assert_eq!(names, vec!["Damage_B", "Damage_A", "Damage_B"]);
    }

    #[test]
    fn armour_list_error_names_section() {
        let err = Armour::parse_list("Armor_Default | Armor_Hero").unwrap_err();
        assert!(matches!(err, ErrorKind::SectionParse { tag, .. } if tag == "Armor_Types"));
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_ne!(Damage::new("Damage_Default"), Damage::new("damage_default"));
        assert_eq!(Armour::from("Armor_Default"), Armour::new("Armor_Default".to_string()));
    }

    #[test]
    fn default_mode_is_undefined() {
        assert_eq!(GameMode::default(), GameMode::Undefined);
        assert_eq!(GameMode::FoC.to_string(), "FoC");
    }
}
