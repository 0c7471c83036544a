//! Damage and armour types the game engine refers to by name.
//!
//! A constants file that omits any of these for the active [`GameMode`] cannot be used
//! by the engine, so loading it fails.

use crate::error::ErrorKind;
use crate::game_types::{Armour, Damage, GameMode};

const EAW_DAMAGE_TYPES: &[&str] = &["Damage_Default", "Damage_Fire", "Damage_Collision"];
const EAW_ARMOUR_TYPES: &[&str] = &["Armor_Default", "Armor_Structure"];

const FOC_DAMAGE_TYPES: &[&str] = &[
    "Damage_Default",
    "Damage_Fire",
    "Damage_Collision",
    "Damage_Corruption",
];
const FOC_ARMOUR_TYPES: &[&str] = &["Armor_Default", "Armor_Structure", "Armor_Hero"];

/// Required damage and armour types for one game mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSet {
    damage: Vec<Damage>,
    armour: Vec<Armour>,
}

impl TypeSet {
    pub fn new(damage: Vec<Damage>, armour: Vec<Armour>) -> Self {
        Self { damage, armour }
    }

    fn from_names(damage: &[&str], armour: &[&str]) -> Self {
        Self {
            damage: damage.iter().copied().map(Damage::new).collect(),
            armour: armour.iter().copied().map(Armour::new).collect(),
        }
    }

    /// Built-in Empire at War requirements.
    pub fn eaw() -> Self {
        Self::from_names(EAW_DAMAGE_TYPES, EAW_ARMOUR_TYPES)
    }

    /// Built-in Forces of Corruption requirements.
    pub fn foc() -> Self {
        Self::from_names(FOC_DAMAGE_TYPES, FOC_ARMOUR_TYPES)
    }

    pub fn damage_types(&self) -> &[Damage] {
        &self.damage
    }

    pub fn armour_types(&self) -> &[Armour] {
        &self.armour
    }
}

/// The required [`TypeSet`] for every playable [`GameMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardcodedTypes {
    eaw: TypeSet,
    foc: TypeSet,
}

impl Default for HardcodedTypes {
    fn default() -> Self {
        Self {
            eaw: TypeSet::eaw(),
            foc: TypeSet::foc(),
        }
    }
}

impl HardcodedTypes {
    pub fn new(eaw: TypeSet, foc: TypeSet) -> Self {
        Self { eaw, foc }
    }

    pub fn for_mode(&self, mode: GameMode) -> Result<&TypeSet, ErrorKind> {
        match mode {
            GameMode::EaW => Ok(&self.eaw),
            GameMode::FoC => Ok(&self.foc),
            GameMode::Undefined => Err(ErrorKind::NoGameMode),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn foc_extends_eaw() {
        let hardcoded = HardcodedTypes::default();
        let eaw = hardcoded.for_mode(GameMode::EaW).unwrap();
        let foc = hardcoded.for_mode(GameMode::FoC).unwrap();
        assert!(eaw.damage_types().iter().all(|d| foc.damage_types().contains(d)));
        assert!(eaw.armour_types().iter().all(|a| foc.armour_types().contains(a)));
        assert!(foc.damage_types().len() > eaw.damage_types().len());
    }

    #[test]
    fn undefined_mode_has_no_set() {
        let hardcoded = HardcodedTypes::default();
        assert!(matches!(
            hardcoded.for_mode(GameMode::Undefined),
            Err(ErrorKind::NoGameMode)
        ));
    }
}
