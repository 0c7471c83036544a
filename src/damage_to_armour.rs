//! The damage-to-armour effectiveness matrix.

use std::collections::HashMap;

use itertools::Itertools;

use crate::data::parser_utils::{modifier_record_list, parse_section};
use crate::error::ErrorKind;
use crate::game_constants::DAMAGE_TO_ARMOUR_MOD_TAG;
use crate::game_types::{Armour, Damage};
use crate::store::Registry;

/// How effective `damage` is against `armour`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageToArmour {
    pub damage: Damage,
    pub armour: Armour,
    pub factor: f32,
}

impl DamageToArmour {
    /// Factor used for every pair the constants file does not override.
    pub const DEFAULT_FACTOR: f32 = 1.0;

    pub fn new(damage: Damage, armour: Armour) -> Self {
        Self {
            damage,
            armour,
            factor: Self::DEFAULT_FACTOR,
        }
    }

    pub fn with_factor(damage: Damage, armour: Armour, factor: f32) -> Self {
        Self {
            damage,
            armour,
            factor,
        }
    }

    /// Parse the text of a `<Damage_To_Armor_Mod>` section into overlay records.
    pub fn parse_list(text: &str) -> Result<Vec<DamageToArmour>, ErrorKind> {
        let records = parse_section(DAMAGE_TO_ARMOUR_MOD_TAG, text, modifier_record_list)?;
        Ok(records
            .into_iter()
            .map(|(damage, armour, factor)| {
                DamageToArmour::with_factor(damage.into(), armour.into(), factor)
            })
            .collect())
    }
}

/// Every (damage, armour) pair exactly once, in damage-major order.
#[derive(Debug, Clone, Default)]
pub struct DamageToArmourMatrix {
    entries: Vec<DamageToArmour>,
    index: HashMap<Damage, HashMap<Armour, usize>>,
}

impl DamageToArmourMatrix {
    /// Cross product of both registries with [`DamageToArmour::DEFAULT_FACTOR`].
    pub fn build(damage_types: &Registry<Damage>, armour_types: &Registry<Armour>) -> Self {
        let mut matrix = Self::default();
        for (damage, armour) in damage_types.iter().cartesian_product(armour_types.iter()) {
            matrix.insert(DamageToArmour::new(damage.clone(), armour.clone()));
        }

        matrix
    }

    fn insert(&mut self, entry: DamageToArmour) {
        let previous = self
            .index
            .entry(entry.damage.clone())
            .or_default()
            .insert(entry.armour.clone(), self.entries.len());
        debug_assert!(
            previous.is_none(),
            "pair ({}, {}) inserted twice",
            entry.damage,
            entry.armour
        );
        self.entries.push(entry);
    }

    pub fn get(&self, damage: &Damage, armour: &Armour) -> Option<&DamageToArmour> {
        let idx = *self.index.get(damage)?.get(armour)?;
        self.entries.get(idx)
    }

    pub fn get_mut(&mut self, damage: &Damage, armour: &Armour) -> Option<&mut DamageToArmour> {
        let idx = *self.index.get(damage)?.get(armour)?;
        self.entries.get_mut(idx)
    }

    pub fn factor(&self, damage: &Damage, armour: &Armour) -> Option<f32> {
        self.get(damage, armour).map(|entry| entry.factor)
    }

    /// Overwrite the factor of the entry matching `record`'s pair.
    pub fn apply(&mut self, record: &DamageToArmour) -> Result<(), ErrorKind> {
        let entry = self.get_mut(&record.damage, &record.armour).ok_or_else(|| {
            ErrorKind::UnknownDamageToArmourPair {
                damage: record.damage.name().to_string(),
                armour: record.armour.name().to_string(),
            }
        })?;
        entry.factor = record.factor;
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DamageToArmour> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

impl<'a> IntoIterator for &'a DamageToArmourMatrix {
    type Item = &'a DamageToArmour;
    type IntoIter = std::slice::Iter<'a, DamageToArmour>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
