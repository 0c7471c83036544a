use std::collections::HashSet;
use std::hash::Hash;

use bon::Builder;

use crate::damage_to_armour::DamageToArmourMatrix;
use crate::game_types::{Armour, Damage, GameMode};
use crate::hardcoded::HardcodedTypes;

/// Insertion-ordered set. Values are never removed individually, only by [`Registry::clear`].
#[derive(Debug, Clone)]
pub struct Registry<T> {
    items: Vec<T>,
    seen: HashSet<T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
        }
    }
}

impl<T: Clone + Eq + Hash> Registry<T> {
    /// Returns `false` without inserting if an equal value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        if !self.seen.insert(value.clone()) {
            return false;
        }
        self.items.push(value);
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        self.seen.contains(value)
    }
}

impl<T> Registry<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.seen.clear();
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Everything loaded from a game constants file, plus the settings the load runs under.
///
/// ```
/// use dtac::game_types::GameMode;
/// use dtac::store::ConstantsStore;
///
/// let store = ConstantsStore::builder().game_mode(GameMode::FoC).build();
/// assert!(!store.is_loaded());
/// ```
#[derive(Builder, Debug, Clone, Default)]
pub struct ConstantsStore {
    #[builder(default)]
    game_mode: GameMode,
    #[builder(default)]
    hardcoded: HardcodedTypes,
    #[builder(skip)]
    damage_types: Registry<Damage>,
    #[builder(skip)]
    armour_types: Registry<Armour>,
    #[builder(skip)]
    damage_to_armour: DamageToArmourMatrix,
    #[builder(skip)]
    loaded: bool,
}

impl ConstantsStore {
    pub fn new(game_mode: GameMode) -> Self {
        Self::builder().game_mode(game_mode).build()
    }

    pub fn game_mode(&self) -> GameMode {
        self.game_mode
    }

    pub fn set_game_mode(&mut self, game_mode: GameMode) {
        self.game_mode = game_mode;
    }

    pub fn hardcoded(&self) -> &HardcodedTypes {
        &self.hardcoded
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub(crate) fn set_loaded(&mut self, loaded: bool) {
        self.loaded = loaded;
    }

    pub fn damage_types(&self) -> &Registry<Damage> {
        &self.damage_types
    }

    pub fn armour_types(&self) -> &Registry<Armour> {
        &self.armour_types
    }

    pub fn damage_to_armour(&self) -> &DamageToArmourMatrix {
        &self.damage_to_armour
    }

    pub(crate) fn damage_types_mut(&mut self) -> &mut Registry<Damage> {
        &mut self.damage_types
    }

    pub(crate) fn armour_types_mut(&mut self) -> &mut Registry<Armour> {
        &mut self.armour_types
    }

    pub(crate) fn damage_to_armour_mut(&mut self) -> &mut DamageToArmourMatrix {
        &mut self.damage_to_armour
    }

    /// Empty all three registries and drop the loaded flag. Game mode and hardcoded sets are kept.
    pub fn clear_all(&mut self) {
        self.damage_types.clear();
        self.armour_types.clear();
        self.damage_to_armour.clear();
        self.loaded = false;
    }
}
