/// Parsing helpers and the document abstraction for game constants files
pub mod data;
/// The damage-to-armour effectiveness matrix
pub mod damage_to_armour;
/// Error definitions
pub mod error;
/// Loading `GameConstants.xml` into a [`store::ConstantsStore`]
pub mod game_constants;
/// Damage types, armour types and game modes
pub mod game_types;
/// Types the game engine requires every constants file to define
pub mod hardcoded;
/// Registries holding loaded constants
pub mod store;
