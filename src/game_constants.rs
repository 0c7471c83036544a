use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::data::{ConstantsDocument, XmlConstantsDocument};
use crate::damage_to_armour::{DamageToArmour, DamageToArmourMatrix};
use crate::error::{ErrorKind, IResult, failure_from_kind};
use crate::game_types::{Armour, Damage};
use crate::hardcoded::TypeSet;
use crate::store::ConstantsStore;

/// Load `GameConstants.xml` from disk into `store`.
///
/// A store that already holds a completed load is cleared first. On failure the store is
/// left empty and not loaded.
pub fn load_from_game_constants_file(
    store: &mut ConstantsStore,
    path: impl AsRef<Path>,
) -> IResult<()> {
    let path = path.as_ref();
    debug_assert!(
        !path.as_os_str().is_empty(),
        "game constants path must not be empty"
    );

    info!("loading game constants from {}", path.display());
    let xml = std::fs::read_to_string(path).map_err(|err| {
        failure_from_kind(ErrorKind::Io {
            path: path.to_path_buf(),
            err,
        })
    })?;

    load_from_xml(store, &xml)
}

/// Load game constants from XML text.
pub fn load_from_xml(store: &mut ConstantsStore, xml: &str) -> IResult<()> {
    let doc = XmlConstantsDocument::parse(xml)?;
    load_from_document(store, &doc)
}

/// Load game constants from an already parsed document.
pub fn load_from_document<D: ConstantsDocument>(store: &mut ConstantsStore, doc: &D) -> IResult<()> {
    if store.is_loaded() {
        debug!("game constants already loaded, clearing registries");
        store.clear_all();
    }

    match populate(store, doc) {
        Ok(()) => {
            store.set_loaded(true);
            info!(
                game_mode = %store.game_mode(),
                damage_types = store.damage_types().len(),
                armour_types = store.armour_types().len(),
                damage_to_armour = store.damage_to_armour().len(),
                "game constants loaded"
            );
            Ok(())
        }
        Err(kind) => {
            store.clear_all();
            Err(failure_from_kind(kind))
        }
    }
}

fn populate<D: ConstantsDocument>(store: &mut ConstantsStore, doc: &D) -> Result<(), ErrorKind> {
    load_damage_types(store, doc)?;
    check_hardcoded_damage_types(store)?;
    load_armour_types(store, doc)?;
    check_hardcoded_armour_types(store)?;
    initialize_damage_to_armour_matrix(store, doc)
}

fn load_damage_types<D: ConstantsDocument>(
    store: &mut ConstantsStore,
    doc: &D,
) -> Result<(), ErrorKind> {
    let Some(text) = doc.first_section(DAMAGE_TYPES_TAG) else {
        debug!("no <{DAMAGE_TYPES_TAG}> section found");
        return Ok(());
    };

    for damage in Damage::parse_list(text)? {
        if store.damage_types().contains(&damage) {
            warn!("Found duplicated damage type definition \"{damage}\" which was previously defined");
            continue;
        }
        store.damage_types_mut().insert(damage);
    }

    debug!("loaded {} damage types", store.damage_types().len());
    Ok(())
}

fn load_armour_types<D: ConstantsDocument>(
    store: &mut ConstantsStore,
    doc: &D,
) -> Result<(), ErrorKind> {
    let Some(text) = doc.first_section(ARMOUR_TYPES_TAG) else {
        debug!("no <{ARMOUR_TYPES_TAG}> section found");
        return Ok(());
    };

    for armour in Armour::parse_list(text)? {
        if store.armour_types().contains(&armour) {
            warn!("Found duplicated armour type definition \"{armour}\" which was previously defined");
            continue;
        }
        store.armour_types_mut().insert(armour);
    }

    debug!("loaded {} armour types", store.armour_types().len());
    Ok(())
}

fn check_hardcoded_damage_types(store: &ConstantsStore) -> Result<(), ErrorKind> {
    let required = required_types(store)?;
    for damage in required.damage_types() {
        if !store.damage_types().contains(damage) {
            error!(
                "The required damage type \"{damage}\" was not found in the provided GameConstants file"
            );
            return Err(ErrorKind::MissingDamageType {
                name: damage.name().to_string(),
            });
        }
    }

    Ok(())
}

fn check_hardcoded_armour_types(store: &ConstantsStore) -> Result<(), ErrorKind> {
    let required = required_types(store)?;
    for armour in required.armour_types() {
        if !store.armour_types().contains(armour) {
            error!(
                "The required armour type \"{armour}\" was not found in the provided GameConstants file"
            );
            return Err(ErrorKind::MissingArmourType {
                name: armour.name().to_string(),
            });
        }
    }

    Ok(())
}

fn required_types(store: &ConstantsStore) -> Result<&TypeSet, ErrorKind> {
    store.hardcoded().for_mode(store.game_mode()).inspect_err(|_| {
        error!("No game mode was set");
    })
}

fn initialize_damage_to_armour_matrix<D: ConstantsDocument>(
    store: &mut ConstantsStore,
    doc: &D,
) -> Result<(), ErrorKind> {
    let matrix = DamageToArmourMatrix::build(store.damage_types(), store.armour_types());
    *store.damage_to_armour_mut() = matrix;

    let mut overrides = 0usize;
    for text in doc.sections(DAMAGE_TO_ARMOUR_MOD_TAG) {
        for record in DamageToArmour::parse_list(text)? {
            store
                .damage_to_armour_mut()
                .apply(&record)
                .inspect_err(|e| error!("{e}"))?;
            overrides += 1;
        }
    }

    debug!(
        "built damage to armour matrix with {} entries ({overrides} overrides)",
        store.damage_to_armour().len()
    );
    Ok(())
}

/// Tag of the section listing every damage type.
pub const DAMAGE_TYPES_TAG: &str = "Damage_Types";

/// Tag of the section listing every armour type.
pub const ARMOUR_TYPES_TAG: &str = "Armor_Types";

/// Tag of a section overriding damage-to-armour factors.
pub const DAMAGE_TO_ARMOUR_MOD_TAG: &str = "Damage_To_Armor_Mod";

/// The file path within a game installation for the game constants.
pub const GAME_CONSTANTS_PATH: &str = "Data/XML/GameConstants.xml";
