use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
#[error(transparent)]
pub struct Error {
    #[from]
    pub kind: ErrorKind,
}

#[derive(Error, Debug)]
pub enum ErrorKind {
    #[error("Could not read game constants file {}: {err}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },
    #[error("Game constants file is not valid XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("Could not parse <{tag}> section: {detail}")]
    SectionParse { tag: &'static str, detail: String },
    #[error("No game mode was set")]
    NoGameMode,
    #[error("The required damage type \"{name}\" was not found in the provided GameConstants file")]
    MissingDamageType { name: String },
    #[error("The required armour type \"{name}\" was not found in the provided GameConstants file")]
    MissingArmourType { name: String },
    #[error("Damage to armour modifier references an unknown pair: damage={damage}, armour={armour}")]
    UnknownDamageToArmourPair { damage: String, armour: String },
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

pub type IResult<T> = Result<T, Error>;

pub fn failure_from_kind(kind: ErrorKind) -> Error {
    Error { kind }
}
