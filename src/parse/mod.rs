mod atom;
mod error;
mod ring;
mod smiles;

pub use atom::{MAX_STRICT_CHARGE, MAX_STRICT_HYDROGENS};
pub use error::{ErrorKind, SmilesError};
pub use smiles::*;
