// Domain layer: value objects and the static word tables. No external
// dependencies beyond std/serde.

pub mod lexicon;
pub mod model;
