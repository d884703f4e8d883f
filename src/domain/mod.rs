// Domain layer: notices, value types and ports (capability traits).
// No dependencies beyond std/serde.

pub mod model;
pub mod ports;
