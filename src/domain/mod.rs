// Domain layer: page model and ports (interfaces). No external dependencies beyond serde.

pub mod model;
pub mod ports;
