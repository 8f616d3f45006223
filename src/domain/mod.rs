// Domain layer: core models and ports (interfaces). No dependencies beyond
// std, serde and the bignum types.

pub mod model;
pub mod ports;
