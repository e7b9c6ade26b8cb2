pub mod charge;
pub mod float;
pub mod identifiers;
