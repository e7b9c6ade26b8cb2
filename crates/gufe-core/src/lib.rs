//! # gufe
//!
//! Value objects for describing the chemistry of free-energy calculations.
//!
//! A [`ChemicalSystem`](core::models::system::ChemicalSystem) is an immutable
//! mapping from role names (such as `"protein"`, `"ligand"` or `"solvent"`) to
//! shared [`Component`](core::models::component::Component)s, optionally tagged
//! with an identifier and a periodic cell. Its identity is its content: equal
//! content means equal values, equal hashes and equal
//! [`GufeKey`](core::tokenization::GufeKey)s, regardless of the order in which
//! components were supplied.
//!
//! Reading structure files, cheminformatics toolkits and simulation engines
//! are outside this crate; components are described only by what equality and
//! total-charge bookkeeping need.

pub mod core;
