//! # Core Module
//!
//! The foundation of the library: stateless data models, content-derived
//! identity, and configuration.
//!
//! ## Architecture
//!
//! - **[`models`]** - Molecular components and the [`models::system::ChemicalSystem`]
//!   that aggregates them.
//! - **[`tokenization`]** - Reproducible content hashes and [`tokenization::GufeKey`]s.
//! - **[`config`]** - TOML-backed settings for components that are described by
//!   parameters rather than structure.

pub mod config;
pub mod models;
pub mod tokenization;
pub(crate) mod utils;
