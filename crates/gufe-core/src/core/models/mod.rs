//! # Core Models Module
//!
//! Value objects describing what goes into a simulation: molecular
//! components and the chemical systems assembled from them.
//!
//! ## Key Components
//!
//! - [`component`] - The [`component::Component`] contract shared by all molecular entities
//! - [`protein`] - Proteins described by their residues
//! - [`small_molecule`] - Ligands and other small molecules identified by SMILES
//! - [`solvent`] - Bulk solvent and salt settings
//! - [`box_vectors`] - Periodic cell metadata with NaN-tolerant equality
//! - [`system`] - [`system::ChemicalSystem`], the immutable composite of named components
//! - [`builder`] - Checked, step-by-step construction of chemical systems
//!
//! ## Usage
//!
//! ```
//! use gufe::core::models::component::Component;
//! use gufe::core::models::small_molecule::SmallMoleculeComponent;
//! use gufe::core::models::solvent::SolventComponent;
//! use gufe::core::models::system::ChemicalSystem;
//!
//! let ligand = SmallMoleculeComponent::from_smiles("toluene", "Cc1ccccc1").unwrap();
//! let solvent = SolventComponent::with_ions("K", "Cl").unwrap();
//!
//! let system = ChemicalSystem::new([
//!     ("ligand", Component::from(ligand)),
//!     ("solvent", Component::from(solvent)),
//! ]);
//! assert_eq!(system.total_charge(), 0);
//! ```

pub mod box_vectors;
pub mod builder;
pub mod component;
pub mod protein;
pub mod small_molecule;
pub mod solvent;
pub mod system;
