#![allow(dead_code)]

use gufe::core::models::component::Component;
use gufe::core::models::protein::ProteinComponent;
use gufe::core::models::small_molecule::SmallMoleculeComponent;
use gufe::core::models::solvent::SolventComponent;
use gufe::core::models::system::ChemicalSystem;
pub use gufe::core::tokenization::stable_hash;
use std::sync::Arc;

// T4 lysozyme followed by a polylysine tag; net formal charge +22.
const TAGGED_LYSOZYME: &str = "
    MNIFEMLRIDEGLRLKIYKDTEGYYTIGIGHLLTKSPSLNAAKSELDKAIGRNTNGVITKDEAEKLFNQDVDAAVRGILRN
    AKLKPVYDSLDAVRRAAINMVFQMGETGVAGFTNSLRMLQQKRWDEAAVNLAKSRWYNQTPNRAKRVITTFRTGTWDAYKNL
    KKKKKKKKKKKKKK
";

pub fn prot_comp() -> Arc<Component> {
    ProteinComponent::from_sequence("181L", 'A', TAGGED_LYSOZYME)
        .expect("fixture sequence is valid")
        .into()
}

pub fn solv_comp() -> Arc<Component> {
    SolventComponent::with_ions("K", "Cl")
        .expect("fixture ions are valid")
        .into()
}

pub fn toluene_ligand_comp() -> Arc<Component> {
    SmallMoleculeComponent::from_smiles("toluene", "Cc1ccccc1")
        .expect("fixture SMILES is valid")
        .into()
}

pub fn phenol_ligand_comp() -> Arc<Component> {
    SmallMoleculeComponent::from_smiles("phenol", "Oc1ccccc1")
        .expect("fixture SMILES is valid")
        .into()
}

pub fn solvated_complex() -> ChemicalSystem {
    ChemicalSystem::new([
        ("protein", prot_comp()),
        ("solvent", solv_comp()),
        ("ligand", toluene_ligand_comp()),
    ])
}

pub fn solvated_ligand() -> ChemicalSystem {
    ChemicalSystem::new([("ligand", toluene_ligand_comp()), ("solvent", solv_comp())])
}
