use super::box_vectors::{BoxVectors, BoxVectorsError};
use super::component::Component;
use super::system::ChemicalSystem;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Role '{0}' was assigned more than once")]
    DuplicateRole(String),

    #[error("A chemical system needs at least one component")]
    NoComponents,

    #[error("Invalid box vectors: {0}")]
    BoxVectors(#[from] BoxVectorsError),
}

/// Step-by-step construction of a [`ChemicalSystem`] with input checks.
///
/// Unlike [`ChemicalSystem::new`], which follows plain mapping semantics, the
/// builder refuses a role assigned twice and an empty component set.
#[derive(Debug, Default)]
pub struct ChemicalSystemBuilder {
    components: Vec<(String, Arc<Component>)>,
    identifier: Option<String>,
    box_vector_values: Option<Vec<f64>>,
}

impl ChemicalSystemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn component(
        mut self,
        role: impl Into<String>,
        component: impl Into<Arc<Component>>,
    ) -> Self {
        self.components.push((role.into(), component.into()));
        self
    }
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }
    pub fn box_vectors(mut self, box_vectors: impl Into<BoxVectors>) -> Self {
        self.box_vector_values = Some(box_vectors.into().to_array().to_vec());
        self
    }
    /// Raw cell values; the length is checked in [`Self::build`].
    pub fn box_vector_values(mut self, values: &[f64]) -> Self {
        self.box_vector_values = Some(values.to_vec());
        self
    }

    #[instrument(skip_all, name = "chemical_system_build")]
    pub fn build(self) -> Result<ChemicalSystem, BuildError> {
        if self.components.is_empty() {
            return Err(BuildError::NoComponents);
        }

        let mut seen = HashSet::with_capacity(self.components.len());
        for (role, _) in &self.components {
            if !seen.insert(role.as_str()) {
                return Err(BuildError::DuplicateRole(role.clone()));
            }
        }

        let box_vectors = self
            .box_vector_values
            .as_deref()
            .map(BoxVectors::from_slice)
            .transpose()?;

        debug!(roles = ?seen, "Chemical system inputs validated.");

        Ok(ChemicalSystem::with_metadata(
            self.components,
            self.identifier,
            box_vectors,
        ))
    }
}
