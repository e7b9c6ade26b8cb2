use super::box_vectors::BoxVectors;
use super::component::Component;
use crate::core::tokenization::{Tokenizable, unordered_hash};
use crate::core::utils::charge::sum_charges;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::{debug, trace};

const TYPE_NAME: &str = "ChemicalSystem";

/// An immutable, content-addressed set of named components.
///
/// Identity is derived entirely from content: two systems are equal when they
/// hold the same `(role, component)` pairs, the same identifier and the same
/// box vectors. Insertion order of the components never matters, neither for
/// equality nor for hashing.
///
/// Components are shared, not copied; the same [`Arc<Component>`] may be part
/// of many systems.
#[derive(Debug, Clone)]
pub struct ChemicalSystem {
    /// Map from role name (e.g. "protein", "ligand") to component.
    components: HashMap<String, Arc<Component>>,
    /// Optional tag used only to tell otherwise identical systems apart.
    identifier: Option<String>,
    /// Optional periodic cell.
    box_vectors: Option<BoxVectors>,
}

impl ChemicalSystem {
    /// Creates a system from `(role, component)` pairs with no identifier and
    /// no box vectors.
    ///
    /// Role names are opaque labels. If a role appears twice, the later
    /// component replaces the earlier one.
    pub fn new<I, K, C>(components: I) -> Self
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: Into<Arc<Component>>,
    {
        Self::with_metadata(components, None, None)
    }

    /// Creates a system with an optional identifier and optional box vectors.
    pub fn with_metadata<I, K, C>(
        components: I,
        identifier: Option<String>,
        box_vectors: Option<BoxVectors>,
    ) -> Self
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: Into<Arc<Component>>,
    {
        let components: HashMap<String, Arc<Component>> = components
            .into_iter()
            .map(|(role, component)| (role.into(), component.into()))
            .collect();

        debug!(
            num_components = components.len(),
            identifier = identifier.as_deref().unwrap_or(""),
            periodic = box_vectors.is_some(),
            "Constructed chemical system."
        );

        Self {
            components,
            identifier,
            box_vectors,
        }
    }

    /// Read-only view of the role-to-component mapping.
    pub fn components(&self) -> &HashMap<String, Arc<Component>> {
        &self.components
    }

    /// Looks up the component assigned to a role.
    ///
    /// # Arguments
    ///
    /// * `role` - The role name, e.g. `"ligand"`.
    ///
    /// # Return
    ///
    /// The shared component, or `None` if no component has that role.
    pub fn component(&self, role: &str) -> Option<&Arc<Component>> {
        self.components.get(role)
    }

    /// Checks whether a component is assigned to a role.
    ///
    /// # Arguments
    ///
    /// * `role` - The role name to look for.
    ///
    /// # Return
    ///
    /// `true` if the system holds a component under `role`.
    pub fn contains_role(&self, role: &str) -> bool {
        self.components.contains_key(role)
    }

    /// Role names, sorted.
    pub fn roles(&self) -> Vec<&str> {
        let mut roles: Vec<&str> = self.components.keys().map(String::as_str).collect();
        roles.sort_unstable();
        roles
    }

    /// Number of components in the system.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if the system holds no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Optional tag distinguishing otherwise identical systems.
    ///
    /// # Return
    ///
    /// The identifier, or `None` if the system was built without one.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Periodic cell of the system.
    ///
    /// # Return
    ///
    /// The box vectors, or `None` for a non-periodic system.
    pub fn box_vectors(&self) -> Option<&BoxVectors> {
        self.box_vectors.as_ref()
    }

    /// Returns `true` if the system has box vectors.
    pub fn is_periodic(&self) -> bool {
        self.box_vectors.is_some()
    }

    /// Sum of the formal charges of all components.
    ///
    /// The sum saturates at the bounds of `i32`.
    pub fn total_charge(&self) -> i32 {
        sum_charges(self.components.iter().map(|(role, component)| {
            let charge = component.total_charge();
            trace!(role = %role, charge, "Component charge contribution.");
            charge
        }))
    }
}

impl PartialEq for ChemicalSystem {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
            && self.identifier == other.identifier
            && self.box_vectors == other.box_vectors
    }
}

impl Eq for ChemicalSystem {}

impl Hash for ChemicalSystem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        TYPE_NAME.hash(state);
        self.components.len().hash(state);
        unordered_hash(&self.components).hash(state);
        self.identifier.hash(state);
        self.box_vectors.hash(state);
    }
}

impl PartialEq<Component> for ChemicalSystem {
    fn eq(&self, _other: &Component) -> bool {
        false
    }
}

impl Tokenizable for ChemicalSystem {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }
}

impl fmt::Display for ChemicalSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", TYPE_NAME)?;
        if let Some(identifier) = &self.identifier {
            write!(f, "identifier={}, ", identifier)?;
        }
        write!(f, "components=[{}])", self.roles().join(", "))
    }
}
