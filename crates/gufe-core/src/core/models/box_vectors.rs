use crate::core::utils::float::{canonical_bits, nan_eq};
use nalgebra::Matrix3;
use std::hash::{Hash, Hasher};
use thiserror::Error;

pub const BOX_VECTOR_LEN: usize = 9;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoxVectorsError {
    #[error("Box vectors need exactly 9 values, got {0}")]
    WrongLength(usize),
}

/// Periodic cell of a system, one cell vector per matrix row.
///
/// # NaN handling
///
/// Entries may be NaN placeholders for a partially specified cell. Equality
/// here is NOT IEEE-754 equality: two cells are equal when every slot holds
/// equal numbers or both hold NaN, and `-0.0` equals `0.0`. Hashing follows
/// the same rule. A cell with a NaN therefore equals an identical copy of
/// itself, while NaN in a different slot makes two cells unequal.
#[derive(Debug, Clone, Copy)]
pub struct BoxVectors(Matrix3<f64>);

impl BoxVectors {
    pub fn new(matrix: Matrix3<f64>) -> Self {
        Self(matrix)
    }

    /// Builds the cell from nine row-major values.
    pub fn from_array(values: [f64; BOX_VECTOR_LEN]) -> Self {
        Self(Matrix3::from_row_slice(&values))
    }

    pub fn from_slice(values: &[f64]) -> Result<Self, BoxVectorsError> {
        let values: [f64; BOX_VECTOR_LEN] = values
            .try_into()
            .map_err(|_| BoxVectorsError::WrongLength(values.len()))?;
        Ok(Self::from_array(values))
    }

    pub fn as_matrix(&self) -> &Matrix3<f64> {
        &self.0
    }

    /// Row-major copy of the nine entries.
    pub fn to_array(&self) -> [f64; BOX_VECTOR_LEN] {
        let mut values = [0.0; BOX_VECTOR_LEN];
        for (row, chunk) in values.chunks_exact_mut(3).enumerate() {
            for (col, value) in chunk.iter_mut().enumerate() {
                *value = self.0[(row, col)];
            }
        }
        values
    }

    pub fn has_nan(&self) -> bool {
        self.0.iter().any(|v| v.is_nan())
    }

    /// Cell volume; NaN when any entry is NaN.
    pub fn volume(&self) -> f64 {
        self.0.determinant().abs()
    }
}

impl PartialEq for BoxVectors {
    fn eq(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| nan_eq(*a, *b))
    }
}

impl Eq for BoxVectors {}

impl Hash for BoxVectors {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for value in self.0.iter() {
            canonical_bits(*value).hash(state);
        }
    }
}

impl From<[f64; BOX_VECTOR_LEN]> for BoxVectors {
    fn from(values: [f64; BOX_VECTOR_LEN]) -> Self {
        Self::from_array(values)
    }
}

impl From<Matrix3<f64>> for BoxVectors {
    fn from(matrix: Matrix3<f64>) -> Self {
        Self::new(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenization::stable_hash;
    use nalgebra::Vector3;

    fn partial_cell() -> BoxVectors {
        BoxVectors::from_array([
            10.0,
            0.0,
            0.0,
            f64::NAN,
            f64::NAN,
            f64::NAN,
            f64::NAN,
            f64::NAN,
            f64::NAN,
        ])
    }

    #[test]
    fn from_array_is_row_major() {
        let cell = BoxVectors::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(cell.as_matrix()[(0, 1)], 2.0);
        assert_eq!(cell.as_matrix()[(1, 0)], 4.0);
        assert_eq!(cell.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn from_slice_checks_length() {
        assert!(BoxVectors::from_slice(&[1.0; 9]).is_ok());
        assert_eq!(
            BoxVectors::from_slice(&[1.0; 6]),
            Err(BoxVectorsError::WrongLength(6))
        );
        assert_eq!(
            BoxVectors::from_slice(&[]),
            Err(BoxVectorsError::WrongLength(0))
        );
    }

    #[test]
    fn nan_in_same_slots_compares_and_hashes_equal() {
        assert_eq!(partial_cell(), partial_cell());
        assert_eq!(stable_hash(&partial_cell()), stable_hash(&partial_cell()));
    }

    #[test]
    fn nan_in_different_slots_is_not_equal() {
        let moved = BoxVectors::from_array([
            10.0, 0.0, f64::NAN, 0.0, f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN,
        ]);
        assert_ne!(partial_cell(), moved);
        assert_ne!(stable_hash(&partial_cell()), stable_hash(&moved));
    }

    #[test]
    fn nan_never_equals_a_number() {
        let numeric = BoxVectors::from_array([10.0, 0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 0.0, 10.0]);
        assert_ne!(partial_cell(), numeric);
    }

    #[test]
    fn negative_zero_equals_zero() {
        let a = BoxVectors::from_array([5.0, 0.0, 0.0, 0.0, 5.0, 0.0, 0.0, 0.0, 5.0]);
        let b = BoxVectors::from_array([5.0, -0.0, 0.0, 0.0, 5.0, -0.0, 0.0, 0.0, 5.0]);
        assert_eq!(a, b);
        assert_eq!(stable_hash(&a), stable_hash(&b));
    }

    #[test]
    fn volume_of_orthorhombic_cell() {
        let cell = BoxVectors::new(Matrix3::from_diagonal(&Vector3::new(2.0, 3.0, 4.0)));
        assert!((cell.volume() - 24.0).abs() < 1e-12);
        assert!(!cell.has_nan());
    }

    #[test]
    fn volume_is_nan_for_placeholder_cell() {
        assert!(partial_cell().has_nan());
        assert!(partial_cell().volume().is_nan());
    }
}
