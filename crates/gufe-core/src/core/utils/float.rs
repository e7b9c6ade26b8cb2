/// Bit pattern used for hashing floats that must agree with [`nan_eq`].
///
/// Every NaN maps to the same pattern and `-0.0` maps to `0.0`, so two values
/// that compare equal under [`nan_eq`] always produce identical bits.
pub fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Float equality where NaN equals NaN.
pub fn nan_eq(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}
