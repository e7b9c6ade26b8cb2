/// Sums formal charges, clamping at the bounds of `i32` instead of overflowing.
pub fn sum_charges<I>(charges: I) -> i32
where
    I: IntoIterator<Item = i32>,
{
    charges.into_iter().fold(0, i32::saturating_add)
}
