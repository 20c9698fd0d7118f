//! Duration units for reporting range lengths.
//!
//! Instants measure their distance in whole seconds; callers usually want
//! hours for a flight and days for a trip. These helpers turn a second count
//! into a [`qtty::Quantity`] of any unit that shares the time dimension.

use qtty::{Quantity, Second, Unit};

/// Marker trait for units that share the same physical dimension.
///
/// Automatically implemented for any pair of units where `From::Dim == To::Dim`.
///
/// ```ignore
/// use qtty::{Second, Hour};
/// use spanalg::units::SameDim;
///
/// fn accepts_same_dim<From, To>()
/// where
///     From: SameDim<To>,
/// {}
///
/// accepts_same_dim::<Second, Hour>(); // OK
/// ```
pub trait SameDim<To: Unit>: Unit<Dim = To::Dim> {}

impl<From, To> SameDim<To> for From
where
    From: Unit,
    To: Unit<Dim = From::Dim>,
{
}

/// Converts a quantity to another unit of the same dimension.
#[inline]
pub const fn convert<From, To>(q: Quantity<From>) -> Quantity<To>
where
    From: SameDim<To>,
    To: Unit,
{
    q.to_const::<To>()
}

/// Expresses a whole number of seconds in unit `U`.
pub fn from_seconds<U>(seconds: i64) -> Quantity<U>
where
    U: Unit,
    Second: SameDim<U>,
{
    convert(Quantity::<Second>::new(seconds as f64))
}
