//! The type-compatibility oracle.
//!
//! The resolver scores each formal/actual pair through one query,
//! [`TypeCompat::type_compatibility`], and only consumes the verdict. The
//! oracle itself belongs to the embedding compiler; [`NumericCompat`] is
//! the default implementation over the numeric tower so the registry is
//! usable and testable standalone.

use pyrite_core::Type;

/// Verdict on converting an actual argument type into a formal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compatibility {
    /// The types are identical; no conversion.
    Exact,
    /// Widening within a kind; representable values are preserved.
    Promote,
    /// A kind change that preserves the value domain.
    Safe,
    /// A conversion that can lose information.
    Unsafe,
}

/// Scores pairs of types for the overload resolver.
///
/// Must be total: `None` means the pair is incompatible and the candidate
/// is dropped. Implementations are queried concurrently if the embedding
/// compiler resolves operations in parallel, so `Send + Sync` is part of
/// the contract.
pub trait TypeCompat: Send + Sync {
    fn type_compatibility(&self, actual: &Type, formal: &Type) -> Option<Compatibility>;
}

/// Default oracle over the numeric tower.
///
/// Classification rules:
///
/// - equal types are `Exact`, for scalars and structural types alike;
/// - widening within a kind (signed to wider signed, unsigned to wider
///   unsigned or wider signed, `float32 -> float64`,
///   `complex64 -> complex128`) is `Promote`;
/// - value-domain moves that keep magnitude ordering (integer ->
///   `float64`, 8/16-bit integer -> `float32`, integer -> `complex128`,
///   float -> complex with equal-or-wider components) are `Safe`;
/// - narrowing, same-width sign flips, signed -> unsigned, `float64 ->
///   float32`, wide integer -> narrow float/complex are `Unsafe`;
/// - float -> integer, complex -> anything non-complex, boolean, and all
///   unequal structural pairs are incompatible.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericCompat;

impl TypeCompat for NumericCompat {
    fn type_compatibility(&self, actual: &Type, formal: &Type) -> Option<Compatibility> {
        if actual == formal {
            return Some(Compatibility::Exact);
        }

        if let Some((a_signed, a_bits)) = actual.int_info() {
            if let Some((f_signed, f_bits)) = formal.int_info() {
                return Some(int_to_int(a_signed, a_bits, f_signed, f_bits));
            }
            if let Some(f_bits) = formal.float_bits() {
                return Some(int_to_real(a_bits, f_bits));
            }
            if let Some(f_bits) = formal.complex_bits() {
                // Component width is half the complex width.
                return Some(int_to_real(a_bits, f_bits / 2));
            }
            return None;
        }

        if let Some(a_bits) = actual.float_bits() {
            if let Some(f_bits) = formal.float_bits() {
                return Some(widen_or_narrow(a_bits, f_bits));
            }
            if let Some(f_bits) = formal.complex_bits() {
                return Some(if f_bits / 2 >= a_bits {
                    Compatibility::Safe
                } else {
                    Compatibility::Unsafe
                });
            }
            return None;
        }

        if let Some(a_bits) = actual.complex_bits() {
            if let Some(f_bits) = formal.complex_bits() {
                return Some(widen_or_narrow(a_bits, f_bits));
            }
            return None;
        }

        // Uniform tuples of equal length score as their element pair; the
        // single dtype makes the elementwise verdict uniform.
        if let (Some((a_dtype, a_count)), Some((f_dtype, f_count))) =
            (actual.as_uni_tuple(), formal.as_uni_tuple())
            && a_count == f_count
        {
            return self.type_compatibility(a_dtype, f_dtype);
        }

        // Booleans, iteration states and the remaining structural types
        // convert to nothing but themselves.
        None
    }
}

fn int_to_int(a_signed: bool, a_bits: u8, f_signed: bool, f_bits: u8) -> Compatibility {
    let widens = f_bits > a_bits && (f_signed == a_signed || (!a_signed && f_signed));
    if widens {
        Compatibility::Promote
    } else {
        Compatibility::Unsafe
    }
}

fn int_to_real(a_bits: u8, carrier_bits: u8) -> Compatibility {
    // float64 (and the complex128 components) hold every 32-bit integer
    // exactly and preserve ordering for the 64-bit ones; float32 only
    // covers the small widths.
    match carrier_bits {
        64 => Compatibility::Safe,
        _ if a_bits <= 16 => Compatibility::Safe,
        _ => Compatibility::Unsafe,
    }
}

fn widen_or_narrow(a_bits: u8, f_bits: u8) -> Compatibility {
    if f_bits > a_bits {
        Compatibility::Promote
    } else {
        Compatibility::Unsafe
    }
}
