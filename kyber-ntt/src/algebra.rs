use hybrid_array::{Array, typenum::U256};
use module_lattice::Field;

use crate::Error;

module_lattice::define_field!(BaseField, u16, u32, u64, 3329, "The prime field GF(3329)");

/// Integer type holding a canonical coefficient
pub type Int = u16;

/// An element of GF(q), q = 3329
pub type Elem = module_lattice::Elem<BaseField>;

/// A member of the ring `R_q = Z_q[X] / (X^256 + 1)`, stored as its 256 coefficients in
/// ascending degree
pub type Polynomial = module_lattice::Polynomial<BaseField>;

/// A member of the NTT algebra `T_q`, the product of 128 rings `Z_q[X] / (X^2 - gamma_i)`.  The
/// pair at indices `(2i, 2i + 1)` holds the constant and linear coefficient of the i-th factor.
pub type NttPolynomial = module_lattice::NttPolynomial<BaseField>;

/// A fixed-size vector of canonical coefficients, the raw form exchanged with callers
pub type Coefficients = Array<Int, U256>;

/// Number of coefficients in a polynomial
pub const N: usize = 256;

/// The prime modulus
pub const Q: Int = BaseField::Q;

/// Primitive 256th root of unity modulo `Q`
pub const ZETA: Int = 17;

/// `128^{-1} mod Q`, the scale correction applied at the end of the inverse transform
pub const INV128: Elem = Elem::new(3303);

/// Map an arbitrary integer onto its canonical representative in `[0, Q)`.
///
/// This is floor-style reduction: negative inputs wrap around to the top of the range.  Prefer
/// this over `Elem::new`, which trusts its argument to be canonical already.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[allow(clippy::as_conversions)]
#[allow(clippy::integer_division_remainder_used)]
pub const fn reduce(x: i64) -> Elem {
    Elem::new(x.rem_euclid(Q as i64) as Int)
}

/// Compute `base^exponent mod Q` by square-and-multiply.  `base` need not be reduced.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::as_conversions)]
#[allow(clippy::integer_division_remainder_used)]
pub const fn modpow(base: i64, exponent: u32) -> Elem {
    let q = BaseField::QLL;
    let mut base = reduce(base).0 as u64;
    let mut exponent = exponent;
    let mut acc = 1u64;
    while exponent > 0 {
        if exponent & 1 == 1 {
            acc = (acc * base) % q;
        }
        base = (base * base) % q;
        exponent >>= 1;
    }
    Elem::new(acc as Int)
}

/// Conversion between raw integer vectors and the typed representations.
///
/// Implemented for both [`Polynomial`] and [`NttPolynomial`]; which one a vector is read into
/// decides which transforms may be applied to it.
pub trait CoefficientVector: Sized {
    /// Build a value from exactly 256 integers, reducing each one modulo `Q`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if `coefficients` does not hold exactly 256 values.
    fn from_coefficients<T: Copy + Into<i64>>(coefficients: &[T]) -> Result<Self, Error>;

    /// The canonical coefficients of this value
    fn coefficients(&self) -> Coefficients;
}

fn reduce_all<T: Copy + Into<i64>>(coefficients: &[T]) -> Result<Array<Elem, U256>, Error> {
    if coefficients.len() != N {
        return Err(Error::InvalidLength {
            expected: N,
            got: coefficients.len(),
        });
    }

    Ok(Array::from_fn(|i| reduce(coefficients[i].into())))
}

impl CoefficientVector for Polynomial {
    fn from_coefficients<T: Copy + Into<i64>>(coefficients: &[T]) -> Result<Self, Error> {
        reduce_all(coefficients).map(Polynomial::new)
    }

    fn coefficients(&self) -> Coefficients {
        Array::from_fn(|i| self.0[i].0)
    }
}

impl CoefficientVector for NttPolynomial {
    fn from_coefficients<T: Copy + Into<i64>>(coefficients: &[T]) -> Result<Self, Error> {
        reduce_all(coefficients).map(NttPolynomial::new)
    }

    fn coefficients(&self) -> Coefficients {
        Array::from_fn(|i| self.0[i].0)
    }
}

#[cfg(test)]
#[allow(clippy::as_conversions)]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::integer_division_remainder_used)]
mod test {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(BaseField::BARRETT_SHIFT, 24);
        assert_eq!(BaseField::BARRETT_MULTIPLIER, 5039);
        assert_eq!(INV128 * Elem::new(128), Elem::new(1));
        assert_eq!(modpow(ZETA.into(), 128), Elem::new(Q - 1));
        assert_eq!(modpow(ZETA.into(), 256), Elem::new(1));
    }

    #[test]
    fn reduce_is_floor_style() {
        assert_eq!(reduce(0), Elem::new(0));
        assert_eq!(reduce(3329), Elem::new(0));
        assert_eq!(reduce(3330), Elem::new(1));
        assert_eq!(reduce(-1), Elem::new(3328));
        assert_eq!(reduce(-3329), Elem::new(0));
        assert_eq!(reduce(-3330), Elem::new(3328));
        assert_eq!(reduce(i64::MIN).0, i64::MIN.rem_euclid(3329) as Int);
    }

    #[test]
    fn modpow_edge_cases() {
        assert_eq!(modpow(0, 0), Elem::new(1));
        assert_eq!(modpow(12345, 0), Elem::new(1));
        assert_eq!(modpow(17, 1), Elem::new(17));
        assert_eq!(modpow(17 + 3329, 2), Elem::new(289));
        assert_eq!(modpow(-17, 2), Elem::new(289));
        assert_eq!(modpow(-1, 3), Elem::new(Q - 1));
    }

    #[test]
    fn multiplication_matches_integer_modulo() {
        // Walk a lattice of operands that covers both ends of the range
        for a in (0..Q).step_by(7).chain([Q - 1]) {
            for b in (0..Q).step_by(13).chain([Q - 1]) {
                let expected = (u32::from(a) * u32::from(b)) % u32::from(Q);
                assert_eq!((Elem::new(a) * Elem::new(b)).0 as u32, expected);
            }
        }
    }

    #[test]
    fn from_coefficients() {
        let raw: [i64; N] = core::array::from_fn(|i| i as i64 - 128);
        let p = Polynomial::from_coefficients(&raw).unwrap();
        assert_eq!(p.0[0], Elem::new(Q - 128));
        assert_eq!(p.0[128], Elem::new(0));
        assert_eq!(p.coefficients()[255], 127);

        let short = [0u16; 255];
        assert_eq!(
            NttPolynomial::from_coefficients(&short),
            Err(Error::InvalidLength {
                expected: 256,
                got: 255
            })
        );
    }

    #[test]
    fn coefficients_are_canonical() {
        let raw: [i64; N] = core::array::from_fn(|i| (i as i64) * 1_000_003 - 77);
        let p_hat = NttPolynomial::from_coefficients(&raw).unwrap();
        for (c, &x) in p_hat.coefficients().iter().zip(raw.iter()) {
            assert!(*c < Q);
            assert_eq!(i64::from(*c), x.rem_euclid(3329));
        }
    }

    #[cfg(feature = "zeroize")]
    #[test]
    fn zeroize_clears_coefficients() {
        use zeroize::Zeroize;

        let mut p = Polynomial::from_coefficients(&[7u16; N]).unwrap();
        p.zeroize();
        assert_eq!(p, Polynomial::default());
    }
}
