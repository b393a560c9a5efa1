#![no_std]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::pedantic)] // Be pedantic by default
#![warn(clippy::integer_division_remainder_used)] // Be judicious about using `/` and `%`
#![warn(missing_docs)]
#![allow(clippy::clone_on_copy)] // Be explicit about moving data

#[cfg(feature = "alloc")]
extern crate alloc;

mod algebra;
mod error;
mod ntt;

pub mod trace;
pub mod twiddle;

#[cfg(feature = "alloc")]
pub mod text;

pub use hybrid_array::{self, Array, typenum::U256};
pub use module_lattice;

pub use crate::algebra::{
    BaseField, CoefficientVector, Coefficients, Elem, INV128, Int, N, NttPolynomial, Polynomial,
    Q, ZETA, modpow, reduce,
};
pub use crate::error::Error;
pub use crate::ntt::{Ntt, NttInverse, multiply_ntts_with, multiply_polynomials};
pub use crate::twiddle::bitrev7;

/// Forward transform of a coefficient vector.
///
/// Each input value is reduced modulo `Q`; the output holds the 128 degree-1 residues as
/// consecutive pairs.
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] unless `coefficients` holds exactly 256 values.
pub fn ntt<T: Copy + Into<i64>>(coefficients: &[T]) -> Result<Coefficients, Error> {
    Ok(Polynomial::from_coefficients(coefficients)?
        .ntt()
        .coefficients())
}

/// Inverse transform of an NTT-domain vector.
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] unless `coefficients` holds exactly 256 values.
pub fn intt<T: Copy + Into<i64>>(coefficients: &[T]) -> Result<Coefficients, Error> {
    Ok(NttPolynomial::from_coefficients(coefficients)?
        .ntt_inverse()
        .coefficients())
}

/// Pointwise product of two NTT-domain vectors (`MultiplyNTTs`).
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if the operands differ in length, and
/// [`Error::InvalidLength`] if they agree but are not 256 long.
pub fn multiply_ntts<T: Copy + Into<i64>>(f_hat: &[T], g_hat: &[T]) -> Result<Coefficients, Error> {
    if f_hat.len() != g_hat.len() {
        return Err(Error::LengthMismatch {
            lhs: f_hat.len(),
            rhs: g_hat.len(),
        });
    }

    let f_hat = NttPolynomial::from_coefficients(f_hat)?;
    let g_hat = NttPolynomial::from_coefficients(g_hat)?;
    Ok((&f_hat * &g_hat).coefficients())
}
