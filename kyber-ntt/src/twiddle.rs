//! Powers of the root of unity consumed by the butterfly network and by `MultiplyNTTs`.
//!
//! Two interchangeable strategies are provided behind [`TwiddleSource`]: [`Precomputed`] looks
//! the values up in tables built at compile time, [`OnDemand`] runs [`modpow`] on every request.
//! They are required to agree on every input.

use crate::algebra::{Elem, ZETA, modpow};

/// Reverse the seven least-significant bits of `x`.
///
/// Only the low seven bits of `x` are read, so the result is always in `[0, 128)`.
pub const fn bitrev7(x: usize) -> usize {
    let mut x = x;
    let mut r = 0;
    let mut i = 0;
    while i < 7 {
        r = (r << 1) | (x & 1);
        x >>= 1;
        i += 1;
    }
    r
}

// Since the powers of zeta used in the NTT and MultiplyNTTs are fixed, we use pre-computed tables
// to avoid the need to compute the exponentiations at runtime.
//
//   ZETA_POW_BITREV[k] = zeta^{BitRev_7(k)}
//   GAMMA[i]           = zeta^{2 BitRev_7(i) + 1}
//
// Because `for` loops are forbidden in `const` functions, we do them manually with `while` loops.
//
// The values in ZETA_POW_BITREV match those provided in Appendix A of FIPS 203.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::as_conversions)]
const fn zeta_table(odd: bool) -> [Elem; 128] {
    let mut table = [Elem::new(0); 128];
    let mut i = 0;
    while i < 128 {
        let exponent = if odd {
            2 * bitrev7(i) + 1
        } else {
            bitrev7(i)
        };
        table[i] = modpow(ZETA as i64, exponent as u32);
        i += 1;
    }
    table
}

/// `ZETA_POW_BITREV[k] = 17^{BitRev_7(k)} mod q`
pub const ZETA_POW_BITREV: [Elem; 128] = zeta_table(false);

/// `GAMMA[i] = 17^{2 BitRev_7(i) + 1} mod q`, the root of the i-th quadratic factor
pub const GAMMA: [Elem; 128] = zeta_table(true);

/// Locate `zeta` in [`ZETA_POW_BITREV`].
pub fn table_position(zeta: Elem) -> Option<usize> {
    ZETA_POW_BITREV.iter().position(|&z| z == zeta)
}

/// A supplier of twiddle factors.
///
/// Indices are taken modulo 128, matching the seven-bit domain of [`bitrev7`].
pub trait TwiddleSource {
    /// `zeta^{BitRev_7(k)}`, the factor applied to the k-th butterfly block
    fn zeta(&self, k: usize) -> Elem;

    /// `zeta^{2 BitRev_7(i) + 1}`, the root of the quadratic factor of block `i`
    fn gamma(&self, i: usize) -> Elem;
}

/// Twiddle factors read from the compile-time tables
#[derive(Clone, Copy, Debug, Default)]
pub struct Precomputed;

impl TwiddleSource for Precomputed {
    fn zeta(&self, k: usize) -> Elem {
        ZETA_POW_BITREV[k & 0x7f]
    }

    fn gamma(&self, i: usize) -> Elem {
        GAMMA[i & 0x7f]
    }
}

/// Twiddle factors computed by modular exponentiation at each request
#[derive(Clone, Copy, Debug, Default)]
pub struct OnDemand;

impl OnDemand {
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::as_conversions)]
    fn pow(exponent: usize) -> Elem {
        modpow(i64::from(ZETA), exponent as u32)
    }
}

impl TwiddleSource for OnDemand {
    fn zeta(&self, k: usize) -> Elem {
        Self::pow(bitrev7(k))
    }

    fn gamma(&self, i: usize) -> Elem {
        Self::pow(2 * bitrev7(i) + 1)
    }
}

/// The exponent `BitRev_7(k)` as a byte, for reporting
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::as_conversions)]
pub(crate) const fn exponent(k: usize) -> u8 {
    bitrev7(k) as u8
}
