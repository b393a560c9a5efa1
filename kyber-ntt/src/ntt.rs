use hybrid_array::{Array, typenum::U256};
use module_lattice::MultiplyNtt;

use crate::algebra::{BaseField, Elem, INV128, NttPolynomial, Polynomial};
use crate::trace::{ButterflyBlock, NttObserver};
use crate::twiddle::{Precomputed, TwiddleSource, exponent};

/// Mapping from the coefficient representation `R_q` to the NTT representation `T_q`
pub trait Ntt {
    /// The NTT-domain type
    type Output;

    /// Forward transform with an explicit twiddle strategy and observer.
    ///
    /// The network stops at half-length 2, one layer short of a full NTT, leaving 128
    /// degree-1 residues.  Block twiddles are taken from a counter that starts at 1 and
    /// advances once per block across all layers.
    fn ntt_with<T, O>(&self, twiddles: &T, observer: &mut O) -> Self::Output
    where
        T: TwiddleSource,
        O: NttObserver;

    /// Apply the forward transform.
    fn ntt(&self) -> Self::Output {
        self.ntt_with(&Precomputed, &mut ())
    }
}

/// Constant-time NTT butterfly layer.
///
/// Uses const generics to ensure loop bounds are compile-time constants,
/// avoiding UDIV instructions from runtime `step_by` calculations.
#[allow(clippy::inline_always)] // Required for constant-time guarantees in crypto code
#[inline(always)]
fn ntt_layer<const LEN: usize, const ITERATIONS: usize, T, O>(
    w: &mut [Elem; 256],
    k: &mut usize,
    layer: usize,
    twiddles: &T,
    observer: &mut O,
) where
    T: TwiddleSource,
    O: NttObserver,
{
    for i in 0..ITERATIONS {
        let start = i * 2 * LEN;
        *k += 1;
        let z = twiddles.zeta(*k);
        observer.block(&ButterflyBlock {
            layer,
            len: LEN,
            start,
            k: *k,
            exponent: exponent(*k),
            zeta: z,
        });
        for j in start..(start + LEN) {
            let t = z * w[j + LEN];
            w[j + LEN] = w[j] - t;
            w[j] = w[j] + t;
        }
    }
}

// Algorithm 9 NTT
impl Ntt for Polynomial {
    type Output = NttPolynomial;

    fn ntt_with<T, O>(&self, twiddles: &T, observer: &mut O) -> NttPolynomial
    where
        T: TwiddleSource,
        O: NttObserver,
    {
        let mut w: [Elem; 256] = self.0.clone().into();
        let mut k = 0;

        ntt_layer::<128, 1, T, O>(&mut w, &mut k, 0, twiddles, observer);
        ntt_layer::<64, 2, T, O>(&mut w, &mut k, 1, twiddles, observer);
        ntt_layer::<32, 4, T, O>(&mut w, &mut k, 2, twiddles, observer);
        ntt_layer::<16, 8, T, O>(&mut w, &mut k, 3, twiddles, observer);
        ntt_layer::<8, 16, T, O>(&mut w, &mut k, 4, twiddles, observer);
        ntt_layer::<4, 32, T, O>(&mut w, &mut k, 5, twiddles, observer);
        ntt_layer::<2, 64, T, O>(&mut w, &mut k, 6, twiddles, observer);

        NttPolynomial::new(w.into())
    }
}

/// Mapping from the NTT representation `T_q` back to the coefficient representation `R_q`
#[allow(clippy::module_name_repetitions)]
pub trait NttInverse {
    /// The coefficient-domain type
    type Output;

    /// Inverse transform with an explicit twiddle strategy and observer.
    ///
    /// Mirrors [`Ntt::ntt_with`]: half-lengths grow from 2 to 128 and the twiddle counter runs
    /// down from 127.  The result is scaled by `128^{-1}`.
    fn ntt_inverse_with<T, O>(&self, twiddles: &T, observer: &mut O) -> Self::Output
    where
        T: TwiddleSource,
        O: NttObserver;

    /// Apply the inverse transform.
    fn ntt_inverse(&self) -> Self::Output {
        self.ntt_inverse_with(&Precomputed, &mut ())
    }
}

/// Constant-time inverse NTT butterfly layer.
///
/// Uses const generics to ensure loop bounds are compile-time constants,
/// avoiding UDIV instructions from runtime `step_by` calculations.
#[allow(clippy::inline_always)] // Required for constant-time guarantees in crypto code
#[inline(always)]
fn ntt_inverse_layer<const LEN: usize, const ITERATIONS: usize, T, O>(
    w: &mut [Elem; 256],
    k: &mut usize,
    layer: usize,
    twiddles: &T,
    observer: &mut O,
) where
    T: TwiddleSource,
    O: NttObserver,
{
    for i in 0..ITERATIONS {
        let start = i * 2 * LEN;
        *k -= 1;
        let z = twiddles.zeta(*k);
        observer.block(&ButterflyBlock {
            layer,
            len: LEN,
            start,
            k: *k,
            exponent: exponent(*k),
            zeta: z,
        });
        for j in start..(start + LEN) {
            let t = w[j];
            let u = w[j + LEN];
            w[j] = t + u;
            w[j + LEN] = z * (u - t);
        }
    }
}

// Algorithm 10 NTT^{-1}
impl NttInverse for NttPolynomial {
    type Output = Polynomial;

    fn ntt_inverse_with<T, O>(&self, twiddles: &T, observer: &mut O) -> Polynomial
    where
        T: TwiddleSource,
        O: NttObserver,
    {
        let mut w: [Elem; 256] = self.0.clone().into();
        let mut k = 128;

        ntt_inverse_layer::<2, 64, T, O>(&mut w, &mut k, 0, twiddles, observer);
        ntt_inverse_layer::<4, 32, T, O>(&mut w, &mut k, 1, twiddles, observer);
        ntt_inverse_layer::<8, 16, T, O>(&mut w, &mut k, 2, twiddles, observer);
        ntt_inverse_layer::<16, 8, T, O>(&mut w, &mut k, 3, twiddles, observer);
        ntt_inverse_layer::<32, 4, T, O>(&mut w, &mut k, 4, twiddles, observer);
        ntt_inverse_layer::<64, 2, T, O>(&mut w, &mut k, 5, twiddles, observer);
        ntt_inverse_layer::<128, 1, T, O>(&mut w, &mut k, 6, twiddles, observer);

        INV128 * &Polynomial::new(w.into())
    }
}

// Algorithm 12 BaseCaseMultiply
//
// (a0 + a1 X) * (b0 + b1 X) mod (X^2 - gamma)
fn base_case_multiply(a0: Elem, a1: Elem, b0: Elem, b1: Elem, gamma: Elem) -> (Elem, Elem) {
    let c0 = a0 * b0 + a1 * b1 * gamma;
    let c1 = a0 * b1 + a1 * b0;
    (c0, c1)
}

/// `MultiplyNTTs` with an explicit twiddle strategy.
///
/// Block `i` is multiplied modulo `X^2 - gamma_i`, `gamma_i = zeta^{2 BitRev_7(i) + 1}`.
pub fn multiply_ntts_with<T: TwiddleSource>(
    lhs: &NttPolynomial,
    rhs: &NttPolynomial,
    twiddles: &T,
) -> NttPolynomial {
    let mut out = Array::<Elem, U256>::default();
    let blocks = out
        .chunks_exact_mut(2)
        .zip(lhs.0.chunks_exact(2))
        .zip(rhs.0.chunks_exact(2));

    for (i, ((h, f), g)) in blocks.enumerate() {
        let (c0, c1) = base_case_multiply(f[0], f[1], g[0], g[1], twiddles.gamma(i));
        h[0] = c0;
        h[1] = c1;
    }

    NttPolynomial::new(out)
}

// Algorithm 11 MultiplyNTTs
impl MultiplyNtt for BaseField {
    fn multiply_ntt(lhs: &NttPolynomial, rhs: &NttPolynomial) -> NttPolynomial {
        multiply_ntts_with(lhs, rhs, &Precomputed)
    }
}

/// Multiplication in `R_q`, by way of the NTT
pub fn multiply_polynomials(lhs: &Polynomial, rhs: &Polynomial) -> Polynomial {
    (&lhs.ntt() * &rhs.ntt()).ntt_inverse()
}
