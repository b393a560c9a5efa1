//! Build check: `kyber-ntt` without `alloc` or `std`.

#![no_std]

use kyber_ntt::{CoefficientVector, Error, Ntt, NttInverse, Polynomial};

pub fn ring_product(f: &[u16], g: &[u16]) -> Result<Polynomial, Error> {
    let f_hat = Polynomial::from_coefficients(f)?.ntt();
    let g_hat = Polynomial::from_coefficients(g)?.ntt();
    Ok((&f_hat * &g_hat).ntt_inverse())
}
