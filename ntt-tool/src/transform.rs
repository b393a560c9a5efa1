//! Transform commands over 256-coefficient files.

use std::error::Error;

use kyber_ntt::{
    CoefficientVector, N, Ntt, NttInverse, NttPolynomial, Polynomial, multiply_polynomials, text,
    trace::ZetaTrace, twiddle::Precomputed,
};

use crate::files;

/// Default output file for the forward transform of operand `name`.
pub fn ntt_output_path(name: &str, trace: bool) -> String {
    if trace {
        format!("output_ntt_{name}_v3.txt")
    } else {
        format!("output_ntt_{name}.txt")
    }
}

pub fn ntt(input: &str, output: &str, trace: bool) -> Result<(), Box<dyn Error>> {
    let f = Polynomial::from_coefficients(files::read_coefficients(input)?.as_slice())?;

    let out = if trace {
        let mut zetas = ZetaTrace::new();
        let f_hat = f.ntt_with(&Precomputed, &mut zetas);
        text::format_traced(&f_hat.coefficients(), &zetas)
    } else {
        text::format_decimal(&f.ntt().coefficients())
    };
    files::write(output, &out, N)
}

pub fn intt(input: &str, output: &str) -> Result<(), Box<dyn Error>> {
    let f_hat = NttPolynomial::from_coefficients(files::read_coefficients(input)?.as_slice())?;
    let f = f_hat.ntt_inverse();
    files::write(output, &text::format_decimal(&f.coefficients()), N)
}

pub fn mul(f: &str, g: &str, output: &str) -> Result<(), Box<dyn Error>> {
    let f_hat = files::read_coefficients(f)?;
    let g_hat = files::read_coefficients(g)?;
    let h_hat = kyber_ntt::multiply_ntts(&f_hat, &g_hat)?;
    files::write(output, &text::format_decimal(&h_hat), N)
}

pub fn poly_mul(f: &str, g: &str, output: &str) -> Result<(), Box<dyn Error>> {
    let f = Polynomial::from_coefficients(files::read_coefficients(f)?.as_slice())?;
    let g = Polynomial::from_coefficients(files::read_coefficients(g)?.as_slice())?;
    let h = multiply_polynomials(&f, &g);
    files::write(output, &text::format_decimal(&h.coefficients()), N)
}
