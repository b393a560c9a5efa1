//! Property-based tests for the `kyber-ntt` crate.

use kyber_ntt::{
    CoefficientVector, Elem, Ntt, NttInverse, NttPolynomial, Polynomial, Q, intt, multiply_ntts,
    multiply_ntts_with, ntt,
    twiddle::{OnDemand, Precomputed},
};
use proptest::{collection, prelude::*};

fn coefficients() -> impl Strategy<Value = Vec<u16>> {
    collection::vec(0..Q, 256)
}

fn wide_coefficients() -> impl Strategy<Value = Vec<i64>> {
    collection::vec(any::<i64>(), 256)
}

// Schoolbook multiplication in Z_q[X] / (X^256 + 1)
fn negacyclic_mul(f: &[u16], g: &[u16]) -> Vec<u16> {
    let q = i64::from(Q);
    let mut h = vec![0i64; 256];
    for (i, &a) in f.iter().enumerate() {
        for (j, &b) in g.iter().enumerate() {
            let prod = i64::from(a) * i64::from(b);
            if i + j < 256 {
                h[i + j] += prod;
            } else {
                h[i + j - 256] -= prod;
            }
        }
    }
    h.into_iter()
        .map(|x| u16::try_from(x.rem_euclid(q)).unwrap())
        .collect()
}

proptest! {
    #[test]
    fn round_trip(f in coefficients()) {
        let f_hat = ntt(&f).unwrap();
        let f_unhat = intt(&f_hat).unwrap();
        prop_assert_eq!(f_unhat.as_slice(), f.as_slice());

        let back = ntt(&intt(&f).unwrap()).unwrap();
        prop_assert_eq!(back.as_slice(), f.as_slice());
    }

    #[test]
    fn deterministic(f in coefficients(), g in coefficients()) {
        prop_assert_eq!(ntt(&f).unwrap(), ntt(&f).unwrap());
        prop_assert_eq!(intt(&f).unwrap(), intt(&f).unwrap());
        prop_assert_eq!(multiply_ntts(&f, &g).unwrap(), multiply_ntts(&f, &g).unwrap());
    }

    #[test]
    fn arbitrary_integers_are_reduced(f in wide_coefficients()) {
        let reduced: Vec<u16> = f.iter().map(|&x| kyber_ntt::reduce(x).0).collect();
        prop_assert_eq!(ntt(&f).unwrap(), ntt(&reduced).unwrap());
        prop_assert!(ntt(&f).unwrap().iter().all(|&x| x < Q));
    }

    #[test]
    fn multiplication_matches_schoolbook(f in coefficients(), g in coefficients()) {
        let h_hat = multiply_ntts(&ntt(&f).unwrap(), &ntt(&g).unwrap()).unwrap();
        let h = intt(&h_hat).unwrap();
        let expected = negacyclic_mul(&f, &g);
        prop_assert_eq!(h.as_slice(), expected.as_slice());
    }

    #[test]
    fn transforms_are_linear(f in coefficients(), g in coefficients(), c in 0..Q) {
        let f = Polynomial::from_coefficients(&f).unwrap();
        let g = Polynomial::from_coefficients(&g).unwrap();
        let c = Elem::new(c);

        prop_assert_eq!((&f + &g).ntt(), &f.ntt() + &g.ntt());
        prop_assert_eq!((&f - &g).ntt(), &f.ntt() - &g.ntt());
        prop_assert_eq!((c * &f).ntt(), c * &f.ntt());

        let f_hat = f.ntt();
        let g_hat = g.ntt();
        prop_assert_eq!((&f_hat + &g_hat).ntt_inverse(), &f + &g);
    }

    #[test]
    fn multiplication_commutes(f in coefficients(), g in coefficients()) {
        let f_hat = NttPolynomial::from_coefficients(&f).unwrap();
        let g_hat = NttPolynomial::from_coefficients(&g).unwrap();
        prop_assert_eq!(&f_hat * &g_hat, &g_hat * &f_hat);
    }

    #[test]
    fn twiddle_strategies_agree(f in coefficients(), g in coefficients()) {
        let f = Polynomial::from_coefficients(&f).unwrap();
        let g_hat = NttPolynomial::from_coefficients(&g).unwrap();

        let a = f.ntt_with(&Precomputed, &mut ());
        let b = f.ntt_with(&OnDemand, &mut ());
        prop_assert_eq!(&a, &b);

        prop_assert_eq!(
            multiply_ntts_with(&a, &g_hat, &Precomputed),
            multiply_ntts_with(&a, &g_hat, &OnDemand)
        );
        prop_assert_eq!(
            a.ntt_inverse_with(&Precomputed, &mut ()),
            a.ntt_inverse_with(&OnDemand, &mut ())
        );
    }
}
