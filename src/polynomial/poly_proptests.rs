//! Property-based tests for polynomial arithmetic.
//!
//! Coefficients are small integers so sums and products stay exact in `f64`
//! and results can be compared with `==`; divisors are monic (leading
//! coefficient ±1) for the same reason.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::polynomial::poly_engine::Polynomial;

    fn small_poly() -> impl Strategy<Value = Polynomial> {
        prop::collection::vec((0u32..12, -20i32..=20), 0..6).prop_map(|terms| {
            Polynomial::from_terms(terms.into_iter().map(|(e, c)| (e, c as f64)))
        })
    }

    fn monic_divisor() -> impl Strategy<Value = Polynomial> {
        (
            0u32..5,
            prop_oneof![Just(1.0), Just(-1.0)],
            prop::collection::vec((0u32..5, -9i32..=9), 0..4),
        )
            .prop_map(|(degree, lead, lower)| {
                let mut terms: Vec<(u32, f64)> = lower
                    .into_iter()
                    .filter(|(e, _)| *e < degree)
                    .map(|(e, c)| (e, c as f64))
                    .collect();
                terms.push((degree, lead));
                Polynomial::from_terms(terms)
            })
    }

    fn float_poly() -> impl Strategy<Value = Polynomial> {
        prop::collection::vec((0u32..20, -1.0e6f64..1.0e6), 0..8)
            .prop_map(|terms| Polynomial::from_terms(terms))
    }

    proptest! {
        #[test]
        fn add_empty_is_identity(p in small_poly()) {
            prop_assert_eq!(&p + &Polynomial::new(), p);
        }

        #[test]
        fn sub_self_is_empty(p in small_poly()) {
            prop_assert!((&p - &p).is_empty());
        }

        #[test]
        fn add_commutative(p in small_poly(), q in small_poly()) {
            prop_assert_eq!(&p + &q, &q + &p);
        }

        #[test]
        fn mul_distributes_over_add(p in small_poly(), q in small_poly(), r in small_poly()) {
            prop_assert_eq!(&p * &(&q + &r), &(&p * &q) + &(&p * &r));
        }

        #[test]
        fn no_zero_coefficients(p in small_poly(), q in small_poly()) {
            for result in [&p + &q, &p - &q, &p * &q] {
                prop_assert!(result.terms().all(|(_, c)| c != 0.0));
            }
        }

        #[test]
        fn division_invariant(p in small_poly(), d in monic_divisor()) {
            let (q, r) = p.div_rem(&d).unwrap();
            prop_assert!(r.is_empty() || r.degree() < d.degree());
            prop_assert_eq!(&(&d * &q) + &r, p);
        }

        #[test]
        fn derivative_undoes_integral(p in small_poly()) {
            let back = p.integral().unwrap().derivative();
            prop_assert_eq!(back.len(), p.len());
            for (exponent, coefficient) in p.terms() {
                prop_assert!(approx::relative_eq!(
                    back.coefficient(exponent),
                    coefficient,
                    epsilon = 1e-12,
                    max_relative = 1e-12
                ));
            }
        }

        #[test]
        fn format_parse_round_trip(p in float_poly()) {
            let reparsed = Polynomial::parse(&p.to_string()).unwrap();
            prop_assert_eq!(reparsed, p);
        }
    }
}
