//! Polynomial long division.
//!
//! For dividend `n` and non-empty divisor `d` returns `(q, r)` with
//! `n = d*q + r` and either `r` empty or `degree(r) < degree(d)`.
//!
//! ```text
//!  q <- 0, r <- n
//!  while r != 0 and degree(r) >= degree(d):
//!      t <- lead(r) / lead(d)
//!      q <- q + t
//!      r <- r - t*d
//! ```
//! The emptiness test comes first: the empty remainder has degree 0, so
//! without it a constant divisor would never let the loop stop.
use crate::polynomial::poly_engine::{CancellationPolicy, Polynomial};
use crate::polynomial::poly_errors::PolyError;
use log::{debug, info};

impl Polynomial {
    /// Quotient and remainder of `self / divisor` with exact cancellation.
    ///
    /// # Examples
    /// ```
    /// use RustedPoly::polynomial::poly_engine::Polynomial;
    /// let n = Polynomial::parse("x^2 - 1").unwrap();
    /// let d = Polynomial::parse("x - 1").unwrap();
    /// let (q, r) = n.div_rem(&d).unwrap();
    /// assert_eq!(q, Polynomial::parse("x + 1").unwrap());
    /// assert!(r.is_empty());
    /// ```
    pub fn div_rem(&self, divisor: &Polynomial) -> Result<(Polynomial, Polynomial), PolyError> {
        self.div_rem_with(divisor, CancellationPolicy::Exact)
    }

    pub fn div_rem_with(
        &self,
        divisor: &Polynomial,
        policy: CancellationPolicy,
    ) -> Result<(Polynomial, Polynomial), PolyError> {
        let (divisor_exp, divisor_coef) =
            divisor.leading_term().ok_or(PolyError::DivisionByZero)?;
        let mut quotient = Polynomial::new();
        let mut remainder = self.clone();
        let mut steps = 0usize;

        while !remainder.is_empty() && remainder.degree() >= divisor.degree() {
            let Some((lead_exp, lead_coef)) = remainder.leading_term() else {
                break;
            };
            let t = Polynomial::monomial(lead_exp - divisor_exp, lead_coef / divisor_coef);
            quotient = quotient.add_with(&t, policy);
            remainder = remainder.sub_with(&t.mul_with(divisor, policy)?, policy);
            // the leading term cancels by construction; drop any rounding residue
            // so the degree strictly decreases
            remainder.terms.remove(&lead_exp);
            steps += 1;
            debug!(
                "division step {}: t = {}, remainder = {}",
                steps, t, remainder
            );
        }
        info!(
            "divided in {} steps: quotient degree {}, remainder terms {}",
            steps,
            quotient.degree(),
            remainder.len()
        );
        Ok((quotient, remainder))
    }
}
