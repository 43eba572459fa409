//! # Polynomial Term Model
//!
//! Canonical sparse representation of a polynomial in one variable: a map from
//! exponent to coefficient. Every other part of the polynomial module reads and
//! writes this structure.
//!
//! ## Invariants
//! - exponents are unique and non-negative (`u32` keys)
//! - no entry holds a coefficient that the active [`CancellationPolicy`] treats
//!   as zero; an operation producing such a coefficient removes the entry
//! - the empty polynomial is the zero polynomial, its degree is 0 by convention
//! - parsing, multiplication and integration refuse to produce an exponent
//!   above [`MAX_EXPONENT`] and return `PolyError::ExponentOverflow` instead
//!
//! ## Main Structures and Methods
//! - `Polynomial::new()` - the empty (zero) polynomial
//! - `Polynomial::from_terms()` - build from (exponent, coefficient) pairs
//! - `Polynomial::monomial()` - single term c*x^e
//! - `degree()`, `leading_term()`, `coefficient()` - read access
//! - `evaluate()` - Horner evaluation at a point
//!
//! Terms are kept in a `BTreeMap`, so iteration is ascending by exponent and the
//! leading term is always the last entry.

use crate::polynomial::poly_errors::PolyError;
use std::collections::BTreeMap;

/// largest power accepted by the parser and produced by `mul_with` / `integral_with`
pub const MAX_EXPONENT: u32 = i32::MAX as u32;

/// exponent `a + b`, or `ExponentOverflow` when it is above [`MAX_EXPONENT`]
pub(crate) fn checked_exponent(a: u32, b: u32) -> Result<u32, PolyError> {
    let sum = a as u64 + b as u64;
    if sum > MAX_EXPONENT as u64 {
        return Err(PolyError::ExponentOverflow { exponent: sum });
    }
    Ok(sum as u32)
}

/// x^n for any u32 power; powi only takes i32
fn power(x: f64, n: u32) -> f64 {
    match i32::try_from(n) {
        Ok(n) => x.powi(n),
        Err(_) => x.powf(n as f64),
    }
}

/// Rule deciding when a coefficient counts as zero and must be dropped.
///
/// `Exact` keeps every coefficient that is not exactly `0.0`. `Tolerance(eps)`
/// also drops coefficients with `|c| <= eps`, which removes floating point
/// residue such as `1e-17` left over after cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CancellationPolicy {
    #[default]
    Exact,
    Tolerance(f64),
}

impl CancellationPolicy {
    pub fn is_cancelled(&self, coefficient: f64) -> bool {
        match self {
            CancellationPolicy::Exact => coefficient == 0.0,
            CancellationPolicy::Tolerance(eps) => coefficient.abs() <= *eps,
        }
    }
}

/// Polynomial in one variable stored as exponent -> coefficient.
///
/// # Examples
/// ```
/// use RustedPoly::polynomial::poly_engine::Polynomial;
/// let p = Polynomial::from_terms([(2, 3.0), (0, -1.0)]);
/// assert_eq!(p.degree(), 2);
/// assert_eq!(p.coefficient(2), 3.0);
/// assert_eq!(p.evaluate(2.0), 11.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polynomial {
    pub(crate) terms: BTreeMap<u32, f64>,
}

impl Polynomial {
    /// the empty polynomial (zero)
    pub fn new() -> Self {
        Polynomial {
            terms: BTreeMap::new(),
        }
    }

    /// Build from (exponent, coefficient) pairs. Pairs with the same exponent are
    /// summed and zero results dropped.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (u32, f64)>,
    {
        Self::from_terms_with(terms, CancellationPolicy::Exact)
    }

    pub fn from_terms_with<I>(terms: I, policy: CancellationPolicy) -> Self
    where
        I: IntoIterator<Item = (u32, f64)>,
    {
        let mut poly = Polynomial::new();
        for (exponent, coefficient) in terms {
            poly.accumulate(exponent, coefficient, policy);
        }
        poly
    }

    /// single term c*x^e; a zero coefficient gives the empty polynomial
    pub fn monomial(exponent: u32, coefficient: f64) -> Self {
        Self::from_terms([(exponent, coefficient)])
    }

    /// Sum `coefficient` into the entry at `exponent`, removing the entry when the
    /// running sum is cancelled.
    pub(crate) fn accumulate(
        &mut self,
        exponent: u32,
        coefficient: f64,
        policy: CancellationPolicy,
    ) {
        let entry = self.terms.entry(exponent).or_insert(0.0);
        *entry += coefficient;
        if policy.is_cancelled(*entry) {
            self.terms.remove(&exponent);
        }
    }

    /// terms in ascending exponent order
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (u32, f64)> + '_ {
        self.terms.iter().map(|(e, c)| (*e, *c))
    }

    /// coefficient at `exponent`, 0.0 when absent
    pub fn coefficient(&self, exponent: u32) -> f64 {
        self.terms.get(&exponent).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Largest exponent. The empty polynomial has degree 0, so callers that need
    /// to tell "constant" from "zero" must check `is_empty()` first.
    pub fn degree(&self) -> u32 {
        self.leading_term().map(|(e, _)| e).unwrap_or(0)
    }

    /// (exponent, coefficient) of the highest power, `None` for the empty polynomial
    pub fn leading_term(&self) -> Option<(u32, f64)> {
        self.terms.last_key_value().map(|(e, c)| (*e, *c))
    }

    /// Evaluate at `x` with Horner's scheme, walking the sparse terms from the top.
    pub fn evaluate(&self, x: f64) -> f64 {
        let mut result = 0.0;
        let mut current = match self.leading_term() {
            Some((e, _)) => e,
            None => return 0.0,
        };
        for (exponent, coefficient) in self.terms().rev() {
            result *= power(x, current - exponent);
            result += coefficient;
            current = exponent;
        }
        result * power(x, current)
    }

    /// false once a coefficient has overflowed to ±inf or become NaN
    pub fn is_finite(&self) -> bool {
        self.terms.values().all(|c| c.is_finite())
    }
}
