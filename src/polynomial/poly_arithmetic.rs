//! Addition, subtraction and multiplication over the term model.
//!
//! All operations leave their operands untouched and return a fresh
//! [`Polynomial`]. The `_with` methods take an explicit
//! [`CancellationPolicy`]; the `std::ops` operators use exact cancellation.
//! `mul_with` reports a product power above
//! [`MAX_EXPONENT`](crate::polynomial::poly_engine::MAX_EXPONENT) as
//! `PolyError::ExponentOverflow`; the `*` operator panics on it instead.
//!
//! ```
//! use RustedPoly::polynomial::poly_engine::Polynomial;
//! let p1 = Polynomial::parse("4x^3 -6x^2 +2x -3").unwrap();
//! let p2 = Polynomial::parse("x + 2").unwrap();
//! let sum = &p1 + &p2;
//! assert_eq!(sum, Polynomial::parse("4x^3 - 6x^2 + 3x - 1").unwrap());
//! assert_eq!((&p1 * &p2).leading_term(), Some((4, 4.0)));
//! ```
use crate::polynomial::poly_engine::{CancellationPolicy, Polynomial, checked_exponent};
use crate::polynomial::poly_errors::PolyError;

impl Polynomial {
    pub fn add_with(&self, rhs: &Polynomial, policy: CancellationPolicy) -> Polynomial {
        let mut result = self.clone();
        for (exponent, coefficient) in rhs.terms() {
            result.accumulate(exponent, coefficient, policy);
        }
        result
    }

    pub fn sub_with(&self, rhs: &Polynomial, policy: CancellationPolicy) -> Polynomial {
        let mut result = self.clone();
        for (exponent, coefficient) in rhs.terms() {
            result.accumulate(exponent, -coefficient, policy);
        }
        result
    }

    /// every pair of terms contributes c1*c2 at e1+e2
    pub fn mul_with(
        &self,
        rhs: &Polynomial,
        policy: CancellationPolicy,
    ) -> Result<Polynomial, PolyError> {
        let mut result = Polynomial::new();
        for (e1, c1) in self.terms() {
            for (e2, c2) in rhs.terms() {
                result.accumulate(checked_exponent(e1, e2)?, c1 * c2, policy);
            }
        }
        Ok(result)
    }

    /// multiply every coefficient by `factor`
    pub fn scale(&self, factor: f64) -> Polynomial {
        Polynomial::from_terms(self.terms().map(|(e, c)| (e, c * factor)))
    }
}

fn multiply_or_panic(lhs: &Polynomial, rhs: &Polynomial) -> Polynomial {
    match lhs.mul_with(rhs, CancellationPolicy::Exact) {
        Ok(product) => product,
        Err(e) => panic!("polynomial multiplication failed: {}", e),
    }
}

impl std::ops::Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_with(rhs, CancellationPolicy::Exact)
    }
}

impl std::ops::Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_with(rhs, CancellationPolicy::Exact)
    }
}

/// # Panics
/// when a product power exceeds `MAX_EXPONENT`; use `mul_with` to get the error instead
impl std::ops::Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        multiply_or_panic(self, rhs)
    }
}

impl std::ops::Add for Polynomial {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_with(&rhs, CancellationPolicy::Exact)
    }
}

impl std::ops::Sub for Polynomial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_with(&rhs, CancellationPolicy::Exact)
    }
}

impl std::ops::Mul for Polynomial {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        multiply_or_panic(&self, &rhs)
    }
}

impl std::ops::Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl std::ops::Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl std::ops::AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        *self = self.add_with(rhs, CancellationPolicy::Exact);
    }
}

impl std::ops::SubAssign<&Polynomial> for Polynomial {
    fn sub_assign(&mut self, rhs: &Polynomial) {
        *self = self.sub_with(rhs, CancellationPolicy::Exact);
    }
}

impl std::ops::MulAssign<&Polynomial> for Polynomial {
    fn mul_assign(&mut self, rhs: &Polynomial) {
        *self = multiply_or_panic(self, rhs);
    }
}
