use crate::polynomial::poly_engine::{CancellationPolicy, Polynomial, checked_exponent};
use crate::polynomial::poly_errors::PolyError;

impl Polynomial {
    // INDEFINITE INTEGRAL
    /// ∫ c*x^e dx = c/(e+1) * x^(e+1), term by term. No constant of integration is added.
    /// Fails with `ExponentOverflow` when a term already sits at `MAX_EXPONENT`.
    pub fn integral(&self) -> Result<Polynomial, PolyError> {
        self.integral_with(CancellationPolicy::Exact)
    }

    pub fn integral_with(&self, policy: CancellationPolicy) -> Result<Polynomial, PolyError> {
        let mut result = Polynomial::new();
        for (exponent, coefficient) in self.terms() {
            let raised = checked_exponent(exponent, 1)?;
            result.accumulate(raised, coefficient / raised as f64, policy);
        }
        Ok(result)
    }

    /// d/dx c*x^e = c*e * x^(e-1); constant terms vanish
    pub fn derivative(&self) -> Polynomial {
        self.derivative_with(CancellationPolicy::Exact)
    }

    pub fn derivative_with(&self, policy: CancellationPolicy) -> Polynomial {
        let mut result = Polynomial::new();
        for (exponent, coefficient) in self.terms() {
            if exponent != 0 {
                result.accumulate(exponent - 1, coefficient * exponent as f64, policy);
            }
        }
        result
    }

    pub fn nth_derivative(&self, n: u32) -> Polynomial {
        let mut result = self.clone();
        for _ in 0..n {
            if result.is_empty() {
                break;
            }
            result = result.derivative();
        }
        result
    }

    /// Definite integration using the fundamental theorem of calculus
    pub fn definite_integral(&self, lower: f64, upper: f64) -> Result<f64, PolyError> {
        let antiderivative = self.integral()?;
        Ok(antiderivative.evaluate(upper) - antiderivative.evaluate(lower))
    }
}
