//! Canonical text rendering of a polynomial.
//!
//! Terms are written highest power first, each as a space, an explicit sign,
//! the coefficient magnitude (left out when it is 1 on a non-constant term), the
//! variable symbol and `^exponent` for powers above one:
//! `{3: 4, 2: -6, 1: 1, 0: -3}` renders as `" +4X^3 -6X^2 +X -3"`.
//! The empty polynomial renders as an empty string.
//!
//! Text produced here parses back to the same polynomial as long as
//! [`Polynomial::is_finite`] holds. A coefficient that overflowed to ±inf or
//! became NaN prints as `inf` / `NaN`, which the parser rejects.
use crate::polynomial::poly_engine::Polynomial;
use std::fmt::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// symbol written for the variable
    pub variable: char,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions { variable: 'X' }
    }
}

pub fn format_polynomial(poly: &Polynomial) -> String {
    format_polynomial_with(poly, &FormatOptions::default())
}

pub fn format_polynomial_with(poly: &Polynomial, options: &FormatOptions) -> String {
    let mut out = String::new();
    for (exponent, coefficient) in poly.terms().rev() {
        out.push(' ');
        out.push(if coefficient < 0.0 { '-' } else { '+' });
        let magnitude = coefficient.abs();
        if magnitude != 1.0 || exponent == 0 {
            // writing into a String cannot fail
            let _ = write!(out, "{}", magnitude);
        }
        if exponent != 0 {
            out.push(options.variable);
            if exponent != 1 {
                let _ = write!(out, "^{}", exponent);
            }
        }
    }
    out
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&format_polynomial(self))
    }
}
