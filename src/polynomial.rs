//! Single-variable polynomials: parsing, arithmetic, long division, calculus and printing.
///
/// rewrites raw input into a strict form: explicit signs, explicit unit coefficients, no whitespace
pub mod normalizer;
/// turns a polynomial string into the sparse term model
///# Example
/// ```
/// use RustedPoly::polynomial::poly_engine::Polynomial;
/// use RustedPoly::polynomial::parse_poly::{ParseMode, ParseOptions};
/// let p = Polynomial::parse("4x^3 -6x^2 +2x -3").unwrap();
/// println!("parsed: {}", p);
/// // text that is not a term is an error by default, or skipped in lenient mode
/// assert!(Polynomial::parse("3y + 2").is_err());
/// let options = ParseOptions { mode: ParseMode::Lenient, ..Default::default() };
/// let q = Polynomial::parse_with("3y + 2", &options).unwrap();
/// assert_eq!(q.coefficient(0), 5.0);
/// ```
pub mod parse_poly;
///____________________________________________________________________________________________________________________________
/// # Polynomial engine
/// 1) the canonical sparse term model `Polynomial`
/// 2) addition, subtraction, multiplication (also as `+`, `-`, `*`)
/// 3) long division into quotient and remainder
/// 4) integral and derivative
///# Example
/// ```
/// use RustedPoly::polynomial::poly_engine::Polynomial;
/// let p1 = Polynomial::parse("4x^3 -6x^2 +2x -3").unwrap();
/// let p2 = Polynomial::parse("x + 2").unwrap();
/// println!("p1 + p2 = {}", &p1 + &p2);
/// println!("p1 - p2 = {}", &p1 - &p2);
/// println!("p1 * p2 = {}", &p1 * &p2);
/// let (quotient, remainder) = p1.div_rem(&p2).unwrap();
/// println!("p1 / p2 = {} remainder {}", quotient, remainder);
/// println!("integral of p1 = {}", p1.integral().unwrap());
/// println!("derivative of p1 = {}", p1.derivative());
/// assert_eq!(quotient.degree(), 2);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod poly_engine;
pub mod poly_arithmetic;
pub mod poly_division;
pub mod poly_calculus;
/// canonical text output, highest power first: " +4X^3 -6X^2 +2X -3"
pub mod poly_format;
pub mod poly_errors;

#[cfg(test)]
mod poly_proptests;
