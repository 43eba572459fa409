//! Turns polynomial text into the sparse term model.
//!
//! Input first goes through the [`normalize`] pass, then a small `nom` lexer
//! splits the normalized string into [`Token`]s of the form
//! `sign? coefficient? (x|X ('^' digits)?)?`, and every token is summed into the
//! [`Polynomial`] at its exponent.
//!
//!```
//! use RustedPoly::polynomial::poly_engine::Polynomial;
//! let p = Polynomial::parse("4x^3 -6x^2 +2x -3").unwrap();
//! assert_eq!(p.coefficient(3), 4.0);
//! assert_eq!(p.coefficient(0), -3.0);
//!```
//                    lexing of "+4x^3-1x+2"
//                |  sign | coef | var | ^exp |
//                |_______|______|_____|______|
//                |   +   |  4   |  x  |  3   |  -> (3, 4.0)
//                |   -   |  1   |  x  |      |  -> (1, -1.0)
//                |   +   |  2   |     |      |  -> (0, 2.0)
use crate::polynomial::normalizer::normalize;
use crate::polynomial::poly_engine::{CancellationPolicy, MAX_EXPONENT, Polynomial};
use crate::polynomial::poly_errors::PolyError;
use log::{debug, warn};
use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{opt, recognize, value},
    error::{Error, ErrorKind},
    sequence::preceded,
};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// What to do with text that is not a term.
///
/// `Strict` reports the first such fragment as [`PolyError::UnexpectedInput`];
/// `Lenient` skips it character by character and keeps scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ParseMode {
    #[default]
    Strict,
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParseOptions {
    pub mode: ParseMode,
    pub policy: CancellationPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

/// One lexed term, still holding its source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    /// byte offset in the normalized string
    pub position: usize,
    pub sign: Sign,
    pub coefficient: Option<&'a str>,
    pub variable: Option<char>,
    pub exponent: Option<&'a str>,
}

impl Token<'_> {
    /// (exponent, coefficient) carried by this token
    pub fn term(&self) -> Result<(u32, f64), PolyError> {
        let magnitude = match self.coefficient {
            Some(text) => parse_coefficient_value(text)?,
            None => 1.0,
        };
        let coefficient = match self.sign {
            Sign::Plus => magnitude,
            Sign::Minus => -magnitude,
        };
        let exponent = match (self.variable, self.exponent) {
            (None, _) => 0,
            (Some(_), None) => 1,
            (Some(_), Some(digits)) => {
                let power = digits.parse::<u64>().map_err(|e| PolyError::InvalidNumber {
                    token: digits.to_string(),
                    reason: e.to_string(),
                })?;
                if power > MAX_EXPONENT as u64 {
                    return Err(PolyError::ExponentOverflow { exponent: power });
                }
                power as u32
            }
        };
        Ok((exponent, coefficient))
    }
}

fn parse_coefficient_value(text: &str) -> Result<f64, PolyError> {
    let value = text.parse::<f64>().map_err(|e| PolyError::InvalidNumber {
        token: text.to_string(),
        reason: e.to_string(),
    })?;
    if !value.is_finite() {
        return Err(PolyError::InvalidNumber {
            token: text.to_string(),
            reason: "coefficient out of range".to_string(),
        });
    }
    Ok(value)
}

fn parse_sign(input: &str) -> IResult<&str, Sign> {
    alt((value(Sign::Plus, char('+')), value(Sign::Minus, char('-')))).parse(input)
}

/// decimal digits: `3`, `2.5`, `4.`, `.5`
fn parse_coefficient(input: &str) -> IResult<&str, &str> {
    alt((
        recognize((digit1, opt((char('.'), digit0)))),
        recognize((char('.'), digit1)),
    ))
    .parse(input)
}

/// variable symbol with an optional `^digits` power
fn parse_variable_power(input: &str) -> IResult<&str, (char, Option<&str>)> {
    (one_of("xX"), opt(preceded(char('^'), digit1))).parse(input)
}

type RawTerm<'a> = (Option<Sign>, Option<&'a str>, Option<(char, Option<&'a str>)>);

fn parse_term_token(input: &str) -> IResult<&str, RawTerm<'_>> {
    let (rest, (sign, coefficient, variable)) =
        (opt(parse_sign), opt(parse_coefficient), opt(parse_variable_power)).parse(input)?;
    // a sign on its own is not a term
    if coefficient.is_none() && variable.is_none() {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify)));
    }
    Ok((rest, (sign, coefficient, variable)))
}

/// Split a normalized string into tokens.
///
/// After normalization every well-formed term carries its own sign, so a term
/// that follows another without one (`"2xx"`, `"x2"`, `"1.2.3"`) is glued to its
/// neighbour. Strict mode reports it. Lenient mode keeps it when it has a numeric
/// coefficient and skips a bare variable.
pub fn tokenize(normalized: &str, mode: ParseMode) -> Result<Vec<Token<'_>>, PolyError> {
    let mut tokens = Vec::new();
    // empty input normalizes to a lone sign
    if normalized == "+" || normalized == "-" {
        return Ok(tokens);
    }
    let mut rest = normalized;
    while !rest.is_empty() {
        let position = normalized.len() - rest.len();
        match parse_term_token(rest) {
            Ok((remaining, (sign, coefficient, variable))) => {
                if sign.is_none() && position > 0 {
                    match mode {
                        ParseMode::Strict => {
                            return Err(PolyError::UnexpectedInput {
                                position,
                                fragment: rest.to_string(),
                            });
                        }
                        ParseMode::Lenient if coefficient.is_none() => {
                            warn!(
                                "skipping unsigned '{}' at position {} of '{}'",
                                &rest[..rest.len() - remaining.len()],
                                position,
                                normalized
                            );
                            rest = remaining;
                            continue;
                        }
                        ParseMode::Lenient => {}
                    }
                }
                tokens.push(Token {
                    position,
                    sign: sign.unwrap_or(Sign::Plus),
                    coefficient,
                    variable: variable.map(|(symbol, _)| symbol),
                    exponent: variable.and_then(|(_, exponent)| exponent),
                });
                rest = remaining;
            }
            Err(_) => {
                let skipped = rest.chars().next().map(char::len_utf8).unwrap_or(1);
                match mode {
                    ParseMode::Strict => {
                        return Err(PolyError::UnexpectedInput {
                            position,
                            fragment: rest.to_string(),
                        });
                    }
                    ParseMode::Lenient => {
                        warn!(
                            "skipping '{}' at position {} of '{}'",
                            &rest[..skipped],
                            position,
                            normalized
                        );
                        rest = &rest[skipped..];
                    }
                }
            }
        }
    }
    Ok(tokens)
}

impl Polynomial {
    /// Parse with the default options: strict mode, exact cancellation.
    pub fn parse(input: &str) -> Result<Polynomial, PolyError> {
        Self::parse_with(input, &ParseOptions::default())
    }

    pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Polynomial, PolyError> {
        let normalized = normalize(input);
        debug!("normalized '{}' -> '{}'", input, normalized);
        let tokens = tokenize(&normalized, options.mode)?;
        let mut poly = Polynomial::new();
        for token in &tokens {
            let (exponent, coefficient) = token.term()?;
            poly.accumulate(exponent, coefficient, options.policy);
        }
        debug!("parsed {} tokens into {} terms", tokens.len(), poly.len());
        Ok(poly)
    }
}

impl FromStr for Polynomial {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Polynomial::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn terms_of(p: &Polynomial) -> Vec<(u32, f64)> {
        p.terms().collect()
    }

    #[test]
    fn test_parse_zero() {
        let p = Polynomial::parse("0").unwrap();
        assert!(p.is_empty());
        assert_eq!(p.degree(), 0);
    }

    #[test]
    fn test_parse_sample() {
        let p = Polynomial::parse("4x^3-6x^2+2x-3").unwrap();
        assert_eq!(
            terms_of(&p),
            vec![(0, -3.0), (1, 2.0), (2, -6.0), (3, 4.0)]
        );
        let spaced = Polynomial::parse("4x^3 -6x^2 +2x -3").unwrap();
        assert_eq!(p, spaced);
    }

    #[test]
    fn test_parse_bare_variables() {
        let p = Polynomial::parse("x + 2").unwrap();
        assert_eq!(terms_of(&p), vec![(0, 2.0), (1, 1.0)]);
        let q = Polynomial::parse("-X^5").unwrap();
        assert_eq!(terms_of(&q), vec![(5, -1.0)]);
    }

    #[test]
    fn test_parse_decimal_coefficients() {
        let p = Polynomial::parse("2.5x^2 - .5x + 4.").unwrap();
        assert_eq!(terms_of(&p), vec![(0, 4.0), (1, -0.5), (2, 2.5)]);
    }

    #[test]
    fn test_parse_like_terms_accumulate() {
        let p = Polynomial::parse("3x^2 + x - 3x^2 + 2x").unwrap();
        assert_eq!(terms_of(&p), vec![(1, 3.0)]);
        let q = Polynomial::parse("x - x").unwrap();
        assert!(q.is_empty());
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(Polynomial::parse("").unwrap().is_empty());
        assert!(Polynomial::parse("   ").unwrap().is_empty());
    }

    #[test]
    fn test_strict_mode_rejects_garbage() {
        let err = Polynomial::parse("3y + 2").unwrap_err();
        assert_eq!(
            err,
            PolyError::UnexpectedInput {
                position: 2,
                fragment: "y+2".to_string()
            }
        );
        assert!(Polynomial::parse("x^").is_err());
        assert!(Polynomial::parse("x + - 2").is_err());
    }

    #[test]
    fn test_lenient_mode_skips_garbage() {
        let options = ParseOptions {
            mode: ParseMode::Lenient,
            ..Default::default()
        };
        let p = Polynomial::parse_with("3y + 2", &options).unwrap();
        assert_eq!(terms_of(&p), vec![(0, 5.0)]);
        let q = Polynomial::parse_with("x^2 ? 3x", &options).unwrap();
        assert_eq!(terms_of(&q), vec![(1, 3.0), (2, 1.0)]);
    }

    #[test]
    fn test_unsigned_term_rejected_in_strict_mode() {
        for (input, position, fragment) in [
            ("2xx", 3, "x"),
            ("x2", 3, "2"),
            ("1.2.3", 4, ".3"),
            ("3x^2x", 5, "x"),
        ] {
            assert_eq!(
                Polynomial::parse(input).unwrap_err(),
                PolyError::UnexpectedInput {
                    position,
                    fragment: fragment.to_string()
                },
                "{}",
                input
            );
        }
    }

    #[test]
    fn test_unsigned_term_in_lenient_mode() {
        let options = ParseOptions {
            mode: ParseMode::Lenient,
            ..Default::default()
        };
        // a bare variable without a sign is dropped, a number is kept
        let p = Polynomial::parse_with("2xx", &options).unwrap();
        assert_eq!(terms_of(&p), vec![(1, 2.0)]);
        let q = Polynomial::parse_with("x2", &options).unwrap();
        assert_eq!(terms_of(&q), vec![(0, 2.0), (1, 1.0)]);
        let r = Polynomial::parse_with("3x^2x", &options).unwrap();
        assert_eq!(terms_of(&r), vec![(2, 3.0)]);
    }

    #[test]
    fn test_exponent_bound() {
        let top = Polynomial::parse(&format!("x^{}", MAX_EXPONENT)).unwrap();
        assert_eq!(top.degree(), MAX_EXPONENT);
        assert_eq!(
            Polynomial::parse("x^4294967295").unwrap_err(),
            PolyError::ExponentOverflow {
                exponent: 4294967295
            }
        );
        assert!(matches!(
            Polynomial::parse("x^99999999999"),
            Err(PolyError::ExponentOverflow { .. })
        ));
        let digits = format!("x^{}", "9".repeat(30));
        assert!(matches!(
            Polynomial::parse(&digits),
            Err(PolyError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_overflowing_coefficient() {
        let huge = format!("{}x", "9".repeat(400));
        let err = Polynomial::parse(&huge).unwrap_err();
        assert!(matches!(err, PolyError::InvalidNumber { .. }));
    }

    #[test]
    fn test_tokenize_positions() {
        let tokens = tokenize("+4x^3-1x+2", ParseMode::Strict).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].exponent, Some("3"));
        assert_eq!(tokens[1].position, 5);
        assert_eq!(tokens[1].sign, Sign::Minus);
        assert_eq!(tokens[2].variable, None);
        assert_eq!(tokens[2].term().unwrap(), (0, 2.0));
    }

    #[test]
    fn test_from_str() {
        let p: Polynomial = "x^2 - 1".parse().unwrap();
        assert_eq!(p.degree(), 2);
    }

    #[test]
    fn test_parse_mode_names() {
        let names: Vec<String> = ParseMode::iter().map(|m| m.to_string()).collect();
        assert_eq!(names, vec!["strict", "lenient"]);
        assert_eq!("LENIENT".parse::<ParseMode>().unwrap(), ParseMode::Lenient);
    }
}
