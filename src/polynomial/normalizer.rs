//! Rewrites raw user input into the strict lexical form the tokenizer expects:
//! no whitespace, an explicit leading sign and an explicit coefficient `1` on
//! every bare variable term.
//!
//! ```
//! use RustedPoly::polynomial::normalizer::normalize;
//! assert_eq!(normalize("x^2 - x + 3"), "+1x^2-1x+3");
//! assert_eq!(normalize("-X"), "-1X");
//! assert_eq!(normalize("   "), "+");
//! ```
use regex::Regex;
use std::sync::LazyLock;

// sign immediately followed by the variable symbol, i.e. a term with no coefficient
static BARE_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([+-])([xX])").expect("valid bare variable pattern"));

pub fn normalize(input: &str) -> String {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let signed = if compact.starts_with('+') || compact.starts_with('-') {
        compact
    } else {
        format!("+{}", compact)
    };
    BARE_VARIABLE.replace_all(&signed, "${1}1${2}").into_owned()
}
