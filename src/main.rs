#![allow(non_snake_case)]
use RustedPoly::Utils::logger::init_logger;
use RustedPoly::Utils::settings::PolyConfig;
use RustedPoly::polynomial::poly_engine::Polynomial;
use RustedPoly::polynomial::poly_errors::PolyError;
use RustedPoly::polynomial::poly_format::format_polynomial_with;
use std::env;

// usage: RustedPoly [settings file]
fn main() -> Result<(), PolyError> {
    let config = match env::args().nth(1) {
        Some(path) => PolyConfig::from_file(path)?,
        None => PolyConfig::default(),
    };
    init_logger(&config.log_settings());
    let options = config.parse_options();
    let policy = config.cancellation_policy();
    let format = config.format_options();
    let show = |p: &Polynomial| format_polynomial_with(p, &format);

    let example = 0;
    match example {
        0 => {
            // BASIC OPERATIONS on two polynomials
            let p1 = Polynomial::parse_with("4x^3 -6x^2 +2x -3", &options)?;
            let p2 = Polynomial::parse_with("x + 2", &options)?;

            println!("p1 =      {}", show(&p1));
            println!("p2 =      {}", show(&p2));
            println!("p1 + p2 = {}", show(&p1.add_with(&p2, policy)));
            println!("p1 - p2 = {}", show(&p1.sub_with(&p2, policy)));
            println!("p1 * p2 = {}", show(&p1.mul_with(&p2, policy)?));
            let (quotient, remainder) = p1.div_rem_with(&p2, policy)?;
            println!("p1 / p2 = (quotient) {}", show(&quotient));
            println!("p1 / p2 = (remainder) {}", show(&remainder));
            println!("Integral of p1 = {}", show(&p1.integral_with(policy)?));
            println!("Derivative of p1 = {}", show(&p1.derivative_with(policy)));
        }
        1 => {
            // EVALUATION AND CALCULUS
            let p = Polynomial::parse_with("x^4 - 3x^2 + 0.5", &options)?;
            println!("p = {}", show(&p));
            println!("p(1.5) = {}", p.evaluate(1.5));
            println!("second derivative = {}", show(&p.nth_derivative(2)));
            println!("integral over [0, 1] = {}", p.definite_integral(0.0, 1.0)?);
            println!("2 * p = {}", show(&p.scale(2.0)));
        }
        _ => println!("no example {}", example),
    }
    Ok(())
}
