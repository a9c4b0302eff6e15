// src/expressions/mod.rs

//! Closed-form formulas built from π, φ, e, α and plain numbers.
//!
//! Every candidate derivation is an [`Expr`]: a small tree of arithmetic,
//! powers and elementary functions over named [`Constant`]s. Formulas can be
//! built in code with the helper constructors and `std::ops` operators, or
//! parsed from text such as `"pi * phi^(-4*pi)"`.
//!
//! Evaluation is strict: any intermediate result that leaves the real numbers
//! (NaN or ±∞) is reported as [`ShovelcatError::Domain`] rather than
//! propagating silently.

mod parser;

use crate::core::{Constant, Result, ShovelcatError};
use std::fmt;
use std::ops;
use std::str::FromStr;

/// Elementary functions available inside formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Exp,
    Ln,
    Log10,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
    /// Euler's Γ function.
    Gamma,
}

impl Function {
    /// Every function, in declaration order.
    pub const ALL: [Function; 11] = [
        Function::Exp,
        Function::Ln,
        Function::Log10,
        Function::Sqrt,
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Sinh,
        Function::Cosh,
        Function::Tanh,
        Function::Gamma,
    ];

    /// Name used when rendering and parsing.
    pub fn name(self) -> &'static str {
        match self {
            Function::Exp => "exp",
            Function::Ln => "ln",
            Function::Log10 => "log10",
            Function::Sqrt => "sqrt",
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Sinh => "sinh",
            Function::Cosh => "cosh",
            Function::Tanh => "tanh",
            Function::Gamma => "gamma",
        }
    }

    /// Looks a function up by name (case-insensitive).
    pub fn lookup(name: &str) -> Option<Function> {
        Function::ALL.into_iter().find(|f| f.name().eq_ignore_ascii_case(name))
    }

    /// Applies the function. May return NaN or ±∞; the caller checks.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Function::Exp => x.exp(),
            Function::Ln => x.ln(),
            Function::Log10 => x.log10(),
            Function::Sqrt => x.sqrt(),
            Function::Sin => x.sin(),
            Function::Cos => x.cos(),
            Function::Tan => x.tan(),
            Function::Sinh => x.sinh(),
            Function::Cosh => x.cosh(),
            Function::Tanh => x.tanh(),
            Function::Gamma => gamma(x),
        }
    }
}

/// A formula over named constants.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal number.
    Num(f64),
    /// A named constant such as π or φ.
    Const(Constant),
    /// Negation `-x`.
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    /// `base ^ exponent`
    Pow(Box<Expr>, Box<Expr>),
    /// An elementary function applied to an argument.
    Func(Function, Box<Expr>),
}

impl Expr {
    /// A literal number.
    pub fn num(value: f64) -> Self {
        Expr::Num(value)
    }

    /// A named constant.
    pub fn constant(c: Constant) -> Self {
        Expr::Const(c)
    }

    pub fn pi() -> Self {
        Expr::Const(Constant::Pi)
    }

    pub fn phi() -> Self {
        Expr::Const(Constant::Phi)
    }

    pub fn e() -> Self {
        Expr::Const(Constant::E)
    }

    pub fn ln2() -> Self {
        Expr::Const(Constant::Ln2)
    }

    /// `self ^ exponent`
    pub fn pow(self, exponent: impl Into<Expr>) -> Self {
        Expr::Pow(Box::new(self), Box::new(exponent.into()))
    }

    /// `1 / self`
    pub fn recip(self) -> Self {
        Expr::Div(Box::new(Expr::Num(1.0)), Box::new(self))
    }

    pub fn exp(self) -> Self {
        Expr::Func(Function::Exp, Box::new(self))
    }

    pub fn ln(self) -> Self {
        Expr::Func(Function::Ln, Box::new(self))
    }

    pub fn sqrt(self) -> Self {
        Expr::Func(Function::Sqrt, Box::new(self))
    }

    /// Applies an arbitrary [`Function`].
    pub fn apply(self, function: Function) -> Self {
        Expr::Func(function, Box::new(self))
    }

    /// Parses formula text. See the crate docs for the accepted grammar.
    ///
    /// # Errors
    /// `ShovelcatError::Parse` with the character position of the problem,
    /// including unrecognised identifiers.
    pub fn parse(text: &str) -> Result<Self> {
        parser::parse(text)
    }

    /// Evaluates the formula.
    ///
    /// # Errors
    /// `ShovelcatError::Domain` naming the innermost sub-expression whose value
    /// is NaN or infinite.
    pub fn eval(&self) -> Result<f64> {
        let value = match self {
            Expr::Num(v) => *v,
            Expr::Const(c) => c.value(),
            Expr::Neg(x) => -x.eval()?,
            Expr::Add(l, r) => l.eval()? + r.eval()?,
            Expr::Sub(l, r) => l.eval()? - r.eval()?,
            Expr::Mul(l, r) => l.eval()? * r.eval()?,
            Expr::Div(l, r) => {
                let denominator = r.eval()?;
                if denominator == 0.0 {
                    return Err(ShovelcatError::domain(self.to_string(), "division by zero"));
                }
                l.eval()? / denominator
            }
            Expr::Pow(b, e) => {
                let base = b.eval()?;
                let exponent = e.eval()?;
                if base < 0.0 && exponent.fract() != 0.0 {
                    return Err(ShovelcatError::domain(
                        self.to_string(),
                        "negative base raised to a fractional power",
                    ));
                }
                base.powf(exponent)
            }
            Expr::Func(function, x) => {
                let arg = x.eval()?;
                function.apply(arg)
            }
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ShovelcatError::domain(self.to_string(), format!("result is not finite ({})", value)))
        }
    }

    /// Distinct constants referenced by the formula, in first-appearance order.
    pub fn constants(&self) -> Vec<Constant> {
        let mut found = Vec::new();
        self.collect_constants(&mut found);
        found
    }

    fn collect_constants(&self, found: &mut Vec<Constant>) {
        match self {
            Expr::Num(_) => {}
            Expr::Const(c) => {
                if !found.contains(c) {
                    found.push(*c);
                }
            }
            Expr::Neg(x) | Expr::Func(_, x) => x.collect_constants(found),
            Expr::Add(l, r) | Expr::Sub(l, r) | Expr::Mul(l, r) | Expr::Div(l, r) | Expr::Pow(l, r) => {
                l.collect_constants(found);
                r.collect_constants(found);
            }
        }
    }

    /// Binding strength used to decide where parentheses are needed.
    fn precedence(&self) -> u8 {
        match self {
            Expr::Add(..) | Expr::Sub(..) => 1,
            Expr::Mul(..) | Expr::Div(..) => 2,
            Expr::Neg(_) => 3,
            Expr::Num(v) if *v < 0.0 => 3,
            Expr::Pow(..) => 4,
            Expr::Num(_) | Expr::Const(_) | Expr::Func(..) => 5,
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Num(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::Num(f64::from(value))
    }
}

impl From<Constant> for Expr {
    fn from(c: Constant) -> Self {
        Expr::Const(c)
    }
}

impl FromStr for Expr {
    type Err = ShovelcatError;

    fn from_str(s: &str) -> Result<Self> {
        Expr::parse(s)
    }
}

macro_rules! binary_op {
    ($trait:ident, $method:ident, $variant:ident) => {
        impl<T: Into<Expr>> ops::$trait<T> for Expr {
            type Output = Expr;

            fn $method(self, rhs: T) -> Expr {
                Expr::$variant(Box::new(self), Box::new(rhs.into()))
            }
        }
    };
}

binary_op!(Add, add, Add);
binary_op!(Sub, sub, Sub);
binary_op!(Mul, mul, Mul);
binary_op!(Div, div, Div);

impl ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(Box::new(self))
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        write!(f, "{}", v as i64)
    } else {
        write!(f, "{}", v)
    }
}

/// Writes `child`, wrapped in parentheses when it binds looser than `min`.
fn write_operand(f: &mut fmt::Formatter<'_>, child: &Expr, min: u8) -> fmt::Result {
    if child.precedence() < min {
        write!(f, "({})", child)
    } else {
        write!(f, "{}", child)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(v) => write_number(f, *v),
            Expr::Const(c) => write!(f, "{}", c),
            Expr::Neg(x) => {
                write!(f, "-")?;
                write_operand(f, x, 4)
            }
            Expr::Add(l, r) => {
                write_operand(f, l, 1)?;
                write!(f, " + ")?;
                write_operand(f, r, 1)
            }
            Expr::Sub(l, r) => {
                write_operand(f, l, 1)?;
                write!(f, " - ")?;
                write_operand(f, r, 2)
            }
            Expr::Mul(l, r) => {
                write_operand(f, l, 2)?;
                write!(f, " × ")?;
                write_operand(f, r, 3)
            }
            Expr::Div(l, r) => {
                write_operand(f, l, 2)?;
                write!(f, " / ")?;
                write_operand(f, r, 3)
            }
            Expr::Pow(b, e) => {
                write_operand(f, b, 5)?;
                write!(f, "^")?;
                // Exponents other than bare atoms are always parenthesised for readability.
                write_operand(f, e, 5)
            }
            Expr::Func(function, x) => write!(f, "{}({})", function.name(), x),
        }
    }
}

/// Euler's Γ function. Returns NaN at the poles (zero and negative integers).
pub fn gamma(x: f64) -> f64 {
    if x <= 0.0 && x.fract() == 0.0 {
        return f64::NAN;
    }
    statrs::function::gamma::gamma(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ALPHA, PHI, PI};

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn builds_and_evaluates_pi_phi_form() {
        let expr = Expr::pi() * Expr::phi().pow(Expr::num(-4.0) * Expr::pi());
        let value = expr.eval().unwrap();
        assert!((value - PI * PHI.powf(-4.0 * PI)).abs() < TOLERANCE);
        // π × φ^(-4π) is the "1.8% off" form
        let err = (value - ALPHA).abs() / ALPHA;
        assert!(err > 0.01 && err < 0.03, "error was {}", err);
    }

    #[test]
    fn display_uses_symbols_and_minimal_parentheses() {
        let expr = Expr::pi() * Expr::phi().pow(Expr::num(-4.0) * Expr::pi());
        assert_eq!(expr.to_string(), "π × φ^(-4 × π)");

        let expr = (Expr::num(1.0) - Expr::phi().pow(4).recip()) * Expr::e();
        assert_eq!(expr.to_string(), "(1 - 1 / φ^4) × e");

        let expr = -(Expr::phi().pow(Expr::pi()));
        assert_eq!(expr.to_string(), "-φ^π");
    }

    #[test]
    fn display_output_parses_back_to_same_value() {
        let expr = (Expr::e().pow(-Expr::pi()) * Expr::phi().pow(-Expr::pi())) / 2;
        let reparsed = Expr::parse(&expr.to_string()).unwrap();
        assert!((expr.eval().unwrap() - reparsed.eval().unwrap()).abs() < TOLERANCE);
    }

    #[test]
    fn fractional_power_of_negative_base_is_a_domain_error() {
        let expr = Expr::num(-8.0).pow(Expr::num(1.0) / 3);
        assert!(matches!(expr.eval(), Err(ShovelcatError::Domain { .. })));
        // integer powers of negative bases are fine
        assert_eq!(Expr::num(-2.0).pow(3).eval().unwrap(), -8.0);
    }

    #[test]
    fn ln_of_zero_and_division_by_zero_are_domain_errors() {
        assert!(Expr::num(0.0).ln().eval().is_err());
        assert!((Expr::num(1.0) / 0).eval().is_err());
    }

    #[test]
    fn constants_are_listed_in_first_appearance_order() {
        let expr = Expr::e() * Expr::phi().pow(Expr::pi() / Expr::e());
        assert_eq!(expr.constants(), vec![Constant::E, Constant::Phi, Constant::Pi]);
    }

    #[test]
    fn gamma_matches_known_values() {
        assert!((gamma(0.5) - PI.sqrt()).abs() < 1e-12);
        assert!((gamma(5.0) - 24.0).abs() < 1e-9);
        assert!((gamma(-0.5) + 2.0 * PI.sqrt()).abs() < 1e-10);
        assert!(gamma(0.0).is_nan());
        assert!(gamma(-3.0).is_nan());
    }
}
