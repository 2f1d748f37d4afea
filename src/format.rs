//! Textual rendering of fractions, terms and equations.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};

use crate::equation::{Equation, Term};
use crate::fraction::Fraction;
use crate::substitution::{Element, GroupedEquation};

pub fn fraction(value: &Fraction) -> String {
    if value.is_integer() {
        format!("{}", value.numer())
    } else {
        format!("{}/{}", value.numer(), value.denom())
    }
}

/// Render `value` as a terminating decimal, if it has one.
pub fn decimal(value: &Fraction) -> Option<String> {
    let mut denom = value.denom().clone();
    let two = BigInt::from(2);
    let five = BigInt::from(5);
    let (mut twos, mut fives) = (0usize, 0usize);
    while denom.is_multiple_of(&two) {
        denom /= &two;
        twos += 1;
    }
    while denom.is_multiple_of(&five) {
        denom /= &five;
        fives += 1;
    }
    if !denom.is_one() {
        return None;
    }

    let places = twos.max(fives);
    let scale = num_traits::pow(BigInt::from(10), places);
    let scaled = value.numer().abs() * &scale / value.denom();
    let (whole, rest) = scaled.div_rem(&scale);
    let sign = if value.is_negative() { "-" } else { "" };
    if places == 0 {
        return Some(format!("{sign}{whole}"));
    }
    Some(format!(
        "{sign}{whole}.{:0>width$}",
        rest.to_string(),
        width = places
    ))
}

pub fn term(term: &Term) -> String {
    magnitude_term(&term.coefficient, term.variable(), true)
}

pub fn side(terms: &[Term]) -> String {
    let mut out = String::new();
    for (i, t) in terms.iter().enumerate() {
        push_signed(&mut out, i == 0, t.coefficient.is_negative(), || {
            magnitude_term(&t.coefficient.abs(), t.variable(), false)
        });
    }
    out
}

pub fn equation(eq: &Equation) -> String {
    format!("{} = {}", side(eq.left()), side(eq.right()))
}

pub fn grouped(eq: &GroupedEquation) -> String {
    format!(
        "{} = {}",
        element_side(eq.left()),
        element_side(eq.right())
    )
}

fn element_side(elements: &[Element]) -> String {
    let mut out = String::new();
    for (i, element) in elements.iter().enumerate() {
        match element {
            Element::Term(t) => push_signed(&mut out, i == 0, t.coefficient.is_negative(), || {
                magnitude_term(&t.coefficient.abs(), t.variable(), false)
            }),
            Element::Group { factor, terms } => {
                push_signed(&mut out, i == 0, factor.is_negative(), || {
                    group(&factor.abs(), terms)
                })
            }
        }
    }
    out
}

fn group(factor: &Fraction, terms: &[Term]) -> String {
    let prefix = if factor.is_one() {
        String::new()
    } else {
        fraction(factor)
    };
    match terms {
        [single] if !single.coefficient.is_negative() => {
            if factor.is_one() {
                return term(single);
            }
            if needs_dot(factor, single) {
                format!("{prefix}·{}", term(single))
            } else {
                format!("{prefix}{}", term(single))
            }
        }
        _ => format!("{prefix}({})", side(terms)),
    }
}

/// Writing `factor` directly in front of `single` would run two numbers
/// together, as in `2·3` or `2·1`.
pub(crate) fn needs_dot(factor: &Fraction, single: &Term) -> bool {
    !factor.is_one() && !(single.coefficient.is_one() && single.variable.is_some())
}

fn push_signed<F>(out: &mut String, first: bool, negative: bool, body: F)
where
    F: FnOnce() -> String,
{
    match (first, negative) {
        (true, false) => {}
        (true, true) => out.push('-'),
        (false, false) => out.push_str(" + "),
        (false, true) => out.push_str(" - "),
    }
    out.push_str(&body());
}

fn magnitude_term(coefficient: &Fraction, variable: Option<&str>, signed: bool) -> String {
    match variable {
        None => fraction(coefficient),
        Some(name) => {
            if coefficient.is_one() {
                name.to_string()
            } else if signed && coefficient.negate().is_one() {
                format!("-{name}")
            } else if coefficient.is_zero() {
                format!("0{name}")
            } else if !coefficient.is_integer() {
                // 1/2y would read as 1/(2y)
                format!("{}·{name}", fraction(coefficient))
            } else {
                format!("{}{name}", fraction(coefficient))
            }
        }
    }
}
