//! Terms, equations and systems, plus the term-wise operations used by every
//! solving method.

use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{ArithmeticError, EliminationError, Result};
use crate::fraction::{Bounds, Fraction};

/// A coefficient, optionally attached to a variable. No variable means a constant.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Term {
    pub coefficient: Fraction,
    pub variable: Option<String>,
}

impl Term {
    pub fn new(coefficient: Fraction, variable: Option<String>) -> Self {
        Term {
            coefficient,
            variable,
        }
    }

    pub fn constant(value: impl Into<Fraction>) -> Self {
        Term::new(value.into(), None)
    }

    pub fn var(coefficient: impl Into<Fraction>, name: impl Into<String>) -> Self {
        Term::new(coefficient.into(), Some(name.into()))
    }

    pub fn is_constant(&self) -> bool {
        self.variable.is_none()
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    pub fn variable(&self) -> Option<&str> {
        self.variable.as_deref()
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.variable() == Some(name)
    }

    pub fn negate(&self) -> Self {
        Term::new(self.coefficient.negate(), self.variable.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Identifies the original equation an expression was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EquationId(pub u32);

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Equation {
    left: Vec<Term>,
    right: Vec<Term>,
}

impl Equation {
    /// Build an equation, dropping zero terms. A side left empty keeps a
    /// single zero constant.
    pub fn new(left: Vec<Term>, right: Vec<Term>) -> Self {
        Equation {
            left: normalize_side(left),
            right: normalize_side(right),
        }
    }

    /// Build an equation exactly as given.
    pub fn from_sides(left: Vec<Term>, right: Vec<Term>) -> Self {
        Equation { left, right }
    }

    pub fn left(&self) -> &[Term] {
        &self.left
    }

    pub fn right(&self) -> &[Term] {
        &self.right
    }

    pub fn side(&self, side: Side) -> &[Term] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn into_sides(self) -> (Vec<Term>, Vec<Term>) {
        (self.left, self.right)
    }

    /// The first term in `name`, searching the left side before the right.
    pub fn find_variable(&self, name: &str) -> Option<(Side, usize, &Term)> {
        [Side::Left, Side::Right].into_iter().find_map(|side| {
            self.side(side)
                .iter()
                .enumerate()
                .find(|(_, term)| term.has_variable(name))
                .map(|(index, term)| (side, index, term))
        })
    }

    pub fn occurrences(&self, name: &str) -> usize {
        self.terms().filter(|term| term.has_variable(name)).count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.terms().any(|term| term.has_variable(name))
    }

    /// Distinct variables in order of first appearance.
    pub fn variables(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for name in self.terms().filter_map(Term::variable) {
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen
    }

    /// The variable isolated by `side`: a lone variable term that does not
    /// occur on the opposite side.
    pub fn isolated_variable(&self, side: Side) -> Option<&str> {
        match self.side(side) {
            [term] => {
                let name = term.variable()?;
                if term.is_zero() {
                    return None;
                }
                let elsewhere = self
                    .side(side.opposite())
                    .iter()
                    .any(|other| other.has_variable(name));
                (!elsewhere).then_some(name)
            }
            _ => None,
        }
    }

    pub fn is_isolated_in(&self, name: &str) -> bool {
        [Side::Left, Side::Right]
            .into_iter()
            .any(|side| self.isolated_variable(side) == Some(name))
    }

    /// Solve an equation whose only variable is `name`.
    pub fn solve_for(&self, name: &str, bounds: &Bounds) -> Result<Fraction, EliminationError> {
        let no_solution = || EliminationError::NoUniqueSolution {
            variable: name.to_string(),
        };
        if self.variables().iter().any(|v| *v != name) {
            return Err(no_solution());
        }

        // Move the variable to the left and the constants to the right.
        let mut coefficient = Fraction::zero();
        let mut constant = Fraction::zero();
        for term in &self.left {
            if term.is_constant() {
                constant = bounds.subtract(&constant, &term.coefficient)?;
            } else {
                coefficient = bounds.add(&coefficient, &term.coefficient)?;
            }
        }
        for term in &self.right {
            if term.is_constant() {
                constant = bounds.add(&constant, &term.coefficient)?;
            } else {
                coefficient = bounds.subtract(&coefficient, &term.coefficient)?;
            }
        }

        if coefficient.is_zero() {
            return Err(no_solution());
        }
        Ok(bounds.divide(&constant, &coefficient)?)
    }

    /// Replace every occurrence of `name` with `value` and collect like terms.
    pub fn substitute_value(&self, name: &str, value: &Fraction, bounds: &Bounds) -> Result<Equation> {
        let replace = |terms: &[Term]| -> Result<Vec<Term>> {
            let replaced = terms
                .iter()
                .map(|term| -> Result<Term> {
                    if term.has_variable(name) {
                        Ok(Term::constant(bounds.multiply(&term.coefficient, value)?))
                    } else {
                        Ok(term.clone())
                    }
                })
                .collect::<Result<Vec<_>>>()?;
            collect_like_terms(&replaced, bounds)
        };
        Ok(Equation::new(replace(&self.left)?, replace(&self.right)?))
    }

    /// Whether both sides agree once every variable is given a value.
    /// `None` when a variable has no assignment.
    pub fn is_satisfied_by(&self, assignments: &[(&str, Fraction)]) -> Option<bool> {
        let evaluate = |terms: &[Term]| -> Option<Fraction> {
            terms.iter().try_fold(Fraction::zero(), |acc, term| {
                let value = match term.variable() {
                    None => term.coefficient.clone(),
                    Some(name) => {
                        let (_, assigned) = assignments.iter().find(|(v, _)| *v == name)?;
                        term.coefficient.multiply(assigned)
                    }
                };
                Some(acc.add(&value))
            })
        };
        Some(evaluate(&self.left)? == evaluate(&self.right)?)
    }

    fn terms(&self) -> impl Iterator<Item = &Term> {
        self.left.iter().chain(self.right.iter())
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::equation(self))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::term(self))
    }
}

/// Two equations over two unknowns.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct System {
    first: Equation,
    second: Equation,
}

impl System {
    pub fn new(first: Equation, second: Equation) -> Self {
        System { first, second }
    }

    pub fn first(&self) -> &Equation {
        &self.first
    }

    pub fn second(&self) -> &Equation {
        &self.second
    }

    pub fn variables(&self) -> Vec<&str> {
        let mut names = self.first.variables();
        for name in self.second.variables() {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

pub fn scale_term(term: &Term, factor: &Fraction, bounds: &Bounds) -> Result<Term> {
    Ok(Term::new(
        bounds.multiply(&term.coefficient, factor)?,
        term.variable.clone(),
    ))
}

/// Scale every term. Callers skip a factor of exactly 1 rather than show "×1".
pub fn scale_terms(terms: &[Term], factor: &Fraction, bounds: &Bounds) -> Result<Vec<Term>> {
    terms
        .iter()
        .map(|term| scale_term(term, factor, bounds))
        .collect()
}

/// Multiply both sides of `equation` by `factor`.
pub fn apply_factor(equation: &Equation, factor: &Fraction, bounds: &Bounds) -> Result<Equation> {
    if factor.is_zero() {
        return Err(ArithmeticError::ZeroFactor);
    }
    if factor.is_one() {
        trace!("Factor 1 leaves {equation} unchanged");
        return Ok(equation.clone());
    }
    Ok(Equation::from_sides(
        scale_terms(&equation.left, factor, bounds)?,
        scale_terms(&equation.right, factor, bounds)?,
    ))
}

/// Add (or subtract) `b` from `a` side by side, matching terms by variable.
pub fn sum_equations(a: &Equation, b: &Equation, is_addition: bool, bounds: &Bounds) -> Result<Equation> {
    let left = merge_terms(&a.left, &b.left, is_addition, bounds)?;
    let right = merge_terms(&a.right, &b.right, is_addition, bounds)?;
    let summed = Equation::from_sides(left, right);
    trace!(
        "{a} {} {b} gives {summed}",
        if is_addition { "plus" } else { "minus" }
    );
    Ok(summed)
}

/// Fold terms sharing a variable (or both constant) into their first occurrence.
pub fn collect_like_terms(terms: &[Term], bounds: &Bounds) -> Result<Vec<Term>> {
    merge_terms(&[], terms, true, bounds)
}

fn merge_terms(base: &[Term], other: &[Term], is_addition: bool, bounds: &Bounds) -> Result<Vec<Term>> {
    let mut merged = base.to_vec();
    for term in other {
        let term = if is_addition { term.clone() } else { term.negate() };
        match merged.iter_mut().find(|existing| existing.variable == term.variable) {
            Some(existing) => {
                existing.coefficient = bounds.add(&existing.coefficient, &term.coefficient)?;
            }
            None => merged.push(term),
        }
    }
    Ok(normalize_side(merged))
}

fn normalize_side(mut terms: Vec<Term>) -> Vec<Term> {
    terms.retain(|term| !term.is_zero());
    if terms.is_empty() {
        terms.push(Term::constant(Fraction::zero()));
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_side_keeps_zero_constant() {
        let eq = Equation::new(vec![Term::var(0, "x")], vec![Term::constant(4)]);
        assert_eq!(eq.left(), &[Term::constant(0)]);
    }

    #[test]
    fn isolation_requires_absence_on_other_side() {
        let eq = Equation::new(
            vec![Term::var(1, "y")],
            vec![Term::var(2, "x"), Term::constant(1)],
        );
        assert_eq!(eq.isolated_variable(Side::Left), Some("y"));
        assert_eq!(eq.isolated_variable(Side::Right), None);

        let eq = Equation::new(vec![Term::var(1, "y")], vec![Term::var(2, "y")]);
        assert_eq!(eq.isolated_variable(Side::Left), None);
    }

    #[test]
    fn collect_like_terms_keeps_first_position() {
        let terms = vec![
            Term::var(2, "x"),
            Term::constant(3),
            Term::var(-2, "x"),
            Term::var(1, "y"),
            Term::constant(1),
        ];
        let collected = collect_like_terms(&terms, &Bounds::default()).unwrap();
        assert_eq!(collected, vec![Term::constant(4), Term::var(1, "y")]);
    }
}
