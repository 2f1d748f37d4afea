//! Replacing a variable occurrence with the expression another equation
//! isolates for it.

use std::fmt;

use log::debug;

use crate::equation::{collect_like_terms, scale_terms, Equation, EquationId, Side, Term};
use crate::error::SubstitutionError;
use crate::fraction::{Bounds, Fraction};

type Result<T> = std::result::Result<T, SubstitutionError>;

/// One summand of a side before simplification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Term(Term),
    /// `factor(terms)`, the substituted expression still in parentheses.
    Group { factor: Fraction, terms: Vec<Term> },
}

/// A target equation with the substituted expression kept as a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedEquation {
    left: Vec<Element>,
    right: Vec<Element>,
}

impl GroupedEquation {
    pub fn left(&self) -> &[Element] {
        &self.left
    }

    pub fn right(&self) -> &[Element] {
        &self.right
    }

    pub fn side(&self, side: Side) -> &[Element] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

impl fmt::Display for GroupedEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::grouped(self))
    }
}

/// A user's attempt to drop the isolated side of `source` onto a variable
/// occurrence in `target`.
#[derive(Debug, Clone, Copy)]
pub struct SubstitutionRequest<'a> {
    pub source: &'a Equation,
    pub source_id: EquationId,
    /// The side holding the isolated variable.
    pub source_side: Side,
    pub source_index: usize,
    pub target: &'a Equation,
    pub target_id: EquationId,
    pub target_side: Side,
    pub target_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionResult {
    /// The variable being replaced.
    pub variable: String,
    /// The expression that takes the variable's place.
    pub substituted_terms: Vec<Term>,
    pub source_side: Side,
    pub source_index: usize,
    /// A dot or parentheses are needed to show the replacement unambiguously.
    pub requires_parenthesization: bool,
    /// Some substituted coefficient is not a whole number.
    pub requires_fractions: bool,
    pub grouped: GroupedEquation,
    pub simplified: Equation,
}

pub fn validate_substitution(
    request: &SubstitutionRequest<'_>,
    bounds: &Bounds,
) -> Result<SubstitutionResult> {
    if request.source_id == request.target_id {
        debug!("Rejected substitution of {:?} into itself", request.source_id);
        return Err(SubstitutionError::SelfSubstitution);
    }

    let isolated_term = term_at(request.source, request.source_side, request.source_index)?;
    let variable = request
        .source
        .isolated_variable(request.source_side)
        .ok_or_else(|| {
            debug!(
                "{} side of {} does not isolate a variable",
                request.source_side, request.source
            );
            SubstitutionError::NotIsolated
        })?;

    let target_term = term_at(request.target, request.target_side, request.target_index)?;
    if target_term.variable() != Some(variable) {
        debug!("Cannot drop {variable} onto {target_term}");
        return Err(SubstitutionError::IncompatibleVariable {
            expected: variable.to_string(),
            found: target_term.variable.clone(),
        });
    }

    let substituted_terms = isolate(
        request.source.side(request.source_side.opposite()),
        &isolated_term.coefficient,
        bounds,
    )?;
    let target_side = request.target.side(request.target_side);
    let requires_parenthesization = match substituted_terms.as_slice() {
        [single] => {
            !single.coefficient.is_one()
                || crate::format::needs_dot(&target_term.coefficient, single)
                || (target_side.len() == 1 && !target_term.coefficient.is_one())
        }
        _ => true,
    };
    let requires_fractions = substituted_terms
        .iter()
        .any(|term| !term.coefficient.is_integer());

    let grouped = group(request, &target_term.coefficient, &substituted_terms);
    let simplified = simplify(request, &target_term.coefficient, &substituted_terms, bounds)?;
    debug!(
        "Substituted {variable} = {} into {}: {grouped} then {simplified}",
        crate::format::side(&substituted_terms),
        request.target
    );

    Ok(SubstitutionResult {
        variable: variable.to_string(),
        substituted_terms,
        source_side: request.source_side,
        source_index: request.source_index,
        requires_parenthesization,
        requires_fractions,
        grouped,
        simplified,
    })
}

fn term_at(equation: &Equation, side: Side, index: usize) -> Result<&Term> {
    equation
        .side(side)
        .get(index)
        .ok_or(SubstitutionError::NoSuchTerm { side, index })
}

/// Divide the opposite side by the isolated coefficient, so a `-y` flips
/// every sign and a `2y` halves every term.
fn isolate(expression: &[Term], coefficient: &Fraction, bounds: &Bounds) -> Result<Vec<Term>> {
    if coefficient.is_one() {
        return Ok(expression.to_vec());
    }
    expression
        .iter()
        .map(|term| -> Result<Term> {
            Ok(Term::new(
                bounds.divide(&term.coefficient, coefficient)?,
                term.variable.clone(),
            ))
        })
        .collect()
}

fn group(request: &SubstitutionRequest<'_>, factor: &Fraction, terms: &[Term]) -> GroupedEquation {
    let elements = |side: Side| -> Vec<Element> {
        request
            .target
            .side(side)
            .iter()
            .enumerate()
            .map(|(index, term)| {
                if side == request.target_side && index == request.target_index {
                    Element::Group {
                        factor: factor.clone(),
                        terms: terms.to_vec(),
                    }
                } else {
                    Element::Term(term.clone())
                }
            })
            .collect()
    };
    GroupedEquation {
        left: elements(Side::Left),
        right: elements(Side::Right),
    }
}

fn simplify(
    request: &SubstitutionRequest<'_>,
    factor: &Fraction,
    terms: &[Term],
    bounds: &Bounds,
) -> Result<Equation> {
    let expanded = scale_terms(terms, factor, bounds)?;
    let splice = |side: Side| -> Result<Vec<Term>> {
        let original = request.target.side(side);
        if side != request.target_side {
            return Ok(original.to_vec());
        }
        let mut spliced = Vec::with_capacity(original.len() + expanded.len());
        spliced.extend_from_slice(&original[..request.target_index]);
        spliced.extend(expanded.iter().cloned());
        spliced.extend_from_slice(&original[request.target_index + 1..]);
        Ok(collect_like_terms(&spliced, bounds)?)
    };
    Ok(Equation::new(splice(Side::Left)?, splice(Side::Right)?))
}
