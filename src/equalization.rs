//! Setting two expressions, each solved for the same variable, equal.

use log::debug;

use crate::equation::{Equation, EquationId, Term};
use crate::error::EqualizationError;

/// An expression the student picked, and the equation it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub terms: Vec<Term>,
    pub source: EquationId,
}

impl Choice {
    pub fn new(terms: Vec<Term>, source: EquationId) -> Self {
        Choice { terms, source }
    }
}

pub fn validate_equalization(left: &Choice, right: &Choice) -> Result<Equation, EqualizationError> {
    if left.terms.is_empty() || right.terms.is_empty() {
        return Err(EqualizationError::EmptyExpression);
    }
    if left.source == right.source {
        debug!("Both expressions come from {:?}", left.source);
        return Err(EqualizationError::SameSource);
    }

    let left_single = left.terms.len() == 1;
    let right_single = right.terms.len() == 1;
    if left_single && right_single {
        debug!("Equalizing two single terms says nothing new");
        return Err(EqualizationError::SameSource);
    }

    let equation = Equation::from_sides(left.terms.clone(), right.terms.clone());
    if left_single != right_single && equation.variables().len() > 1 {
        debug!("{equation} still has two unknowns");
        return Err(EqualizationError::TwoVariable);
    }
    Ok(equation)
}
