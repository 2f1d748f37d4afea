//! Deciding how two equations combine to cancel a variable.

mod sample;

pub use sample::{sample_solution, Assignment, SampleSolution};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::equation::{apply_factor, sum_equations, Equation, System};
use crate::error::{ArithmeticError, EliminationError};
use crate::fraction::{Bounds, Fraction};

/// Which rule produced the multiplication factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactorRule {
    /// The coefficients already have the same magnitude.
    Equal,
    /// One coefficient has magnitude 1.
    UnitCoefficient,
    /// One magnitude is a whole multiple of the other.
    Multiple,
    /// Both coefficients are whole numbers.
    LeastCommonMultiple,
    /// Each equation is multiplied by the other's magnitude.
    CrossMultiplication,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationStrategy {
    pub variable: String,
    pub first_factor: Option<Fraction>,
    pub second_factor: Option<Fraction>,
    /// Add the equations when `true`, subtract the second from the first otherwise.
    pub is_addition: bool,
    pub rule: FactorRule,
}

/// The equations after scaling, and their sum or difference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eliminated {
    pub first: Equation,
    pub second: Equation,
    pub combined: Equation,
}

impl EliminationStrategy {
    pub fn factor_count(&self) -> usize {
        self.first_factor.iter().count() + self.second_factor.iter().count()
    }

    pub fn apply(&self, system: &System, bounds: &Bounds) -> Result<Eliminated, ArithmeticError> {
        let scale = |equation: &Equation, factor: &Option<Fraction>| match factor {
            Some(factor) => apply_factor(equation, factor, bounds),
            None => Ok(equation.clone()),
        };
        let first = scale(system.first(), &self.first_factor)?;
        let second = scale(system.second(), &self.second_factor)?;
        let combined = sum_equations(&first, &second, self.is_addition, bounds)?;
        Ok(Eliminated {
            first,
            second,
            combined,
        })
    }

    fn single_factor(&self) -> Option<&Fraction> {
        match (&self.first_factor, &self.second_factor) {
            (Some(factor), None) | (None, Some(factor)) => Some(factor),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableChoice {
    First,
    Second,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleElimination {
    pub strategy: EliminationStrategy,
    pub choice: VariableChoice,
}

/// Work out how `variable` can be cancelled by adding or subtracting the two
/// equations of `system`, scaling them first if needed.
pub fn eliminate(
    system: &System,
    variable: &str,
    bounds: &Bounds,
) -> Result<EliminationStrategy, EliminationError> {
    let not_eliminable = || EliminationError::VariableNotEliminable {
        variable: variable.to_string(),
    };

    let (first_side, _, first_term) = system
        .first()
        .find_variable(variable)
        .ok_or_else(not_eliminable)?;
    let (second_side, _, second_term) = system
        .second()
        .find_variable(variable)
        .ok_or_else(not_eliminable)?;

    // Term-wise combination only cancels a single occurrence on matching sides.
    if first_side != second_side
        || system.first().occurrences(variable) != 1
        || system.second().occurrences(variable) != 1
    {
        debug!("{variable} is not aligned across {} and {}", system.first(), system.second());
        return Err(not_eliminable());
    }

    let c1 = &first_term.coefficient;
    let c2 = &second_term.coefficient;
    if c1.is_zero() || c2.is_zero() {
        return Err(not_eliminable());
    }

    let is_addition = c1.sign() != c2.sign();
    let (rule, first_factor, second_factor) = factors(&c1.abs(), &c2.abs(), bounds)?;
    debug!(
        "Eliminating {variable} from {c1} and {c2}: {rule:?}, factors {:?}/{:?}, {}",
        first_factor.as_ref().map(ToString::to_string),
        second_factor.as_ref().map(ToString::to_string),
        if is_addition { "add" } else { "subtract" }
    );

    Ok(EliminationStrategy {
        variable: variable.to_string(),
        first_factor,
        second_factor,
        is_addition,
        rule,
    })
}

type Factors = (FactorRule, Option<Fraction>, Option<Fraction>);

/// Pick factors for two positive magnitudes; the first matching rule wins.
fn factors(m1: &Fraction, m2: &Fraction, bounds: &Bounds) -> Result<Factors, ArithmeticError> {
    if m1 == m2 {
        return Ok((FactorRule::Equal, None, None));
    }

    if m1.is_one() {
        return Ok((FactorRule::UnitCoefficient, Some(bounds.check(m2.clone())?), None));
    }
    if m2.is_one() {
        return Ok((FactorRule::UnitCoefficient, None, Some(bounds.check(m1.clone())?)));
    }

    let (small, large, small_is_first) = if m1 < m2 {
        (m1, m2, true)
    } else {
        (m2, m1, false)
    };
    if large.modulo(small)?.is_zero() {
        let quotient = bounds.divide(large, small)?;
        return Ok(if small_is_first {
            (FactorRule::Multiple, Some(quotient), None)
        } else {
            (FactorRule::Multiple, None, Some(quotient))
        });
    }

    if m1.is_integer() && m2.is_integer() {
        use num_integer::Integer;

        let lcm = bounds.check(Fraction::integer(m1.numer().lcm(m2.numer())))?;
        return Ok((
            FactorRule::LeastCommonMultiple,
            Some(bounds.divide(&lcm, m1)?),
            Some(bounds.divide(&lcm, m2)?),
        ));
    }

    Ok((
        FactorRule::CrossMultiplication,
        Some(bounds.check(m2.clone())?),
        Some(bounds.check(m1.clone())?),
    ))
}

/// Choose which of the system's two variables a worked example should
/// eliminate. Fewer factors win, then smaller factors; ties and incomparable
/// pairs go to `first`.
pub fn choose_sample_elimination(
    system: &System,
    first: &str,
    second: &str,
    bounds: &Bounds,
) -> Result<SampleElimination, EliminationError> {
    let (strategy, choice) = match (
        eliminate(system, first, bounds),
        eliminate(system, second, bounds),
    ) {
        (Ok(a), Ok(b)) => match prefer(&a, &b) {
            VariableChoice::First => (a, VariableChoice::First),
            VariableChoice::Second => (b, VariableChoice::Second),
        },
        (Ok(a), Err(err)) => {
            debug!("Only {first} is eliminable: {err}");
            (a, VariableChoice::First)
        }
        (Err(err), Ok(b)) => {
            debug!("Only {second} is eliminable: {err}");
            (b, VariableChoice::Second)
        }
        (Err(err), Err(_)) => return Err(err),
    };
    debug!("Sample solution eliminates {}", strategy.variable);
    Ok(SampleElimination { strategy, choice })
}

fn prefer(a: &EliminationStrategy, b: &EliminationStrategy) -> VariableChoice {
    let (count_a, count_b) = (a.factor_count(), b.factor_count());
    if count_a != count_b {
        return if count_a < count_b {
            VariableChoice::First
        } else {
            VariableChoice::Second
        };
    }

    match (count_a, a.single_factor(), b.single_factor()) {
        (1, Some(fa), Some(fb)) if fb < fa => VariableChoice::Second,
        (2, _, _) => match (&a.first_factor, &a.second_factor, &b.first_factor, &b.second_factor) {
            (Some(a1), Some(a2), Some(b1), Some(b2)) if b1 < a1 && b2 < a2 => {
                VariableChoice::Second
            }
            _ => VariableChoice::First,
        },
        _ => VariableChoice::First,
    }
}
