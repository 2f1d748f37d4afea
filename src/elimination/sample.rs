use log::debug;

use super::{choose_sample_elimination, SampleElimination, VariableChoice};
use crate::equation::{Equation, System};
use crate::error::EliminationError;
use crate::fraction::{Bounds, Fraction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub variable: String,
    pub value: Fraction,
}

/// A fully worked elimination, as shown to a student who asks for the
/// solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSolution {
    pub elimination: SampleElimination,
    pub scaled_first: Equation,
    pub scaled_second: Equation,
    pub combined: Equation,
    /// The variable left in `combined`, solved.
    pub remaining: Assignment,
    /// The first equation after plugging `remaining` back in.
    pub back_substituted: Equation,
    pub eliminated: Assignment,
}

pub fn sample_solution(
    system: &System,
    first: &str,
    second: &str,
    bounds: &Bounds,
) -> Result<SampleSolution, EliminationError> {
    let elimination = choose_sample_elimination(system, first, second, bounds)?;
    let (eliminated_var, remaining_var) = match elimination.choice {
        VariableChoice::First => (first, second),
        VariableChoice::Second => (second, first),
    };

    let steps = elimination.strategy.apply(system, bounds)?;
    let remaining_value = steps.combined.solve_for(remaining_var, bounds)?;
    let back_substituted = system
        .first()
        .substitute_value(remaining_var, &remaining_value, bounds)?;
    let eliminated_value = back_substituted.solve_for(eliminated_var, bounds)?;
    debug!(
        "Sample solution: {remaining_var} = {remaining_value}, {eliminated_var} = {eliminated_value}"
    );

    Ok(SampleSolution {
        elimination,
        scaled_first: steps.first,
        scaled_second: steps.second,
        combined: steps.combined,
        remaining: Assignment {
            variable: remaining_var.to_string(),
            value: remaining_value,
        },
        back_substituted,
        eliminated: Assignment {
            variable: eliminated_var.to_string(),
            value: eliminated_value,
        },
    })
}
