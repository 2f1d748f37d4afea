//! The calls the exercise front end makes, bound to one set of limits.

use crate::config::EngineConfig;
use crate::elimination::{self, EliminationStrategy, SampleElimination, SampleSolution};
use crate::equalization::{self, Choice};
use crate::equation::{self, Equation, System};
use crate::error::{ArithmeticError, EliminationError, EqualizationError, SubstitutionError};
use crate::fraction::{Bounds, Fraction};
use crate::substitution::{self, SubstitutionRequest, SubstitutionResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Engine {
    bounds: Bounds,
}

impl Engine {
    pub fn new(bounds: Bounds) -> Self {
        Engine { bounds }
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Engine::new(config.bounds.clone())
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn eliminate(&self, system: &System, variable: &str) -> Result<EliminationStrategy, EliminationError> {
        elimination::eliminate(system, variable, &self.bounds)
    }

    pub fn apply_factor(&self, equation: &Equation, factor: &Fraction) -> Result<Equation, ArithmeticError> {
        equation::apply_factor(equation, factor, &self.bounds)
    }

    pub fn combine(&self, a: &Equation, b: &Equation, is_addition: bool) -> Result<Equation, ArithmeticError> {
        equation::sum_equations(a, b, is_addition, &self.bounds)
    }

    pub fn choose_sample_elimination(
        &self,
        system: &System,
        first: &str,
        second: &str,
    ) -> Result<SampleElimination, EliminationError> {
        elimination::choose_sample_elimination(system, first, second, &self.bounds)
    }

    pub fn sample_solution(
        &self,
        system: &System,
        first: &str,
        second: &str,
    ) -> Result<SampleSolution, EliminationError> {
        elimination::sample_solution(system, first, second, &self.bounds)
    }

    pub fn validate_substitution(
        &self,
        request: &SubstitutionRequest<'_>,
    ) -> Result<SubstitutionResult, SubstitutionError> {
        substitution::validate_substitution(request, &self.bounds)
    }

    pub fn validate_equalization(&self, left: &Choice, right: &Choice) -> Result<Equation, EqualizationError> {
        equalization::validate_equalization(left, right)
    }
}
