//! Exact-rational engine for solving 2x2 linear systems the way students are
//! taught to: by elimination, substitution, and equalization.

pub mod config;
pub mod elimination;
pub mod engine;
pub mod equalization;
pub mod equation;
pub mod error;
pub mod format;
pub mod fraction;
pub mod substitution;

pub use config::EngineConfig;
pub use elimination::{
    choose_sample_elimination, eliminate, sample_solution, Assignment, Eliminated,
    EliminationStrategy, FactorRule, SampleElimination, SampleSolution, VariableChoice,
};
pub use engine::Engine;
pub use equalization::{validate_equalization, Choice};
pub use equation::{
    apply_factor, collect_like_terms, scale_term, scale_terms, sum_equations, Equation,
    EquationId, Side, System, Term,
};
pub use error::{
    ArithmeticError, ConfigError, EliminationError, EqualizationError, SubstitutionError,
};
pub use fraction::{Bounds, Fraction, Sign};
pub use substitution::{
    validate_substitution, Element, GroupedEquation, SubstitutionRequest, SubstitutionResult,
};
