use thiserror::Error;

use crate::equation::Side;
use crate::fraction::Fraction;

pub type Result<T, E = ArithmeticError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("result {value} is outside the permitted range")]
    OperationOutOfRange { value: Fraction },
    #[error("an equation cannot be multiplied by zero")]
    ZeroFactor,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EliminationError {
    #[error("variable {variable} cannot be eliminated")]
    VariableNotEliminable { variable: String },
    #[error("no unique value for {variable}")]
    NoUniqueSolution { variable: String },
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubstitutionError {
    #[error("expected an occurrence of {expected}, found {}", .found.as_deref().unwrap_or("a constant"))]
    IncompatibleVariable {
        expected: String,
        found: Option<String>,
    },
    #[error("an equation cannot be substituted into itself")]
    SelfSubstitution,
    #[error("the source side does not isolate a variable")]
    NotIsolated,
    #[error("no term at index {index} on the {side} side")]
    NoSuchTerm { side: Side, index: usize },
    #[error("substitution out of range: {0}")]
    SubstitutionOutOfRange(#[from] ArithmeticError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EqualizationError {
    #[error("both expressions come from the same source")]
    SameSource,
    #[error("the equalized equation would still contain two variables")]
    TwoVariable,
    #[error("an equalized expression must contain at least one term")]
    EmptyExpression,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid bound {name}: {value:?}")]
    InvalidBound { name: &'static str, value: String },
    #[error("lower bound {lower} exceeds upper bound {upper}")]
    InvertedBounds { lower: Fraction, upper: Fraction },
}
