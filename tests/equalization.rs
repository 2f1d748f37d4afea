use lineq::{Choice, Engine, EqualizationError, Equation, EquationId, Term};
use pretty_assertions::assert_eq;

fn x(c: i64) -> Term {
    Term::var(c, "x")
}

fn k(c: i64) -> Term {
    Term::constant(c)
}

fn from(id: u32, terms: Vec<Term>) -> Choice {
    Choice::new(terms, EquationId(id))
}

#[test]
fn equates_expressions_from_different_equations() {
    // y = 2x + 1 and y = -x + 7
    let left = from(0, vec![x(2), k(1)]);
    let right = from(1, vec![x(-1), k(7)]);

    let equation = Engine::default().validate_equalization(&left, &right).unwrap();
    assert_eq!(
        equation,
        Equation::from_sides(vec![x(2), k(1)], vec![x(-1), k(7)])
    );
    assert_eq!(equation.to_string(), "2x + 1 = -x + 7");
}

#[test]
fn sides_are_kept_literally() {
    // x + x + 3 is not collected
    let left = from(0, vec![x(1), x(1), k(3)]);
    let right = from(1, vec![k(9), k(0)]);

    let equation = Engine::default().validate_equalization(&left, &right).unwrap();
    assert_eq!(equation.left(), &[x(1), x(1), k(3)]);
    assert_eq!(equation.right(), &[k(9), k(0)]);
}

#[test]
fn single_constant_may_meet_an_expression() {
    let left = from(0, vec![k(5)]);
    let right = from(1, vec![x(3), k(-1)]);

    let equation = Engine::default().validate_equalization(&left, &right).unwrap();
    assert_eq!(equation.to_string(), "5 = 3x - 1");
}

#[test]
fn same_source_is_rejected() {
    let engine = Engine::default();

    let left = from(2, vec![x(2), k(1)]);
    let right = from(2, vec![x(-1), k(7)]);
    assert_eq!(
        engine.validate_equalization(&left, &right),
        Err(EqualizationError::SameSource)
    );

    // two bare terms say nothing new
    let left = from(0, vec![Term::var(1, "y")]);
    let right = from(1, vec![Term::var(1, "y")]);
    assert_eq!(
        engine.validate_equalization(&left, &right),
        Err(EqualizationError::SameSource)
    );

    let left = from(0, vec![k(4)]);
    let right = from(1, vec![k(4)]);
    assert_eq!(
        engine.validate_equalization(&left, &right),
        Err(EqualizationError::SameSource)
    );
}

#[test]
fn lone_variable_against_expression_keeps_two_unknowns() {
    let engine = Engine::default();
    let lone = from(0, vec![Term::var(1, "y")]);
    let expression = from(1, vec![x(-1), k(4)]);

    assert_eq!(
        engine.validate_equalization(&lone, &expression),
        Err(EqualizationError::TwoVariable)
    );
    assert_eq!(
        engine.validate_equalization(&expression, &lone),
        Err(EqualizationError::TwoVariable)
    );
}

#[test]
fn lone_constant_against_two_unknowns_is_rejected() {
    // 5 = 2x + y
    let engine = Engine::default();
    let lone = from(0, vec![k(5)]);
    let expression = from(1, vec![x(2), Term::var(1, "y")]);

    assert_eq!(
        engine.validate_equalization(&lone, &expression),
        Err(EqualizationError::TwoVariable)
    );
    assert_eq!(
        engine.validate_equalization(&expression, &lone),
        Err(EqualizationError::TwoVariable)
    );
}

#[test]
fn empty_choice_is_rejected() {
    let left = from(0, vec![]);
    let right = from(1, vec![x(1), k(2)]);
    assert_eq!(
        Engine::default().validate_equalization(&left, &right),
        Err(EqualizationError::EmptyExpression)
    );
}
