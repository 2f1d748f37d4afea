use lineq::{Engine, Equation, EquationId, Side, SubstitutionRequest, Term};

fn main() {
    // y = 2x + 1
    let source = Equation::new(
        vec![Term::var(1, "y")],
        vec![Term::var(2, "x"), Term::constant(1)],
    );
    // 2y - x = 4
    let target = Equation::new(
        vec![Term::var(2, "y"), Term::var(-1, "x")],
        vec![Term::constant(4)],
    );

    let request = SubstitutionRequest {
        source: &source,
        source_id: EquationId(0),
        source_side: Side::Left,
        source_index: 0,
        target: &target,
        target_id: EquationId(1),
        target_side: Side::Left,
        target_index: 0,
    };

    match Engine::default().validate_substitution(&request) {
        Ok(result) => {
            println!("{source}");
            println!("{target}");
            println!("{}", result.grouped);
            println!("{}", result.simplified);
        }
        Err(err) => eprintln!("cannot substitute: {err}"),
    }
}
