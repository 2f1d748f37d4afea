use lineq::{Engine, EngineConfig, Equation, System, Term};

fn main() {
    let config = EngineConfig::from_env().unwrap_or_else(|e| panic!("Bad configuration: {e}"));
    let engine = Engine::with_config(&config);

    // 3x + 2y = 16, x + 4y = 22
    let system = System::new(
        Equation::new(vec![Term::var(3, "x"), Term::var(2, "y")], vec![Term::constant(16)]),
        Equation::new(vec![Term::var(1, "x"), Term::var(4, "y")], vec![Term::constant(22)]),
    );

    match engine.sample_solution(&system, "x", "y") {
        Ok(solution) => {
            let strategy = &solution.elimination.strategy;
            println!("{}", system.first());
            println!("{}", system.second());
            let factor = |f: &Option<lineq::Fraction>| match f {
                Some(f) => format!("x{f}"),
                None => "as is".to_string(),
            };
            println!(
                "eliminate {} ({:?}): first {}, second {}, then {}",
                strategy.variable,
                strategy.rule,
                factor(&strategy.first_factor),
                factor(&strategy.second_factor),
                if strategy.is_addition { "add" } else { "subtract" }
            );
            println!("{}", solution.scaled_first);
            println!("{}", solution.scaled_second);
            println!("{}", solution.combined);
            println!("{} = {}", solution.remaining.variable, solution.remaining.value);
            println!("{}", solution.back_substituted);
            println!("{} = {}", solution.eliminated.variable, solution.eliminated.value);
        }
        Err(err) => eprintln!("no sample solution: {err}"),
    }
}
