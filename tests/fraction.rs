use lineq::{ArithmeticError, Bounds, Fraction, Sign};

fn frac(n: i64, d: i64) -> Fraction {
    Fraction::new(n, d).expect("non-zero denominator")
}

#[test]
fn arithmetic_is_exact() {
    let bounds = Bounds::default();
    let cases = vec![
        ("+", frac(1, 2), frac(1, 3), frac(5, 6)),
        ("-", frac(2, 3), frac(3, 4), frac(-1, 12)),
        ("*", frac(-2, 3), frac(9, 4), frac(-3, 2)),
        ("/", frac(3, 4), frac(-9, 8), frac(-2, 3)),
        ("+", frac(1, 10), frac(2, 10), frac(3, 10)),
        ("-", frac(7, 6), frac(1, 6), frac(1, 1)),
    ];

    for (op, a, b, expected) in cases {
        let got = match op {
            "+" => bounds.add(&a, &b),
            "-" => bounds.subtract(&a, &b),
            "*" => bounds.multiply(&a, &b),
            "/" => bounds.divide(&a, &b),
            _ => unreachable!(),
        }
        .expect("in range");
        assert_eq!(got, expected, "{a} {op} {b}");
    }
}

#[test]
fn results_are_reduced() {
    let value = frac(6, 8);
    assert_eq!(value, frac(3, 4));
    assert_eq!(value.to_string(), "3/4");
    assert_eq!(frac(10, -5).to_string(), "-2");
}

#[test]
fn division_by_zero_is_reported() {
    let bounds = Bounds::default();
    assert_eq!(Fraction::new(1, 0), Err(ArithmeticError::DivisionByZero));
    assert_eq!(
        bounds.divide(&frac(1, 2), &Fraction::zero()),
        Err(ArithmeticError::DivisionByZero)
    );
    assert_eq!(
        bounds.modulo(&frac(1, 2), &Fraction::zero()),
        Err(ArithmeticError::DivisionByZero)
    );
    assert_eq!(
        bounds.reciprocal(&Fraction::zero()),
        Err(ArithmeticError::DivisionByZero)
    );
}

#[test]
fn results_outside_bounds_are_rejected() {
    let bounds = Bounds::default();
    let big = Fraction::integer(100_000);
    assert_eq!(bounds.multiply(&big, &Fraction::one()), Ok(big.clone()));
    assert_eq!(
        bounds.add(&big, &Fraction::one()),
        Err(ArithmeticError::OperationOutOfRange {
            value: Fraction::integer(100_001)
        })
    );

    let tiny = frac(1, 100_000);
    assert!(matches!(
        bounds.divide(&tiny, &Fraction::integer(10)),
        Err(ArithmeticError::OperationOutOfRange { .. })
    ));
    assert_eq!(bounds.subtract(&tiny, &tiny), Ok(Fraction::zero()));
}

#[test]
fn custom_bounds_must_be_ordered_and_positive() {
    assert!(Bounds::new(frac(1, 10), Fraction::integer(10)).is_ok());
    assert!(Bounds::new(Fraction::zero(), Fraction::integer(10)).is_err());
    assert!(Bounds::new(Fraction::integer(10), Fraction::integer(1)).is_err());
    assert!(Bounds::new(frac(1, 10), frac(-1, 1)).is_err());
}

#[test]
fn sign_abs_and_ordering() {
    assert_eq!(frac(-3, 4).sign(), Sign::Minus);
    assert_eq!(Fraction::zero().sign(), Sign::Plus);
    assert_eq!(frac(-3, 4).abs(), frac(3, 4));
    assert_eq!(frac(-3, 4).negate(), frac(3, 4));
    assert_eq!(frac(-2, 3).reciprocal(), Ok(frac(-3, 2)));

    let mut values = vec![frac(1, 2), frac(-5, 3), frac(1, 3), Fraction::zero()];
    values.sort();
    assert_eq!(values, vec![frac(-5, 3), Fraction::zero(), frac(1, 3), frac(1, 2)]);
    assert_eq!(frac(2, 4).compare(&frac(1, 2)), std::cmp::Ordering::Equal);
}

#[test]
fn modulo_detects_whole_multiples() {
    let bounds = Bounds::default();
    assert!(bounds.modulo(&frac(4, 1), &frac(2, 1)).unwrap().is_zero());
    assert!(bounds.modulo(&frac(3, 2), &frac(1, 2)).unwrap().is_zero());
    assert_eq!(bounds.modulo(&frac(3, 1), &frac(2, 3)), Ok(frac(1, 3)));
}

#[test]
fn parses_integers_and_fractions() {
    assert_eq!("250".parse::<Fraction>().unwrap(), Fraction::integer(250));
    assert_eq!("-3/6".parse::<Fraction>().unwrap(), frac(-1, 2));
    assert!("1/0".parse::<Fraction>().is_err());
    assert!("x".parse::<Fraction>().is_err());
}

#[test]
fn bounds_survive_serialization() {
    let bounds = Bounds::new(frac(1, 1000), Fraction::integer(500)).unwrap();
    let json = serde_json::to_string(&bounds).expect("serialize");
    let back: Bounds = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, bounds);
}
