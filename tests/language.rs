use mathex::{
    error::{Error, EvalError, ParseError},
    evaluate_expression,
    interpreter::value::Number,
};

fn assert_int(src: &str, expected: i64) {
    match evaluate_expression(src) {
        Ok(Number::Integer(n)) => assert_eq!(n, expected, "wrong value for {src:?}"),
        Ok(other) => panic!("{src:?} produced {other:?}, expected Integer({expected})"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_real(src: &str, expected: f64) {
    match evaluate_expression(src) {
        Ok(Number::Real(r)) => {
            assert!((r - expected).abs() < 1e-9,
                    "{src:?} produced {r}, expected {expected}");
        },
        Ok(other) => panic!("{src:?} produced {other:?}, expected Real({expected})"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_nan(src: &str) {
    match evaluate_expression(src) {
        Ok(Number::Real(r)) => assert!(r.is_nan(), "{src:?} produced {r}, expected NaN"),
        Ok(other) => panic!("{src:?} produced {other:?}, expected NaN"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn parse_err(src: &str) -> ParseError {
    match evaluate_expression(src) {
        Err(Error::Parse(e)) => e,
        Err(Error::Eval(e)) => panic!("{src:?} raised an evaluation error instead: {e}"),
        Ok(v) => panic!("{src:?} succeeded with {v:?} but was expected to fail"),
    }
}

fn eval_err(src: &str) -> EvalError {
    match evaluate_expression(src) {
        Err(Error::Eval(e)) => e,
        Err(Error::Parse(e)) => panic!("{src:?} raised a parse error instead: {e}"),
        Ok(v) => panic!("{src:?} succeeded with {v:?} but was expected to fail"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_int("1 + 2", 3);
    assert_int("8 - 5", 3);
    assert_int("7 * 9", 63);
    assert_int("2 + 3 * (4 - 1)", 11);
    assert_real("1.5 + 2", 3.5);
    assert_real("0.1 + 0.2", 0.3);
}

#[test]
fn division_is_always_real() {
    assert_real("7 / 2", 3.5);
    assert_real("10 / 2", 5.0);
    assert_real("1 / 3", 1.0 / 3.0);
}

#[test]
fn floor_division_and_modulo() {
    assert_int("7 // 2", 3);
    assert_int("-7 // 2", -4);
    assert_int("7 // -2", -4);
    assert_int("-7 // -2", 3);
    assert_int("7 % 2", 1);
    assert_int("-5 % 3", 1);
    assert_int("5 % -3", -1);
    assert_real("7.0 // 2", 3.0);
    assert_real("7.5 % 2", 1.5);
    assert_real("-7.5 % 2", 0.5);
}

#[test]
fn exponentiation() {
    assert_int("2 ** 10", 1024);
    // Right-associative: 2 ** (3 ** 2).
    assert_int("2 ** 3 ** 2", 512);
    assert_real("2 ** -1", 0.5);
    assert_real("4 ** 0.5", 2.0);
    assert_real("2.0 ** 3", 8.0);
}

#[test]
fn unary_minus_binds_looser_than_pow() {
    assert_int("-2 ** 2", -4);
    assert_int("(-2) ** 2", 4);
    assert_int("--5", 5);
    assert_int("-fact(3)", -6);
}

#[test]
fn comparisons_produce_integers() {
    assert_int("3 > 2", 1);
    assert_int("2 > 3", 0);
    assert_int("2 <= 2", 1);
    assert_int("3 >= 4", 0);
    assert_int("2 != 3", 1);
    assert_int("2 == 2", 1);
    assert_int("3 == 3.0", 1);
    assert_int("1 + 2 == 3", 1);
    assert_int("NAN == NAN", 0);
    assert_int("NAN != NAN", 1);
}

#[test]
fn constants() {
    assert_real("PI", std::f64::consts::PI);
    assert_real("TAU", std::f64::consts::TAU);
    assert_real("E ** 0", 1.0);
    assert_real("PI / PI", 1.0);
    assert_nan("NAN");
    assert!(matches!(evaluate_expression("INF"),
                     Ok(Number::Real(r)) if r.is_infinite()));
}

#[test]
fn trigonometry_and_roots() {
    assert_real("sin(0)", 0.0);
    assert_real("cos(0)", 1.0);
    assert_real("tan(0)", 0.0);
    assert_real("sin(PI / 2)", 1.0);
    assert_real("sqrt(9)", 3.0);
    assert_real("hypot(3, 4)", 5.0);
    assert_real("hypot(5)", 5.0);
}

#[test]
fn absolute_value_preserves_kind() {
    assert_int("abs(-5)", 5);
    assert_int("abs(5)", 5);
    assert_real("abs(-5.5)", 5.5);
}

#[test]
fn factorial() {
    assert_int("fact(0)", 1);
    assert_int("fact(5)", 120);
    assert_int("factorial(5)", 120);
    assert_int("fact(5.0)", 120);
    assert_int("fact(20)", 2_432_902_008_176_640_000);
}

#[test]
fn integer_builtins() {
    assert_int("gcd(12, 18)", 6);
    assert_int("gcd(12, 18, 8)", 2);
    assert_int("gcd(-12, 18)", 6);
    assert_int("gcd(0, 0)", 0);
    assert_int("lcm(4, 6)", 12);
    assert_int("lcm(4, 6, 10)", 60);
    assert_int("lcm(0, 5)", 0);
    assert_int("xor(5, 3)", 6);
    assert_int("xor(5, 3, 6)", 0);
}

#[test]
fn conversions() {
    assert_int("int(3.7)", 3);
    assert_int("int(-3.7)", -3);
    assert_int("int(5)", 5);
    assert_real("float(5)", 5.0);
    assert_real("float(5.5)", 5.5);
}

#[test]
fn min_max() {
    assert_int("min(3, 1, 2)", 1);
    assert_int("max(3, 1, 2)", 3);
    assert_real("min(3, 1.5)", 1.5);
    assert_real("max(2.5, 2)", 2.5);
    assert_nan("min(1, NAN)");
    assert_nan("max(NAN, 2, 3)");
}

#[test]
fn logarithms() {
    assert_real("log(E)", 1.0);
    assert_real("log(8, 2)", 3.0);
    assert_real("log2(8)", 3.0);
    assert_real("log10(1000)", 3.0);
}

#[test]
fn rounding() {
    assert_int("round(3.7)", 4);
    assert_int("round(-3.7)", -4);
    // Ties resolve to the nearest even value.
    assert_int("round(0.5)", 0);
    assert_int("round(1.5)", 2);
    assert_int("round(2.5)", 2);
    assert_int("round(7)", 7);
    assert_real("round(3.14159, 2)", 3.14);
    assert_int("round(1234, -2)", 1200);
    assert_int("ceil(3.2)", 4);
    assert_int("ceil(-3.2)", -3);
    assert_int("floor(3.8)", 3);
    assert_int("floor(-3.2)", -4);
}

#[test]
fn logical_not() {
    assert_int("not(0)", 1);
    assert_int("not(1)", 0);
    assert_int("not(0.0)", 1);
    assert_int("not(2 > 3)", 1);
}

#[test]
fn whitespace_is_insignificant() {
    assert_int("  2+3 ", 5);
    assert_int("min( 1 ,\t2 )", 1);
}

#[test]
fn scientific_notation() {
    assert_real("1e3", 1000.0);
    assert_real("1.5e-2", 0.015);
    assert_real("2E2", 200.0);
    assert_real(".5", 0.5);
}

#[test]
fn division_by_zero_errors() {
    assert!(matches!(eval_err("1 / 0"), EvalError::DivisionByZero { .. }));
    assert!(matches!(eval_err("1 // 0"), EvalError::DivisionByZero { .. }));
    assert!(matches!(eval_err("1 % 0"), EvalError::DivisionByZero { .. }));
    assert!(matches!(eval_err("1 / 0.0"), EvalError::DivisionByZero { .. }));
    assert!(matches!(eval_err("log(8, 1)"), EvalError::DivisionByZero { .. }));
}

#[test]
fn domain_errors() {
    assert!(matches!(eval_err("sqrt(-1)"), EvalError::Domain { .. }));
    assert!(matches!(eval_err("fact(-1)"), EvalError::Domain { .. }));
    assert!(matches!(eval_err("fact(1.5)"), EvalError::Domain { .. }));
    assert!(matches!(eval_err("log(0)"), EvalError::Domain { .. }));
    assert!(matches!(eval_err("log(-1)"), EvalError::Domain { .. }));
    assert!(matches!(eval_err("gcd(1.5, 2)"), EvalError::Domain { .. }));
    assert!(matches!(eval_err("int(INF)"), EvalError::Domain { .. }));
    assert!(matches!(eval_err("int(NAN)"), EvalError::Domain { .. }));
}

#[test]
fn overflow_errors() {
    assert!(matches!(eval_err("fact(21)"), EvalError::Overflow { .. }));
    assert!(matches!(eval_err("2 ** 63"), EvalError::Overflow { .. }));
    assert!(matches!(eval_err("9223372036854775807 + 1"),
                     EvalError::Overflow { .. }));
    assert!(matches!(eval_err("-9223372036854775807 - 1 - 1"),
                     EvalError::Overflow { .. }));
}

#[test]
fn int_conversion_never_saturates() {
    // 2^63 is one past i64::MAX; 2^63 - 1 is not representable as an f64,
    // so the nearest whole reals around the boundary must both fail.
    assert!(matches!(eval_err("int(9223372036854775808.0)"),
                     EvalError::Overflow { .. }));
    assert!(matches!(eval_err("floor(1e19)"), EvalError::Overflow { .. }));
    // -2^63 is i64::MIN exactly and must still convert.
    assert_int("int(-9223372036854775808.0)", i64::MIN);
}

#[test]
fn hypot_avoids_intermediate_overflow() {
    match evaluate_expression("hypot(1e200, 1e200)") {
        Ok(Number::Real(r)) => {
            assert!(r.is_finite(), "expected a finite norm, got {r}");
            assert!((r / 1e200 - std::f64::consts::SQRT_2).abs() < 1e-9,
                    "wrong norm: {r}");
        },
        other => panic!("hypot(1e200, 1e200) produced {other:?}"),
    }
}

#[test]
fn unknown_identifiers() {
    assert!(matches!(parse_err("foo(1)"),
                     ParseError::UnknownIdentifier { .. }));
    assert!(matches!(parse_err("bogus + 1"),
                     ParseError::UnknownIdentifier { .. }));
    // Constant names are case-sensitive.
    assert!(matches!(parse_err("pi"), ParseError::UnknownIdentifier { .. }));
}

#[test]
fn arity_mismatches() {
    assert!(matches!(parse_err("sin(1, 2)"),
                     ParseError::ArityMismatch { .. }));
    assert!(matches!(parse_err("sin()"), ParseError::ArityMismatch { .. }));
    assert!(matches!(parse_err("gcd(4)"), ParseError::ArityMismatch { .. }));
    assert!(matches!(parse_err("log(1, 2, 3)"),
                     ParseError::ArityMismatch { .. }));
    assert!(matches!(parse_err("round(1, 2, 3)"),
                     ParseError::ArityMismatch { .. }));
}

#[test]
fn syntax_errors() {
    assert!(matches!(parse_err(""), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_err("2 +"),
                     ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_err("(2 + 3"),
                     ParseError::ExpectedClosingParen { .. }));
    assert!(matches!(parse_err("2 + 3 )"),
                     ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(parse_err("1 2"),
                     ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(parse_err("* 3"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_err("min(1,)"),
                     ParseError::UnexpectedToken { .. }));
}

#[test]
fn lex_errors() {
    assert!(matches!(parse_err("1 $ 2"),
                     ParseError::UnrecognizedCharacter { .. }));
    assert!(matches!(parse_err("1e"), ParseError::MalformedNumber { .. }));
    assert!(matches!(parse_err("1.5e+"),
                     ParseError::MalformedNumber { .. }));
    // A single character is a single character even when it spans several
    // bytes.
    assert!(matches!(parse_err("2 + §"),
                     ParseError::UnrecognizedCharacter { character: '§', .. }));
}

#[test]
fn nesting_depth_is_bounded() {
    let deep = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    assert!(matches!(parse_err(&deep), ParseError::NestingTooDeep { .. }));

    let shallow = format!("{}1{}", "(".repeat(50), ")".repeat(50));
    assert_int(&shallow, 1);
}

#[test]
fn errors_carry_positions() {
    let e = parse_err("2 + $");
    assert!(matches!(e, ParseError::UnrecognizedCharacter { position: 4, .. }));

    let e = eval_err("10 / (3 - 3)");
    assert!(matches!(e, EvalError::DivisionByZero { position: 3 }));

    // A truncated expression points at the last token, not offset zero.
    let e = parse_err("2 +");
    assert!(matches!(e, ParseError::UnexpectedEndOfInput { position: 2 }));
}

#[test]
fn display_round_trips_through_the_parser() {
    for src in ["123", "2.5", "-4", "0.1"] {
        let value = evaluate_expression(src).unwrap();
        let redisplayed = evaluate_expression(&value.to_string()).unwrap();
        assert_eq!(value, redisplayed, "round trip failed for {src:?}");
    }

    // Real output keeps its decimal point so the kind survives re-parsing.
    assert_eq!(evaluate_expression("4 / 2").unwrap().to_string(), "2.0");
}
