use std::fs;

use shunt::{
    error::ErrorKind,
    evaluate, evaluate_with,
    interpreter::value::{scalar::Scalar, table::ValueTable},
    trace,
};
use walkdir::WalkDir;

#[test]
fn calc_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }

            let (source, expected) =
                line.rsplit_once(" => ")
                    .unwrap_or_else(|| panic!("{path:?}:{}: missing ' => '", line_no + 1));
            count += 1;

            let actual = match evaluate(source) {
                Ok(value) => value.to_string(),
                Err(e) => format!("!{:?}", e.kind()),
            };
            assert_eq!(actual,
                       expected,
                       "{path:?}:{}: '{source}' evaluated to {actual}, expected {expected}",
                       line_no + 1);
        }
    }

    assert!(count > 0, "No cases found in tests/scripts");
}

fn assert_value(src: &str, expected: Scalar) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "wrong result for '{src}'"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_kind(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "wrong error for '{src}': {e}"),
    }
}

#[test]
fn precedence_and_grouping() {
    assert_value("3+4*2", Scalar::Integer(11));
    assert_value("(1+2)*(3+4)", Scalar::Integer(21));
    assert_value("2 + 3 * 4 - 6 / 2", Scalar::Integer(11));
}

#[test]
fn unary_minus() {
    assert_value("-3+5", Scalar::Integer(2));
    assert_value("-(2+3)", Scalar::Integer(-5));
    assert_value("--4", Scalar::Integer(4));
    assert_value("-1.5 * 2", Scalar::Real(-3.0));
}

#[test]
fn implicit_multiplication() {
    assert_value("2(3+1)", Scalar::Integer(8));
    assert_value("(2+1)4", Scalar::Integer(12));

    let mut table = ValueTable::new();
    table.bind("x", Scalar::Integer(5));
    assert_eq!(evaluate_with("2(x)", table).unwrap(), Scalar::Integer(10));
}

#[test]
fn division_and_modulus() {
    assert_value("7/2", Scalar::Real(3.5));
    assert_value("8/2", Scalar::Integer(4));
    assert_value("7%2", Scalar::Integer(1));
    assert_kind("1/0", ErrorKind::Arithmetic);
    assert_kind("1%0", ErrorKind::Arithmetic);
}

#[test]
fn large_integers_round_when_promoted() {
    assert_value("9007199254740993 + 0.5", Scalar::Real(9_007_199_254_740_992.0));
    assert_value("9007199254740993 / 2", Scalar::Real(4_503_599_627_370_496.0));
    assert_value("9007199254740993 < 1.0", Scalar::Bool(false));
    assert_value("9007199254740993 == 9007199254740992.0", Scalar::Bool(true));
}

#[test]
fn assignment() {
    assert_value("a=5", Scalar::Integer(5));

    let trace = trace("a = (b = 2 + 1)").unwrap();
    assert_eq!(trace.result, Scalar::Integer(3));
    assert_eq!(trace.table.variable("a"), Some(&Scalar::Integer(3)));
    assert_eq!(trace.table.variable("b"), Some(&Scalar::Integer(3)));

    // 'a = b' runs first, while 'b' is still unbound.
    assert_kind("a = b = 3", ErrorKind::Type);

    assert_kind("3 = 4", ErrorKind::Assign);
    assert_kind("a = b", ErrorKind::Type);
}

#[test]
fn seeded_variables() {
    let mut table = ValueTable::new();
    table.bind("rate", Scalar::Real(0.25));
    table.bind("n", Scalar::Integer(8));

    assert_eq!(evaluate_with("n * rate", table.clone()).unwrap(), Scalar::Real(2.0));
    assert_eq!(evaluate_with("-n", table.clone()).unwrap(), Scalar::Integer(-8));
    assert_eq!(evaluate_with("n = n + 1", table).unwrap(), Scalar::Integer(9));
}

#[test]
fn syntax_errors() {
    assert_kind("a=3 a+1", ErrorKind::Syntax);
    assert_kind(")", ErrorKind::Syntax);
    assert_kind("-", ErrorKind::Syntax);
    assert_kind("--", ErrorKind::Syntax);
    assert_kind("3 * --", ErrorKind::Syntax);
    assert_kind("2 + --", ErrorKind::Syntax);
    assert_kind("2 @ 2", ErrorKind::Syntax);
    assert_kind("..", ErrorKind::Syntax);
}

#[test]
fn structural_errors() {
    assert_kind("2+", ErrorKind::StackUnderflow);
    assert_kind("2 3", ErrorKind::Residue);
    assert_kind("", ErrorKind::EmptyInput);
    assert_kind(" \t ", ErrorKind::EmptyInput);
    assert_kind("1 <> 2", ErrorKind::Precedence);
}

#[test]
fn type_errors() {
    assert_kind("y * 2", ErrorKind::Type);
    assert_kind("1 && true", ErrorKind::Type);
    assert_kind("2.0 | 1", ErrorKind::Type);
    assert_kind("~true", ErrorKind::Type);
}

#[test]
fn errors_report_positions() {
    let err = evaluate("1 + 2 / 0").unwrap_err();
    assert_eq!(err.position(), Some(6));
    assert_eq!(err.to_string(), "Error at position 6: Division by zero.");

    let err = evaluate("4 $").unwrap_err();
    assert_eq!(err.position(), Some(2));

    assert_eq!(evaluate("").unwrap_err().position(), None);
}

#[test]
fn calls_are_independent() {
    assert_value("a = 5", Scalar::Integer(5));
    assert_kind("a + 1", ErrorKind::Type);
}
