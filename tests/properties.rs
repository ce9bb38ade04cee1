use shunt::{
    canonical::{Lexeme, Postfix},
    error::ErrorKind,
    evaluate,
    interpreter::{
        evaluator::core::evaluate_postfix,
        normalizer::{canonicalize, normalize},
        shunter::shunt,
        value::{
            scalar::Scalar,
            table::{Label, ValueTable},
        },
    },
};

const SAMPLES: &[&str] = &["3+4*2",
                           "(1+2)*(3+4)",
                           "-3+5",
                           "-(2+3)",
                           "--4",
                           "2(3+1)",
                           "(2+1)4",
                           "2 - -x * (y + 1.5)",
                           "a = (b = 7 % 3)",
                           "!(1 < 2) || 3 >= 2 && true",
                           "~-1 << 2 ^ 5 & 3 | 8",
                           "((1 + 2)",
                           "-x(2)",
                           "rate * (1 - -.5)"];

fn sorted<'a>(labels: impl Iterator<Item = &'a Label>) -> Vec<Label> {
    let mut labels: Vec<Label> = labels.cloned().collect();
    labels.sort();
    labels
}

#[test]
fn every_operand_is_in_the_table() {
    for src in SAMPLES {
        let (infix, table) = normalize(src).unwrap();
        for label in infix.operands() {
            assert!(table.contains(label), "'{src}': {label} missing from {table}");
        }
    }
}

#[test]
fn shunting_keeps_operands() {
    for src in SAMPLES {
        let (infix, _) = normalize(src).unwrap();
        let postfix = shunt(&infix).unwrap();
        assert_eq!(sorted(infix.operands()), sorted(postfix.operands()), "'{src}'");
    }
}

#[test]
fn postfix_has_no_parentheses() {
    for src in SAMPLES {
        let (infix, _) = normalize(src).unwrap();
        let postfix = shunt(&infix).unwrap();
        assert!(postfix.lexemes()
                       .iter()
                       .all(|(lexeme, _)| !matches!(lexeme, Lexeme::LParen | Lexeme::RParen)),
                "'{src}' gave {postfix}");
    }
}

#[test]
fn canonicalize_is_idempotent() {
    for src in SAMPLES {
        let (infix, table) = normalize(src).unwrap();
        let mut again = table.clone();
        let renormalized = canonicalize(infix.clone().into_lexemes(), &mut again).unwrap();
        assert_eq!(renormalized, infix, "'{src}'");
        assert_eq!(again, table, "'{src}'");
    }
}

#[test]
fn evaluation_is_deterministic() {
    for src in SAMPLES.iter().chain(&["1/0", "2 3", "x + 1"]) {
        let first = evaluate(src).map_err(|e| e.kind());
        let second = evaluate(src).map_err(|e| e.kind());
        assert_eq!(first, second, "'{src}'");
    }
}

#[test]
fn tighter_operators_come_first() {
    let cases = [("1 + 2 * 3 - 4 / 5", "`0`1`2`*`+`3`4`/`-"),
                 ("8 - 3 - 2", "`0`1`-`2`-"),
                 ("a || b && c", "`a`b`c`&&`||"),
                 ("1 == 2 | 3", "`0`1`==`2`|"),
                 ("-x * 2", "`x`#`0`*"),
                 ("!!true", "`0`!`!"),
                 ("a = b = 1", "`a`b`=`0`="),
                 ("1 << 2 + 3", "`0`1`2`+`<<")];

    for (src, expected) in cases {
        let (infix, _) = normalize(src).unwrap();
        assert_eq!(shunt(&infix).unwrap().to_string(), expected, "'{src}'");
    }
}

#[test]
fn canonical_infix_text() {
    let cases = [("2(x - -3)", "`0*(`x-`1)"),
                 ("-(a)", "#(`a)"),
                 ("- - 4", "`0"),
                 ("(1)2", "(`0)*`1"),
                 ("x <= 1", "`x<=`0")];

    for (src, expected) in cases {
        let (infix, _) = normalize(src).unwrap();
        assert_eq!(infix.to_string(), expected, "'{src}'");
    }
}

#[test]
fn folded_minus_is_stored_in_the_literal() {
    let (_, table) = normalize("4 * -2.5").unwrap();
    assert_eq!(table.get(&Label::Auto(1)), Some(&Scalar::Real(-2.5)));
}

#[test]
fn decoded_postfix_evaluates() {
    let mut table = ValueTable::new();
    table.store(Scalar::Integer(6));
    table.store(Scalar::Integer(4));
    table.bind("x", Scalar::Integer(10));

    let postfix: Postfix = "`x`0`1`-`*`#".parse().unwrap();
    assert_eq!(evaluate_postfix(&postfix, &mut table).unwrap(), Scalar::Integer(-20));
}

#[test]
fn postfix_text_round_trips() {
    for src in SAMPLES {
        let (infix, _) = normalize(src).unwrap();
        let postfix = shunt(&infix).unwrap();
        let decoded: Postfix = postfix.to_string().parse().unwrap();
        assert_eq!(decoded.to_string(), postfix.to_string(), "'{src}'");
    }
}

#[test]
fn decoding_rejects_bad_text() {
    let err = "`0`1`@".parse::<Postfix>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Precedence);

    let err = "`0 `1".parse::<Postfix>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);

    let mut table = ValueTable::new();
    let postfix: Postfix = "`5".parse().unwrap();
    let err = evaluate_postfix(&postfix, &mut table).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
}
