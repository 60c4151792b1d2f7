use pretty_assertions::assert_eq;
use ttcn3_eval::syntax::parse;
use ttcn3_eval::*;

// Helper to parse and evaluate a program in a fresh environment
fn eval_str(src: &str) -> Value {
    let program = parse(src).expect("parse failed");
    let mut env = Environment::new();
    eval(&program, &mut env)
}

fn assert_int(src: &str, expected: i64) {
    let value = eval_str(src);
    let n = value
        .as_integer()
        .unwrap_or_else(|| panic!("{:?}: object is not an integer. got={:?}", src, value));
    assert!(n.is_i64(), "{:?}: object is too big to compare. got={}", src, n);
    assert_eq!(n.to_i64().unwrap(), expected, "{:?}", src);
}

fn assert_bool(src: &str, expected: bool) {
    let value = eval_str(src);
    assert_eq!(value, Value::Boolean(expected), "{:?}", src);
}

// ═══════════════════════════════════════════════════════════════════════
// Integers
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_int() {
    let tests = [
        ("0", 0),
        ("-0", 0),
        ("+0", 0),
        ("10", 10),
        ("-10", -10),
        ("+10", 10),
        ("1+2*3", 7),
        ("(1+2)*3", 9),
    ];
    for (input, expected) in tests {
        assert_int(input, expected);
    }
}

#[test]
fn test_int_arithmetic_mix() {
    assert_int("2*3-4*5", -14);
    assert_int("10-2-3", 5);
    assert_int("-(2+3)*2", -10);
    assert_int("--5", 5);
    assert_int("-+-5", 5);
}

#[test]
fn test_int_beyond_64_bits() {
    let value = eval_str("9223372036854775807 + 1");
    let n = value.as_integer().unwrap();
    assert!(!n.is_i64());
    assert!(n.to_i64().is_err());
    assert_eq!(n.to_string(), "9223372036854775808");

    assert_int("9223372036854775807 * 4 - 9223372036854775807 * 3", i64::MAX);
    assert_int("123456789012345678901234567890 - 123456789012345678901234567889", 1);
}

// ═══════════════════════════════════════════════════════════════════════
// Booleans
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_bool() {
    let tests = [
        ("true", true),
        ("false", false),
        ("not true", false),
        ("not not true", true),
        ("not not not true", false),
        ("not false", true),
        ("not not false", false),
        ("not not not false", true),
        ("1<1", false),
        ("1<=1", true),
        ("1<2", true),
        ("1==1", true),
        ("1==2", false),
        ("1!=1", false),
        ("1!=2", true),
        ("2-1 < 2", true),
        ("2+1==1+2", true),
        ("true==false", false),
        ("true!=false", true),
    ];
    for (input, expected) in tests {
        assert_bool(input, expected);
    }
}

#[test]
fn test_bool_greater() {
    assert_bool("2>1", true);
    assert_bool("1>1", false);
    assert_bool("1>=1", true);
    assert_bool("0>=1", false);
    assert_bool("not 1 > 2", true);
}

// ═══════════════════════════════════════════════════════════════════════
// If Statements
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_if_stmt() {
    let tests: [(&str, Option<i64>); 6] = [
        ("if (true) { 10 }", Some(10)),
        ("if (false) { 10 }", None),
        ("if (1 < 2) { 10 }", Some(10)),
        ("if (1 > 2) { 10 }", None),
        ("if (1 > 2) { 10 } else { 20 }", Some(20)),
        ("if (1 < 2) { 10 } else { 20 }", Some(10)),
    ];
    for (input, expected) in tests {
        match expected {
            Some(n) => assert_int(input, n),
            None => assert_eq!(eval_str(input), Value::Absent, "{:?}", input),
        }
    }
}

#[test]
fn test_if_else_if_chain() {
    assert_int("if (false) { 1 } else if (true) { 2 } else { 3 }", 2);
    assert_int("if (false) { 1 } else if (false) { 2 } else { 3 }", 3);
    assert_eq!(eval_str("if (false) { 1 } else if (false) { 2 }"), Value::Absent);
}

#[test]
fn test_if_empty_block_is_absent() {
    assert_eq!(eval_str("if (true) {}"), Value::Absent);
}

// ═══════════════════════════════════════════════════════════════════════
// Return Statements
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_return_stmt() {
    let tests = [
        ("return 1;", 1),
        ("return 2; 9", 2),
        ("return 3*4;9", 12),
        ("9; return 5*6; 9", 30),
        ("if (true) { if (true) { return 7 } return 9 }", 7),
    ];
    for (input, expected) in tests {
        assert_int(input, expected);
    }
}

#[test]
fn test_bare_return_is_absent() {
    assert_eq!(eval_str("return; 1"), Value::Absent);
}

// ═══════════════════════════════════════════════════════════════════════
// Declarations and Identifiers
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_declarations() {
    assert_int("var integer x := 5; x", 5);
    assert_int("var integer x := 5; const integer y := x * 2; x + y", 15);
    assert_bool("const boolean b := 1 < 2; not b", false);
}

#[test]
fn test_declared_type_is_not_enforced() {
    assert_bool("var integer x := 1; var boolean x := true; x", true);
    assert_bool("const integer flag := 1 < 2; flag", true);
}

#[test]
fn test_block_shadowing() {
    assert_int("var integer x := 1; if (true) { var integer x := 2; x }", 2);
    assert_int("var integer x := 1; if (true) { var integer x := 2 } x", 1);
    assert_int("var integer x := 1; { var integer y := x + 1; return y }", 2);
}

#[test]
fn test_top_level_bindings_stay_in_caller_env() {
    let program = parse("var integer answer := 6 * 7").unwrap();
    let mut env = Environment::new();
    assert_eq!(eval(&program, &mut env), Value::Absent);
    assert_eq!(env.lookup("answer"), Ok(&Value::integer(42)));
}

#[test]
fn test_caller_defined_bindings() {
    let program = parse("limit - 1").unwrap();
    let mut env = Environment::new();
    env.define("limit", Value::integer(100));
    assert_eq!(eval(&program, &mut env), Value::integer(99));
}

// ═══════════════════════════════════════════════════════════════════════
// Idempotence
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_reevaluation_is_idempotent() {
    let program = parse("var integer x := 3; if (x > 2) { return x * 10 } 0").unwrap();
    let first = eval(&program, &mut Environment::new());
    let second = eval(&program, &mut Environment::new());
    assert_eq!(first, Value::integer(30));
    assert_eq!(first, second);
}

#[test]
fn test_eval_source() {
    assert_eq!(eval_source("(1+2)*3").unwrap(), Value::integer(9));
    assert!(eval_source("1 +").is_err());
}
