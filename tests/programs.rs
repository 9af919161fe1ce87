/*
 * ==========================================================================
 * TALLY - Every Count Counts!
 * ==========================================================================
 *
 * File:     tests/programs.rs
 * Purpose:  End-to-end tests for whole Tally programs.
 *
 * Author:   Sam Wilcox
 * Email:    sam@tally-lang.com
 * Github:   https://github.com/samwilcox/tally
 *
 * License:
 * This file is part of the Tally language project.
 *
 * Tally is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use tally::{parse_program, Environment, TallyError};

fn run(source: &str) -> Result<Environment, TallyError> {
    let mut env = Environment::new();
    parse_program(source, &mut env).map(|()| env)
}

#[test]
fn single_assignment() {
    let env = run("x = 42;").unwrap();
    assert_eq!(env.get("x"), Some(42));
    assert_eq!(env.len(), 1);
}

#[test]
fn several_assignments_in_order() {
    let env = run("a = 1; b = 2; c = 3;").unwrap();
    let entries: Vec<_> = env.iter().collect();
    assert_eq!(entries, vec![("a", 1), ("b", 2), ("c", 3)]);
}

#[test]
fn reassignment_collapses_to_last_value() {
    let env = run("x = 1; y = 2; x = 9;").unwrap();
    assert_eq!(env.len(), 2);

    // Reassignment keeps the name's first-assignment position.
    let entries: Vec<_> = env.iter().collect();
    assert_eq!(entries, vec![("x", 9), ("y", 2)]);
}

#[test]
fn plus_and_minus_group_to_the_right() {
    // 10 - (3 - 2), not (10 - 3) - 2.
    let env = run("x = 10 - 3 - 2;").unwrap();
    assert_eq!(env.get("x"), Some(9));
}

#[test]
fn multiplication_chain() {
    let env = run("x = 2 * 3 * 4;").unwrap();
    assert_eq!(env.get("x"), Some(24));
}

#[test]
fn precedence() {
    let env = run("x = 2 + 3 * 4;").unwrap();
    assert_eq!(env.get("x"), Some(14));
}

#[test]
fn parenthesized_grouping() {
    let env = run("x = (2 + 3) * 4;").unwrap();
    assert_eq!(env.get("x"), Some(20));
}

#[test]
fn zero_literal() {
    let env = run("x = 0;").unwrap();
    assert_eq!(env.get("x"), Some(0));
}

#[test]
fn leading_zero_literal_fails() {
    // `007` scans as `0` followed by the unconsumed garbage `07`.
    assert!(run("x = 007;").is_err());
}

#[test]
fn unary_chaining() {
    let env = run("x = --5; y = -+5;").unwrap();
    assert_eq!(env.get("x"), Some(5));
    assert_eq!(env.get("y"), Some(-5));
}

#[test]
fn forward_reference_across_statements() {
    let env = run("x = 1; y = x + 1;").unwrap();
    assert_eq!(env.get("x"), Some(1));
    assert_eq!(env.get("y"), Some(2));
}

#[test]
fn use_before_assignment_fails() {
    let err = run("y = x + 1; x = 1;").unwrap_err();
    assert!(err.is_reference());
    assert!(err.message.contains('x'));
}

#[test]
fn undefined_variable_is_distinct_from_syntax_failure() {
    let reference = run("x = y + 1;").unwrap_err();
    let syntax = run("x = ;").unwrap_err();

    assert!(reference.is_reference());
    assert!(!reference.is_syntax());
    assert!(syntax.is_syntax());
}

#[test]
fn malformed_inputs_fail_cleanly() {
    for source in ["x = ;", "x 5;", "= 5;", "x =", "x", ";", "x = (1;", "x = 1"] {
        assert!(run(source).is_err(), "expected failure for {:?}", source);
    }
}

#[test]
fn whitespace_is_insignificant_between_tokens() {
    let env = run("\n  answer\t=\n ( 6 * 7 ) ;  \n").unwrap();
    assert_eq!(env.get("answer"), Some(42));
}

#[test]
fn trailing_whitespace_after_last_statement() {
    let env = run("x = 1;   \n\t").unwrap();
    assert_eq!(env.get("x"), Some(1));
}

#[test]
fn empty_and_blank_programs_succeed_with_no_bindings() {
    assert!(run("").unwrap().is_empty());
    assert!(run(" \n ").unwrap().is_empty());
}

#[test]
fn garbage_after_a_valid_statement_is_an_error() {
    assert!(run("x = 1; 2 + 3").is_err());
}

#[test]
fn earlier_bindings_survive_a_later_failure() {
    let mut env = Environment::new();
    let result = parse_program("x = 1; y = z;", &mut env);

    assert!(result.unwrap_err().is_reference());
    assert_eq!(env.get("x"), Some(1));
    assert_eq!(env.get("y"), None);
}

#[test]
fn identifiers_are_case_sensitive() {
    let env = run("speed = 1; Speed = 2;").unwrap();
    assert_eq!(env.get("speed"), Some(1));
    assert_eq!(env.get("Speed"), Some(2));
}

#[test]
fn adversarial_nesting_is_bounded_not_fatal() {
    let mut source = String::from("x = ");
    for _ in 0..100_000 {
        source.push('(');
    }
    source.push('1');

    let err = run(&source).unwrap_err();
    assert_eq!(err.code, "E_DEPTH");
}

#[test]
fn error_spans_point_at_the_problem() {
    let err = run("x = y;").unwrap_err();
    assert_eq!(err.span.line, 1);
    assert_eq!(err.span.column, 4);

    let err = run("a = 1;\nb = ;").unwrap_err();
    assert_eq!(err.span.line, 2);
}

#[test]
fn json_output_preserves_first_assignment_order() {
    let env = run("z = 26; a = 1; z = 0;").unwrap();
    let json = serde_json::to_string(&env).unwrap();
    assert_eq!(json, r#"{"z":0,"a":1}"#);
}

#[test]
fn coarse_contract_is_a_boolean_outcome() {
    let mut env = Environment::new();
    assert!(parse_program("x = 1;", &mut env).is_ok());

    let mut env = Environment::new();
    assert!(!parse_program("x = 1", &mut env).is_ok());
}
