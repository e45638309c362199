use pretty_assertions::assert_eq;
use rstruth::{extract_variables, Variable, VariableSet};
use std::cmp::Ordering;
use std::collections::BTreeSet;

fn names(expression: &str) -> Vec<char> {
    extract_variables(expression).names()
}

#[test]
fn test_first_occurrence_order() {
    assert_eq!(names("a&b"), vec!['a', 'b']);
    assert_eq!(names("b|a&b"), vec!['b', 'a']);
    assert_eq!(names("p|q|r"), vec!['p', 'q', 'r']);
    assert_eq!(names("z -> (y <-> x)"), vec!['z', 'y', 'x']);
}

#[test]
fn test_case_insensitive() {
    assert_eq!(names("bAaB"), vec!['b', 'a']);
    assert_eq!(names("Q & q"), vec!['q']);
}

#[test]
fn test_letters_are_independent() {
    // no multi-letter identifiers
    assert_eq!(names("alpha"), vec!['a', 'l', 'p', 'h']);
    assert_eq!(names("ab"), vec!['a', 'b']);
}

#[test]
fn test_operators_ignored() {
    assert_eq!(names("a->b"), vec!['a', 'b']);
    assert_eq!(names("a<->b"), vec!['a', 'b']);
    assert_eq!(names("!(a | b) & ~c ^ 1 0"), vec!['a', 'b', 'c']);
    assert_eq!(names("\t a \n"), vec!['a']);
}

#[test]
fn test_non_ascii_skipped() {
    assert_eq!(names("ä ∧ b ∨ ñ"), vec!['b']);
}

#[test]
fn test_constant_letters_are_variables() {
    assert_eq!(names("t & f"), vec!['t', 'f']);
    assert_eq!(names("true"), vec!['t', 'r', 'u', 'e']);
    assert_eq!(names("v | false"), vec!['v', 'f', 'a', 'l', 's', 'e']);
}

#[test]
fn test_empty() {
    assert!(extract_variables("").is_empty());
    assert!(extract_variables("&|!<->()").is_empty());
    assert_eq!(extract_variables("   "), VariableSet::new());
}

#[test]
fn test_indices_follow_columns() {
    let vars = extract_variables("c & a | c & b");

    for (i, var) in vars.iter().enumerate() {
        assert_eq!(var.index, i);
    }

    assert_eq!(vars.position('A'), Some(1));
    assert_eq!(vars.position('d'), None);
    assert_eq!(vars.labels(), vec!["c", "a", "b"]);
}

#[test]
fn test_variable_set_insert() {
    let mut vars = VariableSet::new();

    assert!(vars.insert('X'));
    assert!(vars.insert('y'));
    assert!(!vars.insert('x'));
    assert!(vars.contains('Y'));
    assert_eq!(vars.len(), 2);
    assert_eq!(vars.to_string(), "[x, y]");

    let collected: VariableSet = "yxY".chars().collect();
    assert_eq!(collected.names(), vec!['y', 'x']);
}

#[test]
fn test_pure_scan() {
    let expression = "q & p";

    assert_eq!(extract_variables(expression), extract_variables(expression));
}

#[test]
fn test_variable_ordering_agrees_with_equality() {
    let variables = [
        Variable::new('a', 0),
        Variable::new('b', 0),
        Variable::new('A', 1),
        Variable::new('a', 1),
        Variable::new('c', 2),
    ];

    for x in &variables {
        for y in &variables {
            assert_eq!(x.cmp(y) == Ordering::Equal, x == y, "{x}@{} vs {y}@{}", x.index, y.index);
        }
    }

    let sorted: BTreeSet<Variable> = variables.iter().copied().collect();
    assert_eq!(sorted.len(), 4);
    assert_eq!(
        sorted.iter().map(|v| (v.index, v.name)).collect::<Vec<_>>(),
        vec![(0, 'a'), (0, 'b'), (1, 'a'), (2, 'c')]
    );
}
