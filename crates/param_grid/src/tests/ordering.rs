//! Tests for enumeration order

use serde_json::{Value, json};

use crate::grid::ParameterGrid;

fn enumerate(spec: Value) -> Vec<Value> {
    let grid = ParameterGrid::from_value(spec).unwrap();
    grid.iter().map(|c| c.to_json()).collect()
}

/// Keys are visited in insertion order, not alphabetically
#[test]
fn test_insertion_order_not_sorted() {
    let combos = enumerate(json!({"zeta": [1, 2], "alpha": ["a", "b"]}));
    assert_eq!(
        combos,
        vec![
            json!({"zeta": 1, "alpha": "a"}),
            json!({"zeta": 1, "alpha": "b"}),
            json!({"zeta": 2, "alpha": "a"}),
            json!({"zeta": 2, "alpha": "b"}),
        ]
    );
}

/// A nested mapping is fully recursed before its next sibling
#[test]
fn test_nested_parameters_precede_later_siblings() {
    let combos = enumerate(json!({
        "first": [0, 1],
        "group": {"inner": ["x", "y"]},
        "last": [true, false],
    }));

    assert_eq!(combos.len(), 8);
    assert_eq!(combos[0], json!({"first": 0, "group": {"inner": "x"}, "last": true}));
    assert_eq!(combos[1], json!({"first": 0, "group": {"inner": "x"}, "last": false}));
    assert_eq!(combos[2], json!({"first": 0, "group": {"inner": "y"}, "last": true}));
    assert_eq!(combos[4], json!({"first": 1, "group": {"inner": "x"}, "last": true}));
}

/// Key order of each combination mirrors the grid
#[test]
fn test_combination_key_order_mirrors_grid() {
    let grid = ParameterGrid::from_value(json!({"b": [1], "a": {"d": [2], "c": [3]}})).unwrap();
    let combination = grid.at(0).unwrap();

    let top: Vec<&str> = combination.entries().keys().map(String::as_str).collect();
    assert_eq!(top, ["b", "a"]);
    let paths: Vec<String> = combination.leaves().iter().map(|(p, _)| p.to_string()).collect();
    assert_eq!(paths, ["b", "a.d", "a.c"]);
}

/// Grids in a union are concatenated without deduplication
#[test]
fn test_union_keeps_duplicates() {
    let combos = enumerate(json!([{"a": [1, 2]}, {"a": [2, 3]}]));
    assert_eq!(
        combos,
        vec![json!({"a": 1}), json!({"a": 2}), json!({"a": 2}), json!({"a": 3})]
    );
}

/// Candidates may themselves be lists or maps
#[test]
fn test_compound_candidates_are_opaque() {
    let combos = enumerate(json!({
        "layers": [[64, 64], [128]],
        "act": [{"name": "relu"}],
    }));
    assert_eq!(
        combos,
        vec![
            json!({"layers": [64, 64], "act": {"name": "relu"}}),
            json!({"layers": [128], "act": {"name": "relu"}}),
        ]
    );
}

/// Single-valued parameters appear in every combination
#[test]
fn test_single_candidates() {
    let combos = enumerate(json!({"fixed": ["x"], "deep": {"er": {"still": [null]}}}));
    assert_eq!(combos, vec![json!({"fixed": "x", "deep": {"er": {"still": null}}})]);
}
