use pretty_assertions::assert_eq;
use rstruth::render::{write_table, RenderOptions};
use rstruth::Session;
use std::fs;
use std::path::Path;

fn file_assert_table<P: AsRef<Path>>(expr_file: P, table_file: P) {
    let expression = fs::read_to_string(expr_file).expect("Could not read expression file");
    let expected = fs::read_to_string(table_file).expect("Could not read table file");

    let evaluation = Session::new()
        .evaluate(expression.trim_end())
        .expect("Could not evaluate expression");

    let mut output: Vec<u8> = Vec::new();
    write_table(&mut output, &evaluation.table, &RenderOptions::default())
        .expect("Could not render table");

    assert_eq!(String::from_utf8(output).expect("output is not utf-8"), expected);
}

#[test]
fn test_data_files() {
    let mut checked = 0;

    for entry in glob::glob("tests/data/*.expr").expect("invalid glob pattern") {
        let expr_file = entry.expect("unreadable path");
        let table_file = expr_file.with_extension("table");

        dbg!(&expr_file);
        file_assert_table(&expr_file, &table_file);
        checked += 1;
    }

    assert!(checked >= 8, "only {checked} data files found");
}

#[test]
fn test_conjunction() {
    file_assert_table("tests/data/and.expr", "tests/data/and.table");
}

#[test]
fn test_auto_completed_implication() {
    file_assert_table("tests/data/implies.expr", "tests/data/implies.table");
}

#[test]
fn test_no_variables_renders_nothing() {
    file_assert_table("tests/data/empty.expr", "tests/data/empty.table");
    file_assert_table("tests/data/no_letters.expr", "tests/data/no_letters.table");
}
