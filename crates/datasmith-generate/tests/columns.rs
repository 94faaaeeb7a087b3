use serde_json::json;

use datasmith_core::{Bound, make_config_object};
use datasmith_generate::{CellValue, Constraints, GenerationEngine};

fn engine() -> GenerationEngine {
    GenerationEngine::new()
}

#[test]
fn int_columns_respect_bounds() {
    let min = Bound::Int(18);
    let max = Bound::Int(21);
    let constraints = Constraints {
        min_value: Some(&min),
        max_value: Some(&max),
        ..Default::default()
    };

    let cells = engine()
        .column("int", &constraints, 5, 42)
        .expect("int column");

    assert_eq!(cells.len(), 5);
    for cell in &cells {
        let value = cell.as_i64().expect("integer cell");
        assert!((18..=21).contains(&value), "out of bounds: {value}");
    }
}

#[test]
fn int_defaults_to_zero_through_999() {
    let cells = engine()
        .column("int", &Constraints::default(), 200, 7)
        .expect("int column");
    for cell in &cells {
        let value = cell.as_i64().expect("integer cell");
        assert!((0..=999).contains(&value), "out of default bounds: {value}");
    }
}

#[test]
fn categorical_draws_only_declared_literals() {
    let values = vec![json!("gold"), json!("silver")];
    let constraints = Constraints {
        values: Some(&values),
        ..Default::default()
    };

    let cells = engine()
        .column("cat", &constraints, 100, 9)
        .expect("cat column");

    assert_eq!(cells.len(), 100);
    for cell in &cells {
        let text = cell.as_str().expect("text cell");
        assert!(text == "gold" || text == "silver", "unexpected pick: {text}");
    }
}

#[test]
fn categorical_without_values_fails_naming_the_tag() {
    let err = engine()
        .column("cat", &Constraints::default(), 10, 1)
        .expect_err("cat without values");
    assert!(err.to_string().contains("'cat'"), "got: {err}");
}

#[test]
fn same_seed_reproduces_identical_columns() {
    let values = vec![json!("a"), json!("b"), json!("c")];
    let constraints = Constraints {
        values: Some(&values),
        ..Default::default()
    };

    let first = engine()
        .column("cat", &constraints, 50, 123)
        .expect("first run");
    let second = engine()
        .column("cat", &constraints, 50, 123)
        .expect("second run");

    assert_eq!(first, second);
}

#[test]
fn str_length_falls_in_declared_range() {
    let constraints = Constraints {
        min_length: Some(5),
        max_length: Some(10),
        ..Default::default()
    };

    let cells = engine()
        .column("str", &constraints, 50, 11)
        .expect("str column");

    for cell in &cells {
        let text = cell.as_str().expect("text cell");
        assert!(
            (5..=10).contains(&text.len()),
            "length {} out of range",
            text.len()
        );
        assert!(text.chars().all(|ch| ch.is_ascii_alphanumeric()));
    }
}

#[test]
fn str_format_substitutes_placeholders() {
    let constraints = Constraints {
        format: Some("ID-###-??"),
        ..Default::default()
    };

    let cells = engine()
        .column("str", &constraints, 20, 3)
        .expect("formatted column");

    for cell in &cells {
        let text = cell.as_str().expect("text cell");
        assert_eq!(text.len(), 9);
        assert!(text.starts_with("ID-"), "literal prefix lost: {text}");
        assert!(text[3..6].chars().all(|ch| ch.is_ascii_digit()));
        assert_eq!(&text[6..7], "-");
        assert!(text[7..].chars().all(|ch| ch.is_ascii_alphabetic()));
    }
}

#[test]
fn lorem_produces_prose() {
    let cells = engine()
        .column("lorem", &Constraints::default(), 5, 21)
        .expect("lorem column");
    for cell in &cells {
        let text = cell.as_str().expect("text cell");
        assert!(!text.is_empty());
    }
}

#[test]
fn dates_stay_inside_bounds() {
    let min = Bound::Text("2020-01-01".to_string());
    let max = Bound::Text("2020-12-31".to_string());
    let constraints = Constraints {
        min_value: Some(&min),
        max_value: Some(&max),
        ..Default::default()
    };

    let cells = engine()
        .column("date", &constraints, 100, 17)
        .expect("date column");

    let start = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).expect("start");
    let end = chrono::NaiveDate::from_ymd_opt(2020, 12, 31).expect("end");
    for cell in &cells {
        let date = cell.as_date().expect("date cell");
        assert!(date >= start && date <= end, "out of bounds: {date}");
    }
}

#[test]
fn timestamps_stay_inside_bounds() {
    let min = Bound::Text("2021-06-01 00:00:00".to_string());
    let max = Bound::Text("2021-06-02 00:00:00".to_string());
    let constraints = Constraints {
        min_value: Some(&min),
        max_value: Some(&max),
        ..Default::default()
    };

    let cells = engine()
        .column("timestamp", &constraints, 50, 5)
        .expect("timestamp column");

    for cell in &cells {
        let ts = cell.as_timestamp().expect("timestamp cell");
        assert_eq!(ts.date().format("%Y-%m").to_string(), "2021-06");
    }
}

#[test]
fn integer_bound_on_a_date_field_is_fatal() {
    let min = Bound::Int(20200101);
    let constraints = Constraints {
        min_value: Some(&min),
        ..Default::default()
    };
    let err = engine()
        .column("date", &constraints, 5, 1)
        .expect_err("int bound on date");
    assert!(err.to_string().contains("'date'"));
}

#[test]
fn text_bound_on_an_int_field_is_fatal() {
    let min = Bound::Text("eighteen".to_string());
    let constraints = Constraints {
        min_value: Some(&min),
        ..Default::default()
    };
    assert!(engine().column("int", &constraints, 5, 1).is_err());
}

#[test]
fn unrecognized_tags_degrade_to_null_columns() {
    let cells = engine()
        .column("uuid", &Constraints::default(), 5, 1)
        .expect("unsupported tag must not fail");
    assert_eq!(cells.len(), 5);
    assert!(cells.iter().all(CellValue::is_null));
}

#[test]
fn tags_are_case_insensitive() {
    let min = Bound::Int(1);
    let max = Bound::Int(1);
    let constraints = Constraints {
        min_value: Some(&min),
        max_value: Some(&max),
        ..Default::default()
    };
    let cells = engine()
        .column("INT", &constraints, 3, 1)
        .expect("uppercase tag");
    assert_eq!(cells, vec![CellValue::Int(1); 3]);
}

#[test]
fn tables_keep_field_declaration_order() {
    let document = json!({
        "name": "people",
        "output_format": "csv",
        "output_rec_cnt": 5,
        "source": "fake",
        "seed": 1,
        "output_file": "people.csv",
        "fields": [
            {"name": "age", "type": "int", "min_value": 18, "max_value": 21},
            {"name": "tier", "type": "cat", "values": ["gold", "silver"]},
            {"name": "joined", "type": "date", "min_value": "2020-01-01", "max_value": "2020-12-31"}
        ]
    });
    let schema = make_config_object(&document).expect("valid document");

    let table = engine().run(&schema).expect("generate table");

    assert_eq!(table.name, "people");
    assert_eq!(table.rows(), 5);
    let order: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(order, ["age", "tier", "joined"]);
}

#[test]
fn table_generation_is_deterministic() {
    let document = json!({
        "name": "people",
        "output_format": "csv",
        "output_rec_cnt": 20,
        "source": "fake",
        "seed": 99,
        "output_file": "people.csv",
        "fields": [
            {"name": "who", "type": "name"},
            {"name": "age", "type": "int"},
            {"name": "bio", "type": "lorem"}
        ]
    });
    let schema = make_config_object(&document).expect("valid document");

    let first = engine().run(&schema).expect("first run");
    let second = engine().run(&schema).expect("second run");

    for (a, b) in first.columns.iter().zip(&second.columns) {
        assert_eq!(a.cells, b.cells, "column '{}' diverged", a.name);
    }
}

#[test]
fn a_failing_field_aborts_the_table() {
    let document = json!({
        "name": "broken",
        "output_format": "csv",
        "output_rec_cnt": 5,
        "source": "fake",
        "seed": 1,
        "output_file": "broken.csv",
        "fields": [
            {"name": "ok", "type": "int"},
            {"name": "tier", "type": "cat"}
        ]
    });
    let schema = make_config_object(&document).expect("valid document");
    assert!(engine().run(&schema).is_err());
}
