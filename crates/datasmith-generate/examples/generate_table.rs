//! Generate a small table from an inline schema document and print it.

use serde_json::json;

use datasmith_core::make_config_object;
use datasmith_generate::GenerationEngine;

fn main() {
    let document = json!({
        "name": "people",
        "output_format": "csv",
        "output_rec_cnt": 10,
        "source": "fake",
        "seed": 42,
        "output_file": "people.csv",
        "fields": [
            {"name": "who", "type": "name"},
            {"name": "age", "type": "int", "min_value": 18, "max_value": 65},
            {"name": "tier", "type": "cat", "values": ["gold", "silver", "bronze"]},
            {"name": "member_id", "type": "str", "format": "M-####-??"}
        ]
    });

    let schema = make_config_object(&document).expect("valid document");
    let table = GenerationEngine::new().run(&schema).expect("generate table");

    let header: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
    println!("{}", header.join(" | "));
    for row in 0..table.rows() {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|column| column.cells[row].render())
            .collect();
        println!("{}", record.join(" | "));
    }
}
