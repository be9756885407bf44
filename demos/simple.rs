//! Encoding a small form with nested and repeated fields.
//!
//! Run with: cargo run --example simple

use form_json::{to_string, FormData};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut form = FormData::new();
    form.append_text("name", "Bender", "text");
    form.append_text("pet[species]", "Dahut", "text");
    form.append_text("pet[name]", "Hypatia", "text");
    form.append_text("kids[1]", "Thelma", "text");
    form.append_text("kids[0]", "Ashley", "text");
    form.append_text("tags[]", "robot", "checkbox");
    form.append_text("tags[]", "bending", "checkbox");

    let json = to_string(&form);
    println!("JSON output:\n{}\n", json);

    // The output is plain JSON any parser accepts
    let parsed: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(parsed["kids"][0], "Ashley");
    assert_eq!(parsed["tags"][1], "bending");
    println!("✓ Parsed back with serde_json");

    Ok(())
}
