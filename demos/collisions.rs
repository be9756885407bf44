//! How conflicting field names are merged instead of rejected.
//!
//! Run with: cargo run --example collisions

use form_json::{to_string, FormData};

fn show(title: &str, fields: &[(&str, &str)]) {
    let mut form = FormData::new();
    for (name, value) in fields {
        form.append_text(*name, *value, "text");
    }

    println!("{}:", title);
    for (name, value) in fields {
        println!("  {} = {}", name, value);
    }
    println!("  => {}\n", to_string(&form));
}

fn main() {
    show(
        "Repeated name",
        &[("bottle-on-wall", "1"), ("bottle-on-wall", "2"), ("bottle-on-wall", "3")],
    );
    show("Sparse indices", &[("hearbeat[0]", "thunk"), ("hearbeat[2]", "thunk")]);
    show(
        "Scalar, then indices, then keys",
        &[
            ("mix", "scalar"),
            ("mix[0]", "array 1"),
            ("mix[2]", "array 2"),
            ("mix[key]", "key key"),
            ("mix[car]", "car key"),
        ],
    );
    show("Same fields, other order", &[("a[0]", "i"), ("a", "s")]);
    show("Malformed name", &[("error[good]", "BOOM!"), ("error[bad", "BOOM BOOM!")]);
}
