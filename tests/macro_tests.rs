use form_json::{form_value, FormMap, FormValue, Number};

#[test]
fn test_form_value_macro_null() {
    let value = form_value!(null);
    assert_eq!(value, FormValue::Null);
}

#[test]
fn test_form_value_macro_booleans() {
    assert_eq!(form_value!(true), FormValue::Bool(true));
    assert_eq!(form_value!(false), FormValue::Bool(false));
}

#[test]
fn test_form_value_macro_numbers() {
    let int_val = form_value!(42);
    assert_eq!(int_val, FormValue::Number(Number::Integer(42)));

    let float_val = form_value!(3.5);
    assert_eq!(float_val, FormValue::Number(Number::Float(3.5)));

    let negative_val = form_value!(-123);
    assert_eq!(negative_val, FormValue::Number(Number::Integer(-123)));
}

#[test]
fn test_form_value_macro_strings() {
    assert_eq!(
        form_value!("hello world"),
        FormValue::String("hello world".to_string())
    );
    assert_eq!(form_value!(""), FormValue::String(String::new()));
}

#[test]
fn test_form_value_macro_arrays() {
    assert_eq!(form_value!([]), FormValue::Array(vec![]));

    let strings = form_value!(["a", "b"]);
    assert_eq!(
        strings,
        FormValue::Array(vec![
            Some(FormValue::String("a".to_string())),
            Some(FormValue::String("b".to_string())),
        ])
    );
}

#[test]
fn test_form_value_macro_objects() {
    assert_eq!(form_value!({}), FormValue::Object(FormMap::new()));

    let pet = form_value!({ "species": "Dahut", "name": "Hypatia" });
    let mut expected = FormMap::new();
    expected.insert("species".to_string(), FormValue::from("Dahut"));
    expected.insert("name".to_string(), FormValue::from("Hypatia"));
    assert_eq!(pet, FormValue::Object(expected));
}

#[test]
fn test_form_value_macro_nested() {
    let value = form_value!({
        "wow": { "such": { "deep": [{ "much": "power" }] } },
        "": "empty key",
    });
    assert_eq!(
        value.to_string(),
        r#"{"wow":{"such":{"deep":[{"much":"power"}]}},"":"empty key"}"#
    );
}

#[test]
fn test_form_value_macro_with_holes_spelled_out() {
    let sparse = FormValue::Array(vec![Some(form_value!("thunk")), None, Some(form_value!("thunk"))]);
    assert_eq!(sparse.to_string(), r#"["thunk",null,"thunk"]"#);
    assert_ne!(sparse, form_value!(["thunk", null, "thunk"]));
}
