use form_json::{
    form_value, to_string, to_string_with_options, to_value, to_vec, EncodeOptions, Entry,
    FormData, FormFile, FormValue,
};

fn form(fields: &[(&str, &str)]) -> FormData {
    let mut form = FormData::new();
    for (name, value) in fields {
        form.append_text(*name, *value, "text");
    }
    form
}

/// Asserts the exact bytes, and that they parse to the same JSON as `expected`.
fn assert_encodes(form: &FormData, expected: &str) {
    let actual = to_string(form);
    println!("encoded: {}", actual);

    let parsed: serde_json::Value = serde_json::from_str(&actual).unwrap();
    let wanted: serde_json::Value = serde_json::from_str(expected).unwrap();
    assert_eq!(parsed, wanted);
    assert_eq!(actual, expected);
}

#[test]
fn test_basic_fields() {
    let form = form(&[("name", "Bender"), ("hind", "Bitable"), ("shiny", "true")]);
    assert_encodes(&form, r#"{"name":"Bender","hind":"Bitable","shiny":"true"}"#);
}

#[test]
fn test_repeated_name() {
    let form = form(&[
        ("bottle-on-wall", "1"),
        ("bottle-on-wall", "2"),
        ("bottle-on-wall", "3"),
    ]);
    assert_encodes(&form, r#"{"bottle-on-wall":["1","2","3"]}"#);
}

#[test]
fn test_objects_and_out_of_order_indices() {
    let form = form(&[
        ("pet[species]", "Dahut"),
        ("pet[name]", "Hypatia"),
        ("kids[1]", "Thelma"),
        ("kids[0]", "Ashley"),
    ]);
    assert_encodes(
        &form,
        r#"{"pet":{"species":"Dahut","name":"Hypatia"},"kids":["Ashley","Thelma"]}"#,
    );
}

#[test]
fn test_sparse_array() {
    let form = form(&[("hearbeat[0]", "thunk"), ("hearbeat[2]", "thunk")]);
    assert_encodes(&form, r#"{"hearbeat":["thunk",null,"thunk"]}"#);

    let form = self::form(&[("x[0]", "v0"), ("x[2]", "v2")]);
    assert_encodes(&form, r#"{"x":["v0",null,"v2"]}"#);
}

#[test]
fn test_array_of_objects() {
    let form = form(&[
        ("pet[0][species]", "Dahut"),
        ("pet[0][name]", "Hypatia"),
        ("pet[1][species]", "Felis Stultus"),
        ("pet[1][name]", "Billie"),
    ]);
    assert_encodes(
        &form,
        r#"{"pet":[{"species":"Dahut","name":"Hypatia"},{"species":"Felis Stultus","name":"Billie"}]}"#,
    );
}

#[test]
fn test_deep_path() {
    let form = form(&[("wow[such][deep][3][much][power][!]", "Amaze")]);
    assert_encodes(
        &form,
        r#"{"wow":{"such":{"deep":[null,null,null,{"much":{"power":{"!":"Amaze"}}}]}}}"#,
    );
}

#[test]
fn test_mixed_scalar_indexed_and_keyed() {
    let form = form(&[
        ("mix", "scalar"),
        ("mix[0]", "array 1"),
        ("mix[2]", "array 2"),
        ("mix[key]", "key key"),
        ("mix[car]", "car key"),
    ]);
    assert_encodes(
        &form,
        r#"{"mix":{"":"scalar","0":"array 1","2":"array 2","key":"key key","car":"car key"}}"#,
    );
}

#[test]
fn test_append_flag() {
    let form = form(&[("highlander[]", "one")]);
    assert_encodes(&form, r#"{"highlander":["one"]}"#);
}

#[test]
fn test_malformed_name_is_literal_key() {
    let form = form(&[("error[good]", "BOOM!"), ("error[bad", "BOOM BOOM!")]);
    assert_encodes(&form, r#"{"error":{"good":"BOOM!"},"error[bad":"BOOM BOOM!"}"#);
}

#[test]
fn test_scalar_then_nested_collision() {
    let form = form(&[("a", "scalar"), ("a[b]", "nested")]);
    assert_encodes(&form, r#"{"a":{"":"scalar","b":"nested"}}"#);
}

#[test]
fn test_order_matters() {
    let scalar_first = form(&[("a", "s"), ("a[0]", "i")]);
    let indexed_first = form(&[("a[0]", "i"), ("a", "s")]);

    assert_encodes(&scalar_first, r#"{"a":{"":"s","0":"i"}}"#);
    assert_encodes(&indexed_first, r#"{"a":["i","s"]}"#);
}

#[test]
fn test_file_upload() {
    let mut form = FormData::new();
    form.append_text("title", "report", "text");
    form.append_file(
        "attachments[]",
        FormFile::new("notes.txt", "text/plain", "Hello, world!"),
        "file",
    );
    assert_encodes(
        &form,
        r#"{"title":"report","attachments":[{"name":"notes.txt","type":"text/plain","body":"SGVsbG8sIHdvcmxkIQ=="}]}"#,
    );
}

#[test]
fn test_file_from_reader() {
    let bytes: &[u8] = &[0xde, 0xad, 0xbe, 0xef];
    let file = FormFile::from_reader("blob.bin", "application/octet-stream", bytes).unwrap();

    let mut form = FormData::new();
    form.append_file("blob", file, "file");
    assert_encodes(
        &form,
        r#"{"blob":{"name":"blob.bin","type":"application/octet-stream","body":"3q2+7w=="}}"#,
    );
}

#[test]
fn test_files_with_same_name_collect() {
    let mut form = FormData::new();
    form.append_file("f", FormFile::new("a", "text/plain", "a"), "file");
    form.append_file("f", FormFile::new("b", "text/plain", "b"), "file");
    form.append_text("f", "c", "text");

    assert_encodes(
        &form,
        r#"{"f":[{"name":"a","type":"text/plain","body":"YQ=="},{"name":"b","type":"text/plain","body":"Yg=="},"c"]}"#,
    );

    let tree = to_value(&form);
    let files = tree.get("f").and_then(FormValue::as_array).unwrap();
    assert!(files[0].as_ref().is_some_and(FormValue::is_file));
    assert_eq!(files[2], Some(FormValue::from("c")));
}

fn text_file(name: &str) -> FormFile {
    FormFile::new(name, "text/plain", "hi")
}

#[test]
fn test_text_after_file_collects_into_array() {
    let mut form = FormData::new();
    form.append_file("f", text_file("a.txt"), "file");
    form.append_text("f", "later", "text");
    assert_encodes(
        &form,
        r#"{"f":[{"name":"a.txt","type":"text/plain","body":"aGk="},"later"]}"#,
    );
}

#[test]
fn test_nested_field_through_file_wraps_it() {
    let mut form = FormData::new();
    form.append_file("f", text_file("a.txt"), "file");
    form.append_text("f[x]", "v", "text");
    assert_encodes(
        &form,
        r#"{"f":{"":{"name":"a.txt","type":"text/plain","body":"aGk="},"x":"v"}}"#,
    );
}

#[test]
fn test_text_on_object_merges_once_beside_files() {
    let mut form = FormData::new();
    form.append_text("f[x]", "v", "text");
    form.append_text("f", "first", "text");
    form.append_file("f", text_file("a.txt"), "file");
    form.append_text("f", "second", "text");
    assert_encodes(
        &form,
        r#"{"f":[{"x":"v","":"first"},{"name":"a.txt","type":"text/plain","body":"aGk="},"second"]}"#,
    );
}

#[test]
fn test_textarea_newlines_are_normalized() {
    let mut form = FormData::new();
    form.append_text("comment", "line one\nline two\rline three", "textarea");
    assert_encodes(
        &form,
        r#"{"comment":"line one\r\nline two\r\nline three"}"#,
    );
}

#[test]
fn test_unicode_and_escaping() {
    let form = form(&[("naïve[ключ]", "say \"hi\"\n"), ("emoji", "👋")]);
    assert_encodes(
        &form,
        r#"{"naïve":{"ключ":"say \"hi\"\n"},"emoji":"👋"}"#,
    );
}

#[test]
fn test_index_limit_option() {
    let form = form(&[("big[1000]", "x")]);
    let options = EncodeOptions::new().with_max_index(999);
    assert_eq!(to_string_with_options(&form, options), r#"{"big[1000]":"x"}"#);
}

#[test]
fn test_tree_matches_macro() {
    let form: FormData = vec![
        Entry::text("user[name]", "Leela"),
        Entry::text("user[roles][]", "captain"),
        Entry::text("user[roles][]", "pilot"),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        to_value(&form),
        form_value!({ "user": { "name": "Leela", "roles": ["captain", "pilot"] } })
    );
}

#[test]
fn test_serde_view_matches_text() {
    let form = form(&[("a[0]", "x"), ("a[3]", "y"), ("b[c][d]", "z")]);
    let tree = to_value(&form);
    assert_eq!(serde_json::to_string(&tree).unwrap(), to_string(&form));
}

#[test]
fn test_output_is_utf8_bytes() {
    let form = form(&[("k", "ü")]);
    let bytes = to_vec(&form);
    assert_eq!(bytes, "{\"k\":\"ü\"}".as_bytes());
}
