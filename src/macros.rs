/// Builds a [`FormValue`](crate::FormValue) from JSON-like syntax.
///
/// Arrays built this way are dense; spell holes out with
/// `FormValue::Array(vec![..., None, ...])`.
///
/// ```rust
/// use form_json::{form_value, FormValue};
///
/// let pet = form_value!({ "species": "Dahut", "legs": 4, "kids": ["Ashley", "Thelma"] });
/// assert_eq!(pet.to_string(), r#"{"species":"Dahut","legs":4,"kids":["Ashley","Thelma"]}"#);
/// ```
#[macro_export]
macro_rules! form_value {
    (null) => {
        $crate::FormValue::Null
    };

    (true) => {
        $crate::FormValue::Bool(true)
    };

    (false) => {
        $crate::FormValue::Bool(false)
    };

    ([]) => {
        $crate::FormValue::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::FormValue::Array(vec![$(Some($crate::form_value!($elem))),*])
    };

    ({}) => {
        $crate::FormValue::Object($crate::FormMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::FormMap::new();
        $(
            object.insert($key.to_string(), $crate::form_value!($value));
        )*
        $crate::FormValue::Object(object)
    }};

    // Strings, numbers and any other expression with a `From` conversion
    ($other:expr) => {
        $crate::FormValue::from($other)
    };
}
