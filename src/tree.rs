//! Tree building: merging one entry's parsed path into the result tree.
//!
//! Every step but the last descends into (creating or coercing) a container.
//! The last step merges the entry's value into whatever is already there.
//! No combination of existing value and step is an error; conflicts are
//! resolved so that earlier contributions are never lost:
//!
//! | existing value | descending step                         | last step                     |
//! |----------------|-----------------------------------------|-------------------------------|
//! | absent / hole  | new array if next step is an index, else new object | store value (`[value]` when appending) |
//! | object         | descend into it                         | merge under the `""` key, once |
//! | array          | descend if next step is an index, else re-key as object | push value |
//! | scalar         | wrap as `{"": scalar}`                  | replace with `[scalar, value]` |
//!
//! A file wrapper ([`FormValue::File`]) is a scalar here even though it
//! renders as an object.
//!
//! Re-keying an array keeps every present element under its decimal index and
//! drops holes.

use crate::path::{Step, StepKey, StepKind};
use crate::{FormMap, FormValue};
use indexmap::map::Entry;
use tracing::trace;

/// The place a step addresses inside its container.
enum Slot<'a> {
    Property(Entry<'a, String, FormValue>),
    Element(&'a mut Option<FormValue>),
}

/// Merges `value` into `root` along `steps`.
///
/// `is_file` must be set when `value` is a file wrapper: a file landing on
/// an existing object is never merged under that object's `""` key.
///
/// # Examples
///
/// ```rust
/// use form_json::path::parse_path;
/// use form_json::{tree, FormMap, FormValue};
///
/// let mut root = FormValue::Object(FormMap::new());
/// tree::apply(&mut root, parse_path("kids[1]").steps(), FormValue::from("Thelma"), false);
/// tree::apply(&mut root, parse_path("kids[0]").steps(), FormValue::from("Ashley"), false);
///
/// assert_eq!(root.to_string(), r#"{"kids":["Ashley","Thelma"]}"#);
/// ```
pub fn apply(root: &mut FormValue, steps: &[Step], value: FormValue, is_file: bool) {
    let Some((last, parents)) = steps.split_last() else {
        return;
    };

    let mut context = root;
    for step in parents {
        context = descend(context, step);
    }
    merge(slot(context, &last.key), value, last.append, is_file);
}

fn descend<'a>(context: &'a mut FormValue, step: &Step) -> &'a mut FormValue {
    let wants_array = step.next_kind == Some(StepKind::Array);

    let current = match slot(context, &step.key) {
        Slot::Property(entry) => entry.or_insert_with(|| empty_container(wants_array)),
        Slot::Element(element) => element.get_or_insert_with(|| empty_container(wants_array)),
    };

    let replacement = match &mut *current {
        FormValue::Object(_) => None,
        FormValue::Array(_) if wants_array => None,
        FormValue::Array(items) => {
            trace!(key = %step.key, "re-keying array as object");
            Some(rekey_array(std::mem::take(items)))
        }
        scalar => {
            trace!(key = %step.key, "wrapping scalar under empty key");
            Some(wrap_scalar(std::mem::take(scalar)))
        }
    };
    if let Some(map) = replacement {
        *current = FormValue::Object(map);
    }
    current
}

fn merge(slot: Slot<'_>, value: FormValue, append: bool, is_file: bool) {
    match slot {
        Slot::Property(Entry::Vacant(vacant)) => {
            vacant.insert(fresh_leaf(value, append));
        }
        Slot::Property(Entry::Occupied(occupied)) => collide(occupied.into_mut(), value, is_file),
        Slot::Element(element) => match element.as_mut() {
            Some(current) => collide(current, value, is_file),
            None => *element = Some(fresh_leaf(value, append)),
        },
    }
}

fn collide(current: &mut FormValue, value: FormValue, is_file: bool) {
    match &mut *current {
        FormValue::Array(items) => items.push(Some(value)),
        // Only one level: the nested merge runs as if for a file, so a second
        // object collision below becomes a collision array instead.
        FormValue::Object(inner) if !is_file => {
            merge(Slot::Property(inner.entry(String::new())), value, false, true);
        }
        _ => {
            trace!("collecting colliding values into an array");
            let previous = std::mem::take(current);
            *current = FormValue::Array(vec![Some(previous), Some(value)]);
        }
    }
}

/// Addresses `key` inside `context`, padding arrays with holes up to the index.
///
/// Index keys on objects use their decimal form. A name key on an array, or
/// any key on a scalar, first turns the context into an object.
fn slot<'a>(context: &'a mut FormValue, key: &StepKey) -> Slot<'a> {
    match (context, key) {
        (FormValue::Object(map), key) => Slot::Property(map.entry(key.to_property())),
        (FormValue::Array(items), StepKey::Index(index)) => {
            if items.len() <= *index {
                items.resize(*index + 1, None);
            }
            Slot::Element(&mut items[*index])
        }
        (other, key) => {
            let map = match std::mem::take(other) {
                FormValue::Array(items) => rekey_array(items),
                scalar => wrap_scalar(scalar),
            };
            *other = FormValue::Object(map);
            slot(other, key)
        }
    }
}

fn empty_container(array: bool) -> FormValue {
    if array {
        FormValue::Array(Vec::new())
    } else {
        FormValue::Object(FormMap::new())
    }
}

fn fresh_leaf(value: FormValue, append: bool) -> FormValue {
    if append {
        FormValue::Array(vec![Some(value)])
    } else {
        value
    }
}

fn rekey_array(items: Vec<Option<FormValue>>) -> FormMap {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| item.map(|value| (index.to_string(), value)))
        .collect()
}

fn wrap_scalar(scalar: FormValue) -> FormMap {
    let mut map = FormMap::with_capacity(1);
    map.insert(String::new(), scalar);
    map
}
