use std::borrow::Cow;

use itertools::Itertools;
use log::{trace, warn};
use serde_json::{Map, Value};

use crate::model::TopicNumber;

/// Leaf fields with this key are always labelled with the key itself.
const EXAMPLES_KEY: &str = "examples";
const NAME_KEY: &str = "name";
const NUMBER_KEY: &str = "number";

pub type Object = Map<String, Value>;

/// A dotted path into a raw chapter, e.g. `topics.subtopics.description,examples`.
///
/// Every segment but the last names an array of objects to walk into. The last segment is a
/// comma separated list of prose fields read from each object reached.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PathSpec<'a> {
    pub nested_keys: Vec<&'a str>,
    pub leaf_keys: Vec<&'a str>,
}

impl<'a> PathSpec<'a> {
    pub fn parse(spec: &'a str) -> Self {
        let (nested_keys, leaf) = match spec.rsplit_once('.') {
            Some((nested, leaf)) => (nested.split('.').collect_vec(), leaf),
            None => (vec![], spec),
        };
        Self {
            nested_keys,
            leaf_keys: leaf.split(',').map(str::trim).collect_vec(),
        }
    }
}

/// The result of resolving a [PathSpec] against a raw chapter.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Resolution {
    /// All prose found, in depth-first order.
    pub text: String,
    /// One entry per object of the outermost array walked, in array order. `text` is the
    /// concatenation of the `text` of each entry.
    pub discovered: Vec<Discovered>,
}

/// An object found in the outermost array of a [PathSpec], along with the prose resolved
/// beneath it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Discovered {
    pub name: Option<String>,
    pub number: Option<TopicNumber>,
    pub text: String,
}

/// Resolves `spec` against `chapter`.
///
/// Missing, empty or falsy fields contribute nothing. Objects in the outermost array are
/// reported as [Discovered] entries so the caller can turn them into topics.
pub fn resolve(chapter: &Object, spec: &PathSpec) -> Resolution {
    let (first, rest) = match spec.nested_keys.split_first() {
        Some(split) => split,
        None => {
            return Resolution {
                text: leaf_text(chapter, &spec.leaf_keys, 0),
                discovered: vec![],
            }
        }
    };

    let mut resolution = Resolution::default();
    for item in items(chapter, first) {
        let text = resolve_text(item, rest, &spec.leaf_keys, 1);
        resolution.text.push_str(&text);
        resolution.discovered.push(Discovered {
            name: item.get(NAME_KEY).and_then(label).map(Cow::into_owned),
            number: item.get(NUMBER_KEY).and_then(topic_number),
            text,
        });
    }
    resolution
}

fn resolve_text(node: &Object, nested_keys: &[&str], leaf_keys: &[&str], depth: usize) -> String {
    match nested_keys.split_first() {
        None => leaf_text(node, leaf_keys, depth),
        Some((first, rest)) => items(node, first)
            .into_iter()
            .map(|item| resolve_text(item, rest, leaf_keys, depth + 1))
            .collect(),
    }
}

/// The objects of the array at `node[key]`.
fn items<'v>(node: &'v Object, key: &str) -> Vec<&'v Object> {
    match node.get(key) {
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(|value| match value {
                Value::Object(object) => Some(object),
                other => {
                    warn!("skipping non-object item in '{}': {}", key, other);
                    None
                }
            })
            .collect_vec(),
        Some(value) if is_truthy(value) => {
            warn!("expected an array at '{}', found {}", key, value);
            vec![]
        }
        _ => {
            trace!("nothing to walk at '{}'", key);
            vec![]
        }
    }
}

fn leaf_text(node: &Object, leaf_keys: &[&str], depth: usize) -> String {
    let mut text = String::new();
    for key in leaf_keys {
        let value = match node.get(*key).and_then(prose) {
            Some(value) => value,
            None => continue,
        };
        let name = node.get(NAME_KEY).and_then(label);
        let label = match name {
            Some(name) if depth > 0 && *key != EXAMPLES_KEY => name,
            _ => Cow::Borrowed(*key),
        };
        text.push_str("\n\n**");
        text.push_str(&label);
        text.push_str("**:\n\n");
        text.push_str(&value);
    }
    text
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(values) => !values.is_empty(),
        Value::Object(object) => !object.is_empty(),
    }
}

fn prose(value: &Value) -> Option<Cow<'_, str>> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Array(values) => Some(Cow::Owned(values.iter().filter_map(prose).join("\n"))),
        other => Some(Cow::Owned(other.to_string())),
    }
}

fn label(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        _ => None,
    }
}

pub(crate) fn topic_number(value: &Value) -> Option<TopicNumber> {
    match value {
        Value::Number(n) => Some(match n.as_i64() {
            Some(i) => TopicNumber::Int(i),
            None => TopicNumber::Text(n.to_string()),
        }),
        Value::String(s) if !s.is_empty() => Some(TopicNumber::Text(s.clone())),
        _ => None,
    }
}
