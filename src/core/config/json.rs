//! Flattening of JSON documents into configuration key/value pairs.
//!
//! Nested objects join their keys with `:`; array elements use their index.
//! `{"Db": {"Hosts": ["a", "b"]}}` becomes `Db:Hosts:0 = a`, `Db:Hosts:1 = b`.
//!
//! Documents are read into `Node` rather than `serde_json::Value`, which
//! keeps every object member in document order, repeated keys included.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::core::constants::KEY_DELIMITER;

/// A JSON value with object members kept as written.
#[derive(Debug, Clone, PartialEq)]
enum Node {
    Null,
    Scalar(String),
    Array(Vec<Node>),
    Object(Vec<(String, Node)>),
}

impl Node {
    fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Scalar(_) => "a scalar",
            Node::Array(_) => "an array",
            Node::Object(_) => "an object",
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Node, E> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Node, E> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Node, E> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Node, E> {
        // Same rendering serde_json uses for its own numbers.
        let text = serde_json::Number::from_f64(v)
            .map(|n| n.to_string())
            .unwrap_or_else(|| v.to_string());
        Ok(Node::Scalar(text))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Node, E> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Node, E> {
        Ok(Node::Scalar(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Node, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Node::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Node, A::Error> {
        let mut members = Vec::new();
        while let Some((key, value)) = map.next_entry::<String, Node>()? {
            members.push((key, value));
        }
        Ok(Node::Object(members))
    }
}

/// Parse and flatten JSON text.
///
/// Keys are returned in document order. The root must be an object. Two
/// keys that flatten to the same name, compared case-insensitively, are
/// rejected, whether they repeat exactly or differ only by case.
pub fn parse(text: &str) -> Result<Vec<(String, String)>, String> {
    let root: Node = serde_json::from_str(text).map_err(|e| e.to_string())?;
    let members = match root {
        Node::Object(members) => members,
        other => {
            return Err(format!(
                "top-level JSON element must be an object, found {}",
                other.kind()
            ))
        }
    };

    let mut out = Vec::new();
    let mut seen = BTreeMap::new();
    for (key, value) in members {
        visit(key, value, &mut out, &mut seen)?;
    }
    Ok(out)
}

fn visit(
    prefix: String,
    node: Node,
    out: &mut Vec<(String, String)>,
    seen: &mut BTreeMap<String, String>,
) -> Result<(), String> {
    match node {
        Node::Object(members) if !members.is_empty() => {
            for (key, child) in members {
                visit(join(&prefix, &key), child, out, seen)?;
            }
            Ok(())
        }
        Node::Array(items) if !items.is_empty() => {
            for (index, child) in items.into_iter().enumerate() {
                visit(join(&prefix, &index.to_string()), child, out, seen)?;
            }
            Ok(())
        }
        // Empty containers still define their key.
        Node::Object(_) | Node::Array(_) | Node::Null => emit(prefix, String::new(), out, seen),
        Node::Scalar(s) => emit(prefix, s, out, seen),
    }
}

fn emit(
    key: String,
    value: String,
    out: &mut Vec<(String, String)>,
    seen: &mut BTreeMap<String, String>,
) -> Result<(), String> {
    if let Some(existing) = seen.insert(key.to_lowercase(), key.clone()) {
        return Err(format!("duplicate key '{}' (conflicts with '{}')", key, existing));
    }
    out.push((key, value));
    Ok(())
}

fn join(prefix: &str, key: &str) -> String {
    format!("{}{}{}", prefix, KEY_DELIMITER, key)
}
