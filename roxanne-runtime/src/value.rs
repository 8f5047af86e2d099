use std::{borrow::Cow, fmt};

use crate::stringify::GeneralNumber;

/// The outcome of evaluating one node.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'src> {
    None,
    Boolean(bool),
    Number(f64),
    /// Borrowed straight from a string literal, or owned when built at runtime.
    String(Cow<'src, str>),
    Array(Vec<Value<'src>>),
    /// Entries keep insertion order.
    Object(Vec<(String, Value<'src>)>),
}

impl Value<'_> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::None => ValueKind::None,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl<'src> From<&'src str> for Value<'src> {
    fn from(value: &'src str) -> Self {
        Value::String(Cow::Borrowed(value))
    }
}

impl From<String> for Value<'_> {
    fn from(value: String) -> Self {
        Value::String(Cow::Owned(value))
    }
}

/// General rendering: strings bare, numbers in shortest form.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "none"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{}", GeneralNumber(*n)),
            Value::String(s) => write!(f, "{s}"),
            Value::Array(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", Element(element))?;
                }
                write!(f, "]")
            }
            Value::Object(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {}", Element(value))?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// A value nested inside a container; strings are quoted there.
struct Element<'a, 'src>(&'a Value<'src>);

impl fmt::Display for Element<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => write!(f, "\"{s}\""),
            other => write!(f, "{other}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    None,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::None => "none",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kind_follows_payload() {
        assert_eq!(Value::None.kind(), ValueKind::None);
        assert_eq!(Value::from(true).kind(), ValueKind::Boolean);
        assert_eq!(Value::from(1.5).kind(), ValueKind::Number);
        assert_eq!(Value::from("hi").kind(), ValueKind::String);
        assert_eq!(Value::Array(vec![]).kind(), ValueKind::Array);
        assert_eq!(Value::Object(vec![]).kind(), ValueKind::Object);
    }

    #[test]
    fn borrowed_and_owned_strings_compare_equal() {
        assert_eq!(Value::from("abc"), Value::from("abc".to_string()));
    }

    #[test]
    fn display_uses_general_rendering() {
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(7.0).to_string(), "7");
        assert_eq!(Value::from("text").to_string(), "text");
        assert_eq!(Value::None.to_string(), "none");
    }

    #[test]
    fn containers_quote_nested_strings() {
        let array = Value::Array(vec![
            Value::from(1.0),
            Value::from(true),
            Value::Array(vec![Value::from("a")]),
        ]);
        assert_eq!(array.to_string(), r#"[1, true, ["a"]]"#);

        let object = Value::Object(vec![
            ("name".to_string(), Value::from("rox")),
            ("age".to_string(), Value::from(3.0)),
        ]);
        assert_eq!(object.to_string(), r#"{name: "rox", age: 3}"#);
    }

    #[test]
    fn only_numbers_convert_to_f64() {
        assert_eq!(Value::from(2.0).as_number(), Some(2.0));
        assert_eq!(Value::from(false).as_number(), None);
    }
}
