/// A parsed text-format value.
///
/// Integers that fit a 64-bit signed range stay integral; anything written
/// with a decimal point or exponent is a float.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Object(Object),
    Array(Vec<Value>),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The value rendered as plain text, the way a lenient loader reads a
    /// field: strings pass through unquoted, everything else serializes.
    /// `Null` renders as the literal placeholder `"null"`.
    pub fn display_string(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            other => super::to_text(other),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// An insertion-ordered string-keyed map.
///
/// Keys are unique: re-inserting an existing key overwrites the value in
/// place and keeps the original position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    entries: Vec<(String, Value)>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Fetch `key` as a mutable nested object, creating (or replacing a
    /// non-object value with) an empty one when needed.
    pub fn ensure_object_mut(&mut self, key: &str) -> &mut Object {
        let idx = match self.entries.iter().position(|(k, _)| k == key) {
            Some(i) => {
                if !matches!(self.entries[i].1, Value::Object(_)) {
                    self.entries[i].1 = Value::Object(Object::new());
                }
                i
            }
            None => {
                self.entries
                    .push((key.to_string(), Value::Object(Object::new())));
                self.entries.len() - 1
            }
        };
        match &mut self.entries[idx].1 {
            Value::Object(obj) => obj,
            _ => unreachable!("entry was just set to an object"),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut obj = Object::new();
        for (k, v) in iter {
            obj.insert(k, v);
        }
        obj
    }
}
