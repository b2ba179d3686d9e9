use std::fmt;

use linear_map::LinearMap;

/// Value of a pass-through metadata or INFO entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InfoValue {
    Integer(i64),
    String(String),
}

impl fmt::Display for InfoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfoValue::Integer(value) => write!(f, "{}", value),
            InfoValue::String(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for InfoValue {
    fn from(value: i64) -> Self {
        InfoValue::Integer(value)
    }
}

impl From<&str> for InfoValue {
    fn from(value: &str) -> Self {
        InfoValue::String(value.to_owned())
    }
}

/// Ordered key-value attributes, keeping insertion order for output.
pub type Info = LinearMap<String, InfoValue>;
