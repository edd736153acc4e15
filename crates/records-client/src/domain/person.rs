use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Person record served by the people backend
///
/// Fields are opaque: whatever the server sends is shown as-is, and a
/// missing field decodes to `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub age: Value,
}

impl Person {
    pub fn new(id: impl Into<Value>, name: impl Into<Value>, age: impl Into<Value>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age: age.into(),
        }
    }
}

/// Strings without quotes, `null` as nothing, everything else as JSON
fn write_field(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::String(s) => f.write_str(s),
        Value::Null => Ok(()),
        other => write!(f, "{other}"),
    }
}

/// Row text as shown in the people list: `"{id} {name} {age}"`
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_field(f, &self.id)?;
        f.write_str(" ")?;
        write_field(f, &self.name)?;
        f.write_str(" ")?;
        write_field(f, &self.age)
    }
}
