use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A person's preference, keyed by a dotted name such as
/// `org.alfresco.share.sites.favourites`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preference {
    pub id: String,
    pub value: Value,
}

impl Preference {
    #[must_use]
    pub fn new(id: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { id: id.into(), value: value.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::Preference;

    #[test]
    fn value_keeps_its_json_type() {
        let json = serde_json::to_value(Preference::new("org.example.flag", true)).unwrap();
        assert_eq!(json, serde_json::json!({"id": "org.example.flag", "value": true}));
    }
}
