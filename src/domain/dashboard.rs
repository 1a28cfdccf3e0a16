// Dashboard domain model
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const DATASOURCE_TYPE: &str = "datasource";
pub const QUERY_TYPE: &str = "query";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Dashboard {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default)]
    pub templating: Templating,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Templating {
    #[serde(default)]
    pub list: Vec<Template>,
}

/// A single templating variable declaration.
///
/// `query` and `datasource` are written either as plain strings or, in
/// newer documents, as objects. Objects are reduced to the member that
/// carries the same meaning (`query` and `uid` respectively).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Template {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(default, deserialize_with = "query_string")]
    pub query: String,
    #[serde(default, deserialize_with = "datasource_string")]
    pub datasource: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub label: String,
    #[serde(default)]
    pub multi: bool,
    #[serde(rename = "allValue", default, deserialize_with = "lenient_string")]
    pub all_value: String,
}

impl Dashboard {
    pub fn new(title: impl Into<String>, templates: Vec<Template>) -> Self {
        Self {
            title: title.into(),
            templating: Templating { list: templates },
        }
    }

    /// Datasource plugin families declared by datasource-selector templates,
    /// in declaration order and without duplicates.
    pub fn datasource_kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = Vec::new();
        for template in &self.templating.list {
            if template.kind == DATASOURCE_TYPE && !kinds.contains(&template.query.as_str()) {
                kinds.push(template.query.as_str());
            }
        }
        kinds
    }

    pub fn template(&self, name: &str) -> Option<&Template> {
        self.templating.list.iter().find(|t| t.name == name)
    }
}

impl Template {
    pub fn datasource_selector(query: impl Into<String>) -> Self {
        Self {
            kind: DATASOURCE_TYPE.to_string(),
            query: query.into(),
            ..Self::default()
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn query_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(flatten_value(Option::<Value>::deserialize(deserializer)?, "query"))
}

fn datasource_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(flatten_value(Option::<Value>::deserialize(deserializer)?, "uid"))
}

fn flatten_value(value: Option<Value>, member: &str) -> String {
    match value {
        Some(Value::String(s)) => s,
        Some(Value::Object(map)) => map
            .get(member)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    }
}
