//! Response types for the API

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Go encodes nil maps and slices as `null`
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A machine created through an IaaS provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Iaas")]
    pub iaas: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "CreationParams", default, deserialize_with = "null_as_default")]
    pub creation_params: BTreeMap<String, String>,
}

/// Single name/value entry of a machine template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateData {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl TemplateData {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A named set of IaaS creation parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "IaaSName")]
    pub iaas_name: String,
    #[serde(rename = "Data", default, deserialize_with = "null_as_default")]
    pub data: Vec<TemplateData>,
}

/// A pool of nodes and the teams allowed to use it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Public", default)]
    pub public: bool,
    #[serde(rename = "Default", default)]
    pub default: bool,
    #[serde(rename = "Teams", default, deserialize_with = "null_as_default")]
    pub teams: Vec<String>,
}

impl Pool {
    /// Short label for how the pool is selected: `default`, `public` or empty
    #[must_use]
    pub fn kind(&self) -> &'static str {
        if self.default {
            "default"
        } else if self.public {
            "public"
        } else {
            ""
        }
    }
}

/// Resource plan applied to application units
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    #[serde(default)]
    pub memory: i64,
    #[serde(default)]
    pub swap: i64,
    #[serde(default)]
    pub cpushare: i64,
    #[serde(default)]
    pub default: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub router: String,
}

/// Router available to plans
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRouter {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}
