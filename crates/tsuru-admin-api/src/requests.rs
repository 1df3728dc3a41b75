//! Request types for the API

use serde::{Deserialize, Serialize};

use crate::responses::TemplateData;

/// Body of `POST /iaas/templates` and `PUT /iaas/templates/{name}`
///
/// `iaas_name` is always serialized, an update sends it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRequest {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "IaaSName")]
    pub iaas_name: String,
    #[serde(rename = "Data")]
    pub data: Vec<TemplateData>,
}

/// Body of `DELETE /pool/{pool}/team`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolTeamsRequest {
    pub pool: String,
    pub teams: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_request_field_order() {
        let request = TemplateRequest {
            name: "my-tpl".into(),
            iaas_name: "ec2".into(),
            data: vec![
                TemplateData::new("zone", "xyz"),
                TemplateData::new("image", "ami-something"),
            ],
        };

        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(
            body,
            r#"{"Name":"my-tpl","IaaSName":"ec2","Data":[{"Name":"zone","Value":"xyz"},{"Name":"image","Value":"ami-something"}]}"#
        );
    }

    #[test]
    fn pool_teams_request_uses_lowercase_keys() {
        let request = PoolTeamsRequest {
            pool: "pool1".into(),
            teams: vec!["team1".into(), "team2".into()],
        };

        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(body, r#"{"pool":"pool1","teams":["team1","team2"]}"#);
    }
}
