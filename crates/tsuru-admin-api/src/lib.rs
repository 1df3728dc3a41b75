//! tsuru-admin-api: Wire types for the tsuru admin endpoints
//!
//! Contains the records returned by list endpoints and the bodies sent by
//! mutating commands. Field names follow the JSON the API server emits.

pub mod requests;
pub mod responses;

pub use requests::{PoolTeamsRequest, TemplateRequest};
pub use responses::{Machine, Plan, PlanRouter, Pool, Template, TemplateData};
