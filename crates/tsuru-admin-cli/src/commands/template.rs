//! IaaS machine template commands

use std::io::Write;

use async_trait::async_trait;
use clap::Args;
use tsuru_admin_api::{Template, TemplateData, TemplateRequest};
use tsuru_admin_client::{HttpClient, Method, escape};

use crate::error::{CommandError, Result};
use crate::manager::{Command, Context, Describe, Info};
use crate::table::{Table, key_value_lines};

/// Parse `name=value` arguments; the value may be empty
fn parse_params(params: &[String]) -> Result<Vec<TemplateData>> {
    params
        .iter()
        .map(|param| {
            param
                .split_once('=')
                .map(|(name, value)| TemplateData::new(name, value))
                .ok_or_else(|| CommandError::usage(format!("invalid parameter: {param}")))
        })
        .collect()
}

#[derive(Debug, Args)]
pub struct TemplateList {}

impl Describe for TemplateList {
    const INFO: Info = Info::new(
        "template-list",
        "template-list",
        "List all machine templates.",
        0,
    );
}

#[async_trait(?Send)]
impl Command for TemplateList {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()> {
        let templates: Vec<Template> = client.get_list("/iaas/templates").await?;
        let mut table = Table::new(["Name", "IaaS", "Params"]).with_line_separator(true);
        for template in &templates {
            let params = key_value_lines(
                template
                    .data
                    .iter()
                    .map(|d| (d.name.as_str(), d.value.as_str())),
            );
            table.add_row([
                template.name.as_str(),
                template.iaas_name.as_str(),
                params.as_str(),
            ]);
        }
        write!(ctx.stdout, "{table}")?;
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct TemplateAdd {}

impl Describe for TemplateAdd {
    const INFO: Info = Info::new(
        "template-add",
        "template-add <name> <iaas> <param>=<value>...",
        "Add a new machine template.",
        3,
    );
}

#[async_trait(?Send)]
impl Command for TemplateAdd {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()> {
        let request = TemplateRequest {
            name: ctx.args[0].clone(),
            iaas_name: ctx.args[1].clone(),
            data: parse_params(&ctx.args[2..])?,
        };
        client
            .send_json(Method::POST, "/iaas/templates", &request)
            .await?;
        writeln!(ctx.stdout, "Template successfully added.")?;
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct TemplateUpdate {}

impl Describe for TemplateUpdate {
    const INFO: Info = Info::new(
        "template-update",
        "template-update <name> <param>=<value>...",
        "Update an existing machine template. An empty value removes the parameter.",
        2,
    );
}

#[async_trait(?Send)]
impl Command for TemplateUpdate {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()> {
        let name = ctx.args[0].clone();
        let request = TemplateRequest {
            name: name.clone(),
            iaas_name: String::new(),
            data: parse_params(&ctx.args[1..])?,
        };
        client
            .send_json(Method::PUT, &format!("/iaas/templates/{}", escape(&name)), &request)
            .await?;
        writeln!(ctx.stdout, "Template successfully updated.")?;
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct TemplateRemove {}

impl Describe for TemplateRemove {
    const INFO: Info = Info::new(
        "template-remove",
        "template-remove <name>",
        "Remove an existing machine template.",
        1,
    );
}

#[async_trait(?Send)]
impl Command for TemplateRemove {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()> {
        let name = &ctx.args[0];
        client.delete(&format!("/iaas/templates/{}", escape(name))).await?;
        writeln!(ctx.stdout, "Template successfully removed.")?;
        Ok(())
    }
}
