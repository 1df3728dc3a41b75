//! Plan and router commands

use std::io::Write;

use async_trait::async_trait;
use clap::Args;
use tsuru_admin_api::{Plan, PlanRouter};
use tsuru_admin_client::{HttpClient, Method, escape};

use crate::error::Result;
use crate::manager::{Command, Context, Describe, Info};
use crate::table::Table;

#[derive(Debug, Args)]
pub struct PlanCreate {
    /// Amount of available memory for units in bytes
    #[arg(short = 'm', long, default_value_t = 0)]
    memory: i64,

    /// Amount of available swap space for units in bytes
    #[arg(short = 's', long, default_value_t = 0)]
    swap: i64,

    /// Relative cpu share each unit will have available
    #[arg(short = 'c', long, required = true)]
    cpushare: i64,

    /// Router used by applications on this plan
    #[arg(short = 'r', long)]
    router: Option<String>,

    /// Set plan as default
    #[arg(short = 'd', long = "default")]
    default_plan: bool,
}

impl Describe for PlanCreate {
    const INFO: Info = Info::new(
        "plan-create",
        "plan-create <name> -c cpushare [-m memory] [-s swap] [-r router] [--default]",
        "Creates a new plan for being used when creating apps.",
        1,
    );
}

#[async_trait(?Send)]
impl Command for PlanCreate {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()> {
        let plan = Plan {
            name: ctx.args[0].clone(),
            memory: self.memory,
            swap: self.swap,
            cpushare: self.cpushare,
            default: self.default_plan,
            router: self.router.clone().unwrap_or_default(),
        };
        client.send_json(Method::POST, "/plans", &plan).await?;
        writeln!(ctx.stdout, "Plan successfully created!")?;
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct PlanList {}

impl Describe for PlanList {
    const INFO: Info = Info::new("plan-list", "plan-list", "List available plans.", 0);
}

#[async_trait(?Send)]
impl Command for PlanList {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()> {
        let plans: Vec<Plan> = client.get_list("/plans").await?;
        let mut table = Table::new(["Name", "Memory", "Swap", "Cpu Share", "Router", "Default"]);
        for plan in &plans {
            table.add_row([
                plan.name.clone(),
                plan.memory.to_string(),
                plan.swap.to_string(),
                plan.cpushare.to_string(),
                plan.router.clone(),
                plan.default.to_string(),
            ]);
        }
        write!(ctx.stdout, "{table}")?;
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct PlanRemove {}

impl Describe for PlanRemove {
    const INFO: Info = Info::new(
        "plan-remove",
        "plan-remove <name>",
        "Removes an existing plan. It will no longer be available for newly created apps.",
        1,
    );
}

#[async_trait(?Send)]
impl Command for PlanRemove {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()> {
        let name = &ctx.args[0];
        client.delete(&format!("/plans/{}", escape(name))).await?;
        writeln!(ctx.stdout, "Plan successfully removed!")?;
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct RouterList {}

impl Describe for RouterList {
    const INFO: Info = Info::new(
        "router-list",
        "router-list",
        "List all routers available for plan creation.",
        0,
    );
}

#[async_trait(?Send)]
impl Command for RouterList {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()> {
        let routers: Vec<PlanRouter> = client.get_list("/plans/routers").await?;
        let mut table = Table::new(["Name", "Type"]);
        for router in &routers {
            table.add_row([router.name.as_str(), router.kind.as_str()]);
        }
        write!(ctx.stdout, "{table}")?;
        Ok(())
    }
}
