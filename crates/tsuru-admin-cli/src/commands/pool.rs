//! Pool commands
//!
//! Making a pool default when another default already exists is refused by
//! the server with 412 Precondition Failed. The user is then asked to
//! confirm and the same request is sent again with `force=true`.

use std::io::Write;

use async_trait::async_trait;
use clap::Args;
use tracing::debug;
use tsuru_admin_api::{Pool, PoolTeamsRequest};
use tsuru_admin_client::{Form, HttpClient, Method, escape};

use crate::error::Result;
use crate::flags::TriState;
use crate::manager::{Command, Context, Describe, Info};
use crate::prompt;
use crate::table::Table;

/// Messages printed by a request that may need a forced retry
struct Outcome {
    success: &'static str,
    aborted: &'static str,
}

async fn send_with_confirmation(
    ctx: &mut Context<'_>,
    client: &HttpClient,
    method: Method,
    path: &str,
    mut form: Form,
    outcome: Outcome,
) -> Result<()> {
    match client.send_form(method.clone(), path, &form).await {
        Ok(_) => {}
        Err(err) if err.is_precondition_failed() => {
            debug!(path, "default pool conflict, asking for confirmation");
            write!(
                ctx.stdout,
                "WARNING: Default pool already exist. Do you want change to {} pool? (y/n) ",
                ctx.args[0]
            )?;
            ctx.stdout.flush()?;
            let answer = prompt::read_token(ctx.stdin)?;
            if !prompt::is_affirmative(&answer) {
                writeln!(ctx.stdout, "{}", outcome.aborted)?;
                return Ok(());
            }
            form.set("force", "true");
            client.send_form(method, path, &form).await?;
        }
        Err(err) => return Err(err.into()),
    }
    writeln!(ctx.stdout, "{}", outcome.success)?;
    Ok(())
}

#[derive(Debug, Args)]
pub struct PoolList {}

impl Describe for PoolList {
    const INFO: Info = Info::new("pool-list", "pool-list", "List all pools.", 0);
}

#[async_trait(?Send)]
impl Command for PoolList {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()> {
        let mut pools: Vec<Pool> = client.get_list("/pools").await?;
        pools.sort_by(|a, b| a.name.cmp(&b.name));
        let mut table = Table::new(["Pool", "Kind", "Teams"]).with_line_separator(true);
        for pool in &pools {
            table.add_row([
                pool.name.clone(),
                pool.kind().to_string(),
                pool.teams.join(", "),
            ]);
        }
        write!(ctx.stdout, "{table}")?;
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct PoolAdd {
    /// Make pool public (all teams can use it)
    #[arg(short = 'p', long)]
    public: bool,

    /// Make pool default (when none is specified during app-create this pool will be used)
    #[arg(short = 'd', long = "default")]
    default_pool: bool,

    /// Force overwrite default pool
    #[arg(short = 'f', long = "force")]
    force_default: bool,
}

impl Describe for PoolAdd {
    const INFO: Info = Info::new(
        "pool-add",
        "pool-add <pool> [-p/--public] [-d/--default] [-f/--force]",
        "Adds a new pool. Each node belongs to one pool, and every unit of an \
         application is spawned in nodes of the pool chosen when it was created.",
        1,
    );
}

#[async_trait(?Send)]
impl Command for PoolAdd {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()> {
        let mut form = Form::new();
        form.set("name", ctx.args[0].as_str())
            .set("public", self.public.to_string())
            .set("default", self.default_pool.to_string())
            .set("force", self.force_default.to_string());
        send_with_confirmation(
            ctx,
            client,
            Method::POST,
            "/pools",
            form,
            Outcome {
                success: "Pool successfully registered.",
                aborted: "Pool add aborted.",
            },
        )
        .await
    }
}

#[derive(Debug, Args)]
pub struct PoolUpdate {
    /// Make pool public (all teams can use it)
    #[arg(long, value_name = "BOOL")]
    public: Option<TriState>,

    /// Make pool default (when none is specified during app-create this pool will be used)
    #[arg(long = "default", value_name = "BOOL")]
    default_pool: Option<TriState>,

    /// Force pool to be default.
    #[arg(short = 'f', long = "force")]
    force_default: bool,
}

impl Describe for PoolUpdate {
    const INFO: Info = Info::new(
        "pool-update",
        "pool-update <pool> [--public=true/false] [--default=true/false] [-f/--force]",
        "Updates attributes for a pool.",
        1,
    );
}

#[async_trait(?Send)]
impl Command for PoolUpdate {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()> {
        let path = format!("/pools/{}", escape(&ctx.args[0]));
        let mut form = Form::new();
        form.set("public", self.public.unwrap_or_default().form_value())
            .set("default", self.default_pool.unwrap_or_default().form_value())
            .set("force", self.force_default.to_string());
        send_with_confirmation(
            ctx,
            client,
            Method::PUT,
            &path,
            form,
            Outcome {
                success: "Pool successfully updated.",
                aborted: "Pool update aborted.",
            },
        )
        .await
    }
}

#[derive(Debug, Args)]
pub struct PoolRemove {
    /// Don't ask for confirmation
    #[arg(short = 'y', long = "assume-yes")]
    assume_yes: bool,
}

impl Describe for PoolRemove {
    const INFO: Info = Info::new(
        "pool-remove",
        "pool-remove <pool> [-y]",
        "Remove an existing pool.",
        1,
    );
}

#[async_trait(?Send)]
impl Command for PoolRemove {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()> {
        let pool = ctx.args[0].clone();
        if !self.assume_yes {
            let question = format!("Are you sure you want to remove \"{pool}\" pool?");
            if !prompt::confirm(ctx.stdin, ctx.stdout, &question)? {
                return Ok(());
            }
        }
        client.delete(&format!("/pools/{}", escape(&pool))).await?;
        writeln!(ctx.stdout, "Pool successfully removed.")?;
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct PoolTeamsAdd {}

impl Describe for PoolTeamsAdd {
    const INFO: Info = Info::new(
        "pool-teams-add",
        "pool-teams-add <pool> <teams>...",
        "Adds teams to a pool. This will make the specified pool available when \
         creating a new application for one of the added teams.",
        2,
    );
}

#[async_trait(?Send)]
impl Command for PoolTeamsAdd {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()> {
        let mut form = Form::new();
        for team in &ctx.args[1..] {
            form.add("team", team.as_str());
        }
        let path = format!("/pools/{}/team", escape(&ctx.args[0]));
        client.send_form(Method::POST, &path, &form).await?;
        writeln!(ctx.stdout, "Teams successfully registered.")?;
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct PoolTeamsRemove {}

impl Describe for PoolTeamsRemove {
    const INFO: Info = Info::new(
        "pool-teams-remove",
        "pool-teams-remove <pool> <teams>...",
        "Removes teams from a pool. Listed teams will be no longer able to use this \
         pool when creating a new application.",
        2,
    );
}

#[async_trait(?Send)]
impl Command for PoolTeamsRemove {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()> {
        let request = PoolTeamsRequest {
            pool: ctx.args[0].clone(),
            teams: ctx.args[1..].to_vec(),
        };
        let path = format!("/pool/{}/team", escape(&request.pool));
        client.send_json(Method::DELETE, &path, &request).await?;
        writeln!(ctx.stdout, "Teams successfully removed.")?;
        Ok(())
    }
}
