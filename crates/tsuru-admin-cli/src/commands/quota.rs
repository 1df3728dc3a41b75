//! Quota commands

use std::io::Write;

use async_trait::async_trait;
use clap::Args;
use tsuru_admin_client::{Form, HttpClient, Method, escape};

use crate::error::{CommandError, Result};
use crate::manager::{Command, Context, Describe, Info};

#[derive(Debug, Args)]
pub struct QuotaUpdate {
    /// The owner will have quotas changed
    #[arg(short = 'o', long)]
    owner: Option<String>,

    /// The number of quotas changed; -1 means unlimited
    #[arg(short = 'q', long, default_value_t = 0, allow_negative_numbers = true)]
    quota: i64,
}

impl Describe for QuotaUpdate {
    const INFO: Info = Info::new(
        "quota-update",
        "quota-update [-o/--owner owner] [-q/--quota quota]",
        "Update quotas.",
        0,
    );
}

#[async_trait(?Send)]
impl Command for QuotaUpdate {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()> {
        let owner = self
            .owner
            .as_deref()
            .filter(|owner| !owner.is_empty())
            .ok_or_else(|| CommandError::usage("an owner is required, use -o/--owner"))?;
        let mut form = Form::new();
        form.set("quota", self.quota.to_string());
        client
            .send_form(Method::PUT, &format!("/quota/{}", escape(owner)), &form)
            .await?;
        writeln!(ctx.stdout, "Quotas successfully changed!")?;
        Ok(())
    }
}
