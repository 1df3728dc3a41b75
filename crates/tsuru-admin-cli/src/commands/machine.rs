//! IaaS machine commands

use std::io::Write;

use async_trait::async_trait;
use clap::Args;
use tsuru_admin_api::Machine;
use tsuru_admin_client::{HttpClient, escape};

use crate::error::Result;
use crate::manager::{Command, Context, Describe, Info};
use crate::table::{Table, key_value_lines};

#[derive(Debug, Args)]
pub struct MachineList {}

impl Describe for MachineList {
    const INFO: Info = Info::new(
        "machine-list",
        "machine-list",
        "List all machines created using a IaaS provider.",
        0,
    );
}

#[async_trait(?Send)]
impl Command for MachineList {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()> {
        let machines: Vec<Machine> = client.get_list("/iaas/machines").await?;
        let mut table =
            Table::new(["Id", "IaaS", "Address", "Creation Params"]).with_line_separator(true);
        for machine in &machines {
            let params = key_value_lines(
                machine
                    .creation_params
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str())),
            );
            table.add_row([
                machine.id.as_str(),
                machine.iaas.as_str(),
                machine.address.as_str(),
                params.as_str(),
            ]);
        }
        write!(ctx.stdout, "{table}")?;
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct MachineDestroy {}

impl Describe for MachineDestroy {
    const INFO: Info = Info::new(
        "machine-destroy",
        "machine-destroy <machine id>",
        "Destroy an existing machine created using a IaaS.",
        1,
    )
    .with_aliases(&["machine-remove"]);
}

#[async_trait(?Send)]
impl Command for MachineDestroy {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()> {
        let id = &ctx.args[0];
        client.delete(&format!("/iaas/machines/{}", escape(id))).await?;
        writeln!(ctx.stdout, "Machine successfully destroyed.")?;
        Ok(())
    }
}
