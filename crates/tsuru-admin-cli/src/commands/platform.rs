//! Platform commands
//!
//! Adding or updating a platform builds an image on the server; the build
//! log is streamed back in the response body and echoed as it arrives.

use std::io::Write;

use async_trait::async_trait;
use clap::Args;
use tsuru_admin_client::{ClientError, Form, HttpClient, Method, Response, escape};

use crate::error::{CommandError, Result};
use crate::manager::{Command, Context, Describe, Info};

/// Marker the server writes after a successful image build
const BUILD_OK: &[u8] = b"\nOK!\n";

/// Copy the response body to `out` chunk by chunk, returning everything seen
async fn stream_body(mut response: Response, out: &mut dyn Write) -> Result<Vec<u8>> {
    let mut seen = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(ClientError::from)? {
        out.write_all(&chunk)?;
        out.flush()?;
        seen.extend_from_slice(&chunk);
    }
    Ok(seen)
}

#[derive(Debug, Args)]
pub struct PlatformAdd {
    /// The dockerfile url to create a platform
    #[arg(short = 'd', long, default_value = "")]
    dockerfile: String,
}

impl Describe for PlatformAdd {
    const INFO: Info = Info::new(
        "platform-add",
        "platform-add <platform name> [--dockerfile/-d Dockerfile]",
        "Add new platform to tsuru.",
        1,
    );
}

#[async_trait(?Send)]
impl Command for PlatformAdd {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()> {
        let mut form = Form::new();
        form.set("name", ctx.args[0].as_str())
            .set("dockerfile", self.dockerfile.as_str());
        let response = client.send_form(Method::POST, "/platforms", &form).await?;
        let output = stream_body(response, ctx.stdout).await?;
        if !output.ends_with(BUILD_OK) {
            return Err(CommandError::Failed("Failed to add new platform.".into()));
        }
        writeln!(ctx.stdout, "Platform successfully added!")?;
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct PlatformUpdate {
    /// The dockerfile url to update a platform
    #[arg(short = 'd', long, default_value = "")]
    dockerfile: String,
}

impl Describe for PlatformUpdate {
    const INFO: Info = Info::new(
        "platform-update",
        "platform-update <platform name> [--dockerfile/-d Dockerfile]",
        "Update a platform to tsuru.",
        1,
    );
}

#[async_trait(?Send)]
impl Command for PlatformUpdate {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()> {
        let name = &ctx.args[0];
        let mut form = Form::new();
        form.set("a", "1").set("dockerfile", self.dockerfile.as_str());
        let response = client
            .send_form(Method::PUT, &format!("/platforms/{}", escape(name)), &form)
            .await?;
        stream_body(response, ctx.stdout).await?;
        writeln!(ctx.stdout, "Platform successfully updated!")?;
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct PlatformRemove {}

impl Describe for PlatformRemove {
    const INFO: Info = Info::new(
        "platform-remove",
        "platform-remove <platform name>",
        "Remove a platform from tsuru.",
        1,
    );
}

#[async_trait(?Send)]
impl Command for PlatformRemove {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()> {
        let name = &ctx.args[0];
        client.delete(&format!("/platforms/{}", escape(name))).await?;
        writeln!(ctx.stdout, "Platform successfully removed!")?;
        Ok(())
    }
}
