//! Helpers for running commands against in-memory streams

use std::io::Cursor;

use httpmock::MockServer;
use tsuru_admin_client::HttpClient;

use crate::error::Result;
use crate::manager::{Command, Context};

pub(crate) struct Run {
    pub result: Result<()>,
    pub stdout: String,
    pub stderr: String,
}

pub(crate) fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::new(server.base_url()).unwrap()
}

pub(crate) async fn run_with_input(
    command: &dyn Command,
    server: &MockServer,
    args: &[&str],
    input: &str,
) -> Run {
    let client = client_for(server);
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let result = {
        let mut ctx = Context {
            args: args.iter().map(|arg| (*arg).to_string()).collect(),
            stdin: &mut stdin,
            stdout: &mut stdout,
            stderr: &mut stderr,
        };
        command.run(&mut ctx, &client).await
    };
    Run {
        result,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

pub(crate) async fn run(command: &dyn Command, server: &MockServer, args: &[&str]) -> Run {
    run_with_input(command, server, args, "").await
}
