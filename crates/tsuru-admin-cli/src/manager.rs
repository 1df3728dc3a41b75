//! Command registry and dispatch
//!
//! Every subcommand is registered once in a [`Registry`]. The [`Manager`]
//! turns the registry into a clap command tree, parses argv, checks the
//! minimum number of positional arguments and runs the selected command
//! against a [`Context`] holding the process streams.

use std::ffi::OsString;
use std::io::{BufRead, Write};

use async_trait::async_trait;
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches};
use tracing::debug;
use tsuru_admin_client::HttpClient;

use crate::config::Config;
use crate::error::{CommandError, Result};

const ARGS: &str = "args";
const TARGET: &str = "target";

/// Static description of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Info {
    pub name: &'static str,
    pub usage: &'static str,
    pub desc: &'static str,
    pub min_args: usize,
    pub aliases: &'static [&'static str],
}

impl Info {
    #[must_use]
    pub const fn new(
        name: &'static str,
        usage: &'static str,
        desc: &'static str,
        min_args: usize,
    ) -> Self {
        Self {
            name,
            usage,
            desc,
            min_args,
            aliases: &[],
        }
    }

    #[must_use]
    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }
}

/// Streams and positional arguments handed to a running command
pub struct Context<'a> {
    pub args: Vec<String>,
    pub stdin: &'a mut dyn BufRead,
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
}

/// A subcommand that performs one exchange with the API
#[async_trait(?Send)]
pub trait Command {
    async fn run(&self, ctx: &mut Context<'_>, client: &HttpClient) -> Result<()>;
}

/// Metadata attached to a command type
pub trait Describe {
    const INFO: Info;
}

type Build = fn(&ArgMatches) -> std::result::Result<Box<dyn Command>, clap::Error>;

fn build<T>(matches: &ArgMatches) -> std::result::Result<Box<dyn Command>, clap::Error>
where
    T: Command + clap::FromArgMatches + 'static,
{
    Ok(Box::new(T::from_arg_matches(matches)?))
}

/// Registry entry: metadata, flag definitions and a constructor
pub struct Entry {
    pub info: Info,
    augment: fn(clap::Command) -> clap::Command,
    build: Build,
}

impl Entry {
    #[must_use]
    pub fn of<T>() -> Self
    where
        T: Command + Describe + clap::Args + 'static,
    {
        Self {
            info: T::INFO,
            augment: T::augment_args,
            build: build::<T>,
        }
    }

    fn subcommand(&self) -> clap::Command {
        let command = clap::Command::new(self.info.name)
            .about(self.info.desc)
            .override_usage(self.info.usage)
            .visible_aliases(self.info.aliases.iter().copied())
            .arg(
                Arg::new(ARGS)
                    .value_name("ARGS")
                    .num_args(0..)
                    .action(ArgAction::Append),
            );
        (self.augment)(command)
    }
}

/// Table of every command known to the binary
#[derive(Default)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn register<T>(mut self) -> Self
    where
        T: Command + Describe + clap::Args + 'static,
    {
        self.entries.push(Entry::of::<T>());
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.info.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

/// Parses argv and runs the selected command
pub struct Manager {
    name: &'static str,
    version: &'static str,
    registry: Registry,
}

impl Manager {
    #[must_use]
    pub fn new(name: &'static str, version: &'static str, registry: Registry) -> Self {
        Self {
            name,
            version,
            registry,
        }
    }

    /// The full clap command tree
    #[must_use]
    pub fn command(&self) -> clap::Command {
        let root = clap::Command::new(self.name)
            .version(self.version)
            .about("Administrative client for the tsuru PaaS")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                Arg::new(TARGET)
                    .long("target")
                    .global(true)
                    .value_name("URL")
                    .help("Address of the tsuru API server"),
            );
        self.registry
            .iter()
            .fold(root, |root, entry| root.subcommand(entry.subcommand()))
    }

    /// Run one command and return the process exit code
    pub async fn run<I, T>(
        &self,
        argv: I,
        config: &Config,
        stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> i32
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = match self.command().try_get_matches_from(argv) {
            Ok(matches) => matches,
            Err(err) => return report_clap_error(&err, stdout, stderr),
        };
        let Some((name, sub)) = matches.subcommand() else {
            let _ = writeln!(stderr, "{}", self.command().render_usage());
            return 2;
        };
        let Some(entry) = self.registry.get(name) else {
            let _ = writeln!(stderr, "Error: command {name:?} does not exist.");
            return 2;
        };

        let command = match (entry.build)(sub) {
            Ok(command) => command,
            Err(err) => return report_clap_error(&err, stdout, stderr),
        };
        let args: Vec<String> = sub
            .get_many::<String>(ARGS)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        let config = config
            .clone()
            .with_target(matches.get_one::<String>(TARGET).map(String::as_str));

        debug!(command = name, args = ?args, "dispatching command");
        let mut ctx = Context {
            args,
            stdin,
            stdout,
            stderr,
        };
        let result = self.dispatch(entry, command.as_ref(), &mut ctx, &config).await;
        let _ = ctx.stdout.flush();

        match result {
            Ok(()) => 0,
            Err(err) => {
                let _ = writeln!(ctx.stderr, "Error: {err}");
                if matches!(err, CommandError::Usage(_)) {
                    let _ = writeln!(ctx.stderr, "\nUsage: {} {}", self.name, entry.info.usage);
                }
                err.exit_code()
            }
        }
    }

    async fn dispatch(
        &self,
        entry: &Entry,
        command: &dyn Command,
        ctx: &mut Context<'_>,
        config: &Config,
    ) -> Result<()> {
        if ctx.args.len() < entry.info.min_args {
            return Err(CommandError::usage(format!(
                "not enough arguments to call {}.",
                entry.info.name
            )));
        }
        let client = config.client()?;
        command.run(ctx, &client).await
    }
}

fn report_clap_error(err: &clap::Error, stdout: &mut dyn Write, stderr: &mut dyn Write) -> i32 {
    let text = err.render().to_string();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(stdout, "{text}");
            0
        }
        _ => {
            let _ = write!(stderr, "{text}");
            2
        }
    }
}
