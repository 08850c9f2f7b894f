//! External process plumbing. Every download, extraction and Gradle invocation goes through a
//! [`CommandRunner`], so the sequence of commands a run issues can be observed (and replaced) as
//! a whole.
use crate::command_message;
use std::ffi::{OsStr, OsString};
use std::fmt::{self, Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("`{program}` was not found on PATH or is not executable")]
    NotFound { program: String },
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` failed with {status}")]
    Failed { command: String, status: String },
}

/// A program invocation: program, arguments and an optional working directory for the child.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellCommand {
    program: OsString,
    args: Vec<OsString>,
    current_dir: Option<PathBuf>,
}

impl ShellCommand {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_owned(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_owned()));
        self
    }

    /// Run the child inside `dir`. The parent's working directory is left untouched.
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn get_program(&self) -> &OsStr {
        &self.program
    }

    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    pub fn get_current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }
}

impl Display for ShellCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

fn quote(part: &OsStr) -> String {
    let lossy = part.to_string_lossy();
    match shlex::try_quote(&lossy) {
        Ok(quoted) => quoted.into_owned(),
        Err(_) => lossy.into_owned(),
    }
}

/// Runs external commands to completion.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait CommandRunner {
    fn run(&mut self, command: &ShellCommand) -> Result<(), ProcessError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &mut R {
    fn run(&mut self, command: &ShellCommand) -> Result<(), ProcessError> {
        (**self).run(command)
    }
}

/// Runs commands as real child processes, echoing each one before it starts. The child's stdout
/// is redirected to our stderr; it blocks until the child exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &ShellCommand) -> Result<(), ProcessError> {
        command_message!("{command}");

        let program =
            which::which(command.get_program()).map_err(|_| ProcessError::NotFound {
                program: command.get_program().to_string_lossy().into_owned(),
            })?;
        tracing::debug!(program = %program.display(), "running {command}");

        let mut child = Command::new(&program);
        child
            .args(command.get_args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::from(io::stderr()))
            .stderr(Stdio::inherit());
        if let Some(dir) = command.get_current_dir() {
            child.current_dir(dir);
        }

        check_status(child.status(), command)
    }
}

pub fn check_status(
    status: io::Result<ExitStatus>,
    command: &ShellCommand,
) -> Result<(), ProcessError> {
    match status {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(ProcessError::Failed {
            command: command.to_string(),
            status: status.to_string(),
        }),
        Err(source) => Err(ProcessError::Spawn {
            command: command.to_string(),
            source,
        }),
    }
}
