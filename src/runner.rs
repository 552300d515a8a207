//! Process boundary between the permission tool and the host.

use std::io;
use std::process::{Command, Stdio};

use crate::Invocation;

/// Runs an argument vector to completion and reports the outcome.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; every call is independent and
/// shares no mutable state with other calls.
///
/// # Errors
///
/// Returns the launch error unchanged if the process could not be started.
/// An executable that does not exist must surface as
/// [`io::ErrorKind::NotFound`].
pub trait CommandRunner: Send + Sync {
    /// Run `argv[0]` with the remaining elements as arguments, blocking until it exits.
    fn run(&self, argv: &[String]) -> io::Result<Invocation>;
}

/// Runs commands as real child processes with captured output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> io::Result<Invocation> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty argument vector"))?;

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        Ok(Invocation {
            argv: argv.to_vec(),
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, argv: &[String]) -> io::Result<Invocation> {
        (**self).run(argv)
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for Box<R> {
    fn run(&self, argv: &[String]) -> io::Result<Invocation> {
        (**self).run(argv)
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for std::sync::Arc<R> {
    fn run(&self, argv: &[String]) -> io::Result<Invocation> {
        (**self).run(argv)
    }
}
