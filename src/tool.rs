//! The permission applier: turns a grant request into a native tool run
//! and the run's outcome into a [`ToolError`].

use std::io;
use std::path::Path;

use crate::{CommandRunner, Invocation, RightsCollection, SystemRunner, ToolError, grant};

/// Name of the native permission executable.
pub const DEFAULT_TOOL_NAME: &str = "icacls";

/// Grants rights on directory trees by running the native permission tool.
///
/// Every call to [`set_rights`](Self::set_rights) spawns its own child
/// process and blocks until it exits. A large tree can take a long time
/// because the grant is applied recursively.
///
/// # Examples
///
/// ```rust,no_run
/// use icaclswrap::{PermissionTool, READ_DELETE};
/// use std::path::Path;
///
/// let tool = PermissionTool::new();
/// tool.set_rights(Path::new(r"C:\data\incoming"), "z428172", &READ_DELETE)?;
/// # Ok::<(), icaclswrap::ToolError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PermissionTool<R = SystemRunner> {
    tool_name: String,
    runner: R,
}

impl PermissionTool {
    /// A tool that runs `icacls` as a real child process.
    pub fn new() -> Self {
        Self {
            tool_name: DEFAULT_TOOL_NAME.to_string(),
            runner: SystemRunner,
        }
    }
}

impl Default for PermissionTool {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> PermissionTool<R> {
    /// Replace the process boundary, keeping the configured tool name.
    pub fn with_runner<S: CommandRunner>(self, runner: S) -> PermissionTool<S> {
        PermissionTool {
            tool_name: self.tool_name,
            runner,
        }
    }

    /// Use a different executable name or path.
    pub fn with_tool_name(mut self, tool_name: impl Into<String>) -> Self {
        self.tool_name = tool_name.into();
        self
    }

    /// The executable this tool runs.
    #[inline]
    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    /// Grant `username` the rights in `rights` on `path` and everything below it.
    ///
    /// # Errors
    ///
    /// - [`ToolError::Unavailable`] if the executable does not exist on this host
    /// - [`ToolError::FolderAccess`] if the path is missing or inaccessible
    /// - [`ToolError::InvalidParameter`] if the tool rejected the arguments
    /// - [`ToolError::UnknownIdentity`] if `username` cannot be resolved
    /// - [`ToolError::Unspecified`] for any other failure, including a zero exit
    ///   code accompanied by diagnostics
    /// - [`ToolError::Io`] if the process could not be launched for another reason
    pub fn set_rights(
        &self,
        path: &Path,
        username: &str,
        rights: &RightsCollection,
    ) -> Result<(), ToolError> {
        let argv = grant::command_line(&self.tool_name, path, username, rights);
        tracing::debug!(command = %argv.join(" "), rights = rights.description(), "running permission tool");

        let invocation = match self.runner.run(&argv) {
            Ok(invocation) => invocation,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::error!(tool = %self.tool_name, "permission tool not found");
                return Err(ToolError::Unavailable {
                    tool: self.tool_name.clone(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(status = invocation.status, "permission tool finished");

        check_for_errors(invocation, path, username).inspect_err(|e| {
            tracing::warn!(error = %e, "granting rights failed");
        })
    }
}

/// Classify a finished run. `path` and `username` are the request the run was for.
///
/// | Exit code | Diagnostics | Result |
/// |-----------|-------------|--------|
/// | 0 | empty | `Ok(())` |
/// | 5 | any | [`ToolError::FolderAccess`] |
/// | 87 | any | [`ToolError::InvalidParameter`] |
/// | 1332 | any | [`ToolError::UnknownIdentity`] |
/// | 0 | present | [`ToolError::Unspecified`] |
/// | other | any | [`ToolError::Unspecified`] |
pub fn check_for_errors(
    invocation: Invocation,
    path: &Path,
    username: &str,
) -> Result<(), ToolError> {
    if invocation.is_clean() {
        return Ok(());
    }
    let Invocation {
        argv,
        status,
        stderr,
        ..
    } = invocation;

    // 0 only gets here with diagnostics and is treated as untrusted
    match status {
        5 => Err(ToolError::FolderAccess {
            path: path.to_path_buf(),
            stderr,
        }),
        87 => Err(ToolError::InvalidParameter { args: argv, stderr }),
        1332 => Err(ToolError::UnknownIdentity {
            username: username.to_string(),
            stderr,
        }),
        code => Err(ToolError::Unspecified { code, stderr }),
    }
}
