//! Error types for granting rights through the native permission tool.

use std::path::PathBuf;

/// Failure of a [`set_rights`](crate::PermissionTool::set_rights) call.
///
/// Every classified variant embeds the raw diagnostic text of the native
/// tool together with the offending path, identity or argument vector.
/// None of these are retried.
///
/// # Examples
///
/// ```rust
/// use icaclswrap::ToolError;
/// use std::path::PathBuf;
///
/// let err = ToolError::FolderAccess {
///     path: PathBuf::from(r"C:\missing"),
///     stderr: "Access is denied.".into(),
/// };
/// assert!(err.to_string().contains(r"C:\missing"));
/// assert_eq!(err.exit_code(), Some(5));
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// The native executable could not be found on this host.
    #[error("command '{tool}' is not available. Is this run from windows?")]
    Unavailable {
        /// Name of the executable that was looked up.
        tool: String,
    },

    /// Exit code 87: the invocation itself was malformed.
    #[error("invalid parameter \"{stderr}\" when trying to execute {}", .args.join(" "))]
    InvalidParameter {
        /// Full argument vector, executable first.
        args: Vec<String>,
        /// Raw diagnostic output.
        stderr: String,
    },

    /// Exit code 5: the folder does not exist or the caller has no access.
    #[error("folder \"{}\" could not be found or you have no access. Original error: {stderr}", .path.display())]
    FolderAccess {
        /// Target path.
        path: PathBuf,
        /// Raw diagnostic output.
        stderr: String,
    },

    /// Exit code 1332: the host could not resolve the identity.
    #[error("user \"{username}\" is unknown. Original error: {stderr}")]
    UnknownIdentity {
        /// Identity the grant was for.
        username: String,
        /// Raw diagnostic output.
        stderr: String,
    },

    /// Any other non-zero exit code, or exit code 0 with diagnostics.
    #[error("unspecified error (return code {code}): \"{stderr}\"")]
    Unspecified {
        /// Exit code reported by the tool.
        code: i32,
        /// Raw diagnostic output.
        stderr: String,
    },

    /// The process could not be launched for a reason other than a missing executable.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ToolError {
    /// Exit code that led to this error, if the tool actually ran.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::InvalidParameter { .. } => Some(87),
            Self::FolderAccess { .. } => Some(5),
            Self::UnknownIdentity { .. } => Some(1332),
            Self::Unspecified { code, .. } => Some(*code),
            Self::Unavailable { .. } | Self::Io(_) => None,
        }
    }

    /// Raw diagnostic text of the native tool, if the tool actually ran.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::InvalidParameter { stderr, .. }
            | Self::FolderAccess { stderr, .. }
            | Self::UnknownIdentity { stderr, .. }
            | Self::Unspecified { stderr, .. } => Some(stderr),
            Self::Unavailable { .. } | Self::Io(_) => None,
        }
    }
}

/// A string that is not a code from the flag catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} code: {code}")]
pub struct UnknownCode {
    /// Which catalog was searched.
    pub kind: &'static str,
    /// The rejected input.
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_display_names_the_tool() {
        let err = ToolError::Unavailable {
            tool: "icacls".into(),
        };
        assert_eq!(
            err.to_string(),
            "command 'icacls' is not available. Is this run from windows?"
        );
        assert_eq!(err.exit_code(), None);
    }

    #[test]
    fn invalid_parameter_display_joins_args() {
        let err = ToolError::InvalidParameter {
            args: vec![
                "icacls".into(),
                r"C:\a_directory".into(),
                "/grant".into(),
                ":(CI)(OI)(GA)".into(),
                "/T".into(),
            ],
            stderr: "Invalid parameter \"(CI)(OI)\"".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains(r#"icacls C:\a_directory /grant :(CI)(OI)(GA) /T"#));
        assert!(msg.contains("Invalid parameter"));
    }

    #[test]
    fn unknown_identity_display_contains_username() {
        let err = ToolError::UnknownIdentity {
            username: "unknown_user".into(),
            stderr: "No mapping between account names and security IDs was done.".into(),
        };
        assert!(err.to_string().contains("\"unknown_user\""));
        assert_eq!(err.exit_code(), Some(1332));
    }

    #[test]
    fn unspecified_display_contains_code() {
        let err = ToolError::Unspecified {
            code: 12345,
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "unspecified error (return code 12345): \"\"");
        assert_eq!(err.stderr(), Some(""));
    }

    #[test]
    fn io_error_is_transparent() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "spawn denied");
        let err = ToolError::from(io_err);
        assert!(matches!(err, ToolError::Io(_)));
        assert_eq!(err.to_string(), "spawn denied");
        assert_eq!(err.stderr(), None);
    }

    #[test]
    fn unknown_code_display() {
        let err = UnknownCode {
            kind: "specific right",
            code: "XYZ".into(),
        };
        assert_eq!(err.to_string(), "unknown specific right code: XYZ");
    }
}
