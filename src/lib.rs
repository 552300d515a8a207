//! # icaclswrap
//!
//! Grant an identity an **understandable bundle of rights** on a Windows
//! directory tree, without learning the full `icacls` permission grammar.
//!
//! The crate translates intent into the native tool's syntax, runs the tool
//! and turns its exit code and diagnostics into a typed error. It does not
//! enforce permissions or walk the filesystem itself; the native tool does
//! both.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use icaclswrap::{PermissionTool, FULL_ACCESS};
//! use std::path::Path;
//!
//! let tool = PermissionTool::new();
//! tool.set_rights(Path::new(r"C:\projects\shared"), r"DOMAIN\alice", &FULL_ACCESS)?;
//! # Ok::<(), icaclswrap::ToolError>(())
//! ```
//!
//! This runs:
//!
//! ```text
//! icacls C:\projects\shared /grant DOMAIN\alice:(OI)(CI)(GA) /T
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`SpecificRight`] | What an identity may do: read, write, delete, ... |
//! | [`InheritanceFlag`] | How a grant propagates to children |
//! | [`RightsCollection`] | Immutable bundle of both, with a description |
//! | [`PermissionTool`] | Builds the command, runs it, classifies the outcome |
//! | [`CommandRunner`] | Process boundary, replaceable in tests |
//! | [`ToolError`] | Typed failures |
//!
//! ---
//!
//! ## Error Handling
//!
//! Exit codes of the native tool map onto [`ToolError`] variants:
//!
//! | Exit code | Variant |
//! |-----------|---------|
//! | 0, no diagnostics | success |
//! | 5 | [`ToolError::FolderAccess`] |
//! | 87 | [`ToolError::InvalidParameter`] |
//! | 1332 | [`ToolError::UnknownIdentity`] |
//! | anything else, or 0 with diagnostics | [`ToolError::Unspecified`] |
//!
//! A missing executable is reported as [`ToolError::Unavailable`]. Any other
//! launch failure is passed through as [`ToolError::Io`].
//!
//! ```rust
//! use icaclswrap::{CommandRunner, Invocation, PermissionTool, ToolError, READ_DELETE};
//! use std::path::Path;
//!
//! struct UnknownUser;
//!
//! impl CommandRunner for UnknownUser {
//!     fn run(&self, argv: &[String]) -> std::io::Result<Invocation> {
//!         Ok(Invocation {
//!             argv: argv.to_vec(),
//!             status: 1332,
//!             stdout: String::new(),
//!             stderr: "No mapping between account names and security IDs was done.".into(),
//!         })
//!     }
//! }
//!
//! let tool = PermissionTool::new().with_runner(UnknownUser);
//! let err = tool.set_rights(Path::new(r"C:\TEMP"), "nobody", &READ_DELETE).unwrap_err();
//! assert!(matches!(err, ToolError::UnknownIdentity { .. }));
//! assert!(err.to_string().contains("nobody"));
//! ```
//!
//! ---
//!
//! ## Thread Safety
//!
//! [`PermissionTool`] holds no mutable state and every call spawns its own
//! process, so one tool can be shared across threads. The canonical
//! collections are lazily built statics and never change afterwards.
//!
//! Calls block until the native tool exits. Callers that need to stay
//! responsive should run them on a worker thread.
//!
//! ---
//!
//! ## Logging
//!
//! Events are emitted through [`tracing`]. No subscriber is installed by
//! this crate.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialization for flags and [`RightsCollection`], plus `RightsCollection::from_json` |

mod collection;
mod error;
pub mod grant;
mod runner;
mod tool;
mod types;

// Public re-exports - errors
pub use error::{ToolError, UnknownCode};

// Public re-exports - rights model
pub use collection::{FULL_ACCESS, READ_DELETE, RightsCollection, canonical, lookup};
pub use types::{InheritanceFlag, PermissionFlag, SpecificRight};

// Public re-exports - permission applier
pub use runner::{CommandRunner, SystemRunner};
pub use tool::{DEFAULT_TOOL_NAME, PermissionTool, check_for_errors};
pub use types::Invocation;
