//! Serialization of a rights collection into the native tool's grant grammar.
//!
//! ```text
//! <tool> <path> /grant <username>:<inheritance codes>(<right>,<right>,...) /T
//! ```
//!
//! The grant argument must not contain whitespace: the native grammar ends
//! a field at the first space.

use std::path::Path;

use crate::{PermissionFlag, RightsCollection};

/// Switch that introduces the grant argument.
pub const GRANT_SWITCH: &str = "/grant";

/// Switch that applies the grant to the whole subtree below the path.
pub const RECURSE_SWITCH: &str = "/T";

/// `(` + comma-joined specific right codes + `)`. Yields `()` for an empty set.
///
/// ```rust
/// use icaclswrap::{grant, READ_DELETE};
///
/// assert_eq!(grant::specific_rights_token(&READ_DELETE), "(DE,GR,DC)");
/// ```
pub fn specific_rights_token(rights: &RightsCollection) -> String {
    let codes: Vec<&str> = rights.specific_rights().iter().map(|r| r.code()).collect();
    format!("({})", codes.join(","))
}

/// Concatenation of every inheritance flag's own code, without separators.
pub fn inheritance_token(rights: &RightsCollection) -> String {
    rights
        .inheritance_flags()
        .iter()
        .map(|flag| flag.code())
        .collect()
}

/// `{username}:{inheritance}{specific rights}`.
///
/// ```rust
/// use icaclswrap::{grant, FULL_ACCESS};
///
/// assert_eq!(grant::grant_argument("z428172", &FULL_ACCESS), "z428172:(OI)(CI)(GA)");
/// ```
pub fn grant_argument(username: &str, rights: &RightsCollection) -> String {
    format!(
        "{username}:{}{}",
        inheritance_token(rights),
        specific_rights_token(rights)
    )
}

/// The complete argument vector, executable name first.
pub fn command_line(
    tool: &str,
    path: &Path,
    username: &str,
    rights: &RightsCollection,
) -> Vec<String> {
    vec![
        tool.to_string(),
        path.to_string_lossy().into_owned(),
        GRANT_SWITCH.to_string(),
        grant_argument(username, rights),
        RECURSE_SWITCH.to_string(),
    ]
}
