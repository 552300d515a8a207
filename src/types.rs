//! Core types: the closed catalog of native permission flags and the
//! outcome of a single native tool invocation.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownCode;

/// A token understood by the native permission tool.
///
/// Implemented only by the two closed catalogs, [`SpecificRight`] and
/// [`InheritanceFlag`]. Codes have to match the native grammar exactly, so
/// there is no way to build a flag from an arbitrary string other than
/// parsing one of the known codes.
pub trait PermissionFlag: Copy + Ord + fmt::Display {
    /// The literal token passed to the native tool.
    fn code(&self) -> &'static str;

    /// Human-readable label.
    fn description(&self) -> &'static str;
}

/// A right that governs which operations an identity may perform.
///
/// Ordering follows declaration order, which is also the order in which
/// rights appear in a serialized grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "&'static str", try_from = "String"))]
pub enum SpecificRight {
    /// `DE`
    Delete,
    /// `RC`
    ReadControl,
    /// `WDAC`
    WriteDac,
    /// `WO`
    WriteOwner,
    /// `S`
    Synchronize,
    /// `AS`
    AccessSystemSecurity,
    /// `MA`
    MaximumAllowed,
    /// `GR`
    GenericRead,
    /// `GW`
    GenericWrite,
    /// `GE`
    GenericExecute,
    /// `GA`
    GenericAll,
    /// `RD`
    ReadDataListDirectory,
    /// `WD`
    WriteDataAddFile,
    /// `AD`
    AppendDataAddSubdirectory,
    /// `REA`
    ReadExtendedAttributes,
    /// `WEA`
    WriteExtendedAttributes,
    /// `X`
    ExecuteTraverse,
    /// `DC`
    DeleteChild,
    /// `RA`
    ReadAttributes,
    /// `WA`
    WriteAttributes,
}

impl SpecificRight {
    /// Every specific right, in declaration order.
    pub const ALL: [SpecificRight; 20] = [
        Self::Delete,
        Self::ReadControl,
        Self::WriteDac,
        Self::WriteOwner,
        Self::Synchronize,
        Self::AccessSystemSecurity,
        Self::MaximumAllowed,
        Self::GenericRead,
        Self::GenericWrite,
        Self::GenericExecute,
        Self::GenericAll,
        Self::ReadDataListDirectory,
        Self::WriteDataAddFile,
        Self::AppendDataAddSubdirectory,
        Self::ReadExtendedAttributes,
        Self::WriteExtendedAttributes,
        Self::ExecuteTraverse,
        Self::DeleteChild,
        Self::ReadAttributes,
        Self::WriteAttributes,
    ];
}

impl PermissionFlag for SpecificRight {
    fn code(&self) -> &'static str {
        match self {
            Self::Delete => "DE",
            Self::ReadControl => "RC",
            Self::WriteDac => "WDAC",
            Self::WriteOwner => "WO",
            Self::Synchronize => "S",
            Self::AccessSystemSecurity => "AS",
            Self::MaximumAllowed => "MA",
            Self::GenericRead => "GR",
            Self::GenericWrite => "GW",
            Self::GenericExecute => "GE",
            Self::GenericAll => "GA",
            Self::ReadDataListDirectory => "RD",
            Self::WriteDataAddFile => "WD",
            Self::AppendDataAddSubdirectory => "AD",
            Self::ReadExtendedAttributes => "REA",
            Self::WriteExtendedAttributes => "WEA",
            Self::ExecuteTraverse => "X",
            Self::DeleteChild => "DC",
            Self::ReadAttributes => "RA",
            Self::WriteAttributes => "WA",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::ReadControl => "read control",
            Self::WriteDac => "write DAC",
            Self::WriteOwner => "write owner",
            Self::Synchronize => "synchronize",
            Self::AccessSystemSecurity => "access system security",
            Self::MaximumAllowed => "maximum allowed",
            Self::GenericRead => "generic read",
            Self::GenericWrite => "generic write",
            Self::GenericExecute => "generic execute",
            Self::GenericAll => "generic all",
            Self::ReadDataListDirectory => "read data/list directory",
            Self::WriteDataAddFile => "write data/add file",
            Self::AppendDataAddSubdirectory => "append data/add subdirectory",
            Self::ReadExtendedAttributes => "read extended attributes",
            Self::WriteExtendedAttributes => "write extended attributes",
            Self::ExecuteTraverse => "execute/traverse",
            Self::DeleteChild => "delete child",
            Self::ReadAttributes => "read attributes",
            Self::WriteAttributes => "write attributes",
        }
    }
}

/// How a grant propagates to objects below the target.
///
/// Each code already carries its own parentheses, e.g. `(OI)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "&'static str", try_from = "String"))]
pub enum InheritanceFlag {
    /// `(OI)`: files below the target inherit the grant.
    ObjectInherit,
    /// `(CI)`: folders below the target inherit the grant.
    ContainerInherit,
    /// `(IO)`: the grant applies to children only, not the target itself.
    InheritOnly,
    /// `(NP)`: inherited by direct children only.
    DontPropagateInherit,
    /// `(I)`: permission inherited from the parent container.
    InheritFromParent,
}

impl InheritanceFlag {
    /// Every inheritance flag, in declaration order.
    pub const ALL: [InheritanceFlag; 5] = [
        Self::ObjectInherit,
        Self::ContainerInherit,
        Self::InheritOnly,
        Self::DontPropagateInherit,
        Self::InheritFromParent,
    ];
}

impl PermissionFlag for InheritanceFlag {
    fn code(&self) -> &'static str {
        match self {
            Self::ObjectInherit => "(OI)",
            Self::ContainerInherit => "(CI)",
            Self::InheritOnly => "(IO)",
            Self::DontPropagateInherit => "(NP)",
            Self::InheritFromParent => "(I)",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::ObjectInherit => "object inherit",
            Self::ContainerInherit => "container inherit",
            Self::InheritOnly => "inherit only",
            Self::DontPropagateInherit => "don't propagate inherit",
            Self::InheritFromParent => "permission inherited from parent container",
        }
    }
}

impl fmt::Display for SpecificRight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for InheritanceFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SpecificRight {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|right| right.code() == s)
            .ok_or_else(|| UnknownCode {
                kind: "specific right",
                code: s.to_string(),
            })
    }
}

impl FromStr for InheritanceFlag {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|flag| flag.code() == s)
            .ok_or_else(|| UnknownCode {
                kind: "inheritance flag",
                code: s.to_string(),
            })
    }
}

impl From<SpecificRight> for &'static str {
    fn from(right: SpecificRight) -> Self {
        right.code()
    }
}

impl From<InheritanceFlag> for &'static str {
    fn from(flag: InheritanceFlag) -> Self {
        flag.code()
    }
}

impl TryFrom<String> for SpecificRight {
    type Error = UnknownCode;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl TryFrom<String> for InheritanceFlag {
    type Error = UnknownCode;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

/// Outcome of running the native tool once.
///
/// Produced by a [`CommandRunner`](crate::CommandRunner) and consumed
/// immediately by classification; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The exact argument vector, executable name first.
    pub argv: Vec<String>,
    /// Exit code. `-1` when the process ended without one (e.g. killed by a signal).
    pub status: i32,
    /// Captured standard output.
    pub stdout: String,
    /// Captured diagnostic stream.
    pub stderr: String,
}

impl Invocation {
    /// Returns `true` if the process exited with 0 and wrote no diagnostics.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.status == 0 && self.stderr.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn specific_right_codes_are_unique() {
        let codes: HashSet<_> = SpecificRight::ALL.iter().map(|r| r.code()).collect();
        assert_eq!(codes.len(), SpecificRight::ALL.len());
    }

    #[test]
    fn inheritance_codes_are_unique_and_parenthesized() {
        let codes: HashSet<_> = InheritanceFlag::ALL.iter().map(|f| f.code()).collect();
        assert_eq!(codes.len(), InheritanceFlag::ALL.len());
        for code in codes {
            assert!(code.starts_with('(') && code.ends_with(')'), "{code}");
        }
    }

    #[test]
    fn codes_never_contain_whitespace() {
        for right in SpecificRight::ALL {
            assert!(!right.code().contains(char::is_whitespace));
        }
        for flag in InheritanceFlag::ALL {
            assert!(!flag.code().contains(char::is_whitespace));
        }
    }

    #[test]
    fn display_is_the_native_code() {
        assert_eq!(SpecificRight::WriteDac.to_string(), "WDAC");
        assert_eq!(InheritanceFlag::ObjectInherit.to_string(), "(OI)");
    }

    #[test]
    fn parse_every_known_code() {
        for right in SpecificRight::ALL {
            assert_eq!(right.code().parse::<SpecificRight>().unwrap(), right);
        }
        for flag in InheritanceFlag::ALL {
            assert_eq!(flag.code().parse::<InheritanceFlag>().unwrap(), flag);
        }
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        let err = "ga".parse::<SpecificRight>().unwrap_err();
        assert_eq!(err.code, "ga");
        assert!(err.to_string().contains("specific right"));

        // inheritance codes must keep their parentheses
        assert!("OI".parse::<InheritanceFlag>().is_err());
    }

    #[test]
    fn descriptions_are_present() {
        assert_eq!(SpecificRight::DeleteChild.description(), "delete child");
        assert_eq!(
            InheritanceFlag::DontPropagateInherit.description(),
            "don't propagate inherit"
        );
    }

    #[test]
    fn invocation_is_clean_only_without_diagnostics() {
        let mut invocation = Invocation {
            argv: vec!["icacls".into()],
            status: 0,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(invocation.is_clean());
        invocation.stderr = "warning".into();
        assert!(!invocation.is_clean());
        invocation.stderr.clear();
        invocation.status = 5;
        assert!(!invocation.is_clean());
    }
}
