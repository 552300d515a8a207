//! # Rights Collections
//!
//! Intent-level bundles of [`SpecificRight`]s and [`InheritanceFlag`]s.
//!
//! ## Overview
//!
//! Reasoning about twenty specific rights and five inheritance options is
//! rarely what a caller wants. A [`RightsCollection`] packages a choice of
//! both under a human-readable description, so a caller can say "full
//! access" instead of `(OI)(CI)(GA)`.
//!
//! ## Canonical Collections
//!
//! | Name | Rights | Inheritance |
//! |------|--------|-------------|
//! | `full_access` ([`FULL_ACCESS`]) | `GA` | `(OI)(CI)` |
//! | `read_delete` ([`READ_DELETE`]) | `GR, DE, DC` | `(OI)(CI)` |
//!
//! Custom collections are built with [`RightsCollection::new`]. No checks
//! are made beyond set semantics: an empty set of rights is accepted, just
//! as the native tool accepts it.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::{InheritanceFlag, SpecificRight};

/// A named-by-intent, immutable bundle of rights.
///
/// # Examples
///
/// ```rust
/// use icaclswrap::{InheritanceFlag, RightsCollection, SpecificRight};
///
/// let read_only = RightsCollection::new(
///     [SpecificRight::GenericRead],
///     [InheritanceFlag::ObjectInherit, InheritanceFlag::ContainerInherit],
///     "Read files and folders",
/// );
/// assert_eq!(read_only.specific_rights().len(), 1);
/// assert_eq!(read_only.description(), "Read files and folders");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RightsCollection {
    specific_rights: BTreeSet<SpecificRight>,
    inheritance_flags: BTreeSet<InheritanceFlag>,
    description: String,
}

impl RightsCollection {
    /// Build a collection. Duplicate flags collapse.
    pub fn new(
        specific_rights: impl IntoIterator<Item = SpecificRight>,
        inheritance_flags: impl IntoIterator<Item = InheritanceFlag>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            specific_rights: specific_rights.into_iter().collect(),
            inheritance_flags: inheritance_flags.into_iter().collect(),
            description: description.into(),
        }
    }

    /// The specific rights, in catalog order.
    #[inline]
    pub fn specific_rights(&self) -> &BTreeSet<SpecificRight> {
        &self.specific_rights
    }

    /// The inheritance flags, in catalog order.
    #[inline]
    pub fn inheritance_flags(&self) -> &BTreeSet<InheritanceFlag> {
        &self.inheritance_flags
    }

    /// Human-readable description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Load a custom collection from a JSON document.
    ///
    /// Flags are written as their native codes:
    ///
    /// ```rust
    /// use icaclswrap::{RightsCollection, SpecificRight};
    ///
    /// let json = r#"{
    ///     "specific_rights": ["GR", "X"],
    ///     "inheritance_flags": ["(CI)"],
    ///     "description": "Browse folders"
    /// }"#;
    /// let rights = RightsCollection::from_json(json).unwrap();
    /// assert!(rights.specific_rights().contains(&SpecificRight::ExecuteTraverse));
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Everything: read, write and delete, inherited by files and folders.
pub static FULL_ACCESS: LazyLock<RightsCollection> = LazyLock::new(|| {
    RightsCollection::new(
        [SpecificRight::GenericAll],
        [
            InheritanceFlag::ObjectInherit,
            InheritanceFlag::ContainerInherit,
        ],
        "Everything: read,write and delete",
    )
});

/// Read and delete, but not modify, inherited by files and folders.
pub static READ_DELETE: LazyLock<RightsCollection> = LazyLock::new(|| {
    RightsCollection::new(
        [
            SpecificRight::GenericRead,
            SpecificRight::Delete,
            SpecificRight::DeleteChild,
        ],
        [
            InheritanceFlag::ObjectInherit,
            InheritanceFlag::ContainerInherit,
        ],
        "Read and delete files and folders, but not edit",
    )
});

/// The canonical collections as `(name, collection)` pairs.
pub fn canonical() -> [(&'static str, &'static RightsCollection); 2] {
    [("full_access", &*FULL_ACCESS), ("read_delete", &*READ_DELETE)]
}

/// Find a canonical collection by name.
pub fn lookup(name: &str) -> Option<&'static RightsCollection> {
    canonical()
        .into_iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, rights)| rights)
}
