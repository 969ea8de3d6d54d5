//! Node kind tags
//!
//! Provides [`Kind`] for identifying node families within the model tree.

use std::fmt::{self, Display, Formatter};

/// Tag naming a family of model nodes
///
/// A kind carries the serialized field its nodes occupy under their
/// parent and whether several siblings of the kind may coexist (list
/// fields such as `containers`) or only one (singleton fields such as
/// `metadata`).
///
/// Kinds are compared by tag name; the two constants below are the same
/// kind only if declared with identical names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Kind {
    name: &'static str,
    field: &'static str,
    many: bool,
}

impl Kind {
    /// Declare a singleton kind (at most one child per parent)
    #[inline]
    #[must_use]
    pub const fn new(name: &'static str, field: &'static str) -> Self {
        Self {
            name,
            field,
            many: false,
        }
    }

    /// Declare a list kind (several children serialize as an array)
    #[inline]
    #[must_use]
    pub const fn list(name: &'static str, field: &'static str) -> Self {
        Self {
            name,
            field,
            many: true,
        }
    }

    /// Tag name identifying the family
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Field this kind serializes under in its parent
    #[inline]
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Whether several siblings of this kind may coexist
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        self.many
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
