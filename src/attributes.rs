//! [`Attributes`] and closely related helpers.

use std::fmt;

/// Collection of identifying metadata carried by a [`Cube`](crate::cube::Cube)
/// or [`World`](crate::world::World): what it is called and who made it.
///
/// `Attributes::default()` is entirely empty strings, a reasonable choice for
/// freshly created blocks that haven't been named yet.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct Attributes {
    /// The name that should be displayed to users.
    pub name: String,
    /// Free-form description text.
    pub description: String,
    /// Author credit.
    pub author: String,
}

impl Attributes {
    /// Attributes with the given name and everything else left empty.
    pub fn named(name: impl Into<String>) -> Self {
        Attributes {
            name: name.into(),
            ..Attributes::default()
        }
    }
}

impl fmt::Debug for Attributes {
    /// Only fields which differ from the default are shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self == &Self::default() {
            // Avoid the braceless formatting used for structs with literally no fields.
            write!(f, "Attributes {{}}")
        } else {
            let mut s = f.debug_struct("Attributes");
            if !self.name.is_empty() {
                s.field("name", &self.name);
            }
            if !self.description.is_empty() {
                s.field("description", &self.description);
            }
            if !self.author.is_empty() {
                s.field("author", &self.author);
            }
            s.finish()
        }
    }
}
