//! The skill data model.

use serde::Deserialize;

/// A labelled item displayed as one box on the board.
///
/// Skills are supplied by the caller and never mutated; identity is the `id`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
}

impl Skill {
    /// Creates a new skill.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
