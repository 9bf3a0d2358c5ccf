use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// The serde layout is the on-disk format: the task file is one JSON array of
/// `{id, description, state}` objects, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique within the list; strictly increasing in insertion order
    pub id: u64,
    /// Free text, non-empty once committed
    pub description: String,
    /// true = complete
    pub state: bool,
}

impl Task {
    /// Create a new incomplete task
    pub fn new(id: u64, description: String) -> Self {
        Task {
            id,
            description,
            state: false,
        }
    }

    /// The character used inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.state { 'x' } else { ' ' }
    }
}
