//! Small shared wire types.

use serde::{Deserialize, Serialize};

/// Identifier of a freshly created record.
///
/// Creation endpoints for chapters, characters, ideas, and versions
/// acknowledge with just the new row's identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Created {
    /// Identifier assigned by the backend.
    pub id: i64,
}
