use std::fmt;

/// Identifier of a mesh vertex.
///
/// Ids are assigned by the host mesh as dense non-negative indices and are
/// stable only for the duration of one computation; the mesh may be
/// re-indexed externally between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u32);

impl VertexId {
    /// Creates a vertex id from the host mesh index.
    #[must_use]
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the underlying mesh index.
    #[must_use]
    pub fn index(self) -> u32 {
        self.0
    }
}

impl From<u32> for VertexId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
