//! Geometry errors

/// All the possible failures of the line operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (Unimplemented) The operation has no defined semantics yet
    #[error("(Unimplemented) {0} is not implemented")]
    Unimplemented(&'static str),
    /// (IndexOutOfRange) A vertex index is past the end of the line
    #[error("(IndexOutOfRange) Vertex index {index} is out of range (line has {len} vertices)")]
    IndexOutOfRange { index: usize, len: usize },
    /// (TooFewPoints) A line has fewer than the two vertices it needs
    #[error("(TooFewPoints) A line needs at least 2 vertices, found {0}")]
    TooFewPoints(usize),
}
