use crate::transform::Transform;

/// Outcome of transforming one file's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    /// Character count of the input.
    pub original_size: usize,
    /// Character count of the output.
    pub processed_size: usize,
    pub transform: Transform,
    pub result: String,
}

impl TransformResult {
    pub fn new(transform: Transform, content: &str) -> Self {
        let result = transform.apply(content);
        Self {
            original_size: content.chars().count(),
            processed_size: result.chars().count(),
            transform,
            result,
        }
    }
}
