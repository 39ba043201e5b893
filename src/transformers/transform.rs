//! Transform trait.

/// Text to text transformation.
///
/// Implementors hold no mutable state: the same input always yields the same output.
pub trait Transform {
    fn transform(&self, text: &str) -> String;
}

/// Applies transforms one after the other, in insertion order.
#[derive(Default)]
pub struct TransformChain(Vec<Box<dyn Transform + Sync>>);

impl TransformChain {
    pub fn add(&mut self, transform: Box<dyn Transform + Sync>) -> &mut TransformChain {
        self.0.push(transform);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Transform for TransformChain {
    fn transform(&self, text: &str) -> String {
        self.0
            .iter()
            .fold(text.to_string(), |acc, t| t.transform(&acc))
    }
}
