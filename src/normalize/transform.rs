//! Text transformation pipeline.
//!
//! This module provides the [`Transform`] trait and [`TransformChain`] for
//! composing text rewriting stages. Stages rewrite a `String` in place and are
//! applied strictly in the order they were added.
//!
//! # Example
//!
//! ```
//! use spacer::normalize::{Transform, TransformChain};
//!
//! /// Upper-cases ASCII letters.
//! struct Shout;
//!
//! impl Transform for Shout {
//!     fn name(&self) -> &'static str {
//!         "shout"
//!     }
//!
//!     fn transform(&self, text: &mut String) {
//!         text.make_ascii_uppercase();
//!     }
//! }
//!
//! let chain = TransformChain::new().with(Shout);
//! let mut text = String::from("hello 世界");
//! chain.transform(&mut text);
//! assert_eq!(text, "HELLO 世界");
//! ```

/// A rewriting stage applied to a whole string.
///
/// Stages hold no mutable state: the same input always yields the same
/// output, which is what lets [`super::normalize`] be a pure function.
pub trait Transform {
    /// Short stage name used in trace logs.
    fn name(&self) -> &'static str;

    /// Rewrite `text` in place.
    fn transform(&self, text: &mut String);
}

/// A chain of transforms applied in sequence.
///
/// Each transform sees the result of the previous ones.
pub struct TransformChain {
    transforms: Vec<Box<dyn Transform>>,
}

impl TransformChain {
    /// Create an empty transform chain.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Add a transform to the end of the chain.
    ///
    /// Returns self for method chaining.
    pub fn with<T: Transform + 'static>(mut self, transform: T) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Check if the chain has no transforms.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Get the number of transforms in the chain.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Stage names in application order.
    pub fn names(&self) -> Vec<&'static str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }
}

impl Default for TransformChain {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for TransformChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    /// Apply all transforms in sequence.
    fn transform(&self, text: &mut String) {
        for transform in &self.transforms {
            transform.transform(text);
            tracing::trace!(stage = transform.name(), len = text.len(), "applied stage");
        }
    }
}
