//! Sample transforms applied to (image, label) pairs.

use crate::common::*;

/// A transform applied to each decoded (image, label) pair.
pub trait Transform
where
    Self: Send + Sync,
{
    fn apply(&self, image: Tensor, label: Tensor) -> Result<(Tensor, Tensor)>;
}

impl<F> Transform for F
where
    F: Fn(Tensor, Tensor) -> Result<(Tensor, Tensor)> + Send + Sync,
{
    fn apply(&self, image: Tensor, label: Tensor) -> Result<(Tensor, Tensor)> {
        self(image, label)
    }
}

/// The transform passing the pair through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Transform for Identity {
    fn apply(&self, image: Tensor, label: Tensor) -> Result<(Tensor, Tensor)> {
        Ok((image, label))
    }
}

/// Chain multiple transforms, applied in insertion order.
#[derive(Default)]
pub struct Compose {
    transforms: Vec<Box<dyn Transform>>,
}

impl Compose {
    pub fn new(transforms: Vec<Box<dyn Transform>>) -> Self {
        Self { transforms }
    }

    pub fn push<T>(mut self, transform: T) -> Self
    where
        T: Transform + 'static,
    {
        self.transforms.push(Box::new(transform));
        self
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl Debug for Compose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compose")
            .field("transforms", &self.transforms.len())
            .finish()
    }
}

impl Transform for Compose {
    fn apply(&self, image: Tensor, label: Tensor) -> Result<(Tensor, Tensor)> {
        self.transforms
            .iter()
            .try_fold((image, label), |(image, label), transform| {
                transform.apply(image, label)
            })
    }
}
