//! Processor registry.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::{GenError, GenResult, Processor};

/// Processors in registration order.
///
/// Registration order is dispatch order: when several processors match the
/// same declaration, the first registered runs first. Names are unique.
#[derive(Default)]
pub struct ProcessorRegistry {
    processors: Vec<Box<dyn Processor>>,
    names: FxHashSet<String>,
}

impl ProcessorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a processor after all previously registered ones.
    pub fn register<P: Processor + 'static>(&mut self, processor: P) -> GenResult<()> {
        self.register_boxed(Box::new(processor))
    }

    /// Register an already boxed processor.
    pub fn register_boxed(&mut self, processor: Box<dyn Processor>) -> GenResult<()> {
        let name = processor.name();
        if self.names.contains(name) {
            return Err(GenError::DuplicateProcessor {
                name: name.to_owned(),
            });
        }
        self.names.insert(name.to_owned());
        tracing::debug!(processor = name, position = self.processors.len(), "registered");
        self.processors.push(processor);
        Ok(())
    }

    /// Builder-style variant of [`ProcessorRegistry::register`].
    pub fn with<P: Processor + 'static>(mut self, processor: P) -> GenResult<Self> {
        self.register(processor)?;
        Ok(self)
    }

    /// Registered names in dispatch order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.processors.iter().map(|p| p.name())
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Box<dyn Processor>> {
        self.processors.iter_mut()
    }
}

impl fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
