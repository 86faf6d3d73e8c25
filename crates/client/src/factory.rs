//! The engine factory slot.
//!
//! A [`ClientBuilder`](crate::ClientBuilder) never names a concrete engine.
//! It holds an [`EngineFactory`] and calls it once per `build()`. The default
//! factory produces a [`NativeEngine`]; tests swap in doubles.

use std::fmt;
use std::sync::Arc;

use bootstrap::{Engine, EngineError};
use engine::NativeEngine;

type Constructor = dyn Fn() -> Result<Box<dyn Engine>, EngineError> + Send + Sync;

/// Zero-argument constructor for engines.
///
/// Cloning shares the underlying constructor; each call still produces a new
/// engine.
#[derive(Clone)]
pub struct EngineFactory {
    label: &'static str,
    construct: Arc<Constructor>,
}

impl EngineFactory {
    /// Wraps an arbitrary constructor.
    pub fn new<F>(construct: F) -> Self
    where
        F: Fn() -> Result<Box<dyn Engine>, EngineError> + Send + Sync + 'static,
    {
        Self {
            label: "custom",
            construct: Arc::new(construct),
        }
    }

    /// Factory that default-constructs `E`.
    pub fn of<E>() -> Self
    where
        E: Engine + Default + 'static,
    {
        Self {
            label: std::any::type_name::<E>(),
            construct: Arc::new(|| -> Result<Box<dyn Engine>, EngineError> {
                Ok(Box::new(E::default()))
            }),
        }
    }

    /// Produces a new engine.
    ///
    /// # Errors
    ///
    /// Whatever the wrapped constructor returns; the error is not altered.
    pub fn create(&self) -> Result<Box<dyn Engine>, EngineError> {
        (self.construct)()
    }
}

impl Default for EngineFactory {
    fn default() -> Self {
        Self::of::<NativeEngine>()
    }
}

impl fmt::Debug for EngineFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineFactory")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_factory_builds_native_engines() {
        let engine = EngineFactory::default().create().unwrap();
        assert_eq!(engine.name(), NativeEngine::NAME);
    }

    #[test]
    fn each_call_yields_a_fresh_engine() {
        let factory = EngineFactory::default();
        let first = factory.create().unwrap();
        let second = factory.create().unwrap();
        let first_addr = &*first as *const dyn Engine as *const ();
        let second_addr = &*second as *const dyn Engine as *const ();
        assert_ne!(first_addr, second_addr);
    }

    #[test]
    fn custom_factory_errors_are_returned_unchanged() {
        let factory = EngineFactory::new(|| Err(EngineError::unavailable("no transport")));
        let err = factory.create().unwrap_err();
        assert_eq!(err.to_string(), "Engine unavailable: no transport");
    }

    #[test]
    fn debug_output_names_the_engine_type() {
        let rendered = format!("{:?}", EngineFactory::default());
        assert!(rendered.contains("NativeEngine"), "{rendered}");
    }
}
