//! Engine doubles for tests.
//!
//! Compiled for this crate's own tests and, through the `test-util` feature,
//! for tests in other crates. Production code never sees this module.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bootstrap::{ClientConfiguration, Engine, EngineError, LogLevel};

use crate::EngineFactory;

/// One call to [`Engine::run`] observed by a [`RecordingEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRun {
    /// Name of the engine instance that was run.
    pub engine: String,
    /// Configuration the engine was started with.
    pub configuration: ClientConfiguration,
    /// Log level the engine was started with.
    pub log_level: LogLevel,
}

#[derive(Debug, Default)]
struct RecorderState {
    constructed: usize,
    runs: Vec<RecordedRun>,
}

/// Shared log of engines constructed and run through [`EngineRecorder::factory`].
#[derive(Debug, Clone, Default)]
pub struct EngineRecorder {
    state: Arc<Mutex<RecorderState>>,
}

impl EngineRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory producing [`RecordingEngine`]s that report back to this recorder.
    ///
    /// Engines are named `recording-1`, `recording-2`, ... in construction order.
    pub fn factory(&self) -> EngineFactory {
        let recorder = self.clone();
        EngineFactory::new(move || {
            let serial = {
                let mut state = recorder.lock();
                state.constructed += 1;
                state.constructed
            };
            Ok(Box::new(RecordingEngine {
                name: format!("recording-{serial}"),
                recorder: recorder.clone(),
            }) as Box<dyn Engine>)
        })
    }

    /// Number of engines constructed so far.
    pub fn constructed(&self) -> usize {
        self.lock().constructed
    }

    /// Every run observed so far, oldest first.
    pub fn runs(&self) -> Vec<RecordedRun> {
        self.lock().runs.clone()
    }

    fn lock(&self) -> MutexGuard<'_, RecorderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Engine that records its runs instead of starting anything.
#[derive(Debug)]
pub struct RecordingEngine {
    name: String,
    recorder: EngineRecorder,
}

impl Engine for RecordingEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(
        &self,
        configuration: &ClientConfiguration,
        log_level: LogLevel,
    ) -> Result<(), EngineError> {
        self.recorder.lock().runs.push(RecordedRun {
            engine: self.name.clone(),
            configuration: configuration.clone(),
            log_level,
        });
        Ok(())
    }
}

/// Engine with no behaviour; `run` always succeeds.
#[derive(Debug, Default)]
pub struct NoopEngine;

impl NoopEngine {
    /// Name reported through [`Engine::name`].
    pub const NAME: &'static str = "noop";
}

impl Engine for NoopEngine {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn run(&self, _: &ClientConfiguration, _: LogLevel) -> Result<(), EngineError> {
        Ok(())
    }
}

/// Factory whose every call fails with [`EngineError::Unavailable`].
pub fn failing_factory(reason: impl Into<String>) -> EngineFactory {
    let reason = reason.into();
    EngineFactory::new(move || Err(EngineError::unavailable(reason.clone())))
}
