//! Client facade.
//!
//! [`ClientBuilder`] turns a configuration source plus optional overrides into
//! an immutable [`Client`]. The concrete engine is chosen through an
//! [`EngineFactory`]; production code always gets the native engine, tests
//! can inject doubles from [`testing`] (enable the `test-util` feature from
//! another crate).
//!
//! ## Architectural Layer
//!
//! **Facade.** Joins the [`bootstrap`] domain types with the production
//! engine from the `engine` crate. Callers depend on this crate only.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`builder`] | `ClientBuilder` |
//! | [`client`] | `Client` |
//! | [`factory`] | `EngineFactory`, the engine factory slot |
//! | [`identifiers`] | `ClientId` |
//! | [`errors`] | `ClientError` |

pub mod builder;
pub mod client;
pub mod errors;
pub mod factory;
pub mod identifiers;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use builder::ClientBuilder;
pub use client::Client;
pub use errors::ClientError;
pub use factory::EngineFactory;
pub use identifiers::ClientId;

// Domain types callers need alongside the builder.
pub use bootstrap::{
    ClientConfiguration, ClientSettings, ConfigurationSource, ConnectionSettings, Engine,
    EngineError, LogLevel, ResolvedConfiguration,
};
