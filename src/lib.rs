//! protoc-gen-go-client - Go client facade generator
//!
//! A protoc plugin that merges the services of several `.proto` files into a
//! single Go package exposing one `Client` interface, a `New` factory wiring
//! every per-service gRPC client, and per-method wrappers that merge call
//! options carried by the context.
//!
//! ```text
//! CodeGeneratorRequest -> DefinitionSource -> GenerationUnit -> emitters -> OutputSink
//! ```

pub mod config;
pub mod emit;
pub mod error;
pub mod generator;
pub mod model;
pub mod naming;
pub mod plugin;
pub mod unit;
pub mod utils;

pub use error::{GenerateError, Result};
pub use generator::{generate, DefinitionSource, OutputSink};
pub use unit::{ConflictError, GenerationUnit};
