//! Restree: REST-oriented resource tree gateway
//!
//! Exposes hierarchical, named resource trees (documents addressed by
//! slash-separated paths, grouped into independently registered
//! repositories) over a request/response boundary: read a resource as an
//! enhanced JSON representation, apply batched structural mutations, or
//! delete it. Storage, routing, and authentication belong to the
//! embedder; this crate owns batch execution and the representation
//! enhancement pipeline.

pub mod batch;
pub mod config;
pub mod enhancer;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod path;
pub mod registry;
pub mod representation;
pub mod repository;
pub mod resource;
