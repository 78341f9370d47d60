//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - the single outbound GET used by the fetch action

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
