//! Testing utilities for the octokit client.
//!
//! Provides a recording session that stands in for the network, so
//! applications built on this crate can test against canned responses.

mod mock;

pub use mock::{MockCall, MockResponse, MockSession};
