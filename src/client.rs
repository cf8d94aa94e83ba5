//! Glif API client
//!
//! Builds run requests, posts them to the Glif API and decodes the raw result.

pub mod invoker;
pub mod request;
pub mod response;

pub use invoker::{build_run_url, GlifClient, GlifInvoker};
pub use request::{GlifInputs, RunRequest};
pub use response::GlifResult;
