//! Operation subdomain: what a compute request asks for.
//!
//! - [`kind::OperationKind`]: the allow-list of operation keys
//! - [`bounded`]: bounded integer/array validators
//! - [`request::OperationRequest`]: the validated tagged union
//! - [`output::OperationOutput`]: executor results

pub mod bounded;
pub mod kind;
pub mod output;
pub mod request;
