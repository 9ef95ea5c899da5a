//! Service outcome envelope
//!
//! Every service reports expected business failures as a value rather than an error.

mod either;

pub use either::{DomainFailure, Either, Outcome};
