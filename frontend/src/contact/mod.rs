//! Contact form: service-dependent document uploads, validation and the
//! single-attempt webhook submission.

pub mod fields;
pub mod form;
pub mod mount;
pub mod payload;
pub mod requirements;
pub mod service;
pub mod snapshot;
pub mod submission;
pub mod validation;
