//! Named constants for the standard HTTP response status codes.
//!
//! Remembering that `412` means "Precondition Failed" is not something anyone should have to do.
//! This crate gives every status code a name, records which RFC section defines it, and offers a
//! couple of small helpers to work with codes at runtime.
//!
//! For most uses, the plain constants in the [`status`] module are all you need:
//!
//! ```
//! use http_status::status;
//!
//! fn respond(found: bool) -> u16 {
//!     if found { status::OK } else { status::NOT_FOUND }
//! }
//!
//! assert_eq!(respond(false), 404);
//! ```
//!
//! If you need more than the number, use [`StatusCode`]:
//!
//! ```
//! use http_status::{StatusClass, StatusCode};
//!
//! let code = StatusCode::NOT_FOUND;
//! assert_eq!(code.value(), 404);
//! assert_eq!(code.class(), StatusClass::ClientError);
//! assert_eq!(code.reference().to_string(), "RFC 2616, Section 10.4.5");
//! assert_eq!(code.to_string(), "404 Not Found");
//! ```
//!
//! Codes received from elsewhere can be looked up in the [`registry`], or classified with
//! [`classify`]. Classification works on any integer, registered or not:
//!
//! ```
//! use http_status::{classify, registry, StatusClass};
//!
//! assert_eq!(registry::value_of("OK"), Ok(200));
//! assert_eq!(classify(299), StatusClass::Success);
//! assert_eq!(classify(99), StatusClass::Unknown);
//! ```
//!
//! # Logging
//!
//! Failed lookups are reported at the `debug` level, and out of range classifications at the
//! `trace` level, through the [`log`](https://docs.rs/log) facade. The offending value is attached
//! as a structured key-value. This crate never installs a logger itself.
//!
//! # Registered codes
//!
//! The table covers the codes defined by RFC 2295, RFC 2518, RFC 2616, RFC 2774,
//! RFC 3229, RFC 4918, RFC 5842, RFC 6585 and RFC 8297. Codes from later documents (e.g. `308`,
//! `418`, `429`) are not registered, though they still classify correctly.
mod class;
mod error;
mod reference;
pub mod registry;
pub mod status;

pub use class::{classify, StatusClass, StatusInteger};
pub use error::Error;
pub use reference::Reference;
pub use status::StatusCode;
