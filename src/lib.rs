//! Catalog of HTTP status codes with their reason phrases.
//!
//! ```
//! use http_status_catalog::{lookup, HttpStatus};
//!
//! let not_found = lookup(404).unwrap();
//! assert_eq!(not_found, &HttpStatus::NOT_FOUND);
//! assert_eq!(not_found.with_message("user not found").to_string(), "404 Not Found: user not found");
//! assert!(lookup(600).is_none());
//! ```

mod error;
mod http_status;

pub use error::ParseStatusError;
pub use http_status::{lookup, HttpStatus, StatusClass};
