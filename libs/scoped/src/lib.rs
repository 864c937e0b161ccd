//! # sid-scoped
//!
//! Scoped identifiers: a reference to a resource inside a named scope,
//! optionally pinned to a version. Think of it as a typed database reference
//! with a stable textual form.
//!
//! ## Format
//!
//! `{scope}/{id}` or `{scope}/{id}/{version}`
//!
//! - `scope` is a non-empty category name, e.g. `modules`
//! - `id` is a 24-hex-digit [`ObjectId`]
//! - `version` is an [`ObjectId`] or a symbolic tag such as `latest`
//!
//! Examples:
//! - `modules/511083bb08ce6b1b00000003`
//! - `modules/511083bb08ce6b1b00000003/511083bb08ce6b1b00000006`
//!
//! ```
//! use sid_scoped::ScopedId;
//!
//! let sid = ScopedId::create("modules", Some("511083bb08ce6b1b00000003"), None).unwrap();
//! assert_eq!(sid.to_string(), "modules/511083bb08ce6b1b00000003");
//! assert!(sid.equals("modules/511083bb08ce6b1b00000003"));
//! assert!(!ScopedId::is_valid("modules"));
//! ```

mod error;
mod input;
mod scoped;
mod sink;

pub use error::ScopedIdError;
pub use input::{ScopedIdFields, ScopedIdInput};
pub use scoped::{equals, ScopedId, VersionRef, GRAMMAR_PATTERN};
pub use sink::ParseSink;

/// Re-export the object id type scoped ids are built from
pub use sid_objectid::{ObjectId, ObjectIdError};
