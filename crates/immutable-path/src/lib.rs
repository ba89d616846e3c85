//! Immutable path-based editing of JSON-like values.
//!
//! This crate provides `get`, `set`, and `unset` over [`serde_json::Value`]
//! addressed by a dotted or step-built [`Path`]. The editing operations never
//! mutate their input; each returns a new top-level value with the edit
//! applied, which is what a component needs to hand a replacement value back
//! to its owner.
//!
//! # Example
//!
//! ```
//! use immutable_path::{get, set, unset, Path};
//! use serde_json::json;
//!
//! let doc = json!({"item": {"quantity": 4, "unitPrice": 12.3}});
//! let path = Path::parse("item.quantity");
//!
//! assert_eq!(get(&doc, &path), Some(&json!(4)));
//!
//! let next = set(&doc, &path, json!(5)).unwrap();
//! assert_eq!(next, json!({"item": {"quantity": 5, "unitPrice": 12.3}}));
//!
//! let next = unset(&next, &Path::parse("item.unitPrice")).unwrap();
//! assert_eq!(next, json!({"item": {"quantity": 5}}));
//!
//! // The original is never touched.
//! assert_eq!(doc, json!({"item": {"quantity": 4, "unitPrice": 12.3}}));
//! ```

use thiserror::Error;

pub mod edit;
pub mod get;
pub mod types;

pub use edit::{set, unset};
pub use get::get;
pub use types::{Path, PathStep};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path traverses a non-container value")]
    NotTraversable,
    #[error("array index is invalid or out of range")]
    InvalidIndex,
    #[error("the root value has no parent to remove from")]
    NoParent,
}
