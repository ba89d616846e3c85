//! Binding helper for components that edit an immutable input value.
//!
//! A child component receives a nested, immutable bound value through its
//! props and "edits" it by emitting a fully reconstructed replacement upward
//! on every change. [`EmitHelper`] wires that pattern up from four pieces:
//!
//! - [`EmitHelper::emit_with`]: emit the bound value with one path replaced
//!   (or removed, when the written value is `None`);
//! - [`EmitHelper::vmodel`]: a reactive get/set binding for one path;
//! - [`EmitHelper::listeners`] / [`EmitHelper::attrs`]: derived views of the
//!   ambient bags minus the one entry this helper manages, ready to forward
//!   to a nested child.
//!
//! Path editing semantics come from the [`immutable_path`] crate; the helper
//! itself holds no state and never mutates the bound value in place.

pub mod computed;
pub mod config;
pub mod context;
pub mod helper;
pub mod props;

pub use computed::Computed;
pub use config::{EmitHelperConfig, DEFAULT_EVENT, DEFAULT_PROP};
pub use context::{omit_key, EmitContext, EventHandler};
pub use helper::{EmitError, EmitHelper, ReactiveBinding, VModel};
pub use props::Props;

// Path types re-exported so callers rarely need the path crate directly.
pub use immutable_path::{Path, PathStep};
