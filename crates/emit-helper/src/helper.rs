//! The emit helper: path-based emission plus reactive bindings around an
//! immutable bound value.

use std::collections::BTreeMap;

use immutable_path::{self as path_util, Path, PathError};
use serde_json::Value;
use thiserror::Error;

use crate::computed::Computed;
use crate::config::EmitHelperConfig;
use crate::context::{omit_key, EmitContext, EventHandler};
use crate::props::Props;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmitError {
    #[error("prop {0:?} is missing from props")]
    PropMissing(String),
    #[error(transparent)]
    Path(#[from] PathError),
}

/// Getter/setter pair over a reactive source.
///
/// The read side re-derives from the live source on every call; the write
/// side requests a new value upstream and may fail synchronously.
pub trait ReactiveBinding<T> {
    fn get(&self) -> T;
    fn set(&self, value: T) -> Result<(), EmitError>;
}

/// Binding accessors around one immutable bound value.
///
/// The helper owns no state: every accessor reads the current props/context
/// through shared handles, and every write emits a fully reconstructed value
/// under the configured event name instead of mutating anything in place.
///
/// # Example
///
/// ```
/// use emit_helper::{EmitContext, EmitHelper, Props};
/// use serde_json::json;
///
/// let props = Props::new();
/// props.insert("value", json!({"quantity": 4, "unitPrice": 12.3}));
///
/// let context = EmitContext::new();
/// {
///     // The owner adopts each emitted replacement as the new bound value.
///     let props = props.clone();
///     context.on("input", move |next| props.insert("value", next));
/// }
///
/// let helper = EmitHelper::new(props, context);
/// let quantity = helper.vmodel(Some("quantity".into()));
///
/// assert_eq!(quantity.get(), Some(json!(4)));
/// quantity.set(json!(5)).unwrap();
/// assert_eq!(quantity.get(), Some(json!(5)));
///
/// helper.emit_with("unitPrice", None).unwrap();
/// assert_eq!(helper.vmodel(None).get(), Some(json!({"quantity": 5})));
/// ```
pub struct EmitHelper {
    props: Props,
    context: EmitContext,
    config: EmitHelperConfig,
}

impl EmitHelper {
    /// Build a helper with the conventional `value`/`input` names.
    pub fn new(props: Props, context: EmitContext) -> Self {
        EmitHelper::with_config(props, context, EmitHelperConfig::default())
    }

    /// Build a helper with explicit prop/event names. A missing prop key is
    /// not validated here; it surfaces as [`EmitError::PropMissing`] at
    /// read/emit time.
    pub fn with_config(props: Props, context: EmitContext, config: EmitHelperConfig) -> Self {
        EmitHelper {
            props,
            context,
            config,
        }
    }

    /// Emit the bound value with the location at `path` replaced by `value`,
    /// or removed when `value` is `None`.
    ///
    /// Exactly one event fires per successful call; an erroring call emits
    /// nothing. The emission is synchronous: the registered handler has run
    /// by the time this returns.
    pub fn emit_with(
        &self,
        path: impl Into<Path>,
        value: impl Into<Option<Value>>,
    ) -> Result<(), EmitError> {
        emit_update(
            &self.props,
            &self.context,
            &self.config,
            &path.into(),
            value.into(),
        )
    }

    /// A two-way binding for the location at `path`, or for the whole bound
    /// value when `path` is `None`.
    ///
    /// With a path, writes go through [`emit_with`](EmitHelper::emit_with),
    /// deletion sentinel included. With `None`, a write emits the written
    /// value directly as the new whole bound value, bypassing the per-path
    /// merge.
    pub fn vmodel(&self, path: Option<Path>) -> VModel {
        VModel {
            props: self.props.clone(),
            context: self.context.clone(),
            config: self.config.clone(),
            path,
        }
    }

    /// Derived view of the ambient listeners minus the configured event, for
    /// forwarding to a nested child without duplicating the managed event.
    pub fn listeners(&self) -> Computed<BTreeMap<String, EventHandler>> {
        let context = self.context.clone();
        let event = self.config.event.clone();
        Computed::new(move || omit_key(&context.listeners(), &event))
    }

    /// Derived view of the ambient attrs minus the configured prop, for
    /// forwarding to a nested child without duplicating the managed value.
    pub fn attrs(&self) -> Computed<BTreeMap<String, Value>> {
        let context = self.context.clone();
        let prop = self.config.prop.clone();
        Computed::new(move || omit_key(&context.attrs(), &prop))
    }
}

/// A reactive two-way binding produced by [`EmitHelper::vmodel`].
pub struct VModel {
    props: Props,
    context: EmitContext,
    config: EmitHelperConfig,
    path: Option<Path>,
}

impl VModel {
    /// The current value at the binding's path inside the current bound
    /// value. Re-reads props on every call.
    pub fn get(&self) -> Option<Value> {
        let current = self.props.get(&self.config.prop)?;
        match &self.path {
            Some(path) => path_util::get(&current, path).cloned(),
            None => Some(current),
        }
    }

    /// Request a new value at the binding's path: emits a reconstructed
    /// whole value, or removes the key when `value` is `None`.
    ///
    /// A binding built without a path emits the written value directly (the
    /// sentinel arrives as `Value::Null`, there being no key to delete).
    pub fn set(&self, value: impl Into<Option<Value>>) -> Result<(), EmitError> {
        let value = value.into();
        match &self.path {
            Some(path) => emit_update(&self.props, &self.context, &self.config, path, value),
            None => {
                self.context
                    .emit(&self.config.event, value.unwrap_or(Value::Null));
                Ok(())
            }
        }
    }
}

impl ReactiveBinding<Option<Value>> for VModel {
    fn get(&self) -> Option<Value> {
        VModel::get(self)
    }

    fn set(&self, value: Option<Value>) -> Result<(), EmitError> {
        VModel::set(self, value)
    }
}

fn emit_update(
    props: &Props,
    context: &EmitContext,
    config: &EmitHelperConfig,
    path: &Path,
    value: Option<Value>,
) -> Result<(), EmitError> {
    let current = props
        .get(&config.prop)
        .ok_or_else(|| EmitError::PropMissing(config.prop.clone()))?;
    let next = match value {
        Some(value) => path_util::set(&current, path, value)?,
        None => path_util::unset(&current, path)?,
    };
    context.emit(&config.event, next);
    Ok(())
}
