//! End-to-end binding flow: a host owns the bound value, adopts every
//! emitted replacement, and forwards filtered ambient bags to a child.

use std::sync::{Arc, Mutex};

use emit_helper::{
    EmitContext, EmitHelper, EmitHelperConfig, Path, Props, ReactiveBinding,
};
use serde_json::{json, Value};

/// Host-side wiring: the `input` handler records each payload and adopts it
/// as the new bound value, the way an owning component re-renders with the
/// emitted value.
fn host(bound: Value) -> (Props, EmitContext, Arc<Mutex<Vec<Value>>>) {
    let props = Props::new();
    props.insert("value", bound);
    let context = EmitContext::new();
    let emitted = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&emitted);
    let adopter = props.clone();
    context.on("input", move |payload| {
        sink.lock().unwrap().push(payload.clone());
        adopter.insert("value", payload);
    });
    (props, context, emitted)
}

#[test]
fn edits_round_trip_through_the_host() {
    let (props, context, emitted) = host(json!({"quantity": 4, "unitPrice": 12.3}));
    let helper = EmitHelper::new(props, context);

    let quantity = helper.vmodel(Some("quantity".into()));
    quantity.set(json!(5)).unwrap();

    // The host adopted the replacement, so the binding reads the new value.
    assert_eq!(quantity.get(), Some(json!(5)));
    assert_eq!(
        *emitted.lock().unwrap(),
        vec![json!({"quantity": 5, "unitPrice": 12.3})]
    );

    helper.emit_with("unitPrice", None).unwrap();
    assert_eq!(helper.vmodel(None).get(), Some(json!({"quantity": 5})));
}

#[test]
fn nested_paths_rebuild_the_whole_value() {
    let (props, context, emitted) = host(json!({
        "item": {"quantity": 4, "tags": ["new", "sale"]},
        "customer": "ada",
    }));
    let helper = EmitHelper::new(props, context);

    helper.emit_with("item.tags.1", json!("clearance")).unwrap();
    helper.emit_with("item.quantity", json!(6)).unwrap();

    assert_eq!(
        helper.vmodel(None).get(),
        Some(json!({
            "item": {"quantity": 6, "tags": ["new", "clearance"]},
            "customer": "ada",
        }))
    );
    assert_eq!(emitted.lock().unwrap().len(), 2);
}

#[test]
fn sequential_emissions_stay_ordered() {
    let (props, context, emitted) = host(json!({"n": 0}));
    let helper = EmitHelper::new(props, context);

    for i in 1..=5 {
        helper.emit_with("n", json!(i)).unwrap();
    }
    let payloads: Vec<Value> = emitted.lock().unwrap().clone();
    assert_eq!(
        payloads,
        (1..=5).map(|i| json!({"n": i})).collect::<Vec<_>>()
    );
}

#[test]
fn ambient_views_filter_only_the_managed_keys() {
    let (props, context, _emitted) = host(json!({}));
    context.on("focus", |_| {});
    context.on("blur", |_| {});
    context.set_attr("value", json!("managed"));
    context.set_attr("placeholder", json!("Quantity"));
    context.set_attr("disabled", json!(false));

    let helper = EmitHelper::new(props, context.clone());

    let listeners = helper.listeners();
    let forwarded = listeners.get();
    assert!(!forwarded.contains_key("input"));
    assert_eq!(
        forwarded.keys().collect::<Vec<_>>(),
        vec!["blur", "focus"]
    );

    let attrs = helper.attrs();
    let forwarded = attrs.get();
    assert!(!forwarded.contains_key("value"));
    assert_eq!(
        forwarded.keys().collect::<Vec<_>>(),
        vec!["disabled", "placeholder"]
    );

    // Views are derived, not snapshots taken at construction time.
    context.on("keydown", |_| {});
    context.remove_attr("disabled");
    assert!(listeners.get().contains_key("keydown"));
    assert!(!attrs.get().contains_key("disabled"));

    // The context's own bags still carry the managed keys.
    assert!(context.listeners().contains_key("input"));
    assert!(context.attrs().contains_key("value"));
}

#[test]
fn custom_names_filter_their_own_keys() {
    let props = Props::new();
    props.insert("modelValue", json!({"a": 1}));
    let context = EmitContext::new();
    context.on("update:modelValue", |_| {});
    context.on("input", |_| {});
    context.set_attr("modelValue", json!(1));
    context.set_attr("value", json!(2));

    let helper = EmitHelper::with_config(
        props,
        context,
        EmitHelperConfig::new("modelValue", "update:modelValue"),
    );

    let forwarded = helper.listeners().get();
    assert!(forwarded.contains_key("input"));
    assert!(!forwarded.contains_key("update:modelValue"));

    let forwarded = helper.attrs().get();
    assert!(forwarded.contains_key("value"));
    assert!(!forwarded.contains_key("modelValue"));
}

#[test]
fn forwarded_listeners_still_fire() {
    let (props, context, _emitted) = host(json!({}));
    let focused = Arc::new(Mutex::new(0usize));
    let counter = Arc::clone(&focused);
    context.on("focus", move |_| *counter.lock().unwrap() += 1);

    let helper = EmitHelper::new(props, context);
    let forwarded = helper.listeners().get();

    // A child wired with the forwarded bag invokes the same handlers.
    forwarded["focus"](Value::Null);
    assert_eq!(*focused.lock().unwrap(), 1);
}

#[test]
fn generic_code_can_hold_any_binding() {
    fn bump<B: ReactiveBinding<Option<Value>>>(binding: &B) {
        let current = binding.get().and_then(|v| v.as_i64()).unwrap_or(0);
        binding.set(Some(json!(current + 1))).unwrap();
    }

    let (props, context, _emitted) = host(json!({"count": 41}));
    let helper = EmitHelper::new(props, context);
    let count = helper.vmodel(Some(Path::parse("count")));

    bump(&count);
    assert_eq!(count.get(), Some(json!(42)));
}
