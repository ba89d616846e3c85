//! A parent/child wiring in miniature: the parent owns an immutable line
//! item, the child edits nested fields through bindings, and every edit
//! travels upward as a whole-value replacement.

use emit_helper::{EmitContext, EmitHelper, Props};
use serde_json::json;

fn main() {
    let props = Props::new();
    props.insert(
        "value",
        json!({"item": {"quantity": 4, "unitPrice": 12.3}, "note": "rush order"}),
    );

    let context = EmitContext::new();
    {
        // Parent: adopt each emitted replacement as the new bound value.
        let adopter = props.clone();
        context.on("input", move |next| {
            println!("input <- {next}");
            adopter.insert("value", next);
        });
    }
    context.on("focus", |_| println!("child focused"));
    context.set_attr("value", json!("managed"));
    context.set_attr("placeholder", json!("Quantity"));

    let helper = EmitHelper::new(props.clone(), context);

    let quantity = helper.vmodel(Some("item.quantity".into()));
    println!("quantity = {:?}", quantity.get());
    quantity.set(json!(5)).expect("quantity is a settable path");
    println!("quantity = {:?}", quantity.get());

    helper
        .emit_with("item.unitPrice", None)
        .expect("unitPrice is a removable path");
    println!("value = {}", props.get("value").expect("value prop"));

    // Everything except the managed entries is forwarded to a nested child.
    println!(
        "forwarded listeners = {:?}",
        helper.listeners().get().keys().collect::<Vec<_>>()
    );
    println!(
        "forwarded attrs = {:?}",
        helper.attrs().get().keys().collect::<Vec<_>>()
    );
}
