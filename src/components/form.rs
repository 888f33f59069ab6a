use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::NodeRef;

/// Current value of an `<input>` or `<select>`, empty if not mounted
pub fn node_value(node: &NodeRef) -> String {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        return input.value();
    }
    node.cast::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}

pub fn clear_inputs(nodes: &[&NodeRef]) {
    for node in nodes {
        if let Some(input) = node.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}

pub const GENDERS: &[&str] = &["Male", "Female", "Other"];
