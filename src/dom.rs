//! Thin helpers over `web-sys` DOM APIs.
//!
//! Event listeners are registered with leaked closures (`Closure::forget`),
//! matching the page-lifetime model: handlers live until the browser tears
//! the page down, and nothing here is ever unmounted.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget};

use crate::error::GuardError;

/// Returns the global document, or the bootstrap error naming what is missing.
pub fn try_document() -> Result<Document, GuardError> {
	web_sys::window()
		.ok_or(GuardError::NoWindow)?
		.document()
		.ok_or(GuardError::NoDocument)
}

/// First element under `root` matching `selector`, if any.
///
/// Selector syntax errors are folded into `None`; a missing optional element
/// and a bad selector get the same silent skip.
pub fn query(root: &Element, selector: &str) -> Option<Element> {
	root.query_selector(selector).ok().flatten()
}

/// All elements under `root` matching `selector`.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
	let Ok(list) = root.query_selector_all(selector) else {
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|index| list.item(index))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// Creates an element, panicking only on invalid tag names.
pub fn create_element(document: &Document, tag: &str) -> Element {
	document
		.create_element(tag)
		.expect("Failed to create element")
}

/// Registers `handler` for `event` on `target` for the rest of the page's life.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
	let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
	target
		.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
		.expect("Failed to add event listener");
	closure.forget(); // page-lifetime handler
}

/// Current value of a form control, empty string for non-control elements.
pub fn value_of(field: &Element) -> String {
	if let Some(input) = field.dyn_ref::<web_sys::HtmlInputElement>() {
		input.value()
	} else if let Some(select) = field.dyn_ref::<web_sys::HtmlSelectElement>() {
		select.value()
	} else {
		field.get_attribute("value").unwrap_or_default()
	}
}

/// Resolves after `ms` milliseconds on the browser's timer queue.
pub async fn sleep(ms: u32) {
	gloo_timers::future::TimeoutFuture::new(ms).await;
}
