//! One-shot reveal of the prediction result.

use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Smooth-scrolls the result element into the vertical center of the
/// viewport.
///
/// Runs once at load; returns `false` when the page has no result element,
/// which is the normal case before the first prediction.
pub fn reveal_result(document: &Document, selector: &str) -> bool {
	let Some(result) = document.query_selector(selector).ok().flatten() else {
		return false;
	};

	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	options.set_block(ScrollLogicalPosition::Center);
	result.scroll_into_view_with_scroll_into_view_options(&options);
	true
}
