//! Error types for guard bootstrap.

use thiserror::Error;

/// Failures while acquiring the browser environment.
///
/// Only the bootstrap path can fail; everything after mount is a UI state
/// change. Optional page elements (no form, no reset control, no result box)
/// are represented as `Option`, never as errors.
#[derive(Debug, Error)]
pub enum GuardError {
	/// No global `window` object.
	#[error("window object not available")]
	NoWindow,

	/// `window.document` is missing.
	#[error("document object not available")]
	NoDocument,
}

#[cfg(target_arch = "wasm32")]
impl From<GuardError> for wasm_bindgen::JsValue {
	fn from(error: GuardError) -> Self {
		wasm_bindgen::JsValue::from_str(&error.to_string())
	}
}
