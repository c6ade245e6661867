//! Mount configuration for the form guard.

use serde::Deserialize;

/// Selectors and timing knobs used when mounting [`FormGuard`].
///
/// The defaults match the prediction page's DOM contract. All fields have
/// defaults, so a partial JSON object is enough to override a single knob:
///
/// ```
/// use formguard::GuardConfig;
///
/// let config: GuardConfig = serde_json::from_str(r#"{"reset_settle_ms": 25}"#).unwrap();
/// assert_eq!(config.form_selector, ".prediction-form");
/// assert_eq!(config.reset_settle_ms, 25);
/// ```
///
/// [`FormGuard`]: crate::guard::FormGuard
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
	/// Selector for the form to guard.
	pub form_selector: String,
	/// Selector for the primary action control inside the form.
	pub submit_selector: String,
	/// Selector for the reset control inside the form.
	pub reset_selector: String,
	/// Selector for the optional result element revealed at load.
	pub result_selector: String,
	/// Delay before border cleanup after a reset, letting the native reset
	/// clear field values first.
	pub reset_settle_ms: u32,
}

impl Default for GuardConfig {
	fn default() -> Self {
		Self {
			form_selector: ".prediction-form".into(),
			submit_selector: ".btn-primary".into(),
			reset_selector: ".btn-secondary".into(),
			result_selector: ".result-box".into(),
			reset_settle_ms: 10,
		}
	}
}
