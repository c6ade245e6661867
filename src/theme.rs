//! Visual constants shared by the guard and the toast renderer.
//!
//! Colors reference the page's theme tokens (`--danger-red`, `--medium-gray`,
//! `--success-green`) via `var(...)`; this crate never defines them. Toast
//! backgrounds carry a hex fallback matching the prediction backend's result
//! palette.

/// Border color applied to a field, expressed as a CSS value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderTone {
	/// Out-of-range or missing-required flag.
	Danger,
	/// Default/untouched state, restored on reset.
	Neutral,
	/// Value present and plausible.
	Success,
}

impl BorderTone {
	/// CSS value for this tone.
	pub fn css(&self) -> &'static str {
		match self {
			Self::Danger => "var(--danger-red)",
			Self::Neutral => "var(--medium-gray)",
			Self::Success => "var(--success-green)",
		}
	}
}

/// Toast background for error notifications, with hex fallback.
pub const TOAST_ERROR_BACKGROUND: &str = "var(--danger-red, #dc3545)";

/// Toast background for success notifications, with hex fallback.
pub const TOAST_SUCCESS_BACKGROUND: &str = "var(--success-green, #28a745)";

/// How long a toast stays fully visible.
pub const TOAST_VISIBLE_MS: u32 = 3000;

/// Duration of the toast exit animation before removal.
pub const TOAST_EXIT_MS: u32 = 300;

/// `id` of the injected `<style>` block; used to inject it at most once.
pub const STYLE_BLOCK_ID: &str = "formguard-animations";

/// Keyframes for toast entry and exit, injected once per page.
pub const KEYFRAMES_CSS: &str = "\
@keyframes slideIn {
	from { transform: translateX(120%); opacity: 0; }
	to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOut {
	from { transform: translateX(0); opacity: 1; }
	to { transform: translateX(120%); opacity: 0; }
}";
