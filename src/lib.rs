//! FormGuard - client-side validation and UX feedback for a heart disease
//! risk prediction form.
//!
//! The page posts patient data (age, resting blood pressure, cholesterol,
//! max heart rate and a set of categorical codes) to a prediction backend.
//! This crate compiles to WASM and wires four behaviors onto that page:
//!
//! - **Submission guard**: blocks the native form post while required fields
//!   are blank and shows an error toast; a valid submission flips the
//!   primary control into a disabled loading state.
//! - **Real-time validation**: `change`/`blur` checks against inclusive
//!   plausibility ranges for `age`, `trestbps`, `chol` and `thalach`, with
//!   border coloring and a single inline error annotation per field.
//! - **Toasts**: fixed-position, auto-dismissing banners (3000ms visible,
//!   300ms exit animation).
//! - **Result reveal**: smooth-scrolls the result box into view at load.
//!
//! All checks are advisory UX; the backend remains the validation authority.
//!
//! ## Architecture
//!
//! Decision logic ([`rules`], [`guard::missing_required`]) is plain Rust and
//! tested on native targets; DOM wiring sits behind
//! `target_arch = "wasm32"` and is exercised by `wasm-bindgen-test`. The
//! [`start`] entry point mounts everything with [`GuardConfig::default`].

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod guard;
pub mod logging;
pub mod notify;
pub mod rules;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod scroll;

pub use config::GuardConfig;
pub use error::GuardError;
pub use guard::{REQUIRED_MESSAGE, is_blank, missing_required};
pub use notify::ToastKind;
pub use rules::{CLINICAL_FIELDS, FieldRule, RuleSet};
pub use theme::BorderTone;

#[cfg(target_arch = "wasm32")]
pub use guard::{FormGuard, validate_field};
#[cfg(target_arch = "wasm32")]
pub use notify::show_toast;

/// WASM entry point: mounts the guard and reveals the result box.
///
/// The result reveal runs independently of the form wiring; a page with a
/// result but no form still scrolls, and a page with neither does nothing.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let document = dom::try_document()?;
	let config = GuardConfig::default();

	if scroll::reveal_result(&document, &config.result_selector) {
		crate::info_log!("result box revealed");
	}

	match guard::FormGuard::mount(&document, config) {
		Some(_) => crate::info_log!("form guard mounted"),
		None => crate::info_log!("no prediction form on this page"),
	}

	Ok(())
}
