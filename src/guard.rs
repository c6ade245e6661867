//! Submission guard and real-time field validation.
//!
//! [`FormGuard::mount`] wires three behaviors onto the prediction form:
//!
//! - a submit interceptor that blocks submission while required fields are
//!   blank and flips the primary control into a loading state otherwise,
//! - `change`/`blur` validators applying the plausibility rules per field,
//! - a reset handler that restores neutral borders once the native reset
//!   has settled.
//!
//! Handlers are pure functions of the current DOM state plus their event;
//! no state is kept between invocations beyond the DOM itself.

/// Toast message shown when submission is blocked on blank required fields.
pub const REQUIRED_MESSAGE: &str = "Please fill in all required fields";

/// Whether a field value counts as empty for the submission guard.
///
/// Whitespace-only values are blank: the backend would reject them just the
/// same as a missing value.
pub fn is_blank(value: &str) -> bool {
	value.trim().is_empty()
}

/// Names of the required fields whose value is blank.
///
/// This is the submission guard's decision function, separated from the DOM
/// so it runs on native targets too.
pub fn missing_required<'a, I>(fields: I) -> Vec<&'a str>
where
	I: IntoIterator<Item = (&'a str, &'a str)>,
{
	fields
		.into_iter()
		.filter(|(_, value)| is_blank(value))
		.map(|(name, _)| name)
		.collect()
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{FormGuard, validate_field};

#[cfg(target_arch = "wasm32")]
mod wasm {
	use wasm_bindgen::JsCast;
	use web_sys::{Document, Element, HtmlFormElement};

	use super::{REQUIRED_MESSAGE, is_blank, missing_required};
	use crate::config::GuardConfig;
	use crate::notify::{ToastKind, show_toast};
	use crate::rules::{CLINICAL_FIELDS, RuleSet};
	use crate::theme::BorderTone;
	use crate::{debug_log, dom, warn_log};

	/// Markup for the primary control while a submission is in flight.
	const LOADING_LABEL_HTML: &str = r#"<i class="fas fa-spinner fa-spin"></i> Analyzing..."#;

	/// The mounted guard for one form.
	///
	/// All event wiring happens in [`FormGuard::mount`]; the returned value
	/// only gives access to the form and rule set. Dropping it does not
	/// unregister anything: handlers live for the page lifetime.
	pub struct FormGuard {
		form: HtmlFormElement,
		rules: RuleSet,
		config: GuardConfig,
	}

	impl FormGuard {
		/// Mounts the guard with the default clinical rule set.
		///
		/// Returns `None` when no element matches the configured form
		/// selector; a page without the form gets no validation wiring.
		pub fn mount(document: &Document, config: GuardConfig) -> Option<Self> {
			Self::mount_with(document, config, RuleSet::default())
		}

		/// Mounts the guard with an explicit rule set.
		pub fn mount_with(
			document: &Document,
			config: GuardConfig,
			rules: RuleSet,
		) -> Option<Self> {
			let form = document
				.query_selector(&config.form_selector)
				.ok()
				.flatten()?
				.dyn_into::<HtmlFormElement>()
				.ok()?;

			let guard = Self {
				form,
				rules,
				config,
			};
			guard.log_unrecognized_fields();
			guard.install_field_validators();
			guard.install_submit_guard();
			guard.install_reset_handler();
			Some(guard)
		}

		/// The guarded form element.
		pub fn form(&self) -> &HtmlFormElement {
			&self.form
		}

		/// The active rule set.
		pub fn rules(&self) -> &RuleSet {
			&self.rules
		}

		fn log_unrecognized_fields(&self) {
			for field in dom::query_all(&self.form, "input[name], select[name]") {
				if let Some(name) = field.get_attribute("name")
					&& !CLINICAL_FIELDS.contains(&name.as_str())
				{
					debug_log!("field name not in the clinical roster: {}", name);
				}
			}
		}

		/// Wires `change` and `blur` on every control; both events run the
		/// same validator, so their outcome for a given value is identical.
		fn install_field_validators(&self) {
			for field in dom::query_all(&self.form, "input, select") {
				for event in ["change", "blur"] {
					let rules = self.rules.clone();
					let captured = field.clone();
					dom::listen(&field, event, move |_| {
						validate_field(&captured, &rules);
					});
				}
			}
		}

		fn install_submit_guard(&self) {
			let form = self.form.clone();
			let config = self.config.clone();

			dom::listen(&self.form, "submit", move |event| {
				let required = dom::query_all(&form, "[required]");
				let names: Vec<(String, String)> = required
					.iter()
					.map(|field| {
						(
							field.get_attribute("name").unwrap_or_default(),
							dom::value_of(field),
						)
					})
					.collect();
				let blank =
					missing_required(names.iter().map(|(n, v)| (n.as_str(), v.as_str())));

				if !blank.is_empty() {
					for field in &required {
						if is_blank(&dom::value_of(field)) {
							set_border(field, BorderTone::Danger);
						}
					}
					event.prevent_default();
					warn_log!("submission blocked, blank required fields: {:?}", blank);
					show_toast(REQUIRED_MESSAGE, ToastKind::Error);
					return;
				}

				if let Some(button) = dom::query(&form, &config.submit_selector) {
					enter_loading_state(&button);
				}
			});
		}

		/// Border cleanup runs after a short delay so the native reset has
		/// already cleared the field values. Error annotations are left in
		/// place; only borders are restored.
		fn install_reset_handler(&self) {
			let Some(reset) = dom::query(&self.form, &self.config.reset_selector) else {
				debug_log!("no reset control matching {}", self.config.reset_selector);
				return;
			};

			let form = self.form.clone();
			let settle_ms = self.config.reset_settle_ms;
			dom::listen(&reset, "click", move |_| {
				let form = form.clone();
				wasm_bindgen_futures::spawn_local(async move {
					dom::sleep(settle_ms).await;
					for field in dom::query_all(&form, "input, select") {
						set_border(&field, BorderTone::Neutral);
					}
				});
			});
		}
	}

	/// Validates one field and updates its border and error annotation.
	///
	/// Blank values are the submission guard's concern: they reset the field
	/// to neutral here. A present value gets the rule check; unlisted fields
	/// always pass it.
	pub fn validate_field(field: &Element, rules: &RuleSet) {
		let name = field.get_attribute("name").unwrap_or_default();
		let value = dom::value_of(field);

		if is_blank(&value) {
			set_border(field, BorderTone::Neutral);
			clear_annotation(field);
			return;
		}

		match rules.check(&name, &value) {
			Ok(()) => {
				set_border(field, BorderTone::Success);
				clear_annotation(field);
			}
			Err(message) => {
				set_border(field, BorderTone::Danger);
				render_annotation(field, &message);
			}
		}
	}

	fn set_border(field: &Element, tone: BorderTone) {
		if let Some(element) = field.dyn_ref::<web_sys::HtmlElement>() {
			element
				.style()
				.set_property("border-color", tone.css())
				.expect("Failed to set border color");
		}
	}

	/// Removes the field's error annotation, if present.
	///
	/// The annotation is always the immediate next sibling, which is what
	/// keeps the one-annotation-per-field invariant checkable locally.
	fn clear_annotation(field: &Element) {
		if let Some(sibling) = field.next_element_sibling()
			&& sibling.class_list().contains("error-message")
		{
			sibling.remove();
		}
	}

	/// Renders the error annotation directly after the field, replacing any
	/// prior one.
	fn render_annotation(field: &Element, message: &str) {
		clear_annotation(field);

		let Ok(document) = dom::try_document() else {
			return;
		};

		let annotation = dom::create_element(&document, "div");
		annotation
			.set_attribute("class", "error-message")
			.expect("Failed to set annotation class");
		annotation
			.set_attribute(
				"style",
				"color: var(--danger-red); font-size: 0.85rem; margin-top: 4px;",
			)
			.expect("Failed to set annotation style");

		let icon = dom::create_element(&document, "i");
		icon.set_attribute("class", "fas fa-exclamation-triangle")
			.expect("Failed to set annotation icon class");
		annotation
			.append_child(&icon)
			.expect("Failed to append annotation icon");

		let text = dom::create_element(&document, "span");
		text.set_attribute("style", "margin-left: 6px;")
			.expect("Failed to set annotation text style");
		text.set_text_content(Some(message));
		annotation
			.append_child(&text)
			.expect("Failed to append annotation text");

		field
			.insert_adjacent_element("afterend", &annotation)
			.expect("Failed to insert error annotation");
	}

	/// Disables the primary control and swaps its label for a spinner.
	fn enter_loading_state(button: &Element) {
		if let Some(button) = button.dyn_ref::<web_sys::HtmlButtonElement>() {
			button.set_disabled(true);
		} else {
			let _ = button.set_attribute("disabled", "disabled");
		}
		button.set_inner_html(LOADING_LABEL_HTML);
	}
}
