//! Browser tests for the form guard: run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use formguard::{FormGuard, GuardConfig, RuleSet, ToastKind, show_toast, validate_field};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, EventInit, HtmlButtonElement, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
<form class="prediction-form" action="/predict" method="post">
	<input type="number" name="age" required>
	<input type="number" name="chol">
	<select name="sex" required>
		<option value="">Select...</option>
		<option value="1">Male</option>
		<option value="0">Female</option>
	</select>
	<button type="submit" class="btn-primary">Predict</button>
	<button type="reset" class="btn-secondary">Reset</button>
</form>
"#;

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn install_fixture() {
	document().body().unwrap().set_inner_html(FIXTURE);
}

fn mount() -> FormGuard {
	FormGuard::mount(&document(), GuardConfig::default()).expect("fixture form should mount")
}

fn input(name: &str) -> HtmlInputElement {
	document()
		.query_selector(&format!("[name='{name}']"))
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap()
}

fn border_of(element: &HtmlElement) -> String {
	element.style().get_property_value("border-color").unwrap()
}

fn annotation_after(element: &HtmlElement) -> Option<web_sys::Element> {
	element
		.next_element_sibling()
		.filter(|sibling| sibling.class_list().contains("error-message"))
}

fn dispatch(target: &web_sys::EventTarget, event: &str) {
	let event = Event::new(event).unwrap();
	target.dispatch_event(&event).unwrap();
}

fn dispatch_submit(form: &web_sys::EventTarget) -> bool {
	let init = EventInit::new();
	init.set_cancelable(true);
	let event = Event::new_with_event_init_dict("submit", &init).unwrap();
	form.dispatch_event(&event).unwrap();
	event.default_prevented()
}

fn toast_count() -> u32 {
	document()
		.query_selector_all(".notification")
		.unwrap()
		.length()
}

#[wasm_bindgen_test]
fn mount_returns_none_without_form() {
	document().body().unwrap().set_inner_html("<p>no form here</p>");
	assert!(FormGuard::mount(&document(), GuardConfig::default()).is_none());
}

#[wasm_bindgen_test]
fn change_then_blur_yields_exactly_one_annotation() {
	install_fixture();
	let _guard = mount();

	let chol = input("chol");
	chol.set_value("700");
	dispatch(&chol, "change");

	let annotation = annotation_after(&chol).expect("out-of-range value should be annotated");
	assert!(
		annotation
			.text_content()
			.unwrap()
			.contains("Cholesterol value seems unusual (100-600 mg/dl)")
	);
	assert_eq!(border_of(&chol), "var(--danger-red)");

	// Same value on blur: identical outcome, no stacked annotation.
	dispatch(&chol, "blur");
	let annotation = annotation_after(&chol).expect("annotation should survive blur");
	assert!(
		annotation
			.next_element_sibling()
			.map(|next| !next.class_list().contains("error-message"))
			.unwrap_or(true)
	);
}

#[wasm_bindgen_test]
fn correcting_a_value_clears_the_annotation() {
	install_fixture();
	let _guard = mount();

	let chol = input("chol");
	chol.set_value("700");
	dispatch(&chol, "change");
	assert!(annotation_after(&chol).is_some());

	chol.set_value("250");
	dispatch(&chol, "change");
	assert!(annotation_after(&chol).is_none());
	assert_eq!(border_of(&chol), "var(--success-green)");
}

#[wasm_bindgen_test]
fn boundary_values_validate_through_the_dom() {
	install_fixture();
	let _guard = mount();

	let age = input("age");
	age.set_value("120");
	dispatch(&age, "change");
	assert!(annotation_after(&age).is_none());
	assert_eq!(border_of(&age), "var(--success-green)");

	age.set_value("121");
	dispatch(&age, "change");
	assert!(annotation_after(&age).is_some());
	assert_eq!(border_of(&age), "var(--danger-red)");
}

#[wasm_bindgen_test]
fn clearing_a_field_returns_it_to_neutral() {
	install_fixture();
	let _guard = mount();

	let age = input("age");
	age.set_value("121");
	dispatch(&age, "change");
	assert!(annotation_after(&age).is_some());

	age.set_value("");
	dispatch(&age, "change");
	assert!(annotation_after(&age).is_none());
	assert_eq!(border_of(&age), "var(--medium-gray)");
}

#[wasm_bindgen_test]
fn blank_required_fields_block_submission() {
	install_fixture();
	let _guard = mount();

	let form = document().query_selector(".prediction-form").unwrap().unwrap();
	let toasts_before = toast_count();

	let prevented = dispatch_submit(&form);
	assert!(prevented, "submission with blank required fields must be cancelled");
	assert_eq!(border_of(&input("age")), "var(--danger-red)");
	assert_eq!(toast_count(), toasts_before + 1);

	// Optional field left blank plays no part in the block.
	assert_eq!(border_of(&input("chol")), "");
}

#[wasm_bindgen_test]
fn valid_submission_enters_loading_state() {
	install_fixture();
	let _guard = mount();

	input("age").set_value("54");
	let sex: web_sys::HtmlSelectElement = document()
		.query_selector("[name='sex']")
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap();
	sex.set_value("1");

	let form = document().query_selector(".prediction-form").unwrap().unwrap();
	let prevented = dispatch_submit(&form);
	assert!(!prevented, "a fully filled required set must submit");

	let button: HtmlButtonElement = document()
		.query_selector(".btn-primary")
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap();
	assert!(button.disabled());
	assert!(button.inner_html().contains("fa-spinner"));
}

#[wasm_bindgen_test]
async fn toast_auto_dismisses_within_the_display_window() {
	install_fixture();
	let before = toast_count();

	show_toast("Prediction saved", ToastKind::Success);
	assert_eq!(toast_count(), before + 1);

	// 3000ms visible + 300ms exit, with headroom for timer jitter.
	TimeoutFuture::new(3600).await;
	assert_eq!(toast_count(), before);
}

#[wasm_bindgen_test]
fn animation_styles_are_injected_once() {
	install_fixture();
	show_toast("one", ToastKind::Error);
	show_toast("two", ToastKind::Error);

	let blocks = document()
		.query_selector_all("#formguard-animations")
		.unwrap();
	assert_eq!(blocks.length(), 1);
}

#[wasm_bindgen_test]
async fn reset_restores_neutral_borders() {
	install_fixture();
	let _guard = mount();

	let age = input("age");
	age.set_value("121");
	dispatch(&age, "change");
	assert_eq!(border_of(&age), "var(--danger-red)");

	let reset: HtmlElement = document()
		.query_selector(".btn-secondary")
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap();
	reset.click();

	// Cleanup is deferred past the native reset; give it time to land.
	TimeoutFuture::new(100).await;
	assert_eq!(border_of(&age), "var(--medium-gray)");
	// Annotations are intentionally untouched by reset.
	assert!(annotation_after(&age).is_some());
}

#[wasm_bindgen_test]
fn validate_field_is_idempotent_for_a_given_value() {
	install_fixture();
	let rules = RuleSet::default();

	let trestbps = document().create_element("input").unwrap();
	trestbps.set_attribute("name", "trestbps").unwrap();
	document().body().unwrap().append_child(&trestbps).unwrap();
	let control: HtmlInputElement = trestbps.clone().dyn_into().unwrap();
	control.set_value("250");

	validate_field(&trestbps, &rules);
	validate_field(&trestbps, &rules);

	let annotation = trestbps.next_element_sibling().unwrap();
	assert!(annotation.class_list().contains("error-message"));
	assert!(
		annotation
			.next_element_sibling()
			.map(|next| !next.class_list().contains("error-message"))
			.unwrap_or(true)
	);
}
