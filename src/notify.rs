//! Transient toast notifications.
//!
//! Each call to [`show_toast`] is independent: toasts stack at the same
//! anchor point, auto-dismiss after a fixed window, and are never queued,
//! de-duplicated, or cancelled. A toast scheduled for removal on a page the
//! user has already left simply never fires; the browser tears it down.

use crate::theme;

/// Which palette and icon a toast uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
	/// Red banner with an alert icon.
	Error,
	/// Green banner with a check icon.
	Success,
}

impl ToastKind {
	/// Font Awesome icon class for this kind.
	pub fn icon_class(&self) -> &'static str {
		match self {
			Self::Error => "fas fa-exclamation-circle",
			Self::Success => "fas fa-check-circle",
		}
	}

	/// CSS background value for this kind.
	pub fn background(&self) -> &'static str {
		match self {
			Self::Error => theme::TOAST_ERROR_BACKGROUND,
			Self::Success => theme::TOAST_SUCCESS_BACKGROUND,
		}
	}
}

/// Shows a fixed-position toast and schedules its removal.
///
/// The toast stays visible for [`theme::TOAST_VISIBLE_MS`], plays the
/// `slideOut` exit animation for [`theme::TOAST_EXIT_MS`], then removes
/// itself from the DOM.
#[cfg(target_arch = "wasm32")]
pub fn show_toast(message: &str, kind: ToastKind) {
	use wasm_bindgen::JsCast;

	use crate::dom;
	use crate::error_log;

	let Ok(document) = dom::try_document() else {
		return;
	};
	let Some(body) = document.body() else {
		error_log!("toast dropped: document has no <body>");
		return;
	};

	ensure_animation_styles(&document);

	let toast = dom::create_element(&document, "div");
	toast
		.set_attribute("class", "notification")
		.expect("Failed to set toast class");
	toast
		.set_attribute(
			"style",
			&format!(
				"position: fixed; top: 20px; right: 20px; padding: 12px 20px; \
				 border-radius: 8px; color: white; background: {}; \
				 box-shadow: 0 0.5rem 1rem rgba(0, 0, 0, 0.15); z-index: 1000; \
				 animation: slideIn 0.3s ease;",
				kind.background()
			),
		)
		.expect("Failed to set toast style");

	let icon = dom::create_element(&document, "i");
	icon.set_attribute("class", kind.icon_class())
		.expect("Failed to set toast icon class");
	toast
		.append_child(&icon)
		.expect("Failed to append toast icon");

	let text = dom::create_element(&document, "span");
	text.set_attribute("style", "margin-left: 8px;")
		.expect("Failed to set toast text style");
	text.set_text_content(Some(message));
	toast
		.append_child(&text)
		.expect("Failed to append toast text");

	body.append_child(&toast)
		.expect("Failed to append toast to body");

	wasm_bindgen_futures::spawn_local(async move {
		dom::sleep(theme::TOAST_VISIBLE_MS).await;
		if let Some(element) = toast.dyn_ref::<web_sys::HtmlElement>() {
			let _ = element
				.style()
				.set_property("animation", "slideOut 0.3s ease forwards");
		}
		dom::sleep(theme::TOAST_EXIT_MS).await;
		toast.remove();
	});
}

/// Injects the `slideIn`/`slideOut` keyframes once per page.
///
/// Idempotence is checked against the DOM (by element id), not process
/// state; a second mount on the same page reuses the existing block.
#[cfg(target_arch = "wasm32")]
fn ensure_animation_styles(document: &web_sys::Document) {
	use crate::dom;

	if document.get_element_by_id(theme::STYLE_BLOCK_ID).is_some() {
		return;
	}
	let Some(head) = document.head() else {
		return;
	};

	let style = dom::create_element(document, "style");
	style.set_id(theme::STYLE_BLOCK_ID);
	style.set_text_content(Some(theme::KEYFRAMES_CSS));
	head.append_child(&style)
		.expect("Failed to inject animation styles");
}
