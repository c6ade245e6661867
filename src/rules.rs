//! Plausible-range rules for clinical form fields.
//!
//! Rules are advisory: an out-of-range value is flagged inline but never
//! blocks submission. Only the fields named in the default rule set are
//! range-checked; every other field passes as long as a value is present.
//!
//! Rules are plain serializable data, so a rule set can also be shipped
//! from the server as JSON instead of using the built-in defaults.

use serde::{Deserialize, Serialize};

/// Every clinical feature the prediction form submits.
///
/// Only four of these carry a plausibility rule; the rest are categorical
/// codes the form constrains through `<select>` options. The roster is used
/// for mount-time diagnostics.
pub const CLINICAL_FIELDS: [&str; 13] = [
	"age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang", "oldpeak",
	"slope", "ca", "thal",
];

/// An inclusive plausibility range for one named field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
	/// Form field name the rule applies to (e.g. `"trestbps"`).
	pub name: String,
	/// Smallest plausible value, inclusive.
	pub min: f64,
	/// Largest plausible value, inclusive.
	pub max: f64,
	/// Message shown next to the field when the value falls outside the range.
	pub message: String,
}

impl FieldRule {
	/// Creates a rule for `name` accepting values in `min..=max`.
	pub fn new(
		name: impl Into<String>,
		min: f64,
		max: f64,
		message: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			min,
			max,
			message: message.into(),
		}
	}

	/// Whether `value` falls inside the inclusive range.
	pub fn accepts(&self, value: f64) -> bool {
		value >= self.min && value <= self.max
	}
}

/// A collection of [`FieldRule`]s keyed by field name.
///
/// The default set carries the four clinical plausibility checks:
///
/// | field | range | unit |
/// |---|---|---|
/// | `age` | 1–120 | years |
/// | `trestbps` | 80–200 | mm Hg |
/// | `chol` | 100–600 | mg/dl |
/// | `thalach` | 70–220 | bpm |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
	rules: Vec<FieldRule>,
}

impl RuleSet {
	/// Creates a rule set from explicit rules.
	pub fn new(rules: Vec<FieldRule>) -> Self {
		Self { rules }
	}

	/// Looks up the rule covering `name`, if any.
	pub fn rule_for(&self, name: &str) -> Option<&FieldRule> {
		self.rules.iter().find(|rule| rule.name == name)
	}

	/// Checks `value` for the field `name`.
	///
	/// Returns `Ok(())` when the field carries no rule, when the value is
	/// blank (required-ness is the submission guard's concern, not ours),
	/// or when the parsed value sits inside the rule's range. A present
	/// value that does not parse as a number is treated as implausible and
	/// fails with the rule's message.
	pub fn check(&self, name: &str, value: &str) -> Result<(), String> {
		let Some(rule) = self.rule_for(name) else {
			return Ok(());
		};

		let trimmed = value.trim();
		if trimmed.is_empty() {
			return Ok(());
		}

		match trimmed.parse::<f64>() {
			Ok(parsed) if rule.accepts(parsed) => Ok(()),
			_ => Err(rule.message.clone()),
		}
	}
}

impl Default for RuleSet {
	fn default() -> Self {
		Self::new(vec![
			FieldRule::new("age", 1.0, 120.0, "Age must be between 1 and 120"),
			FieldRule::new(
				"trestbps",
				80.0,
				200.0,
				"Blood pressure seems unusual (80-200 mm Hg)",
			),
			FieldRule::new(
				"chol",
				100.0,
				600.0,
				"Cholesterol value seems unusual (100-600 mg/dl)",
			),
			FieldRule::new(
				"thalach",
				70.0,
				220.0,
				"Heart rate seems unusual (70-220 bpm)",
			),
		])
	}
}
