use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value, json};

/// Identity assigned to the created element, user supplied text or a number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ElementId {
	/// A caller-chosen identifier string.
	Text(String),
	/// A numeric identifier, e.g. the generated timestamp value.
	Number(f64),
}

impl fmt::Display for ElementId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ElementId::Text(text) => f.write_str(text),
			ElementId::Number(value) if value.fract() == 0.0 => write!(f, "{}", *value as i64),
			ElementId::Number(value) => write!(f, "{value}"),
		}
	}
}

/// Styling applied to the randomized edge (border) of an item.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
	/// Alpha channel of the generated colors.
	pub opacity: f64,
	/// Scale factor applied to the border channels and alpha.
	pub coefficient: f64,
	/// Whether a darkened border color is applied at all.
	pub darker: bool,
}

/// Color behavior of an item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorOptions {
	/// Assign randomized colors to the element when true.
	pub random: bool,
	/// Edge styling used by the randomized colors.
	pub color_edge: EdgeStyle,
}

/// Effective configuration of one item, every field concrete.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOptions {
	/// Tag of the element to create.
	pub element_type: String,
	/// Class list applied to the element.
	pub element_class: String,
	/// Identity applied to the element.
	pub element_id: ElementId,
	/// Text content of the element.
	pub element_text: String,
	/// Color behavior.
	pub element_color: ColorOptions,
}

impl ItemOptions {
	fn with_id(element_id: u64) -> Self {
		Self {
			element_type: "div".into(),
			element_class: String::new(),
			element_id: ElementId::Number(element_id as f64),
			element_text: String::new(),
			element_color: ColorOptions {
				random: true,
				color_edge: EdgeStyle {
					opacity: 1.0,
					coefficient: 1.0,
					darker: true,
				},
			},
		}
	}
}

/// Millisecond timestamp plus a random offset in [0, 1000), so items built
/// in the same millisecond still get distinct identities.
pub(crate) fn fresh_element_id() -> u64 {
	(js_sys::Date::now() + (js_sys::Math::random() * 1000.0).floor()) as u64
}

/// The default configuration tree. Built fresh per instance so no two items
/// share identity or color state.
pub(crate) fn default_options(element_id: u64) -> Value {
	json!({
		"elementType": "div",
		"elementClass": "",
		"elementId": element_id,
		"elementText": "",
		"elementColor": {
			"random": true,
			"colorEdge": {
				"opacity": 1.0,
				"coefficient": 1.0,
				"darker": true,
			},
		},
	})
}

/// Merge a user partial configuration over the defaults and project it onto
/// [`ItemOptions`]. Returns the typed options together with the merged tree,
/// which keeps any unrecognized keys the caller passed.
pub(crate) fn resolve(user: &Value, element_id: u64) -> (ItemOptions, Value) {
	let mut merged = default_options(element_id);
	if let (Value::Object(base), Value::Object(overlay)) = (&mut merged, user) {
		if !overlay.is_empty() {
			merge_into(base, overlay);
		}
	}
	let options = match serde_json::from_value::<ItemOptions>(merged.clone()) {
		Ok(options) => options,
		Err(err) => {
			log::warn!("item configuration has unusable values, using defaults: {err}");
			ItemOptions::with_id(element_id)
		}
	};
	(options, merged)
}

// Recursive merge: when a key holds a mapping on both sides, descend;
// every other overlay value wins outright, arrays included.
fn merge_into(base: &mut Map<String, Value>, overlay: &Map<String, Value>) {
	for (key, value) in overlay {
		match (base.get_mut(key), value) {
			(Some(Value::Object(nested_base)), Value::Object(nested_overlay)) => {
				merge_into(nested_base, nested_overlay);
			}
			(_, value) => {
				base.insert(key.clone(), value.clone());
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_user_leaf_overrides_default() {
		let (options, _) = resolve(&json!({ "elementText": "Parent", "elementClass": "parent" }), 7);
		assert_eq!(options.element_text, "Parent");
		assert_eq!(options.element_class, "parent");
		// untouched leaves keep their defaults
		assert_eq!(options.element_type, "div");
		assert!(options.element_color.random);
	}

	#[test]
	fn test_nested_mappings_merge_recursively() {
		let user = json!({ "elementColor": { "colorEdge": { "coefficient": 0.5 } } });
		let (options, _) = resolve(&user, 7);
		assert!(options.element_color.random);
		assert_eq!(options.element_color.color_edge.coefficient, 0.5);
		assert_eq!(options.element_color.color_edge.opacity, 1.0);
		assert!(options.element_color.color_edge.darker);
	}

	#[test]
	fn test_non_mapping_values_replace_wholesale() {
		let mut base = json!({ "list": [1, 2, 3], "nested": { "list": [1] } });
		let overlay = json!({ "list": [9], "nested": { "list": [] } });
		if let (Value::Object(base), Value::Object(overlay)) = (&mut base, &overlay) {
			merge_into(base, overlay);
		}
		assert_eq!(base["list"], json!([9]));
		assert_eq!(base["nested"]["list"], json!([]));
	}

	#[test]
	fn test_empty_configuration_uses_fresh_defaults() {
		let (options, raw) = resolve(&json!({}), 42);
		assert_eq!(raw, default_options(42));
		assert_eq!(options, ItemOptions::with_id(42));
	}

	#[test]
	fn test_resolutions_do_not_alias() {
		let (_, mut first) = resolve(&json!({}), 1);
		let (_, second) = resolve(&json!({}), 1);
		first["elementColor"]["random"] = json!(false);
		assert_eq!(second["elementColor"]["random"], json!(true));
	}

	#[test]
	fn test_unrecognized_keys_are_preserved() {
		let user = json!({ "colorRandom": false, "elementColor": { "swatch": "warm" } });
		let (options, raw) = resolve(&user, 7);
		assert_eq!(raw["colorRandom"], json!(false));
		assert_eq!(raw["elementColor"]["swatch"], json!("warm"));
		// preserved keys have no effect on the typed projection
		assert!(options.element_color.random);
	}

	#[test]
	fn test_unusable_override_falls_back_to_defaults() {
		let (options, raw) = resolve(&json!({ "elementText": 5 }), 9);
		assert_eq!(options, ItemOptions::with_id(9));
		// the merged tree still carries what the caller wrote
		assert_eq!(raw["elementText"], json!(5));
	}

	#[test]
	fn test_default_tree_matches_typed_defaults() {
		let typed: ItemOptions = serde_json::from_value(default_options(7)).unwrap();
		assert_eq!(typed, ItemOptions::with_id(7));
	}

	#[test]
	fn test_element_id_display() {
		assert_eq!(ElementId::Text("sidebar".into()).to_string(), "sidebar");
		assert_eq!(ElementId::Number(1712345678901.0).to_string(), "1712345678901");
		assert_eq!(ElementId::Number(3.5).to_string(), "3.5");
	}
}
