use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::color::{self, ColorSample};
use super::options::ItemOptions;
use super::widget::DraggableError;

/// Create the visual node and apply identity, class, text and colors from
/// the resolved configuration.
pub fn build(document: &Document, options: &ItemOptions) -> Result<HtmlElement, DraggableError> {
	let element = document
		.create_element(&options.element_type)
		.map_err(|_| DraggableError::CreateElement {
			tag: options.element_type.clone(),
		})?;
	let element: HtmlElement = element.dyn_into().map_err(|_| DraggableError::CreateElement {
		tag: options.element_type.clone(),
	})?;

	element.set_id(&options.element_id.to_string());
	element.set_class_name(&options.element_class);
	element.set_text_content(Some(&options.element_text));

	let style = element.style();
	// offset-based movement needs the element out of normal flow
	let _ = style.set_property("position", "absolute");

	if options.element_color.random {
		let edge = &options.element_color.color_edge;
		let _ = style.set_property(
			"background-color",
			&color::background_css(ColorSample::draw(), edge),
		);
		if edge.darker {
			let _ = style.set_property("border-color", &color::border_css(ColorSample::draw(), edge));
		}
	}

	Ok(element)
}
