use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Element, Event, HtmlElement, MouseEvent, TouchEvent};

use super::device::{DeviceProfile, PointerKind};
use super::element;
use super::options::{self, ItemOptions};
use super::state::DragState;

/// Failures surfaced while building or attaching a draggable item.
#[derive(Debug, Error)]
pub enum DraggableError {
	/// The global window or document is missing, e.g. outside a browser.
	#[error("window or document is not available")]
	NoDocument,
	/// The document rejected the configured element kind.
	#[error("failed to create a <{tag}> element")]
	CreateElement {
		/// The rejected tag.
		tag: String,
	},
	/// No node matched the parent selector.
	#[error("no element matches parent selector {selector:?}")]
	ParentNotFound {
		/// The selector that matched nothing.
		selector: String,
	},
	/// The parent rejected the element on attachment.
	#[error("could not attach element to parent: {reason}")]
	InvalidParent {
		/// What the host environment reported.
		reason: String,
	},
}

/// A styled element that follows the pointer while pressed.
///
/// Construction resolves the configuration, builds the element and wires
/// the press/move/release listeners; the element stays detached until
/// [`Draggable::render`] is called. The handle owns the listeners: there is
/// no unregistration path, but dropping the handle drops them, so keep it
/// alive for as long as the element should stay interactive.
pub struct Draggable {
	parent: Element,
	element: HtmlElement,
	device: DeviceProfile,
	options: ItemOptions,
	raw_options: Value,
	state: Rc<Cell<DragState>>,
	listeners: Vec<Closure<dyn FnMut(Event)>>,
}

impl Draggable {
	/// Build a draggable element that will render into `parent`.
	///
	/// `user_options` is a partial configuration tree merged over the
	/// defaults; pass an empty object to take every default. Unrecognized
	/// keys are preserved but have no effect.
	pub fn new(parent: &Element, user_options: &Value) -> Result<Self, DraggableError> {
		let window = web_sys::window().ok_or(DraggableError::NoDocument)?;
		let document = window.document().ok_or(DraggableError::NoDocument)?;
		let device = DeviceProfile::detect(&window);
		let (options, raw_options) = options::resolve(user_options, options::fresh_element_id());
		let element = element::build(&document, &options)?;

		let mut item = Self {
			parent: parent.clone(),
			element,
			device,
			options,
			raw_options,
			state: Rc::new(Cell::new(DragState::default())),
			listeners: Vec::new(),
		};
		item.attach_listeners();
		debug!("built draggable item {}", item.options.element_id);
		Ok(item)
	}

	/// Like [`Draggable::new`], but looks the parent up by selector and
	/// fails when nothing matches.
	pub fn with_selector(selector: &str, user_options: &Value) -> Result<Self, DraggableError> {
		let document = web_sys::window()
			.and_then(|window| window.document())
			.ok_or(DraggableError::NoDocument)?;
		let parent = document
			.query_selector(selector)
			.ok()
			.flatten()
			.ok_or_else(|| DraggableError::ParentNotFound {
				selector: selector.to_string(),
			})?;
		Self::new(&parent, user_options)
	}

	fn attach_listeners(&mut self) {
		let kind = self.device.kind;
		let events = self.device.events;

		let state = self.state.clone();
		self.listen(
			events.press,
			Closure::new(move |event: Event| {
				if let Some((x, y)) = pointer_position(kind, &event) {
					let mut tracking = state.get();
					tracking.press(x, y);
					state.set(tracking);
				}
			}),
		);

		let state = self.state.clone();
		let element = self.element.clone();
		self.listen(
			events.movement,
			Closure::new(move |event: Event| {
				let Some((x, y)) = pointer_position(kind, &event) else {
					return;
				};
				let mut tracking = state.get();
				if let Some((dx, dy)) = tracking.motion(x, y) {
					let style = element.style();
					let _ = style.set_property("top", &format!("{}px", element.offset_top() + dy));
					let _ = style.set_property("left", &format!("{}px", element.offset_left() + dx));
				}
				state.set(tracking);
			}),
		);

		let state = self.state.clone();
		self.listen(
			events.release,
			Closure::new(move |_: Event| {
				let mut tracking = state.get();
				tracking.release();
				state.set(tracking);
			}),
		);

		// losing the pointer mid-drag counts as a release, otherwise the
		// element keeps following once the pointer comes back
		let state = self.state.clone();
		self.listen(
			kind.leave_event(),
			Closure::new(move |_: Event| {
				let mut tracking = state.get();
				tracking.release();
				state.set(tracking);
			}),
		);
	}

	fn listen(&mut self, event: &str, callback: Closure<dyn FnMut(Event)>) {
		let passive = AddEventListenerOptions::new();
		passive.set_passive(true);
		let _ = self
			.element
			.add_event_listener_with_callback_and_add_event_listener_options(
				event,
				callback.as_ref().unchecked_ref(),
				&passive,
			);
		self.listeners.push(callback);
	}

	/// Attach the element to its parent. The browser moves an
	/// already-attached node instead of cloning it, so repeated calls
	/// relocate the element rather than duplicate it.
	pub fn render(&self) -> Result<(), DraggableError> {
		self.parent
			.append_child(&self.element)
			.map_err(|err| DraggableError::InvalidParent {
				reason: err
					.as_string()
					.unwrap_or_else(|| format!("{err:?}")),
			})?;
		Ok(())
	}

	/// The underlying DOM node.
	pub fn element(&self) -> &HtmlElement {
		&self.element
	}

	/// The effective configuration after defaults were applied.
	pub fn options(&self) -> &ItemOptions {
		&self.options
	}

	/// The merged configuration tree, including unrecognized keys.
	pub fn raw_options(&self) -> &Value {
		&self.raw_options
	}

	/// Pointer classification chosen at construction.
	pub fn device(&self) -> DeviceProfile {
		self.device
	}

	/// Whether a drag is in progress.
	pub fn is_dragging(&self) -> bool {
		self.state.get().is_dragging()
	}
}

// Touch items read the first touch point, mouse items the client position.
// Events of an unexpected shape yield nothing and are ignored.
fn pointer_position(kind: PointerKind, event: &Event) -> Option<(i32, i32)> {
	match kind {
		PointerKind::Touch => {
			let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
			Some((touch.client_x(), touch.client_y()))
		}
		PointerKind::Mouse => {
			let mouse = event.dyn_ref::<MouseEvent>()?;
			Some((mouse.client_x(), mouse.client_y()))
		}
	}
}
