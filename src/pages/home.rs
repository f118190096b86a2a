use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use serde_json::json;

use crate::components::draggable::Draggable;

/// Default Home Page: a single draggable item built from a two-key
/// configuration, everything else falling back to defaults.
#[component]
pub fn Home() -> impl IntoView {
	let stage_ref = NodeRef::<leptos::html::Div>::new();
	let items: Rc<RefCell<Vec<Draggable>>> = Rc::new(RefCell::new(Vec::new()));

	let items_mount = items.clone();
	Effect::new(move |_| {
		let Some(stage) = stage_ref.get() else {
			return;
		};
		let stage: web_sys::Element = stage.into();
		if !items_mount.borrow().is_empty() {
			return;
		}

		let options = json!({
			"elementClass": "parent",
			"elementText": "Parent",
		});
		match Draggable::new(&stage, &options) {
			Ok(item) => {
				if let Err(err) = item.render() {
					error!("could not render item: {err}");
					return;
				}
				items_mount.borrow_mut().push(item);
			}
			Err(err) => error!("could not build item: {err}"),
		}
	});

	view! {
		<div class="drag-stage" node_ref=stage_ref>
			<div class="stage-overlay">
				<h1>"Draggable Items"</h1>
				<p class="subtitle">"Press the box and move the pointer to drag it around."</p>
			</div>
		</div>
	}
}
