use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use serde_json::{Value, json};

use crate::components::draggable::Draggable;

/// Build one item, place it and keep its handle alive.
fn spawn_into(
	stage: &web_sys::Element,
	items: &Rc<RefCell<Vec<Draggable>>>,
	options: &Value,
	position: (i32, i32),
) {
	match Draggable::new(stage, options) {
		Ok(item) => {
			if let Err(err) = item.render() {
				error!("could not render item: {err}");
				return;
			}
			// spread the boxes out; dragging works from wherever they start
			let style = item.element().style();
			let _ = style.set_property("left", &format!("{}px", position.0));
			let _ = style.set_property("top", &format!("{}px", position.1));
			items.borrow_mut().push(item);
		}
		Err(err) => error!("could not build item: {err}"),
	}
}

/// Playground page: items seeded from varied color configurations, plus a
/// button that spawns more.
#[component]
pub fn Playground() -> impl IntoView {
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

		let seeds = [
			json!({
				"elementClass": "box",
				"elementText": "Defaults",
			}),
			json!({
				"elementClass": "box",
				"elementText": "Dark edge",
				"elementColor": { "colorEdge": { "coefficient": 0.55 } },
			}),
			json!({
				"elementClass": "box",
				"elementText": "Translucent",
				"elementColor": { "colorEdge": { "opacity": 0.55, "darker": false } },
			}),
			json!({
				"elementClass": "box plain",
				"elementText": "No color",
				"elementColor": { "random": false },
			}),
		];
		for (i, seed) in seeds.iter().enumerate() {
			spawn_into(&stage, &items_mount, seed, (40 + 180 * i as i32, 140));
		}
	});

	let items_spawn = items.clone();
	let spawn = move |_| {
		let Some(stage) = stage_ref.get() else {
			return;
		};
		let stage: web_sys::Element = stage.into();
		let count = items_spawn.borrow().len();
		let options = json!({
			"elementClass": "box",
			"elementText": format!("Box {count}"),
			"elementColor": { "colorEdge": { "opacity": 0.85, "coefficient": 0.7 } },
		});
		spawn_into(&stage, &items_spawn, &options, (40 + 40 * count as i32, 260));
	};

	view! {
		<div class="drag-stage" node_ref=stage_ref>
			<div class="stage-overlay">
				<h1>"Playground"</h1>
				<p class="subtitle">"Each box was built from a different configuration. Drag any of them."</p>
				<button on:click=spawn>"Spawn box"</button>
			</div>
		</div>
	}
}
