//! CSR entry point.

use draggable_dom::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
