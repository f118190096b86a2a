use web_sys::Window;

/// How pointer input reaches the page. Chosen once at construction,
/// hybrid devices are not considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
	/// Input arrives as touch events.
	Touch,
	/// Input arrives as mouse events.
	Mouse,
}

/// Event names for the three interaction phases of a pointer kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventNames {
	/// The pointer was pressed on the element.
	pub press: &'static str,
	/// The pointer moved while over the element.
	pub movement: &'static str,
	/// The pointer was released.
	pub release: &'static str,
}

const TOUCH_EVENTS: EventNames = EventNames {
	press: "touchstart",
	movement: "touchmove",
	release: "touchend",
};

const MOUSE_EVENTS: EventNames = EventNames {
	press: "mousedown",
	movement: "mousemove",
	release: "mouseup",
};

impl PointerKind {
	/// Event-name triple for this kind.
	pub fn events(self) -> EventNames {
		match self {
			PointerKind::Touch => TOUCH_EVENTS,
			PointerKind::Mouse => MOUSE_EVENTS,
		}
	}

	/// Event signalling that the pointer abandoned the element mid-drag.
	pub fn leave_event(self) -> &'static str {
		match self {
			PointerKind::Touch => "touchcancel",
			PointerKind::Mouse => "mouseleave",
		}
	}
}

/// Classify the runtime from its two platform signals. Touch requires both
/// the mobile marker in the agent string and a touch-capable screen.
pub fn classify(user_agent: &str, max_touch_points: i32) -> PointerKind {
	if user_agent.contains("Mobile") && max_touch_points > 0 {
		PointerKind::Touch
	} else {
		PointerKind::Mouse
	}
}

/// Pointer classification with its event names, fixed at construction and
/// never re-evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
	/// The chosen classification.
	pub kind: PointerKind,
	/// Event names matching the classification.
	pub events: EventNames,
}

impl DeviceProfile {
	/// Profile for a known kind.
	pub fn from_kind(kind: PointerKind) -> Self {
		Self {
			kind,
			events: kind.events(),
		}
	}

	/// Inspect the navigator once and fix the classification.
	pub fn detect(window: &Window) -> Self {
		let navigator = window.navigator();
		let agent = navigator.user_agent().unwrap_or_default();
		Self::from_kind(classify(&agent, navigator.max_touch_points()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const MOBILE_AGENT: &str = "Mozilla/5.0 (Linux; Android 13) Mobile Safari/537.36";
	const DESKTOP_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) Firefox/124.0";

	#[test]
	fn test_touch_needs_both_signals() {
		assert_eq!(classify(MOBILE_AGENT, 5), PointerKind::Touch);
		assert_eq!(classify(MOBILE_AGENT, 0), PointerKind::Mouse);
		assert_eq!(classify(DESKTOP_AGENT, 5), PointerKind::Mouse);
		assert_eq!(classify(DESKTOP_AGENT, 0), PointerKind::Mouse);
	}

	#[test]
	fn test_marker_check_is_case_sensitive() {
		assert_eq!(classify("some mobile browser", 5), PointerKind::Mouse);
	}

	#[test]
	fn test_event_names_follow_kind() {
		let touch = DeviceProfile::from_kind(PointerKind::Touch);
		assert_eq!(touch.events.press, "touchstart");
		assert_eq!(touch.events.movement, "touchmove");
		assert_eq!(touch.events.release, "touchend");
		assert_eq!(touch.kind.leave_event(), "touchcancel");

		let mouse = DeviceProfile::from_kind(PointerKind::Mouse);
		assert_eq!(mouse.events.press, "mousedown");
		assert_eq!(mouse.events.movement, "mousemove");
		assert_eq!(mouse.events.release, "mouseup");
		assert_eq!(mouse.kind.leave_event(), "mouseleave");
	}
}
