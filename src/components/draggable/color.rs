use super::options::EdgeStyle;

/// One random color draw, channels in [0, 255).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
	/// Red channel.
	pub red: f64,
	/// Green channel.
	pub green: f64,
	/// Blue channel.
	pub blue: f64,
}

impl ColorSample {
	/// Draw three independent channels from `Math.random`.
	pub fn draw() -> Self {
		Self {
			red: (js_sys::Math::random() * 255.0).floor(),
			green: (js_sys::Math::random() * 255.0).floor(),
			blue: (js_sys::Math::random() * 255.0).floor(),
		}
	}
}

/// Background color: channels as drawn, alpha from the configured opacity.
pub fn background_css(sample: ColorSample, edge: &EdgeStyle) -> String {
	format!(
		"rgba({},{},{},{})",
		sample.red, sample.green, sample.blue, edge.opacity
	)
}

/// Border color: channels and alpha scaled by the darkening coefficient,
/// computed independently from the background.
pub fn border_css(sample: ColorSample, edge: &EdgeStyle) -> String {
	format!(
		"rgba({},{},{},{})",
		sample.red * edge.coefficient,
		sample.green * edge.coefficient,
		sample.blue * edge.coefficient,
		edge.opacity * edge.coefficient
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	const SAMPLE: ColorSample = ColorSample {
		red: 120.0,
		green: 200.0,
		blue: 40.0,
	};

	#[test]
	fn test_background_uses_unscaled_channels() {
		let edge = EdgeStyle {
			opacity: 0.8,
			coefficient: 0.5,
			darker: true,
		};
		assert_eq!(background_css(SAMPLE, &edge), "rgba(120,200,40,0.8)");
	}

	#[test]
	fn test_border_scales_channels_and_alpha() {
		let edge = EdgeStyle {
			opacity: 0.8,
			coefficient: 0.5,
			darker: true,
		};
		assert_eq!(border_css(SAMPLE, &edge), "rgba(60,100,20,0.4)");
	}

	#[test]
	fn test_unit_coefficient_leaves_border_unchanged() {
		let edge = EdgeStyle {
			opacity: 1.0,
			coefficient: 1.0,
			darker: true,
		};
		assert_eq!(border_css(SAMPLE, &edge), background_css(SAMPLE, &edge));
	}
}
