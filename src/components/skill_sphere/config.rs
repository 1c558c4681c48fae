use serde::{Deserialize, Serialize};

use super::viewport::BreakpointTable;
use crate::components::tween::SpringConfig;

pub const BASE_SPHERE_RADIUS: f64 = 3.8;
pub const ROTATION_SPEED_DEG_PER_SEC: f64 = 7.0;
/// Radians of rotation per pixel of horizontal drag.
pub const DRAG_SENSITIVITY: f64 = 0.22;
/// Frame deltas above this are clamped, seconds.
pub const MAX_FRAME_DELTA: f64 = 0.1;
pub const MOBILE_BREAKPOINT: f64 = 880.0;
/// Pointer travel before a press becomes a drag instead of a click.
pub const DRAG_THRESHOLD_PX: f64 = 4.0;
pub const CAMERA_FOV_DEG: f64 = 50.0;

/// Tunables for the skill sphere scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
	pub rotation_speed_deg: f64,
	pub drag_sensitivity: f64,
	pub max_frame_delta: f64,
	pub rotation_spring: SpringConfig,
	pub breakpoints: BreakpointTable,
	pub fov_deg: f64,
}

impl SceneConfig {
	pub fn rotation_rate(&self) -> f64 {
		self.rotation_speed_deg.to_radians()
	}
}

impl Default for SceneConfig {
	fn default() -> Self {
		Self {
			rotation_speed_deg: ROTATION_SPEED_DEG_PER_SEC,
			drag_sensitivity: DRAG_SENSITIVITY,
			max_frame_delta: MAX_FRAME_DELTA,
			rotation_spring: SpringConfig::new(100.0, 30.0, 0.5).with_rest_delta(0.001),
			breakpoints: BreakpointTable::default(),
			fov_deg: CAMERA_FOV_DEG,
		}
	}
}

#[cfg(test)]
mod tests {
	use approx::assert_relative_eq;

	use super::*;

	#[test]
	fn default_rate_is_seven_degrees_per_second() {
		assert_relative_eq!(SceneConfig::default().rotation_rate(), 7.0_f64.to_radians());
	}

	#[test]
	fn config_serializes() {
		let json = serde_json::to_string(&SceneConfig::default()).unwrap();
		let back: SceneConfig = serde_json::from_str(&json).unwrap();
		assert_eq!(back, SceneConfig::default());
	}
}
