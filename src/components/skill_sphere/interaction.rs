//! Pointer-driven focus and rotation for the sphere.
//!
//! [`InteractionState`] is a plain value: every pointer event is a method call
//! that moves it between phases, so it can be driven and inspected without a
//! rendering surface. [`RotationDriver`] layers the smoothing spring on top.

use log::debug;
use serde::{Deserialize, Serialize};

use super::config::{MAX_FRAME_DELTA, SceneConfig};
use crate::components::tween::Spring;

/// Coarse view of [`InteractionState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase<'a> {
	Idle,
	Hovering(&'a str),
	Selected(&'a str),
	Dragging,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
	pub hovered: Option<String>,
	pub selected: Option<String>,
	pub dragging: bool,
	/// Rotation captured when the current drag began.
	pub drag_origin: f64,
	/// Target rotation about the vertical axis, radians. Never wraps.
	pub rotation: f64,
}

impl InteractionState {
	pub fn phase(&self) -> Phase<'_> {
		if let Some(id) = &self.selected {
			Phase::Selected(id)
		} else if self.dragging {
			Phase::Dragging
		} else if let Some(id) = &self.hovered {
			Phase::Hovering(id)
		} else {
			Phase::Idle
		}
	}

	/// Auto rotation runs only while nobody is engaging with the sphere.
	pub fn is_paused(&self) -> bool {
		self.phase() != Phase::Idle
	}

	pub fn detail_open(&self) -> bool {
		self.selected.is_some()
	}

	pub fn is_hovered(&self, id: &str) -> bool {
		self.hovered.as_deref() == Some(id)
	}

	pub fn is_selected(&self, id: &str) -> bool {
		self.selected.as_deref() == Some(id)
	}

	pub fn pointer_enter(&mut self, id: &str) {
		// Hover is suppressed while the detail panel is open.
		if self.detail_open() || self.dragging || self.is_hovered(id) {
			return;
		}
		self.hovered = Some(id.to_owned());
	}

	pub fn pointer_leave(&mut self) {
		self.hovered = None;
	}

	/// Select `id`, or deselect it when it is already selected.
	pub fn click(&mut self, id: &str) {
		self.dragging = false;
		self.hovered = None;
		if self.is_selected(id) {
			debug!("deselect {id}");
			self.selected = None;
		} else {
			debug!("select {id}");
			self.selected = Some(id.to_owned());
		}
	}

	/// Safe to call with nothing selected.
	pub fn close_details(&mut self) {
		if let Some(id) = self.selected.take() {
			debug!("close details for {id}");
		}
	}

	/// Returns `true` when a drag actually began.
	pub fn drag_start(&mut self) -> bool {
		if self.detail_open() || self.dragging {
			return false;
		}
		self.hovered = None;
		self.dragging = true;
		self.drag_origin = self.rotation;
		true
	}

	/// `offset_x` is the horizontal distance from where the drag began.
	pub fn drag(&mut self, offset_x: f64, sensitivity: f64) {
		if self.dragging {
			self.rotation = self.drag_origin + offset_x * sensitivity;
		}
	}

	pub fn drag_end(&mut self) {
		self.dragging = false;
	}

	/// Advance auto rotation by `dt` seconds at `rate` rad/s. Returns `true`
	/// when the angle moved.
	pub fn advance(&mut self, dt: f64, rate: f64) -> bool {
		if self.is_paused() || dt <= 0.0 {
			return false;
		}
		self.rotation += rate * dt.min(MAX_FRAME_DELTA);
		true
	}

	/// Back to a freshly mounted state, keeping the current angle.
	pub fn reset(&mut self) {
		*self = InteractionState {
			rotation: self.rotation,
			..InteractionState::default()
		};
	}
}

/// Interaction state plus the spring that smooths its rotation.
#[derive(Clone, Debug)]
pub struct RotationDriver {
	pub interaction: InteractionState,
	spring: Spring,
	rate: f64,
	sensitivity: f64,
	max_frame_delta: f64,
}

impl RotationDriver {
	pub fn new(config: &SceneConfig) -> Self {
		Self {
			interaction: InteractionState::default(),
			spring: Spring::new(config.rotation_spring, 0.0),
			rate: config.rotation_rate(),
			sensitivity: config.drag_sensitivity,
			max_frame_delta: config.max_frame_delta.min(MAX_FRAME_DELTA),
		}
	}

	/// Smoothed angle to render with.
	pub fn angle(&self) -> f64 {
		self.spring.value()
	}

	pub fn drag_start(&mut self) {
		if self.interaction.drag_start() {
			// Manual control takes over from wherever the spring is.
			self.spring.stop();
		}
	}

	pub fn drag(&mut self, offset_x: f64) {
		self.interaction.drag(offset_x, self.sensitivity);
		self.spring.set_target(self.interaction.rotation);
	}

	pub fn drag_end(&mut self) {
		self.interaction.drag_end();
	}

	/// One animation frame. Returns the smoothed angle.
	pub fn tick(&mut self, dt: f64) -> f64 {
		let dt = dt.clamp(0.0, self.max_frame_delta);
		self.interaction.advance(dt, self.rate);
		self.spring.set_target(self.interaction.rotation);
		self.spring.step(dt)
	}
}

impl Default for RotationDriver {
	fn default() -> Self {
		Self::new(&SceneConfig::default())
	}
}

#[cfg(test)]
mod tests {
	use approx::assert_relative_eq;

	use super::*;

	const FRAME: f64 = 1.0 / 60.0;

	#[test]
	fn hover_enter_and_leave() {
		let mut s = InteractionState::default();
		s.pointer_enter("docker");
		assert_eq!(s.phase(), Phase::Hovering("docker"));
		s.pointer_leave();
		assert_eq!(s.phase(), Phase::Idle);
	}

	#[test]
	fn selecting_b_deselects_a() {
		let mut s = InteractionState::default();
		s.click("a");
		s.click("b");
		assert!(!s.is_selected("a"));
		assert!(s.is_selected("b"));
		assert_eq!(s.phase(), Phase::Selected("b"));
	}

	#[test]
	fn clicking_selected_node_toggles_off() {
		let mut s = InteractionState::default();
		s.click("a");
		s.click("a");
		assert_eq!(s.selected, None);
		assert_eq!(s.phase(), Phase::Idle);
	}

	#[test]
	fn hover_is_suppressed_while_detail_open() {
		let mut s = InteractionState::default();
		s.click("a");
		s.pointer_enter("b");
		assert_eq!(s.hovered, None);
	}

	#[test]
	fn close_details_without_selection_is_a_no_op() {
		let mut s = InteractionState::default();
		s.close_details();
		assert_eq!(s, InteractionState::default());
		s.click("a");
		s.close_details();
		assert_eq!(s.phase(), Phase::Idle);
	}

	#[test]
	fn drag_is_relative_to_origin() {
		let mut s = InteractionState {
			rotation: 1.0,
			..Default::default()
		};
		assert!(s.drag_start());
		s.drag(10.0, 0.22);
		assert_relative_eq!(s.rotation, 1.0 + 2.2, epsilon = 1e-12);
		s.drag(-5.0, 0.22);
		assert_relative_eq!(s.rotation, 1.0 - 1.1, epsilon = 1e-12);
		s.drag_end();
		assert_eq!(s.phase(), Phase::Idle);
	}

	#[test]
	fn drag_from_hover_clears_hover() {
		let mut s = InteractionState::default();
		s.pointer_enter("a");
		assert!(s.drag_start());
		assert_eq!(s.phase(), Phase::Dragging);
		s.pointer_enter("b");
		assert_eq!(s.hovered, None);
	}

	#[test]
	fn drag_is_ignored_while_selected() {
		let mut s = InteractionState::default();
		s.click("a");
		assert!(!s.drag_start());
		s.drag(100.0, 0.22);
		assert_eq!(s.rotation, 0.0);
	}

	#[test]
	fn click_ends_a_drag() {
		let mut s = InteractionState::default();
		s.drag_start();
		s.click("a");
		assert!(!s.dragging);
		assert_eq!(s.phase(), Phase::Selected("a"));
	}

	#[test]
	fn rotation_pauses_on_engagement() {
		let mut s = InteractionState::default();
		s.pointer_enter("a");
		assert!(!s.advance(FRAME, 1.0));
		s.pointer_leave();
		s.click("a");
		assert!(!s.advance(FRAME, 1.0));
		s.close_details();
		s.drag_start();
		assert!(!s.advance(FRAME, 1.0));
		assert_eq!(s.rotation, 0.0);
		s.drag_end();
		assert!(s.advance(FRAME, 1.0));
	}

	#[test]
	fn idle_rotation_advances_by_rate_times_time() {
		let mut driver = RotationDriver::default();
		let rate = 7.0_f64.to_radians();
		for _ in 0..120 {
			driver.tick(FRAME);
		}
		assert_relative_eq!(driver.interaction.rotation, rate * 2.0, epsilon = 1e-9);
		for _ in 0..600 {
			driver.interaction.pointer_enter("a");
			driver.tick(FRAME);
		}
		assert_relative_eq!(driver.interaction.rotation, rate * 2.0, epsilon = 1e-9);
		assert_relative_eq!(driver.angle(), driver.interaction.rotation, epsilon = 1e-3);
	}

	#[test]
	fn delayed_frames_are_clamped() {
		let mut driver = RotationDriver::default();
		driver.tick(5.0);
		assert_relative_eq!(
			driver.interaction.rotation,
			7.0_f64.to_radians() * MAX_FRAME_DELTA,
			epsilon = 1e-12
		);
	}

	#[test]
	fn angle_does_not_move_between_paused_frames() {
		let mut driver = RotationDriver::default();
		for _ in 0..600 {
			driver.tick(FRAME);
		}
		driver.interaction.click("a");
		for _ in 0..600 {
			driver.tick(FRAME);
		}
		let before = driver.angle();
		driver.tick(FRAME);
		assert_eq!(driver.angle(), before);
	}

	#[test]
	fn drag_hands_off_without_jumps() {
		let mut driver = RotationDriver::default();
		for _ in 0..60 {
			driver.tick(FRAME);
		}
		driver.drag_start();
		driver.drag(1.0);
		let before = driver.angle();
		let after = driver.tick(FRAME);
		assert!((after - before).abs() < 0.22);
		driver.drag_end();
		for _ in 0..600 {
			driver.tick(FRAME);
		}
		assert!(driver.angle() > before);
	}

	#[test]
	fn state_round_trips_through_json() {
		let mut s = InteractionState::default();
		s.click("helm");
		s.rotation = 1.25;
		let json = serde_json::to_string(&s).unwrap();
		assert_eq!(serde_json::from_str::<InteractionState>(&json).unwrap(), s);
	}

	#[test]
	fn reset_keeps_angle() {
		let mut s = InteractionState::default();
		s.rotation = 2.0;
		s.click("a");
		s.reset();
		assert_eq!(s.selected, None);
		assert_eq!(s.rotation, 2.0);
	}
}
