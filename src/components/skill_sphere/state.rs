use log::debug;

use super::config::{DRAG_THRESHOLD_PX, SceneConfig};
use super::interaction::RotationDriver;
use super::layout::SphereLayout;
use super::presentation::{Camera, Frame, FrameInput, build_frame, node_scale_target};
use super::types::SkillRecord;
use super::viewport::{Viewport, ViewportClass};
use crate::components::tween::{Spring, SpringConfig};

const NODE_SPRING: SpringConfig = SpringConfig::new(200.0, 15.0, 1.0);

#[derive(Clone, Debug, Default)]
pub struct PressState {
	pub active: bool,
	pub node: Option<&'static str>,
	pub start_x: f64,
	pub start_y: f64,
	/// Pointer travelled past the click threshold.
	pub moved: bool,
}

pub struct SceneState {
	pub config: SceneConfig,
	pub layout: SphereLayout,
	pub driver: RotationDriver,
	pub viewport: Viewport,
	pub press: PressState,
	/// Canvas size in CSS pixels.
	pub width: f64,
	pub height: f64,
	node_scales: Vec<Spring>,
	frame: Frame,
}

impl SceneState {
	pub fn new(
		records: &'static [SkillRecord],
		config: SceneConfig,
		window_width: f64,
		width: f64,
		height: f64,
	) -> Self {
		let viewport = Viewport::new(config.breakpoints.clone(), window_width);
		let layout = SphereLayout::new(records, viewport.profile.sphere_radius);
		let node_scales = records.iter().map(|_| Spring::new(NODE_SPRING, 1.0)).collect();
		let mut state = Self {
			driver: RotationDriver::new(&config),
			config,
			layout,
			viewport,
			press: PressState::default(),
			width,
			height,
			node_scales,
			frame: Frame::default(),
		};
		state.rebuild_frame();
		state
	}

	pub fn frame(&self) -> &Frame {
		&self.frame
	}

	pub fn class(&self) -> ViewportClass {
		self.viewport.class
	}

	pub fn selected(&self) -> Option<&'static SkillRecord> {
		let id = self.driver.interaction.selected.as_deref()?;
		self.layout.get(id).map(|n| n.skill)
	}

	fn camera(&self) -> Camera {
		Camera {
			distance: self.viewport.profile.camera_distance,
			fov_deg: self.config.fov_deg,
			width: self.width,
			height: self.height,
		}
	}

	fn rebuild_frame(&mut self) {
		let scales: Vec<f64> = self.node_scales.iter().map(Spring::value).collect();
		let interaction = &self.driver.interaction;
		self.frame = build_frame(FrameInput {
			nodes: self.layout.nodes(),
			scales: &scales,
			hovered: interaction.hovered.as_deref(),
			selected: interaction.selected.as_deref(),
			angle: self.driver.angle(),
			radius: self.layout.radius(),
			shell_opacity: self.viewport.profile.shell_opacity,
			camera: self.camera(),
		});
	}

	pub fn tick(&mut self, dt: f64) {
		self.driver.tick(dt);
		let dt = dt.clamp(0.0, self.config.max_frame_delta);
		let interaction = &self.driver.interaction;
		for (node, spring) in self.layout.nodes().iter().zip(self.node_scales.iter_mut()) {
			let id = node.skill.id;
			spring.set_target(node_scale_target(
				interaction.is_hovered(id),
				interaction.is_selected(id),
			));
			spring.step(dt);
		}
		self.rebuild_frame();
	}

	/// Follows the canvas' CSS size, which changes without a window resize
	/// when the container shifts for the detail panel. Returns `true` when
	/// the frame was rebuilt for a new size.
	pub fn fit_surface(&mut self, width: f64, height: f64) -> bool {
		if width <= 0.0 || height <= 0.0 || (width == self.width && height == self.height) {
			return false;
		}
		self.width = width;
		self.height = height;
		self.rebuild_frame();
		true
	}

	/// New window width and canvas size. Returns `true` when the breakpoint
	/// class changed. Sizes from an unmounted surface are ignored.
	pub fn resize(&mut self, window_width: f64, width: f64, height: f64) -> bool {
		let changed = self.viewport.resize(window_width);
		self.fit_surface(width, height);
		let records = self.layout.records();
		self.layout
			.relayout(records, self.viewport.profile.sphere_radius);
		self.rebuild_frame();
		changed
	}

	pub fn pointer_down(&mut self, x: f64, y: f64) {
		self.press = PressState {
			active: true,
			node: self.frame.node_at(x, y),
			start_x: x,
			start_y: y,
			moved: false,
		};
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) {
		if !self.press.active {
			match self.frame.node_at(x, y) {
				Some(id) => self.driver.interaction.pointer_enter(id),
				None => self.driver.interaction.pointer_leave(),
			}
			return;
		}
		let (dx, dy) = (x - self.press.start_x, y - self.press.start_y);
		if !self.press.moved && dx.hypot(dy) > DRAG_THRESHOLD_PX {
			self.press.moved = true;
			self.driver.drag_start();
		}
		if self.press.moved {
			self.driver.drag(dx);
		}
	}

	/// Ends a press; a press that never moved over the node it started on
	/// counts as a click.
	pub fn pointer_up(&mut self, x: f64, y: f64) {
		let press = std::mem::take(&mut self.press);
		if press.active && !press.moved {
			if let Some(id) = press.node.filter(|&id| self.frame.node_at(x, y) == Some(id)) {
				self.driver.interaction.click(id);
			}
		}
		self.driver.drag_end();
	}

	pub fn pointer_leave(&mut self) {
		self.press = PressState::default();
		self.driver.drag_end();
		self.driver.interaction.pointer_leave();
	}

	pub fn cursor(&self) -> &'static str {
		let interaction = &self.driver.interaction;
		if interaction.dragging {
			"grabbing"
		} else if interaction.hovered.is_some() {
			"pointer"
		} else {
			"grab"
		}
	}

	pub fn close_details(&mut self) {
		self.driver.interaction.close_details();
	}

	pub fn reset(&mut self) {
		debug!("scene reset");
		self.press = PressState::default();
		self.driver.interaction.reset();
	}
}
