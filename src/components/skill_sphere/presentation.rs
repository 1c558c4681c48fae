//! Maps scene state to drawable primitives and layout styles.

use std::f64::consts::PI;

use nalgebra::{Isometry3, Perspective3, Point3, Rotation3, Vector3};

use super::types::{PositionedSkill, category_color};
use super::viewport::ViewportClass;
use crate::components::tween::{Easing, Transition};

pub const SCALE_IDLE: f64 = 1.0;
pub const SCALE_HOVERED: f64 = 1.2;
pub const SCALE_SELECTED: f64 = 1.35;

pub const LABEL_FONT_SIZE: f64 = 0.23;
pub const LABEL_HEIGHT: f64 = 0.45;
pub const SHELL_COLOR: (u8, u8, u8) = (0x60, 0x7d, 0x8b);
pub const SHELL_SEGMENTS: usize = 24;

const NEAR_PLANE: f64 = 0.1;
const FAR_PLANE: f64 = 1000.0;

pub fn node_scale_target(hovered: bool, selected: bool) -> f64 {
	if selected {
		SCALE_SELECTED
	} else if hovered {
		SCALE_HOVERED
	} else {
		SCALE_IDLE
	}
}

/// World-space width of the clickable box behind a label.
pub fn label_width(name: &str) -> f64 {
	name.chars().count() as f64 * 0.1 + 0.35
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
	pub distance: f64,
	pub fov_deg: f64,
	pub width: f64,
	pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
	pub x: f64,
	pub y: f64,
	/// Camera-space z; larger is closer.
	pub depth: f64,
	/// Pixels per world unit at this depth.
	pub scale: f64,
}

impl Camera {
	/// View and projection for this camera, looking at the origin from
	/// `(0, 0, distance)`. `None` until the surface has a size.
	pub fn projection(&self) -> Option<Projection> {
		if self.width <= 0.0 || self.height <= 0.0 || self.distance <= NEAR_PLANE {
			return None;
		}
		let fov = self.fov_deg.to_radians();
		Some(Projection {
			view: Isometry3::look_at_rh(
				&Point3::new(0.0, 0.0, self.distance),
				&Point3::origin(),
				&Vector3::y(),
			),
			perspective: Perspective3::new(self.width / self.height, fov, NEAR_PLANE, FAR_PLANE),
			focal_length: (self.height / 2.0) / (fov / 2.0).tan(),
			width: self.width,
			height: self.height,
		})
	}
}

/// A camera resolved for one frame.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
	view: Isometry3<f64>,
	perspective: Perspective3<f64>,
	focal_length: f64,
	width: f64,
	height: f64,
}

impl Projection {
	/// Screen position of a world point; `None` behind the near plane.
	pub fn project(&self, p: &Vector3<f64>) -> Option<ScreenPoint> {
		let eye = self.view * Point3::from(*p);
		let dz = -eye.z;
		if dz < NEAR_PLANE {
			return None;
		}
		let ndc = self.perspective.project_point(&eye);
		Some(ScreenPoint {
			x: (ndc.x + 1.0) * self.width / 2.0,
			y: (1.0 - ndc.y) * self.height / 2.0,
			depth: p.z,
			scale: self.focal_length / dz,
		})
	}
}

/// Turn about the vertical axis by the sphere's current angle.
pub fn sphere_rotation(angle: f64) -> Rotation3<f64> {
	Rotation3::from_axis_angle(&Vector3::y_axis(), angle)
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeSprite {
	pub id: &'static str,
	pub label: &'static str,
	pub color: &'static str,
	pub at: ScreenPoint,
	pub node_scale: f64,
	pub hovered: bool,
	pub selected: bool,
}

impl NodeSprite {
	pub fn font_px(&self) -> f64 {
		LABEL_FONT_SIZE * self.at.scale * self.node_scale
	}

	/// Whether the pointer falls on this node's label box.
	pub fn hit(&self, x: f64, y: f64) -> bool {
		let k = self.at.scale * self.node_scale;
		let half_w = label_width(self.label) * k / 2.0;
		let half_h = LABEL_HEIGHT * k / 2.0;
		(x - self.at.x).abs() <= half_w && (y - self.at.y).abs() <= half_h
	}

	/// Labels fade slightly as they go round the back of the sphere.
	pub fn alpha(&self, radius: f64) -> f64 {
		if radius <= 0.0 {
			return 1.0;
		}
		0.55 + 0.45 * ((self.at.depth / radius + 1.0) / 2.0).clamp(0.0, 1.0)
	}
}

/// Everything the canvas needs to draw one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
	pub width: f64,
	pub height: f64,
	pub radius: f64,
	/// Back to front.
	pub nodes: Vec<NodeSprite>,
	pub shell: Vec<Vec<(f64, f64)>>,
	pub shell_opacity: f64,
}

impl Frame {
	/// Front-most node under the pointer.
	pub fn node_at(&self, x: f64, y: f64) -> Option<&'static str> {
		self.nodes.iter().rev().find(|n| n.hit(x, y)).map(|n| n.id)
	}
}

pub struct FrameInput<'a> {
	pub nodes: &'a [PositionedSkill],
	pub scales: &'a [f64],
	pub hovered: Option<&'a str>,
	pub selected: Option<&'a str>,
	pub angle: f64,
	pub radius: f64,
	pub shell_opacity: f64,
	pub camera: Camera,
}

pub fn build_frame(input: FrameInput<'_>) -> Frame {
	let FrameInput {
		nodes,
		scales,
		hovered,
		selected,
		angle,
		radius,
		shell_opacity,
		camera,
	} = input;

	let Some(projection) = camera.projection() else {
		return Frame {
			width: camera.width,
			height: camera.height,
			radius,
			shell_opacity,
			..Frame::default()
		};
	};
	let rotation = sphere_rotation(angle);

	let mut sprites: Vec<NodeSprite> = nodes
		.iter()
		.enumerate()
		.filter_map(|(i, node)| {
			let at = projection.project(&(rotation * node.position))?;
			let id = node.skill.id;
			Some(NodeSprite {
				id,
				label: node.skill.name,
				color: category_color(Some(node.skill.category)),
				at,
				node_scale: scales.get(i).copied().unwrap_or(SCALE_IDLE),
				hovered: hovered == Some(id),
				selected: selected == Some(id),
			})
		})
		.collect();
	sprites.sort_by(|a, b| a.at.depth.total_cmp(&b.at.depth));

	let shell = shell_lines(radius, SHELL_SEGMENTS)
		.into_iter()
		.map(|line| {
			line.into_iter()
				.filter_map(|p| projection.project(&(rotation * p)))
				.map(|s| (s.x, s.y))
				.collect::<Vec<_>>()
		})
		.filter(|line| line.len() > 1)
		.collect();

	Frame {
		width: camera.width,
		height: camera.height,
		radius,
		nodes: sprites,
		shell,
		shell_opacity,
	}
}

/// Latitude rings and longitude meridians of a UV sphere.
pub fn shell_lines(radius: f64, segments: usize) -> Vec<Vec<Vector3<f64>>> {
	let segments = segments.max(3);
	let mut lines = Vec::with_capacity(segments * 2);
	for lat in 1..segments {
		let phi = PI * lat as f64 / segments as f64;
		let ring = (0..=segments)
			.map(|lon| {
				let theta = 2.0 * PI * lon as f64 / segments as f64;
				Vector3::new(
					radius * phi.sin() * theta.cos(),
					radius * phi.cos(),
					radius * phi.sin() * theta.sin(),
				)
			})
			.collect();
		lines.push(ring);
	}
	for lon in 0..segments {
		let theta = 2.0 * PI * lon as f64 / segments as f64;
		let meridian = (0..=segments)
			.map(|lat| {
				let phi = PI * lat as f64 / segments as f64;
				Vector3::new(
					radius * phi.sin() * theta.cos(),
					radius * phi.cos(),
					radius * phi.sin() * theta.sin(),
				)
			})
			.collect();
		lines.push(meridian);
	}
	lines
}

/// Placement of the canvas container while the detail panel is open or shut.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerVariant {
	Center,
	DesktopAside,
	MobileAside,
}

impl ContainerVariant {
	pub fn for_state(detail_open: bool, class: ViewportClass) -> Self {
		match (detail_open, class) {
			(false, _) => ContainerVariant::Center,
			(true, ViewportClass::Desktop) => ContainerVariant::DesktopAside,
			(true, ViewportClass::Mobile) => ContainerVariant::MobileAside,
		}
	}

	pub fn style(self) -> String {
		let (x, y, scale, width, height) = match self {
			ContainerVariant::Center => (0, 0, 1.0, 100, 100),
			ContainerVariant::DesktopAside => (-20, 0, 1.0, 60, 100),
			ContainerVariant::MobileAside => (0, -20, 0.85, 100, 45),
		};
		let transition = Transition::spring(100.0, 20.0).css(&["transform", "width", "height"]);
		format!(
			"transform: translate({x}%, {y}%) scale({scale}); width: {width}%; height: {height}%; transition: {transition};"
		)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelVariant {
	Hidden,
	Visible,
	Exit,
}

impl PanelVariant {
	pub fn for_state(detail_open: bool, ever_opened: bool) -> Self {
		match (detail_open, ever_opened) {
			(true, _) => PanelVariant::Visible,
			(false, true) => PanelVariant::Exit,
			(false, false) => PanelVariant::Hidden,
		}
	}

	/// Inline style for the detail panel. The slide axis follows the
	/// viewport: sideways on desktop, up from the bottom on mobile.
	pub fn style(self, class: ViewportClass) -> String {
		let offscreen = if class.is_mobile() {
			"translate(0%, 100%)"
		} else {
			"translate(100%, 0%)"
		};
		let (opacity, transform, transition, events) = match self {
			PanelVariant::Hidden => (0, offscreen, "none".to_string(), "none"),
			PanelVariant::Visible => (
				1,
				"translate(0%, 0%)",
				Transition::spring(100.0, 20.0)
					.delayed(0.1)
					.css(&["opacity", "transform"]),
				"auto",
			),
			PanelVariant::Exit => (
				0,
				offscreen,
				Transition::tween(0.25, Easing::EaseIn).css(&["opacity", "transform"]),
				"none",
			),
		};
		format!(
			"opacity: {opacity}; transform: {transform}; transition: {transition}; pointer-events: {events};"
		)
	}
}
