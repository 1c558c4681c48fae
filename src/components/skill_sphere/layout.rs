//! Equal-area spiral placement of skill nodes on a sphere.

use std::f64::consts::PI;

use log::debug;
use nalgebra::Vector3;

use super::types::{PositionedSkill, SkillRecord};

/// Position of node `index` out of `count` on a sphere of `radius`.
///
/// The polar angle walks `acos` of an evenly spaced height in `[-1, 1]`, so
/// every node owns an equal band of surface area; the azimuth winds around
/// the pole `sqrt(count * PI)` times as fast. A lone node sits on the pole
/// `(0, 0, -radius)`.
pub fn spherical_position(index: usize, count: usize, radius: f64) -> Vector3<f64> {
	if count <= 1 {
		return Vector3::new(0.0, 0.0, -radius);
	}
	let denominator = (count - 1).max(1) as f64;
	let height = (-1.0 + 2.0 * index as f64 / denominator).clamp(-1.0, 1.0);
	let phi = height.acos();
	let theta = (count as f64 * PI).sqrt() * phi;
	Vector3::new(
		radius * phi.sin() * theta.cos(),
		radius * phi.sin() * theta.sin(),
		radius * phi.cos(),
	)
}

pub fn layout(records: &'static [SkillRecord], radius: f64) -> Vec<PositionedSkill> {
	let count = records.len();
	records
		.iter()
		.enumerate()
		.map(|(i, skill)| PositionedSkill {
			skill,
			position: spherical_position(i, count, radius),
		})
		.collect()
}

/// Cached layout, recomputed only when the node count or radius changes.
#[derive(Clone, Debug)]
pub struct SphereLayout {
	records: &'static [SkillRecord],
	radius: f64,
	nodes: Vec<PositionedSkill>,
}

impl SphereLayout {
	pub fn new(records: &'static [SkillRecord], radius: f64) -> Self {
		Self {
			records,
			radius,
			nodes: layout(records, radius),
		}
	}

	pub fn records(&self) -> &'static [SkillRecord] {
		self.records
	}

	pub fn nodes(&self) -> &[PositionedSkill] {
		&self.nodes
	}

	pub fn radius(&self) -> f64 {
		self.radius
	}

	/// Returns `true` when the positions were recomputed.
	pub fn relayout(&mut self, records: &'static [SkillRecord], radius: f64) -> bool {
		if records.len() == self.records.len() && radius == self.radius {
			return false;
		}
		debug!(
			"relayout: {} -> {} nodes, radius {} -> {}",
			self.records.len(),
			records.len(),
			self.radius,
			radius
		);
		self.records = records;
		self.radius = radius;
		self.nodes = layout(records, radius);
		true
	}

	pub fn get(&self, id: &str) -> Option<&PositionedSkill> {
		self.nodes.iter().find(|n| n.skill.id == id)
	}
}
