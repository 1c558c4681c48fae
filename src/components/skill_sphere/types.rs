use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COLOR: &str = "#ffffff";
pub const MAX_RATING: u8 = 5;

/// Grouping used to colour a skill label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
	Methodology,
	VersionControl,
	CiCdAutomation,
	CodeQuality,
	ContainersOrchestration,
	CloudPlatform,
}

impl Category {
	pub fn label(self) -> &'static str {
		match self {
			Category::Methodology => "Methodology",
			Category::VersionControl => "Version Control",
			Category::CiCdAutomation => "CI/CD & Automation",
			Category::CodeQuality => "Code Quality",
			Category::ContainersOrchestration => "Containers & Orchestration",
			Category::CloudPlatform => "Cloud Platform",
		}
	}

	pub fn color(self) -> &'static str {
		match self {
			Category::Methodology => "#f07178",
			Category::VersionControl => "#c3e88d",
			Category::CiCdAutomation => "#89ddff",
			Category::CodeQuality => "#ffcb6b",
			Category::ContainersOrchestration => "#c792ea",
			Category::CloudPlatform => "#ff9cac",
		}
	}
}

/// Colour for an optional category, falling back to white.
pub fn category_color(category: Option<Category>) -> &'static str {
	category.map(Category::color).unwrap_or(DEFAULT_COLOR)
}

/// One labeled capability, defined at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillRecord {
	pub id: &'static str,
	pub name: &'static str,
	pub rating: u8,
	pub details: &'static str,
	pub category: Category,
}

impl SkillRecord {
	/// Five indicators, `true` for each filled star.
	pub fn rating_stars(&self) -> [bool; MAX_RATING as usize] {
		let filled = self.rating.min(MAX_RATING) as usize;
		std::array::from_fn(|i| i < filled)
	}
}

/// A [`SkillRecord`] placed on the sphere surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionedSkill {
	pub skill: &'static SkillRecord,
	pub position: Vector3<f64>,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(rating: u8) -> SkillRecord {
		SkillRecord {
			id: "docker",
			name: "Docker",
			rating,
			details: "",
			category: Category::ContainersOrchestration,
		}
	}

	#[test]
	fn rating_stars_fill_from_the_left() {
		assert_eq!(record(4).rating_stars(), [true, true, true, true, false]);
		assert_eq!(record(5).rating_stars(), [true; 5]);
	}

	#[test]
	fn rating_out_of_range_is_clamped_for_display() {
		assert_eq!(record(9).rating_stars(), [true; 5]);
		assert_eq!(record(0).rating_stars(), [false; 5]);
	}

	#[test]
	fn category_colors() {
		assert_eq!(Category::CodeQuality.color(), "#ffcb6b");
		assert_eq!(category_color(None), DEFAULT_COLOR);
		assert_eq!(category_color(Some(Category::Methodology)), "#f07178");
	}
}
