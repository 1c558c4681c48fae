//! Device-responsive sizing for the sphere scene.

use log::debug;
use serde::{Deserialize, Serialize};

use super::config::{BASE_SPHERE_RADIUS, MOBILE_BREAKPOINT};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewportClass {
	Mobile,
	Desktop,
}

impl ViewportClass {
	pub fn is_mobile(self) -> bool {
		self == ViewportClass::Mobile
	}

	pub fn css_class(self) -> &'static str {
		match self {
			ViewportClass::Mobile => "is-mobile",
			ViewportClass::Desktop => "is-desktop",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportProfile {
	pub sphere_radius: f64,
	pub camera_distance: f64,
	pub shell_opacity: f64,
}

impl ViewportProfile {
	pub const DESKTOP: ViewportProfile = ViewportProfile {
		sphere_radius: BASE_SPHERE_RADIUS,
		camera_distance: BASE_SPHERE_RADIUS * 2.5,
		shell_opacity: 0.35,
	};

	pub const MOBILE: ViewportProfile = ViewportProfile {
		sphere_radius: BASE_SPHERE_RADIUS * 0.75,
		camera_distance: BASE_SPHERE_RADIUS * 3.0,
		shell_opacity: 0.2,
	};
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
	/// Inclusive lower bound in CSS pixels.
	pub min_width: f64,
	pub class: ViewportClass,
	pub profile: ViewportProfile,
}

/// Width thresholds, ascending by `min_width`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BreakpointTable {
	entries: Vec<Breakpoint>,
}

impl BreakpointTable {
	/// Builds a table; entries are sorted and the first one is widened to
	/// start at zero so every positive width resolves.
	pub fn new(mut entries: Vec<Breakpoint>) -> Self {
		entries.sort_by(|a, b| a.min_width.total_cmp(&b.min_width));
		if let Some(first) = entries.first_mut() {
			first.min_width = 0.0;
		}
		Self { entries }
	}

	/// `None` for widths that cannot come from a mounted surface.
	pub fn resolve(&self, width: f64) -> Option<&Breakpoint> {
		if !width.is_finite() || width <= 0.0 {
			return None;
		}
		self.entries.iter().rev().find(|b| width >= b.min_width)
	}
}

impl Default for BreakpointTable {
	fn default() -> Self {
		Self::new(vec![
			Breakpoint {
				min_width: 0.0,
				class: ViewportClass::Mobile,
				profile: ViewportProfile::MOBILE,
			},
			Breakpoint {
				min_width: MOBILE_BREAKPOINT,
				class: ViewportClass::Desktop,
				profile: ViewportProfile::DESKTOP,
			},
		])
	}
}

/// Current viewport class and sizing, updated on resize.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
	table: BreakpointTable,
	pub class: ViewportClass,
	pub profile: ViewportProfile,
	/// Window width the class was resolved from.
	pub width: f64,
}

impl Viewport {
	pub fn new(table: BreakpointTable, width: f64) -> Self {
		let mut viewport = Self {
			table,
			class: ViewportClass::Desktop,
			profile: ViewportProfile::DESKTOP,
			width: 0.0,
		};
		viewport.resize(width);
		viewport
	}

	/// Applies a new window width. Returns `true` when the breakpoint class
	/// changed; invalid widths are ignored.
	pub fn resize(&mut self, width: f64) -> bool {
		let Some(bp) = self.table.resolve(width).copied() else {
			return false;
		};
		self.width = width;
		let changed = bp.class != self.class;
		if changed {
			debug!("viewport {:?} -> {:?} at {width}px", self.class, bp.class);
		}
		self.class = bp.class;
		self.profile = bp.profile;
		changed
	}
}

#[cfg(test)]
mod tests {
	use approx::assert_relative_eq;

	use super::*;

	#[test]
	fn desktop_and_mobile_constants() {
		let table = BreakpointTable::default();
		let desktop = table.resolve(1280.0).map(|b| b.profile);
		assert_eq!(desktop, Some(ViewportProfile::DESKTOP));
		let mobile = table.resolve(375.0).map(|b| b.profile);
		assert_eq!(mobile, Some(ViewportProfile::MOBILE));

		assert_relative_eq!(ViewportProfile::DESKTOP.sphere_radius, 3.8, epsilon = 1e-12);
		assert_relative_eq!(ViewportProfile::DESKTOP.camera_distance, 9.5, epsilon = 1e-12);
		assert_relative_eq!(ViewportProfile::DESKTOP.shell_opacity, 0.35, epsilon = 1e-12);
		assert_relative_eq!(ViewportProfile::MOBILE.sphere_radius, 2.85, epsilon = 1e-12);
		assert_relative_eq!(ViewportProfile::MOBILE.camera_distance, 11.4, epsilon = 1e-12);
		assert_relative_eq!(ViewportProfile::MOBILE.shell_opacity, 0.2, epsilon = 1e-12);
	}

	#[test]
	fn breakpoint_is_inclusive_for_desktop() {
		let table = BreakpointTable::default();
		assert_eq!(table.resolve(879.9).map(|b| b.class), Some(ViewportClass::Mobile));
		assert_eq!(table.resolve(880.0).map(|b| b.class), Some(ViewportClass::Desktop));
	}

	#[test]
	fn resize_across_breakpoint_swaps_profile() {
		let mut viewport = Viewport::new(BreakpointTable::default(), 1200.0);
		assert_eq!(viewport.class, ViewportClass::Desktop);
		assert!(viewport.resize(600.0));
		assert_eq!(viewport.profile, ViewportProfile::MOBILE);
		assert!(!viewport.resize(500.0));
		assert!(viewport.resize(1000.0));
		assert_eq!(viewport.profile, ViewportProfile::DESKTOP);
	}

	#[test]
	fn unmounted_surface_is_ignored() {
		let mut viewport = Viewport::new(BreakpointTable::default(), 600.0);
		assert!(!viewport.resize(0.0));
		assert!(!viewport.resize(f64::NAN));
		assert_eq!(viewport.class, ViewportClass::Mobile);
		assert_relative_eq!(viewport.width, 600.0);
	}

	#[test]
	fn table_sorts_and_anchors_at_zero() {
		let table = BreakpointTable::new(vec![
			Breakpoint {
				min_width: 1600.0,
				class: ViewportClass::Desktop,
				profile: ViewportProfile::DESKTOP,
			},
			Breakpoint {
				min_width: 320.0,
				class: ViewportClass::Mobile,
				profile: ViewportProfile::MOBILE,
			},
		]);
		assert_eq!(table.entries[0].min_width, 0.0);
		assert_eq!(table.resolve(10.0).map(|b| b.class), Some(ViewportClass::Mobile));
	}
}
