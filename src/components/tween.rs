//! Named transitions and a spring integrator.
//!
//! A transition is what the page animates with: either a timed tween with an
//! easing curve, or a spring. Both can be rendered to a CSS `transition`
//! value for DOM elements; the canvas drives [`Spring`] directly per frame.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Easing {
	Linear,
	EaseIn,
	EaseOut,
	EaseInOut,
	CubicBezier(f64, f64, f64, f64),
}

impl Easing {
	fn control_points(self) -> (f64, f64, f64, f64) {
		match self {
			Easing::Linear => (0.0, 0.0, 1.0, 1.0),
			Easing::EaseIn => (0.42, 0.0, 1.0, 1.0),
			Easing::EaseOut => (0.0, 0.0, 0.58, 1.0),
			Easing::EaseInOut => (0.42, 0.0, 0.58, 1.0),
			Easing::CubicBezier(x1, y1, x2, y2) => (x1, y1, x2, y2),
		}
	}

	/// Eased progress for `t` in `[0, 1]`.
	pub fn apply(self, t: f64) -> f64 {
		let t = t.clamp(0.0, 1.0);
		if self == Easing::Linear {
			return t;
		}
		let (x1, y1, x2, y2) = self.control_points();
		let s = solve_bezier_x(t, x1, x2);
		bezier(s, y1, y2)
	}

	pub fn css(self) -> String {
		match self {
			Easing::Linear => "linear".into(),
			Easing::EaseIn => "ease-in".into(),
			Easing::EaseOut => "ease-out".into(),
			Easing::EaseInOut => "ease-in-out".into(),
			Easing::CubicBezier(x1, y1, x2, y2) => {
				format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
			}
		}
	}
}

fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
	let u = 1.0 - s;
	3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
	let u = 1.0 - s;
	3.0 * u * u * p1 + 6.0 * u * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

// Newton first, bisection when the slope flattens out.
fn solve_bezier_x(x: f64, x1: f64, x2: f64) -> f64 {
	let mut s = x;
	for _ in 0..8 {
		let err = bezier(s, x1, x2) - x;
		if err.abs() < 1e-7 {
			return s;
		}
		let slope = bezier_slope(s, x1, x2);
		if slope.abs() < 1e-6 {
			break;
		}
		s -= err / slope;
	}
	let (mut lo, mut hi) = (0.0, 1.0);
	s = x;
	while hi - lo > 1e-7 {
		if bezier(s, x1, x2) < x {
			lo = s;
		} else {
			hi = s;
		}
		s = (lo + hi) / 2.0;
	}
	s
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
	pub stiffness: f64,
	pub damping: f64,
	pub mass: f64,
	pub rest_delta: f64,
}

impl SpringConfig {
	pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
		Self {
			stiffness,
			damping,
			mass,
			rest_delta: 0.01,
		}
	}

	pub const fn with_rest_delta(mut self, rest_delta: f64) -> Self {
		self.rest_delta = rest_delta;
		self
	}

	pub fn damping_ratio(&self) -> f64 {
		self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
	}

	/// Approximate time for the spring to settle, in seconds.
	pub fn settle_time(&self) -> f64 {
		let omega = (self.stiffness / self.mass).sqrt();
		let zeta = self.damping_ratio();
		let decay = if zeta < 1.0 {
			zeta * omega
		} else {
			omega * (zeta - (zeta * zeta - 1.0).sqrt())
		};
		(4.0 / decay.max(1e-3)).clamp(0.1, 2.0)
	}
}

impl Default for SpringConfig {
	fn default() -> Self {
		Self::new(100.0, 10.0, 1.0)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Transition {
	Tween {
		duration: f64,
		delay: f64,
		easing: Easing,
	},
	Spring {
		config: SpringConfig,
		delay: f64,
	},
}

impl Transition {
	pub const fn tween(duration: f64, easing: Easing) -> Self {
		Transition::Tween {
			duration,
			delay: 0.0,
			easing,
		}
	}

	pub const fn spring(stiffness: f64, damping: f64) -> Self {
		Transition::Spring {
			config: SpringConfig::new(stiffness, damping, 1.0),
			delay: 0.0,
		}
	}

	pub const fn delayed(self, by: f64) -> Self {
		match self {
			Transition::Tween {
				duration, easing, ..
			} => Transition::Tween {
				duration,
				delay: by,
				easing,
			},
			Transition::Spring { config, .. } => Transition::Spring { config, delay: by },
		}
	}

	/// CSS `transition` value applying this timing to each property.
	pub fn css(&self, properties: &[&str]) -> String {
		let (duration, delay, easing) = match *self {
			Transition::Tween {
				duration,
				delay,
				easing,
			} => (duration, delay, easing),
			// Overshoot-free approximation of a settling spring.
			Transition::Spring { config, delay } => (
				config.settle_time(),
				delay,
				Easing::CubicBezier(0.22, 1.0, 0.36, 1.0),
			),
		};
		properties
			.iter()
			.map(|p| format!("{p} {duration:.3}s {} {delay:.3}s", easing.css()))
			.collect::<Vec<_>>()
			.join(", ")
	}
}

/// Damped spring chasing a target value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Spring {
	pub config: SpringConfig,
	value: f64,
	target: f64,
	velocity: f64,
}

const MAX_SUBSTEP: f64 = 1.0 / 240.0;

impl Spring {
	pub fn new(config: SpringConfig, value: f64) -> Self {
		Self {
			config,
			value,
			target: value,
			velocity: 0.0,
		}
	}

	pub fn value(&self) -> f64 {
		self.value
	}

	pub fn set_target(&mut self, target: f64) {
		self.target = target;
	}

	/// Kill the current motion, keeping the value where it is.
	pub fn stop(&mut self) {
		self.velocity = 0.0;
	}

	pub fn is_at_rest(&self) -> bool {
		(self.target - self.value).abs() < self.config.rest_delta
			&& self.velocity.abs() < self.config.rest_delta
	}

	/// Integrate `dt` seconds (semi-implicit Euler, fixed substeps).
	pub fn step(&mut self, dt: f64) -> f64 {
		if dt <= 0.0 {
			return self.value;
		}
		if self.is_at_rest() {
			self.value = self.target;
			self.velocity = 0.0;
			return self.value;
		}
		let steps = (dt / MAX_SUBSTEP).ceil().max(1.0);
		let h = dt / steps;
		let SpringConfig {
			stiffness,
			damping,
			mass,
			..
		} = self.config;
		for _ in 0..steps as usize {
			let force = -stiffness * (self.value - self.target) - damping * self.velocity;
			self.velocity += force / mass * h;
			self.value += self.velocity * h;
		}
		if self.is_at_rest() {
			self.value = self.target;
			self.velocity = 0.0;
		}
		self.value
	}
}

#[cfg(test)]
mod tests {
	use approx::assert_relative_eq;

	use super::*;

	#[test]
	fn easing_endpoints() {
		for easing in [
			Easing::Linear,
			Easing::EaseIn,
			Easing::EaseOut,
			Easing::EaseInOut,
			Easing::CubicBezier(0.65, 0.0, 0.35, 1.0),
		] {
			assert_relative_eq!(easing.apply(0.0), 0.0, epsilon = 1e-6);
			assert_relative_eq!(easing.apply(1.0), 1.0, epsilon = 1e-6);
		}
	}

	#[test]
	fn ease_in_starts_slow_ease_out_starts_fast() {
		assert!(Easing::EaseIn.apply(0.25) < 0.25);
		assert!(Easing::EaseOut.apply(0.25) > 0.25);
		assert_relative_eq!(Easing::EaseInOut.apply(0.5), 0.5, epsilon = 1e-5);
	}

	#[test]
	fn tween_css() {
		let t = Transition::tween(0.25, Easing::EaseIn).delayed(0.1);
		assert_eq!(
			t.css(&["opacity", "transform"]),
			"opacity 0.250s ease-in 0.100s, transform 0.250s ease-in 0.100s"
		);
	}

	#[test]
	fn spring_settles_on_target() {
		let config = SpringConfig::new(100.0, 30.0, 0.5).with_rest_delta(0.001);
		let mut spring = Spring::new(config, 0.0);
		spring.set_target(1.0);
		for _ in 0..600 {
			spring.step(1.0 / 60.0);
		}
		assert!(spring.is_at_rest());
		assert_relative_eq!(spring.value(), 1.0);
	}

	#[test]
	fn overdamped_spring_does_not_overshoot() {
		let mut spring = Spring::new(SpringConfig::new(100.0, 30.0, 0.5), 0.0);
		spring.set_target(1.0);
		for _ in 0..120 {
			assert!(spring.step(1.0 / 60.0) <= 1.0 + 1e-9);
		}
	}

	#[test]
	fn stop_keeps_value_and_kills_velocity() {
		let mut spring = Spring::new(SpringConfig::default(), 0.0);
		spring.set_target(5.0);
		spring.step(0.05);
		let value = spring.value();
		spring.stop();
		assert_eq!(spring.velocity, 0.0);
		assert_eq!(spring.value(), value);
	}

	#[test]
	fn settle_time_is_bounded() {
		let t = SpringConfig::new(100.0, 20.0, 1.0).settle_time();
		assert!((0.1..=2.0).contains(&t));
		assert_relative_eq!(SpringConfig::new(1.0, 0.01, 1.0).settle_time(), 2.0);
	}
}
