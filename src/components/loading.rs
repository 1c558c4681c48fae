use std::f64::consts::PI;
use std::time::Duration;

use leptos::prelude::*;
use log::debug;

use crate::components::timer::{BrowserTimer, TimerSlot};
use crate::components::tween::{Easing, Transition};

pub const SPLASH_DURATION: Duration = Duration::from_millis(2500);
const PROGRESS_TICK: Duration = Duration::from_millis(50);

const ARC_RADIUS: f64 = 46.0;
/// The arc covers three quarters of the circle, opening at the bottom.
const ARC_SPAN: f64 = 0.75;

/// Dash offset that reveals `progress` (0..=1) of the arc. The fill eases
/// out so the arc visibly jumps at first and creeps to the end.
fn arc_offset(progress: f64) -> f64 {
	let circumference = 2.0 * PI * ARC_RADIUS;
	circumference * (1.0 - ARC_SPAN * Easing::EaseOut.apply(progress))
}

/// Full-screen splash that fades out once `duration` has elapsed.
#[component]
pub fn LoadingScreen(#[prop(default = SPLASH_DURATION)] duration: Duration) -> impl IntoView {
	let visible = RwSignal::new(true);
	let progress = RwSignal::new(0.0_f64);
	let hide = StoredValue::new_local(TimerSlot::<BrowserTimer>::new());
	let ticker = StoredValue::new_local(TimerSlot::<BrowserTimer>::new());

	let step = PROGRESS_TICK.as_secs_f64() / duration.as_secs_f64().max(f64::EPSILON);
	ticker.update_value(|t| {
		t.set_interval(PROGRESS_TICK, move || {
			progress.update(|p| *p = (*p + step).min(1.0));
		});
	});
	hide.update_value(|t| {
		t.set_timeout(duration, move || {
			debug!("splash finished");
			progress.set(1.0);
			visible.set(false);
			ticker.update_value(|t| t.clear());
		});
	});
	on_cleanup(move || {
		hide.update_value(|t| t.clear());
		ticker.update_value(|t| t.clear());
	});

	let exit = Transition::tween(0.7, Easing::EaseInOut)
		.delayed(0.4)
		.css(&["opacity"]);
	let circumference = 2.0 * PI * ARC_RADIUS;

	view! {
		<div
			class="loading-screen-container-logo-arc"
			style=move || {
				if visible.get() {
					"opacity: 1;".to_string()
				} else {
					format!("opacity: 0; pointer-events: none; transition: {exit};")
				}
			}
		>
			<div class="logo-arc-loader-wrapper">
				<svg class="loading-progress-arc-svg" viewBox="0 0 100 100">
					<circle cx="50" cy="50" r="46" stroke="rgba(139, 233, 253, 0.15)" stroke-width="4" fill="transparent" />
					<circle
						class="loading-progress-arc"
						cx="50"
						cy="50"
						r="46"
						stroke="var(--loading-arc-color, #F0F8FF)"
						stroke-width="4"
						fill="transparent"
						stroke-linecap="round"
						stroke-dasharray={format!("{circumference:.2}")}
						stroke-dashoffset=move || format!("{:.2}", arc_offset(progress.get()))
						transform="rotate(135 50 50)"
					/>
				</svg>
			</div>
			<p class="loading-text-logo-arc">"Initializing Portfolio..."</p>
		</div>
	}
}
