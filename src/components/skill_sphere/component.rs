use leptos::ev;
use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, PointerEvent, Window};

use super::config::SceneConfig;
use super::data::SKILLS;
use super::panel::DetailPanel;
use super::presentation::{ContainerVariant, PanelVariant};
use super::render;
use super::state::SceneState;
use super::types::SkillRecord;
use super::viewport::ViewportClass;

/// Device pixel ratio is capped to keep fill rate down on dense screens.
const MAX_DPR: f64 = 1.5;

fn window_width(window: &Window) -> f64 {
	window
		.inner_width()
		.ok()
		.and_then(|w| w.as_f64())
		.unwrap_or(0.0)
}

fn now_ms(window: &Window) -> Option<f64> {
	window.performance().map(|p| p.now())
}

fn pointer_position(canvas: &HtmlCanvasElement, ev: &PointerEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// The canvas and its 2D context.
#[derive(Clone)]
struct Surface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl Surface {
	/// CSS size of the container the canvas fills.
	fn css_size(&self) -> (f64, f64) {
		self.canvas
			.parent_element()
			.map(|p| (p.client_width() as f64, p.client_height() as f64))
			.unwrap_or((0.0, 0.0))
	}

	/// Sizes the backing store for the device pixel ratio and returns the
	/// size in CSS pixels.
	fn fit(&self, window: &Window) -> (f64, f64) {
		let (w, h) = self.css_size();
		let dpr = window.device_pixel_ratio().clamp(1.0, MAX_DPR);
		self.canvas.set_width((w * dpr) as u32);
		self.canvas.set_height((h * dpr) as u32);
		let _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
		(w, h)
	}
}

/// Runs one frame and queues the next. The queued request is kept in
/// `request` so teardown can cancel it.
fn schedule_frame(
	scene: StoredValue<Option<SceneState>, LocalStorage>,
	surface: Surface,
	request: StoredValue<Option<AnimationFrameRequestHandle>>,
	last_ts: Option<f64>,
) {
	let next = request_animation_frame_with_handle(move || {
		let Some(window) = web_sys::window() else {
			return;
		};
		let now = now_ms(&window);
		let dt = match (last_ts, now) {
			(Some(prev), Some(now)) => (now - prev) / 1000.0,
			_ => 0.0,
		};
		let drawn = scene.try_update_value(|s| {
			let Some(s) = s else {
				return;
			};
			// The container changes size without a window resize while the
			// detail panel opens or closes.
			if surface.css_size() != (s.width, s.height) {
				let (w, h) = surface.fit(&window);
				s.fit_surface(w, h);
			}
			s.tick(dt);
			render::render(s.frame(), &surface.ctx);
		});
		if drawn.is_some() {
			schedule_frame(scene, surface, request, now);
		}
	});
	match next {
		Ok(handle) => request.set_value(Some(handle)),
		Err(e) => warn!("skill sphere: requestAnimationFrame failed: {e:?}"),
	}
}

#[component]
pub fn SkillSphere(
	#[prop(default = SKILLS)] skills: &'static [SkillRecord],
	#[prop(optional)] config: Option<SceneConfig>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let scene = StoredValue::new_local(None::<SceneState>);
	let frame_request = StoredValue::new(None::<AnimationFrameRequestHandle>);
	let resize_listener = StoredValue::new(None::<WindowListenerHandle>);

	let selected = RwSignal::new(None::<&'static SkillRecord>);
	let shown = RwSignal::new(None::<&'static SkillRecord>);
	let class = RwSignal::new(ViewportClass::Desktop);
	let ever_opened = RwSignal::new(false);

	// Mirrors the scene's selection and breakpoint into the DOM signals.
	let sync = move |s: &SceneState| {
		let next = s.selected();
		if selected.get_untracked().map(|r| r.id) != next.map(|r| r.id) {
			selected.set(next);
			if next.is_some() {
				shown.set(next);
				ever_opened.set(true);
			}
		}
		if class.get_untracked() != s.class() {
			class.set(s.class());
		}
	};

	on_cleanup(move || {
		if let Some(handle) = frame_request.try_update_value(Option::take).flatten() {
			handle.cancel();
		}
		if let Some(listener) = resize_listener.try_update_value(Option::take).flatten() {
			listener.remove();
		}
		scene.update_value(|s| {
			if let Some(s) = s {
				s.reset();
			}
		});
		info!("skill sphere torn down");
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if scene.with_value(Option::is_some) {
			return;
		}
		let Some(window) = web_sys::window() else {
			warn!("skill sphere: no window, not starting");
			return;
		};
		let ctx = match canvas.get_context("2d") {
			Ok(Some(ctx)) => ctx,
			other => {
				warn!("skill sphere: 2d context unavailable: {other:?}");
				return;
			}
		};
		let Ok(ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else {
			return;
		};
		let surface = Surface { canvas, ctx };

		let (w, h) = surface.fit(&window);
		let state = SceneState::new(
			skills,
			config.clone().unwrap_or_default(),
			window_width(&window),
			w,
			h,
		);
		info!(
			"skill sphere mounted: {} nodes, {:?} profile at {}px",
			state.layout.nodes().len(),
			state.class(),
			state.viewport.width
		);
		sync(&state);
		scene.set_value(Some(state));

		let surface_resize = surface.clone();
		let listener = window_event_listener(ev::resize, move |_| {
			let Some(win) = web_sys::window() else {
				return;
			};
			scene.update_value(|s| {
				if let Some(s) = s {
					let (nw, nh) = surface_resize.fit(&win);
					s.resize(window_width(&win), nw, nh);
					sync(s);
				}
			});
		});
		resize_listener.set_value(Some(listener));

		schedule_frame(scene, surface, frame_request, None);
	});

	let set_cursor = move |s: &SceneState| {
		if let Some(canvas) = canvas_ref.get_untracked() {
			let _ = HtmlElement::style(&canvas).set_property("cursor", s.cursor());
		}
	};

	let on_pointerdown = move |ev: PointerEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (x, y) = pointer_position(&canvas, &ev);
		let _ = canvas.set_pointer_capture(ev.pointer_id());
		scene.update_value(|s| {
			if let Some(s) = s {
				s.pointer_down(x, y);
			}
		});
	};

	let on_pointermove = move |ev: PointerEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (x, y) = pointer_position(&canvas, &ev);
		scene.update_value(|s| {
			if let Some(s) = s {
				s.pointer_move(x, y);
				set_cursor(s);
			}
		});
	};

	let on_pointerup = move |ev: PointerEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (x, y) = pointer_position(&canvas, &ev);
		let _ = canvas.release_pointer_capture(ev.pointer_id());
		scene.update_value(|s| {
			if let Some(s) = s {
				s.pointer_up(x, y);
				set_cursor(s);
				sync(s);
			}
		});
	};

	let on_pointerleave = move |_: PointerEvent| {
		scene.update_value(|s| {
			if let Some(s) = s {
				s.pointer_leave();
				set_cursor(s);
			}
		});
	};

	let on_close = move || {
		scene.update_value(|s| {
			if let Some(s) = s {
				s.close_details();
				sync(s);
			}
		});
	};

	let detail_open = move || selected.get().is_some();
	let panel_variant =
		Signal::derive(move || PanelVariant::for_state(detail_open(), ever_opened.get()));

	view! {
		<section class=move || {
			format!(
				"skill-nebula-section {} {}",
				if detail_open() { "detail-view-active" } else { "" },
				class.get().css_class(),
			)
		}>
			<h2 class="skill-nebula-title">"Expertised Tools"</h2>
			<div class="skill-nebula-main-content">
				<div
					class="skill-canvas-container"
					style=move || ContainerVariant::for_state(detail_open(), class.get()).style()
				>
					<canvas
						node_ref=canvas_ref
						class="skill-sphere-canvas"
						on:pointerdown=on_pointerdown
						on:pointermove=on_pointermove
						on:pointerup=on_pointerup
						on:pointerleave=on_pointerleave
						style="display: block; width: 100%; height: 100%; cursor: grab; touch-action: pan-y;"
					/>
				</div>
				<DetailPanel skill=shown variant=panel_variant viewport=class on_close=on_close />
			</div>
			<p class="skill-nebula-hint">"Drag horizontally to rotate. Hover or click skills."</p>
		</section>
	}
}
