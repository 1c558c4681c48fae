use leptos::prelude::*;

use super::presentation::PanelVariant;
use super::types::{MAX_RATING, SkillRecord};
use super::viewport::ViewportClass;

#[component]
pub fn RatingStars(rating: [bool; MAX_RATING as usize]) -> impl IntoView {
	view! {
		<div class="nebula-rating">
			{rating
				.into_iter()
				.map(|filled| {
					view! {
						<span class={if filled { "nebula-rating-star filled" } else { "nebula-rating-star" }}>
							"★"
						</span>
					}
				})
				.collect_view()}
		</div>
	}
}

/// Side (desktop) or bottom (mobile) panel for the selected skill. `skill`
/// keeps the last selection so the panel still has content while sliding out.
#[component]
pub fn DetailPanel<F>(
	#[prop(into)] skill: Signal<Option<&'static SkillRecord>>,
	#[prop(into)] variant: Signal<PanelVariant>,
	#[prop(into)] viewport: Signal<ViewportClass>,
	on_close: F,
) -> impl IntoView
where
	F: Fn() + 'static,
{
	view! {
		<div
			class="nebula-details-panel-standalone"
			style=move || variant.get().style(viewport.get())
			aria-hidden=move || (variant.get() != PanelVariant::Visible).to_string()
		>
			<button class="nebula-close-btn" title="Close" on:click=move |_| on_close()>
				"✕"
			</button>
			{move || {
				skill
					.get()
					.map(|skill| {
						view! {
							<h3 style={format!("color: {}", skill.category.color())}>{skill.name}</h3>
							<span class="nebula-category">{skill.category.label()}</span>
							<RatingStars rating={skill.rating_stars()} />
							<p class="details-text-scrollable">{skill.details}</p>
						}
					})
			}}
		</div>
	}
}
