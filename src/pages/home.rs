use leptos::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::loading::LoadingScreen;
use crate::components::skill_sphere::SkillSphere;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<LoadingScreen />
			<main class="portfolio">
				<section class="skills-section" id="SkillNebulaV3">
					<SkillSphere />
				</section>
				<section class="contact-wrapper" id="Contact">
					<ContactForm />
				</section>
			</main>
		</ErrorBoundary>
	}
}
