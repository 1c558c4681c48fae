//! Skill Nebula: a single-page portfolio whose centrepiece is a rotating
//! sphere of skill labels drawn on a 2D canvas.
//!
//! The sphere's geometry, interaction and frame building are plain structs
//! under `components::skill_sphere`, so they are tested natively; only the
//! component and renderer touch the DOM. The page also carries a splash
//! screen and a contact form with a simulated backend.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

mod components;
mod pages;

use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Routes `log` output to the browser console and panics to
/// `console.error`. Call once before mounting.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("skill nebula {} starting", env!("CARGO_PKG_VERSION"));
}

/// Root view: document metadata plus a router with the portfolio at `/`
/// and a not-found page for every other path.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		<Title text="Skill Nebula" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
