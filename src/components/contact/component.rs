use leptos::prelude::*;
use log::{info, warn};

use super::form::{FormStatus, FormValues, SUBMIT_LATENCY, simulate_send};
use crate::components::timer::{BrowserTimer, TimerSlot};

#[component]
pub fn ContactForm() -> impl IntoView {
	let values = RwSignal::new(FormValues::default());
	let status = RwSignal::new(FormStatus::default());
	let timer = StoredValue::new_local(TimerSlot::<BrowserTimer>::new());
	on_cleanup(move || timer.update_value(|t| t.clear()));

	let on_submit = move |ev: leptos::ev::SubmitEvent| {
		ev.prevent_default();
		let current = values.get_untracked();
		let mut next = status.get_untracked();
		if let Err(e) = next.begin_submit(&current) {
			warn!("contact form not sent: {e}");
			return;
		}
		status.set(next);
		timer.update_value(|t| {
			t.set_timeout(SUBMIT_LATENCY, move || {
				let mut next = status.get_untracked();
				let Some(reset_after) = next.finish(simulate_send(&current)) else {
					return;
				};
				if next == FormStatus::Success {
					info!("contact form sent");
				}
				status.set(next);
				timer.update_value(|t| {
					t.set_timeout(reset_after, move || status.update(FormStatus::reset));
				});
			});
		});
	};

	let sending = move || status.with(FormStatus::is_sending);
	let can_submit = move || !sending() && values.with(FormValues::is_valid);

	view! {
		<section class="contact-section temporal-flux-theme">
			<div class="contact-header">
				<h2 class="contact-title">"Get In Touch"</h2>
				<p class="contact-subtitle">
					"Have a question, project idea, or just want to connect? Drop me a line!"
				</p>
			</div>
			<form class="contact-form" on:submit=on_submit>
				<div class="form-group">
					<label for="name">"Name"</label>
					<input
						type="text"
						id="name"
						name="name"
						required
						prop:value=move || values.with(|v| v.name.clone())
						on:input=move |ev| values.update(|v| v.name = event_target_value(&ev))
						prop:disabled=sending
					/>
				</div>
				<div class="form-group">
					<label for="email">"Email"</label>
					<input
						type="email"
						id="email"
						name="email"
						required
						prop:value=move || values.with(|v| v.email.clone())
						on:input=move |ev| values.update(|v| v.email = event_target_value(&ev))
						prop:disabled=sending
					/>
				</div>
				<div class="form-group">
					<label for="phone">"Phone " <span class="optional">"(Optional)"</span></label>
					<input
						type="tel"
						id="phone"
						name="phone"
						prop:value=move || values.with(|v| v.phone.clone())
						on:input=move |ev| values.update(|v| v.phone = event_target_value(&ev))
						prop:disabled=sending
					/>
				</div>
				<div class="form-group">
					<label for="message">"Message"</label>
					<textarea
						id="message"
						name="message"
						required
						rows="5"
						prop:value=move || values.with(|v| v.message.clone())
						on:input=move |ev| values.update(|v| v.message = event_target_value(&ev))
						prop:disabled=sending
					/>
				</div>
				<div class="form-submit-area">
					<button
						type="submit"
						class=move || format!("submit-button {}", status.with(FormStatus::css_class))
						prop:disabled=move || !can_submit()
					>
						<span>{move || status.with(FormStatus::button_label)}</span>
					</button>
				</div>
				{move || match status.get() {
					FormStatus::Error(message) => {
						Some(view! { <p class="error-message">{message}</p> }.into_any())
					}
					FormStatus::Success => {
						Some(
							view! {
								<p class="success-message">
									"Thanks for reaching out! I'll get back to you soon."
								</p>
							}
								.into_any(),
						)
					}
					_ => None,
				}}
			</form>
		</section>
	}
}
