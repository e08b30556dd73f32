use leptos::prelude::*;

use super::wizard::{SECTIONS, SubmitOutcome, WizardState};
use crate::components::charts::AssessmentResults;

/// Multi-step skills assessment form: one section at a time, forward
/// navigation gated by validation, submit intercepted until the last
/// section completes.
#[component]
pub fn AssessmentWizard(
	#[prop(into)] on_complete: Callback<AssessmentResults>,
) -> impl IntoView {
	let wizard = RwSignal::new(WizardState::new());
	let form_ref = NodeRef::<leptos::html::Form>::new();

	let scroll_to_form = move || {
		if let Some(form) = form_ref.get() {
			form.scroll_into_view();
		}
	};

	let on_submit = move |ev: leptos::ev::SubmitEvent| {
		// The CSR app never posts; completion flows through the callback.
		ev.prevent_default();
		let mut outcome = SubmitOutcome::Blocked;
		wizard.update(|w| outcome = w.handle_submit());
		match outcome {
			SubmitOutcome::Blocked => {}
			SubmitOutcome::Advanced => scroll_to_form(),
			SubmitOutcome::Completed => {
				on_complete.run(wizard.with(|w| w.results()));
			}
		}
	};

	let sections_view = SECTIONS
		.iter()
		.enumerate()
		.map(|(s_idx, section)| {
			let items_view = section
				.items
				.iter()
				.enumerate()
				.map(|(g_idx, item)| {
					let ratings_view = (1..=5u8)
						.map(|rating| {
							view! {
								<label class="rating-option">
									<input
										type="radio"
										name=item.key
										prop:checked=move || {
											wizard.with(|w| w.selection(s_idx, g_idx) == Some(rating))
										}
										on:change=move |_| {
											wizard.update(|w| w.select(s_idx, g_idx, rating))
										}
									/>
									{rating.to_string()}
								</label>
							}
						})
						.collect_view();

					view! {
						<div class="mb-3">
							<label class="form-label">{item.label}</label>
							<div
								class="skill-rating"
								class=(
									"is-invalid",
									move || wizard.with(|w| w.group_invalid(s_idx, g_idx)),
								)
							>
								{ratings_view}
							</div>
							<Show when=move || wizard.with(|w| w.group_invalid(s_idx, g_idx))>
								<div class="invalid-feedback">
									"Please select a rating for this skill"
								</div>
							</Show>
						</div>
					}
				})
				.collect_view();

			view! {
				<div
					id=section.id
					class="assessment-section"
					class=("d-none", move || wizard.with(|w| w.index() != s_idx))
				>
					<h4>{section.title}</h4>
					{items_view}
				</div>
			}
		})
		.collect_view();

	view! {
		<form id="skillsAssessmentForm" node_ref=form_ref on:submit=on_submit>
			<div class="progress mb-4">
				<div
					id="assessmentProgress"
					class="progress-bar"
					role="progressbar"
					style:width=move || format!("{}%", wizard.with(|w| w.progress()))
					aria-valuenow=move || wizard.with(|w| w.progress().to_string())
					aria-valuemin="0"
					aria-valuemax="100"
				/>
			</div>

			{sections_view}

			<div class="d-flex justify-content-between mt-4">
				<button
					type="button"
					class="btn btn-outline-secondary prev-section"
					disabled=move || wizard.with(|w| w.is_first())
					on:click=move |_| {
						if wizard.try_update(|w| w.retreat()).unwrap_or(false) {
							scroll_to_form();
						}
					}
				>
					"Previous"
				</button>
				<Show
					when=move || wizard.with(|w| !w.is_last())
					fallback=|| {
						view! {
							<button type="submit" class="btn btn-primary">
								"Get Recommendations"
							</button>
						}
					}
				>
					<button
						type="button"
						class="btn btn-primary next-section"
						on:click=move |_| {
							if wizard.try_update(|w| w.advance()).unwrap_or(false) {
								scroll_to_form();
							}
						}
					>
						"Next"
					</button>
				</Show>
			</div>
		</form>
	}
}
