use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::StoredResults;
use crate::components::assessment::AssessmentWizard;
use crate::components::charts::AssessmentResults;

/// Skills assessment page: the wizard, then off to the results.
#[component]
pub fn Assessment() -> impl IntoView {
	let stored = expect_context::<StoredResults>();
	let (done, set_done) = signal(false);

	let on_complete = move |results: AssessmentResults| {
		stored.0.set(Some(results));
		set_done.set(true);
	};

	let navigate = use_navigate();
	Effect::new(move |_| {
		if done.get() {
			navigate("/results", Default::default());
		}
	});

	view! {
		<section class="container py-4">
			<h2>"Skills Assessment"</h2>
			<p class="text-muted">
				"Rate each item from 1 (beginner) to 5 (expert). Your answers feed the recommendations."
			</p>
			<AssessmentWizard on_complete=on_complete />
		</section>
	}
}
