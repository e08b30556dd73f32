use leptos::prelude::*;

/// 404 fallback.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<section class="container py-4">
			<h1>"Page Not Found"</h1>
			<p>"The page you are looking for does not exist."</p>
		</section>
	}
}
