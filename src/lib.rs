//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod pages;

pub use components::charts::AssessmentResults;

// Top-Level pages
use crate::pages::assessment::Assessment;
use crate::pages::network::NetworkAnalysis;
use crate::pages::not_found::NotFound;
use crate::pages::results::Results;

/// Latest completed assessment, shared across pages via context.
#[derive(Clone, Copy)]
pub struct StoredResults(pub RwSignal<Option<AssessmentResults>>);

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the assessment, results, and network pages
/// and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(StoredResults(RwSignal::new(None)));

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Career Advisor" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<nav class="navbar">
				<A href="/">"Assessment"</A>
				<A href="/results">"Results"</A>
				<A href="/network">"Network"</A>
			</nav>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Assessment />
				<Route path=path!("/results") view=Results />
				<Route path=path!("/network") view=NetworkAnalysis />
			</Routes>
		</Router>
	}
}
