use leptos::prelude::*;

use super::config;
use super::format::{AssessmentResults, ScoreMap, format_results};
use super::js_bridge;

/// Radar chart of technical vs soft skills on a shared axis set.
#[component]
pub fn SkillsRadarChart(
	#[prop(into)] id: String,
	#[prop(into)] results: Signal<AssessmentResults>,
) -> impl IntoView {
	let canvas_id = id.clone();
	Effect::new(move |_| {
		let formatted = format_results(&results.get());
		js_bridge::render_chart(
			&canvas_id,
			&config::radar_chart(&formatted.technical, &formatted.soft),
		);
	});
	let cleanup_id = id.clone();
	on_cleanup(move || js_bridge::destroy_chart(&cleanup_id));

	view! { <canvas id=id class="chart-canvas" /> }
}

/// Horizontal bar chart over one score map.
#[component]
pub fn ScoresBarChart(
	#[prop(into)] id: String,
	#[prop(into)] scores: Signal<ScoreMap>,
	#[prop(into)] title: String,
) -> impl IntoView {
	let canvas_id = id.clone();
	Effect::new(move |_| {
		let scores = scores.get();
		let labels: Vec<String> = scores.iter().map(|(key, _)| key.clone()).collect();
		let data: Vec<f64> = scores.iter().map(|(_, value)| *value).collect();
		js_bridge::render_chart(&canvas_id, &config::bar_chart(&labels, &data, &title));
	});
	let cleanup_id = id.clone();
	on_cleanup(move || js_bridge::destroy_chart(&cleanup_id));

	view! { <canvas id=id class="chart-canvas" /> }
}

/// Half-circle doughnut gauge for the resume score (0-10).
#[component]
pub fn ResumeScoreChart(
	#[prop(into)] id: String,
	#[prop(into)] score: Signal<f64>,
) -> impl IntoView {
	let canvas_id = id.clone();
	Effect::new(move |_| {
		js_bridge::render_chart(&canvas_id, &config::score_chart(score.get()));
	});
	let cleanup_id = id.clone();
	on_cleanup(move || js_bridge::destroy_chart(&cleanup_id));

	view! { <canvas id=id class="chart-canvas" /> }
}

/// Pie chart of interest categories.
#[component]
pub fn InterestsPieChart(
	#[prop(into)] id: String,
	#[prop(into)] interests: Signal<ScoreMap>,
) -> impl IntoView {
	let canvas_id = id.clone();
	Effect::new(move |_| {
		js_bridge::render_chart(&canvas_id, &config::interests_pie_chart(&interests.get()));
	});
	let cleanup_id = id.clone();
	on_cleanup(move || js_bridge::destroy_chart(&cleanup_id));

	view! { <canvas id=id class="chart-canvas" /> }
}
