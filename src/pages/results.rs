use leptos::prelude::*;

use crate::StoredResults;
use crate::components::charts::{
	AssessmentResults, InterestsPieChart, ResumeScoreChart, ScoresBarChart, SkillsRadarChart,
};

/// Placeholder resume score shown until a resume has been analyzed.
const DEMO_RESUME_SCORE: f64 = 7.0;

/// Demo record shown when no assessment has been completed this session.
fn sample_results() -> AssessmentResults {
	AssessmentResults {
		technical_skills: vec![
			("programming".into(), 4.0),
			("data_analysis".into(), 3.0),
			("design".into(), 2.0),
			("writing".into(), 3.0),
			("project_management".into(), 4.0),
		],
		soft_skills: vec![
			("communication".into(), 4.0),
			("teamwork".into(), 5.0),
			("leadership".into(), 3.0),
			("problem_solving".into(), 4.0),
			("adaptability".into(), 4.0),
		],
		interests: vec![
			("interest_technology".into(), 5.0),
			("interest_business".into(), 3.0),
			("interest_arts".into(), 2.0),
			("interest_sciences".into(), 4.0),
			("interest_helping".into(), 3.0),
		],
	}
}

/// Assessment results page: radar, bar, score gauge, and interests pie.
#[component]
pub fn Results() -> impl IntoView {
	let stored = expect_context::<StoredResults>();
	let results = Signal::derive(move || stored.0.get().unwrap_or_else(sample_results));
	let technical = Signal::derive(move || results.get().technical_skills);
	let interests = Signal::derive(move || results.get().interests);
	let resume_score = Signal::derive(|| DEMO_RESUME_SCORE);

	view! {
		<section class="container py-4">
			<h2>"Your Results"</h2>
			<div class="row g-4">
				<div class="col-lg-6 chart-panel">
					<h5>"Skills Overview"</h5>
					<SkillsRadarChart id="skillsRadarChart" results=results />
				</div>
				<div class="col-lg-6 chart-panel">
					<h5>"Technical Skills"</h5>
					<ScoresBarChart
						id="technicalBarChart"
						scores=technical
						title="Technical Skills"
					/>
				</div>
				<div class="col-lg-6 chart-panel">
					<h5>"Resume Score"</h5>
					<ResumeScoreChart id="resumeScoreChart" score=resume_score />
				</div>
				<div class="col-lg-6 chart-panel">
					<h5>"Career Interests"</h5>
					<InterestsPieChart id="interestsPieChart" interests=interests />
				</div>
			</div>
		</section>
	}
}
