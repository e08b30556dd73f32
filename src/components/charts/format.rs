use serde::{Deserialize, Serialize};

/// Ordered category-key/score pairs. Order is preserved so labels and data
/// stay aligned when handed to a chart dataset.
pub type ScoreMap = Vec<(String, f64)>;

/// Stored assessment results, scores on a 0-5 scale.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AssessmentResults {
	pub technical_skills: ScoreMap,
	pub soft_skills: ScoreMap,
	pub interests: ScoreMap,
}

/// One chart-ready label/value series.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
	pub labels: Vec<String>,
	pub data: Vec<f64>,
}

#[derive(Clone, Debug)]
pub struct FormattedResults {
	pub technical: ChartSeries,
	pub soft: ChartSeries,
	pub interests: ChartSeries,
}

fn capitalize(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}

/// Technical-skill label: the first underscore becomes a space, then the
/// first character is uppercased. Only the first underscore is replaced,
/// matching the behavior the rest of the app was built around.
pub fn technical_label(key: &str) -> String {
	capitalize(&key.replacen('_', " ", 1))
}

/// Soft-skill label: the raw key with its first character uppercased.
pub fn soft_label(key: &str) -> String {
	capitalize(key)
}

/// Interest label: the `interest_` prefix stripped, then uppercased.
pub fn interest_label(key: &str) -> String {
	capitalize(key.strip_prefix("interest_").unwrap_or(key))
}

/// Title-case a key for bar-chart axes: every `_`-separated word capitalized.
pub fn title_case(key: &str) -> String {
	key.split('_')
		.map(capitalize)
		.collect::<Vec<_>>()
		.join(" ")
}

fn series(map: &ScoreMap, label: impl Fn(&str) -> String) -> ChartSeries {
	ChartSeries {
		labels: map.iter().map(|(key, _)| label(key)).collect(),
		data: map.iter().map(|(_, value)| *value).collect(),
	}
}

/// Reshape a results record into the three label/value series the charts
/// consume.
pub fn format_results(results: &AssessmentResults) -> FormattedResults {
	FormattedResults {
		technical: series(&results.technical_skills, technical_label),
		soft: series(&results.soft_skills, soft_label),
		interests: series(&results.interests, interest_label),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn technical_label_replaces_first_underscore_only() {
		assert_eq!(technical_label("problem_solving"), "Problem solving");
		assert_eq!(technical_label("data_analysis_skills"), "Data analysis_skills");
		assert_eq!(technical_label("design"), "Design");
	}

	#[test]
	fn soft_label_capitalizes_raw_key() {
		assert_eq!(soft_label("communication"), "Communication");
		assert_eq!(soft_label("problem_solving"), "Problem_solving");
	}

	#[test]
	fn interest_label_strips_prefix() {
		assert_eq!(interest_label("interest_coding"), "Coding");
		assert_eq!(interest_label("interest_technology"), "Technology");
		assert_eq!(interest_label("arts"), "Arts");
	}

	#[test]
	fn title_case_handles_every_word() {
		assert_eq!(title_case("project_management"), "Project Management");
		assert_eq!(title_case("writing"), "Writing");
	}

	#[test]
	fn format_results_keeps_order_and_values() {
		let results = AssessmentResults {
			technical_skills: vec![("problem_solving".into(), 4.0)],
			soft_skills: vec![("communication".into(), 3.0)],
			interests: vec![("interest_coding".into(), 5.0)],
		};
		let formatted = format_results(&results);
		assert_eq!(formatted.technical.labels, vec!["Problem solving"]);
		assert_eq!(formatted.technical.data, vec![4.0]);
		assert_eq!(formatted.soft.labels, vec!["Communication"]);
		assert_eq!(formatted.soft.data, vec![3.0]);
		assert_eq!(formatted.interests.labels, vec!["Coding"]);
		assert_eq!(formatted.interests.data, vec![5.0]);
	}
}
