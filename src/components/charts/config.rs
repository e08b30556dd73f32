//! Declarative chart configurations.
//!
//! Each builder returns the JSON the charting library consumes directly, so
//! the Rust side stays pure data-reshaping and the library remains a black
//! box behind the JS bridge.

use serde_json::{Value, json};

use super::format::{ChartSeries, ScoreMap, interest_label, title_case};

const SUCCESS_COLOR: &str = "rgba(25, 135, 84, 0.8)";
const WARNING_COLOR: &str = "rgba(255, 193, 7, 0.8)";
const DANGER_COLOR: &str = "rgba(220, 53, 69, 0.8)";

/// Interest-category palette, assigned by slice position.
const PIE_COLORS: [&str; 5] = [
	"rgba(13, 110, 253, 0.7)",
	"rgba(111, 66, 193, 0.7)",
	"rgba(32, 201, 151, 0.7)",
	"rgba(253, 126, 20, 0.7)",
	"rgba(13, 202, 240, 0.7)",
];

/// Resume-score slice color by threshold.
pub fn score_color(score: f64) -> &'static str {
	if score >= 8.0 {
		SUCCESS_COLOR
	} else if score >= 5.0 {
		WARNING_COLOR
	} else {
		DANGER_COLOR
	}
}

/// Radar chart over a merged technical+soft axis set. Each dataset is
/// zero-padded over the other's label span so the two series occupy
/// disjoint regions of the shared 0-5 radial scale.
pub fn radar_chart(technical: &ChartSeries, soft: &ChartSeries) -> Value {
	let labels: Vec<&str> = technical
		.labels
		.iter()
		.chain(soft.labels.iter())
		.map(String::as_str)
		.collect();
	let technical_data: Vec<f64> = technical
		.data
		.iter()
		.copied()
		.chain(std::iter::repeat_n(0.0, soft.labels.len()))
		.collect();
	let soft_data: Vec<f64> = std::iter::repeat_n(0.0, technical.labels.len())
		.chain(soft.data.iter().copied())
		.collect();

	json!({
		"type": "radar",
		"data": {
			"labels": labels,
			"datasets": [
				{
					"label": "Technical Skills",
					"data": technical_data,
					"backgroundColor": "rgba(13, 110, 253, 0.2)",
					"borderColor": "rgba(13, 110, 253, 1)",
					"pointBackgroundColor": "rgba(13, 110, 253, 1)",
					"pointBorderColor": "#fff",
				},
				{
					"label": "Soft Skills",
					"data": soft_data,
					"backgroundColor": "rgba(111, 66, 193, 0.2)",
					"borderColor": "rgba(111, 66, 193, 1)",
					"pointBackgroundColor": "rgba(111, 66, 193, 1)",
					"pointBorderColor": "#fff",
				},
			],
		},
		"options": {
			"scales": {
				"r": { "min": 0, "max": 5, "beginAtZero": true },
			},
			"plugins": {
				"legend": { "position": "bottom" },
			},
			"maintainAspectRatio": false,
		},
	})
}

/// Horizontal bar chart, one series, labels title-cased, x scale 0-5.
pub fn bar_chart(labels: &[String], data: &[f64], title: &str) -> Value {
	let labels: Vec<String> = labels.iter().map(|label| title_case(label)).collect();
	json!({
		"type": "bar",
		"data": {
			"labels": labels,
			"datasets": [{
				"label": title,
				"data": data,
				"backgroundColor": "rgba(13, 110, 253, 0.7)",
				"borderColor": "rgba(13, 110, 253, 1)",
				"borderWidth": 1,
			}],
		},
		"options": {
			"indexAxis": "y",
			"scales": {
				"x": { "beginAtZero": true, "max": 5 },
			},
			"plugins": {
				"legend": { "display": false },
			},
			"maintainAspectRatio": false,
		},
	})
}

/// Half-circle doughnut for the resume score (0-10): a colored score slice
/// and a muted remainder.
pub fn score_chart(score: f64) -> Value {
	json!({
		"type": "doughnut",
		"data": {
			"labels": ["Score", "Remaining"],
			"datasets": [{
				"data": [score, 10.0 - score],
				"backgroundColor": [score_color(score), "rgba(255, 255, 255, 0.1)"],
				"borderWidth": 0,
			}],
		},
		"options": {
			"cutout": "75%",
			"rotation": -90,
			"circumference": 180,
			"plugins": {
				"legend": { "display": false },
				"tooltip": { "enabled": false },
			},
			"maintainAspectRatio": true,
			"responsive": true,
		},
	})
}

/// Pie chart of interest categories. The palette is assigned by position;
/// the caller keeps the category count within the palette.
pub fn interests_pie_chart(interests: &ScoreMap) -> Value {
	let labels: Vec<String> = interests
		.iter()
		.map(|(key, _)| interest_label(key))
		.collect();
	let data: Vec<f64> = interests.iter().map(|(_, value)| *value).collect();
	json!({
		"type": "pie",
		"data": {
			"labels": labels,
			"datasets": [{
				"data": data,
				"backgroundColor": PIE_COLORS,
				"borderColor": "rgba(33, 37, 41, 0.2)",
				"borderWidth": 1,
			}],
		},
		"options": {
			"plugins": {
				"legend": { "position": "bottom" },
			},
			"maintainAspectRatio": false,
		},
	})
}

#[cfg(test)]
mod tests {
	use super::super::format::ChartSeries;
	use super::*;

	fn series(labels: &[&str], data: &[f64]) -> ChartSeries {
		ChartSeries {
			labels: labels.iter().map(|s| s.to_string()).collect(),
			data: data.to_vec(),
		}
	}

	#[test]
	fn score_color_thresholds() {
		assert_eq!(score_color(9.0), SUCCESS_COLOR);
		assert_eq!(score_color(8.0), SUCCESS_COLOR);
		assert_eq!(score_color(6.0), WARNING_COLOR);
		assert_eq!(score_color(5.0), WARNING_COLOR);
		assert_eq!(score_color(2.0), DANGER_COLOR);
	}

	#[test]
	fn radar_zero_pads_disjoint_regions() {
		let technical = series(&["Programming", "Design"], &[4.0, 2.0]);
		let soft = series(&["Communication"], &[3.0]);
		let config = radar_chart(&technical, &soft);

		let labels = config["data"]["labels"].as_array().unwrap();
		assert_eq!(labels.len(), 3);
		assert_eq!(labels[2], "Communication");

		let tech_data = config["data"]["datasets"][0]["data"].as_array().unwrap();
		let soft_data = config["data"]["datasets"][1]["data"].as_array().unwrap();
		assert_eq!(tech_data.len(), 3);
		assert_eq!(tech_data[2], 0.0);
		assert_eq!(soft_data.len(), 3);
		assert_eq!(soft_data[0], 0.0);
		assert_eq!(soft_data[1], 0.0);
		assert_eq!(soft_data[2], 3.0);
	}

	#[test]
	fn bar_chart_title_cases_labels() {
		let config = bar_chart(
			&["project_management".into(), "writing".into()],
			&[3.0, 4.0],
			"Technical Skills",
		);
		let labels = config["data"]["labels"].as_array().unwrap();
		assert_eq!(labels[0], "Project Management");
		assert_eq!(labels[1], "Writing");
		assert_eq!(config["options"]["indexAxis"], "y");
		assert_eq!(config["options"]["scales"]["x"]["max"], 5);
	}

	#[test]
	fn score_chart_two_slices_and_cutout() {
		let config = score_chart(7.0);
		let data = config["data"]["datasets"][0]["data"].as_array().unwrap();
		assert_eq!(data[0], 7.0);
		assert_eq!(data[1], 3.0);
		assert_eq!(config["options"]["cutout"], "75%");
		assert_eq!(config["options"]["rotation"], -90);
		assert_eq!(config["options"]["circumference"], 180);
	}

	#[test]
	fn interests_pie_uses_positional_palette() {
		let interests = vec![
			("interest_technology".into(), 5.0),
			("interest_arts".into(), 2.0),
		];
		let config = interests_pie_chart(&interests);
		let labels = config["data"]["labels"].as_array().unwrap();
		assert_eq!(labels[0], "Technology");
		assert_eq!(labels[1], "Arts");
		let colors = config["data"]["datasets"][0]["backgroundColor"]
			.as_array()
			.unwrap();
		assert_eq!(colors.len(), 5);
	}
}
