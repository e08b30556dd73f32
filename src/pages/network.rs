use leptos::prelude::*;

use crate::components::network::{
	NetworkCanvas, NetworkData, NetworkLink, NetworkNode, NodeGroup,
};

/// Build the career network the way the backend shapes it: the primary path
/// as the central node, required skills and alternative paths linked to it.
fn sample_career_network() -> NetworkData {
	let mut data = NetworkData::default();
	data.nodes.push(NetworkNode {
		id: "primary".into(),
		name: "Data Scientist".into(),
		group: NodeGroup::PrimaryPath,
		size: 20.0,
	});

	let skills = [
		"Python",
		"Machine Learning",
		"Statistics",
		"SQL",
		"Data Visualization",
	];
	for (idx, skill) in skills.iter().enumerate() {
		let id = format!("skill_{idx}");
		data.nodes.push(NetworkNode {
			id: id.clone(),
			name: (*skill).into(),
			group: NodeGroup::Skill,
			size: 10.0,
		});
		data.links.push(NetworkLink {
			source: "primary".into(),
			target: id,
			value: 5.0,
		});
	}

	let alternatives = ["Data Analyst", "ML Engineer", "BI Developer"];
	for (idx, path) in alternatives.iter().enumerate() {
		let id = format!("alt_{idx}");
		data.nodes.push(NetworkNode {
			id: id.clone(),
			name: (*path).into(),
			group: NodeGroup::AlternativePath,
			size: 15.0,
		});
		data.links.push(NetworkLink {
			source: "primary".into(),
			target: id,
			value: 3.0,
		});
	}

	data
}

/// Career network analysis page.
#[component]
pub fn NetworkAnalysis() -> impl IntoView {
	let data = Signal::derive(sample_career_network);

	view! {
		<section class="container py-4">
			<h2>"Career Network Analysis"</h2>
			<p class="text-muted">
				"Drag nodes to reposition. Click a node to highlight its connections, double-click to reset. Scroll to zoom."
			</p>
			<div class="network-container" style="height: 600px;">
				<NetworkCanvas data=data />
			</div>
		</section>
	}
}
