use serde::{Deserialize, Serialize};

/// Node category within the career network.
///
/// Serialized as the numeric group codes used by the backend payload
/// (1 = primary path, 2 = skill, 3 = alternative path, anything else = other).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NodeGroup {
	PrimaryPath,
	Skill,
	AlternativePath,
	#[default]
	Other,
}

impl NodeGroup {
	pub fn from_code(code: u32) -> Self {
		match code {
			1 => Self::PrimaryPath,
			2 => Self::Skill,
			3 => Self::AlternativePath,
			_ => Self::Other,
		}
	}

	pub fn code(self) -> u32 {
		match self {
			Self::PrimaryPath => 1,
			Self::Skill => 2,
			Self::AlternativePath => 3,
			Self::Other => 0,
		}
	}

	/// Fill color for nodes of this group.
	pub fn color(self) -> &'static str {
		match self {
			Self::PrimaryPath => "#0d6efd",
			Self::Skill => "#6c757d",
			Self::AlternativePath => "#6f42c1",
			Self::Other => "#20c997",
		}
	}

	/// Hover-panel description, if the group has one.
	pub fn description(self) -> Option<&'static str> {
		match self {
			Self::PrimaryPath => Some("Primary Career Path"),
			Self::Skill => Some("Required Skill"),
			Self::AlternativePath => Some("Alternative Career Path"),
			Self::Other => None,
		}
	}
}

impl Serialize for NodeGroup {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_u32(self.code())
	}
}

impl<'de> Deserialize<'de> for NodeGroup {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Ok(Self::from_code(u32::deserialize(deserializer)?))
	}
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NetworkNode {
	pub id: String,
	pub name: String,
	pub group: NodeGroup,
	/// Rendered circle radius.
	pub size: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NetworkLink {
	pub source: String,
	pub target: String,
	/// Rendered stroke width.
	pub value: f64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NetworkData {
	pub nodes: Vec<NetworkNode>,
	pub links: Vec<NetworkLink>,
}

/// Layout applied to the network. Transitions happen only through explicit
/// `set_layout` calls on the simulation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LayoutMode {
	#[default]
	Force,
	Radial,
	Circle,
}

impl LayoutMode {
	pub fn label(self) -> &'static str {
		match self {
			Self::Force => "Force-directed",
			Self::Radial => "Radial",
			Self::Circle => "Circular",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn group_codes_round_trip() {
		for group in [
			NodeGroup::PrimaryPath,
			NodeGroup::Skill,
			NodeGroup::AlternativePath,
		] {
			assert_eq!(NodeGroup::from_code(group.code()), group);
		}
		assert_eq!(NodeGroup::from_code(7), NodeGroup::Other);
	}

	#[test]
	fn every_group_has_a_color() {
		assert_eq!(NodeGroup::PrimaryPath.color(), "#0d6efd");
		assert_eq!(NodeGroup::Skill.color(), "#6c757d");
		assert_eq!(NodeGroup::AlternativePath.color(), "#6f42c1");
		assert_eq!(NodeGroup::Other.color(), "#20c997");
	}

	#[test]
	fn other_group_has_no_description() {
		assert!(NodeGroup::Other.description().is_none());
		assert_eq!(
			NodeGroup::Skill.description(),
			Some("Required Skill")
		);
	}

	#[test]
	fn network_data_deserializes_backend_payload() {
		let json = r#"{
			"nodes": [
				{"id": "primary", "name": "Data Scientist", "group": 1, "size": 20},
				{"id": "skill_0", "name": "Python", "group": 2, "size": 10}
			],
			"links": [{"source": "primary", "target": "skill_0", "value": 5}]
		}"#;
		let data: NetworkData = serde_json::from_str(json).unwrap();
		assert_eq!(data.nodes.len(), 2);
		assert_eq!(data.nodes[0].group, NodeGroup::PrimaryPath);
		assert_eq!(data.links[0].value, 5.0);
	}
}
