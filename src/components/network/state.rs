use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::warn;

use super::types::{LayoutMode, NetworkData, NodeGroup};

/// Ring radius used by the circular layout and the initial node seeding.
pub const CIRCLE_RADIUS: f64 = 200.0;
/// Padding added to a node's radius for pointer hit-testing.
pub const HIT_PADDING: f64 = 6.0;

const ALPHA_DECAY: f32 = 0.06;
const ALPHA_MIN: f32 = 0.004;
const DRAG_ALPHA_TARGET: f32 = 0.3;
const LAYOUT_PULL: f64 = 2.5;
const DRAG_MOVE_THRESHOLD: f64 = 3.0;
const RECENTER_DURATION: f64 = 0.75;

/// Per-node payload carried through the simulation.
#[derive(Clone, Debug)]
pub struct NodeMeta {
	pub name: String,
	pub group: NodeGroup,
	pub size: f64,
	/// Insertion index, used by the circular layout's angle assignment.
	pub seq: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct EdgeRef {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	pub value: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Click-to-highlight focus: at most one node's neighborhood at a time.
#[derive(Clone, Debug, Default)]
pub struct HighlightState {
	pub focus: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
}

struct RecenterAnimation {
	from: ViewTransform,
	elapsed: f64,
}

/// Mutable interaction state for one network visualization instance.
///
/// Owns the force simulation handle and everything layered on top of it:
/// view transform, drag/pan state, hover, click-highlight, layout mode and
/// link strength. Position computation stays inside the `force_graph` crate;
/// the per-frame [`NetworkState::tick`] is the sole path that moves anything.
pub struct NetworkState {
	pub graph: ForceGraph<NodeMeta, ()>,
	edges: Vec<EdgeRef>,
	node_order: Vec<DefaultNodeIdx>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: Option<DefaultNodeIdx>,
	pub highlight: HighlightState,
	pub layout: LayoutMode,
	link_strength: f32,
	alpha: f32,
	alpha_target: f32,
	recenter: Option<RecenterAnimation>,
	pub width: f64,
	pub height: f64,
}

/// Target orbit radius for a node group under the radial layout.
pub fn radial_radius(group: NodeGroup) -> f64 {
	match group {
		NodeGroup::PrimaryPath => 0.0,
		NodeGroup::Skill => 150.0,
		NodeGroup::AlternativePath | NodeGroup::Other => 250.0,
	}
}

/// Target angle for node `i` of `n` under the circular layout.
pub fn circle_angle(i: usize, n: usize) -> f64 {
	(i as f64 / n.max(1) as f64) * 2.0 * PI
}

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

impl NetworkState {
	pub fn new(data: &NetworkData, width: f64, height: f64) -> Self {
		let link_strength = 0.5;
		let layout = LayoutMode::Force;
		let mut graph = ForceGraph::new(simulation_parameters(layout, link_strength));
		let mut id_to_idx = HashMap::new();
		let mut node_order = Vec::new();
		let mut edges = Vec::new();

		// Seed nodes on a ring around the origin; the simulation takes it
		// from there. World coordinates are origin-centered, the view
		// transform moves them into the canvas.
		for (i, node) in data.nodes.iter().enumerate() {
			let angle = circle_angle(i, data.nodes.len());
			let idx = graph.add_node(NodeData {
				x: (100.0 * angle.cos()) as f32,
				y: (100.0 * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeMeta {
					name: node.name.clone(),
					group: node.group,
					size: node.size,
					seq: i,
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
			node_order.push(idx);
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push(EdgeRef {
					source: src,
					target: tgt,
					value: link.value,
				});
			} else {
				warn!(
					"dropping link with unresolved endpoint: {} -> {}",
					link.source, link.target
				);
			}
		}

		Self {
			graph,
			edges,
			node_order,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: None,
			highlight: HighlightState::default(),
			layout,
			link_strength,
			alpha: 1.0,
			alpha_target: 0.0,
			recenter: None,
			width,
			height,
		}
	}

	pub fn edges(&self) -> &[EdgeRef] {
		&self.edges
	}

	pub fn link_strength(&self) -> f32 {
		self.link_strength
	}

	pub fn alpha(&self) -> f32 {
		self.alpha
	}

	pub fn alpha_target(&self) -> f32 {
		self.alpha_target
	}

	fn home_transform(&self) -> ViewTransform {
		ViewTransform {
			x: self.width / 2.0,
			y: self.height / 2.0,
			k: 1.0,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// Hit radius is in world-space, scales with zoom like nodes
			if (dx * dx + dy * dy).sqrt() < node.data.user_data.size + HIT_PADDING {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn node_meta(&self, idx: DefaultNodeIdx) -> Option<NodeMeta> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.clone());
			}
		});
		found
	}

	/// Focus a node's one-hop neighborhood. A later call replaces the
	/// previous focus wholesale.
	pub fn highlight_connections(&mut self, idx: DefaultNodeIdx) {
		self.highlight.focus = Some(idx);
		self.highlight.neighbors.clear();
		for edge in &self.edges {
			if edge.source == idx {
				self.highlight.neighbors.insert(edge.target);
			} else if edge.target == idx {
				self.highlight.neighbors.insert(edge.source);
			}
		}
	}

	/// Restore baseline opacity everywhere (double-click reset).
	pub fn reset_highlighting(&mut self) {
		self.highlight = HighlightState::default();
	}

	pub fn has_highlight(&self) -> bool {
		self.highlight.focus.is_some()
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.highlight.focus == Some(idx) || self.highlight.neighbors.contains(&idx)
	}

	pub fn edge_highlighted(&self, edge: &EdgeRef) -> bool {
		match self.highlight.focus {
			Some(focus) => edge.source == focus || edge.target == focus,
			None => false,
		}
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		self.hover = node;
	}

	/// Begin dragging a node: pin it to the pointer and, if the simulation
	/// has cooled, raise the alpha target so the rest of the graph responds.
	pub fn begin_drag(&mut self, idx: DefaultNodeIdx, sx: f64, sy: f64) {
		self.drag.active = true;
		self.drag.node_idx = Some(idx);
		self.drag.moved = false;
		self.drag.start_x = sx;
		self.drag.start_y = sy;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				self.drag.node_start_x = node.x();
				self.drag.node_start_y = node.y();
			}
		});
		if self.alpha_target == 0.0 {
			self.alpha_target = DRAG_ALPHA_TARGET;
			self.alpha = self.alpha.max(DRAG_ALPHA_TARGET);
		}
	}

	pub fn drag_to(&mut self, sx: f64, sy: f64) {
		if !self.drag.active {
			return;
		}
		let Some(idx) = self.drag.node_idx else {
			return;
		};
		let (dx, dy) = (
			(sx - self.drag.start_x) / self.transform.k,
			(sy - self.drag.start_y) / self.transform.k,
		);
		if dx.abs() + dy.abs() > DRAG_MOVE_THRESHOLD {
			self.drag.moved = true;
		}
		let (nx, ny) = (
			self.drag.node_start_x + dx as f32,
			self.drag.node_start_y + dy as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = nx;
				node.data.y = ny;
				node.data.is_anchor = true;
			}
		});
	}

	/// Release the drag pin and let the node rejoin free simulation.
	pub fn end_drag(&mut self) {
		if let Some(idx) = self.drag.node_idx {
			self.graph.visit_nodes_mut(|node| {
				if node.index() == idx {
					node.data.is_anchor = false;
				}
			});
		}
		self.drag = DragState::default();
		self.alpha_target = 0.0;
	}

	/// Switch layout: clear pins, swap the force profile, reheat.
	pub fn set_layout(&mut self, layout: LayoutMode) {
		self.layout = layout;
		self.clear_pins();
		self.rebuild_simulation();
		self.reheat();
	}

	/// Adjust the link spring strength (0..=1), keeping positions.
	pub fn set_link_strength(&mut self, strength: f32) {
		self.link_strength = strength.clamp(0.0, 1.0);
		self.rebuild_simulation();
		self.reheat();
	}

	/// Clear pins, move the node centroid back over the origin, and glide
	/// the view transform home.
	pub fn recenter(&mut self) {
		self.clear_pins();
		let (mut cx, mut cy, mut n) = (0.0f64, 0.0f64, 0usize);
		self.graph.visit_nodes(|node| {
			cx += node.x() as f64;
			cy += node.y() as f64;
			n += 1;
		});
		if n > 0 {
			let (cx, cy) = ((cx / n as f64) as f32, (cy / n as f64) as f32);
			self.graph.visit_nodes_mut(|node| {
				node.data.x -= cx;
				node.data.y -= cy;
			});
		}
		self.recenter = Some(RecenterAnimation {
			from: self.transform,
			elapsed: 0.0,
		});
		self.reheat();
	}

	pub fn reheat(&mut self) {
		self.alpha = 1.0;
	}

	fn clear_pins(&mut self) {
		self.graph.visit_nodes_mut(|node| {
			node.data.is_anchor = false;
		});
	}

	/// Advance one animation frame: cool alpha toward its target, step the
	/// simulation, apply the active layout's positional pull, and progress
	/// any view-transform glide.
	pub fn tick(&mut self, dt: f32) {
		self.alpha += (self.alpha_target - self.alpha) * ALPHA_DECAY;
		if self.alpha > ALPHA_MIN {
			self.graph.update(dt * self.alpha);
			self.apply_layout_pull(dt);
		}

		let home = self.home_transform();
		if let Some(anim) = &mut self.recenter {
			anim.elapsed += dt as f64;
			let t = (anim.elapsed / RECENTER_DURATION).min(1.0);
			let eased = ease_out_cubic(t);
			let from = anim.from;
			self.transform = ViewTransform {
				x: from.x + (home.x - from.x) * eased,
				y: from.y + (home.y - from.y) * eased,
				k: from.k + (home.k - from.k) * eased,
			};
			if t >= 1.0 {
				self.recenter = None;
			}
		}
	}

	fn apply_layout_pull(&mut self, dt: f32) {
		let pull = (LAYOUT_PULL * dt as f64 * self.alpha as f64).min(1.0);
		let n = self.node_order.len();
		match self.layout {
			LayoutMode::Force => {}
			LayoutMode::Radial => {
				self.graph.visit_nodes_mut(|node| {
					if node.data.is_anchor {
						return;
					}
					let (x, y) = (node.data.x as f64, node.data.y as f64);
					let r = (x * x + y * y).sqrt();
					let target = radial_radius(node.data.user_data.group);
					// Fall back to the node's seeded angle at the origin,
					// where the ray direction is undefined.
					let angle = if r > 1e-3 {
						y.atan2(x)
					} else {
						circle_angle(node.data.user_data.seq, n)
					};
					let (tx, ty) = (target * angle.cos(), target * angle.sin());
					node.data.x += ((tx - x) * pull) as f32;
					node.data.y += ((ty - y) * pull) as f32;
				});
			}
			LayoutMode::Circle => {
				self.graph.visit_nodes_mut(|node| {
					if node.data.is_anchor {
						return;
					}
					let angle = circle_angle(node.data.user_data.seq, n);
					let (tx, ty) = (
						CIRCLE_RADIUS * angle.cos(),
						CIRCLE_RADIUS * angle.sin(),
					);
					node.data.x += ((tx - node.data.x as f64) * pull) as f32;
					node.data.y += ((ty - node.data.y as f64) * pull) as f32;
				});
			}
		}
	}

	/// Rebuild the `force_graph` handle with the current layout's parameters,
	/// preserving node positions and edge wiring. The crate exposes its
	/// parameters only at construction, so profile changes recreate it.
	fn rebuild_simulation(&mut self) {
		let mut snapshots: Vec<(DefaultNodeIdx, NodeData<NodeMeta>)> = Vec::new();
		self.graph.visit_nodes(|node| {
			snapshots.push((
				node.index(),
				NodeData {
					x: node.x(),
					y: node.y(),
					mass: node.data.mass,
					is_anchor: node.data.is_anchor,
					user_data: node.data.user_data.clone(),
				},
			));
		});
		snapshots.sort_by_key(|(_, data)| data.user_data.seq);

		let mut graph = ForceGraph::new(simulation_parameters(self.layout, self.link_strength));
		let mut remap = HashMap::new();
		let mut node_order = Vec::new();
		for (old_idx, data) in snapshots {
			let idx = graph.add_node(data);
			remap.insert(old_idx, idx);
			node_order.push(idx);
		}

		let mut edges = Vec::with_capacity(self.edges.len());
		for edge in &self.edges {
			if let (Some(&src), Some(&tgt)) = (remap.get(&edge.source), remap.get(&edge.target)) {
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push(EdgeRef {
					source: src,
					target: tgt,
					value: edge.value,
				});
			}
		}

		// Remap interaction state that holds node indices
		self.highlight.focus = self.highlight.focus.and_then(|idx| remap.get(&idx).copied());
		self.highlight.neighbors = self
			.highlight
			.neighbors
			.iter()
			.filter_map(|idx| remap.get(idx).copied())
			.collect();
		self.hover = self.hover.and_then(|idx| remap.get(&idx).copied());
		self.drag = DragState::default();

		self.graph = graph;
		self.edges = edges;
		self.node_order = node_order;
	}

}

/// Simulation profile per layout, scaled by the link-strength control.
///
/// Mirrors the source's per-layout force tables: the force-directed layout
/// keeps the strongest spring and charge, radial and circular run weaker
/// ones so their positional pulls dominate.
fn simulation_parameters(layout: LayoutMode, link_strength: f32) -> SimulationParameters {
	let (spring_scale, charge) = match layout {
		LayoutMode::Force => (1.0, 150.0),
		LayoutMode::Radial => (0.6, 50.0),
		LayoutMode::Circle => (0.4, 25.0),
	};
	SimulationParameters {
		force_charge: charge,
		force_spring: 0.1 * link_strength * spring_scale,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	}
}

#[cfg(test)]
mod tests {
	use std::f64::consts::PI;

	use super::super::types::{NetworkLink, NetworkNode};
	use super::*;

	fn node(id: &str, group: NodeGroup) -> NetworkNode {
		NetworkNode {
			id: id.into(),
			name: id.to_uppercase(),
			group,
			size: 10.0,
		}
	}

	fn link(source: &str, target: &str) -> NetworkLink {
		NetworkLink {
			source: source.into(),
			target: target.into(),
			value: 3.0,
		}
	}

	fn sample_state() -> NetworkState {
		let data = NetworkData {
			nodes: vec![
				node("primary", NodeGroup::PrimaryPath),
				node("skill_0", NodeGroup::Skill),
				node("skill_1", NodeGroup::Skill),
				node("alt_0", NodeGroup::AlternativePath),
			],
			links: vec![
				link("primary", "skill_0"),
				link("primary", "skill_1"),
				link("primary", "alt_0"),
				link("skill_0", "skill_1"),
			],
		};
		NetworkState::new(&data, 800.0, 600.0)
	}

	fn idx_of(state: &NetworkState, name: &str) -> force_graph::DefaultNodeIdx {
		let mut found = None;
		state.graph.visit_nodes(|n| {
			if n.data.user_data.name == name.to_uppercase() {
				found = Some(n.index());
			}
		});
		found.unwrap()
	}

	#[test]
	fn dangling_links_are_dropped() {
		let data = NetworkData {
			nodes: vec![node("a", NodeGroup::Skill)],
			links: vec![link("a", "missing"), link("ghost", "a")],
		};
		let state = NetworkState::new(&data, 400.0, 300.0);
		assert!(state.edges().is_empty());
	}

	#[test]
	fn highlight_covers_one_hop_neighborhood() {
		let mut state = sample_state();
		let primary = idx_of(&state, "primary");
		let alt = idx_of(&state, "alt_0");
		state.highlight_connections(primary);
		assert!(state.is_highlighted(primary));
		assert!(state.is_highlighted(alt));
		assert_eq!(state.highlight.neighbors.len(), 3);
	}

	#[test]
	fn second_click_replaces_highlight() {
		let mut state = sample_state();
		let primary = idx_of(&state, "primary");
		let skill = idx_of(&state, "skill_0");
		let alt = idx_of(&state, "alt_0");

		state.highlight_connections(primary);
		assert!(state.is_highlighted(alt));

		state.highlight_connections(skill);
		assert_eq!(state.highlight.focus, Some(skill));
		// alt_0 is not adjacent to skill_0, so it must drop out
		assert!(!state.is_highlighted(alt));
		assert!(state.is_highlighted(primary));
	}

	#[test]
	fn double_click_reset_restores_baseline() {
		let mut state = sample_state();
		let primary = idx_of(&state, "primary");
		state.highlight_connections(primary);
		state.reset_highlighting();
		assert!(!state.has_highlight());
		assert!(!state.is_highlighted(primary));
	}

	#[test]
	fn drag_start_reheats_only_a_cool_simulation() {
		let mut state = sample_state();
		let skill = idx_of(&state, "skill_0");
		assert_eq!(state.alpha_target(), 0.0);
		state.begin_drag(skill, 100.0, 100.0);
		assert_eq!(state.alpha_target(), 0.3);

		// Already-active target is left alone
		state.begin_drag(skill, 100.0, 100.0);
		assert_eq!(state.alpha_target(), 0.3);
	}

	#[test]
	fn drag_pins_node_and_release_frees_it() {
		let mut state = sample_state();
		let skill = idx_of(&state, "skill_0");
		state.begin_drag(skill, 100.0, 100.0);
		state.drag_to(150.0, 120.0);

		let mut anchored = false;
		state.graph.visit_nodes(|n| {
			if n.index() == skill {
				anchored = n.data.is_anchor;
			}
		});
		assert!(anchored);
		assert!(state.drag.moved);

		state.end_drag();
		assert_eq!(state.alpha_target(), 0.0);
		let mut anchored = false;
		state.graph.visit_nodes(|n| {
			if n.index() == skill {
				anchored = n.data.is_anchor;
			}
		});
		assert!(!anchored);
	}

	#[test]
	fn circle_angles_are_evenly_distributed() {
		let n = 8;
		for i in 0..n {
			let angle = circle_angle(i, n);
			assert!((angle - (i as f64) * PI / 4.0).abs() < 1e-12);
		}
		// Degenerate dataset must not divide by zero
		assert_eq!(circle_angle(0, 0), 0.0);
	}

	#[test]
	fn radial_radius_by_group() {
		assert_eq!(radial_radius(NodeGroup::PrimaryPath), 0.0);
		assert_eq!(radial_radius(NodeGroup::Skill), 150.0);
		assert_eq!(radial_radius(NodeGroup::AlternativePath), 250.0);
		assert_eq!(radial_radius(NodeGroup::Other), 250.0);
	}

	#[test]
	fn set_layout_reheats_and_clears_pins() {
		let mut state = sample_state();
		let skill = idx_of(&state, "skill_0");
		state.begin_drag(skill, 100.0, 100.0);
		state.drag_to(160.0, 130.0);
		state.end_drag();

		// Cool the simulation down first
		for _ in 0..200 {
			state.tick(0.016);
		}
		assert!(state.alpha() < 0.05);

		state.set_layout(LayoutMode::Circle);
		assert_eq!(state.layout, LayoutMode::Circle);
		assert_eq!(state.alpha(), 1.0);
		let mut any_anchor = false;
		state.graph.visit_nodes(|n| any_anchor |= n.data.is_anchor);
		assert!(!any_anchor);
	}

	#[test]
	fn circle_layout_pulls_nodes_toward_ring() {
		let mut state = sample_state();
		state.set_layout(LayoutMode::Circle);

		let ring_error = |state: &NetworkState| {
			let mut total = 0.0f64;
			state.graph.visit_nodes(|n| {
				let r = ((n.x() as f64).powi(2) + (n.y() as f64).powi(2)).sqrt();
				total += (r - CIRCLE_RADIUS).abs();
			});
			total
		};

		let before = ring_error(&state);
		for _ in 0..120 {
			state.tick(0.016);
		}
		assert!(ring_error(&state) < before);
	}

	#[test]
	fn rebuild_preserves_edges_and_highlight() {
		let mut state = sample_state();
		let primary = idx_of(&state, "primary");
		state.highlight_connections(primary);
		let edges_before = state.edges().len();

		state.set_link_strength(0.9);
		assert_eq!(state.link_strength(), 0.9);
		assert_eq!(state.edges().len(), edges_before);
		assert!(state.has_highlight());
		assert_eq!(state.highlight.neighbors.len(), 3);
	}

	#[test]
	fn recenter_moves_centroid_to_origin() {
		let mut state = sample_state();
		for _ in 0..60 {
			state.tick(0.016);
		}
		state.recenter();

		let (mut cx, mut cy, mut n) = (0.0f64, 0.0f64, 0usize);
		state.graph.visit_nodes(|node| {
			cx += node.x() as f64;
			cy += node.y() as f64;
			n += 1;
		});
		assert!((cx / n as f64).abs() < 1e-3);
		assert!((cy / n as f64).abs() < 1e-3);
	}

	#[test]
	fn recenter_glides_transform_home() {
		let mut state = sample_state();
		state.transform = ViewTransform {
			x: 30.0,
			y: -40.0,
			k: 2.5,
		};
		state.recenter();
		for _ in 0..80 {
			state.tick(0.016);
		}
		assert!((state.transform.x - 400.0).abs() < 1e-6);
		assert!((state.transform.y - 300.0).abs() < 1e-6);
		assert!((state.transform.k - 1.0).abs() < 1e-6);
	}
}
