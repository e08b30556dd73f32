use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::DefaultNodeIdx;
use web_sys::CanvasRenderingContext2d;

use super::state::NetworkState;

const BASE_LINK_STROKE: &str = "rgba(255, 255, 255, 0.2)";
const HIGHLIGHT_LINK_STROKE: &str = "rgba(255, 255, 255, 0.6)";
const LABEL_FILL: &str = "rgba(255, 255, 255, 0.7)";

/// Dim levels applied while a click-highlight is active.
const DIMMED_NODE_ALPHA: f64 = 0.3;
const DIMMED_LINK_ALPHA: f64 = 0.1;

/// Repaint the whole scene from current simulation positions. Runs once per
/// animation frame; there is no other redraw path.
pub fn render(state: &NetworkState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#1a1a2e");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	let positions = node_positions(state);
	draw_links(state, ctx, &positions);
	draw_nodes(state, ctx);

	ctx.restore();
}

fn node_positions(state: &NetworkState) -> HashMap<DefaultNodeIdx, (f64, f64)> {
	let mut positions = HashMap::new();
	state.graph.visit_nodes(|node| {
		positions.insert(node.index(), (node.x() as f64, node.y() as f64));
	});
	positions
}

fn draw_links(
	state: &NetworkState,
	ctx: &CanvasRenderingContext2d,
	positions: &HashMap<DefaultNodeIdx, (f64, f64)>,
) {
	let has_highlight = state.has_highlight();
	for edge in state.edges() {
		let (Some(&(x1, y1)), Some(&(x2, y2))) =
			(positions.get(&edge.source), positions.get(&edge.target))
		else {
			continue;
		};

		let (alpha, stroke) = if !has_highlight {
			(1.0, BASE_LINK_STROKE)
		} else if state.edge_highlighted(edge) {
			(1.0, HIGHLIGHT_LINK_STROKE)
		} else {
			(DIMMED_LINK_ALPHA, BASE_LINK_STROKE)
		};

		ctx.set_global_alpha(alpha);
		ctx.set_stroke_style_str(stroke);
		ctx.set_line_width(edge.value);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &NetworkState, ctx: &CanvasRenderingContext2d) {
	let has_highlight = state.has_highlight();
	let k = state.transform.k;

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let (x, y) = (node.x() as f64, node.y() as f64);
		let meta = &node.data.user_data;
		let alpha = if has_highlight && !state.is_highlighted(idx) {
			DIMMED_NODE_ALPHA
		} else {
			1.0
		};

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, meta.size, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(meta.group.color());
		ctx.fill();

		if state.highlight.focus == Some(idx) {
			ctx.begin_path();
			let _ = ctx.arc(x, y, meta.size + 2.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}

		ctx.set_fill_style_str(LABEL_FILL);
		ctx.set_font("12px sans-serif");
		let _ = ctx.fill_text(&meta.name, x + 15.0, y + 4.0);
		ctx.set_global_alpha(1.0);
	});
}
