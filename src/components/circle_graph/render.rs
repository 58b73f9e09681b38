//! Canvas 2d painting of the laid-out graph.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::layout::{CircleLayout, circle_layout};
use super::types::AdjacencyMatrix;

const BACKGROUND: &str = "#1a1a2e";
const NODE_FILL: &str = "#1f77b4";
const EDGE_STROKE: &str = "rgba(100, 180, 255, 0.8)";
const LABEL_FILL: &str = "white";

/// Paint the whole canvas from scratch: background, then every edge, then
/// every participating node on top so discs cover line ends.
pub fn render(matrix: &AdjacencyMatrix, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, width, height);

	let layout = circle_layout(matrix.size(), width, height);
	if layout.nodes.is_empty() {
		return;
	}
	draw_edges(matrix, &layout, ctx);
	draw_nodes(matrix, &layout, ctx);
}

fn draw_edges(matrix: &AdjacencyMatrix, layout: &CircleLayout, ctx: &CanvasRenderingContext2d) {
	let r = layout.node_radius;
	let arrow_size = (r * 0.6).max(4.0);

	ctx.set_stroke_style_str(EDGE_STROKE);
	ctx.set_line_width(1.5);

	for (from, to) in matrix.edges() {
		if from == to {
			draw_self_loop(layout.nodes[from].xy(), r, ctx);
			continue;
		}
		let (x1, y1) = layout.nodes[from].xy();
		let (x2, y2) = layout.nodes[to].xy();
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);

		// shaft stops at the disc edge, leaving room for the arrowhead
		ctx.begin_path();
		ctx.move_to(x1 + ux * r, y1 + uy * r);
		ctx.line_to(x2 - ux * (r + arrow_size), y2 - uy * (r + arrow_size));
		ctx.stroke();

		ctx.set_fill_style_str(EDGE_STROKE);
		let (tip_x, tip_y) = (x2 - ux * r, y2 - uy * r);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
}

/// A self loop degenerates to a small stroked circle hanging off the disc.
fn draw_self_loop((x, y): (f64, f64), node_radius: f64, ctx: &CanvasRenderingContext2d) {
	let loop_r = (node_radius * 0.6).max(3.0);
	ctx.begin_path();
	let _ = ctx.arc(x + node_radius, y - node_radius, loop_r, 0.0, 2.0 * PI);
	ctx.stroke();
}

fn draw_nodes(matrix: &AdjacencyMatrix, layout: &CircleLayout, ctx: &CanvasRenderingContext2d) {
	let r = layout.node_radius;
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_font(&format!("{}px sans-serif", (r * 0.9).clamp(9.0, 16.0)));

	for node in &layout.nodes {
		if !matrix.participates(node.num - 1) {
			continue;
		}
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, r, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(NODE_FILL);
		ctx.fill();

		ctx.set_fill_style_str(LABEL_FILL);
		let _ = ctx.fill_text(&node.num.to_string(), node.x, node.y);
	}
}
