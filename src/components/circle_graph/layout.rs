//! Closed-form circular node placement.

use std::f64::consts::PI;

/// One node with its canvas position for the current render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedNode {
	/// 1-based user-facing node number.
	pub num: usize,
	/// Canvas x coordinate of the node center.
	pub x: f64,
	/// Canvas y coordinate of the node center.
	pub y: f64,
}

impl PlacedNode {
	/// Center as an `(x, y)` pair.
	pub fn xy(&self) -> (f64, f64) {
		(self.x, self.y)
	}
}

/// Result of laying `n` nodes out on a circle inside a drawing area.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CircleLayout {
	/// Exactly `n` placed nodes, node 1 first.
	pub nodes: Vec<PlacedNode>,
	/// Circle radius the nodes sit on.
	pub radius: f64,
	/// Visual radius of a single node disc.
	pub node_radius: f64,
}

/// Place `n` nodes evenly on a circle centered in a `width` x `height` area.
///
/// The circle radius is half the smaller dimension reduced by a quarter of
/// it, and each node's disc radius is the circle radius over `n`. Node 1
/// sits at the top of the circle; subsequent nodes advance by `2*pi / n`
/// radians clockwise. `n == 0` yields an empty layout.
pub fn circle_layout(n: usize, width: f64, height: f64) -> CircleLayout {
	if n == 0 {
		return CircleLayout::default();
	}

	let m = width.min(height);
	let radius = m / 2.0 - m / 4.0;
	let node_radius = radius / n as f64;
	let (cx, cy) = (width / 2.0, height / 2.0);

	let step = -2.0 * PI / n as f64;
	let nodes = (0..n)
		.map(|i| {
			let (sin, cos) = (step * i as f64).sin_cos();
			PlacedNode {
				num: i + 1,
				// offset (0, radius) rotated i steps; canvas y grows downward
				x: cx - radius * sin,
				y: cy - radius * cos,
			}
		})
		.collect();

	CircleLayout {
		nodes,
		radius,
		node_radius,
	}
}
