use leptos::prelude::*;

use crate::components::circle_graph::{AdjacencyMatrix, CircleGraphCanvas};
use crate::components::settings::GraphSettingsPanel;

const CANVAS_WIDTH: f64 = 600.0;
const CANVAS_HEIGHT: f64 = 500.0;

/// Seed a sample matrix with roughly one cell in ten set, so the canvas has
/// something to show before the first draw click.
fn sample_matrix(n: usize) -> AdjacencyMatrix {
	let mut matrix = AdjacencyMatrix::new(n);
	for i in 0..n {
		for j in 0..n {
			if (rand_simple(i * n + j) * 10.0) as u32 == 0 {
				matrix.set(i, j);
			}
		}
	}
	matrix
}

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let matrix = RwSignal::new(sample_matrix(10));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="app-layout">
				<GraphSettingsPanel matrix=matrix />
				<CircleGraphCanvas
					matrix=matrix
					width=Some(CANVAS_WIDTH)
					height=Some(CANVAS_HEIGHT)
				/>
			</div>
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sample_matrix_is_deterministic() {
		assert_eq!(sample_matrix(10), sample_matrix(10));
	}

	#[test]
	fn sample_matrix_is_sparse_but_not_empty() {
		let m = sample_matrix(10);
		assert!(m.edge_count() > 0);
		assert!(m.edge_count() < 50);
	}
}
