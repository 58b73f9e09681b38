use leptos::prelude::*;
use log::{info, warn};

use super::parse::parse_fields;
use crate::components::circle_graph::AdjacencyMatrix;

/// Panel of per-node adjacency fields with add / remove / draw actions.
///
/// Each field holds a whitespace-separated list of 1-based neighbor indices;
/// an empty field means "connect to the next node". Drawing parses every
/// field into a fresh matrix and publishes it through `matrix`; a bad token
/// shows up as an error line instead of a redraw.
#[component]
pub fn GraphSettingsPanel(matrix: RwSignal<AdjacencyMatrix>) -> impl IntoView {
	let fields: RwSignal<Vec<RwSignal<String>>> = RwSignal::new(Vec::new());
	let error: RwSignal<Option<String>> = RwSignal::new(None);

	let add_field = move |_| {
		fields.update(|f| f.push(RwSignal::new(String::new())));
	};
	let remove_field = move |_| {
		fields.update(|f| {
			f.pop();
		});
	};
	let draw = move |_| {
		let raw: Vec<String> = fields.with(|f| f.iter().map(|s| s.get()).collect());
		match parse_fields(&raw) {
			Ok(m) => {
				info!("parsed {} node slots into {} edges", m.size(), m.edge_count());
				error.set(None);
				matrix.set(m);
			}
			Err(e) => {
				warn!("draw rejected: {e}");
				error.set(Some(e.to_string()));
			}
		}
	};

	view! {
		<div class="settings-panel">
			<h1 class="settings-title">"DRAW A GRAPH"</h1>
			<div class="settings-actions">
				<button on:click=add_field>"add"</button>
				<button on:click=remove_field>"remove"</button>
				<button on:click=draw>"draw"</button>
			</div>
			{move || {
				error
					.get()
					.map(|msg| view! { <p class="parse-error">{msg}</p> })
			}}
			<div class="node-slots">
				{move || {
					fields
						.get()
						.into_iter()
						.enumerate()
						.map(|(i, field)| {
							view! {
								<label class="node-slot">
									<span>{format!("node {}", i + 1)}</span>
									<input
										type="text"
										prop:value=move || field.get()
										on:input=move |ev| field.set(event_target_value(&ev))
									/>
								</label>
							}
						})
						.collect_view()
				}}
			</div>
		</div>
	}
}
