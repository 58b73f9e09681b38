use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::render;
use super::types::AdjacencyMatrix;

/// Canvas that redraws the circular graph whenever `matrix` changes.
///
/// Explicit `width`/`height` pin the canvas size; without them the parent
/// element is measured, and a window resize re-measures and repaints.
#[component]
pub fn CircleGraphCanvas(
	#[prop(into)] matrix: Signal<AdjacencyMatrix>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		paint(&canvas, &matrix.get(), width, height);

		// register once, on the first run that actually found the canvas
		if width.is_none() && height.is_none() && resize_cb.borrow().is_none() {
			let canvas_resize = canvas.clone();
			*resize_cb.borrow_mut() = Some(Closure::new(move || {
				paint(&canvas_resize, &matrix.get_untracked(), None, None);
			}));
			if let Some(ref cb) = *resize_cb.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
	});

	view! { <canvas node_ref=canvas_ref class="circle-graph-canvas" style="display: block;" /> }
}

/// Size the backing store and repaint the whole graph.
fn paint(
	canvas: &HtmlCanvasElement,
	matrix: &AdjacencyMatrix,
	width: Option<f64>,
	height: Option<f64>,
) {
	let (w, h) = measure(canvas, width, height);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	let Some(ctx) = context_2d(canvas) else {
		return;
	};
	render::render(matrix, &ctx, w, h);
	info!(
		"drew graph: {} slots, {} edges",
		matrix.size(),
		matrix.edge_count()
	);
}

fn measure(canvas: &HtmlCanvasElement, width: Option<f64>, height: Option<f64>) -> (f64, f64) {
	(
		width.unwrap_or_else(|| {
			canvas
				.parent_element()
				.map(|p| p.client_width() as f64)
				.unwrap_or(800.0)
		}),
		height.unwrap_or_else(|| {
			canvas
				.parent_element()
				.map(|p| p.client_height() as f64)
				.unwrap_or(600.0)
		}),
	)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|obj| obj.dyn_into().ok())
}
