use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::render;
use super::state::{ForceGraphState, surface_size};
use super::types::{GraphData, GraphEvent, LayoutForces};

const FRAME_DT: f32 = 0.016;

fn viewport_height(window: &Window) -> f64 {
	window
		.inner_height()
		.ok()
		.and_then(|h| h.as_f64())
		.unwrap_or(1000.0)
}

fn measure(canvas: &HtmlCanvasElement, window: &Window) -> (f64, f64) {
	let container_width = canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.unwrap_or(1000.0);
	surface_size(container_width, viewport_height(window))
}

fn pointer_position(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Force-directed graph on a 2D canvas, sized to its parent's width.
///
/// Pointer interaction is reported through `on_event`; the node whose id
/// matches `selected` is ringed. Replacing `data` rebuilds and reheats the
/// layout.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(optional)] on_event: Option<Callback<GraphEvent>>,
	#[prop(optional, into)] selected: Option<Signal<Option<String>>>,
	#[prop(optional)] forces: Option<LayoutForces>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<ForceGraphState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let running = Rc::new(Cell::new(false));
	let forces = forces.unwrap_or_default();
	let emit = move |event: Option<GraphEvent>| {
		if let (Some(event), Some(cb)) = (event, on_event) {
			cb.run(event);
		}
	};

	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if running.replace(true) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = measure(&canvas, &window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		*state_init.borrow_mut() = Some(ForceGraphState::new(&data.get_untracked(), w, h, forces));

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = measure(&canvas_resize, &win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner, resize_inner) =
			(state_init.clone(), animate_init.clone(), resize_cb_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			// Unmounted: stop scheduling frames and detach from the window.
			if !canvas.is_connected() {
				if let Some(ref cb) = *resize_inner.borrow() {
					let _ =
						win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
				}
				debug!("force graph detached, animation stopped");
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(FRAME_DT);
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_data = state.clone();
	Effect::new(move |_| {
		let data = data.get();
		if let Some(ref mut s) = *state_data.borrow_mut() {
			s.rebuild(&data);
			debug!("force graph rebuilt with {} nodes", data.nodes.len());
		}
	});

	let state_sel = state.clone();
	Effect::new(move |_| {
		let id = selected.and_then(|s| s.get());
		if let Some(ref mut s) = *state_sel.borrow_mut() {
			s.set_selected(id);
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pointer_down(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		let event = state_mm
			.borrow_mut()
			.as_mut()
			.and_then(|s| s.pointer_move(x, y));
		emit(event);
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		let event = state_mu.borrow_mut().as_mut().and_then(|s| s.pointer_up());
		emit(event);
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		let event = state_ml.borrow_mut().as_mut().and_then(|s| s.pointer_leave());
		emit(event);
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom_at(x, y, ev.delta_y());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
