use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::NetworkState;
use super::types::{LayoutMode, NetworkData};

#[derive(Clone, PartialEq)]
struct PanelInfo {
	name: String,
	description: Option<&'static str>,
	x: f64,
	y: f64,
}

fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Interactive career-network canvas with layout, link-strength, and
/// recenter controls, plus a hover info panel.
#[component]
pub fn NetworkCanvas(
	#[prop(into)] data: Signal<NetworkData>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<NetworkState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init) = (state.clone(), animate.clone());

	let (panel, set_panel) = signal(None::<PanelInfo>);
	let (layout, set_layout) = signal(LayoutMode::Force);
	let (strength, set_strength) = signal(0.5f32);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let (w, h) = (
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
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		*state_init.borrow_mut() = Some(NetworkState::new(&data.get(), w, h));

		// The simulation tick is the only thing that moves rendered
		// positions; one requestAnimationFrame loop drives it.
		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_position(&canvas, &ev);

		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(idx) = s.node_at_position(x, y) {
				s.begin_drag(idx, x, y);
			} else {
				s.pan.active = true;
				s.pan.start_x = x;
				s.pan.start_y = y;
				s.pan.transform_start_x = s.transform.x;
				s.pan.transform_start_y = s.transform.y;
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_position(&canvas, &ev);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag.active {
				s.drag_to(x, y);
				set_panel.set(None);
			} else if s.pan.active {
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
			} else {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
				let info = hovered.and_then(|idx| s.node_meta(idx)).map(|meta| PanelInfo {
					name: meta.name,
					description: meta.group.description(),
					x: x + 10.0,
					y: y + 10.0,
				});
				set_panel.set(info);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_position(&canvas, &ev);

		if let Some(ref mut s) = *state_mu.borrow_mut() {
			// A press-and-release without movement is a click: focus the
			// node's neighborhood.
			if s.drag.active && !s.drag.moved {
				if let Some(idx) = s.node_at_position(x, y) {
					s.highlight_connections(idx);
				}
			}
			if s.drag.active {
				s.end_drag();
			}
			s.pan.active = false;
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			if s.drag.active {
				s.end_drag();
			}
			s.pan.active = false;
			s.set_hover(None);
		}
		set_panel.set(None);
	};

	let state_dc = state.clone();
	let on_dblclick = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_dc.borrow_mut() {
			s.reset_highlighting();
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (s.transform.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / s.transform.k;
			s.transform.x = x - (x - s.transform.x) * ratio;
			s.transform.y = y - (y - s.transform.y) * ratio;
			s.transform.k = new_k;
		}
	};

	let state_st = state.clone();
	let on_strength = move |ev: Event| {
		if let Ok(value) = event_target_value(&ev).parse::<f32>() {
			set_strength.set(value);
			if let Some(ref mut s) = *state_st.borrow_mut() {
				s.set_link_strength(value);
			}
		}
	};

	let state_rc = state.clone();
	let on_recenter = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_rc.borrow_mut() {
			s.recenter();
		}
	};

	let layout_buttons = [LayoutMode::Force, LayoutMode::Radial, LayoutMode::Circle]
		.into_iter()
		.map(|mode| {
			let state_lb = state.clone();
			view! {
				<button
					type="button"
					class:active=move || layout.get() == mode
					on:click=move |_| {
						if let Some(ref mut s) = *state_lb.borrow_mut() {
							s.set_layout(mode);
						}
						set_layout.set(mode);
					}
				>
					{mode.label()}
				</button>
			}
		})
		.collect_view();

	view! {
		<div class="network-visualization" style="position: relative;">
			<canvas
				node_ref=canvas_ref
				class="network-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:dblclick=on_dblclick
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>
			{move || {
				panel.get().map(|info| {
					view! {
						<div
							class="node-info"
							style=format!(
								"position: absolute; left: {}px; top: {}px; pointer-events: none;",
								info.x,
								info.y,
							)
						>
							<h6>{info.name}</h6>
							{info.description.map(|d| view! { <p class="small mb-0">{d}</p> })}
						</div>
					}
				})
			}}
			<div class="network-controls">
				{layout_buttons}
				<label>
					"Link strength"
					<input
						type="range"
						min="0"
						max="1"
						step="0.05"
						prop:value=move || strength.get().to_string()
						on:input=on_strength
					/>
				</label>
				<button type="button" on:click=on_recenter>
					"Recenter"
				</button>
			</div>
		</div>
	}
}
