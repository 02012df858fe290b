use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use std::time::Duration;

use leptos::prelude::*;
use log::debug;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::TopologyState;
use crate::components::panel::Panel;
use crate::runtime::{RandomSource, scoped_interval};

/// Power random-walk cadence: three seconds.
const WALK_PERIOD: Duration = Duration::from_secs(3);

/// Animated circuit-board view of subsystem health.
///
/// Node power moves on its own timer; a requestAnimationFrame loop repaints
/// continuously for the pulse and hover animations.  Both are torn down when
/// the panel unmounts.
#[component]
pub fn TopologyPanel(#[prop(default = 400.0)] height: f64) -> impl IntoView {
	let rng = expect_context::<RandomSource>();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<TopologyState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let raf_id = Arc::new(AtomicI32::new(0));
	let (state_init, animate_init, raf_init) = (state.clone(), animate.clone(), raf_id.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let width = canvas
			.parent_element()
			.map(|p| p.client_width() as f64)
			.unwrap_or(800.0);
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		*state_init.borrow_mut() = Some(TopologyState::new(width, height));

		// Power walk on its own cadence; drawing happens every frame.
		let (state_walk, rng_walk) = (state_init.clone(), rng.clone());
		scoped_interval(WALK_PERIOD, move || {
			if let Some(ref mut s) = *state_walk.borrow_mut() {
				s.resample_power(&rng_walk);
				debug!("topology resample: {}/{} online", s.online_count(), s.nodes.len());
			}
		});

		let (state_anim, animate_inner, raf_anim) =
			(state_init.clone(), animate_init.clone(), raf_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(id) = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref())
				{
					raf_anim.store(id, Ordering::Relaxed);
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				raf_init.store(id, Ordering::Relaxed);
			}
		}
	});

	// The walk interval is scoped by `scoped_interval`; the frame loop needs
	// its pending request cancelled explicitly.
	let raf_cleanup = raf_id.clone();
	on_cleanup(move || {
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(raf_cleanup.load(Ordering::Relaxed));
		}
	});

	let state_mm = SendWrapper::new(state.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			let hovered = s.node_at_position(x, y);
			s.set_hover(hovered);
		}
	};

	let state_ml = SendWrapper::new(state.clone());
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.set_hover(None);
		}
	};

	view! {
		<Panel title="CIRCUIT BOARD - SYSTEM TOPOLOGY">
			<div class="topology-board">
				<canvas
					node_ref=canvas_ref
					class="topology-canvas"
					on:mousemove=on_mousemove
					on:mouseleave=on_mouseleave
				/>
			</div>
			<div class="topology-legend">
				<span class="legend-item">
					<span class="legend-dot legend-dot--online"></span>
					"Online"
				</span>
				<span class="legend-item">
					<span class="legend-dot legend-dot--warning"></span>
					"Warning"
				</span>
				<span class="legend-item">
					<span class="legend-dot legend-dot--offline"></span>
					"Offline"
				</span>
			</div>
		</Panel>
	}
}
