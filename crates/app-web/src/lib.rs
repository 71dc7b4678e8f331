#![cfg(target_arch = "wasm32")]
//! WASM front-end for the pointfield backdrop: owns the canvas, the frame
//! scheduler and the pointer listener. All simulation lives in `app-core`.

use app_core::{cloud, InteractionState, Viewport, CORE_PROBABILITY, CUBE_SIZE, PARTICLE_COUNT};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod frame;
mod input;
mod render;

use frame::AnimationHandle;
use render::Surface;

const CANVAS_ID: &str = "backdrop-canvas";

thread_local! {
    /// The mounted backdrop, if any. Kept alive here so its registrations
    /// survive until `stop_backdrop` (or a remount) releases them.
    static ACTIVE: RefCell<Option<AnimationHandle>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pointfield starting");

    match mount(CANVAS_ID) {
        Ok(Some(handle)) => ACTIVE.with(|slot| *slot.borrow_mut() = Some(handle)),
        Ok(None) => {}
        Err(e) => log::error!("mount error: {:?}", e),
    }
    Ok(())
}

/// Remount the backdrop, replacing any running instance. Exposed so the
/// hosting page can bring the animation back after `stop_backdrop`.
#[wasm_bindgen]
pub fn start_backdrop() {
    stop_backdrop();
    match mount(CANVAS_ID) {
        Ok(Some(handle)) => ACTIVE.with(|slot| *slot.borrow_mut() = Some(handle)),
        Ok(None) => {}
        Err(e) => log::error!("mount error: {:?}", e),
    }
}

/// Unmount: cancels the frame loop and deregisters the pointer listener.
/// Safe to call repeatedly.
#[wasm_bindgen]
pub fn stop_backdrop() {
    ACTIVE.with(|slot| {
        if let Some(mut handle) = slot.borrow_mut().take() {
            handle.stop();
        }
    });
}

/// Mount the backdrop onto the canvas with the given element id. Returns
/// `Ok(None)` when the page has no such canvas or the environment offers no
/// 2D context; both degrade to a static page instead of an error.
fn mount(canvas_id: &str) -> anyhow::Result<Option<AnimationHandle>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = match document.get_element_by_id(canvas_id) {
        Some(el) => el,
        None => {
            log::warn!("missing #{canvas_id}; backdrop disabled");
            return Ok(None);
        }
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{canvas_id} is not a canvas: {:?}", e))?;

    let surface = match Surface::new(canvas) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("{e}; backdrop disabled");
            return Ok(None);
        }
    };

    let (width, height) = dom::viewport_size().ok_or_else(|| anyhow::anyhow!("no viewport"))?;

    // Generation gets its own RNG so the field layout is independent of the
    // per-frame flicker effects.
    let mut gen_rng = StdRng::from_entropy();
    let points = cloud::generate(PARTICLE_COUNT, CUBE_SIZE, CORE_PROBABILITY, &mut gen_rng);

    // The listener sits on the window so proximity still reacts while the
    // pointer is over page content layered above the backdrop.
    let pointer = input::new_shared_pointer();
    let pointer_writer = pointer.clone();
    let pointer_closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        *pointer_writer.borrow_mut() = Some(input::pointer_viewport_px(&ev));
    }) as Box<dyn FnMut(_)>);
    window
        .add_event_listener_with_callback("mousemove", pointer_closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("mousemove listener error: {:?}", e))?;

    let ctx = frame::FrameContext {
        points,
        state: InteractionState::new(Viewport::new(width, height)),
        projected: Vec::new(),
        surface,
        pointer,
        rng: StdRng::from_entropy(),
        last_instant: Instant::now(),
    };
    Ok(Some(frame::start_loop(ctx, pointer_closure)))
}
