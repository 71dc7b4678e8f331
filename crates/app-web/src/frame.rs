use crate::dom;
use crate::input;
use crate::render::Surface;
use app_core::{
    project_points, sort_by_screen_x, InteractionState, Point, ProjectedPoint, Viewport, CUBE_SIZE,
};
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub points: Vec<Point>,
    pub state: InteractionState,
    /// Reused across frames; rebuilt, never persisted.
    pub projected: Vec<ProjectedPoint>,
    pub surface: Surface,
    pub pointer: input::SharedPointer,
    /// Frame-local effects only; generation used its own seeded RNG.
    pub rng: StdRng,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        if dt.as_millis() > 50 {
            log::debug!("slow frame: {} ms", dt.as_millis());
        }

        let (width, height) = match dom::viewport_size() {
            Some(size) => size,
            None => return,
        };
        self.surface.resize_if_needed(width as u32, height as u32);

        if let Some(p) = *self.pointer.borrow() {
            self.state.set_pointer(p);
        }
        self.state.advance(Viewport::new(width, height));

        project_points(
            &self.points,
            &self.state,
            CUBE_SIZE,
            &mut self.rng,
            &mut self.projected,
        );
        sort_by_screen_x(&mut self.projected);

        self.surface.clear();
        self.surface.draw_net(&self.projected);
        self.surface
            .draw_particles(&self.projected, self.state.hover_factor);
    }
}

/// A running animation. Owns every registration made at mount so unmount
/// can release them all.
pub struct AnimationHandle {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pointer_closure: Option<Closure<dyn FnMut(web::MouseEvent)>>,
}

impl AnimationHandle {
    /// Cancel the pending frame and deregister the pointer listener.
    /// Idempotent, and safe to call before the first frame has run.
    pub fn stop(&mut self) {
        if !self.running.replace(false) {
            return;
        }
        if let Some(window) = web::window() {
            if let Some(id) = self.raf_id.take() {
                window.cancel_animation_frame(id).ok();
            }
            if let Some(cb) = self.pointer_closure.take() {
                window
                    .remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref())
                    .ok();
            }
        }
        // The tick closure holds an Rc to its own cell; dropping the cell's
        // contents breaks the cycle.
        self.tick.borrow_mut().take();
        log::info!("backdrop stopped");
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Begin repeating `ctx.frame()` at display-refresh cadence. The returned
/// handle is the cancellation contract; dropping it stops the loop.
pub fn start_loop(
    mut ctx: FrameContext,
    pointer_closure: Closure<dyn FnMut(web::MouseEvent)>,
) -> AnimationHandle {
    let running = Rc::new(Cell::new(true));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let raf_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        ctx.frame();
        if let Some(window) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    raf_tick.set(Some(id));
                }
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(window) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                raf_id.set(Some(id));
            }
        }
    }

    AnimationHandle {
        running,
        raf_id,
        tick,
        pointer_closure: Some(pointer_closure),
    }
}
