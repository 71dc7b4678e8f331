use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Latest pointer sample in viewport pixels. One slot shared between the
/// window listener (writer) and the frame loop (reader); newer samples
/// overwrite older ones, nothing is queued.
pub type SharedPointer = Rc<RefCell<Option<Vec2>>>;

#[inline]
pub fn new_shared_pointer() -> SharedPointer {
    Rc::new(RefCell::new(None))
}

/// The canvas is a fixed full-viewport layer, so client coordinates already
/// are canvas coordinates.
#[inline]
pub fn pointer_viewport_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}
