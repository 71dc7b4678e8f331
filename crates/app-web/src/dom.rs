use web_sys as web;

/// Current viewport size in pixels, read fresh at the top of each frame so
/// resizes need no dedicated listener.
pub fn viewport_size() -> Option<(f32, f32)> {
    let window = web::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width as f32, height as f32))
}
