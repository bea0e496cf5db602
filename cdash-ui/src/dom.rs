//! DOM helpers: element measurement, window resize listener, and the
//! scroll-container virtualizer used by the company table.

use cdash_data::error::ScrollError;
use cdash_data::table::Virtualizer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Look up an element by id in the current document.
pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Client `(width, height)` of an element in CSS pixels.
pub fn measure(id: &str) -> Option<(f64, f64)> {
    let el = element_by_id(id)?;
    Some((f64::from(el.client_width()), f64::from(el.client_height())))
}

/// `(scroll_left, scroll_top)` of a scroll container.
pub fn scroll_position(id: &str) -> Option<(f64, f64)> {
    element_by_id(id).map(|el| (f64::from(el.scroll_left()), f64::from(el.scroll_top())))
}

/// A `resize` listener on `window`, removed when dropped.
///
/// Hold it in a hook (`use_hook(|| Rc::new(ResizeListener::attach(..)))`)
/// so it lives exactly as long as the component.
pub struct ResizeListener {
    callback: Closure<dyn FnMut()>,
}

impl ResizeListener {
    pub fn attach(handler: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut()>::new(handler);
        if let Err(e) =
            window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
        {
            log::warn!("[CDash] dom: Failed to add resize listener: {:?}", e);
            return None;
        }
        Some(Self { callback })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
        }
    }
}

/// Scrolls the table's body element by whole rows.
pub struct DomVirtualizer<'a> {
    pub body_id: &'a str,
    pub row_height: f64,
    pub row_count: usize,
}

impl Virtualizer for DomVirtualizer<'_> {
    fn scroll_to_index(&self, index: usize) -> Result<(), ScrollError> {
        if index > 0 && index >= self.row_count {
            return Err(ScrollError::OutOfRange {
                index,
                rows: self.row_count,
            });
        }
        let el = element_by_id(self.body_id)
            .ok_or_else(|| ScrollError::NotMounted(self.body_id.to_string()))?;
        el.set_scroll_top((index as f64 * self.row_height).round() as i32);
        Ok(())
    }
}
