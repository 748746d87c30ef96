//! Document-level pointer-press plumbing.
//!
//! Widgets that dismiss themselves when the user presses outside their own
//! subtree register an [`OutsidePress`] guard. The guard owns the JS
//! closure and removes the listener when dropped, so deregistration is tied
//! to the widget's lifetime rather than to a manual call.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// DOM event observed by the guard. `pointerdown` covers both mouse and
/// touch presses.
const PRESS_EVENT: &str = "pointerdown";

/// A registered document-level listener reporting presses that land outside
/// the subtree of the element with a given id.
pub struct OutsidePress {
    document: web_sys::Document,
    handler: Closure<dyn FnMut(web_sys::Event)>,
}

impl OutsidePress {
    /// Register the listener. `on_outside` runs for every press whose
    /// target is not contained in the element identified by `root_id`, or
    /// whenever that element cannot be resolved.
    ///
    /// Returns `None` when there is no window or document to attach to; the
    /// caller then simply has no outside dismissal.
    pub fn register(root_id: &str, mut on_outside: impl FnMut() + 'static) -> Option<Self> {
        let document = web_sys::window()?.document()?;

        let doc = document.clone();
        let id = root_id.to_string();
        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let target = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
            let inside = doc
                .get_element_by_id(&id)
                .map(|root| root.contains(target.as_ref()))
                .unwrap_or(false);
            if !inside {
                on_outside();
            }
        });

        document
            .add_event_listener_with_callback(PRESS_EVENT, handler.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { document, handler })
    }
}

impl Drop for OutsidePress {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback(PRESS_EVENT, self.handler.as_ref().unchecked_ref());
    }
}
