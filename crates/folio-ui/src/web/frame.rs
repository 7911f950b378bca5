//! Embedded `<iframe>` positioned over the modal body

use std::cell::RefCell;

use gloo_events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlIFrameElement};

use crate::shell::{FrameHost, FrameRect, HostSignal, SignalQueue};

/// CSS class the page stylesheet uses for the fixed-position frame
const FRAME_CLASS: &str = "folio-preview-frame";

/// A mounted iframe and its load listeners. Dropping removes it from the page.
struct MountedFrame {
    element: HtmlIFrameElement,
    _onload: EventListener,
    _onerror: EventListener,
}

impl Drop for MountedFrame {
    fn drop(&mut self) {
        self.element.remove();
    }
}

pub struct IframeHost {
    document: Document,
    queue: SignalQueue,
    current: RefCell<Option<MountedFrame>>,
}

impl IframeHost {
    pub fn new(document: Document, queue: SignalQueue) -> Self {
        Self {
            document,
            queue,
            current: RefCell::new(None),
        }
    }

    fn create(&self, url: &str, token: u64) -> Result<MountedFrame, JsValue> {
        let element: HtmlIFrameElement = self.document.create_element("iframe")?.dyn_into()?;
        element.set_class_name(FRAME_CLASS);
        element.set_src(url);
        element.style().set_property("visibility", "hidden")?;

        let queue = self.queue.clone();
        let onload = EventListener::new(&element, "load", move |_| {
            queue.push(HostSignal::FrameLoaded { token });
        });
        let queue = self.queue.clone();
        let onerror = EventListener::new(&element, "error", move |_| {
            queue.push(HostSignal::FrameFailed { token });
        });

        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&element)?;

        Ok(MountedFrame {
            element,
            _onload: onload,
            _onerror: onerror,
        })
    }
}

impl FrameHost for IframeHost {
    fn mount(&self, url: &str, token: u64) {
        // Old frame goes first so its late callbacks cannot race the new one
        self.current.borrow_mut().take();

        match self.create(url, token) {
            Ok(frame) => {
                tracing::debug!("mounted preview frame {} (token {})", url, token);
                *self.current.borrow_mut() = Some(frame);
            }
            Err(e) => {
                tracing::warn!("failed to mount preview frame {}: {:?}", url, e);
                self.queue.push(HostSignal::FrameFailed { token });
            }
        }
    }

    fn unmount(&self) {
        self.current.borrow_mut().take();
    }

    fn place(&self, rect: FrameRect, visible: bool) {
        let current = self.current.borrow();
        let Some(frame) = current.as_ref() else {
            return;
        };
        let style = frame.element.style();
        let result = style
            .set_property("left", &format!("{}px", rect.x))
            .and_then(|_| style.set_property("top", &format!("{}px", rect.y)))
            .and_then(|_| style.set_property("width", &format!("{}px", rect.width)))
            .and_then(|_| style.set_property("height", &format!("{}px", rect.height)))
            .and_then(|_| {
                style.set_property("visibility", if visible { "visible" } else { "hidden" })
            });
        if let Err(e) = result {
            tracing::warn!("failed to place preview frame: {:?}", e);
        }
    }
}
