//! Document-wide resources: body scroll and the escape-key listener

use std::cell::RefCell;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

use crate::shell::{DocumentHost, HostSignal, SignalQueue};

pub struct WebDocumentHost {
    document: Document,
    queue: SignalQueue,
    /// Inline `overflow` of `<body>` before the lock, restored on unlock
    saved_overflow: RefCell<Option<String>>,
    keydown: RefCell<Option<EventListener>>,
}

impl WebDocumentHost {
    pub fn new(document: Document, queue: SignalQueue) -> Self {
        Self {
            document,
            queue,
            saved_overflow: RefCell::new(None),
            keydown: RefCell::new(None),
        }
    }
}

impl DocumentHost for WebDocumentHost {
    fn lock_scroll(&self) {
        let Some(body) = self.document.body() else {
            return;
        };
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        if let Err(e) = style.set_property("overflow", "hidden") {
            tracing::warn!("failed to lock page scroll: {:?}", e);
            return;
        }
        *self.saved_overflow.borrow_mut() = Some(previous);
    }

    fn unlock_scroll(&self) {
        let Some(previous) = self.saved_overflow.borrow_mut().take() else {
            return;
        };
        let Some(body) = self.document.body() else {
            return;
        };
        let style = body.style();
        let result = if previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &previous)
        };
        if let Err(e) = result {
            tracing::warn!("failed to restore page scroll: {:?}", e);
        }
    }

    fn bind_escape(&self) {
        let queue = self.queue.clone();
        let listener = EventListener::new(&self.document, "keydown", move |event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                if key_event.key() == "Escape" {
                    queue.push(HostSignal::EscapePressed);
                }
            }
        });
        // Replacing an old listener drops (and detaches) it
        *self.keydown.borrow_mut() = Some(listener);
    }

    fn unbind_escape(&self) {
        self.keydown.borrow_mut().take();
    }
}
