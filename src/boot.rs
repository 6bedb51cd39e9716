use std::cell::{Cell, RefCell};

use gloo::console;
use gloo::events::EventListener;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::app_router;
use crate::page::{self, ResultPageIds, UploadPageIds};
use crate::result_page;
use crate::upload_page::{self, UploadPage};

thread_local! {
    static MOUNTED: Cell<bool> = Cell::new(false);
    static READY_LISTENER: RefCell<Option<EventListener>> = RefCell::new(None);
    static UPLOAD_PAGE: RefCell<Option<UploadPage>> = RefCell::new(None);
}

pub(crate) fn start() {
    let document = match page::document() {
        Ok(document) => document,
        Err(err) => {
            console::warn!("boot failed", err.to_string());
            return;
        }
    };
    if is_loading(&document) {
        let listener = EventListener::once(&document, "DOMContentLoaded", |_event| {
            mount_pages();
        });
        READY_LISTENER.with(|slot| {
            *slot.borrow_mut() = Some(listener);
        });
    } else {
        mount_pages();
    }
}

fn is_loading(document: &Document) -> bool {
    Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|value| value.as_string())
        .map(|state| state == "loading")
        .unwrap_or(false)
}

fn mount_pages() {
    let already_mounted = MOUNTED.with(|flag| flag.replace(true));
    if already_mounted {
        return;
    }
    let document = match page::document() {
        Ok(document) => document,
        Err(err) => {
            console::warn!("boot failed", err.to_string());
            return;
        }
    };
    if let Some(route) = app_router::current_route() {
        console::log!("page", route.label());
    }

    if let Some(upload) = upload_page::mount(&document, UploadPageIds::default()) {
        UPLOAD_PAGE.with(|slot| {
            *slot.borrow_mut() = Some(upload);
        });
    }

    let tag = app_router::load_result_tag();
    result_page::render(&document, &ResultPageIds::default(), tag.as_deref());
}
