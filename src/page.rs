use std::fmt;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct UploadPageIds {
    pub(crate) drop_zone: &'static str,
    pub(crate) file_input: &'static str,
    pub(crate) preview: &'static str,
    pub(crate) form: &'static str,
    pub(crate) loader: &'static str,
    pub(crate) submit: &'static str,
    pub(crate) prompt_selector: &'static str,
    pub(crate) drag_class: &'static str,
    pub(crate) preview_active_class: &'static str,
}

impl Default for UploadPageIds {
    fn default() -> Self {
        Self {
            drop_zone: "uploadArea",
            file_input: "fileInput",
            preview: "imagePreview",
            form: "uploadForm",
            loader: "loader",
            submit: "submitBtn",
            prompt_selector: ".upload-area__content",
            drag_class: "dragover",
            preview_active_class: "active",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ResultPageIds {
    pub(crate) title: &'static str,
    pub(crate) text: &'static str,
    pub(crate) illustration: &'static str,
}

impl Default for ResultPageIds {
    fn default() -> Self {
        Self {
            title: "title",
            text: "text",
            illustration: "image",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PageError {
    MissingWindow,
    MissingDocument,
    MissingElement { selector: String },
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::MissingWindow => f.write_str("window unavailable"),
            PageError::MissingDocument => f.write_str("document unavailable"),
            PageError::MissingElement { selector } => {
                write!(f, "element '{selector}' not found")
            }
        }
    }
}

impl std::error::Error for PageError {}

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        if let Some(message) = error.message().as_string() {
            return message;
        }
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}

pub(crate) fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::MissingWindow)
}

pub(crate) fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::MissingDocument)
}

/// Looks up an element by id and casts it. A wrong element type counts as
/// missing.
pub(crate) fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

pub(crate) fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub(crate) fn set_class(element: &Element, class_name: &str, enabled: bool) {
    let classes = element.class_list();
    let result = if enabled {
        classes.add_1(class_name)
    } else {
        classes.remove_1(class_name)
    };
    if let Err(err) = result {
        gloo::console::warn!("class toggle failed", class_name.to_string(), js_err(err));
    }
}

pub(crate) fn set_display(element: &HtmlElement, value: &str) {
    if let Err(err) = element.style().set_property("display", value) {
        gloo::console::warn!("style update failed", js_err(err));
    }
}
