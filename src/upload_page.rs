use std::cell::RefCell;
use std::rc::Rc;

use dogbreed_core::{data_url, FileBatch, MediaFile, PendingDecode, UploadView, UploadWidget};
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Document, DragEvent, Event, EventTarget, File, FileList, HtmlButtonElement, HtmlElement,
    HtmlFormElement, HtmlImageElement, HtmlInputElement,
};

use crate::page::{self, js_err, PageError, UploadPageIds};

#[derive(Clone, Debug)]
pub(crate) struct DomFile(pub(crate) File);

impl MediaFile for DomFile {
    fn media_type(&self) -> String {
        self.0.type_()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct DomFiles(pub(crate) FileList);

impl FileBatch for DomFiles {
    type File = DomFile;

    fn first(&self) -> Option<DomFile> {
        self.0.get(0).map(DomFile)
    }
}

pub(crate) struct DomUploadView {
    document: Document,
    ids: UploadPageIds,
    drop_zone: HtmlElement,
    file_input: Option<HtmlInputElement>,
    preview: Option<HtmlImageElement>,
    loader: Option<HtmlElement>,
    submit: Option<HtmlElement>,
}

impl DomUploadView {
    fn bind(document: &Document, ids: UploadPageIds, drop_zone: HtmlElement) -> Self {
        let file_input = page::element_by_id::<HtmlInputElement>(document, ids.file_input);
        let preview = page::element_by_id::<HtmlImageElement>(document, ids.preview);
        let loader = page::element_by_id::<HtmlElement>(document, ids.loader);
        let submit = page::element_by_id::<HtmlElement>(document, ids.submit);
        for (id, present) in [
            (ids.file_input, file_input.is_some()),
            (ids.preview, preview.is_some()),
            (ids.loader, loader.is_some()),
            (ids.submit, submit.is_some()),
        ] {
            if !present {
                let err = PageError::MissingElement {
                    selector: format!("#{id}"),
                };
                console::warn!("upload:", err.to_string());
            }
        }
        Self {
            document: document.clone(),
            ids,
            drop_zone,
            file_input,
            preview,
            loader,
            submit,
        }
    }
}

impl UploadView for DomUploadView {
    type Files = DomFiles;

    fn open_picker(&self) {
        if let Some(input) = self.file_input.as_ref() {
            input.click();
        }
    }

    fn set_drag_active(&self, active: bool) {
        page::set_class(&self.drop_zone, self.ids.drag_class, active);
    }

    fn sync_input_files(&self, files: &DomFiles) {
        if let Some(input) = self.file_input.as_ref() {
            input.set_files(Some(&files.0));
        }
    }

    fn show_preview(&self, data_url: &str) {
        if let Some(preview) = self.preview.as_ref() {
            preview.set_src(data_url);
            page::set_class(preview, self.ids.preview_active_class, true);
        }
    }

    fn hide_prompt(&self) {
        if let Some(prompt) = page::query_html(&self.document, self.ids.prompt_selector) {
            page::set_display(&prompt, "none");
        }
    }

    fn show_loader(&self) {
        if let Some(loader) = self.loader.as_ref() {
            page::set_display(loader, "block");
        }
    }

    fn lock_submit(&self, label: &str) {
        let Some(submit) = self.submit.as_ref() else {
            return;
        };
        if let Some(button) = submit.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(true);
        } else if let Some(input) = submit.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(true);
            input.set_value(label);
        } else if let Err(err) = submit.set_attribute("disabled", "") {
            console::warn!("upload: failed to disable submit", js_err(err));
        }
        submit.set_inner_text(label);
    }
}

pub(crate) type SharedUploadWidget = Rc<RefCell<UploadWidget<DomUploadView>>>;

/// Mounted upload widget. Listeners stay attached while this is alive.
pub(crate) struct UploadPage {
    #[allow(dead_code)]
    widget: SharedUploadWidget,
    _listeners: Vec<EventListener>,
}

impl UploadPage {
    #[cfg(all(test, target_arch = "wasm32"))]
    pub(crate) fn widget(&self) -> &SharedUploadWidget {
        &self.widget
    }
}

/// Binds the widget when the page has a drop zone. Other missing elements
/// only disable the effects that need them.
pub(crate) fn mount(document: &Document, ids: UploadPageIds) -> Option<UploadPage> {
    let drop_zone = page::element_by_id::<HtmlElement>(document, ids.drop_zone)?;
    let form = page::element_by_id::<HtmlFormElement>(document, ids.form);
    let view = DomUploadView::bind(document, ids, drop_zone.clone());
    let file_input = view.file_input.clone();
    let widget: SharedUploadWidget = Rc::new(RefCell::new(UploadWidget::new(view)));

    let mut listeners = Vec::new();
    listeners.push(click_listener(&drop_zone, file_input.clone(), widget.clone()));
    listeners.extend(drag_listeners(&drop_zone, widget.clone()));
    if let Some(input) = file_input.as_ref() {
        listeners.push(change_listener(input, widget.clone()));
    }
    if let Some(form) = form.as_ref() {
        listeners.push(submit_listener(form, widget.clone()));
    }
    console::log!("upload: widget mounted", listeners.len() as u32);
    Some(UploadPage {
        widget,
        _listeners: listeners,
    })
}

fn click_listener(
    drop_zone: &HtmlElement,
    file_input: Option<HtmlInputElement>,
    widget: SharedUploadWidget,
) -> EventListener {
    EventListener::new(drop_zone, "click", move |event: &Event| {
        // The picker's own click bubbles back up when the input sits inside the drop zone.
        if let (Some(input), Some(target)) = (file_input.as_ref(), event.target()) {
            let input_target: &EventTarget = input.as_ref();
            if *input_target == target {
                return;
            }
        }
        widget.borrow().activate_picker();
    })
}

fn drag_listeners(drop_zone: &HtmlElement, widget: SharedUploadWidget) -> Vec<EventListener> {
    let options = EventListenerOptions::enable_prevent_default();
    let mut listeners = Vec::new();
    for name in ["dragenter", "dragover", "dragleave", "drop"] {
        let widget = widget.clone();
        listeners.push(EventListener::new_with_options(
            drop_zone,
            name,
            options,
            move |event: &Event| {
                event.prevent_default();
                event.stop_propagation();
                match event.type_().as_str() {
                    "dragenter" => widget.borrow_mut().drag_enter(),
                    "dragover" => widget.borrow_mut().drag_over(),
                    "dragleave" => widget.borrow_mut().drag_leave(),
                    _ => {
                        let files = event
                            .dyn_ref::<DragEvent>()
                            .and_then(DragEvent::data_transfer)
                            .and_then(|transfer| transfer.files())
                            .map(DomFiles);
                        let pending = widget.borrow_mut().drop_files(files.as_ref());
                        handle_pending(&widget, pending);
                    }
                }
            },
        ));
    }
    listeners
}

fn change_listener(input: &HtmlInputElement, widget: SharedUploadWidget) -> EventListener {
    let source = input.clone();
    EventListener::new(input, "change", move |_event: &Event| {
        let files = source.files().map(DomFiles);
        let pending = widget.borrow_mut().pick_files(files.as_ref());
        handle_pending(&widget, pending);
    })
}

fn submit_listener(form: &HtmlFormElement, widget: SharedUploadWidget) -> EventListener {
    EventListener::new(form, "submit", move |_event: &Event| {
        if widget.borrow_mut().submit() {
            console::log!("upload: submitting");
        }
    })
}

fn handle_pending(widget: &SharedUploadWidget, pending: Option<PendingDecode<DomFile>>) {
    match pending {
        Some(pending) => start_decode(widget.clone(), pending),
        None => console::log!("upload: selection ignored"),
    }
}

fn start_decode(widget: SharedUploadWidget, pending: PendingDecode<DomFile>) {
    let PendingDecode {
        ticket,
        file,
        media_type,
    } = pending;
    spawn_local(async move {
        let bytes = match read_file_bytes(&file.0).await {
            Ok(bytes) => bytes,
            Err(err) => {
                console::warn!("upload: preview read failed", file.0.name(), err);
                return;
            }
        };
        let url = data_url(&media_type, &bytes);
        if !widget.borrow_mut().finish_decode(ticket, url) {
            console::log!("upload: stale preview discarded", format!("#{}", ticket.seq()));
        }
    });
}

async fn read_file_bytes(file: &File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer()).await.map_err(js_err)?;
    let array = js_sys::Uint8Array::new(&buffer);
    Ok(array.to_vec())
}
