use crate::preview::is_image_media_type;

pub const PROCESSING_LABEL: &str = "Обработка...";

pub trait MediaFile: Clone {
    fn media_type(&self) -> String;
}

/// A set of files delivered by one pick or drop. Only the first entry is
/// ever used by the widget.
pub trait FileBatch {
    type File: MediaFile;

    fn first(&self) -> Option<Self::File>;
}

/// Page surface the upload widget drives. Implementations skip effects
/// whose target element is missing.
pub trait UploadView {
    type Files: FileBatch;

    fn open_picker(&self);
    fn set_drag_active(&self, active: bool);
    fn sync_input_files(&self, files: &Self::Files);
    fn show_preview(&self, data_url: &str);
    fn hide_prompt(&self);
    fn show_loader(&self);
    fn lock_submit(&self, label: &str);
}

pub type ViewFile<V> = <<V as UploadView>::Files as FileBatch>::File;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewState {
    pub src: Option<String>,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DecodeTicket(u64);

impl DecodeTicket {
    pub fn seq(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct SelectedFile<F> {
    pub file: F,
    pub media_type: String,
}

/// An accepted file waiting for its content to be turned into a data URL.
#[derive(Clone, Debug)]
pub struct PendingDecode<F> {
    pub ticket: DecodeTicket,
    pub file: F,
    pub media_type: String,
}

pub struct UploadWidget<V: UploadView> {
    view: V,
    selected: Option<SelectedFile<ViewFile<V>>>,
    preview: PreviewState,
    submission: SubmissionState,
    drag_active: bool,
    next_ticket: u64,
    latest_ticket: Option<DecodeTicket>,
}

impl<V: UploadView> UploadWidget<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            selected: None,
            preview: PreviewState::default(),
            submission: SubmissionState::Idle,
            drag_active: false,
            next_ticket: 1,
            latest_ticket: None,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn selected(&self) -> Option<&SelectedFile<ViewFile<V>>> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn activate_picker(&self) {
        self.view.open_picker();
    }

    pub fn drag_enter(&mut self) {
        self.set_drag_active(true);
    }

    pub fn drag_over(&mut self) {
        self.set_drag_active(true);
    }

    pub fn drag_leave(&mut self) {
        self.set_drag_active(false);
    }

    /// Picker `change`: the native input already holds the selection.
    pub fn pick_files(&mut self, files: Option<&V::Files>) -> Option<PendingDecode<ViewFile<V>>> {
        self.accept_file(files.and_then(|files| files.first()))
    }

    /// Drop: the dropped set is mirrored onto the native input so submission
    /// does not depend on how the file arrived, whatever its type. An empty
    /// drop leaves the input alone. Extra files are ignored.
    pub fn drop_files(&mut self, files: Option<&V::Files>) -> Option<PendingDecode<ViewFile<V>>> {
        self.set_drag_active(false);
        let files = files?;
        let first = files.first()?;
        self.view.sync_input_files(files);
        self.accept_file(Some(first))
    }

    pub fn accept_file(
        &mut self,
        file: Option<ViewFile<V>>,
    ) -> Option<PendingDecode<ViewFile<V>>> {
        let file = file?;
        let media_type = file.media_type();
        if !is_image_media_type(&media_type) {
            return None;
        }
        let ticket = DecodeTicket(self.next_ticket);
        self.next_ticket = self.next_ticket.saturating_add(1);
        self.latest_ticket = Some(ticket);
        self.selected = Some(SelectedFile {
            file: file.clone(),
            media_type: media_type.clone(),
        });
        Some(PendingDecode {
            ticket,
            file,
            media_type,
        })
    }

    /// Applies a finished decode. Results for anything but the newest
    /// accepted file are discarded.
    pub fn finish_decode(&mut self, ticket: DecodeTicket, data_url: String) -> bool {
        if self.latest_ticket != Some(ticket) {
            return false;
        }
        self.view.show_preview(&data_url);
        self.view.hide_prompt();
        self.preview.src = Some(data_url);
        self.preview.active = true;
        true
    }

    pub fn submit(&mut self) -> bool {
        if self.submission == SubmissionState::Submitting {
            return false;
        }
        self.submission = SubmissionState::Submitting;
        self.view.show_loader();
        self.view.lock_submit(PROCESSING_LABEL);
        true
    }

    fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
        self.view.set_drag_active(active);
    }
}
