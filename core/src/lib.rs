pub mod catalog;
pub mod preview;
pub mod result;
pub mod route;
pub mod upload;

pub use catalog::{
    breed_by_label, breed_by_tag, fallback_description, resolve_breed, BreedCatalogEntry,
    BreedContent, ContentFormat, BREED_CATALOG,
};
pub use preview::{data_url, is_image_media_type};
pub use result::{illustration_class, ResultPresenter, ResultView};
pub use route::{result_href, tag_from_query, Route, RouteError, RESULT_TAG_PARAM};
pub use upload::{
    DecodeTicket, FileBatch, MediaFile, PendingDecode, PreviewState, SelectedFile,
    SubmissionState, UploadView, UploadWidget, ViewFile, PROCESSING_LABEL,
};
