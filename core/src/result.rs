use crate::catalog::{resolve_breed, BreedContent, ContentFormat};

/// Page surface the result presenter writes into.
pub trait ResultView {
    fn mark_illustration(&self, class_name: &str);
    fn set_title(&self, value: &str, format: ContentFormat);
    fn set_description(&self, value: &str, format: ContentFormat);
}

/// Returns the tag as a class token, or `None` when it cannot be one.
pub fn illustration_class(tag: &str) -> Option<&str> {
    if tag.is_empty() || tag.chars().any(char::is_whitespace) {
        None
    } else {
        Some(tag)
    }
}

pub struct ResultPresenter<V: ResultView> {
    view: V,
}

impl<V: ResultView> ResultPresenter<V> {
    pub fn new(view: V) -> Self {
        Self { view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Writes breed content for `tag`. An absent or empty tag leaves the
    /// page untouched.
    pub fn render(&self, tag: Option<&str>) -> Option<BreedContent> {
        let tag = tag.filter(|tag| !tag.is_empty())?;
        if let Some(class_name) = illustration_class(tag) {
            self.view.mark_illustration(class_name);
        }
        let content = resolve_breed(tag);
        self.view.set_title(&content.title, content.format);
        self.view.set_description(&content.description, content.format);
        Some(content)
    }
}
