use dogbreed_core::{BreedContent, ContentFormat, ResultPresenter, ResultView};
use gloo::console;
use web_sys::{Document, Element};

use crate::page::{self, ResultPageIds};

pub(crate) struct DomResultView {
    title: Option<Element>,
    text: Option<Element>,
    illustration: Option<Element>,
}

impl DomResultView {
    pub(crate) fn bind(document: &Document, ids: &ResultPageIds) -> Self {
        Self {
            title: page::element_by_id::<Element>(document, ids.title),
            text: page::element_by_id::<Element>(document, ids.text),
            illustration: page::element_by_id::<Element>(document, ids.illustration),
        }
    }
}

fn write_content(target: Option<&Element>, value: &str, format: ContentFormat) {
    let Some(target) = target else {
        return;
    };
    match format {
        ContentFormat::Text => target.set_text_content(Some(value)),
        ContentFormat::Markup => target.set_inner_html(value),
    }
}

impl ResultView for DomResultView {
    fn mark_illustration(&self, class_name: &str) {
        if let Some(illustration) = self.illustration.as_ref() {
            page::set_class(illustration, class_name, true);
        }
    }

    fn set_title(&self, value: &str, format: ContentFormat) {
        write_content(self.title.as_ref(), value, format);
    }

    fn set_description(&self, value: &str, format: ContentFormat) {
        write_content(self.text.as_ref(), value, format);
    }
}

pub(crate) fn render(
    document: &Document,
    ids: &ResultPageIds,
    tag: Option<&str>,
) -> Option<BreedContent> {
    let tag = tag.filter(|tag| !tag.is_empty())?;
    let presenter = ResultPresenter::new(DomResultView::bind(document, ids));
    let content = presenter.render(Some(tag))?;
    if content.known {
        console::log!("result: breed", content.tag.clone());
    } else {
        console::log!("result: no catalog entry", content.tag.clone());
    }
    if dogbreed_core::illustration_class(tag).is_none() {
        console::warn!("result: tag is not a class token", content.tag.clone());
    }
    Some(content)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    const FIXTURE: &str = r#"
        <div id="image" class="result__image"></div>
        <h1 id="title">Порода</h1>
        <p id="text">Загрузка...</p>
    "#;

    struct Fixture {
        root: HtmlElement,
        document: Document,
    }

    impl Fixture {
        fn new(markup: &str) -> Self {
            set_panic_hook();
            let document = page::document().expect("document available");
            let root = document
                .create_element("div")
                .expect("create fixture root")
                .dyn_into::<HtmlElement>()
                .expect("fixture root is html");
            root.set_inner_html(markup);
            document
                .body()
                .expect("body available")
                .append_child(&root)
                .expect("append fixture");
            Self { root, document }
        }

        fn region(&self, id: &str) -> Element {
            self.document.get_element_by_id(id).expect("fixture region")
        }
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            self.root.remove();
        }
    }

    #[wasm_bindgen_test]
    fn beagle_fills_regions() {
        let fixture = Fixture::new(FIXTURE);
        let content = render(&fixture.document, &ResultPageIds::default(), Some("Beagle"))
            .expect("rendered");
        assert!(content.known);
        assert_eq!(fixture.region("title").text_content().as_deref(), Some("Бигль"));
        assert_eq!(
            fixture.region("text").text_content().as_deref(),
            Some(&*content.description)
        );
        let image = fixture.region("image");
        assert!(image.class_list().contains("Beagle"));
        assert!(image.class_list().contains("result__image"));
    }

    #[wasm_bindgen_test]
    fn unknown_breed_uses_fallback_copy() {
        let fixture = Fixture::new(FIXTURE);
        render(&fixture.document, &ResultPageIds::default(), Some("Poodle")).expect("rendered");
        assert_eq!(fixture.region("title").text_content().as_deref(), Some("Poodle"));
        assert_eq!(
            fixture.region("text").text_content().as_deref(),
            Some("Информация об этой породе пока отсутствует в нашей базе данных, но мы определили её как Poodle")
        );
        assert!(fixture.region("image").class_list().contains("Poodle"));
    }

    #[wasm_bindgen_test]
    fn missing_tag_leaves_template_alone() {
        let fixture = Fixture::new(FIXTURE);
        assert!(render(&fixture.document, &ResultPageIds::default(), None).is_none());
        assert!(render(&fixture.document, &ResultPageIds::default(), Some("")).is_none());
        assert_eq!(fixture.region("title").text_content().as_deref(), Some("Порода"));
        assert_eq!(fixture.region("text").text_content().as_deref(), Some("Загрузка..."));
        assert_eq!(fixture.region("image").class_name(), "result__image");
    }

    #[wasm_bindgen_test]
    fn markup_in_tag_stays_text() {
        let fixture = Fixture::new(FIXTURE);
        let tag = "<b>Poodle</b>";
        render(&fixture.document, &ResultPageIds::default(), Some(tag)).expect("rendered");
        let title = fixture.region("title");
        assert_eq!(title.text_content().as_deref(), Some(tag));
        assert_eq!(title.child_element_count(), 0);
        assert_eq!(fixture.region("text").child_element_count(), 0);
    }

    #[wasm_bindgen_test]
    fn missing_regions_do_not_fail() {
        let fixture = Fixture::new(r#"<h1 id="title"></h1>"#);
        let content = render(&fixture.document, &ResultPageIds::default(), Some("Corgi"))
            .expect("rendered");
        assert_eq!(content.title, "Корги");
        assert_eq!(fixture.region("title").text_content().as_deref(), Some("Корги"));
    }
}
