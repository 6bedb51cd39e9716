use std::borrow::Cow;

pub const TAG_PLACEHOLDER: &str = "{tag}";

/// How display copy is written into the page. Anything not explicitly
/// marked as markup is inserted as plain text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentFormat {
    #[default]
    Text,
    Markup,
}

#[derive(Clone, Copy, Debug)]
pub struct BreedCatalogEntry {
    pub tag: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub format: ContentFormat,
    pub labels: &'static [&'static str],
}

include!(concat!(env!("OUT_DIR"), "/breed_catalog.rs"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreedContent {
    pub tag: String,
    pub title: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub format: ContentFormat,
    pub known: bool,
}

impl BreedContent {
    fn from_entry(entry: &'static BreedCatalogEntry) -> Self {
        Self {
            tag: entry.tag.to_string(),
            title: Cow::Borrowed(entry.title),
            description: Cow::Borrowed(entry.description),
            format: entry.format,
            known: true,
        }
    }

    fn fallback(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            title: Cow::Owned(tag.to_string()),
            description: Cow::Owned(fallback_description(tag)),
            format: ContentFormat::Text,
            known: false,
        }
    }
}

pub fn breed_by_tag(tag: &str) -> Option<&'static BreedCatalogEntry> {
    BREED_CATALOG.iter().find(|entry| entry.tag == tag)
}

/// Maps a raw classifier label (e.g. `Siberian_husky`) onto its catalog entry.
pub fn breed_by_label(label: &str) -> Option<&'static BreedCatalogEntry> {
    let trimmed = label.trim();
    BREED_CATALOG
        .iter()
        .find(|entry| entry.labels.iter().any(|candidate| *candidate == trimmed))
}

/// Total lookup: unknown tags resolve to content built from the tag itself.
pub fn resolve_breed(tag: &str) -> BreedContent {
    match breed_by_tag(tag) {
        Some(entry) => BreedContent::from_entry(entry),
        None => BreedContent::fallback(tag),
    }
}

pub fn fallback_description(tag: &str) -> String {
    FALLBACK_DESCRIPTION_TEMPLATE.replace(TAG_PLACEHOLDER, tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_every_known_breed() {
        let tags: Vec<&str> = BREED_CATALOG.iter().map(|entry| entry.tag).collect();
        assert_eq!(
            tags,
            vec![
                "Beagle",
                "Corgi",
                "Blenheim_spaniel",
                "Dalmatian",
                "German_shepherd",
                "Huskies",
                "Labrador",
                "Shar_pei",
            ]
        );
        assert!(BREED_CATALOG
            .iter()
            .all(|entry| entry.format == ContentFormat::Text));
    }

    #[test]
    fn titles_match_display_copy() {
        let expected = [
            ("Beagle", "Бигль"),
            ("Corgi", "Корги"),
            ("Blenheim_spaniel", "Спаниэль"),
            ("Dalmatian", "Далматин"),
            ("German_shepherd", "Овчарка"),
            ("Huskies", "Хаски"),
            ("Labrador", "Лабрадор"),
            ("Shar_pei", "Шарпей"),
        ];
        for (tag, title) in expected {
            let entry = breed_by_tag(tag).expect("known tag");
            assert_eq!(entry.title, title);
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(breed_by_tag("Beagle").is_some());
        assert!(breed_by_tag("beagle").is_none());
        assert!(breed_by_tag("BEAGLE").is_none());
        assert!(breed_by_tag(" Beagle").is_none());
    }

    #[test]
    fn resolve_known_tag_uses_entry() {
        let content = resolve_breed("Dalmatian");
        let entry = breed_by_tag("Dalmatian").expect("known tag");
        assert!(content.known);
        assert_eq!(content.tag, "Dalmatian");
        assert_eq!(content.title, entry.title);
        assert_eq!(content.description, entry.description);
    }

    #[test]
    fn resolve_unknown_tag_falls_back_to_tag() {
        let content = resolve_breed("Poodle");
        assert!(!content.known);
        assert_eq!(content.title, "Poodle");
        assert_eq!(
            content.description,
            "Информация об этой породе пока отсутствует в нашей базе данных, но мы определили её как Poodle"
        );
        assert_eq!(content.format, ContentFormat::Text);
    }

    #[test]
    fn fallback_keeps_markup_characters_literal() {
        let tag = "<b>x</b>";
        let content = resolve_breed(tag);
        assert_eq!(content.title, tag);
        assert!(content.description.ends_with(tag));
        assert_eq!(content.format, ContentFormat::Text);
    }

    #[test]
    fn fallback_does_not_expand_placeholder_in_tag() {
        let description = fallback_description("{tag}");
        assert!(description.ends_with("как {tag}"));
        assert_eq!(description.matches(TAG_PLACEHOLDER).count(), 1);
    }

    #[test]
    fn classifier_labels_fold_onto_tags() {
        let cases = [
            ("beagle", "Beagle"),
            ("Pembroke", "Corgi"),
            ("Cardigan", "Corgi"),
            ("Blenheim_spaniel", "Blenheim_spaniel"),
            ("dalmatian", "Dalmatian"),
            ("German_shepherd", "German_shepherd"),
            ("Siberian_husky", "Huskies"),
            ("Labrador_retriever", "Labrador"),
            ("shar_pei", "Shar_pei"),
        ];
        for (label, tag) in cases {
            let entry = breed_by_label(label).expect("mapped label");
            assert_eq!(entry.tag, tag, "label {label}");
        }
        assert!(breed_by_label("Pomeranian").is_none());
    }
}
