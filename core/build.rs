use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const TAG_PLACEHOLDER: &str = "{tag}";

#[derive(Deserialize)]
struct CatalogFile {
    fallback_description: String,
    breeds: Vec<BreedEntry>,
}

#[derive(Deserialize)]
struct BreedEntry {
    tag: String,
    title: String,
    description: String,
    #[serde(default)]
    markup: bool,
    #[serde(default)]
    labels: Vec<String>,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=BREED_CATALOG_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let catalog_path = resolve_catalog_path(workspace_root);
    println!("cargo:rerun-if-changed={}", catalog_path.display());

    let contents = fs::read_to_string(&catalog_path).unwrap_or_else(|err| {
        panic!(
            "failed to read breed catalog at {}: {err}",
            catalog_path.display()
        )
    });

    let catalog: CatalogFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse breed catalog at {}: {err}",
            catalog_path.display()
        )
    });

    if catalog.breeds.is_empty() {
        panic!("breed catalog {} has no entries", catalog_path.display());
    }
    if !catalog.fallback_description.contains(TAG_PLACEHOLDER) {
        panic!(
            "fallback_description must contain {} in {}",
            TAG_PLACEHOLDER,
            catalog_path.display()
        );
    }

    validate_entries(&catalog.breeds, &catalog_path);

    let mut output = String::new();
    writeln!(
        &mut output,
        "pub const FALLBACK_DESCRIPTION_TEMPLATE: &str = {};",
        rust_string(&catalog.fallback_description)
    )
    .unwrap();
    writeln!(&mut output).unwrap();
    writeln!(
        &mut output,
        "pub const BREED_CATALOG: &[BreedCatalogEntry] = &["
    )
    .unwrap();

    for entry in &catalog.breeds {
        let format = if entry.markup {
            "ContentFormat::Markup"
        } else {
            "ContentFormat::Text"
        };
        let labels = entry
            .labels
            .iter()
            .map(|label| rust_string(label))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(&mut output, "    BreedCatalogEntry {{").unwrap();
        writeln!(&mut output, "        tag: {},", rust_string(&entry.tag)).unwrap();
        writeln!(&mut output, "        title: {},", rust_string(&entry.title)).unwrap();
        writeln!(
            &mut output,
            "        description: {},",
            rust_string(&entry.description)
        )
        .unwrap();
        writeln!(&mut output, "        format: {},", format).unwrap();
        writeln!(&mut output, "        labels: &[{}],", labels).unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }

    writeln!(&mut output, "];").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("breed_catalog.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_catalog_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("BREED_CATALOG_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("breeds/catalog.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn validate_entries(entries: &[BreedEntry], catalog_path: &Path) {
    let mut tags = HashSet::new();
    let mut labels = HashSet::new();

    for entry in entries {
        if entry.tag.is_empty() {
            panic!("breed tag cannot be empty in {}", catalog_path.display());
        }
        if entry.tag.chars().any(char::is_whitespace) {
            panic!(
                "breed tag '{}' cannot contain whitespace in {}",
                entry.tag,
                catalog_path.display()
            );
        }
        if entry.title.trim().is_empty() {
            panic!(
                "breed '{}' has an empty title in {}",
                entry.tag,
                catalog_path.display()
            );
        }
        if entry.description.trim().is_empty() {
            panic!(
                "breed '{}' has an empty description in {}",
                entry.tag,
                catalog_path.display()
            );
        }
        if !tags.insert(entry.tag.clone()) {
            panic!(
                "duplicate breed tag '{}' in {}",
                entry.tag,
                catalog_path.display()
            );
        }
        for label in &entry.labels {
            if label.trim().is_empty() {
                panic!(
                    "breed '{}' has an empty classifier label in {}",
                    entry.tag,
                    catalog_path.display()
                );
            }
            if !labels.insert(label.clone()) {
                panic!(
                    "classifier label '{}' is mapped twice in {}",
                    label,
                    catalog_path.display()
                );
            }
        }
    }
}
