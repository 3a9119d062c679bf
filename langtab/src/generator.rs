//! Per-locale resource generation.
//!
//! Merges the base document's defaults with one locale's translations and
//! writes a `values-<locale>/strings.xml` file per table column.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::Error,
    formats::{
        android_strings::{Format, StringResource},
        csv::TranslationTable,
    },
    traits::Parser,
};

/// File name of every generated resource document.
const STRINGS_FILE: &str = "strings.xml";

/// Resource directory name for one locale, e.g. `values-fr`.
pub fn values_dir_name(locale: &str) -> String {
    format!("values-{locale}")
}

/// Merges base entries with one locale's translations.
///
/// Per key, in base order: the translated text wins when it is present and
/// non-empty; otherwise the base value is kept (which may itself be empty).
/// Table keys absent from `defaults` contribute nothing.
pub fn merge_strings(
    defaults: &[StringResource],
    translations: &HashMap<String, String>,
) -> Vec<StringResource> {
    defaults
        .iter()
        .map(|sr| {
            let value = match translations.get(&sr.name) {
                Some(text) if !text.is_empty() => text.clone(),
                _ => sr.value.clone(),
            };
            StringResource {
                name: sr.name.clone(),
                value,
            }
        })
        .collect()
}

/// Writes one `strings.xml` per locale in the table under `res_dir`.
///
/// Returns the written paths in table column order. `values-<locale>`
/// directories are created as needed and existing files are overwritten.
/// Identical inputs produce byte-identical files.
pub fn generate<P: AsRef<Path>>(
    res_dir: P,
    base: &Format,
    table: &TranslationTable,
) -> Result<Vec<PathBuf>, Error> {
    let mut written = Vec::with_capacity(table.locales.len());

    for column in &table.locales {
        let localized = Format {
            strings: merge_strings(&base.strings, &column.translations),
        };

        let dir = res_dir.as_ref().join(values_dir_name(&column.locale));
        fs::create_dir_all(&dir)?;

        let path = dir.join(STRINGS_FILE);
        localized.write_to(&path)?;
        written.push(path);
    }

    Ok(written)
}
