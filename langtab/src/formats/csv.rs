//! Support for the CSV translations table.
//!
//! The first row is a header: one key column plus one column per locale
//! identifier. Cells are trimmed, and empty cells are dropped at load time so
//! the merge step falls back to the base text without ever seeing an empty
//! translation.

use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, Cursor, Read},
    path::Path,
};

use crate::error::Error;

/// Recognized key-column header names, in precedence order.
const KEY_COLUMNS: [&str; 2] = ["key", "name"];

/// One locale column from the table: the locale identifier plus its
/// key-to-text map. Only non-empty trimmed cells are recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTranslations {
    pub locale: String,
    pub translations: HashMap<String, String>,
}

/// A parsed translations table: one entry per locale column, in header order.
///
/// A locale column whose cells are all empty still appears here with an
/// empty map, so its output file is generated entirely from fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationTable {
    pub locales: Vec<LocaleTranslations>,
}

impl TranslationTable {
    /// Parse from any reader.
    ///
    /// Fails with [`Error::InvalidTable`] when the table has no data rows or
    /// no recognized key column. The empty check runs first, so a header-only
    /// file reports as empty even when its header lacks a key column.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = rdr.headers().map_err(Error::CsvParse)?.clone();
        let mut records = Vec::new();
        for record in rdr.records() {
            records.push(record.map_err(Error::CsvParse)?);
        }
        if records.is_empty() {
            return Err(Error::invalid_table("translations CSV is empty"));
        }

        let key_index = KEY_COLUMNS
            .iter()
            .find_map(|name| headers.iter().position(|h| h == *name))
            .ok_or_else(|| {
                Error::invalid_table(
                    "translations CSV must contain a 'key' column (string resource name)",
                )
            })?;

        // Every non-key header is a locale; duplicates collapse into one.
        let mut locales: Vec<LocaleTranslations> = Vec::new();
        let mut column_to_locale: Vec<Option<usize>> = vec![None; headers.len()];
        for (index, header) in headers.iter().enumerate() {
            if index == key_index {
                continue;
            }
            let position = match locales.iter().position(|l| l.locale == header) {
                Some(position) => position,
                None => {
                    locales.push(LocaleTranslations {
                        locale: header.to_string(),
                        translations: HashMap::new(),
                    });
                    locales.len() - 1
                }
            };
            column_to_locale[index] = Some(position);
        }

        for record in &records {
            let key = record.get(key_index).unwrap_or("").trim();
            if key.is_empty() {
                continue;
            }
            for (index, slot) in column_to_locale.iter().enumerate() {
                if let Some(position) = slot {
                    let value = record.get(index).unwrap_or("").trim();
                    // Last column for a locale wins; an empty cell clears any
                    // earlier duplicate-column value for this key.
                    if value.is_empty() {
                        locales[*position].translations.remove(key);
                    } else {
                        locales[*position]
                            .translations
                            .insert(key.to_string(), value.to_string());
                    }
                }
            }
        }

        Ok(TranslationTable { locales })
    }

    /// Parse from file path, decoding through BOM detection (spreadsheet
    /// exports are often UTF-8-with-BOM or UTF-16).
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path).map_err(Error::Io)?;
        // Auto-detect a BOM and decode to UTF-8; plain UTF-8 passes through
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded).map_err(Error::Io)?;

        Self::from_str(&decoded)
    }

    /// Parse from a string.
    pub fn from_str(s: &str) -> Result<Self, Error> {
        Self::from_reader(Cursor::new(s))
    }

    /// Returns the translations loaded for one locale, if the table has a
    /// column for it.
    pub fn translations_for(&self, locale: &str) -> Option<&HashMap<String, String>> {
        self.locales
            .iter()
            .find(|l| l.locale == locale)
            .map(|l| &l.translations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_table() {
        let content = "key,fr,es\nhello,Bonjour,Hola\nbye,Au revoir,Adiós\n";
        let table = TranslationTable::from_str(content).unwrap();
        let locales: Vec<&str> = table.locales.iter().map(|l| l.locale.as_str()).collect();
        assert_eq!(locales, vec!["fr", "es"]);
        assert_eq!(
            table.translations_for("fr").unwrap().get("hello"),
            Some(&"Bonjour".to_string())
        );
        assert_eq!(
            table.translations_for("es").unwrap().get("bye"),
            Some(&"Adiós".to_string())
        );
    }

    #[test]
    fn test_locales_follow_header_order() {
        let content = "key,de,fr,es\nhello,Hallo,Bonjour,Hola\n";
        let table = TranslationTable::from_str(content).unwrap();
        let locales: Vec<&str> = table.locales.iter().map(|l| l.locale.as_str()).collect();
        assert_eq!(locales, vec!["de", "fr", "es"]);
    }

    #[test]
    fn test_name_header_accepted_as_key_column() {
        let content = "name,fr\nhello,Bonjour\n";
        let table = TranslationTable::from_str(content).unwrap();
        let locales: Vec<&str> = table.locales.iter().map(|l| l.locale.as_str()).collect();
        assert_eq!(locales, vec!["fr"]);
        assert_eq!(
            table.translations_for("fr").unwrap().get("hello"),
            Some(&"Bonjour".to_string())
        );
    }

    #[test]
    fn test_key_header_takes_precedence_over_name() {
        // With both headers present, 'key' is the key column and 'name'
        // becomes an ordinary locale column.
        let content = "name,key,fr\nNom,hello,Bonjour\n";
        let table = TranslationTable::from_str(content).unwrap();
        let locales: Vec<&str> = table.locales.iter().map(|l| l.locale.as_str()).collect();
        assert_eq!(locales, vec!["name", "fr"]);
        assert_eq!(
            table.translations_for("name").unwrap().get("hello"),
            Some(&"Nom".to_string())
        );
        assert_eq!(
            table.translations_for("fr").unwrap().get("hello"),
            Some(&"Bonjour".to_string())
        );
    }

    #[test]
    fn test_empty_file_is_invalid() {
        let result = TranslationTable::from_str("");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty"));
    }

    #[test]
    fn test_header_only_file_is_invalid() {
        // The empty check runs before the key-column check.
        let result = TranslationTable::from_str("fr,es\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty"));
    }

    #[test]
    fn test_missing_key_column_is_invalid() {
        let result = TranslationTable::from_str("fr,es\nBonjour,Hola\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("'key' column"));
    }

    #[test]
    fn test_rows_with_empty_key_are_skipped() {
        let content = "key,fr\n,Bonjour\n   ,Salut\nhello,Coucou\n";
        let table = TranslationTable::from_str(content).unwrap();
        let fr = table.translations_for("fr").unwrap();
        assert_eq!(fr.len(), 1);
        assert_eq!(fr.get("hello"), Some(&"Coucou".to_string()));
    }

    #[test]
    fn test_empty_cells_are_omitted() {
        let content = "key,fr,es\nhello,Bonjour,\nbye,,   \n";
        let table = TranslationTable::from_str(content).unwrap();
        assert_eq!(table.translations_for("es").unwrap().get("hello"), None);
        assert_eq!(table.translations_for("fr").unwrap().get("bye"), None);
        assert_eq!(table.translations_for("es").unwrap().get("bye"), None);
        assert_eq!(
            table.translations_for("fr").unwrap().get("hello"),
            Some(&"Bonjour".to_string())
        );
    }

    #[test]
    fn test_keys_and_cells_are_trimmed() {
        let content = "key,fr\n  hello  ,  Bonjour  \n";
        let table = TranslationTable::from_str(content).unwrap();
        assert_eq!(
            table.translations_for("fr").unwrap().get("hello"),
            Some(&"Bonjour".to_string())
        );
    }

    #[test]
    fn test_all_empty_locale_column_is_still_listed() {
        let content = "key,fr,es\nhello,Bonjour,\n";
        let table = TranslationTable::from_str(content).unwrap();
        let es = table.translations_for("es").unwrap();
        assert!(es.is_empty());
    }

    #[test]
    fn test_quoted_cells_with_commas() {
        let content = "key,fr\ngreeting,\"Bonjour, tout le monde\"\n";
        let table = TranslationTable::from_str(content).unwrap();
        assert_eq!(
            table.translations_for("fr").unwrap().get("greeting"),
            Some(&"Bonjour, tout le monde".to_string())
        );
    }

    #[test]
    fn test_ragged_row_is_parse_error() {
        let content = "key,fr\nhello,Bonjour,extra\n";
        let result = TranslationTable::from_str(content);
        assert!(matches!(result, Err(Error::CsvParse(_))));
    }

    #[test]
    fn test_duplicate_locale_headers_collapse() {
        let content = "key,fr,fr\nhello,Salut,Bonjour\n";
        let table = TranslationTable::from_str(content).unwrap();
        assert_eq!(table.locales.len(), 1);
        // The later column wins per key.
        assert_eq!(
            table.translations_for("fr").unwrap().get("hello"),
            Some(&"Bonjour".to_string())
        );
    }

    #[test]
    fn test_duplicate_locale_headers_empty_last_cell_falls_back() {
        // The last column wins even when its cell is empty, so the key is
        // left untranslated and the merge step uses the base text.
        let content = "key,fr,fr\nhello,Salut,\n";
        let table = TranslationTable::from_str(content).unwrap();
        assert_eq!(table.translations_for("fr").unwrap().get("hello"), None);
    }

    #[test]
    fn test_read_from_strips_utf8_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translations.csv");
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"key,fr\nhello,Bonjour\n");
        std::fs::write(&path, bytes).unwrap();

        let table = TranslationTable::read_from(&path).unwrap();
        let locales: Vec<&str> = table.locales.iter().map(|l| l.locale.as_str()).collect();
        assert_eq!(locales, vec!["fr"]);
        assert_eq!(
            table.translations_for("fr").unwrap().get("hello"),
            Some(&"Bonjour".to_string())
        );
    }

    #[test]
    fn test_read_from_decodes_utf16_le() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translations.csv");
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "key,fr\nhello,Bonjour\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        std::fs::write(&path, bytes).unwrap();

        let table = TranslationTable::read_from(&path).unwrap();
        assert_eq!(
            table.translations_for("fr").unwrap().get("hello"),
            Some(&"Bonjour".to_string())
        );
    }
}
