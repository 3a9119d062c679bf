//! All supported file formats for langtab.
//!
//! This module re-exports the main types for each format: the Android
//! `strings.xml` document model and the CSV translations table.

pub mod android_strings;
pub mod csv;

// Reexporting the formats for easier access
pub use android_strings::{Format as AndroidStringsFormat, StringResource};
pub use csv::{LocaleTranslations, TranslationTable};
