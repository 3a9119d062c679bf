#![forbid(unsafe_code)]
//! Generate per-locale Android `strings.xml` files from a CSV translation table.
//!
//! The base `values/strings.xml` is the authority: it defines the key set, the
//! entry order, and the fallback text. The table contributes one column per
//! locale; a non-empty cell overrides the base text for its key, an empty or
//! missing cell falls back to it.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langtab::{AndroidStringsFormat, TranslationTable, generator, traits::Parser};
//!
//! let base = AndroidStringsFormat::read_from("app/src/main/res/values/strings.xml")?;
//! let table = TranslationTable::read_from("app/translations/sample_translations.csv")?;
//!
//! for path in generator::generate("app/src/main/res", &base, &table)? {
//!     println!("Wrote {}", path.display());
//! }
//! # Ok::<(), langtab::Error>(())
//! ```
//!
//! # Guarantees
//!
//! - Every generated document carries exactly the base document's key set, in
//!   the base document's order; only the text differs per locale.
//! - Generation is deterministic: unchanged inputs produce byte-identical
//!   output files.
//! - Keys present only in the table are never written.

pub mod error;
pub mod formats;
pub mod generator;
pub mod traits;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    formats::{AndroidStringsFormat, LocaleTranslations, StringResource, TranslationTable},
};
