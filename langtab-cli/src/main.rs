use std::path::{Path, PathBuf};

use clap::Parser;
use langtab::traits::Parser as _;
use langtab::{AndroidStringsFormat, Error, TranslationTable, generator};

/// Base-language resource file: defines the key set and fallback text.
const BASE_STRINGS: &str = "app/src/main/res/values/strings.xml";
/// Root of the Android resource tree the per-locale files are written under.
const RES_DIR: &str = "app/src/main/res";
/// Table used when no path argument is given.
const DEFAULT_TABLE: &str = "app/translations/sample_translations.csv";

/// Generate per-locale strings.xml files from a CSV translation table.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the translations CSV (one 'key' column, one column per locale)
    #[arg(default_value = DEFAULT_TABLE)]
    table: PathBuf,
}

fn main() {
    let args = Args::parse();

    if !Path::new(BASE_STRINGS).is_file() {
        eprintln!("Error: base strings.xml not found at {BASE_STRINGS}");
        std::process::exit(1);
    }
    if !args.table.is_file() {
        eprintln!(
            "Error: translations CSV not found at {}",
            args.table.display()
        );
        std::process::exit(1);
    }

    if let Err(e) = run(&args.table) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(table_path: &Path) -> Result<(), Error> {
    let base = AndroidStringsFormat::read_from(BASE_STRINGS)?;
    let table = TranslationTable::read_from(table_path)?;

    for path in generator::generate(RES_DIR, &base, &table)? {
        println!("Wrote {}", path.display());
    }
    println!("Done.");
    Ok(())
}
