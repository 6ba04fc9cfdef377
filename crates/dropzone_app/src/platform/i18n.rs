//! Bundled dictionaries and dictionary files.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use dropzone_core::Dictionary;
use dropzone_logging::dz_warn;

const EN: &[(&str, &str)] = &[
    ("title", "Drop2Print"),
    ("drop_title", "Drop PDF files here"),
    ("drop_sub", "Files will be uploaded and sent to print automatically."),
    ("drop_hint", "Drop PDF files here or click to choose."),
    ("recent_jobs", "Recent jobs"),
    ("uploading", "Uploading {filename}..."),
    ("status", "Job #{id} ({filename}) status: {status}"),
    ("jobs_empty", "No jobs."),
    ("loading", "Loading..."),
];

const PL: &[(&str, &str)] = &[
    ("title", "Drop2Print"),
    ("drop_title", "Przeciągnij pliki PDF"),
    ("drop_sub", "Pliki zostaną automatycznie wysłane do druku."),
    ("drop_hint", "Upuść pliki PDF tutaj lub kliknij, aby wybrać."),
    ("recent_jobs", "Ostatnie zadania"),
    ("uploading", "Wysyłanie {filename}..."),
    ("status", "Zadanie #{id} ({filename}) status: {status}"),
    ("jobs_empty", "Brak zadań."),
    ("loading", "Ładowanie..."),
];

/// Returns the bundled dictionary for `lang`, falling back to English.
pub fn bundled(lang: &str) -> Dictionary {
    let table = match lang {
        "en" => EN,
        "pl" => PL,
        other => {
            dz_warn!("No bundled dictionary for {:?}; using en", other);
            EN
        }
    };
    table.iter().copied().collect()
}

/// Reads a dictionary from a `.ron` or `.json` file.
pub fn load_file(path: &Path) -> anyhow::Result<Dictionary> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading dictionary {}", path.display()))?;
    let dictionary = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content)?,
        Some("ron") => ron::from_str(&content)?,
        _ => bail!("unsupported dictionary format: {}", path.display()),
    };
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::Builder;

    use super::*;

    #[test]
    fn bundled_tables_share_widget_keys() {
        for lang in ["en", "pl"] {
            let dictionary = bundled(lang);
            for key in ["uploading", "status", "loading", "jobs_empty"] {
                assert!(dictionary.get(key).is_some(), "{lang} lacks {key}");
            }
        }
    }

    #[test]
    fn unknown_lang_falls_back_to_english() {
        assert_eq!(bundled("de"), bundled("en"));
    }

    #[test]
    fn json_dictionary_file_is_loaded() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"loading": "Chargement..."}"#).unwrap();

        let dictionary = load_file(file.path()).unwrap();
        assert_eq!(dictionary.get("loading"), Some("Chargement..."));
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn ron_dictionary_file_is_loaded() {
        let mut file = Builder::new().suffix(".ron").tempfile().unwrap();
        file.write_all(br#"{"jobs_empty": "Nichts."}"#).unwrap();

        let dictionary = load_file(file.path()).unwrap();
        assert_eq!(dictionary.get("jobs_empty"), Some("Nichts."));
    }
}
