//! Shared constants for the gene finder.

// ---- Document tags ----

/// Tag of the typographically marked spans that carry gene candidates.
pub const ITALIC_TAG: &str = "italic";

/// Tag of the article body element.
pub const BODY_TAG: &str = "body";

/// Tag of a section element.
pub const SECTION_TAG: &str = "sec";

/// Tag of the abstract element in the article front matter.
pub const ABSTRACT_TAG: &str = "abstract";

// ---- Confidence metric keys ----

/// Occurrences normalized by all relevant gene mentions in the document.
pub const METRIC_GENES: &str = "genes";

/// Occurrences normalized by the document word count.
pub const METRIC_WORD: &str = "word";

// ---- Extraction ----

/// Maximum number of trailing characters kept by a short snippet.
pub const SHORT_SNIPPET_CHARS: usize = 100;

/// Candidates must be strictly longer than this many characters.
pub const MIN_CANDIDATE_CHARS: usize = 1;

// ---- Model rescoring ----

/// Label the sequence classifier emits for "paper should be tagged with gene".
pub const DEFAULT_POSITIVE_LABEL: &str = "LABEL_1";

// ---- Configuration ----

/// Project-level configuration file name.
pub const CONFIG_FILE_NAME: &str = "flyhelper.toml";

/// Default exception list location, relative to the working directory.
pub const DEFAULT_EXCEPTIONS_PATH: &str = "resources/exceptions.txt";

/// Default prebuilt gene dictionary location.
pub const DEFAULT_GENE_DICTIONARY_PATH: &str = "resources/gene_dict.json";

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "FLYHELPER_LOG";

/// Log filter used when `FLYHELPER_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "flyhelper=info";
