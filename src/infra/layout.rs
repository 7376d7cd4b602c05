// ============================================================
// Layer 6 — Input Layout
// ============================================================
// Where the input files live, relative to a data directory.
//
// The defaults reproduce the layout the corpus was built from:
//
//   <data_dir>/
//     AnnotatedData/en-annotated.tsv              ← human annotations
//     Projections/{lang}-projections.tsv          ← projected annotations
//     subtitle-retrieval/students/pairs-{lang}.txt ← pivot alignments
//
// `{lang}` in a template is replaced by a language code.
// The layout is serialisable so a run can be pointed at a
// different tree with a JSON file:
//
//   { "data_dir": "/corpora/subs", "special_source": "da", ... }
//
// Reference: Rust Book §12 (I/O and File Handling)
//            serde_json documentation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

const LANG_PLACEHOLDER: &str = "{lang}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLayout {
    /// Root every other path is resolved against
    pub data_dir: PathBuf,

    /// Code of the pivot language, used for the first output column
    pub pivot_lang: String,

    /// Human-annotated pivot sentences
    pub pivot_annotations: String,

    /// Projected annotations, templated on `{lang}`
    pub projections: String,

    /// Pivot alignment pairs, templated on `{lang}`
    pub pairs: String,

    /// Source subset whose base sentences are not in the pivot
    /// language. Its own pairs file provides the reconstruction.
    pub special_source: String,
}

impl Default for InputLayout {
    fn default() -> Self {
        Self {
            data_dir:          PathBuf::from("."),
            pivot_lang:        "en".to_string(),
            pivot_annotations: "AnnotatedData/en-annotated.tsv".to_string(),
            projections:       "Projections/{lang}-projections.tsv".to_string(),
            pairs:             "subtitle-retrieval/students/pairs-{lang}.txt".to_string(),
            special_source:    "da".to_string(),
        }
    }
}

impl InputLayout {
    /// Default layout rooted at `data_dir`
    pub fn rooted_at(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Read a layout from a JSON file. Missing fields take their defaults.
    pub fn load_json(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Cannot open layout config '{}'", path.display()))?;

        let layout: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid layout config '{}'", path.display()))?;

        tracing::info!("Loaded input layout from '{}'", path.display());
        Ok(layout)
    }

    pub fn pivot_annotations_path(&self) -> PathBuf {
        self.data_dir.join(&self.pivot_annotations)
    }

    pub fn projections_path(&self, lang: &str) -> PathBuf {
        self.data_dir.join(self.projections.replace(LANG_PLACEHOLDER, lang))
    }

    pub fn pairs_path(&self, lang: &str) -> PathBuf {
        self.data_dir.join(self.pairs.replace(LANG_PLACEHOLDER, lang))
    }

    /// The special source's pairs file
    pub fn reconstruction_path(&self) -> PathBuf {
        self.pairs_path(&self.special_source)
    }
}
