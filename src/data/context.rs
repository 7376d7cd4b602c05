// ============================================================
// Layer 4 — Pipeline Context
// ============================================================
// Dictionaries shared by every language pair of a run:
//   - the human annotations of pivot sentences
//   - the derived → pivot reconstruction dictionary
//
// Both are loaded once, before any pair is aligned, and only
// read afterwards. The context is Sync, so alignments of
// different pairs can borrow it from several threads at once.

use anyhow::Result;

use crate::data::dictionaries::{
    annotation_dict, pivot_reconstruction_dict, AnnotationDict, ReconstructionDict,
};
use crate::data::loader::LoadReport;
use crate::infra::layout::InputLayout;

#[derive(Debug, Clone)]
pub struct PipelineContext {
    pub layout:            InputLayout,
    pub pivot_annotations: AnnotationDict,
    pub reconstruction:    ReconstructionDict,
    /// Reports for the two shared files, in load order
    pub reports:           Vec<LoadReport>,
}

impl PipelineContext {
    /// Load the shared dictionaries described by `layout`.
    pub fn load(layout: InputLayout) -> Result<Self> {
        tracing::info!(
            "Loading pivot annotations from '{}'",
            layout.pivot_annotations_path().display()
        );
        let pivot = annotation_dict(&layout.pivot_annotations_path())?;

        tracing::info!(
            "Loading '{}' reconstruction from '{}'",
            layout.special_source,
            layout.reconstruction_path().display()
        );
        let recon = pivot_reconstruction_dict(&layout.reconstruction_path())?;

        Ok(Self {
            layout,
            pivot_annotations: pivot.dict,
            reconstruction:    recon.dict,
            reports:           vec![pivot.report, recon.report],
        })
    }
}
