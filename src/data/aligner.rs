// ============================================================
// Layer 4 — Corpus Aligner
// ============================================================
// Joins two languages' pivot → target dictionaries on the pivot
// sentence and keeps every triple the resolver can annotate.
//
//   pairs-de:  "Hello" → "Hallo"          ┐
//   pairs-fr:  "Hello" → "Bonjour"        ┘ → ("Hello", "Hallo", "Bonjour")
//
// Steps for one (lang1, lang2) pair:
//   1. Load pivot → target for lang1 and for lang2
//   2. Load projected annotations for lang1 and for lang2
//   3. Walk the pivot keys of the smaller dictionary
//   4. For keys present in both, resolve an annotation
//   5. Keep the resolved triples, count the rest
//
// Output order is the insertion order of the dictionary walked
// in step 3. lang1's dictionary is walked only when it is
// strictly smaller; on equal sizes lang2's is walked.
//
// Reference: Rust Book §8 (Hash Maps)
//            indexmap documentation (insertion order)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::context::PipelineContext;
use crate::data::dictionaries::{annotation_dict, pivot_to_target_dict, PivotTargetDict};
use crate::data::loader::LoadReport;
use crate::data::resolver::LabelResolver;
use crate::domain::record::{AlignedRecord, Resolution};
use crate::domain::traits::AnnotationLookup;

/// Counters for one aligned language pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentReport {
    pub lang1: String,
    pub lang2: String,

    /// Pivot sentences with a target in lang1
    pub pivots_lang1: usize,

    /// Pivot sentences with a target in lang2
    pub pivots_lang2: usize,

    /// Pivot sentences with targets in both languages
    pub overlap: usize,

    /// Triples annotated from the human pivot annotation
    pub direct: usize,

    /// Triples annotated from agreeing projections
    pub projected: usize,

    /// Triples left out for lack of an agreeing annotation
    pub unresolved: usize,

    /// How each input file loaded: the shared files first, then
    /// pairs and projections for lang1 and lang2
    pub loads: Vec<LoadReport>,
}

/// The corpus for one language pair.
#[derive(Debug, Clone)]
pub struct Alignment {
    pub records: Vec<AlignedRecord>,
    pub report:  AlignmentReport,
}

/// Aligns language pairs against a shared context.
pub struct CorpusAligner<'a> {
    ctx: &'a PipelineContext,
}

impl<'a> CorpusAligner<'a> {
    pub fn new(ctx: &'a PipelineContext) -> Self {
        Self { ctx }
    }

    /// Build the trilingual corpus for `lang1` and `lang2`.
    /// Fails only when one of the input files cannot be read.
    pub fn align(&self, lang1: &str, lang2: &str) -> Result<Alignment> {
        let layout = &self.ctx.layout;
        tracing::info!("Aligning {} / {} / {}", layout.pivot_lang, lang1, lang2);

        let pairs1 = pivot_to_target_dict(
            &layout.pairs_path(lang1),
            &layout.special_source,
            &self.ctx.reconstruction,
        )?;
        let pairs2 = pivot_to_target_dict(
            &layout.pairs_path(lang2),
            &layout.special_source,
            &self.ctx.reconstruction,
        )?;

        let projected1 = annotation_dict(&layout.projections_path(lang1))?;
        let projected2 = annotation_dict(&layout.projections_path(lang2))?;

        let resolver = LabelResolver::new(
            &self.ctx.pivot_annotations,
            &projected1.dict,
            &projected2.dict,
        );

        let mut alignment = align_dicts(&pairs1.dict, &pairs2.dict, &resolver);
        alignment.report.lang1 = lang1.to_string();
        alignment.report.lang2 = lang2.to_string();
        alignment.report.loads = self
            .ctx
            .reports
            .iter()
            .cloned()
            .chain([pairs1.report, pairs2.report, projected1.report, projected2.report])
            .collect();

        tracing::info!(
            "{}/{}: {} shared pivots → {} records ({} direct, {} projected, {} unresolved)",
            lang1,
            lang2,
            alignment.report.overlap,
            alignment.records.len(),
            alignment.report.direct,
            alignment.report.projected,
            alignment.report.unresolved,
        );

        Ok(alignment)
    }
}

/// Join two pivot → target dictionaries and resolve each shared pivot.
///
/// `pairs1` always supplies the first target sentence and `pairs2`
/// the second, whichever of the two is walked.
pub fn align_dicts<P, A, B>(
    pairs1:   &PivotTargetDict,
    pairs2:   &PivotTargetDict,
    resolver: &LabelResolver<P, A, B>,
) -> Alignment
where
    P: AnnotationLookup,
    A: AnnotationLookup,
    B: AnnotationLookup,
{
    let mut report = AlignmentReport {
        pivots_lang1: pairs1.len(),
        pivots_lang2: pairs2.len(),
        ..AlignmentReport::default()
    };
    let mut records = Vec::new();

    let (walked, looked_up) = if pairs1.len() < pairs2.len() {
        (pairs1, pairs2)
    } else {
        (pairs2, pairs1)
    };

    for pivot in walked.keys() {
        if !looked_up.contains_key(pivot) {
            continue;
        }
        report.overlap += 1;

        // both lookups succeed: the key is in walked and in looked_up
        let (Some(target1), Some(target2)) = (pairs1.get(pivot), pairs2.get(pivot)) else {
            continue;
        };

        match resolver.resolve(pivot, target1, target2) {
            Some((annotation, resolution)) => {
                match resolution {
                    Resolution::Direct    => report.direct += 1,
                    Resolution::Projected => report.projected += 1,
                }
                records.push(AlignedRecord::new(
                    pivot.as_str(),
                    target1.as_str(),
                    target2.as_str(),
                    annotation.clone(),
                    resolution,
                ));
            }
            None => {
                tracing::trace!("No agreeing annotation for pivot '{}'", pivot);
                report.unresolved += 1;
            }
        }
    }

    Alignment { records, report }
}
