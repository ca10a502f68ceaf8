//! How to register a judging axis
//!
//! 1) Implement `AxisScorer` for your type in its module.
//! 2) Add a new `JudgeFactory` entry to the static list with stable `name` and `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: built-in judges must score the same inputs identically.

use crate::judges::humor::HumorJudge;
use crate::judges::originality::OriginalityJudge;
use crate::judges::relevance::RelevanceJudge;
use crate::judges::trait_def::AxisScorer;

/// Factory definition for constructing axis judges.
pub struct JudgeFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn() -> Box<dyn AxisScorer + Send + Sync>,
}

static JUDGE_FACTORIES: &[JudgeFactory] = &[
    JudgeFactory {
        name: HumorJudge::NAME,
        version: HumorJudge::VERSION,
        make: make_humor,
    },
    JudgeFactory {
        name: RelevanceJudge::NAME,
        version: RelevanceJudge::VERSION,
        make: make_relevance,
    },
    JudgeFactory {
        name: OriginalityJudge::NAME,
        version: OriginalityJudge::VERSION,
        make: make_originality,
    },
];

/// Returns the statically registered judge factories.
pub fn registered_judges() -> &'static [JudgeFactory] {
    JUDGE_FACTORIES
}

/// Finds a registered judge factory by its axis name.
pub fn by_name(name: &str) -> Option<&'static JudgeFactory> {
    registered_judges()
        .iter()
        .find(|factory| factory.name == name)
}

fn make_humor() -> Box<dyn AxisScorer + Send + Sync> {
    Box::new(HumorJudge::new())
}

fn make_relevance() -> Box<dyn AxisScorer + Send + Sync> {
    Box::new(RelevanceJudge::new())
}

fn make_originality() -> Box<dyn AxisScorer + Send + Sync> {
    Box::new(OriginalityJudge::new())
}
