//! Competency report shared types.
//!
//! This crate provides the external data contract consumed by the report
//! pipeline, plus the storage-key naming helper used by the object-storage
//! collaborator. Input validation happens upstream; the types here assume a
//! well-shaped record (scores in range, required fields present).

pub mod record;
pub mod storage;

pub use record::{
    ActionPlan, ActionPlanPhase, CompetencyInput, EmployabilityAnalysis, GapAnalysisEntry,
    Organization, PersonalData, RadarChartData, ReportRecord, ScoredItem, TieredCompetencies,
    TimelineEntry,
};
pub use storage::storage_key;
