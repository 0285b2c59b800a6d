//! External report-record contract.
//!
//! Field names follow the camelCase JSON produced by the assessment service.
//! The validation collaborator has already checked shapes and ranges by the
//! time a record reaches the pipeline, so optional fields default instead of
//! erroring.

use serde::{Deserialize, Serialize};

/// Candidate identity block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalData {
    /// Candidate full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Target role/profile, shown on the cover when present.
    #[serde(default)]
    pub target_profile: Option<String>,
    /// Remaining identity fields (phone, location, ...) passed through to
    /// the template untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A single scored competency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredItem {
    /// Competency name.
    pub name: String,
    /// Score in [1, 10].
    pub score: f64,
    /// Short description shown on the competency card.
    pub description: String,
    /// Longer prose analysis, shown when the layout has room.
    #[serde(default)]
    pub detailed_analysis: Option<String>,
    /// One-line definition of the competency itself.
    #[serde(default)]
    pub definition: Option<String>,
}

/// Competency input, in either of the two accepted shapes.
///
/// The flat list is the legacy shape and goes through classification,
/// capping, and page splitting. The pre-tiered object is newer and is used
/// as-is: only layout classes and page splits are assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompetencyInput {
    /// Legacy flat list, tiered by the classifier.
    Flat(Vec<ScoredItem>),
    /// Pre-tiered object, taken as authoritative.
    Tiered(TieredCompetencies),
}

impl CompetencyInput {
    /// Total item count across both shapes.
    pub fn len(&self) -> usize {
        match self {
            CompetencyInput::Flat(items) => items.len(),
            CompetencyInput::Tiered(t) => t.high.len() + t.medium.len() + t.low.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Pre-tiered competency arrays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TieredCompetencies {
    #[serde(default)]
    pub high: Vec<ScoredItem>,
    #[serde(default)]
    pub medium: Vec<ScoredItem>,
    #[serde(default)]
    pub low: Vec<ScoredItem>,
}

/// Input data for the radar profile chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarChartData {
    /// Axis labels, clockwise from the top.
    #[serde(default)]
    pub labels: Vec<String>,
    /// One value list per profile polygon; values in [1, 10].
    #[serde(default)]
    pub series: Vec<Vec<f64>>,
}

/// One row of the required-vs-actual gap analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapAnalysisEntry {
    /// Competency under comparison.
    pub competency_name: String,
    /// Level the target role requires, in [1, 10].
    pub required: f64,
    /// Level the candidate demonstrated, in [1, 10].
    pub actual: f64,
    /// Difference. When supplied it is authoritative; when absent the
    /// assembler fills in `required - actual`.
    #[serde(default)]
    pub gap: Option<f64>,
}

/// One step of the employability timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    /// Explicit position. Never renumbered when present; absent entries get
    /// their 1-based position in the sequence.
    #[serde(default)]
    pub sequence_number: Option<u32>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Remaining payload fields, passed through to the template.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Employability analysis block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployabilityAnalysis {
    /// Overall role match percentage in [0, 100].
    #[serde(default)]
    pub overall_match: Option<f64>,
    #[serde(default)]
    pub gap_analysis: Option<Vec<GapAnalysisEntry>>,
    #[serde(default)]
    pub timeline: Option<Vec<TimelineEntry>>,
}

/// One phase of the recommended action plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlanPhase {
    pub number: u32,
    pub duration: String,
    pub description: String,
}

/// Recommended action plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    #[serde(default)]
    pub phases: Vec<ActionPlanPhase>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Legacy nested organization block carrying branding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Full report record as received from the assessment service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    pub personal_data: PersonalData,
    pub competencies: CompetencyInput,
    #[serde(default)]
    pub radar_chart_data: Option<RadarChartData>,
    #[serde(default)]
    pub employability_analysis: Option<EmployabilityAnalysis>,
    #[serde(default)]
    pub action_plan: Option<ActionPlan>,
    /// Free-form general profile section, rendered verbatim.
    #[serde(default)]
    pub general_profile: Option<serde_json::Value>,
    /// Free-form conclusions section, rendered verbatim.
    #[serde(default)]
    pub conclusions: Option<serde_json::Value>,
    /// Explicit organization logo, preferred over the legacy nested field.
    #[serde(default)]
    pub organization_logo_url: Option<String>,
    /// Platform logo shown in the page header.
    #[serde(default)]
    pub platform_logo_url: Option<String>,
    /// Legacy nested organization block.
    #[serde(default)]
    pub organization: Option<Organization>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_competencies_deserialize() {
        let json = r#"{
            "personalData": { "name": "Ada", "email": "ada@example.com" },
            "competencies": [
                { "name": "Rust", "score": 9.0, "description": "systems" }
            ]
        }"#;
        let record: ReportRecord = serde_json::from_str(json).unwrap();
        match record.competencies {
            CompetencyInput::Flat(ref items) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].name, "Rust");
            }
            _ => panic!("expected flat shape"),
        }
    }

    #[test]
    fn test_tiered_competencies_deserialize() {
        let json = r#"{
            "personalData": { "name": "Ada", "email": "ada@example.com" },
            "competencies": {
                "high": [{ "name": "Rust", "score": 9.0, "description": "systems" }],
                "low": [{ "name": "Sales", "score": 2.0, "description": "pitching" }]
            }
        }"#;
        let record: ReportRecord = serde_json::from_str(json).unwrap();
        match record.competencies {
            CompetencyInput::Tiered(ref t) => {
                assert_eq!(t.high.len(), 1);
                assert!(t.medium.is_empty());
                assert_eq!(t.low.len(), 1);
            }
            _ => panic!("expected tiered shape"),
        }
        assert_eq!(record.competencies.len(), 2);
    }

    #[test]
    fn test_gap_entry_optional_gap() {
        let json = r#"{ "competencyName": "Rust", "required": 8, "actual": 5 }"#;
        let entry: GapAnalysisEntry = serde_json::from_str(json).unwrap();
        assert!(entry.gap.is_none());

        let json = r#"{ "competencyName": "Rust", "required": 8, "actual": 5, "gap": 2.5 }"#;
        let entry: GapAnalysisEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.gap, Some(2.5));
    }

    #[test]
    fn test_timeline_entry_extra_payload() {
        let json = r#"{ "sequenceNumber": 3, "description": "shadow a team", "milestone": "Q2" }"#;
        let entry: TimelineEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.sequence_number, Some(3));
        assert_eq!(entry.extra.get("milestone").unwrap(), "Q2");
    }
}
