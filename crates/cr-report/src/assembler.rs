//! Report data assembly.
//!
//! `assemble` is the normalization boundary: whatever shape the record
//! arrives in, the compositor downstream sees one fully-populated
//! structure. Recoverable failures (chart synthesis) are absorbed here and
//! logged; the function itself never fails for well-typed input.

use crate::config::ReportConfig;
use chrono::Utc;
use cr_chart::{render_gap_bars_with, render_radar_with};
use cr_classify::{classify, layout_page, ClassifiedItem, Tier, TierGroup, TierPage};
use cr_common::{
    ActionPlan, CompetencyInput, GapAnalysisEntry, PersonalData, ReportRecord, ScoredItem,
    TimelineEntry,
};
use serde::Serialize;
use tracing::{debug, warn};

/// Resolved branding assets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    pub organization_name: Option<String>,
    pub organization_logo: Option<String>,
    pub platform_logo: Option<String>,
}

/// One laid-out page of a tier section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSection {
    /// CSS density class for the page container.
    pub layout_class: String,
    /// True on the second sub-page of a split tier.
    pub continued: bool,
    pub items: Vec<ClassifiedItem>,
}

/// All pages of one tier, with its document heading.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierSection {
    pub tier: Tier,
    pub label: String,
    pub pages: Vec<PageSection>,
}

/// Aggregate root handed to the template compositor.
///
/// Created per generation request and discarded once the artifact exists;
/// nothing here is persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedReportData {
    pub personal_data: PersonalData,
    pub generated_at: String,
    pub branding: Branding,
    /// Radar profile as a `data:` URI, absent when synthesis failed or no
    /// data was supplied.
    pub radar_chart: Option<String>,
    /// Gap-analysis bars as a `data:` URI.
    pub gap_chart: Option<String>,
    /// Non-empty tier sections in document order (high, medium, low).
    pub tiers: Vec<TierSection>,
    pub strengths: Vec<String>,
    pub opportunities: Vec<String>,
    /// Rounded to a whole percentage for display.
    pub overall_match: Option<u32>,
    pub gap_analysis: Vec<GapAnalysisEntry>,
    pub timeline: Vec<TimelineEntry>,
    pub general_profile: serde_json::Value,
    pub action_plan: ActionPlan,
    pub conclusions: serde_json::Value,
}

/// Assemble a raw record into template-ready data.
pub fn assemble(record: ReportRecord, config: &ReportConfig) -> ComposedReportData {
    let radar_chart = record.radar_chart_data.as_ref().and_then(|radar| {
        match render_radar_with(&radar.labels, &radar.series, &config.chart) {
            Ok(image) => Some(image.data_uri()),
            Err(e) => {
                warn!(error = %e, dataset = e.dataset(), "radar chart synthesis failed, continuing without it");
                None
            }
        }
    });

    let employability = record.employability_analysis.unwrap_or_default();

    let gap_analysis: Vec<GapAnalysisEntry> = employability
        .gap_analysis
        .unwrap_or_default()
        .into_iter()
        .map(fill_gap)
        .collect();

    let gap_chart = if gap_analysis.is_empty() {
        None
    } else {
        match render_gap_bars_with(&gap_analysis, &config.chart) {
            Ok(image) => Some(image.data_uri()),
            Err(e) => {
                warn!(error = %e, dataset = e.dataset(), "gap chart synthesis failed, continuing without it");
                None
            }
        }
    };

    let timeline: Vec<TimelineEntry> = employability
        .timeline
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, entry)| fill_sequence_number(entry, i))
        .collect();

    let (tiers, strengths, opportunities) = normalize_competencies(record.competencies, config);

    let branding = Branding {
        organization_name: record.organization.as_ref().and_then(|o| o.name.clone()),
        organization_logo: record
            .organization_logo_url
            .or_else(|| record.organization.as_ref().and_then(|o| o.image_url.clone())),
        platform_logo: record.platform_logo_url,
    };

    ComposedReportData {
        personal_data: record.personal_data,
        generated_at: Utc::now().format("%Y-%m-%d").to_string(),
        branding,
        radar_chart,
        gap_chart,
        tiers,
        strengths,
        opportunities,
        overall_match: employability.overall_match.map(|m| m.round() as u32),
        gap_analysis,
        timeline,
        general_profile: record
            .general_profile
            .unwrap_or_else(|| serde_json::json!({})),
        action_plan: record.action_plan.unwrap_or_default(),
        conclusions: record.conclusions.unwrap_or_else(|| serde_json::json!({})),
    }
}

/// A supplied gap is authoritative; only absent ones are derived.
fn fill_gap(mut entry: GapAnalysisEntry) -> GapAnalysisEntry {
    if entry.gap.is_none() {
        entry.gap = Some(entry.required - entry.actual);
    }
    entry
}

/// Explicit sequence numbers are never renumbered.
fn fill_sequence_number(mut entry: TimelineEntry, index: usize) -> TimelineEntry {
    if entry.sequence_number.is_none() {
        entry.sequence_number = Some(index as u32 + 1);
    }
    entry
}

/// Route the two accepted competency shapes into tier sections plus the
/// headline lists.
fn normalize_competencies(
    input: CompetencyInput,
    config: &ReportConfig,
) -> (Vec<TierSection>, Vec<String>, Vec<String>) {
    match input {
        CompetencyInput::Flat(items) => {
            debug!(count = items.len(), "classifying flat competency list");
            let classification = classify(&items, &config.classify);

            let strengths = headline_names(&classification.high, config.headline_len);
            let opportunities = if !classification.low.is_empty() {
                headline_names(&classification.low, config.headline_len)
            } else {
                headline_names(&classification.medium, config.headline_len)
            };

            let tiers = [classification.high, classification.medium, classification.low]
                .into_iter()
                .filter_map(tier_section)
                .collect();
            (tiers, strengths, opportunities)
        }
        CompetencyInput::Tiered(tiered) => {
            debug!(
                high = tiered.high.len(),
                medium = tiered.medium.len(),
                low = tiered.low.len(),
                "using pre-tiered competencies as-is"
            );

            let strengths = first_names(&tiered.high, config.headline_len);
            let opportunities = if !tiered.low.is_empty() {
                first_names(&tiered.low, config.headline_len)
            } else {
                first_names(&tiered.medium, config.headline_len)
            };

            let tiers = [
                (Tier::High, tiered.high),
                (Tier::Medium, tiered.medium),
                (Tier::Low, tiered.low),
            ]
            .into_iter()
            .filter_map(|(tier, items)| {
                layout_page(&items, &config.classify.breakpoints).map(|page| TierSection {
                    tier,
                    label: tier.label().to_string(),
                    pages: vec![page_section(page, false)],
                })
            })
            .collect();
            (tiers, strengths, opportunities)
        }
    }
}

fn tier_section(group: TierGroup) -> Option<TierSection> {
    if group.is_empty() {
        return None;
    }
    let tier = group.tier;
    let pages = group
        .pages
        .into_iter()
        .enumerate()
        .map(|(i, page)| page_section(page, i > 0))
        .collect();
    Some(TierSection {
        tier,
        label: tier.label().to_string(),
        pages,
    })
}

fn page_section(page: TierPage, continued: bool) -> PageSection {
    PageSection {
        layout_class: page.layout.css_class().to_string(),
        continued,
        items: page.items,
    }
}

fn headline_names(group: &TierGroup, len: usize) -> Vec<String> {
    group
        .items()
        .take(len)
        .map(|c| c.item.name.clone())
        .collect()
}

fn first_names(items: &[ScoredItem], len: usize) -> Vec<String> {
    items.iter().take(len).map(|i| i.name.clone()).collect()
}
