//! Competency tiering and page layout.
//!
//! Pure functions only: scored items go in, a tiered and paginated structure
//! comes out. No I/O, no shared state, total over any finite well-typed
//! input.
//!
//! The pipeline feeds two shapes through this crate:
//! - the legacy flat list, which is tiered, capped, and split across pages
//!   by [`classify`], and
//! - pre-tiered arrays, which keep their order and size and only receive a
//!   layout class via [`layout_page`].

pub mod classify;
pub mod layout;
pub mod tier;

pub use classify::{classify, layout_page, Classification, ClassifyConfig, TierGroup, TierPage};
pub use layout::{LayoutBreakpoints, LayoutClass};
pub use tier::{BandMeta, ClassifiedItem, ScoreBand, Tier};
