//! Screen variants.
//!
//! The review screen exists in three historical shapes. They share the
//! same state machine and differ only in which fields, filters, and extras
//! are exposed.

use std::fmt;
use std::str::FromStr;

use super::StatusFilter;
use crate::error::TriageError;

/// Which flavour of the review screen to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenVariant {
    /// First-generation screen: phone and message columns, four filter options,
    /// message is searchable, rejections are labelled "junk".
    Classic,
    /// Trimmed screen: name and email only; the main table shows only
    /// records that are still pending.
    Streamlined,
    /// Streamlined screen plus inline editing, an accepted-contacts section,
    /// and the enrich-all trigger.
    #[default]
    Enrichment,
}

const CLASSIC_FILTERS: &[StatusFilter] = &[
    StatusFilter::All,
    StatusFilter::Pending,
    StatusFilter::Accepted,
    StatusFilter::Rejected,
];
const COMPACT_FILTERS: &[StatusFilter] = &[StatusFilter::All, StatusFilter::Pending];

impl ScreenVariant {
    /// Returns the configuration name of this variant.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Streamlined => "streamlined",
            Self::Enrichment => "enrichment",
        }
    }

    /// Filter options offered by the selector, in cycling order.
    #[must_use]
    pub const fn filter_options(self) -> &'static [StatusFilter] {
        match self {
            Self::Classic => CLASSIC_FILTERS,
            Self::Streamlined | Self::Enrichment => COMPACT_FILTERS,
        }
    }

    /// Whether the phone and message columns are shown and the message is
    /// searched.
    #[must_use]
    pub const fn shows_contact_details(self) -> bool {
        matches!(self, Self::Classic)
    }

    /// Whether accepted and rejected records are dropped from the main
    /// table regardless of the active filter.
    #[must_use]
    pub const fn main_table_is_actionable_only(self) -> bool {
        !matches!(self, Self::Classic)
    }

    /// Whether records can be edited inline.
    #[must_use]
    pub const fn supports_editing(self) -> bool {
        matches!(self, Self::Enrichment)
    }

    /// Whether the accepted-contacts section and enrich-all trigger exist.
    #[must_use]
    pub const fn has_accepted_section(self) -> bool {
        matches!(self, Self::Enrichment)
    }

    /// Label for the reject action.
    #[must_use]
    pub const fn reject_label(self) -> &'static str {
        match self {
            Self::Classic => "Junk",
            Self::Streamlined | Self::Enrichment => "Reject",
        }
    }

    /// Past-tense phrase used in the rejection notification.
    #[must_use]
    pub const fn rejected_phrase(self) -> &'static str {
        match self {
            Self::Classic => "marked as junk",
            Self::Streamlined | Self::Enrichment => "rejected",
        }
    }
}

impl fmt::Display for ScreenVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScreenVariant {
    type Err = TriageError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "streamlined" => Ok(Self::Streamlined),
            "enrichment" => Ok(Self::Enrichment),
            other => Err(TriageError::Configuration {
                message: format!(
                    "unknown screen variant '{other}' (expected classic, streamlined, or enrichment)"
                ),
            }),
        }
    }
}
