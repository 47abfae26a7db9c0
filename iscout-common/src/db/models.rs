//! Database models and domain enums

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Outreach status of a stored influencer record.
///
/// Stored in the database as the exact variant name ("New", "Contacted", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactStatus {
    New,
    Contacted,
    Responded,
    Hired,
}

impl ContactStatus {
    /// All valid statuses, in workflow order
    pub const ALL: [ContactStatus; 4] = [
        ContactStatus::New,
        ContactStatus::Contacted,
        ContactStatus::Responded,
        ContactStatus::Hired,
    ];

    /// Database/API string for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::New => "New",
            ContactStatus::Contacted => "Contacted",
            ContactStatus::Responded => "Responded",
            ContactStatus::Hired => "Hired",
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactStatus {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(ContactStatus::New),
            "contacted" => Ok(ContactStatus::Contacted),
            "responded" => Ok(ContactStatus::Responded),
            "hired" => Ok(ContactStatus::Hired),
            other => Err(crate::Error::InvalidInput(format!(
                "Unknown status '{}' (valid: New, Contacted, Responded, Hired)",
                other
            ))),
        }
    }
}

/// Coarse audience-size bucket used as a search parameter and list filter.
///
/// Bounds are inclusive follower counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowerBand {
    Nano,
    Micro,
    MidTier,
    Macro,
    Mega,
    Celebrity,
}

impl FollowerBand {
    /// All bands, smallest audience first
    pub const ALL: [FollowerBand; 6] = [
        FollowerBand::Nano,
        FollowerBand::Micro,
        FollowerBand::MidTier,
        FollowerBand::Macro,
        FollowerBand::Mega,
        FollowerBand::Celebrity,
    ];

    /// Machine value used in API parameters and history rows
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowerBand::Nano => "nano",
            FollowerBand::Micro => "micro",
            FollowerBand::MidTier => "mid-tier",
            FollowerBand::Macro => "macro",
            FollowerBand::Mega => "mega",
            FollowerBand::Celebrity => "celebrity",
        }
    }

    /// Human-readable label for UI display
    pub fn label(&self) -> &'static str {
        match self {
            FollowerBand::Nano => "Nano (1K - 10K)",
            FollowerBand::Micro => "Micro (10K - 50K)",
            FollowerBand::MidTier => "Mid-tier (50K - 100K)",
            FollowerBand::Macro => "Macro (100K - 500K)",
            FollowerBand::Mega => "Mega (500K - 1M)",
            FollowerBand::Celebrity => "Celebrity (1M+)",
        }
    }

    /// Inclusive (min, max) follower bounds for this band
    pub fn bounds(&self) -> (i64, i64) {
        match self {
            FollowerBand::Nano => (1_000, 10_000),
            FollowerBand::Micro => (10_000, 50_000),
            FollowerBand::MidTier => (50_000, 100_000),
            FollowerBand::Macro => (100_000, 500_000),
            FollowerBand::Mega => (500_000, 1_000_000),
            FollowerBand::Celebrity => (1_000_000, 10_000_000),
        }
    }
}

impl fmt::Display for FollowerBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FollowerBand {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nano" => Ok(FollowerBand::Nano),
            "micro" => Ok(FollowerBand::Micro),
            "mid-tier" | "midtier" | "mid_tier" => Ok(FollowerBand::MidTier),
            "macro" => Ok(FollowerBand::Macro),
            "mega" => Ok(FollowerBand::Mega),
            "celebrity" => Ok(FollowerBand::Celebrity),
            other => Err(crate::Error::InvalidInput(format!(
                "Unknown follower range '{}' (valid: nano, micro, mid-tier, macro, mega, celebrity)",
                other
            ))),
        }
    }
}

/// A stored influencer record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Influencer {
    pub guid: Uuid,
    /// Social-media username, unique within the store
    pub handle: String,
    pub display_name: String,
    pub niche: String,
    /// Follower-count estimate
    pub followers: i64,
    pub country: String,
    /// Free-text profile summary
    pub summary: String,
    /// Specific sub-niche or content type
    pub content_focus: String,
    pub profile_link: String,
    /// Comma-joined suggested hashtags, without '#'
    pub hashtags: String,
    pub open_to_collab: bool,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

/// One past search invocation, recorded after each completed search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    pub guid: Uuid,
    pub niche: String,
    pub country: String,
    /// Band machine value (e.g. "micro")
    pub follower_band: String,
    pub min_followers: i64,
    pub max_followers: i64,
    /// Number of profiles requested from the model
    pub requested: i64,
    /// Number of candidates the model returned
    pub results_count: i64,
    pub created_at: DateTime<Utc>,
}
