//! Configuration types for the compensation policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML policy files. The tutoring multiplier is
//! represented as an ordered table of policy epochs so that future cutover
//! dates can be added without touching any call site.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// A short description of where the policy numbers come from.
    pub description: String,
}

/// Event-type and modality markers.
///
/// All markers are matched case-insensitively as substrings; sheets mix
/// Swedish and English labels ("Övning", "Exercise", "Laboration").
#[derive(Debug, Clone, Deserialize)]
pub struct EventMarkers {
    /// Markers for exercise-like events (always doubled).
    pub exercise: Vec<String>,
    /// Markers for tutoring-like events (lab sessions, seminars,
    /// presentations, report-outs).
    pub tutoring: Vec<String>,
    /// Markers in room/location strings indicating a remote modality.
    pub remote: Vec<String>,
}

/// Prep-time multipliers for one employment kind, by modality.
#[derive(Debug, Clone, Deserialize)]
pub struct KindRates {
    /// Multiplier for on-site sessions.
    pub on_site: Decimal,
    /// Multiplier for remote/online sessions.
    pub remote: Decimal,
}

/// Tutoring multipliers effective from a given date.
///
/// Epochs form an ordered table; the rate in force on a date is taken from
/// the latest epoch whose `effective_from` is on or before that date.
#[derive(Debug, Clone, Deserialize)]
pub struct TutoringEpoch {
    /// The first date these rates apply to.
    pub effective_from: NaiveDate,
    /// Rates for hourly-paid TAs.
    pub hourly: KindRates,
    /// Rates for amanuensis contracts.
    pub amanuensis: KindRates,
}

/// Multipliers configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct MultiplierConfig {
    /// The always-applicable multiplier for exercise-like events.
    pub exercise: Decimal,
    /// The tutoring epoch table.
    pub tutoring_epochs: Vec<TutoringEpoch>,
}

/// Markers configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct MarkersConfig {
    /// Event-type and modality markers.
    pub markers: EventMarkers,
}

/// The complete compensation policy loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    /// Policy metadata.
    metadata: PolicyMetadata,
    /// Event-type and modality markers.
    markers: EventMarkers,
    /// Multiplier for exercise-like events.
    exercise_multiplier: Decimal,
    /// Tutoring epochs, sorted oldest first.
    tutoring_epochs: Vec<TutoringEpoch>,
}

impl PolicyConfig {
    /// Creates a new PolicyConfig from its component parts.
    pub fn new(
        metadata: PolicyMetadata,
        markers: EventMarkers,
        multipliers: MultiplierConfig,
    ) -> Self {
        let mut epochs = multipliers.tutoring_epochs;
        epochs.sort_by(|a, b| a.effective_from.cmp(&b.effective_from));
        Self {
            metadata,
            markers,
            exercise_multiplier: multipliers.exercise,
            tutoring_epochs: epochs,
        }
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the event-type and modality markers.
    pub fn markers(&self) -> &EventMarkers {
        &self.markers
    }

    /// Returns the multiplier for exercise-like events.
    pub fn exercise_multiplier(&self) -> Decimal {
        self.exercise_multiplier
    }

    /// Returns the tutoring epoch in force on `date`: the latest epoch
    /// whose `effective_from` is on or before the date. Returns `None`
    /// only for dates before every epoch in the table.
    pub fn tutoring_epoch(&self, date: NaiveDate) -> Option<&TutoringEpoch> {
        self.tutoring_epochs
            .iter()
            .rev()
            .find(|epoch| epoch.effective_from <= date)
    }

    /// Returns the full epoch table, sorted oldest first.
    pub fn tutoring_epochs(&self) -> &[TutoringEpoch] {
        &self.tutoring_epochs
    }
}

impl Default for PolicyConfig {
    /// The built-in standard policy, identical to the shipped
    /// `config/standard` files: ×2 for exercises; tutoring at ×1.33 until
    /// the 2022-10-01 sub-cutover, after which amanuensis contracts move to
    /// ×1.8 (×1.5 remote), with hourly TAs following at the 2023-01-01
    /// cutover.
    fn default() -> Self {
        let old = || KindRates {
            on_site: Decimal::new(133, 2),
            remote: Decimal::new(133, 2),
        };
        let modern = || KindRates {
            on_site: Decimal::new(18, 1),
            remote: Decimal::new(15, 1),
        };

        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();

        Self {
            metadata: PolicyMetadata {
                name: "Standard TA compensation policy".to_string(),
                version: "2023-01-01".to_string(),
                description: "Quarter-hour rounding with prep-time multipliers".to_string(),
            },
            markers: EventMarkers {
                exercise: strings(&["övning", "exercise"]),
                tutoring: strings(&[
                    "laboration",
                    "lab",
                    "seminar",
                    "presentation",
                    "redovisning",
                ]),
                remote: strings(&["zoom", "online", "distans", "digital"]),
            },
            exercise_multiplier: Decimal::from(2),
            tutoring_epochs: vec![
                TutoringEpoch {
                    effective_from: NaiveDate::from_ymd_opt(1970, 1, 1)
                        .unwrap_or_default(),
                    hourly: old(),
                    amanuensis: old(),
                },
                TutoringEpoch {
                    effective_from: NaiveDate::from_ymd_opt(2022, 10, 1)
                        .unwrap_or_default(),
                    hourly: old(),
                    amanuensis: modern(),
                },
                TutoringEpoch {
                    effective_from: NaiveDate::from_ymd_opt(2023, 1, 1)
                        .unwrap_or_default(),
                    hourly: modern(),
                    amanuensis: modern(),
                },
            ],
        }
    }
}
