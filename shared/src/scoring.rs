//! Fitness score calculation
//!
//! The score is the sum of a body-fat sub-score and a muscle (FFMI)
//! sub-score, each looked up in a gender-specific band table. Every lookup
//! also yields a human-readable reason, kept in evaluation order.
//!
//! BMI extremes (underweight, or high BMI without matching muscle) add a
//! reason but do not change the numeric score.

use crate::models::{Gender, UserStats};
use serde::{Deserialize, Serialize};

/// BMI under which the user is flagged as underweight
pub const UNDERWEIGHT_BMI: f64 = 18.5;

/// BMI over which the user is flagged unless FFMI is elite
pub const HIGH_BMI: f64 = 30.0;

/// FFMI that excuses a high BMI
pub const HIGH_BMI_FFMI_EXEMPTION: f64 = 22.0;

// ============================================================================
// Reasons
// ============================================================================

/// Whether a reason raised, held or lowered the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReasonKind {
    #[serde(rename = "pos")]
    Positive,
    #[serde(rename = "neu")]
    Neutral,
    #[serde(rename = "neg")]
    Negative,
}

impl ReasonKind {
    /// Marker shown in front of the reason text
    pub fn symbol(&self) -> &'static str {
        match self {
            ReasonKind::Positive => "↑",
            ReasonKind::Neutral => "•",
            ReasonKind::Negative => "↓",
        }
    }
}

/// One attributed reason behind the score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReason {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: ReasonKind,
}

impl ScoreReason {
    pub fn new(text: impl Into<String>, kind: ReasonKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

// ============================================================================
// Band Tables
// ============================================================================

/// Upper edge of a band
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// value < limit
    Below(f64),
    /// value <= limit
    AtMost(f64),
}

impl Bound {
    fn contains(&self, value: f64) -> bool {
        match *self {
            Bound::Below(limit) => value < limit,
            Bound::AtMost(limit) => value <= limit,
        }
    }

    pub fn limit(&self) -> f64 {
        match *self {
            Bound::Below(limit) | Bound::AtMost(limit) => limit,
        }
    }
}

/// One row of a scoring table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band<L> {
    pub bound: Bound,
    pub score: u32,
    pub level: L,
}

/// A scoring table: bounded bands checked in order, then a catch-all
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandTable<L> {
    pub bands: [Band<L>; 3],
    /// Score and level for everything past the last bound, NaN included
    pub above: (u32, L),
}

impl<L: Copy> BandTable<L> {
    /// Score and level of the first band whose bound contains `value`
    pub fn lookup(&self, value: f64) -> (u32, L) {
        self.bands
            .iter()
            .find(|band| band.bound.contains(value))
            .map(|band| (band.score, band.level))
            .unwrap_or(self.above)
    }
}

/// Body fat classification used for scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatLevel {
    CriticallyLow,
    Excellent,
    Healthy,
    AboveOptimal,
}

impl BodyFatLevel {
    pub fn kind(&self) -> ReasonKind {
        match self {
            BodyFatLevel::Excellent => ReasonKind::Positive,
            BodyFatLevel::Healthy => ReasonKind::Neutral,
            BodyFatLevel::CriticallyLow | BodyFatLevel::AboveOptimal => ReasonKind::Negative,
        }
    }

    /// Reason text; `body_fat_percent` prints the way it was entered
    pub fn reason(&self, body_fat_percent: f64) -> ScoreReason {
        let text = match self {
            BodyFatLevel::CriticallyLow => "Body fat is critically low.".to_string(),
            BodyFatLevel::Excellent => {
                format!("Excellent body fat percentage ({}%).", body_fat_percent)
            }
            BodyFatLevel::Healthy => "Good, healthy body fat levels.".to_string(),
            BodyFatLevel::AboveOptimal => "Body fat is above optimal ranges.".to_string(),
        };
        ScoreReason::new(text, self.kind())
    }
}

/// Muscle development classification (by FFMI)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleLevel {
    Low,
    Average,
    Great,
    Elite,
}

impl MuscleLevel {
    pub fn kind(&self) -> ReasonKind {
        match self {
            MuscleLevel::Low => ReasonKind::Negative,
            MuscleLevel::Average => ReasonKind::Neutral,
            MuscleLevel::Great | MuscleLevel::Elite => ReasonKind::Positive,
        }
    }

    pub fn reason(&self, ffmi: f64) -> ScoreReason {
        let text = match self {
            MuscleLevel::Low => format!("Low muscle mass (FFMI {:.1}).", ffmi),
            MuscleLevel::Average => "Average muscle development.".to_string(),
            MuscleLevel::Great => format!("Great muscle mass (FFMI {:.1}).", ffmi),
            MuscleLevel::Elite => "Elite muscle development!".to_string(),
        };
        ScoreReason::new(text, self.kind())
    }
}

const MALE_BODY_FAT_BANDS: BandTable<BodyFatLevel> = BandTable {
    bands: [
        Band { bound: Bound::Below(8.0), score: 15, level: BodyFatLevel::CriticallyLow },
        Band { bound: Bound::AtMost(15.0), score: 40, level: BodyFatLevel::Excellent },
        Band { bound: Bound::AtMost(20.0), score: 25, level: BodyFatLevel::Healthy },
    ],
    above: (5, BodyFatLevel::AboveOptimal),
};

const FEMALE_BODY_FAT_BANDS: BandTable<BodyFatLevel> = BandTable {
    bands: [
        Band { bound: Bound::Below(15.0), score: 15, level: BodyFatLevel::CriticallyLow },
        Band { bound: Bound::AtMost(24.0), score: 40, level: BodyFatLevel::Excellent },
        Band { bound: Bound::AtMost(30.0), score: 25, level: BodyFatLevel::Healthy },
    ],
    above: (5, BodyFatLevel::AboveOptimal),
};

const MALE_MUSCLE_BANDS: BandTable<MuscleLevel> = BandTable {
    bands: [
        Band { bound: Bound::Below(18.0), score: 10, level: MuscleLevel::Low },
        Band { bound: Bound::Below(20.0), score: 25, level: MuscleLevel::Average },
        Band { bound: Bound::Below(22.0), score: 40, level: MuscleLevel::Great },
    ],
    above: (50, MuscleLevel::Elite),
};

const FEMALE_MUSCLE_BANDS: BandTable<MuscleLevel> = BandTable {
    bands: [
        Band { bound: Bound::Below(15.0), score: 10, level: MuscleLevel::Low },
        Band { bound: Bound::Below(17.0), score: 25, level: MuscleLevel::Average },
        Band { bound: Bound::Below(19.0), score: 40, level: MuscleLevel::Great },
    ],
    above: (50, MuscleLevel::Elite),
};

/// Body fat band table for a gender
pub fn body_fat_bands(gender: Gender) -> &'static BandTable<BodyFatLevel> {
    match gender {
        Gender::Male => &MALE_BODY_FAT_BANDS,
        Gender::Female => &FEMALE_BODY_FAT_BANDS,
    }
}

/// FFMI band table for a gender
pub fn muscle_bands(gender: Gender) -> &'static BandTable<MuscleLevel> {
    match gender {
        Gender::Male => &MALE_MUSCLE_BANDS,
        Gender::Female => &FEMALE_MUSCLE_BANDS,
    }
}

/// Body fat sub-score and its reason
pub fn score_body_fat(body_fat_percent: f64, gender: Gender) -> (u32, ScoreReason) {
    let (score, level) = body_fat_bands(gender).lookup(body_fat_percent);
    (score, level.reason(body_fat_percent))
}

/// Muscle sub-score and its reason
pub fn score_muscle(ffmi: f64, gender: Gender) -> (u32, ScoreReason) {
    let (score, level) = muscle_bands(gender).lookup(ffmi);
    (score, level.reason(ffmi))
}

/// Reason for an extreme BMI, if any. Underweight takes precedence.
pub fn bmi_extreme_reason(bmi: f64, ffmi: f64) -> Option<ScoreReason> {
    if bmi < UNDERWEIGHT_BMI {
        Some(ScoreReason::new(
            "BMI indicates you are underweight.",
            ReasonKind::Negative,
        ))
    } else if bmi > HIGH_BMI && ffmi < HIGH_BMI_FFMI_EXEMPTION {
        Some(ScoreReason::new(
            "BMI is high without corresponding high muscle mass.",
            ReasonKind::Negative,
        ))
    } else {
        None
    }
}

// ============================================================================
// Score
// ============================================================================

/// Gauge label for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    NeedsWork,
    Average,
    Excellent,
    Elite,
}

impl ScoreStatus {
    pub fn from_score(score: u32) -> Self {
        if score < 40 {
            ScoreStatus::NeedsWork
        } else if score < 70 {
            ScoreStatus::Average
        } else if score < 90 {
            ScoreStatus::Excellent
        } else {
            ScoreStatus::Elite
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreStatus::NeedsWork => "Needs Work",
            ScoreStatus::Average => "Average",
            ScoreStatus::Excellent => "Excellent",
            ScoreStatus::Elite => "Elite",
        }
    }
}

/// Result of a scoring pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessScore {
    /// Final score, 0-100
    pub score: u32,
    pub body_fat_score: u32,
    pub muscle_score: u32,
    pub status: ScoreStatus,
    /// Body fat reason, muscle reason, then any BMI-extreme reason
    pub reasons: Vec<ScoreReason>,
}

/// Score a user whose metrics have already been computed
pub fn compute_fitness_score(stats: &UserStats) -> FitnessScore {
    let mut reasons = Vec::with_capacity(3);

    let (body_fat_score, reason) = score_body_fat(stats.body_fat_percent, stats.gender);
    reasons.push(reason);

    let (muscle_score, reason) = score_muscle(stats.ffmi, stats.gender);
    reasons.push(reason);

    if let Some(reason) = bmi_extreme_reason(stats.bmi, stats.ffmi) {
        reasons.push(reason);
    }

    let score = (body_fat_score + muscle_score).min(100);

    FitnessScore {
        score,
        body_fat_score,
        muscle_score,
        status: ScoreStatus::from_score(score),
        reasons,
    }
}
