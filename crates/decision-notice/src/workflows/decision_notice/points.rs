use serde::{Deserialize, Serialize};

use super::activity::ActivityDomain;
use super::answers::QuestionService;
use super::case_data::CaseData;
use super::errors::AdjudicationError;

/// Outcome tier declared for one activity domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AwardType {
    StandardRate,
    EnhancedRate,
    NoAward,
    NotConsidered,
}

impl AwardType {
    pub const ALL: [AwardType; 4] = [
        AwardType::StandardRate,
        AwardType::EnhancedRate,
        AwardType::NoAward,
        AwardType::NotConsidered,
    ];

    /// Value stored in the case-data award field.
    pub const fn code(self) -> &'static str {
        match self {
            AwardType::StandardRate => "standardRate",
            AwardType::EnhancedRate => "enhancedRate",
            AwardType::NoAward => "noAward",
            AwardType::NotConsidered => "notConsidered",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|award| award.code() == code)
    }
}

/// Award tiers that carry a points threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoredAward {
    NoAward,
    StandardRate,
    EnhancedRate,
}

impl ScoredAward {
    const fn description(self) -> &'static str {
        match self {
            ScoredAward::NoAward => "No Award",
            ScoredAward::StandardRate => "a standard rate award",
            ScoredAward::EnhancedRate => "an enhanced rate award",
        }
    }

    fn mismatch_message(self, activity_name: &str) -> String {
        format!(
            "You have previously selected {} for {activity_name}. \
             The points awarded don't match. Please review your previous selection.",
            self.description()
        )
    }
}

impl TryFrom<AwardType> for ScoredAward {
    type Error = AdjudicationError;

    fn try_from(value: AwardType) -> Result<Self, Self::Error> {
        match value {
            AwardType::NoAward => Ok(ScoredAward::NoAward),
            AwardType::StandardRate => Ok(ScoredAward::StandardRate),
            AwardType::EnhancedRate => Ok(ScoredAward::EnhancedRate),
            AwardType::NotConsidered => Err(AdjudicationError::UnscoredAwardType(value)),
        }
    }
}

impl From<ScoredAward> for AwardType {
    fn from(value: ScoredAward) -> Self {
        match value {
            ScoredAward::NoAward => AwardType::NoAward,
            ScoredAward::StandardRate => AwardType::StandardRate,
            ScoredAward::EnhancedRate => AwardType::EnhancedRate,
        }
    }
}

/// Inclusive points band; `max == None` is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsRange {
    pub min: u32,
    pub max: Option<u32>,
}

impl PointsRange {
    pub const fn at_most(max: u32) -> Self {
        Self {
            min: 0,
            max: Some(max),
        }
    }

    pub const fn between(min: u32, max: u32) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub const fn at_least(min: u32) -> Self {
        Self { min, max: None }
    }

    pub fn contains(&self, points: u32) -> bool {
        points >= self.min && self.max.map_or(true, |max| points <= max)
    }
}

/// `"You have previously selected {award} for {activity}. ..."`
pub fn standard_error_message(
    award: AwardType,
    activity_name: &str,
) -> Result<String, AdjudicationError> {
    Ok(ScoredAward::try_from(award)?.mismatch_message(activity_name))
}

/// Sum of descriptor points selected for one activity domain.
///
/// An unanswered selection list totals zero; callers that need to tell "not scored" apart
/// from "scored zero" check [`ActivityDomain::selected_question_keys`] first.
pub fn total_points<A: ActivityDomain>(
    questions: &dyn QuestionService,
    case: &CaseData,
    activity: A,
) -> u32 {
    match activity.selected_question_keys(case) {
        Some(keys) => questions.total_points(case, keys),
        None => 0,
    }
}

/// Points threshold that must hold when a domain's declared award is `award`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsCondition<A> {
    award: ScoredAward,
    activity: A,
    range: PointsRange,
}

impl<A: ActivityDomain> PointsCondition<A> {
    pub const fn new(award: ScoredAward, activity: A, range: PointsRange) -> Self {
        Self {
            award,
            activity,
            range,
        }
    }

    pub fn award(&self) -> AwardType {
        self.award.into()
    }

    pub fn activity(&self) -> A {
        self.activity
    }

    pub fn range(&self) -> PointsRange {
        self.range
    }

    pub fn is_satisfied_by(&self, points: u32) -> bool {
        self.range.contains(points)
    }

    /// Applies when the declared award code for the domain is this condition's award.
    pub fn is_applicable(&self, case: &CaseData) -> bool {
        self.activity.award_type_code(case) == Some(self.award().code())
    }

    pub fn error_message(&self) -> String {
        self.award.mismatch_message(self.activity.display_name())
    }

    /// `None` when the domain has no selections (not yet scored) or the total is in range.
    pub fn optional_error_message(
        &self,
        questions: &dyn QuestionService,
        case: &CaseData,
    ) -> Option<String> {
        let keys = self
            .activity
            .selected_question_keys(case)
            .filter(|keys| !keys.is_empty())?;

        let points = questions.total_points(case, keys);
        if self.is_satisfied_by(points) {
            None
        } else {
            Some(self.error_message())
        }
    }
}

/// Points requirement on a benefit's combined total, used as a composite-condition gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsGate {
    pub range: PointsRange,
    pub satisfied_message: &'static str,
    pub failure_message: &'static str,
}

impl PointsGate {
    pub const LESS_THAN_FIFTEEN: PointsGate = PointsGate {
        range: PointsRange::at_most(14),
        satisfied_message: "awarded less than 15 points",
        failure_message: "awarded 15 points or more",
    };

    pub const FIFTEEN_OR_MORE: PointsGate = PointsGate {
        range: PointsRange::at_least(15),
        satisfied_message: "awarded 15 points or more",
        failure_message: "awarded less than 15 points",
    };

    pub fn is_satisfied_by(&self, points: u32) -> bool {
        self.range.contains(points)
    }
}
