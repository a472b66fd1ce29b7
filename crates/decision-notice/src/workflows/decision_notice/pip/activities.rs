use serde::Serialize;

use crate::workflows::decision_notice::activity::{ActivityDomain, ActivityQuestion};
use crate::workflows::decision_notice::case_data::CaseData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PipActivityType {
    DailyLiving,
    Mobility,
}

impl ActivityDomain for PipActivityType {
    const ALL: &'static [Self] = &[PipActivityType::DailyLiving, PipActivityType::Mobility];

    fn display_name(self) -> &'static str {
        match self {
            PipActivityType::DailyLiving => "Daily Living",
            PipActivityType::Mobility => "Mobility",
        }
    }

    fn award_type_code(self, case: &CaseData) -> Option<&str> {
        match self {
            PipActivityType::DailyLiving => case.pip.daily_living_award.as_deref(),
            PipActivityType::Mobility => case.pip.mobility_award.as_deref(),
        }
    }

    fn selected_question_keys(self, case: &CaseData) -> Option<&[String]> {
        match self {
            PipActivityType::DailyLiving => case.pip.daily_living_activities.as_deref(),
            PipActivityType::Mobility => case.pip.mobility_activities.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipActivityQuestion {
    PreparingFood,
    TakingNutrition,
    ManagingTherapy,
    WashingAndBathing,
    ManagingToiletNeeds,
    DressingAndUndressing,
    Communicating,
    ReadingUnderstanding,
    EngagingWithOthers,
    BudgetingDecisions,
    PlanningAndFollowing,
    MovingAround,
}

impl ActivityQuestion for PipActivityQuestion {
    type Domain = PipActivityType;

    const ALL: &'static [Self] = &[
        PipActivityQuestion::PreparingFood,
        PipActivityQuestion::TakingNutrition,
        PipActivityQuestion::ManagingTherapy,
        PipActivityQuestion::WashingAndBathing,
        PipActivityQuestion::ManagingToiletNeeds,
        PipActivityQuestion::DressingAndUndressing,
        PipActivityQuestion::Communicating,
        PipActivityQuestion::ReadingUnderstanding,
        PipActivityQuestion::EngagingWithOthers,
        PipActivityQuestion::BudgetingDecisions,
        PipActivityQuestion::PlanningAndFollowing,
        PipActivityQuestion::MovingAround,
    ];

    fn key(self) -> &'static str {
        match self {
            PipActivityQuestion::PreparingFood => "preparingFood",
            PipActivityQuestion::TakingNutrition => "takingNutrition",
            PipActivityQuestion::ManagingTherapy => "managingTherapy",
            PipActivityQuestion::WashingAndBathing => "washingAndBathing",
            PipActivityQuestion::ManagingToiletNeeds => "managingToiletNeeds",
            PipActivityQuestion::DressingAndUndressing => "dressingAndUndressing",
            PipActivityQuestion::Communicating => "communicating",
            PipActivityQuestion::ReadingUnderstanding => "readingUnderstanding",
            PipActivityQuestion::EngagingWithOthers => "engagingWithOthers",
            PipActivityQuestion::BudgetingDecisions => "budgetingDecisions",
            PipActivityQuestion::PlanningAndFollowing => "planningAndFollowing",
            PipActivityQuestion::MovingAround => "movingAround",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PipActivityQuestion::PreparingFood => "Preparing food",
            PipActivityQuestion::TakingNutrition => "Taking nutrition",
            PipActivityQuestion::ManagingTherapy => {
                "Managing therapy or monitoring a health condition"
            }
            PipActivityQuestion::WashingAndBathing => "Washing and bathing",
            PipActivityQuestion::ManagingToiletNeeds => "Managing toilet needs or incontinence",
            PipActivityQuestion::DressingAndUndressing => "Dressing and undressing",
            PipActivityQuestion::Communicating => "Communicating",
            PipActivityQuestion::ReadingUnderstanding => {
                "Reading and understanding signs, symbols and words"
            }
            PipActivityQuestion::EngagingWithOthers => "Engaging with other people face to face",
            PipActivityQuestion::BudgetingDecisions => "Making budgeting decisions",
            PipActivityQuestion::PlanningAndFollowing => "Planning and following journeys",
            PipActivityQuestion::MovingAround => "Moving around",
        }
    }

    fn domain(self) -> PipActivityType {
        match self {
            PipActivityQuestion::PlanningAndFollowing | PipActivityQuestion::MovingAround => {
                PipActivityType::Mobility
            }
            _ => PipActivityType::DailyLiving,
        }
    }

    fn answer(self, case: &CaseData) -> Option<&str> {
        let pip = &case.pip;
        let answer = match self {
            PipActivityQuestion::PreparingFood => &pip.preparing_food,
            PipActivityQuestion::TakingNutrition => &pip.taking_nutrition,
            PipActivityQuestion::ManagingTherapy => &pip.managing_therapy,
            PipActivityQuestion::WashingAndBathing => &pip.washing_and_bathing,
            PipActivityQuestion::ManagingToiletNeeds => &pip.managing_toilet_needs,
            PipActivityQuestion::DressingAndUndressing => &pip.dressing_and_undressing,
            PipActivityQuestion::Communicating => &pip.communicating,
            PipActivityQuestion::ReadingUnderstanding => &pip.reading_understanding,
            PipActivityQuestion::EngagingWithOthers => &pip.engaging_with_others,
            PipActivityQuestion::BudgetingDecisions => &pip.budgeting_decisions,
            PipActivityQuestion::PlanningAndFollowing => &pip.planning_and_following,
            PipActivityQuestion::MovingAround => &pip.moving_around,
        };
        answer.as_deref()
    }
}
