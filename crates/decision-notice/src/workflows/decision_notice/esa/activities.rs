use serde::Serialize;

use crate::workflows::decision_notice::activity::{ActivityDomain, ActivityQuestion};
use crate::workflows::decision_notice::case_data::CaseData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EsaActivityType {
    PhysicalDisabilities,
    MentalAssessment,
}

impl ActivityDomain for EsaActivityType {
    const ALL: &'static [Self] = &[
        EsaActivityType::PhysicalDisabilities,
        EsaActivityType::MentalAssessment,
    ];

    fn display_name(self) -> &'static str {
        match self {
            EsaActivityType::PhysicalDisabilities => "Physical Disabilities",
            EsaActivityType::MentalAssessment => "Mental Assessment",
        }
    }

    /// ESA scores the combined total; neither domain carries its own award.
    fn award_type_code(self, _case: &CaseData) -> Option<&str> {
        None
    }

    fn selected_question_keys(self, case: &CaseData) -> Option<&[String]> {
        match self {
            EsaActivityType::PhysicalDisabilities => {
                case.esa.physical_disabilities_activities.as_deref()
            }
            EsaActivityType::MentalAssessment => case.esa.mental_assessment_activities.as_deref(),
        }
    }
}

/// Schedule 2 activities, numbered 1 to 17 in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EsaActivityQuestion {
    MobilisingUnaided,
    StandingAndSitting,
    Reaching,
    PickingUpMovingOrTransferring,
    ManualDexterity,
    MakingSelfUnderstood,
    Communication,
    Navigation,
    LossOfControl,
    Consciousness,
    LearningTasks,
    AwarenessOfHazards,
    PersonalAction,
    CopingWithChange,
    GettingAbout,
    SocialEngagement,
    AppropriatenessOfBehaviour,
}

impl ActivityQuestion for EsaActivityQuestion {
    type Domain = EsaActivityType;

    const ALL: &'static [Self] = &[
        EsaActivityQuestion::MobilisingUnaided,
        EsaActivityQuestion::StandingAndSitting,
        EsaActivityQuestion::Reaching,
        EsaActivityQuestion::PickingUpMovingOrTransferring,
        EsaActivityQuestion::ManualDexterity,
        EsaActivityQuestion::MakingSelfUnderstood,
        EsaActivityQuestion::Communication,
        EsaActivityQuestion::Navigation,
        EsaActivityQuestion::LossOfControl,
        EsaActivityQuestion::Consciousness,
        EsaActivityQuestion::LearningTasks,
        EsaActivityQuestion::AwarenessOfHazards,
        EsaActivityQuestion::PersonalAction,
        EsaActivityQuestion::CopingWithChange,
        EsaActivityQuestion::GettingAbout,
        EsaActivityQuestion::SocialEngagement,
        EsaActivityQuestion::AppropriatenessOfBehaviour,
    ];

    fn key(self) -> &'static str {
        use EsaActivityQuestion::*;
        match self {
            MobilisingUnaided => "mobilisingUnaided",
            StandingAndSitting => "standingAndSitting",
            Reaching => "reaching",
            PickingUpMovingOrTransferring => "pickingUpMovingOrTransferring",
            ManualDexterity => "manualDexterity",
            MakingSelfUnderstood => "makingSelfUnderstood",
            Communication => "communication",
            Navigation => "navigation",
            LossOfControl => "lossOfControl",
            Consciousness => "consciousness",
            LearningTasks => "learningTasks",
            AwarenessOfHazards => "awarenessOfHazards",
            PersonalAction => "personalAction",
            CopingWithChange => "copingWithChange",
            GettingAbout => "gettingAbout",
            SocialEngagement => "socialEngagement",
            AppropriatenessOfBehaviour => "appropriatenessOfBehaviour",
        }
    }

    fn label(self) -> &'static str {
        use EsaActivityQuestion::*;
        match self {
            MobilisingUnaided => "Mobilising unaided by another person",
            StandingAndSitting => "Standing and sitting",
            Reaching => "Reaching",
            PickingUpMovingOrTransferring => {
                "Picking up and moving or transferring by the use of the upper body and arms"
            }
            ManualDexterity => "Manual dexterity",
            MakingSelfUnderstood => "Making self understood",
            Communication => "Understanding communication",
            Navigation => "Navigation and maintaining safety",
            LossOfControl => "Absence or loss of control over bowel or bladder",
            Consciousness => "Consciousness during waking moments",
            LearningTasks => "Learning tasks",
            AwarenessOfHazards => "Awareness of everyday hazards",
            PersonalAction => "Initiating and completing personal action",
            CopingWithChange => "Coping with change",
            GettingAbout => "Getting about",
            SocialEngagement => "Coping with social engagement",
            AppropriatenessOfBehaviour => "Appropriateness of behaviour with other people",
        }
    }

    fn domain(self) -> EsaActivityType {
        use EsaActivityQuestion::*;
        match self {
            LearningTasks | AwarenessOfHazards | PersonalAction | CopingWithChange
            | GettingAbout | SocialEngagement | AppropriatenessOfBehaviour => {
                EsaActivityType::MentalAssessment
            }
            _ => EsaActivityType::PhysicalDisabilities,
        }
    }

    fn answer(self, case: &CaseData) -> Option<&str> {
        use EsaActivityQuestion::*;
        let esa = &case.esa;
        let answer = match self {
            MobilisingUnaided => &esa.mobilising_unaided,
            StandingAndSitting => &esa.standing_and_sitting,
            Reaching => &esa.reaching,
            PickingUpMovingOrTransferring => &esa.picking_up_moving_or_transferring,
            ManualDexterity => &esa.manual_dexterity,
            MakingSelfUnderstood => &esa.making_self_understood,
            Communication => &esa.communication,
            Navigation => &esa.navigation,
            LossOfControl => &esa.loss_of_control,
            Consciousness => &esa.consciousness,
            LearningTasks => &esa.learning_tasks,
            AwarenessOfHazards => &esa.awareness_of_hazards,
            PersonalAction => &esa.personal_action,
            CopingWithChange => &esa.coping_with_change,
            GettingAbout => &esa.getting_about,
            SocialEngagement => &esa.social_engagement,
            AppropriatenessOfBehaviour => &esa.appropriateness_of_behaviour,
        };
        answer.as_deref()
    }
}
