use std::fmt;

use super::case_data::{CaseData, YesNo};
use super::points::AwardType;

/// Value read from a single case-data field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Missing,
    Text(String),
    YesNo(YesNo),
    List(Vec<String>),
}

impl FieldValue {
    pub fn text(value: Option<&str>) -> Self {
        match value {
            Some(value) => FieldValue::Text(value.to_string()),
            None => FieldValue::Missing,
        }
    }

    pub fn yes_no(value: Option<YesNo>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::YesNo)
    }

    pub fn list(value: Option<&[String]>) -> Self {
        value.map_or(FieldValue::Missing, |items| FieldValue::List(items.to_vec()))
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Missing => write!(f, "null"),
            FieldValue::Text(value) => write!(f, "{value}"),
            FieldValue::YesNo(value) => write!(f, "{}", value.label()),
            FieldValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNoPredicate {
    True,
    False,
    /// Satisfied by `No` or by no answer at all.
    NotTrue,
    Unspecified,
    Specified,
}

impl YesNoPredicate {
    pub fn test(self, value: &FieldValue) -> bool {
        let answer = match value {
            FieldValue::YesNo(answer) => Some(*answer),
            _ => None,
        };
        match self {
            YesNoPredicate::True => answer == Some(YesNo::Yes),
            YesNoPredicate::False => answer == Some(YesNo::No),
            YesNoPredicate::NotTrue => answer != Some(YesNo::Yes),
            YesNoPredicate::Unspecified => matches!(value, FieldValue::Missing),
            YesNoPredicate::Specified => !matches!(value, FieldValue::Missing),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowedOrRefused {
    Allowed,
    Refused,
}

impl AllowedOrRefused {
    pub const fn code(self) -> &'static str {
        match self {
            AllowedOrRefused::Allowed => "allowed",
            AllowedOrRefused::Refused => "refused",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "allowed" => Some(AllowedOrRefused::Allowed),
            "refused" => Some(AllowedOrRefused::Refused),
            _ => None,
        }
    }
}

/// Tribunal decision relative to the DWP decision for one activity domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparedToDwp {
    Same,
    Lower,
    Higher,
    NotConsidered,
}

impl ComparedToDwp {
    pub const fn code(self) -> Option<&'static str> {
        match self {
            ComparedToDwp::Same => Some("same"),
            ComparedToDwp::Lower => Some("lower"),
            ComparedToDwp::Higher => Some("higher"),
            ComparedToDwp::NotConsidered => None,
        }
    }

    fn test(self, value: &FieldValue) -> bool {
        match (self.code(), value.as_text()) {
            (Some(code), Some(text)) => code == text,
            (None, None) => true,
            (None, Some(text)) => text.trim().is_empty(),
            (Some(_), None) => false,
        }
    }

    fn phrase(self) -> &'static str {
        match self {
            ComparedToDwp::Same => "the same as",
            ComparedToDwp::Lower => "lower than",
            ComparedToDwp::Higher => "higher than",
            ComparedToDwp::NotConsidered => "not compared to",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardConsidered {
    Considered,
    NotConsidered,
}

impl AwardConsidered {
    fn test(self, value: &FieldValue) -> bool {
        let considered = value
            .as_text()
            .map(|code| !code.trim().is_empty() && code != AwardType::NotConsidered.code())
            .unwrap_or(false);
        match self {
            AwardConsidered::Considered => considered,
            AwardConsidered::NotConsidered => !considered,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringListPredicate {
    Empty,
    NotEmpty,
    Unspecified,
}

impl StringListPredicate {
    fn test(self, value: &FieldValue) -> bool {
        match (self, value) {
            (StringListPredicate::Unspecified, FieldValue::Missing) => true,
            (StringListPredicate::Empty, FieldValue::List(items)) => items.is_empty(),
            (StringListPredicate::NotEmpty, FieldValue::List(items)) => !items.is_empty(),
            _ => false,
        }
    }
}

/// Predicate kind applied to an extracted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCheck {
    YesNo(YesNoPredicate),
    AllowedOrRefused(AllowedOrRefused),
    ComparedToDwp(ComparedToDwp),
    Award(AwardConsidered),
    StringList(StringListPredicate),
}

impl FieldCheck {
    pub fn test(self, value: &FieldValue) -> bool {
        match self {
            FieldCheck::YesNo(predicate) => predicate.test(value),
            FieldCheck::AllowedOrRefused(expected) => value.as_text() == Some(expected.code()),
            FieldCheck::ComparedToDwp(expected) => expected.test(value),
            FieldCheck::Award(expected) => expected.test(value),
            FieldCheck::StringList(predicate) => predicate.test(value),
        }
    }
}

pub type FieldExtractor = fn(&CaseData) -> FieldValue;

fn allowed_or_refused_value(case: &CaseData) -> FieldValue {
    FieldValue::text(case.final_decision.allowed_or_refused.as_deref())
}

/// Predicate plus message producer over one case-data field.
#[derive(Clone, Copy)]
pub struct FieldCondition {
    field_name: &'static str,
    activity: Option<&'static str>,
    check: FieldCheck,
    extract: FieldExtractor,
    display_satisfied: bool,
}

impl fmt::Debug for FieldCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldCondition")
            .field("field_name", &self.field_name)
            .field("activity", &self.activity)
            .field("check", &self.check)
            .field("display_satisfied", &self.display_satisfied)
            .finish()
    }
}

impl FieldCondition {
    pub const fn new(field_name: &'static str, check: FieldCheck, extract: FieldExtractor) -> Self {
        Self {
            field_name,
            activity: None,
            check,
            extract,
            display_satisfied: false,
        }
    }

    pub const fn yes_no(
        field_name: &'static str,
        predicate: YesNoPredicate,
        extract: FieldExtractor,
    ) -> Self {
        Self::new(field_name, FieldCheck::YesNo(predicate), extract)
    }

    pub const fn string_list(
        field_name: &'static str,
        predicate: StringListPredicate,
        extract: FieldExtractor,
    ) -> Self {
        Self::new(field_name, FieldCheck::StringList(predicate), extract)
    }

    pub const fn allowed_or_refused(expected: AllowedOrRefused) -> Self {
        Self::new(
            "Allowed or Refused",
            FieldCheck::AllowedOrRefused(expected),
            allowed_or_refused_value,
        )
    }

    /// Scope the field to an activity domain, e.g. "Daily Living".
    pub const fn for_activity(mut self, activity: &'static str) -> Self {
        self.activity = Some(activity);
        self
    }

    /// Emit an affirmation phrase when satisfied, for the prefix of a composed error.
    pub const fn displayed(mut self, display: bool) -> Self {
        self.display_satisfied = display;
        self
    }

    pub fn field_name(&self) -> &'static str {
        self.field_name
    }

    pub fn check(&self) -> FieldCheck {
        self.check
    }

    pub fn value(&self, case: &CaseData) -> FieldValue {
        (self.extract)(case)
    }

    pub fn is_satisfied(&self, case: &CaseData) -> bool {
        self.check.test(&self.value(case))
    }

    fn question(&self) -> String {
        match self.activity {
            Some(activity) => format!("the {activity} {} question", self.field_name),
            None => format!("the {} question", self.field_name),
        }
    }

    pub fn optional_error_message(&self, case: &CaseData) -> Option<String> {
        let value = self.value(case);
        if self.check.test(&value) {
            return None;
        }

        let question = self.question();
        let phrase = match (&value, self.check) {
            (FieldValue::Missing, _) => return Some(format!("a missing answer for {question}")),
            (_, FieldCheck::YesNo(YesNoPredicate::Unspecified))
            | (_, FieldCheck::StringList(StringListPredicate::Unspecified)) => {
                "submitted an unexpected answer".to_string()
            }
            (FieldValue::YesNo(answer), _) => format!("answered {}", answer.label()),
            (FieldValue::List(items), _) if items.is_empty() => "made no selections".to_string(),
            (FieldValue::List(_), _) => "made selections".to_string(),
            (FieldValue::Text(text), _) => text.clone(),
        };
        Some(format!("{phrase} for {question}"))
    }

    pub fn optional_satisfied_message(&self, case: &CaseData) -> Option<String> {
        if !self.display_satisfied {
            return None;
        }
        let value = self.value(case);
        if !self.check.test(&value) {
            return None;
        }

        let subject = match self.activity {
            Some(activity) => format!("{activity} {}", self.field_name),
            None => self.field_name.to_string(),
        };
        let message = match (self.check, &value) {
            (_, FieldValue::Missing) => format!("not provided an answer to {}", self.question()),
            (FieldCheck::AllowedOrRefused(expected), _) => {
                format!("specified that the appeal is {}", expected.code())
            }
            (FieldCheck::ComparedToDwp(expected), _) => format!(
                "specified that the {subject} decision is {} the DWP decision",
                expected.phrase()
            ),
            (FieldCheck::Award(AwardConsidered::Considered), _) => {
                format!("specified that {subject} is considered")
            }
            (FieldCheck::Award(AwardConsidered::NotConsidered), _) => {
                format!("specified that {subject} is not considered")
            }
            (_, FieldValue::YesNo(YesNo::Yes)) => format!("specified that {subject} applies"),
            (_, FieldValue::YesNo(YesNo::No)) => {
                format!("specified that {subject} does not apply")
            }
            (_, FieldValue::List(items)) if items.is_empty() => {
                format!("made no selections for {}", self.question())
            }
            (_, FieldValue::List(_)) => format!("made selections for {}", self.question()),
            (_, FieldValue::Text(text)) => format!("specified {text} for {}", self.question()),
        };
        Some(message)
    }

    /// `field=value` pair for diagnostics.
    pub fn describe(&self, case: &CaseData) -> String {
        format!("{}={}", self.field_name, self.value(case))
    }
}
