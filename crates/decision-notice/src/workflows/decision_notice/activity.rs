use std::fmt;

use super::case_data::CaseData;
use super::errors::AdjudicationError;

/// Top-level category of claimant need, scored independently.
pub trait ActivityDomain: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    const ALL: &'static [Self];

    fn display_name(self) -> &'static str;

    /// Declared award-type code for this domain, when the benefit records one.
    fn award_type_code(self, case: &CaseData) -> Option<&str>;

    /// Activity-question keys selected for this domain. `None` when the list was never answered.
    fn selected_question_keys(self, case: &CaseData) -> Option<&[String]>;
}

/// Registry entry for one scored activity question.
///
/// Implementations are fixed enums; `ALL` is the declaration-ordered registry.
pub trait ActivityQuestion: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    type Domain: ActivityDomain;

    const ALL: &'static [Self];

    fn key(self) -> &'static str;

    fn label(self) -> &'static str;

    fn domain(self) -> Self::Domain;

    /// Selected answer code for this question, e.g. `preparingFood1f`.
    fn answer(self, case: &CaseData) -> Option<&str>;

    fn by_key(key: &str) -> Result<Self, AdjudicationError> {
        Self::ALL
            .iter()
            .copied()
            .find(|question| question.key() == key)
            .ok_or_else(|| AdjudicationError::UnknownQuestionKey(key.to_string()))
    }

    fn for_domain(domain: Self::Domain) -> Vec<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|question| question.domain() == domain)
            .collect()
    }
}
