use std::fmt;

use tracing::{debug, error};

use super::answers::QuestionService;
use super::case_data::{is_yes, CaseData};
use super::conditions::FieldCondition;
use super::errors::AdjudicationError;
use super::points::PointsGate;

/// Identifier of one row in a benefit's condition matrix.
pub trait ConditionKind: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    fn name(self) -> &'static str;
}

/// One matrix row: primary checks gate applicability, validation checks may each fail.
#[derive(Debug, Clone)]
pub struct CompositeCondition<K> {
    kind: K,
    points_gate: Option<PointsGate>,
    show_points_gate: bool,
    primary: Vec<FieldCondition>,
    validation_points: Option<PointsGate>,
    validation: Vec<FieldCondition>,
}

impl<K: ConditionKind> CompositeCondition<K> {
    pub fn new(kind: K, primary: Vec<FieldCondition>) -> Self {
        Self {
            kind,
            points_gate: None,
            show_points_gate: true,
            primary,
            validation_points: None,
            validation: Vec::new(),
        }
    }

    pub fn with_points_gate(mut self, gate: Option<PointsGate>) -> Self {
        self.points_gate = gate;
        self
    }

    /// Whether the satisfied points gate is echoed in the composed error.
    pub fn show_points_gate(mut self, show: bool) -> Self {
        self.show_points_gate = show;
        self
    }

    pub fn with_validation_points(mut self, gate: PointsGate) -> Self {
        self.validation_points = Some(gate);
        self
    }

    pub fn with_validation(mut self, validation: Vec<FieldCondition>) -> Self {
        self.validation = validation;
        self
    }

    pub fn kind(&self) -> K {
        self.kind
    }

    pub fn primary(&self) -> &[FieldCondition] {
        &self.primary
    }

    pub fn validation(&self) -> &[FieldCondition] {
        &self.validation
    }

    /// Primary checks only; the generate-notice gate is applied by the matrix.
    pub fn primary_holds(&self, case: &CaseData, points: u32) -> bool {
        self.points_gate
            .map_or(true, |gate| gate.is_satisfied_by(points))
            && self.primary.iter().all(|condition| condition.is_satisfied(case))
    }

    pub fn satisfied_phrases(&self, case: &CaseData) -> Vec<String> {
        self.points_gate
            .filter(|_| self.show_points_gate)
            .map(|gate| gate.satisfied_message.to_string())
            .into_iter()
            .chain(
                self.primary
                    .iter()
                    .filter_map(|condition| condition.optional_satisfied_message(case)),
            )
            .collect()
    }

    pub fn validation_failures(&self, case: &CaseData, points: u32) -> Vec<String> {
        self.validation_points
            .filter(|gate| !gate.is_satisfied_by(points))
            .map(|gate| gate.failure_message.to_string())
            .into_iter()
            .chain(
                self.validation
                    .iter()
                    .filter_map(|condition| condition.optional_error_message(case)),
            )
            .collect()
    }

    pub fn error_message(&self, case: &CaseData, points: u32) -> Option<String> {
        compose_error(
            &self.satisfied_phrases(case),
            &self.validation_failures(case, points),
        )
    }
}

/// `[]` → `""`, `[a]` → `"a"`, `[a, b]` → `"a and b"`, `[a, b, c]` → `"a, b, and c"`.
pub fn join_grammatically(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

/// Build the caseworker-facing message for an applicable but unsatisfied condition.
pub fn compose_error(satisfied: &[String], failures: &[String]) -> Option<String> {
    if failures.is_empty() {
        return None;
    }

    let mut message = String::from("You have ");
    message.push_str(&join_grammatically(satisfied));
    if !satisfied.is_empty() {
        message.push_str(", but have ");
    }
    message.push_str(&join_grammatically(failures));
    message.push_str(". Please review your previous selection.");
    Some(message)
}

/// Question keys whose points feed the matrix's points gates.
pub type AnswerKeysExtractor = fn(&CaseData) -> Vec<String>;

/// Summary of the evaluated primary fields, logged when no row matches.
pub type DiagnosticsExtractor = fn(&CaseData) -> String;

/// Ordered decision matrix for one benefit. Row order is priority order.
pub struct ConditionMatrix<K> {
    benefit: &'static str,
    conditions: Vec<CompositeCondition<K>>,
    answer_keys: AnswerKeysExtractor,
    diagnostics: DiagnosticsExtractor,
}

impl<K: fmt::Debug> fmt::Debug for ConditionMatrix<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionMatrix")
            .field("benefit", &self.benefit)
            .field("conditions", &self.conditions)
            .finish_non_exhaustive()
    }
}

impl<K: ConditionKind> ConditionMatrix<K> {
    pub fn new(
        benefit: &'static str,
        conditions: Vec<CompositeCondition<K>>,
        answer_keys: AnswerKeysExtractor,
        diagnostics: DiagnosticsExtractor,
    ) -> Self {
        Self {
            benefit,
            conditions,
            answer_keys,
            diagnostics,
        }
    }

    pub fn benefit(&self) -> &'static str {
        self.benefit
    }

    pub fn conditions(&self) -> &[CompositeCondition<K>] {
        &self.conditions
    }

    pub fn get(&self, kind: K) -> Option<&CompositeCondition<K>> {
        self.conditions.iter().find(|condition| condition.kind == kind)
    }

    pub fn total_points(&self, questions: &dyn QuestionService, case: &CaseData) -> u32 {
        questions.total_points(case, &(self.answer_keys)(case))
    }

    pub fn is_applicable(
        &self,
        condition: &CompositeCondition<K>,
        questions: &dyn QuestionService,
        case: &CaseData,
    ) -> bool {
        is_yes(case.final_decision.generate_notice)
            && condition.primary_holds(case, self.total_points(questions, case))
    }

    fn applicable<'a>(
        &'a self,
        case: &'a CaseData,
        points: u32,
    ) -> impl Iterator<Item = &'a CompositeCondition<K>> + 'a {
        let requested = is_yes(case.final_decision.generate_notice);
        self.conditions
            .iter()
            .filter(move |condition| requested && condition.primary_holds(case, points))
    }

    /// First row, in declaration order, that is applicable and has no validation failures.
    pub fn select(
        &self,
        questions: &dyn QuestionService,
        case: &CaseData,
    ) -> Result<&CompositeCondition<K>, AdjudicationError> {
        let points = self.total_points(questions, case);
        let requested = is_yes(case.final_decision.generate_notice);
        let selected = self.conditions.iter().find(|condition| {
            requested
                && condition.primary_holds(case, points)
                && condition.validation_failures(case, points).is_empty()
        });

        match selected {
            Some(condition) => {
                debug!(
                    case_id = case.case_reference(),
                    benefit = self.benefit,
                    condition = condition.kind.name(),
                    points,
                    "decision notice condition selected"
                );
                Ok(condition)
            }
            None => {
                let detail = (self.diagnostics)(case);
                error!(
                    case_id = case.case_reference(),
                    benefit = self.benefit,
                    points,
                    detail = %detail,
                    "no decision notice condition matched"
                );
                Err(AdjudicationError::NoConditionMatched {
                    benefit: self.benefit,
                    case_id: case.case_reference().to_string(),
                    detail,
                })
            }
        }
    }

    /// Composed error of the first applicable row, when no row is fully satisfied.
    pub fn validation_error(
        &self,
        questions: &dyn QuestionService,
        case: &CaseData,
    ) -> Option<String> {
        let points = self.total_points(questions, case);
        let mut applicable = self.applicable(case, points).peekable();
        let first = *applicable.peek()?;
        if applicable.any(|condition| condition.validation_failures(case, points).is_empty()) {
            return None;
        }
        first.error_message(case, points)
    }
}
