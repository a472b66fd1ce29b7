use std::collections::HashMap;
use std::marker::PhantomData;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::activity::ActivityQuestion;
use super::case_data::CaseData;

/// Weighted descriptor selected for an activity question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityAnswer {
    pub code: String,
    pub points: u32,
    pub number: String,
    pub letter: String,
    pub text: String,
}

/// Question and points lookup consumed by the engine.
pub trait QuestionService: Send + Sync {
    /// Resolve the descriptor chosen for the question identified by `question_key`.
    ///
    /// Returns `None` for unknown keys, unanswered questions, and unscored answer codes.
    fn answer_for_question_key(&self, case: &CaseData, question_key: &str)
        -> Option<ActivityAnswer>;

    /// Sum of points over the given question keys; unresolved answers contribute zero.
    fn total_points(&self, case: &CaseData, question_keys: &[String]) -> u32 {
        question_keys
            .iter()
            .filter_map(|key| self.answer_for_question_key(case, key))
            .map(|answer| answer.points)
            .sum()
    }
}

/// Errors raised while loading a descriptor table.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorTableError {
    #[error("unable to read descriptor table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("descriptor table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("descriptor code '{0}' appears more than once")]
    DuplicateCode(String),
}

#[derive(Debug, Deserialize)]
struct DescriptorDocument {
    benefit: String,
    descriptors: Vec<ActivityAnswer>,
}

/// Catalog of scored descriptors keyed by answer code.
#[derive(Debug, Clone)]
pub struct DescriptorTable {
    benefit: String,
    answers: HashMap<String, ActivityAnswer>,
}

impl DescriptorTable {
    pub fn from_json(raw: &str) -> Result<Self, DescriptorTableError> {
        let document: DescriptorDocument = serde_json::from_str(raw)?;
        let mut answers = HashMap::with_capacity(document.descriptors.len());
        for answer in document.descriptors {
            if answers.contains_key(&answer.code) {
                return Err(DescriptorTableError::DuplicateCode(answer.code));
            }
            answers.insert(answer.code.clone(), answer);
        }

        Ok(Self {
            benefit: document.benefit,
            answers,
        })
    }

    pub fn load(path: &Path) -> Result<Self, DescriptorTableError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DescriptorTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn pip() -> Result<Self, DescriptorTableError> {
        Self::from_json(include_str!("../../../resources/pip_descriptors.json"))
    }

    pub fn esa() -> Result<Self, DescriptorTableError> {
        Self::from_json(include_str!("../../../resources/esa_descriptors.json"))
    }

    pub fn benefit(&self) -> &str {
        &self.benefit
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&ActivityAnswer> {
        self.answers.get(code)
    }
}

/// Table-backed [`QuestionService`] for one benefit's question catalog.
#[derive(Debug, Clone)]
pub struct DescriptorQuestionService<Q> {
    table: DescriptorTable,
    questions: PhantomData<fn() -> Q>,
}

impl<Q: ActivityQuestion> DescriptorQuestionService<Q> {
    pub fn new(table: DescriptorTable) -> Self {
        Self {
            table,
            questions: PhantomData,
        }
    }

    pub fn table(&self) -> &DescriptorTable {
        &self.table
    }

    /// Look up an answer code directly; free-text or unscored codes resolve to `None`.
    pub fn resolve_answer_code(&self, answer_code: &str) -> Option<ActivityAnswer> {
        self.table.get(answer_code).cloned()
    }
}

impl<Q: ActivityQuestion> QuestionService for DescriptorQuestionService<Q> {
    fn answer_for_question_key(
        &self,
        case: &CaseData,
        question_key: &str,
    ) -> Option<ActivityAnswer> {
        let question = match Q::by_key(question_key) {
            Ok(question) => question,
            Err(error) => {
                warn!(case_id = case.case_reference(), %error, "ignoring selected activity");
                return None;
            }
        };

        let code = question.answer(case)?;
        let answer = self.resolve_answer_code(code);
        if answer.is_none() {
            debug!(
                case_id = case.case_reference(),
                question = question_key,
                code,
                "answer code has no scored descriptor"
            );
        }
        answer
    }
}
