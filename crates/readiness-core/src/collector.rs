//! Response collection over a catalog.
//!
//! The collector walks the catalog one question at a time, keeps at most one
//! response per question, and scores the frozen response list once the last
//! question is answered.

use chrono::{DateTime, Utc};

use crate::engine::ScoringEngine;
use crate::error::ScoringError;
use crate::model::{AnswerValue, Catalog, Category, Question, Response};
use crate::parser::answer_problem;
use crate::report::AssessmentResult;

/// Where the cursor went after recording an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved to another question.
    Next { section: usize, question: usize },
    /// The final question was answered and the result computed.
    Complete,
}

/// Accumulates responses and produces a result on completion.
#[derive(Debug, Clone)]
pub struct ResponseCollector<'a> {
    engine: ScoringEngine<'a>,
    section: usize,
    question: usize,
    responses: Vec<Response>,
    respondent: Option<String>,
    result: Option<AssessmentResult>,
}

impl<'a> ResponseCollector<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            engine: ScoringEngine::new(catalog),
            section: 0,
            question: 0,
            responses: Vec::new(),
            respondent: None,
            result: None,
        }
    }

    /// Record a respondent name on the computed result.
    pub fn with_respondent(mut self, respondent: impl Into<String>) -> Self {
        self.respondent = Some(respondent.into());
        self
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.engine.catalog()
    }

    /// Current `(section, question)` cursor.
    pub fn position(&self) -> (usize, usize) {
        (self.section, self.question)
    }

    pub fn current_category(&self) -> Option<&'a Category> {
        self.catalog().categories.get(self.section)
    }

    pub fn current_question(&self) -> Option<&'a Question> {
        self.current_category()
            .and_then(|c| c.questions.get(self.question))
    }

    /// The stored response for the question under the cursor.
    pub fn current_response(&self) -> Option<&Response> {
        let question = self.current_question()?;
        self.responses.iter().find(|r| r.question_id == question.id)
    }

    /// Answer the current question with a timestamp of now.
    pub fn record(&mut self, value: impl Into<AnswerValue>) -> Result<Step, ScoringError> {
        self.record_at(value, Utc::now())
    }

    /// Answer the current question, replacing any earlier answer to it, and
    /// advance the cursor.
    pub fn record_at(
        &mut self,
        value: impl Into<AnswerValue>,
        timestamp: DateTime<Utc>,
    ) -> Result<Step, ScoringError> {
        if self.result.is_some() {
            return Err(ScoringError::AlreadyComplete);
        }
        let question = self.current_question().ok_or(ScoringError::OutOfRange {
            section: self.section,
            question: self.question,
        })?;

        let value = value.into();
        if let Some(reason) = answer_problem(question, &value) {
            return Err(ScoringError::InvalidAnswer {
                question_id: question.id.clone(),
                reason,
            });
        }

        self.responses.retain(|r| r.question_id != question.id);
        self.responses
            .push(Response::at(question.id.clone(), value, timestamp));

        Ok(self.advance())
    }

    fn advance(&mut self) -> Step {
        let catalog = self.catalog();
        let section_len = catalog.categories[self.section].questions.len();

        if self.question + 1 < section_len {
            self.question += 1;
        } else if self.section + 1 < catalog.categories.len() {
            self.section += 1;
            self.question = 0;
        } else {
            let mut result = self.engine.evaluate(&self.responses);
            result.respondent = self.respondent.clone();
            self.result = Some(result);
            return Step::Complete;
        }

        Step::Next {
            section: self.section,
            question: self.question,
        }
    }

    /// Move the cursor to a specific question.
    pub fn go_to(&mut self, section: usize, question: usize) -> Result<(), ScoringError> {
        let exists = self
            .catalog()
            .categories
            .get(section)
            .is_some_and(|c| question < c.questions.len());
        if !exists {
            return Err(ScoringError::OutOfRange { section, question });
        }
        self.section = section;
        self.question = question;
        Ok(())
    }

    /// Move the cursor to a question by id.
    pub fn go_to_question(&mut self, question_id: &str) -> Result<(), ScoringError> {
        let position = self
            .catalog()
            .categories
            .iter()
            .enumerate()
            .find_map(|(s, c)| {
                c.questions
                    .iter()
                    .position(|q| q.id == question_id)
                    .map(|q| (s, q))
            });
        let (section, question) =
            position.ok_or_else(|| ScoringError::UnknownQuestion(question_id.to_string()))?;
        self.go_to(section, question)
    }

    /// Step back one question, crossing into the previous section if needed.
    /// Returns `false` at the first question.
    pub fn back(&mut self) -> bool {
        if self.question > 0 {
            self.question -= 1;
            return true;
        }
        if self.section == 0 {
            return false;
        }
        self.section -= 1;
        self.question = self.catalog().categories[self.section]
            .questions
            .len()
            .saturating_sub(1);
        true
    }

    /// Discard all responses and any result, and return to the start.
    pub fn restart(&mut self) {
        self.section = 0;
        self.question = 0;
        self.responses.clear();
        self.result = None;
    }

    /// Frozen view of the collected responses, in collection order.
    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn answered(&self) -> usize {
        self.responses.len()
    }

    pub fn total_questions(&self) -> usize {
        self.catalog().total_questions()
    }

    /// Percentage of questions answered, 0-100.
    pub fn progress(&self) -> f64 {
        let total = self.total_questions();
        if total == 0 {
            return 0.0;
        }
        self.answered() as f64 / total as f64 * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    /// Take the responses and result, consuming the collector.
    pub fn into_parts(self) -> (Vec<Response>, Option<AssessmentResult>) {
        (self.responses, self.result)
    }
}
