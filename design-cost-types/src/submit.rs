use crate::AnswerSet;

/// What the receiving side made of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected(String),
}

impl SubmitOutcome {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Receiver of completed answer sets.
///
/// Called once per successful submit, with a snapshot of the answers at
/// that moment.
pub trait Submitter {
    fn submit(&self, answers: &AnswerSet) -> SubmitOutcome;
}

impl<F> Submitter for F
where
    F: Fn(&AnswerSet) -> SubmitOutcome,
{
    fn submit(&self, answers: &AnswerSet) -> SubmitOutcome {
        self(answers)
    }
}
