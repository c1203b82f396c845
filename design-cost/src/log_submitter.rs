use design_cost_types::{AnswerSet, SubmitOutcome, Submitter};

/// Submitter that only logs the answers.
///
/// Stands in for the real enquiry endpoint: it has no network effect and
/// accepts every submission.
#[derive(Debug, Clone, Default)]
pub struct LogSubmitter {
    _private: (),
}

impl LogSubmitter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Submitter for LogSubmitter {
    fn submit(&self, answers: &AnswerSet) -> SubmitOutcome {
        match serde_json::to_string(answers) {
            Ok(json) => {
                tracing::info!(answers = %json, "design cost enquiry submitted");
                SubmitOutcome::Accepted
            }
            Err(err) => {
                tracing::error!(%err, "could not serialize answers");
                SubmitOutcome::rejected(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_everything() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let outcome = LogSubmitter::new().submit(&AnswerSet::new());
        assert_eq!(outcome, SubmitOutcome::Accepted);
    }
}
