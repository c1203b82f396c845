use crate::{AnswerSet, FormCopy, Submitter};

/// Something that can present the form to a user.
///
/// A frontend mounts a [`crate::FormComponent`], feeds it the user's
/// interactions and submits through `submitter` until a submission is
/// accepted.
pub trait FormFrontend {
    /// The error type for this frontend.
    type Error: Into<anyhow::Error>;

    /// Run the form.
    ///
    /// # Returns
    /// * `Ok(answers)` with the snapshot the submitter accepted
    /// * `Err` on cancellation or frontend failure
    fn collect(&self, copy: &FormCopy, submitter: &dyn Submitter)
    -> Result<AnswerSet, Self::Error>;
}
