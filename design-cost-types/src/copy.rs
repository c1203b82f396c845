/// The words on the form.
///
/// Everything a frontend shows that is not an option label lives here, so
/// differently worded variants of the form share one implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormCopy {
    pub title: String,
    /// Shown under the title.
    pub intro: Option<String>,
    pub property_type_prompt: String,
    pub extension_type_prompt: String,
    /// Heading of the ground-floor sub-type menu.
    pub ground_floor_prompt: String,
    pub bedrooms_prompt: String,
    pub timeline_prompt: String,
    pub services_prompt: String,
    /// Heading above the contact details.
    pub details_prompt: String,
    pub submit_label: String,
}

impl Default for FormCopy {
    fn default() -> Self {
        Self {
            title: "Calculate your design costs".to_string(),
            intro: Some(
                "Get an instant price estimate on architectural drawings and planning support \
                 from the highest-rated practice on Trustpilot."
                    .to_string(),
            ),
            property_type_prompt: "What sort of property is this?".to_string(),
            extension_type_prompt: "And which bit do you want to extend?".to_string(),
            ground_floor_prompt: "What kind of ground floor extension?".to_string(),
            bedrooms_prompt: "How many bedrooms does this property have?".to_string(),
            timeline_prompt: "When are you hoping to start the design process?".to_string(),
            services_prompt: "Are you interested in any of these services?".to_string(),
            details_prompt: "A few details from you, please...".to_string(),
            submit_label: "Submit".to_string(),
        }
    }
}

impl FormCopy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = Some(intro.into());
        self
    }

    pub fn without_intro(mut self) -> Self {
        self.intro = None;
        self
    }

    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }
}
