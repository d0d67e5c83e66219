use crate::constant::{LOADING_LABEL, SUBMIT_LABEL};
use crate::domain::{FormField, FormInput, ValidationErrors};
use crate::workflow::SubmissionPhase;
use std::fmt::{Display, Formatter};

/// A snapshot of the form, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub phase: SubmissionPhase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: FormField,
    /// Password values are masked.
    pub value: String,
    pub error: Option<&'static str>,
}

impl FormView {
    pub fn new(input: &FormInput, errors: &ValidationErrors, phase: SubmissionPhase) -> Self {
        let fields = FormField::ALL
            .iter()
            .map(|&field| {
                let raw = input.get(field);
                let value = if field.is_secret() {
                    "*".repeat(raw.chars().count())
                } else {
                    raw.to_string()
                };
                FieldView {
                    field,
                    value,
                    error: errors.get(field),
                }
            })
            .collect();
        Self { fields, phase }
    }

    pub fn submit_enabled(&self) -> bool {
        match self.phase {
            SubmissionPhase::Loading => false,
            SubmissionPhase::Idle | SubmissionPhase::Success(_) | SubmissionPhase::Failed(_) => {
                true
            }
        }
    }

    pub fn submit_label(&self) -> &str {
        match &self.phase {
            SubmissionPhase::Loading => LOADING_LABEL,
            SubmissionPhase::Success(message) => message.as_str(),
            SubmissionPhase::Idle | SubmissionPhase::Failed(_) => SUBMIT_LABEL,
        }
    }

    /// The message from the last failed request, shown under the fields.
    pub fn backend_error(&self) -> Option<&str> {
        match &self.phase {
            SubmissionPhase::Failed(message) => Some(message.as_str()),
            SubmissionPhase::Idle | SubmissionPhase::Loading | SubmissionPhase::Success(_) => None,
        }
    }
}

impl Display for FormView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Reset Password")?;
        for field in &self.fields {
            writeln!(f, "  {}: {}", field.field.label(), field.value)?;
            if let Some(error) = field.error {
                writeln!(f, "    ! {}", error)?;
            }
        }
        if let Some(error) = self.backend_error() {
            writeln!(f, "  ! {}", error)?;
        }
        let state = if self.submit_enabled() { "" } else { " (disabled)" };
        write!(f, "  [{}]{}", self.submit_label(), state)
    }
}
