//! Login submission state machine.
//!
//! DESIGN
//! ======
//! All form behavior funnels through [`LoginForm::apply`], a reducer over
//! [`LoginEvent`] returning a [`LoginEffect`] for the page to run. The
//! transitions are synchronous and side-effect free, so the whole submit
//! flow is testable without a browser; the page only translates effects
//! into network calls and navigation.
//!
//! Submission is single-flight: each accepted submit bumps an attempt
//! counter, and settlement events carrying any other attempt id are
//! dropped. A settlement that arrives after the screen has already failed
//! or succeeded is likewise dropped.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use crate::util::validate::{validate_email, validate_password};

/// Shown when the server resolves the login call without issuing a token.
pub const INVALID_CREDENTIALS: &str = "Invalid login credentials.";

/// Form inputs owned by the login screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub email: String,
    pub password: String,
}

/// The two editable login fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

/// A validation or submission error.
///
/// Field errors are tied to one input and surfaced only once that input
/// has been touched; general errors report submission outcomes and are
/// surfaced unconditionally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormError {
    Field { field: Field, message: String },
    General { message: String },
}

/// Submission lifecycle of the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Failed,
    Succeeded,
}

/// Events the login screen feeds into the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginEvent {
    FieldChanged { field: Field, value: String },
    FieldBlurred { field: Field },
    SecureEntryToggled,
    SubmitPressed,
    /// The auth call resolved; `access_token` may still be absent.
    CallResolved { attempt: u64, access_token: Option<String> },
    /// The auth call failed in transport or was rejected by the server.
    CallRejected { attempt: u64, message: String },
}

/// Side effects the page must run after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginEffect {
    None,
    Authenticate { attempt: u64, email: String, password: String },
    GoToDashboard { token: String },
}

/// Login form state: values, touched set, errors, and submit phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub values: FormValues,
    touched_email: bool,
    touched_password: bool,
    errors: Vec<FormError>,
    pub phase: Phase,
    /// Whether the password input masks its characters.
    pub secure_entry: bool,
    /// Id of the most recently accepted submit.
    pub attempt: u64,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            values: FormValues::default(),
            touched_email: false,
            touched_password: false,
            errors: Vec::new(),
            phase: Phase::Idle,
            secure_entry: true,
            attempt: 0,
        }
    }
}

impl LoginForm {
    /// Apply one event and return the effect the caller must run.
    pub fn apply(&mut self, event: LoginEvent) -> LoginEffect {
        match event {
            LoginEvent::FieldChanged { field, value } => {
                match field {
                    Field::Email => self.values.email = value,
                    Field::Password => self.values.password = value,
                }
                LoginEffect::None
            }
            LoginEvent::FieldBlurred { field } => {
                match field {
                    Field::Email => self.touched_email = true,
                    Field::Password => self.touched_password = true,
                }
                self.revalidate();
                LoginEffect::None
            }
            LoginEvent::SecureEntryToggled => {
                self.secure_entry = !self.secure_entry;
                LoginEffect::None
            }
            LoginEvent::SubmitPressed => self.submit(),
            LoginEvent::CallResolved { attempt, access_token } => {
                if !self.accepts_settlement(attempt) {
                    return LoginEffect::None;
                }
                match access_token.filter(|token| !token.is_empty()) {
                    Some(token) => {
                        self.phase = Phase::Succeeded;
                        LoginEffect::GoToDashboard { token }
                    }
                    None => {
                        self.fail(INVALID_CREDENTIALS.to_owned());
                        LoginEffect::None
                    }
                }
            }
            LoginEvent::CallRejected { attempt, message } => {
                if !self.accepts_settlement(attempt) {
                    return LoginEffect::None;
                }
                self.fail(message);
                LoginEffect::None
            }
        }
    }

    /// Error for `field`, surfaced only once the field has been touched.
    pub fn field_error(&self, field: Field) -> Option<&str> {
        if !self.touched(field) {
            return None;
        }
        self.errors.iter().find_map(|error| match error {
            FormError::Field { field: at, message } if *at == field => Some(message.as_str()),
            FormError::Field { .. } | FormError::General { .. } => None,
        })
    }

    /// Submission-outcome error, surfaced unconditionally once present.
    pub fn general_error(&self) -> Option<&str> {
        self.errors.iter().find_map(|error| match error {
            FormError::General { message } => Some(message.as_str()),
            FormError::Field { .. } => None,
        })
    }

    /// Whether an auth call is in flight.
    pub fn submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    fn submit(&mut self) -> LoginEffect {
        if self.phase == Phase::Submitting {
            return LoginEffect::None;
        }
        self.values.email = self.values.email.trim().to_owned();
        self.touched_email = true;
        self.touched_password = true;
        self.revalidate();
        if self.has_field_errors() {
            self.phase = Phase::Idle;
            return LoginEffect::None;
        }
        // Valid: drop any stale submission-outcome error and go in flight.
        self.errors.clear();
        self.attempt += 1;
        self.phase = Phase::Submitting;
        LoginEffect::Authenticate {
            attempt: self.attempt,
            email: self.values.email.clone(),
            password: self.values.password.clone(),
        }
    }

    /// Recompute field errors against the rule set, keeping general errors.
    fn revalidate(&mut self) {
        self.errors.retain(|error| matches!(error, FormError::General { .. }));
        if let Some(message) = validate_email(&self.values.email) {
            self.errors.push(FormError::Field { field: Field::Email, message: message.to_owned() });
        }
        if let Some(message) = validate_password(&self.values.password) {
            self.errors.push(FormError::Field { field: Field::Password, message: message.to_owned() });
        }
    }

    /// A settlement only counts while its attempt is the one in flight.
    fn accepts_settlement(&self, attempt: u64) -> bool {
        self.phase == Phase::Submitting && attempt == self.attempt
    }

    fn fail(&mut self, message: String) {
        self.phase = Phase::Failed;
        self.errors.push(FormError::General { message });
    }

    fn touched(&self, field: Field) -> bool {
        match field {
            Field::Email => self.touched_email,
            Field::Password => self.touched_password,
        }
    }

    fn has_field_errors(&self) -> bool {
        self.errors.iter().any(|error| matches!(error, FormError::Field { .. }))
    }
}
