//! Add / edit person page.
//!
//! Field errors are computed on submit and shown only for touched fields.
//! A field becomes touched when the user leaves it, and a submit attempt
//! touches every validated field at once.

use std::collections::BTreeSet;

use roster_core::{Field, FieldErrors, PersonId};
use roster_infra::{AccessResult, PeopleApi};
use roster_people::{NewPerson, Person, PersonForm};

use crate::html::{error_message, escape, loading_indicator};
use crate::route::Route;

pub const NOT_FOUND: &str = "Person not found";
pub const LOAD_FAILED: &str = "Failed to load person details. Please try again later.";

/// Whether the form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(PersonId),
}

impl FormMode {
    pub fn route(&self) -> Route {
        match self {
            FormMode::Create => Route::Add,
            FormMode::Edit(id) => Route::Edit(*id),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    fn heading(&self) -> &'static str {
        match self {
            FormMode::Create => "Add Person",
            FormMode::Edit(_) => "Edit Person",
        }
    }

    fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Save",
            FormMode::Edit(_) => "Update",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            FormMode::Create => "add",
            FormMode::Edit(_) => "update",
        }
    }
}

/// A validated, normalized payload ready for the access layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(NewPerson),
    Update(Person),
}

/// State of the add/edit page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    mode: FormMode,
    values: PersonForm,
    errors: FieldErrors,
    touched: BTreeSet<Field>,
    loading: bool,
    submitting: bool,
    error: Option<String>,
    /// False once an edit target turned out to be missing or unloadable;
    /// the form is then neither rendered nor submittable.
    available: bool,
}

impl FormView {
    /// A form in `mode` with blank fields.
    ///
    /// Edit mode starts loading and unavailable until [`FormView::load`]
    /// resolves.
    pub fn new(mode: FormMode) -> Self {
        let editing = mode.is_edit();
        Self {
            mode,
            values: PersonForm::default(),
            errors: FieldErrors::new(),
            touched: BTreeSet::new(),
            loading: editing,
            submitting: false,
            error: None,
            available: !editing,
        }
    }

    /// A form holding values the user already entered (e.g. a posted form).
    pub fn with_values(mode: FormMode, values: PersonForm) -> Self {
        Self {
            values,
            loading: false,
            available: true,
            ..Self::new(mode)
        }
    }

    /// Build the view; in edit mode, load the record first.
    pub async fn mount(api: &dyn PeopleApi, mode: FormMode) -> Self {
        let mut view = Self::new(mode);
        if mode.is_edit() {
            view.load(api).await;
        }
        view
    }

    pub async fn load(&mut self, api: &dyn PeopleApi) {
        let FormMode::Edit(id) = self.mode else {
            return;
        };
        self.loading = true;
        self.error = None;
        let result = api.get(id).await;
        self.finish_load(result);
    }

    pub fn finish_load(&mut self, result: AccessResult<Option<Person>>) {
        match result {
            Ok(Some(person)) => {
                self.values = PersonForm::from(&person);
                self.available = true;
            }
            Ok(None) => {
                self.error = Some(NOT_FOUND.to_string());
                self.available = false;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load person");
                self.error = Some(LOAD_FAILED.to_string());
                self.available = false;
            }
        }
        self.loading = false;
    }

    /// The user changed a field. Clears that field's current error.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        self.errors.remove(field);
    }

    /// The user left a field.
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Re-run every rule; returns whether the form is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = self.values.validate().err().unwrap_or_default();
        self.errors.is_empty()
    }

    /// Start a submit attempt.
    ///
    /// Touches every validated field, then validates. Returns the payload to
    /// send, or `None` when the form is invalid, unavailable, or already
    /// submitting.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if !self.available || self.submitting || self.loading {
            return None;
        }
        self.touched.extend(Field::VALIDATED);
        if !self.validate() {
            return None;
        }

        self.submitting = true;
        self.error = None;
        let data = self.values.normalize();
        Some(match self.mode {
            FormMode::Create => Submission::Create(data),
            FormMode::Edit(id) => Submission::Update(Person::with_id(id, data)),
        })
    }

    /// Apply the access-layer outcome. Returns where to navigate on success.
    pub fn finish_submit(&mut self, result: AccessResult<Person>) -> Option<Route> {
        self.submitting = false;
        match result {
            Ok(person) => {
                tracing::debug!(id = %person.id, "person saved");
                Some(Route::List)
            }
            Err(e) if e.is_not_found() && self.mode.is_edit() => {
                tracing::warn!(error = %e, "edit target vanished");
                self.error = Some(NOT_FOUND.to_string());
                self.available = false;
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to {} person", self.mode.verb());
                self.error = Some(format!(
                    "Failed to {} person. Please try again later.",
                    self.mode.verb()
                ));
                None
            }
        }
    }

    /// Full submit cycle: validate, call the access layer, apply the result.
    pub async fn submit(&mut self, api: &dyn PeopleApi) -> Option<Route> {
        let submission = self.begin_submit()?;
        let result = match submission {
            Submission::Create(data) => api.create(data).await,
            Submission::Update(person) => api.update(person).await,
        };
        self.finish_submit(result)
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn values(&self) -> &PersonForm {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// The error to show next to `field`, if it has one and was touched.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn render(&self) -> String {
        let mut out = String::from(r#"<div class="person-edit-container">"#);
        out.push_str(&format!("<h1>{}</h1>", self.mode.heading()));

        if let Some(error) = &self.error {
            out.push_str(&error_message(error));
        }

        if self.loading {
            out.push_str(loading_indicator());
        } else if self.available {
            out.push_str(&self.render_form());
        }

        out.push_str("</div>");
        out
    }

    fn render_form(&self) -> String {
        let mut out = format!(
            r#"<form method="post" action="{}" class="person-form" novalidate>"#,
            self.mode.route().path()
        );
        for field in Field::ALL {
            out.push_str(&self.render_field(field));
        }

        let (disabled, label) = if self.submitting {
            (" disabled", "Saving...")
        } else {
            ("", self.mode.submit_label())
        };
        out.push_str(&format!(
            concat!(
                r#"<div class="form-actions">"#,
                r#"<a href="{list}" class="cancel-button">Cancel</a>"#,
                r#"<button type="submit" class="submit-button"{disabled}>{label}</button>"#,
                "</div></form>",
            ),
            list = Route::List.path(),
            disabled = disabled,
            label = label,
        ));
        out
    }

    fn render_field(&self, field: Field) -> String {
        let name = field.as_str();
        let value = escape(self.values.get(field));
        let visible_error = self.visible_error(field);
        let class = if visible_error.is_some() { "invalid" } else { "" };
        let marker = if field.is_required() { " *" } else { "" };

        let control = match field {
            Field::Address => format!(
                r#"<textarea id="{name}" name="{name}" rows="3">{value}</textarea>"#
            ),
            _ => {
                let kind = match field {
                    Field::Email => "email",
                    Field::Phone => "tel",
                    _ => "text",
                };
                format!(
                    r#"<input type="{kind}" id="{name}" name="{name}" value="{value}" class="{class}">"#
                )
            }
        };

        let hint = visible_error
            .map(|message| format!(r#"<div class="error-hint">{}</div>"#, escape(message)))
            .unwrap_or_default();

        format!(
            r#"<div class="form-group"><label for="{name}">{label}{marker}</label>{control}{hint}</div>"#,
            label = field.label(),
        )
    }
}
