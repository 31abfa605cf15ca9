//! People list page.

use roster_core::PersonId;
use roster_infra::{AccessResult, PeopleApi};
use roster_people::Person;

use crate::html::{error_message, escape, loading_indicator};
use crate::route::Route;

pub const LOAD_FAILED: &str = "Failed to load people. Please try again later.";
pub const DELETE_FAILED: &str = "Failed to delete person. Please try again later.";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this person?";
pub const EMPTY_STATE: &str = "No people found. Click \"Add Person\" to create a new entry.";

/// State of the list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    people: Vec<Person>,
    loading: bool,
    load_failed: bool,
    error: Option<String>,
    pending_delete: Option<PersonId>,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    /// A view that has not received its rows yet.
    pub fn new() -> Self {
        Self {
            people: Vec::new(),
            loading: true,
            load_failed: false,
            error: None,
            pending_delete: None,
        }
    }

    /// Build the view and load its rows.
    pub async fn mount(api: &dyn PeopleApi) -> Self {
        let mut view = Self::new();
        view.load(api).await;
        view
    }

    pub async fn load(&mut self, api: &dyn PeopleApi) {
        self.loading = true;
        self.error = None;
        let result = api.list().await;
        self.finish_load(result);
    }

    pub fn finish_load(&mut self, result: AccessResult<Vec<Person>>) {
        match result {
            Ok(people) => {
                self.people = people;
                self.load_failed = false;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load people");
                self.error = Some(LOAD_FAILED.to_string());
                self.load_failed = true;
            }
        }
        self.loading = false;
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: PersonId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn pending_delete(&self) -> Option<PersonId> {
        self.pending_delete
    }

    /// Take the confirmed id and enter the loading state.
    ///
    /// Returns `None` when nothing awaits confirmation.
    pub fn begin_delete(&mut self) -> Option<PersonId> {
        let id = self.pending_delete.take()?;
        self.loading = true;
        Some(id)
    }

    pub fn finish_delete(&mut self, id: PersonId, result: AccessResult<()>) {
        match result {
            Ok(()) => self.people.retain(|p| p.id != id),
            Err(e) => {
                tracing::error!(%id, error = %e, "failed to delete person");
                self.error = Some(DELETE_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    /// Carry out the pending deletion. Returns whether a record was removed.
    pub async fn confirm_delete(&mut self, api: &dyn PeopleApi) -> bool {
        let Some(id) = self.begin_delete() else {
            return false;
        };
        let result = api.delete(id).await;
        let deleted = result.is_ok();
        self.finish_delete(id, result);
        deleted
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn render(&self) -> String {
        let mut out = String::from(r#"<div class="people-list-container">"#);
        out.push_str(&format!(
            r#"<div class="header"><h1>People List</h1><a href="{}" class="add-button">Add Person</a></div>"#,
            Route::Add.path()
        ));

        if let Some(error) = &self.error {
            out.push_str(&error_message(error));
        }

        if self.loading {
            out.push_str(loading_indicator());
        } else if !self.load_failed {
            if let Some(id) = self.pending_delete {
                out.push_str(&self.render_confirmation(id));
            }
            if self.people.is_empty() {
                out.push_str(&format!(
                    r#"<div class="empty-state"><p>{}</p></div>"#,
                    escape(EMPTY_STATE)
                ));
            } else {
                out.push_str(&self.render_table());
            }
        }

        out.push_str("</div>");
        out
    }

    fn render_confirmation(&self, id: PersonId) -> String {
        let subject = self
            .people
            .iter()
            .find(|p| p.id == id)
            .map(|p| format!(r#"<p class="confirm-subject">{}</p>"#, escape(&p.full_name())))
            .unwrap_or_default();
        format!(
            concat!(
                r#"<div class="confirm-dialog" role="alertdialog">"#,
                "<p>{prompt}</p>{subject}",
                r#"<form method="post" action="/people/{id}/delete">"#,
                r#"<button type="submit" class="delete-button">Delete</button>"#,
                "</form>",
                r#"<a href="{list}" class="cancel-button">Cancel</a>"#,
                "</div>",
            ),
            prompt = DELETE_PROMPT,
            subject = subject,
            id = id,
            list = Route::List.path(),
        )
    }

    fn render_table(&self) -> String {
        let mut out = String::from(concat!(
            r#"<div class="table-container"><table class="people-table">"#,
            "<thead><tr><th>ID</th><th>First Name</th><th>Last Name</th>",
            "<th>Email</th><th>Phone</th><th>Actions</th></tr></thead><tbody>",
        ));
        for person in &self.people {
            out.push_str(&format!(
                concat!(
                    "<tr><td>{id}</td><td>{first}</td><td>{last}</td><td>{email}</td><td>{phone}</td>",
                    r#"<td class="actions">"#,
                    r#"<a href="{edit}" class="edit-button">Edit</a>"#,
                    r#"<form method="get" action="/people/{id}/delete">"#,
                    r#"<button type="submit" class="delete-button">Delete</button>"#,
                    "</form></td></tr>",
                ),
                id = person.id,
                first = escape(&person.first_name),
                last = escape(&person.last_name),
                email = escape(&person.email),
                phone = escape(person.phone.as_deref().unwrap_or("N/A")),
                edit = Route::Edit(person.id).path(),
            ));
        }
        out.push_str("</tbody></table></div>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Fail, RecordingApi};

    #[test]
    fn new_view_starts_loading() {
        let view = ListView::new();
        assert!(view.is_loading());
        assert!(view.render().contains("loading-spinner"));
        assert!(!view.render().contains("<table"));
    }

    #[tokio::test]
    async fn mount_lists_people_in_order() {
        let api = RecordingApi::seeded();
        let view = ListView::mount(&api).await;

        assert!(!view.is_loading());
        assert_eq!(view.error(), None);
        let ids: Vec<u64> = view.people().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(api.calls(), vec!["list"]);
    }

    #[tokio::test]
    async fn load_failure_shows_generic_error_and_no_table() {
        let api = RecordingApi::seeded().failing(Fail::List);
        let view = ListView::mount(&api).await;

        assert_eq!(view.error(), Some(LOAD_FAILED));
        assert!(!view.is_loading());
        let html = view.render();
        assert!(html.contains(LOAD_FAILED));
        assert!(!html.contains("<table"));
    }

    #[tokio::test]
    async fn missing_phone_renders_na() {
        let api = RecordingApi::empty();
        api.inner()
            .create(roster_people::NewPerson {
                first_name: "Ann".to_string(),
                last_name: "Lee".to_string(),
                email: "ann@x.com".to_string(),
                phone: None,
                address: None,
            })
            .await
            .unwrap();

        let html = ListView::mount(&api).await.render();
        assert!(html.contains("<td>ann@x.com</td><td>N/A</td>"));
        assert!(html.contains(r#"<a href="/people/edit/1" class="edit-button">Edit</a>"#));
    }

    #[tokio::test]
    async fn empty_store_renders_empty_state() {
        let html = ListView::mount(&RecordingApi::empty()).await.render();
        assert!(html.contains("No people found. Click &quot;Add Person&quot; to create a new entry."));
    }

    #[tokio::test]
    async fn confirmed_delete_removes_row() {
        let api = RecordingApi::seeded();
        let mut view = ListView::mount(&api).await;

        view.request_delete(PersonId::new(2));
        let html = view.render();
        assert!(html.contains(DELETE_PROMPT));
        assert!(html.contains("Jane Smith"));

        assert!(view.confirm_delete(&api).await);
        assert_eq!(view.pending_delete(), None);
        assert!(view.people().iter().all(|p| p.id != PersonId::new(2)));
        assert_eq!(view.people().len(), 2);
        assert_eq!(api.calls(), vec!["list", "delete"]);
    }

    #[tokio::test]
    async fn cancelled_or_unrequested_delete_makes_no_call() {
        let api = RecordingApi::seeded();
        let mut view = ListView::mount(&api).await;

        assert!(!view.confirm_delete(&api).await);
        view.request_delete(PersonId::new(1));
        view.cancel_delete();
        assert!(!view.confirm_delete(&api).await);

        assert_eq!(view.people().len(), 3);
        assert_eq!(api.calls(), vec!["list"]);
    }

    #[tokio::test]
    async fn failed_delete_keeps_rows_and_resets_loading() {
        let api = RecordingApi::seeded();
        let mut view = ListView::mount(&api).await;

        view.request_delete(PersonId::new(99));
        assert!(!view.confirm_delete(&api).await);

        assert_eq!(view.error(), Some(DELETE_FAILED));
        assert!(!view.is_loading());
        assert_eq!(view.people().len(), 3);
        assert!(view.render().contains("<table"));
    }

    #[test]
    fn begin_delete_enters_loading() {
        let mut view = ListView::new();
        view.finish_load(Ok(Vec::new()));
        view.request_delete(PersonId::new(1));
        assert_eq!(view.begin_delete(), Some(PersonId::new(1)));
        assert!(view.is_loading());
    }

    #[tokio::test]
    async fn rendered_text_is_escaped() {
        let api = RecordingApi::empty();
        api.inner()
            .create(roster_people::NewPerson {
                first_name: "<b>Ann</b>".to_string(),
                last_name: "Lee".to_string(),
                email: "ann@x.com".to_string(),
                phone: None,
                address: None,
            })
            .await
            .unwrap();
        let html = ListView::mount(&api).await.render();
        assert!(html.contains("&lt;b&gt;Ann&lt;/b&gt;"));
        assert!(!html.contains("<b>Ann</b>"));
    }
}
