//! Contact controller: glues view events to API calls and re-renders the list.
//! Everything here is toolkit-free; the GTK binding lives in `ui::view`.

use std::cell::RefCell;

use thiserror::Error;

use crate::api::ContactsApi;
use crate::api::models::{Contact, ContactDraft, Group};
use crate::render::{ListContent, render_contacts};

/// What the controller needs from the window.
pub trait ContactView {
    fn show_list(&self, content: ListContent);
    /// Blocking alert for a failed request.
    fn show_error(&self, message: &str);
    /// Blocking alert for a form that cannot be submitted.
    fn show_invalid(&self, message: &str);
    /// Transient success notice.
    fn notify(&self, message: &str);
    fn read_form(&self) -> FormInput;
    fn fill_form(&self, contact: &Contact);
    fn reset_form(&self);
    fn focus_form(&self);
    fn search_query(&self) -> String;
    fn show_delete_prompt(&self, name: &str);
    fn hide_delete_prompt(&self);
}

/// Raw form field values. `id` is the hidden field: empty when adding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub company: String,
    pub group: Group,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(ContactDraft),
    Update(i64, ContactDraft),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a name.")]
    MissingName,
    #[error("Please enter a phone number.")]
    MissingPhone,
    #[error("The contact being edited has an invalid id: {0}")]
    InvalidId(String),
}

impl FormInput {
    pub fn validate(&self) -> Result<Submission, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(ValidationError::MissingPhone);
        }
        let draft = ContactDraft {
            name: name.to_string(),
            phone: phone.to_string(),
            email: optional(&self.email),
            company: optional(&self.company),
            group: self.group,
        };

        let id = self.id.trim();
        if id.is_empty() {
            return Ok(Submission::Create(draft));
        }
        let id = id
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidId(id.to_string()))?;
        Ok(Submission::Update(id, draft))
    }
}

fn optional(value: &str) -> Option<String> {
    let v = value.trim();
    (!v.is_empty()).then(|| v.to_string())
}

/// Keeps contacts matching `query` (trimmed, case-insensitive). Empty query keeps all.
pub fn filter_contacts(contacts: Vec<Contact>, query: &str) -> Vec<Contact> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return contacts;
    }
    contacts.into_iter().filter(|c| c.matches(&needle)).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteState {
    #[default]
    Idle,
    Confirming { id: i64, name: String },
}

pub struct Controller<A, V> {
    api: A,
    view: V,
    delete_state: RefCell<DeleteState>,
}

impl<A: ContactsApi, V: ContactView> Controller<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            delete_state: RefCell::new(DeleteState::Idle),
        }
    }

    pub async fn load_contacts(&self) {
        self.view.show_list(ListContent::Loading);
        match self.api.list_contacts().await {
            Ok(contacts) => {
                log::info!("loaded {} contacts", contacts.len());
                self.view.show_list(render_contacts(&contacts));
            }
            Err(e) => {
                log::error!("loading contacts failed: {e}");
                self.view.show_error(&e.user_message());
                self.view.show_list(ListContent::Failed);
            }
        }
    }

    pub async fn search(&self) {
        let query = self.view.search_query();
        if query.trim().is_empty() {
            self.load_contacts().await;
            return;
        }
        match self.api.list_contacts().await {
            Ok(contacts) => {
                let found = filter_contacts(contacts, &query);
                log::debug!("search {:?} matched {} contacts", query.trim(), found.len());
                self.view.show_list(render_contacts(&found));
            }
            Err(e) => {
                log::error!("search failed: {e}");
                self.view.show_error(&e.user_message());
            }
        }
    }

    pub async fn edit_contact(&self, id: i64) {
        match self.api.get_contact(id).await {
            Ok(contact) => {
                self.view.fill_form(&contact);
                self.view.focus_form();
            }
            Err(e) => {
                log::error!("fetching contact {id} for edit failed: {e}");
                self.view.show_error(&e.user_message());
            }
        }
    }

    pub async fn submit(&self) {
        let submission = match self.view.read_form().validate() {
            Ok(s) => s,
            Err(e) => {
                log::debug!("form rejected: {e}");
                self.view.show_invalid(&e.to_string());
                return;
            }
        };

        let (result, done) = match submission {
            Submission::Create(draft) => (
                self.api.create_contact(draft).await,
                "Contact added",
            ),
            Submission::Update(id, draft) => (
                self.api.update_contact(id, draft).await,
                "Contact updated",
            ),
        };

        match result {
            Ok(()) => {
                self.view.notify(done);
                self.view.reset_form();
                self.load_contacts().await;
            }
            Err(e) => {
                log::error!("saving contact failed: {e}");
                self.view.show_error(&e.user_message());
            }
        }
    }

    pub fn clear_form(&self) {
        self.view.reset_form();
    }

    /// Fetches the contact for its name, then asks for confirmation.
    /// Replaces any confirmation already pending.
    pub async fn request_delete(&self, id: i64) {
        match self.api.get_contact(id).await {
            Ok(contact) => {
                self.view.show_delete_prompt(&contact.name);
                *self.delete_state.borrow_mut() = DeleteState::Confirming {
                    id,
                    name: contact.name,
                };
            }
            Err(e) => {
                log::error!("fetching contact {id} for delete failed: {e}");
                self.view.show_error(&e.user_message());
            }
        }
    }

    /// On failure the confirmation stays pending and is shown again.
    pub async fn confirm_delete(&self) {
        let (id, name) = match &*self.delete_state.borrow() {
            DeleteState::Confirming { id, name } => (*id, name.clone()),
            DeleteState::Idle => return,
        };
        match self.api.delete_contact(id).await {
            Ok(()) => {
                log::info!("deleted contact {id}");
                *self.delete_state.borrow_mut() = DeleteState::Idle;
                self.view.hide_delete_prompt();
                self.view.notify("Contact deleted");
                self.load_contacts().await;
            }
            Err(e) => {
                log::error!("deleting contact {id} failed: {e}");
                self.view.show_error(&e.user_message());
                self.view.show_delete_prompt(&name);
            }
        }
    }

    pub fn cancel_delete(&self) {
        *self.delete_state.borrow_mut() = DeleteState::Idle;
        self.view.hide_delete_prompt();
    }
}
