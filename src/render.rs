//! Turns contact data into what the list widget displays. Pure data in,
//! pure data out; the GTK side only copies these values into widgets.

use crate::api::models::Contact;

pub const NO_EMAIL: &str = "No email";

#[derive(Debug, Clone, PartialEq)]
pub enum ListContent {
    Loading,
    Empty,
    /// Load failed; the placeholder offers a retry.
    Failed,
    Rows(Vec<ContactRow>),
}

/// Status page shown instead of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub icon_name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub retry: bool,
}

impl ListContent {
    pub fn placeholder(&self) -> Option<Placeholder> {
        match self {
            ListContent::Loading => Some(Placeholder {
                icon_name: "content-loading-symbolic",
                title: "Loading contacts…",
                description: "",
                retry: false,
            }),
            ListContent::Empty => Some(Placeholder {
                icon_name: "contact-new-symbolic",
                title: "No contacts yet",
                description: "Add your first contact to start using the address book.",
                retry: false,
            }),
            ListContent::Failed => Some(Placeholder {
                icon_name: "network-error-symbolic",
                title: "Could not load contacts",
                description: "The contact list could not be fetched from the server.",
                retry: true,
            }),
            ListContent::Rows(_) => None,
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            ListContent::Rows(rows) => rows.len(),
            _ => 0,
        }
    }
}

/// One list row. Text fields are Pango markup with every server value escaped.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRow {
    pub id: i64,
    pub title_markup: String,
    pub details_markup: String,
    pub company_markup: Option<String>,
}

pub fn render_contacts(contacts: &[Contact]) -> ListContent {
    if contacts.is_empty() {
        return ListContent::Empty;
    }
    ListContent::Rows(contacts.iter().map(render_row).collect())
}

fn render_row(contact: &Contact) -> ContactRow {
    let email = contact
        .email
        .as_deref()
        .filter(|e| !e.trim().is_empty())
        .unwrap_or(NO_EMAIL);
    ContactRow {
        id: contact.id,
        title_markup: format!("<b>{}</b>", escape(&contact.name)),
        details_markup: format!(
            "{} | {} | {}",
            escape(&contact.phone),
            escape(email),
            contact.group.label()
        ),
        company_markup: contact
            .company
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .map(escape),
    }
}

fn escape(text: &str) -> String {
    glib::markup_escape_text(text).to_string()
}
