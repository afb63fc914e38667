use adw::prelude::*;
use gtk4 as gtk;
use std::rc::Rc;

use crate::api::models::Contact;
use crate::controller::{ContactView, FormInput};
use crate::render::ListContent;
use crate::ui::contact_form::ContactForm;
use crate::ui::contact_list::ContactList;
use crate::ui::dialogs::{DeleteDialog, show_alert};

/// Binds the controller to the window's widgets.
pub struct GtkView {
    pub window: adw::ApplicationWindow,
    pub toasts: adw::ToastOverlay,
    pub form: Rc<ContactForm>,
    pub list: Rc<ContactList>,
    pub search: gtk::SearchEntry,
    pub delete_dialog: Rc<DeleteDialog>,
}

impl ContactView for GtkView {
    fn show_list(&self, content: ListContent) {
        self.list.set_content(&content);
    }

    fn show_error(&self, message: &str) {
        show_alert(&self.window, "Operation failed", message);
    }

    fn show_invalid(&self, message: &str) {
        show_alert(&self.window, "Check the contact details", message);
    }

    fn notify(&self, message: &str) {
        self.toasts.add_toast(adw::Toast::new(message));
    }

    fn read_form(&self) -> FormInput {
        self.form.read()
    }

    fn fill_form(&self, contact: &Contact) {
        self.form.fill(contact);
    }

    fn reset_form(&self) {
        self.form.reset();
    }

    fn focus_form(&self) {
        self.form.focus();
    }

    fn search_query(&self) -> String {
        self.search.text().to_string()
    }

    fn show_delete_prompt(&self, name: &str) {
        self.delete_dialog.show(name);
    }

    fn hide_delete_prompt(&self) {
        self.delete_dialog.hide();
    }
}
