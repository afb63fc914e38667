use adw::prelude::*;
use gtk4 as gtk;

const RESPONSE_CANCEL: &str = "cancel";
const RESPONSE_DELETE: &str = "delete";

/// Delete confirmation. Hidden rather than destroyed so it can be shown again;
/// Escape and the window close button answer "cancel".
pub struct DeleteDialog {
    dialog: adw::MessageDialog,
}

impl DeleteDialog {
    pub fn new(parent: &impl IsA<gtk::Window>) -> Self {
        let dialog = adw::MessageDialog::new(Some(parent), Some("Delete contact?"), None);
        dialog.add_response(RESPONSE_CANCEL, "Cancel");
        dialog.add_response(RESPONSE_DELETE, "Delete");
        dialog.set_response_appearance(RESPONSE_DELETE, adw::ResponseAppearance::Destructive);
        dialog.set_default_response(Some(RESPONSE_CANCEL));
        dialog.set_close_response(RESPONSE_CANCEL);
        dialog.set_modal(true);
        dialog.set_hide_on_close(true);
        Self { dialog }
    }

    pub fn show(&self, name: &str) {
        self.dialog.set_body(&format!(
            "Are you sure you want to delete {name}? This cannot be undone."
        ));
        self.dialog.present();
    }

    pub fn hide(&self) {
        self.dialog.set_visible(false);
    }

    pub fn connect_confirm<F: Fn() + 'static>(&self, f: F) {
        self.dialog
            .connect_response(Some(RESPONSE_DELETE), move |_, _| f());
    }

    pub fn connect_cancel<F: Fn() + 'static>(&self, f: F) {
        self.dialog
            .connect_response(Some(RESPONSE_CANCEL), move |_, _| f());
    }
}

/// Modal alert with a single dismiss button.
pub fn show_alert(parent: &impl IsA<gtk::Window>, heading: &str, body: &str) {
    let dialog = adw::MessageDialog::new(Some(parent), Some(heading), Some(body));
    dialog.add_response("ok", "OK");
    dialog.set_default_response(Some("ok"));
    dialog.set_close_response("ok");
    dialog.set_modal(true);
    dialog.present();
}
