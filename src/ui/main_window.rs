use adw::Application;
use adw::prelude::*;
use std::future::Future;
use std::rc::Rc;

use crate::api::client::ApiClient;
use crate::app::Settings;
use crate::controller::Controller;
use crate::ui::contact_form::ContactForm;
use crate::ui::contact_list::ContactList;
use crate::ui::dialogs::{DeleteDialog, show_alert};
use crate::ui::view::GtkView;

type AppController = Controller<ApiClient, GtkView>;

/// Runs one controller operation on the GLib main loop.
fn spawn_op<F, Fut>(ctrl: &Rc<AppController>, op: F)
where
    F: FnOnce(Rc<AppController>) -> Fut,
    Fut: Future<Output = ()> + 'static,
{
    glib::MainContext::default().spawn_local(op(ctrl.clone()));
}

pub fn show_main_window(app: &Application, settings: &Settings) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Contacts")
        .default_width(960)
        .default_height(640)
        .build();

    let overlay = adw::ToastOverlay::new();

    let split = adw::Flap::builder()
        .reveal_flap(true)
        .locked(true)
        .modal(false)
        .build();

    let form = Rc::new(ContactForm::new());
    split.set_flap(Some(&form.widget()));

    let content = gtk4::Box::new(gtk4::Orientation::Vertical, 6);
    let search_row = gtk4::Box::new(gtk4::Orientation::Horizontal, 6);
    search_row.set_margin_top(8);
    search_row.set_margin_start(8);
    search_row.set_margin_end(8);
    let search = gtk4::SearchEntry::new();
    search.set_property("placeholder-text", "Search name, phone, email or company");
    search.set_hexpand(true);
    let search_btn = gtk4::Button::with_label("Search");
    search_row.append(&search);
    search_row.append(&search_btn);
    content.append(&search_row);

    let list = Rc::new(ContactList::new());
    content.append(&list.widget());
    split.set_content(Some(&content));

    overlay.set_child(Some(&split));

    let container = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let title = gtk4::Label::new(Some("Contacts"));
    header.set_title_widget(Some(&title));
    let refresh_btn = gtk4::Button::from_icon_name("view-refresh-symbolic");
    refresh_btn.set_tooltip_text(Some("Reload contacts"));
    header.pack_end(&refresh_btn);
    container.append(&header);
    container.append(&overlay);
    window.set_content(Some(&container));
    window.present();

    let api = match ApiClient::new(&settings.base_url, settings.timeout()) {
        Ok(api) => api,
        Err(e) => {
            log::error!("cannot create API client: {e}");
            show_alert(&window, "Cannot connect", &e.user_message());
            return;
        }
    };

    let delete_dialog = Rc::new(DeleteDialog::new(&window));
    let view = GtkView {
        window: window.clone(),
        toasts: overlay.clone(),
        form: form.clone(),
        list: list.clone(),
        search: search.clone(),
        delete_dialog: delete_dialog.clone(),
    };
    let ctrl = Rc::new(Controller::new(api, view));

    {
        let ctrl = ctrl.clone();
        form.connect_submit(move || spawn_op(&ctrl, |c| async move { c.submit().await }));
    }
    {
        let ctrl = ctrl.clone();
        form.connect_clear(move || ctrl.clear_form());
    }

    // Every keystroke searches; no debounce.
    {
        let ctrl = ctrl.clone();
        search.connect_changed(move |_| spawn_op(&ctrl, |c| async move { c.search().await }));
    }
    {
        let ctrl = ctrl.clone();
        search_btn.connect_clicked(move |_| spawn_op(&ctrl, |c| async move { c.search().await }));
    }
    {
        let ctrl = ctrl.clone();
        refresh_btn.connect_clicked(move |_| spawn_op(&ctrl, |c| async move { c.search().await }));
    }

    {
        let ctrl = ctrl.clone();
        list.connect_edit(move |id| spawn_op(&ctrl, |c| async move { c.edit_contact(id).await }));
    }
    {
        let ctrl = ctrl.clone();
        list.connect_delete(move |id| {
            spawn_op(&ctrl, |c| async move { c.request_delete(id).await })
        });
    }
    {
        let ctrl = ctrl.clone();
        list.connect_retry(move || spawn_op(&ctrl, |c| async move { c.load_contacts().await }));
    }

    {
        let ctrl = ctrl.clone();
        delete_dialog
            .connect_confirm(move || spawn_op(&ctrl, |c| async move { c.confirm_delete().await }));
    }
    {
        let ctrl = ctrl.clone();
        delete_dialog.connect_cancel(move || ctrl.cancel_delete());
    }

    spawn_op(&ctrl, |c| async move { c.load_contacts().await });
}
