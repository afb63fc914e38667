use gtk4 as gtk;
use gtk4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::render::{ContactRow, ListContent};

type IdHandler = Rc<dyn Fn(i64)>;

pub struct ContactList {
    stack: gtk::Stack,
    list: gtk::ListBox,
    status: adw::StatusPage,
    spinner: gtk::Spinner,
    retry_btn: gtk::Button,
    on_edit: RefCell<Option<IdHandler>>,
    on_delete: RefCell<Option<IdHandler>>,
}

impl ContactList {
    pub fn new() -> Self {
        let list = gtk::ListBox::new();
        list.set_selection_mode(gtk::SelectionMode::None);
        list.add_css_class("boxed-list");
        list.set_valign(gtk::Align::Start);
        list.set_margin_top(8);
        list.set_margin_bottom(8);
        list.set_margin_start(8);
        list.set_margin_end(8);

        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .child(&list)
            .build();

        let spinner = gtk::Spinner::new();
        spinner.set_size_request(32, 32);
        let retry_btn = gtk::Button::with_label("Retry");
        retry_btn.add_css_class("pill");
        retry_btn.set_halign(gtk::Align::Center);
        let status_child = gtk::Box::new(gtk::Orientation::Vertical, 12);
        status_child.append(&spinner);
        status_child.append(&retry_btn);

        let status = adw::StatusPage::new();
        status.set_vexpand(true);
        status.set_child(Some(&status_child));

        let stack = gtk::Stack::new();
        stack.add_named(&scroller, Some("rows"));
        stack.add_named(&status, Some("status"));

        Self {
            stack,
            list,
            status,
            spinner,
            retry_btn,
            on_edit: RefCell::new(None),
            on_delete: RefCell::new(None),
        }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.stack.clone().upcast()
    }

    pub fn set_content(&self, content: &ListContent) {
        log::debug!("showing {} contact rows", content.row_count());
        while let Some(child) = self.list.first_child() {
            self.list.remove(&child);
        }

        if let Some(placeholder) = content.placeholder() {
            let loading = matches!(content, ListContent::Loading);
            self.status
                .set_icon_name((!loading).then_some(placeholder.icon_name));
            self.status.set_title(placeholder.title);
            self.status.set_description(
                (!placeholder.description.is_empty()).then_some(placeholder.description),
            );
            self.spinner.set_visible(loading);
            self.spinner.set_spinning(loading);
            self.retry_btn.set_visible(placeholder.retry);
            self.stack.set_visible_child_name("status");
            return;
        }

        self.spinner.set_spinning(false);
        if let ListContent::Rows(rows) = content {
            for row in rows {
                self.list.append(&self.build_row(row));
            }
        }
        self.stack.set_visible_child_name("rows");
    }

    fn build_row(&self, row: &ContactRow) -> gtk::ListBoxRow {
        let info = gtk::Box::new(gtk::Orientation::Vertical, 2);
        info.set_hexpand(true);
        let markup_label = |markup: &str, dim: bool| {
            let lbl = gtk::Label::new(None);
            lbl.set_markup(markup);
            lbl.set_xalign(0.0);
            lbl.set_wrap(true);
            if dim {
                lbl.add_css_class("dim-label");
            }
            lbl
        };
        info.append(&markup_label(&row.title_markup, false));
        info.append(&markup_label(&row.details_markup, true));
        if let Some(company) = &row.company_markup {
            info.append(&markup_label(company, true));
        }

        let edit_btn = gtk::Button::from_icon_name("document-edit-symbolic");
        edit_btn.set_tooltip_text(Some("Edit"));
        edit_btn.add_css_class("flat");
        let delete_btn = gtk::Button::from_icon_name("user-trash-symbolic");
        delete_btn.set_tooltip_text(Some("Delete"));
        delete_btn.add_css_class("flat");
        delete_btn.add_css_class("destructive-action");

        let id = row.id;
        if let Some(handler) = self.on_edit.borrow().clone() {
            edit_btn.connect_clicked(move |_| (handler)(id));
        }
        if let Some(handler) = self.on_delete.borrow().clone() {
            delete_btn.connect_clicked(move |_| (handler)(id));
        }

        let line = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        line.set_margin_top(8);
        line.set_margin_bottom(8);
        line.set_margin_start(8);
        line.set_margin_end(8);
        line.append(&info);
        line.append(&edit_btn);
        line.append(&delete_btn);

        let list_row = gtk::ListBoxRow::new();
        list_row.set_activatable(false);
        list_row.set_child(Some(&line));
        list_row
    }

    pub fn connect_edit<F: Fn(i64) + 'static>(&self, f: F) {
        *self.on_edit.borrow_mut() = Some(Rc::new(f));
    }

    pub fn connect_delete<F: Fn(i64) + 'static>(&self, f: F) {
        *self.on_delete.borrow_mut() = Some(Rc::new(f));
    }

    pub fn connect_retry<F: Fn() + 'static>(&self, f: F) {
        self.retry_btn.connect_clicked(move |_| f());
    }
}
