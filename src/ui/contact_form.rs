use gtk4 as gtk;
use gtk4::prelude::*;
use std::cell::RefCell;

use crate::api::models::{Contact, Group};
use crate::controller::FormInput;

pub struct ContactForm {
    root: gtk::Box,
    title: gtk::Label,
    // Hidden id field: empty while adding.
    editing_id: RefCell<String>,
    name: gtk::Entry,
    phone: gtk::Entry,
    email: gtk::Entry,
    company: gtk::Entry,
    group: gtk::DropDown,
    save_btn: gtk::Button,
    clear_btn: gtk::Button,
}

fn labeled_entry(form: &gtk::Box, label: &str, placeholder: &str) -> gtk::Entry {
    let lbl = gtk::Label::new(Some(label));
    lbl.set_halign(gtk::Align::Start);
    lbl.add_css_class("caption-heading");
    let entry = gtk::Entry::new();
    entry.set_placeholder_text(Some(placeholder));
    entry.set_hexpand(true);
    form.append(&lbl);
    form.append(&entry);
    entry
}

impl ContactForm {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        root.set_margin_top(12);
        root.set_margin_bottom(12);
        root.set_margin_start(12);
        root.set_margin_end(12);
        root.set_width_request(280);

        let title = gtk::Label::new(Some("Add contact"));
        title.add_css_class("title-3");
        title.set_halign(gtk::Align::Start);
        root.append(&title);

        let name = labeled_entry(&root, "Name *", "Full name");
        let phone = labeled_entry(&root, "Phone *", "Phone number");
        let email = labeled_entry(&root, "Email", "name@example.com");
        let company = labeled_entry(&root, "Company", "Company");

        let group_lbl = gtk::Label::new(Some("Group"));
        group_lbl.set_halign(gtk::Align::Start);
        group_lbl.add_css_class("caption-heading");
        let labels: Vec<&str> = Group::ALL.iter().map(|g| g.label()).collect();
        let group = gtk::DropDown::from_strings(&labels);
        group.set_selected(Group::Other.index());
        root.append(&group_lbl);
        root.append(&group);

        let buttons = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        buttons.set_halign(gtk::Align::End);
        buttons.set_margin_top(6);
        let clear_btn = gtk::Button::with_label("Clear");
        let save_btn = gtk::Button::with_label("Save");
        save_btn.add_css_class("suggested-action");
        buttons.append(&clear_btn);
        buttons.append(&save_btn);
        root.append(&buttons);

        Self {
            root,
            title,
            editing_id: RefCell::new(String::new()),
            name,
            phone,
            email,
            company,
            group,
            save_btn,
            clear_btn,
        }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn read(&self) -> FormInput {
        FormInput {
            id: self.editing_id.borrow().clone(),
            name: self.name.text().to_string(),
            phone: self.phone.text().to_string(),
            email: self.email.text().to_string(),
            company: self.company.text().to_string(),
            group: Group::from_index(self.group.selected()),
        }
    }

    pub fn fill(&self, contact: &Contact) {
        *self.editing_id.borrow_mut() = contact.id.to_string();
        self.name.set_text(&contact.name);
        self.phone.set_text(&contact.phone);
        self.email.set_text(contact.email.as_deref().unwrap_or(""));
        self.company.set_text(contact.company.as_deref().unwrap_or(""));
        self.group.set_selected(contact.group.index());
        self.title.set_label("Edit contact");
    }

    pub fn reset(&self) {
        self.editing_id.borrow_mut().clear();
        for entry in [&self.name, &self.phone, &self.email, &self.company] {
            entry.set_text("");
        }
        self.group.set_selected(Group::Other.index());
        self.title.set_label("Add contact");
    }

    pub fn focus(&self) {
        self.name.grab_focus();
    }

    /// Save button, or Enter in any field.
    pub fn connect_submit<F: Fn() + 'static>(&self, f: F) {
        use std::rc::Rc;
        let f: Rc<dyn Fn()> = Rc::new(f);
        {
            let f = f.clone();
            self.save_btn.connect_clicked(move |_| (f)());
        }
        for entry in [&self.name, &self.phone, &self.email, &self.company] {
            let f = f.clone();
            entry.connect_activate(move |_| (f)());
        }
    }

    pub fn connect_clear<F: Fn() + 'static>(&self, f: F) {
        self.clear_btn.connect_clicked(move |_| f());
    }
}
