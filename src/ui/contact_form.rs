use gtk4::prelude::*;
use gtk4 as gtk;
use std::cell::RefCell;

use crate::contacts::form::{ContactFormInput, FormErrors, FormMode, Placeholders};

/// The shared create/edit form. Each input has its error label directly
/// above it.
pub struct ContactFormView {
    root: gtk::Box,
    title: gtk::Label,
    name_entry: gtk::Entry,
    name_error: gtk::Label,
    email_entry: gtk::Entry,
    email_error: gtk::Label,
    phone_entry: gtk::Entry,
    phone_error: gtk::Label,
    tag_box: gtk::FlowBox,
    tag_checks: RefCell<Vec<gtk::CheckButton>>,
    tags_error: gtk::Label,
    pub submit_btn: gtk::Button,
    pub cancel_btn: gtk::Button,
}

fn field(form: &gtk::Box, caption: &str) -> gtk::Label {
    let label = gtk::Label::new(Some(caption));
    label.add_css_class("heading");
    label.set_halign(gtk::Align::Start);
    form.append(&label);

    let error = gtk::Label::new(None);
    error.add_css_class("error");
    error.set_halign(gtk::Align::Start);
    error.set_wrap(true);
    error.set_visible(false);
    form.append(&error);
    error
}

fn entry(form: &gtk::Box) -> gtk::Entry {
    let entry = gtk::Entry::new();
    entry.set_hexpand(true);
    form.append(&entry);
    entry
}

fn show_error(label: &gtk::Label, message: Option<&str>) {
    label.set_label(message.unwrap_or_default());
    label.set_visible(message.is_some());
}

impl ContactFormView {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 8);
        root.set_margin_top(24);
        root.set_margin_bottom(24);
        root.set_margin_start(24);
        root.set_margin_end(24);

        let title = gtk::Label::new(Some("Create Contact"));
        title.add_css_class("title-2");
        title.set_halign(gtk::Align::Start);
        root.append(&title);

        let name_error = field(&root, "Full name");
        let name_entry = entry(&root);
        let email_error = field(&root, "Email address");
        let email_entry = entry(&root);
        email_entry.set_input_purpose(gtk::InputPurpose::Email);
        let phone_error = field(&root, "Telephone number");
        let phone_entry = entry(&root);
        phone_entry.set_input_purpose(gtk::InputPurpose::Phone);

        let tags_error = field(&root, "Tags");
        let tag_box = gtk::FlowBox::new();
        tag_box.set_selection_mode(gtk::SelectionMode::None);
        tag_box.set_max_children_per_line(4);
        root.append(&tag_box);

        let buttons = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        buttons.set_halign(gtk::Align::End);
        let cancel_btn = gtk::Button::with_label("Cancel");
        let submit_btn = gtk::Button::with_label("Submit");
        submit_btn.add_css_class("suggested-action");
        buttons.append(&cancel_btn);
        buttons.append(&submit_btn);
        root.append(&buttons);

        let view = Self {
            root,
            title,
            name_entry,
            name_error,
            email_entry,
            email_error,
            phone_entry,
            phone_error,
            tag_box,
            tag_checks: RefCell::new(Vec::new()),
            tags_error,
            submit_btn,
            cancel_btn,
        };
        view.set_placeholders(&Placeholders::default());
        view
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn add_tag(&self, tag: &str) {
        let check = gtk::CheckButton::with_label(tag);
        self.tag_box.insert(&check, -1);
        self.tag_checks.borrow_mut().push(check);
    }

    pub fn input(&self) -> ContactFormInput {
        let tags = self
            .tag_checks
            .borrow()
            .iter()
            .filter(|c| c.is_active())
            .filter_map(|c| c.label())
            .map(|l| l.to_string())
            .collect();
        ContactFormInput {
            full_name: self.name_entry.text().to_string(),
            email: self.email_entry.text().to_string(),
            phone_number: self.phone_entry.text().to_string(),
            tags,
        }
    }

    pub fn set_mode(&self, mode: Option<&FormMode>) {
        let title = match mode {
            Some(FormMode::Edit(_)) => "Edit Contact",
            _ => "Create Contact",
        };
        self.title.set_label(title);
    }

    pub fn set_placeholders(&self, placeholders: &Placeholders) {
        self.name_entry.set_placeholder_text(Some(&placeholders.full_name));
        self.email_entry.set_placeholder_text(Some(&placeholders.email));
        self.phone_entry.set_placeholder_text(Some(&placeholders.phone_number));
    }

    pub fn show_errors(&self, errors: &FormErrors) {
        show_error(&self.name_error, errors.full_name);
        show_error(&self.email_error, errors.email);
        show_error(&self.phone_error, errors.phone_number);
        show_error(&self.tags_error, errors.tags);
    }

    pub fn reset(&self) {
        self.name_entry.set_text("");
        self.email_entry.set_text("");
        self.phone_entry.set_text("");
        for check in self.tag_checks.borrow().iter() {
            check.set_active(false);
        }
    }
}
