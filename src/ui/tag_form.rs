use gtk4::prelude::*;
use gtk4 as gtk;

pub struct TagFormView {
    revealer: gtk::Revealer,
    pub entry: gtk::Entry,
    pub create_btn: gtk::Button,
    pub cancel_btn: gtk::Button,
}

impl TagFormView {
    pub fn new() -> Self {
        let row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        row.set_margin_top(8);
        row.set_margin_bottom(8);
        row.set_margin_start(8);
        row.set_margin_end(8);

        let entry = gtk::Entry::new();
        entry.set_hexpand(true);
        entry.set_placeholder_text(Some("New tag name"));
        let cancel_btn = gtk::Button::with_label("Cancel");
        let create_btn = gtk::Button::with_label("Create");
        create_btn.add_css_class("suggested-action");
        row.append(&entry);
        row.append(&cancel_btn);
        row.append(&create_btn);

        let revealer = gtk::Revealer::builder()
            .transition_type(gtk::RevealerTransitionType::SlideDown)
            .reveal_child(false)
            .build();
        revealer.set_child(Some(&row));

        Self { revealer, entry, create_btn, cancel_btn }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.revealer.clone().upcast()
    }

    pub fn set_visible(&self, visible: bool) {
        self.revealer.set_reveal_child(visible);
    }

    pub fn name(&self) -> String {
        self.entry.text().to_string()
    }

    pub fn reset(&self) {
        self.entry.set_text("");
    }
}
