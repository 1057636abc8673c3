use gtk4::prelude::*;
use gtk4 as gtk;
use std::rc::Rc;

use crate::contacts::render::{ContactEntry, EntryAction};

#[derive(Debug, Clone)]
pub enum RowAction {
    Edit(EntryAction),
    Delete(EntryAction),
}

pub struct ContactList {
    root: gtk::Box,
    list: gtk::ListBox,
    no_match: gtk::Label,
}

impl ContactList {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        root.set_margin_top(8);
        root.set_margin_bottom(8);
        root.set_margin_start(8);
        root.set_margin_end(8);

        let no_match = gtk::Label::new(None);
        no_match.add_css_class("dim-label");
        no_match.set_visible(false);
        root.append(&no_match);

        let list = gtk::ListBox::new();
        list.set_selection_mode(gtk::SelectionMode::None);
        list.add_css_class("boxed-list");

        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .build();
        scroller.set_child(Some(&list));
        root.append(&scroller);

        Self { root, list, no_match }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn set_no_match(&self, message: Option<&str>) {
        self.no_match.set_label(message.unwrap_or_default());
        self.no_match.set_visible(message.is_some());
    }

    pub fn set_entries(&self, entries: Vec<(ContactEntry, bool)>, on_action: Rc<dyn Fn(RowAction)>) {
        while let Some(child) = self.list.first_child() {
            self.list.remove(&child);
        }
        for (entry, hidden) in entries {
            let row = build_row(&entry, on_action.clone());
            row.set_visible(!hidden);
            self.list.append(&row);
        }
    }
}

fn build_row(entry: &ContactEntry, on_action: Rc<dyn Fn(RowAction)>) -> gtk::ListBoxRow {
    let row = gtk::ListBoxRow::new();
    row.set_activatable(false);

    let body = gtk::Box::new(gtk::Orientation::Vertical, 6);
    body.set_margin_top(8);
    body.set_margin_bottom(8);
    body.set_margin_start(8);
    body.set_margin_end(8);

    let name = gtk::Label::new(Some(&entry.name));
    name.add_css_class("title-3");
    name.set_halign(gtk::Align::Start);
    body.append(&name);

    let details = gtk::Grid::new();
    details.set_column_spacing(12);
    details.set_row_spacing(2);
    for (i, (term, value)) in entry.details.iter().enumerate() {
        let term_lbl = gtk::Label::new(Some(*term));
        term_lbl.add_css_class("dim-label");
        term_lbl.set_halign(gtk::Align::Start);
        let value_lbl = gtk::Label::new(Some(value.as_str()));
        value_lbl.set_halign(gtk::Align::Start);
        value_lbl.set_selectable(true);
        details.attach(&term_lbl, 0, i as i32, 1, 1);
        details.attach(&value_lbl, 1, i as i32, 1, 1);
    }
    body.append(&details);

    let buttons = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    buttons.set_halign(gtk::Align::End);

    let edit_btn = gtk::Button::with_label(entry.edit.label);
    edit_btn.set_tooltip_text(Some(&entry.edit.path));
    {
        let on_action = on_action.clone();
        let action = entry.edit.clone();
        edit_btn.connect_clicked(move |_| (on_action)(RowAction::Edit(action.clone())));
    }
    buttons.append(&edit_btn);

    let delete_btn = gtk::Button::with_label(entry.delete.label);
    delete_btn.add_css_class("destructive-action");
    {
        let action = entry.delete.clone();
        delete_btn.connect_clicked(move |_| (on_action)(RowAction::Delete(action.clone())));
    }
    buttons.append(&delete_btn);
    body.append(&buttons);

    row.set_child(Some(&body));
    row
}
