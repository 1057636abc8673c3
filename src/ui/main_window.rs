use adw::prelude::*;
use adw::Application;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::api::{ApiClient, ApiError};
use crate::app::{AppConfig, DEFAULT_BASE_URL};
use crate::contacts::form::FormMode;
use crate::contacts::{ContactManager, Effect, Request, UiEvent};
use crate::ui::contact_form::ContactFormView;
use crate::ui::contact_list::{ContactList, RowAction};
use crate::ui::tag_form::TagFormView;

const ALL_TAGS: &str = "All tags";

/// Widgets plus the manager they project. Signal handlers turn into
/// `UiEvent`s and go through `dispatch`.
struct Shell {
    window: adw::ApplicationWindow,
    manager: RefCell<ContactManager>,
    client: ApiClient,
    stack: gtk4::Stack,
    contact_list: ContactList,
    form: ContactFormView,
    tag_form: TagFormView,
    tag_filter_model: gtk4::StringList,
}

fn dispatch(shell: &Rc<Shell>, event: UiEvent) {
    log::debug!("ui event: {event:?}");
    let effects = shell.manager.borrow_mut().handle(event);
    shell.apply(effects);
}

impl Shell {
    fn apply(self: &Rc<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Request(request) => self.send(request),
                Effect::Alert(message) => self.alert(message),
                Effect::TagAdded(tag) => {
                    self.form.add_tag(&tag);
                    self.tag_filter_model.append(&tag);
                    log::debug!("tag vocabulary has {} tags", self.manager.borrow().vocabulary().len());
                }
                Effect::ResetTagForm => self.tag_form.reset(),
                Effect::ResetContactForm => self.form.reset(),
            }
        }
        self.project();
    }

    fn project(self: &Rc<Self>) {
        let manager = self.manager.borrow();

        let shell = self.clone();
        let on_action: Rc<dyn Fn(RowAction)> = Rc::new(move |action| {
            let event = match action {
                RowAction::Edit(a) => UiEvent::EditContactClicked(a),
                RowAction::Delete(a) => UiEvent::DeleteContactClicked(a),
            };
            dispatch(&shell, event);
        });
        self.contact_list.set_entries(manager.entries(), on_action);
        self.contact_list.set_no_match(manager.no_match());

        self.tag_form.set_visible(manager.tag_form_visible());
        self.form.set_mode(manager.mode());
        self.form.set_placeholders(manager.placeholders());
        self.form.show_errors(manager.errors());
        self.stack
            .set_visible_child_name(if manager.list_visible() { "list" } else { "form" });
    }

    fn alert(&self, message: &str) {
        let dialog = adw::MessageDialog::new(Some(&self.window), Some("Contacts"), Some(message));
        dialog.add_response("ok", "OK");
        dialog.set_default_response(Some("ok"));
        dialog.present();
    }

    /// Run a backend call off the main loop and feed its result back in as
    /// an event. Responses are applied in whatever order they arrive.
    fn spawn<T, Fut, F>(self: &Rc<Self>, fut: Fut, into_event: F)
    where
        T: Send + 'static,
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
        F: FnOnce(Result<T, ApiError>) -> UiEvent + 'static,
    {
        let rx = crate::utils::run_async_to_main(fut);
        let shell = self.clone();
        let mut into_event = Some(into_event);
        rx.attach(None, move |res| {
            if let Some(into_event) = into_event.take() {
                dispatch(&shell, into_event(res));
            }
            glib::ControlFlow::Break
        });
    }

    fn send(self: &Rc<Self>, request: Request) {
        let client = self.client.clone();
        match request {
            Request::LoadContacts => {
                self.spawn(async move { client.list_contacts().await }, UiEvent::ContactsLoaded);
            }
            Request::Create(payload) => {
                self.spawn(
                    async move { client.create_contact(&payload).await },
                    |result| UiEvent::ContactSaved { target: FormMode::Create, result },
                );
            }
            Request::Update { target, payload } => {
                let path = target.path.clone();
                self.spawn(
                    async move { client.update_contact(&path, &payload).await },
                    move |result| UiEvent::ContactSaved { target: FormMode::Edit(target), result },
                );
            }
            Request::Delete(target) => {
                let id = target.id;
                self.spawn(
                    async move { client.delete_contact(&target.path, id).await },
                    move |result| UiEvent::ContactDeleted { id, result },
                );
            }
        }
    }
}

fn api_client(config: &AppConfig) -> Result<ApiClient, ApiError> {
    ApiClient::new(&config.base_url).or_else(|e| {
        log::warn!("invalid backend url {:?} ({e}), using {DEFAULT_BASE_URL}", config.base_url);
        ApiClient::new(DEFAULT_BASE_URL)
    })
}

pub fn show_main_window(app: &Application, config: &AppConfig) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Contacts")
        .default_width(720)
        .default_height(640)
        .build();

    let container = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let title = gtk4::Label::new(Some("Contacts"));
    header.set_title_widget(Some(&title));

    let add_contact_btn = gtk4::Button::with_label("Add Contact");
    add_contact_btn.add_css_class("suggested-action");
    header.pack_start(&add_contact_btn);
    let create_tag_btn = gtk4::Button::with_label("Create Tag");
    header.pack_end(&create_tag_btn);
    container.append(&header);

    let tag_form = TagFormView::new();
    container.append(&tag_form.widget());

    // Filters
    let filters = gtk4::Box::new(gtk4::Orientation::Horizontal, 6);
    filters.set_margin_top(8);
    filters.set_margin_start(8);
    filters.set_margin_end(8);
    let search_name = gtk4::SearchEntry::new();
    search_name.set_placeholder_text(Some("Search by name"));
    search_name.set_hexpand(true);
    let tag_filter_model = gtk4::StringList::new(&[ALL_TAGS]);
    let tag_filter = gtk4::DropDown::builder().model(&tag_filter_model).build();
    let clear_tag_btn = gtk4::Button::with_label("Clear");
    filters.append(&search_name);
    filters.append(&tag_filter);
    filters.append(&clear_tag_btn);
    container.append(&filters);

    let contact_list = ContactList::new();
    let form = ContactFormView::new();
    let stack = gtk4::Stack::new();
    stack.set_vexpand(true);
    stack.add_named(&contact_list.widget(), Some("list"));
    stack.add_named(&form.widget(), Some("form"));
    container.append(&stack);

    window.set_content(Some(&container));
    window.present();

    let client = match api_client(config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("cannot build contacts client: {e}");
            return;
        }
    };

    let shell = Rc::new(Shell {
        window,
        manager: RefCell::new(ContactManager::new()),
        client,
        stack,
        contact_list,
        form,
        tag_form,
        tag_filter_model,
    });

    // One handler per control and signal, connected once.
    {
        let shell = shell.clone();
        create_tag_btn.connect_clicked(move |_| dispatch(&shell, UiEvent::CreateTagClicked));
    }
    {
        let handler_shell = shell.clone();
        shell.tag_form.cancel_btn.connect_clicked(move |_| {
            dispatch(&handler_shell, UiEvent::CreateTagCancelled)
        });
    }
    {
        let submit_tag: Rc<dyn Fn()> = {
            let shell = shell.clone();
            Rc::new(move || {
                let name = shell.tag_form.name();
                dispatch(&shell, UiEvent::CreateTagSubmitted(name));
            })
        };
        {
            let submit_tag = submit_tag.clone();
            shell.tag_form.create_btn.connect_clicked(move |_| (submit_tag)());
        }
        shell.tag_form.entry.connect_activate(move |_| (submit_tag)());
    }
    {
        let shell = shell.clone();
        add_contact_btn.connect_clicked(move |_| dispatch(&shell, UiEvent::AddContactClicked));
    }
    {
        let handler_shell = shell.clone();
        shell.form.submit_btn.connect_clicked(move |_| {
            let input = handler_shell.form.input();
            dispatch(&handler_shell, UiEvent::ContactFormSubmitted(input));
        });
    }
    {
        let handler_shell = shell.clone();
        shell.form.cancel_btn.connect_clicked(move |_| {
            dispatch(&handler_shell, UiEvent::ContactFormCancelled)
        });
    }
    {
        let shell = shell.clone();
        tag_filter.connect_selected_notify(move |dropdown| {
            let pos = dropdown.selected();
            let tag = match pos {
                0 | gtk4::INVALID_LIST_POSITION => None,
                _ => shell.tag_filter_model.string(pos),
            };
            let event = match tag {
                Some(tag) => UiEvent::TagFilterSelected(tag.to_string()),
                None => UiEvent::TagFilterCleared,
            };
            dispatch(&shell, event);
        });
    }
    {
        let shell = shell.clone();
        let tag_filter = tag_filter.clone();
        clear_tag_btn.connect_clicked(move |_| {
            dispatch(&shell, UiEvent::TagFilterCleared);
            tag_filter.set_selected(0);
        });
    }
    {
        let shell = shell.clone();
        search_name.connect_changed(move |entry| {
            dispatch(&shell, UiEvent::NameSearchChanged(entry.text().to_string()));
        });
    }

    let effects = shell.manager.borrow().start();
    shell.apply(effects);
}
