use crate::api::error::ApiError;
use crate::api::models::{Contact, ContactId, ContactPayload};
use crate::contacts::filter;
use crate::contacts::form::{ContactFormInput, FormErrors, FormMode, Placeholders};
use crate::contacts::render::{self, ContactEntry, EntryAction};
use crate::contacts::store::ContactStore;
use crate::contacts::tags::TagVocabulary;

pub const LOAD_FAILED: &str = "Could not load contacts. Please try again.";
pub const SUBMIT_FAILED: &str = "The form submission was unsuccessful. Please try again.";
pub const DELETE_FAILED: &str = "The contact could not be deleted. Please try again.";
pub const TAG_CREATED: &str = "New tag created!";

/// Everything the window can report, one variant per control signal plus
/// one per finished backend request.
#[derive(Debug)]
pub enum UiEvent {
    CreateTagClicked,
    CreateTagCancelled,
    CreateTagSubmitted(String),
    AddContactClicked,
    EditContactClicked(EntryAction),
    DeleteContactClicked(EntryAction),
    ContactFormSubmitted(ContactFormInput),
    ContactFormCancelled,
    TagFilterSelected(String),
    TagFilterCleared,
    NameSearchChanged(String),
    ContactsLoaded(Result<Vec<Contact>, ApiError>),
    ContactSaved {
        target: FormMode,
        result: Result<Contact, ApiError>,
    },
    ContactDeleted {
        id: ContactId,
        result: Result<(), ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    LoadContacts,
    Create(ContactPayload),
    Update {
        target: EntryAction,
        payload: ContactPayload,
    },
    Delete(EntryAction),
}

/// Work the window has to do after an event was applied. Widget state that
/// mirrors the manager (list rows, form visibility, errors) is re-projected
/// after every dispatch and is not listed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Request(Request),
    Alert(&'static str),
    TagAdded(String),
    ResetTagForm,
    ResetContactForm,
}

#[derive(Debug, Default)]
pub struct ContactManager {
    store: ContactStore,
    vocabulary: TagVocabulary,
    mode: Option<FormMode>,
    errors: FormErrors,
    placeholders: Placeholders,
    tag_form_visible: bool,
    no_match: Option<String>,
}

impl ContactManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate both tag controls from the seeded vocabulary and request the
    /// initial contact list.
    pub fn start(&self) -> Vec<Effect> {
        let mut effects: Vec<Effect> = self
            .vocabulary
            .iter()
            .map(|t| Effect::TagAdded(t.to_string()))
            .collect();
        effects.push(Effect::Request(Request::LoadContacts));
        effects
    }

    pub fn handle(&mut self, event: UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::CreateTagClicked => {
                self.tag_form_visible = true;
                Vec::new()
            }
            UiEvent::CreateTagCancelled => {
                self.tag_form_visible = false;
                Vec::new()
            }
            UiEvent::CreateTagSubmitted(name) => self.create_tag(name),
            UiEvent::AddContactClicked => {
                self.mode = Some(FormMode::Create);
                Vec::new()
            }
            UiEvent::EditContactClicked(action) => {
                self.begin_edit(action);
                Vec::new()
            }
            UiEvent::DeleteContactClicked(action) => vec![Effect::Request(Request::Delete(action))],
            UiEvent::ContactFormSubmitted(input) => self.submit(input),
            UiEvent::ContactFormCancelled => self.close_form(),
            UiEvent::TagFilterSelected(tag) => {
                filter::by_tag(&mut self.store, &tag);
                Vec::new()
            }
            UiEvent::TagFilterCleared => {
                filter::show_all(&mut self.store);
                Vec::new()
            }
            UiEvent::NameSearchChanged(text) => {
                self.no_match = filter::by_name_prefix(&mut self.store, &text);
                Vec::new()
            }
            UiEvent::ContactsLoaded(result) => self.contacts_loaded(result),
            UiEvent::ContactSaved { target, result } => self.contact_saved(target, result),
            UiEvent::ContactDeleted { id, result } => self.contact_deleted(id, result),
        }
    }

    fn create_tag(&mut self, name: String) -> Vec<Effect> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Vec::new();
        }
        log::info!("created tag {name}");
        self.vocabulary.push(name.clone());
        self.tag_form_visible = false;
        vec![Effect::TagAdded(name), Effect::ResetTagForm, Effect::Alert(TAG_CREATED)]
    }

    fn begin_edit(&mut self, action: EntryAction) {
        let Some(contact) = self.store.get(action.id) else {
            log::warn!("edit requested for unknown contact {}", action.id);
            return;
        };
        self.placeholders = Placeholders {
            full_name: contact.full_name.clone(),
            email: contact.email.clone(),
            phone_number: contact.phone_number.clone(),
        };
        self.mode = Some(FormMode::Edit(action));
    }

    fn submit(&mut self, input: ContactFormInput) -> Vec<Effect> {
        let Some(mode) = self.mode.clone() else {
            return Vec::new();
        };
        let errors = input.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return Vec::new();
        }
        self.errors = FormErrors::default();

        let payload = input.to_payload();
        let request = match mode {
            FormMode::Create => Request::Create(payload),
            FormMode::Edit(target) => Request::Update { target, payload },
        };
        vec![Effect::Request(request)]
    }

    fn close_form(&mut self) -> Vec<Effect> {
        self.mode = None;
        self.errors = FormErrors::default();
        self.placeholders = Placeholders::default();
        vec![Effect::ResetContactForm]
    }

    fn contacts_loaded(&mut self, result: Result<Vec<Contact>, ApiError>) -> Vec<Effect> {
        match result {
            Ok(contacts) => {
                log::info!("loaded {} contacts", contacts.len());
                for contact in contacts {
                    self.store.push(contact);
                }
                Vec::new()
            }
            Err(e) => {
                log::warn!("loading contacts failed: {e}");
                vec![Effect::Alert(LOAD_FAILED)]
            }
        }
    }

    fn contact_saved(&mut self, target: FormMode, result: Result<Contact, ApiError>) -> Vec<Effect> {
        let contact = match result {
            Ok(contact) => contact,
            Err(e) => {
                log::warn!("saving contact failed: {e}");
                return vec![Effect::Alert(SUBMIT_FAILED)];
            }
        };

        match target {
            FormMode::Edit(action) => {
                if !self.store.replace(action.id, contact.clone()) {
                    self.store.push(contact);
                }
            }
            FormMode::Create => self.store.push(contact),
        }
        self.close_form()
    }

    fn contact_deleted(&mut self, id: ContactId, result: Result<(), ApiError>) -> Vec<Effect> {
        match result {
            Ok(()) => {
                self.store.remove(id);
                Vec::new()
            }
            Err(e) => {
                log::warn!("deleting contact {id} failed: {e}");
                vec![Effect::Alert(DELETE_FAILED)]
            }
        }
    }

    /// Rendered entries with their hidden flag, in display order.
    pub fn entries(&self) -> Vec<(ContactEntry, bool)> {
        self.store
            .slots()
            .iter()
            .map(|slot| (render::render(&slot.contact), slot.hidden))
            .collect()
    }

    pub fn vocabulary(&self) -> &TagVocabulary {
        &self.vocabulary
    }

    pub fn mode(&self) -> Option<&FormMode> {
        self.mode.as_ref()
    }

    /// The list is swapped out while the contact form is open.
    pub fn list_visible(&self) -> bool {
        self.mode.is_none()
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    pub fn tag_form_visible(&self) -> bool {
        self.tag_form_visible
    }

    pub fn no_match(&self) -> Option<&str> {
        self.no_match.as_deref()
    }
}
