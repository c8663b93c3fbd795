//! Resource Trait
//!
//! Everything the generic CRUD workflow needs to know about one record
//! kind: its names, how a form is bound and validated, and how form fields
//! map onto the stored record.

use std::fmt;

use kernel::validation::ValidationErrors;
use serde::Serialize;

use crate::application::form::FormFields;
use crate::domain::record::Record;
use crate::error::CatalogResult;

/// Names a record kind goes by in routes, views and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kind {
    /// Route prefix and view directory, e.g. `bidList`
    pub slug: &'static str,
    /// Lower-case name used inside messages, e.g. `bid list`
    pub label: &'static str,
    /// Capitalized name starting a message, e.g. `Bid list`
    pub title: &'static str,
    /// Model key of the list view
    pub list_key: &'static str,
    /// Model key of the add/update views
    pub form_key: &'static str,
}

impl Kind {
    pub fn list_path(&self) -> String {
        format!("/{}/list", self.slug)
    }

    pub fn view(&self, page: &str) -> String {
        format!("{}/{}", self.slug, page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

impl FormMode {
    /// Page name of the form view
    pub fn page(&self) -> &'static str {
        match self {
            FormMode::Create => "add",
            FormMode::Update => "update",
        }
    }
}

/// Outward shape of a record: what forms carry and views display.
pub trait FormModel: Serialize + Default + Clone + fmt::Debug + Send + Sync + 'static {
    fn id(&self) -> Option<i32>;
    fn set_id(&mut self, id: Option<i32>);
}

/// A unique business key read from a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaturalKey<'a> {
    pub field: &'static str,
    /// Capitalized field name for messages
    pub title: &'static str,
    pub value: &'a str,
}

pub trait Resource: Send + Sync + 'static {
    type Record: Record;
    type Form: FormModel;

    const KIND: Kind;

    /// Read the form's fields. Unparseable values are reported in `errors`.
    fn bind(&self, fields: &FormFields, errors: &mut ValidationErrors) -> Self::Form;

    /// Apply the kind's rule set.
    fn validate(&self, form: &Self::Form, mode: FormMode, errors: &mut ValidationErrors);

    fn to_form(&self, record: &Self::Record) -> Self::Form;

    /// A new, unsaved record from a valid form.
    fn to_record(&self, form: &Self::Form) -> CatalogResult<Self::Record>;

    /// Copy the form-editable fields onto a stored record. Id and audit
    /// fields are left alone.
    fn apply(&self, form: &Self::Form, record: &mut Self::Record) -> CatalogResult<()>;

    fn natural_key<'a>(&self, _form: &'a Self::Form) -> Option<NaturalKey<'a>> {
        None
    }
}
