//! Validated CRUD Workflow
//!
//! One implementation of list / create / update / delete shared by every
//! record kind. Each operation ends in an [`Outcome`]; persistence failures
//! are turned into messages here and never escape as errors.
//!
//! Invariants:
//! - A form that fails validation never reaches the repository.
//! - The create/update branch is chosen by the form id alone: create
//!   clears it, update forces it to the path id.
//! - Update always re-reads the stored record and copies only the
//!   form-editable fields onto it.
//! - Delete checks existence first and never deletes an unknown id.

use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};
use kernel::validation::ValidationErrors;
use platform::flash::Flash;

use crate::application::form::FormFields;
use crate::application::resource::{FormMode, FormModel, Resource};
use crate::domain::record::Record;
use crate::domain::repository::Repository;
use crate::error::{CatalogError, CatalogResult};

/// What the presentation layer should do next.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<F> {
    /// Render the list view
    List {
        items: Vec<F>,
        error: Option<String>,
    },
    /// Render the add or update view
    Form {
        mode: FormMode,
        form: F,
        errors: ValidationErrors,
        message: Option<String>,
    },
    /// Go back to the list, carrying a flash
    Redirect { flash: Flash },
}

pub struct CrudWorkflow<P, R> {
    resource: Arc<P>,
    repository: Arc<R>,
}

impl<P, R> Clone for CrudWorkflow<P, R> {
    fn clone(&self) -> Self {
        Self {
            resource: Arc::clone(&self.resource),
            repository: Arc::clone(&self.repository),
        }
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

impl<P, R> CrudWorkflow<P, R>
where
    P: Resource,
    R: Repository<P::Record>,
{
    pub fn new(resource: Arc<P>, repository: Arc<R>) -> Self {
        Self {
            resource,
            repository,
        }
    }

    pub fn resource(&self) -> &P {
        &self.resource
    }

    // ========================================================================
    // Read
    // ========================================================================

    /// Every record as a form. A failed read shows an empty list.
    pub async fn list(&self) -> Outcome<P::Form> {
        match self.repository.find_all().await {
            Ok(records) => Outcome::List {
                items: records.iter().map(|r| self.resource.to_form(r)).collect(),
                error: None,
            },
            Err(e) => {
                e.log();
                Outcome::List {
                    items: Vec::new(),
                    error: Some(format!("Unable to load the {} list.", P::KIND.label)),
                }
            }
        }
    }

    pub fn show_create_form(&self) -> Outcome<P::Form> {
        Outcome::Form {
            mode: FormMode::Create,
            form: P::Form::default(),
            errors: ValidationErrors::new(),
            message: None,
        }
    }

    pub async fn show_update_form(&self, id: i32) -> Outcome<P::Form> {
        match self.repository.find_by_id(id).await {
            Ok(Some(record)) => Outcome::Form {
                mode: FormMode::Update,
                form: self.resource.to_form(&record),
                errors: ValidationErrors::new(),
                message: None,
            },
            Ok(None) => self.not_found(id),
            Err(e) => {
                e.log();
                Outcome::Redirect {
                    flash: Flash::error(format!("Unable to load the {}.", P::KIND.label)),
                }
            }
        }
    }

    // ========================================================================
    // Write
    // ========================================================================

    /// Validate and insert. `actor` goes into the creation audit.
    pub async fn create(&self, fields: &FormFields, actor: &str) -> Outcome<P::Form> {
        let mut errors = ValidationErrors::new();
        let mut form = self.resource.bind(fields, &mut errors);
        form.set_id(None);
        self.resource.validate(&form, FormMode::Create, &mut errors);

        if !errors.is_empty() {
            return self.invalid(FormMode::Create, form, errors);
        }

        match self.insert(&form, actor).await {
            Ok(record) => {
                tracing::info!(
                    kind = P::KIND.slug,
                    id = ?record.id(),
                    actor = %actor,
                    "Record created"
                );
                Outcome::Redirect {
                    flash: Flash::success(format!("{} added successfully.", P::KIND.title)),
                }
            }
            Err(e) => self.write_failed(FormMode::Create, form, e),
        }
    }

    /// Validate and update record `id`. Any id in the body is ignored.
    pub async fn update(&self, id: i32, fields: &FormFields, actor: &str) -> Outcome<P::Form> {
        let mut errors = ValidationErrors::new();
        let mut form = self.resource.bind(fields, &mut errors);
        form.set_id(Some(id));
        self.resource.validate(&form, FormMode::Update, &mut errors);

        if !errors.is_empty() {
            return self.invalid(FormMode::Update, form, errors);
        }

        match self.revise(id, &form, actor).await {
            Ok(_) => {
                tracing::info!(kind = P::KIND.slug, id, actor = %actor, "Record updated");
                Outcome::Redirect {
                    flash: Flash::success(format!("{} updated successfully.", P::KIND.title)),
                }
            }
            Err(e @ CatalogError::RecordNotFound { .. }) => {
                e.log();
                Outcome::Redirect {
                    flash: Flash::error(e.to_string()),
                }
            }
            Err(e) => self.write_failed(FormMode::Update, form, e),
        }
    }

    pub async fn delete(&self, id: i32) -> Outcome<P::Form> {
        match self.remove(id).await {
            Ok(()) => {
                tracing::info!(kind = P::KIND.slug, id, "Record deleted");
                Outcome::Redirect {
                    flash: Flash::success(format!("{} deleted successfully.", P::KIND.title)),
                }
            }
            Err(e @ CatalogError::RecordNotFound { .. }) => {
                e.log();
                Outcome::Redirect {
                    flash: Flash::error(e.to_string()),
                }
            }
            Err(e) => {
                e.log();
                Outcome::Redirect {
                    flash: Flash::error(format!("Error while deleting the {}.", P::KIND.label)),
                }
            }
        }
    }

    // ========================================================================
    // Steps
    // ========================================================================

    async fn insert(&self, form: &P::Form, actor: &str) -> CatalogResult<P::Record> {
        if let Some(key) = self.resource.natural_key(form) {
            if self.repository.find_by_natural_key(key.value).await?.is_some() {
                return Err(CatalogError::Duplicate {
                    field: key.field,
                    message: format!("{} {} already exists.", key.title, key.value),
                });
            }
        }

        let mut record = self.resource.to_record(form)?;
        record.stamp_creation(actor, now());
        self.repository.save(record).await
    }

    async fn revise(&self, id: i32, form: &P::Form, actor: &str) -> CatalogResult<P::Record> {
        let mut record = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| self.missing(id))?;

        if let Some(key) = self.resource.natural_key(form) {
            let holder = self.repository.find_by_natural_key(key.value).await?;
            if holder.is_some_and(|other| other.id() != Some(id)) {
                return Err(CatalogError::Duplicate {
                    field: key.field,
                    message: format!(
                        "{} {} is already taken by another {}.",
                        key.title,
                        key.value,
                        P::KIND.label
                    ),
                });
            }
        }

        self.resource.apply(form, &mut record)?;
        record.stamp_revision(actor, now());
        // Deleted between the lookup and the write.
        self.repository.save(record).await.map_err(|e| match e {
            CatalogError::Database(sqlx::Error::RowNotFound) => self.missing(id),
            e => e,
        })
    }

    async fn remove(&self, id: i32) -> CatalogResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(self.missing(id));
        }
        self.repository.delete_by_id(id).await
    }

    // ========================================================================
    // Outcomes
    // ========================================================================

    fn missing(&self, id: i32) -> CatalogError {
        CatalogError::RecordNotFound {
            label: P::KIND.label,
            id,
        }
    }

    fn not_found(&self, id: i32) -> Outcome<P::Form> {
        let e = self.missing(id);
        e.log();
        Outcome::Redirect {
            flash: Flash::error(e.to_string()),
        }
    }

    fn invalid(&self, mode: FormMode, form: P::Form, errors: ValidationErrors) -> Outcome<P::Form> {
        tracing::debug!(
            kind = P::KIND.slug,
            fields = errors.len(),
            "Form rejected by validation"
        );
        Outcome::Form {
            mode,
            form,
            errors,
            message: None,
        }
    }

    /// Re-render the form after a write that did not go through.
    fn write_failed(&self, mode: FormMode, form: P::Form, error: CatalogError) -> Outcome<P::Form> {
        error.log();
        match error {
            CatalogError::Validation(errors) => Outcome::Form {
                mode,
                form,
                errors,
                message: None,
            },
            CatalogError::Duplicate { message, .. } => Outcome::Form {
                mode,
                form,
                errors: ValidationErrors::new(),
                message: Some(message),
            },
            _ => {
                let verb = match mode {
                    FormMode::Create => "saving",
                    FormMode::Update => "updating",
                };
                Outcome::Form {
                    mode,
                    form,
                    errors: ValidationErrors::new(),
                    message: Some(format!("Error while {} the {}.", verb, P::KIND.label)),
                }
            }
        }
    }
}
