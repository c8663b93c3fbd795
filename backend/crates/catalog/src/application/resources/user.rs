//! User resource
//!
//! Same workflow as every other kind, plus two rules: usernames are
//! unique, and a password is hashed on the way in and never shown again.
//! On update a blank password keeps the stored hash.

use auth::Role;
use kernel::validation::ValidationErrors;
use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};
use serde::Serialize;

use crate::application::form::FormFields;
use crate::application::resource::{FormMode, FormModel, Kind, NaturalKey, Resource};
use crate::domain::entity::User;
use crate::error::{CatalogError, CatalogResult};

pub const PASSWORD_PATTERN_MESSAGE: &str = "Password must be at least 8 characters long and contain at least one number and one special character";

const MAX_CHARS: usize = 125;

#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    pub id: Option<i32>,
    pub username: String,
    /// Inbound only
    #[serde(skip_serializing)]
    pub password: String,
    pub fullname: String,
    pub role: String,
}

impl std::fmt::Debug for UserForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserForm")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("fullname", &self.fullname)
            .field("role", &self.role)
            .finish()
    }
}

impl FormModel for UserForm {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn set_id(&mut self, id: Option<i32>) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserResource {
    password_pepper: Option<Vec<u8>>,
}

impl UserResource {
    pub fn new(password_pepper: Option<Vec<u8>>) -> Self {
        Self { password_pepper }
    }

    fn hash_password(&self, raw: &str) -> CatalogResult<HashedPassword> {
        let password = ClearTextPassword::new(raw).map_err(|e| {
            let mut errors = ValidationErrors::new();
            errors.add("password", policy_message(&e));
            CatalogError::Validation(errors)
        })?;
        Ok(password.hash(self.password_pepper.as_deref())?)
    }
}

fn policy_message(error: &PasswordPolicyError) -> String {
    match error {
        PasswordPolicyError::TooShort { .. }
        | PasswordPolicyError::MissingDigit
        | PasswordPolicyError::MissingSymbol => PASSWORD_PATTERN_MESSAGE.to_string(),
        other => other.to_string(),
    }
}

impl Resource for UserResource {
    type Record = User;
    type Form = UserForm;

    const KIND: Kind = Kind {
        slug: "user",
        label: "user",
        title: "User",
        list_key: "users",
        form_key: "user",
    };

    fn bind(&self, fields: &FormFields, _errors: &mut ValidationErrors) -> UserForm {
        UserForm {
            id: fields.id(),
            username: fields.text("username"),
            password: fields.text("password"),
            fullname: fields.text("fullname"),
            role: fields.text("role"),
        }
    }

    fn validate(&self, form: &UserForm, mode: FormMode, errors: &mut ValidationErrors) {
        errors
            .not_blank("username", &form.username, "Username is mandatory")
            .max_chars(
                "username",
                &form.username,
                MAX_CHARS,
                "Username must be less than 125 characters",
            );

        if form.password.trim().is_empty() {
            if mode == FormMode::Create {
                errors.add("password", "Password is mandatory");
            }
        } else if let Err(e) = ClearTextPassword::new(&form.password) {
            errors.add("password", policy_message(&e));
        }

        errors
            .not_blank("fullname", &form.fullname, "FullName is mandatory")
            .max_chars(
                "fullname",
                &form.fullname,
                MAX_CHARS,
                "FullName must be less than 125 characters",
            )
            .not_blank("role", &form.role, "Role is mandatory")
            .max_chars("role", &form.role, MAX_CHARS, "Role must be less than 125 characters");
    }

    /// The password field always comes back blank.
    fn to_form(&self, record: &User) -> UserForm {
        UserForm {
            id: record.id,
            username: record.username.clone(),
            password: String::new(),
            fullname: record.fullname.clone(),
            role: record.role.to_string(),
        }
    }

    fn to_record(&self, form: &UserForm) -> CatalogResult<User> {
        let password_hash = self.hash_password(&form.password)?;
        Ok(User::new(
            form.username.clone(),
            password_hash,
            form.fullname.clone(),
            Role::new(&form.role),
        ))
    }

    fn apply(&self, form: &UserForm, record: &mut User) -> CatalogResult<()> {
        if !form.password.trim().is_empty() {
            record.password_hash = self.hash_password(&form.password)?;
        }
        record.username = form.username.clone();
        record.fullname = form.fullname.clone();
        record.role = Role::new(&form.role);
        Ok(())
    }

    fn natural_key<'a>(&self, form: &'a UserForm) -> Option<NaturalKey<'a>> {
        Some(NaturalKey {
            field: "username",
            title: "Username",
            value: &form.username,
        })
    }
}
