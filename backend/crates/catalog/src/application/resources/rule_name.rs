//! Rule Name resource

use kernel::validation::ValidationErrors;
use serde::Serialize;

use crate::application::form::FormFields;
use crate::application::resource::{FormMode, FormModel, Kind, Resource};
use crate::domain::entity::RuleName;
use crate::error::CatalogResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleNameForm {
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub json: String,
    pub template: String,
    pub sql: String,
    pub sql_part: String,
}

impl FormModel for RuleNameForm {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn set_id(&mut self, id: Option<i32>) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleNameResource;

fn or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn non_blank(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}

impl Resource for RuleNameResource {
    type Record = RuleName;
    type Form = RuleNameForm;

    const KIND: Kind = Kind {
        slug: "ruleName",
        label: "rule name",
        title: "Rule name",
        list_key: "ruleNames",
        form_key: "ruleName",
    };

    fn bind(&self, fields: &FormFields, _errors: &mut ValidationErrors) -> RuleNameForm {
        RuleNameForm {
            id: fields.id(),
            name: fields.text("name"),
            description: fields.text("description"),
            json: fields.text("json"),
            template: fields.text("template"),
            sql: fields.text("sql"),
            sql_part: fields.text("sqlPart"),
        }
    }

    fn validate(&self, form: &RuleNameForm, _mode: FormMode, errors: &mut ValidationErrors) {
        errors
            .not_blank("name", &form.name, "Name is mandatory.")
            .max_chars("name", &form.name, 125, "Name must not exceed 125 characters.")
            .max_chars(
                "description",
                &form.description,
                125,
                "Description must not exceed 125 characters.",
            )
            .max_chars("json", &form.json, 125, "JSON must not exceed 125 characters.")
            .max_chars(
                "template",
                &form.template,
                512,
                "Template must not exceed 512 characters.",
            )
            .max_chars("sql", &form.sql, 125, "SQL must not exceed 125 characters.")
            .max_chars(
                "sqlPart",
                &form.sql_part,
                125,
                "SQL part must not exceed 125 characters.",
            );
    }

    fn to_form(&self, record: &RuleName) -> RuleNameForm {
        RuleNameForm {
            id: record.id,
            name: record.name.clone(),
            description: or_empty(&record.description),
            json: or_empty(&record.json),
            template: or_empty(&record.template),
            sql: or_empty(&record.sql_str),
            sql_part: or_empty(&record.sql_part),
        }
    }

    fn to_record(&self, form: &RuleNameForm) -> CatalogResult<RuleName> {
        let mut record = RuleName::default();
        self.apply(form, &mut record)?;
        Ok(record)
    }

    fn apply(&self, form: &RuleNameForm, record: &mut RuleName) -> CatalogResult<()> {
        record.name = form.name.clone();
        record.description = non_blank(&form.description);
        record.json = non_blank(&form.json);
        record.template = non_blank(&form.template);
        record.sql_str = non_blank(&form.sql);
        record.sql_part = non_blank(&form.sql_part);
        Ok(())
    }
}
