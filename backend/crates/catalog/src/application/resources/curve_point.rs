//! Curve Point resource

use chrono::NaiveDateTime;
use kernel::validation::ValidationErrors;
use serde::Serialize;

use crate::application::form::FormFields;
use crate::application::resource::{FormMode, FormModel, Kind, Resource};
use crate::domain::entity::CurvePoint;
use crate::error::CatalogResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePointForm {
    pub id: Option<i32>,
    pub curve_id: Option<i32>,
    pub as_of_date: Option<NaiveDateTime>,
    pub term: Option<f64>,
    pub value: Option<f64>,
    pub creation_date: Option<NaiveDateTime>,
}

impl FormModel for CurvePointForm {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn set_id(&mut self, id: Option<i32>) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CurvePointResource;

impl Resource for CurvePointResource {
    type Record = CurvePoint;
    type Form = CurvePointForm;

    const KIND: Kind = Kind {
        slug: "curvePoint",
        label: "curve point",
        title: "Curve point",
        list_key: "curvePoints",
        form_key: "curvePoint",
    };

    fn bind(&self, fields: &FormFields, errors: &mut ValidationErrors) -> CurvePointForm {
        CurvePointForm {
            id: fields.id(),
            curve_id: fields.number("curveId", errors),
            as_of_date: fields.date_time("asOfDate", errors),
            term: fields.decimal("term", errors),
            value: fields.decimal("value", errors),
            creation_date: None,
        }
    }

    fn validate(&self, form: &CurvePointForm, _mode: FormMode, errors: &mut ValidationErrors) {
        errors
            .required("curveId", &form.curve_id, "Curve ID cannot be null.")
            .at_least("curveId", form.curve_id, 1, "Curve ID must be a positive number.")
            .required("term", &form.term, "Term cannot be null.")
            .at_least("term", form.term, 0.0, "Term must be zero or positive.")
            .required("value", &form.value, "Value cannot be null.");
    }

    fn to_form(&self, record: &CurvePoint) -> CurvePointForm {
        CurvePointForm {
            id: record.id,
            curve_id: record.curve_id,
            as_of_date: record.as_of_date,
            term: record.term,
            value: record.value,
            creation_date: record.creation_date,
        }
    }

    fn to_record(&self, form: &CurvePointForm) -> CatalogResult<CurvePoint> {
        let mut record = CurvePoint::default();
        self.apply(form, &mut record)?;
        Ok(record)
    }

    fn apply(&self, form: &CurvePointForm, record: &mut CurvePoint) -> CatalogResult<()> {
        record.curve_id = form.curve_id;
        record.as_of_date = form.as_of_date;
        record.term = form.term;
        record.value = form.value;
        Ok(())
    }
}
