//! Bid List resource

use chrono::NaiveDateTime;
use kernel::validation::ValidationErrors;
use serde::Serialize;

use crate::application::form::FormFields;
use crate::application::resource::{FormMode, FormModel, Kind, Resource};
use crate::domain::entity::BidList;
use crate::error::CatalogResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidListForm {
    pub id: Option<i32>,
    pub account: String,
    #[serde(rename = "type")]
    pub bid_type: String,
    pub bid_quantity: Option<f64>,
    /// Display only
    pub creation_date: Option<NaiveDateTime>,
}

impl FormModel for BidListForm {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn set_id(&mut self, id: Option<i32>) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BidListResource;

impl Resource for BidListResource {
    type Record = BidList;
    type Form = BidListForm;

    const KIND: Kind = Kind {
        slug: "bidList",
        label: "bid list",
        title: "Bid list",
        list_key: "bidLists",
        form_key: "bidList",
    };

    fn bind(&self, fields: &FormFields, errors: &mut ValidationErrors) -> BidListForm {
        BidListForm {
            id: fields.id(),
            account: fields.text("account"),
            bid_type: fields.text("type"),
            bid_quantity: fields.decimal("bidQuantity", errors),
            creation_date: None,
        }
    }

    fn validate(&self, form: &BidListForm, _mode: FormMode, errors: &mut ValidationErrors) {
        errors
            .not_blank("account", &form.account, "Account is mandatory.")
            .max_chars("account", &form.account, 30, "Account must not exceed 30 characters.")
            .not_blank("type", &form.bid_type, "Type is mandatory.")
            .max_chars("type", &form.bid_type, 30, "Type must not exceed 30 characters.")
            .required("bidQuantity", &form.bid_quantity, "Bid quantity is mandatory.")
            .at_least(
                "bidQuantity",
                form.bid_quantity,
                0.0,
                "Bid quantity must be zero or positive.",
            );
    }

    fn to_form(&self, record: &BidList) -> BidListForm {
        BidListForm {
            id: record.id,
            account: record.account.clone(),
            bid_type: record.bid_type.clone(),
            bid_quantity: record.bid_quantity,
            creation_date: record.creation_date,
        }
    }

    fn to_record(&self, form: &BidListForm) -> CatalogResult<BidList> {
        let mut record = BidList::default();
        self.apply(form, &mut record)?;
        Ok(record)
    }

    fn apply(&self, form: &BidListForm, record: &mut BidList) -> CatalogResult<()> {
        record.account = form.account.clone();
        record.bid_type = form.bid_type.clone();
        record.bid_quantity = form.bid_quantity;
        Ok(())
    }
}
