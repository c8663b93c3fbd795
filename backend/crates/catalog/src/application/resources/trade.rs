//! Trade resource

use kernel::validation::ValidationErrors;
use serde::Serialize;

use crate::application::form::FormFields;
use crate::application::resource::{FormMode, FormModel, Kind, Resource};
use crate::domain::entity::Trade;
use crate::error::CatalogResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeForm {
    pub id: Option<i32>,
    pub account: String,
    #[serde(rename = "type")]
    pub trade_type: String,
    pub buy_quantity: Option<f64>,
}

impl FormModel for TradeForm {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn set_id(&mut self, id: Option<i32>) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TradeResource;

impl Resource for TradeResource {
    type Record = Trade;
    type Form = TradeForm;

    const KIND: Kind = Kind {
        slug: "trade",
        label: "trade",
        title: "Trade",
        list_key: "trades",
        form_key: "trade",
    };

    fn bind(&self, fields: &FormFields, errors: &mut ValidationErrors) -> TradeForm {
        TradeForm {
            id: fields.id(),
            account: fields.text("account"),
            trade_type: fields.text("type"),
            buy_quantity: fields.decimal("buyQuantity", errors),
        }
    }

    fn validate(&self, form: &TradeForm, _mode: FormMode, errors: &mut ValidationErrors) {
        errors
            .not_blank("account", &form.account, "Account is mandatory")
            .max_chars("account", &form.account, 30, "Account must be less than 30 characters")
            .not_blank("type", &form.trade_type, "Type is mandatory")
            .max_chars("type", &form.trade_type, 30, "Type must be less than 30 characters")
            .required("buyQuantity", &form.buy_quantity, "Buy quantity is mandatory")
            .at_least(
                "buyQuantity",
                form.buy_quantity,
                0.0,
                "Buy quantity must be a positive number or zero",
            );
    }

    fn to_form(&self, record: &Trade) -> TradeForm {
        TradeForm {
            id: record.id,
            account: record.account.clone(),
            trade_type: record.trade_type.clone(),
            buy_quantity: record.buy_quantity,
        }
    }

    fn to_record(&self, form: &TradeForm) -> CatalogResult<Trade> {
        Ok(Trade {
            account: form.account.clone(),
            trade_type: form.trade_type.clone(),
            buy_quantity: form.buy_quantity,
            ..Trade::default()
        })
    }

    fn apply(&self, form: &TradeForm, record: &mut Trade) -> CatalogResult<()> {
        record.account = form.account.clone();
        record.trade_type = form.trade_type.clone();
        record.buy_quantity = form.buy_quantity;
        Ok(())
    }
}
