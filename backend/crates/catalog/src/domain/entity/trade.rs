//! Trade Entity

use chrono::NaiveDateTime;

use crate::domain::record::Record;

/// A booked trade, with creation and revision audit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trade {
    pub id: Option<i32>,
    pub account: String,
    pub trade_type: String,
    pub buy_quantity: Option<f64>,
    pub sell_quantity: Option<f64>,
    pub buy_price: Option<f64>,
    pub sell_price: Option<f64>,
    pub trade_date: Option<NaiveDateTime>,
    pub security: Option<String>,
    pub status: Option<String>,
    pub trader: Option<String>,
    pub benchmark: Option<String>,
    pub book: Option<String>,
    pub creation_name: Option<String>,
    pub creation_date: Option<NaiveDateTime>,
    pub revision_name: Option<String>,
    pub revision_date: Option<NaiveDateTime>,
    pub deal_name: Option<String>,
    pub deal_type: Option<String>,
    pub source_list_id: Option<String>,
    pub side: Option<String>,
}

impl Trade {
    pub fn new(account: impl Into<String>, trade_type: impl Into<String>, buy_quantity: f64) -> Self {
        Self {
            account: account.into(),
            trade_type: trade_type.into(),
            buy_quantity: Some(buy_quantity),
            ..Self::default()
        }
    }
}

impl Record for Trade {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = Some(id);
    }

    fn stamp_creation(&mut self, actor: &str, at: NaiveDateTime) {
        self.creation_name = Some(actor.to_string());
        self.creation_date = Some(at);
    }

    fn stamp_revision(&mut self, actor: &str, at: NaiveDateTime) {
        self.revision_name = Some(actor.to_string());
        self.revision_date = Some(at);
    }
}
