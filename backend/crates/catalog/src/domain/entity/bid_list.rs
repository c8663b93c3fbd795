//! Bid List Entity

use chrono::NaiveDateTime;

use crate::domain::record::Record;

/// One bid on a security, with creation and revision audit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BidList {
    pub id: Option<i32>,
    pub account: String,
    pub bid_type: String,
    pub bid_quantity: Option<f64>,
    pub ask_quantity: Option<f64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub benchmark: Option<String>,
    pub bid_list_date: Option<NaiveDateTime>,
    pub commentary: Option<String>,
    pub security: Option<String>,
    pub status: Option<String>,
    pub trader: Option<String>,
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

impl BidList {
    pub fn new(account: impl Into<String>, bid_type: impl Into<String>, bid_quantity: f64) -> Self {
        Self {
            account: account.into(),
            bid_type: bid_type.into(),
            bid_quantity: Some(bid_quantity),
            ..Self::default()
        }
    }
}

impl Record for BidList {
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
