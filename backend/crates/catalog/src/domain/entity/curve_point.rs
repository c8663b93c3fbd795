//! Curve Point Entity

use chrono::NaiveDateTime;

use crate::domain::record::Record;

/// One point of a yield curve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurvePoint {
    pub id: Option<i32>,
    pub curve_id: Option<i32>,
    pub as_of_date: Option<NaiveDateTime>,
    pub term: Option<f64>,
    pub value: Option<f64>,
    /// Set on first insert only
    pub creation_date: Option<NaiveDateTime>,
}

impl Record for CurvePoint {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = Some(id);
    }

    fn stamp_creation(&mut self, _actor: &str, at: NaiveDateTime) {
        self.creation_date = Some(at);
    }
}
