//! Rating Entity

use crate::domain::record::Record;

/// Credit ratings from the three agencies, plus a display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rating {
    pub id: Option<i32>,
    pub moodys_rating: String,
    pub sand_p_rating: String,
    pub fitch_rating: String,
    pub order_number: Option<i32>,
}

impl Record for Rating {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = Some(id);
    }
}
