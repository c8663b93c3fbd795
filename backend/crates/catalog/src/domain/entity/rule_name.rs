//! Rule Name Entity

use crate::domain::record::Record;

/// A named business rule with its template and SQL fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleName {
    pub id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub json: Option<String>,
    pub template: Option<String>,
    pub sql_str: Option<String>,
    pub sql_part: Option<String>,
}

impl Record for RuleName {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = Some(id);
    }
}
