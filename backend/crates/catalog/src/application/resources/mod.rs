//! The six record kinds managed through the CRUD workflow.

pub mod bid_list;
pub mod curve_point;
pub mod rating;
pub mod rule_name;
pub mod trade;
pub mod user;

pub use bid_list::{BidListForm, BidListResource};
pub use curve_point::{CurvePointForm, CurvePointResource};
pub use rating::{RatingForm, RatingResource};
pub use rule_name::{RuleNameForm, RuleNameResource};
pub use trade::{TradeForm, TradeResource};
pub use user::{UserForm, UserResource};
