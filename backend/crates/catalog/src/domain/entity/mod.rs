//! Entity Module

pub mod bid_list;
pub mod curve_point;
pub mod rating;
pub mod rule_name;
pub mod trade;
pub mod user;

pub use bid_list::BidList;
pub use curve_point::CurvePoint;
pub use rating::Rating;
pub use rule_name::RuleName;
pub use trade::Trade;
pub use user::User;
