//! Supporting utilities used by models.

pub mod constraint;
pub mod pvt;
pub mod units;
