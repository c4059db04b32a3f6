//! Cash-flow schedule generation.

mod fixings;
mod schedule;

pub use fixings::ForwardFixings;
pub use schedule::coupon_schedule;
