mod board;
mod fields;
mod ticker;
mod unit;

pub use board::TimerBoard;
pub use fields::FieldEditState;
pub use ticker::{TickClock, TickRegistration, TICK_PERIOD};
pub use unit::{CountdownUnit, TimerExpired};
