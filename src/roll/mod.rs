mod ctx;
mod roller;
mod shared;

pub use ctx::{roll, roll_with_observer, DefaultRoller, RollContext};
pub use roller::Roller;
pub use shared::SharedRoller;
