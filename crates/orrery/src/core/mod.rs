pub mod clock;
pub mod plane;
pub mod time;
