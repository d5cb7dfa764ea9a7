pub mod clock;
pub mod constants;
pub mod controller;
pub mod ports;
pub mod sabotage;

pub use clock::*;
pub use controller::*;
pub use ports::*;
pub use sabotage::*;
