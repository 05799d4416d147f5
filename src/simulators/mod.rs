pub mod history;
pub mod tank;
pub mod temperature;
