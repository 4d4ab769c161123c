pub mod events;
pub mod headless;
pub mod ports;
pub mod session;
