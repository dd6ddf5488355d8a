pub mod kilos_controller;

pub use kilos_controller::configure;
