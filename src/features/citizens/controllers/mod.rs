mod citizens_controller;

pub use citizens_controller::CitizensController;
