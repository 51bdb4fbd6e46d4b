mod complaints_controller;

pub use complaints_controller::ComplaintsController;
