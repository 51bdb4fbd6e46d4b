mod complaints_service;
mod pg_complaints_service;

pub use complaints_service::ComplaintsService;
pub use pg_complaints_service::PgComplaintsService;
