mod citizens_service;
mod pg_citizens_service;

pub use citizens_service::CitizensService;
pub use pg_citizens_service::PgCitizensService;
