//! Citizen registry.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/citizens` | List citizens (`?search_name=` filters by name) |
//! | GET | `/citizens/details/{id}` | Citizen detail page |
//! | GET, POST | `/citizens/create` | Registration form / submit |
//! | GET, POST | `/citizens/edit/{id}` | Edit form / submit |
//! | GET, POST | `/citizens/delete/{id}` | Delete confirmation / confirm |
//! | GET, POST | `/api/citizens` | JSON list / create |
//! | GET, PUT, DELETE | `/api/citizens/{id}` | JSON read / update / delete |

pub mod controllers;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::Citizen;
pub use services::{CitizensService, PgCitizensService};
