//! Complaint management. Every complaint is filed by a registered citizen.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/complaints` | List complaints (`?search_title=` filters by title) |
//! | GET | `/complaints/details/{id}` | Complaint detail page |
//! | GET, POST | `/complaints/create` | Filing form / submit |
//! | GET, POST | `/complaints/edit/{id}` | Edit form / submit |
//! | GET, POST | `/complaints/delete/{id}` | Delete confirmation / confirm |
//! | GET, POST | `/api/complaints` | JSON list / create |
//! | GET, PUT, DELETE | `/api/complaints/{id}` | JSON read / update / delete |

pub mod controllers;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::{Complaint, ComplaintStatus};
pub use services::{ComplaintsService, PgComplaintsService};
