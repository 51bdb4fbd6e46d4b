use utoipa::{Modify, OpenApi};

use crate::features::citizens::{handlers as citizens_handlers, Citizen};
use crate::features::complaints::{handlers as complaints_handlers, Complaint, ComplaintStatus};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Citizens
        citizens_handlers::list_citizens,
        citizens_handlers::get_citizen,
        citizens_handlers::create_citizen,
        citizens_handlers::update_citizen,
        citizens_handlers::delete_citizen,
        // Complaints
        complaints_handlers::list_complaints,
        complaints_handlers::get_complaint,
        complaints_handlers::create_complaint,
        complaints_handlers::update_complaint,
        complaints_handlers::delete_complaint,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Citizens
            Citizen,
            ApiResponse<Citizen>,
            ApiResponse<Vec<Citizen>>,
            // Complaints
            Complaint,
            ComplaintStatus,
            ApiResponse<Complaint>,
            ApiResponse<Vec<Complaint>>,
        )
    ),
    tags(
        (name = "citizens", description = "Citizen registry"),
        (name = "complaints", description = "Complaints filed by registered citizens"),
    ),
    info(
        title = "Primarie Craiova API",
        version = "0.1.0",
        description = "Citizen registry and complaint management",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_lists_both_resources() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/citizens"));
        assert!(paths.contains_key("/api/citizens/{id}"));
        assert!(paths.contains_key("/api/complaints"));
        assert!(paths.contains_key("/api/complaints/{id}"));
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Registratura".to_string(),
            version: "2.0.0".to_string(),
            description: "Intern".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Registratura");
        assert_eq!(doc.info.version, "2.0.0");
        assert_eq!(doc.info.description.as_deref(), Some("Intern"));
    }
}
