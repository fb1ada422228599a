//! OpenAPI documentation for the Sleuth API.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error::{ErrorBody, ErrorCode};
use crate::routes;

/// Registers the bearer session-token scheme referenced by the route
/// annotations.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Session token issued by /auth/login"))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sleuth API",
        description = "Analytics hub: dashboard catalogue, resolution, user state, and content drafting."
    ),
    paths(
        routes::health::ping,
        routes::health::liveness,
        routes::health::readiness,
        routes::auth::login,
        routes::auth::logout,
        routes::auth::profile,
        routes::dashboard::list,
        routes::dashboard::recent,
        routes::dashboard::resolve,
        routes::dashboard::toggle_favorite,
        routes::compare::compare,
        routes::draft::generate,
        routes::notepad::load,
        routes::notepad::save,
    ),
    components(schemas(
        ErrorBody,
        ErrorCode,
        routes::auth::LoginRequest,
        routes::auth::LoginResponse,
        routes::auth::LogoutResponse,
        routes::dashboard::DashboardList,
        routes::dashboard::ResolveResponse,
        routes::compare::CompareResponse,
        routes::notepad::Notepad,
        routes::health::ProbeReport,
        routes::health::ProbeStatus,
        routes::health::StorageProbe,
        sleuth_core::DashboardConfig,
        sleuth_core::Presentation,
        sleuth_core::PresentationKind,
        sleuth_core::IconName,
        sleuth_core::ChildReport,
        sleuth_core::ChildSource,
        sleuth_core::RenderPlan,
        sleuth_core::ReportTab,
        sleuth_core::ComparisonPane,
        sleuth_core::PaneContent,
        sleuth_core::UserProfile,
        sleuth_core::UserPreferences,
        sleuth_core::DraftRequest,
        sleuth_core::DraftResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and readiness"),
        (name = "Auth", description = "Demo login and session management"),
        (name = "Dashboards", description = "Catalogue, resolution, favorites, history"),
        (name = "Compare", description = "Side-by-side dashboard comparison"),
        (name = "Drafts", description = "Content drafting and the notepad"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_builds() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("/api/content-generator"));
        assert!(json.contains("/api/dashboards/{id}"));
    }
}
