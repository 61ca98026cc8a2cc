//! Landing page handler.

use std::sync::Arc;

use axum::extract::Extension;
use axum::Json;
use stac_protocol::LandingPage;

use crate::state::AppState;

/// GET / - Landing page
pub async fn landing_handler(Extension(state): Extension<Arc<AppState>>) -> Json<LandingPage> {
    Json(LandingPage::new(
        "EO Catalogue STAC API",
        "STAC search facade over the EO metadata catalogue",
        &state.base_url,
    ))
}

#[cfg(test)]
mod tests {
    use stac_protocol::LandingPage;

    #[test]
    fn test_landing_page_structure() {
        let landing = LandingPage::new("Test API", "Test description", "http://localhost:8084");

        assert!(landing.links.iter().any(|l| l.rel == "self"));
        assert!(landing.links.iter().any(|l| l.rel == "conformance"));
        assert!(landing.links.iter().any(|l| l.rel == "data"));
        assert!(landing.links.iter().any(|l| l.rel == "search"));
    }
}
