//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the engine API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Engine API",
        version = "0.1.0",
        description = "Merchant item catalogue: listing, search, create and update"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/v1/items", api = domain_items::ApiDoc)
    ),
    tags(
        (name = "Items", description = "Catalogue items sold by merchants")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_paths_are_nested_under_api_v1() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/items"), "{paths:?}");
        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/items/{id}"), "{paths:?}");
    }
}
