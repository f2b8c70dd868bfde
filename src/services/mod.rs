/// Bulk import of external catalogs.
pub mod catalog_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// CRUD and search over stored games.
pub mod game_service;
/// Health check service.
pub mod health_service;
