// Route path constants - single source of truth for all paths

pub const PAGE: &str = "/";
pub const HEALTH: &str = "/health";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
