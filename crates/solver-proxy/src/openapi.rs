use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::extract::extract, crate::routes::generate::generate),
    components(schemas(
        crate::types::ExtractRequest,
        crate::types::ExtractResponse,
        crate::types::GenerateRequest,
        crate::types::GenerateResponse,
        crate::language::Language,
    )),
    tags((name = "solver", description = "Problem extraction and solution generation"))
)]
pub struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
