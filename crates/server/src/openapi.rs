use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorBodyDoc { pub error: String, pub detail: Option<String> }

/// Stored entry as returned by reads.
#[derive(ToSchema)]
pub struct DiaryEntryDoc {
    pub id: i32,
    pub title: String,
    pub content: String,
    #[schema(example = "2024-05-01T08:30:00+00:00")]
    pub created: String,
    pub version: i32,
}

/// Entry accepted by create and update. `id` is ignored on create and must
/// match the path on update; `version` opts into an explicit concurrency check.
#[derive(ToSchema)]
pub struct DiaryEntryInputDoc {
    pub id: Option<i32>,
    pub title: String,
    pub content: Option<String>,
    #[schema(example = "2024-05-01T08:30:00Z")]
    pub created: Option<String>,
    pub version: Option<i32>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::diary_entries::list,
        crate::routes::diary_entries::get,
        crate::routes::diary_entries::create,
        crate::routes::diary_entries::update,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBodyDoc,
            DiaryEntryDoc,
            DiaryEntryInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "diary")
    )
)]
pub struct ApiDoc;
