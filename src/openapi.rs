/// OpenAPI documentation for the VibeHunt API
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "VibeHunt API",
        version = "1.0.0",
        description = "Product-discovery board: users submit idea posts, comment on them, and cast anonymous toggleable upvotes. The listing endpoint enriches posts with live vote and comment counts.",
        license(
            name = "MIT"
        )
    ),
    paths(
        crate::handlers::posts::list_posts,
        crate::handlers::posts::create_post,
        crate::handlers::comments::create_comment,
        crate::handlers::comments::list_comments,
        crate::handlers::votes::toggle_vote,
    ),
    components(schemas(
        crate::models::PostSummary,
        crate::models::CommentView,
        crate::models::Timeframe,
        crate::models::SortBy,
        crate::handlers::IdResponse,
        crate::handlers::posts::CreatePostRequest,
        crate::handlers::posts::PostListResponse,
        crate::handlers::comments::CreateCommentRequest,
        crate::handlers::comments::CommentListResponse,
        crate::handlers::votes::ToggleVoteRequest,
        crate::handlers::votes::ToggleVoteResponse,
        crate::handlers::votes::VoteStatus,
    )),
    tags(
        (name = "posts", description = "Idea post creation and enriched listing"),
        (name = "comments", description = "Comments attached to posts"),
        (name = "votes", description = "Anonymous toggleable upvotes"),
    )
)]
pub struct ApiDoc;
