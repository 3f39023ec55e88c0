//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here together with its utoipa annotations, and Swagger
//! UI is mounted at `/api/docs` with the generated document at `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered in the same `routes!` call so axum merges their
/// method routers.
///
/// # Registered Endpoints
/// - `GET /users` - List users with their favorites
/// - `POST /user` - Create a user
/// - `GET /users/favorites` - Favorites of the acting user
/// - `GET /planets`, `GET /planets/{planet_id}` - Planets with residents
/// - `GET /people`, `GET /people/{people_id}` - Characters
/// - `POST|DELETE /favorite/planet/{planet_id}` - Toggle a favorite planet
/// - `POST|DELETE /favorite/people/{people_id}` - Toggle a favorite character
///
/// # Returns
/// An Axum `Router<AppState>`; call `with_state` before serving.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Holonet favorites API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::create_user))
        .routes(routes!(controller::user::get_favorites))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::character::get_characters))
        .routes(routes!(controller::character::get_character))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::remove_favorite_character
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
