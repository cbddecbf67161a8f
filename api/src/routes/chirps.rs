//! Chirp handlers

use actix_web::{web, HttpResponse};

use chirpy_core::domain::entities::SortDirection;
use chirpy_core::repositories::ChirpRepository;
use chirpy_core::services::chirp::{parse_author_id, parse_chirp_id, ChirpService};

use crate::dto::{ChirpResponse, CreateChirpRequest, ListChirpsQuery};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthenticatedUser;

/// Handler for POST /api/chirps
///
/// Requires `Authorization: Bearer <access token>`. The stored body has
/// profane words masked.
///
/// ## Errors
/// - 400 Bad Request: Body longer than 140 characters
/// - 401 Unauthorized: Missing or invalid access token
pub async fn create_chirp<C>(
    auth: AuthenticatedUser,
    service: web::Data<ChirpService<C>>,
    request: web::Json<CreateChirpRequest>,
) -> HttpResponse
where
    C: ChirpRepository + 'static,
{
    match service.create(auth.user_id, &request.body).await {
        Ok(chirp) => HttpResponse::Created().json(ChirpResponse::from(chirp)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/chirps
///
/// Optional query parameters: `authorId` filters by author, `sort=desc`
/// lists newest first.
pub async fn list_chirps<C>(
    service: web::Data<ChirpService<C>>,
    query: web::Query<ListChirpsQuery>,
) -> HttpResponse
where
    C: ChirpRepository + 'static,
{
    let author_id = match parse_author_id(query.author_id.as_deref()) {
        Ok(author_id) => author_id,
        Err(error) => return handle_domain_error(&error),
    };
    let sort = SortDirection::from_query(query.sort.as_deref());

    match service.list(author_id, sort).await {
        Ok(chirps) => HttpResponse::Ok().json(
            chirps
                .into_iter()
                .map(ChirpResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/chirps/{chirp_id}
pub async fn get_chirp<C>(
    service: web::Data<ChirpService<C>>,
    path: web::Path<String>,
) -> HttpResponse
where
    C: ChirpRepository + 'static,
{
    let chirp_id = match parse_chirp_id(&path) {
        Ok(chirp_id) => chirp_id,
        Err(error) => return handle_domain_error(&error),
    };

    match service.get(chirp_id).await {
        Ok(chirp) => HttpResponse::Ok().json(ChirpResponse::from(chirp)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for DELETE /api/chirps/{chirp_id}
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid access token
/// - 403 Forbidden: Caller is not the author
/// - 404 Not Found: No such chirp
pub async fn delete_chirp<C>(
    auth: AuthenticatedUser,
    service: web::Data<ChirpService<C>>,
    path: web::Path<String>,
) -> HttpResponse
where
    C: ChirpRepository + 'static,
{
    let chirp_id = match parse_chirp_id(&path) {
        Ok(chirp_id) => chirp_id,
        Err(error) => return handle_domain_error(&error),
    };

    match service.delete(auth.user_id, chirp_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(&error),
    }
}
