use actix_web::HttpResponse;

/// Handler for GET /api/healthz
pub async fn readiness() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("OK")
}
