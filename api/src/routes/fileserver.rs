//! Static landing page served under /app

use actix_web::HttpResponse;

const INDEX_PAGE: &str = "<html>\n  <body>\n    <h1>Welcome to Chirpy</h1>\n  </body>\n</html>\n";

/// Handler for GET /app/
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_PAGE)
}
