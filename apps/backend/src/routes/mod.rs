use actix_web::web;

use crate::middleware::authentication::Authentication;

pub mod health;
pub mod photos;
pub mod users;

/// Register every route. `/photos` sits behind the authentication gate;
/// `/users` and `/health` are public.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .service(web::scope("/users").configure(users::configure_routes))
        .service(
            web::scope("/photos")
                .wrap(Authentication)
                .configure(photos::configure_routes),
        );
}
