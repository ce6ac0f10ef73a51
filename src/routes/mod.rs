// Route exports
pub mod pages;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(pages::configure)
        .service(actix_files::Files::new("/static", "static"));
}
