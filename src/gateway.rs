mod error;
mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use axum_server::Server;

pub use error::GatewayError;

use crate::App;

/// Single route: `GET /` checks, `POST /` authorizes, any other method gets
/// `405 Method Not Allowed` from the router.
pub fn router(app: Arc<App>) -> Router {
    Router::new()
        .route("/", get(handlers::check_ip).post(handlers::authorize_ip))
        .with_state(app)
}

pub struct Gateway {
    server: Server,
    app: Arc<App>,
}

impl Gateway {
    pub fn new(addr: SocketAddr, app: App) -> Self {
        let server = axum_server::bind(addr);

        Self {
            server,
            app: Arc::new(app),
        }
    }

    pub async fn serve(self) -> std::io::Result<()> {
        let router = router(self.app).into_make_service();
        self.server.serve(router).await
    }
}
