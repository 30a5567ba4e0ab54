use std::net::TcpListener;

use actix_cors::Cors;
use actix_http::header;
use actix_web::{dev::Server, web, web::Data, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::Settings, dashboard::Dashboard, errors::ServiceError, routes, state::State,
};

pub struct Application {
    server: Server,
    host: String,
    port: u16,
}

impl Application {
    /// Binds the listener. The dashboard loads in the background so the other
    /// routes are served while its fetch is in flight.
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        tracing::info!("using config {:?}", configuration);

        let client = configuration
            .api
            .client()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        let host = configuration.application.host;
        let address = format!("{}:{}", host, configuration.application.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let state = Data::new(State::new(client, configuration.api.dashboard_url));

        let loader_state = state.clone();
        tokio::spawn(async move {
            tracing::info!("starting dashboard loader");
            let dashboard = Dashboard::load(&loader_state.client).await;
            tracing::info!(
                "dashboard loaded: {} scanned, {} reported",
                dashboard.stats.total_scanned,
                dashboard.stats.total_reported
            );
            *loader_state.dashboard.write().await = dashboard;
        });

        let server = run(listener, state)?;

        Ok(Self { server, host, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        tracing::info!("starting webserver at http://{}:{}", self.host, self.port);
        self.server.await
    }
}

pub fn run(listener: TcpListener, state: Data<State>) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_header(header::CONTENT_TYPE)
            .max_age(3600);

        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            tracing::warn!("rejected request body: {}", err);
            ServiceError::BadRequest(err.to_string()).into()
        });

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .route("/", web::get().to(routes::landing))
            .route("/health_check", web::get().to(routes::health_check))
            .route("/dashboard", web::get().to(routes::dashboard))
            .route("/popup", web::get().to(routes::popup_view))
            .route("/popup/input", web::post().to(routes::popup_input))
            .route("/popup/check", web::post().to(routes::popup_check))
            .route("/popup/report", web::post().to(routes::popup_report))
            .route("/popup/dashboard", web::get().to(routes::open_dashboard))
            .app_data(json_config)
            .app_data(state.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
