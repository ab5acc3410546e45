use std::sync::Arc;

use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;

use aidline_backend::api::{AuthApi, DiagApi, HealthApi, PredictApi};
use aidline_backend::config::{self, database, Settings};
use aidline_backend::model::ModelState;
use aidline_backend::services::SessionService;
use aidline_backend::stores::UserStore;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    if let Err(e) = config::init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let settings = Settings::from_env();

    // Connect to database and bring the schema up to date
    let db = database::connect(&settings.database_url)
        .await
        .expect("Failed to connect to database");

    database::migrate(&db)
        .await
        .expect("Failed to run migrations");

    // Load the classifier artifacts once. Failure is logged, not fatal: the
    // server starts and the prediction endpoint answers 500 until restart.
    let model_state = Arc::new(ModelState::load(&settings.model));

    let user_store = Arc::new(UserStore::new(db.clone()));
    let sessions = Arc::new(SessionService::new());

    // Seed the three sample accounts when the users table is empty
    match user_store.seed_sample_users().await {
        Ok(true) => tracing::info!("seeded sample accounts"),
        Ok(false) => tracing::debug!("users table already populated, skipping seed"),
        Err(e) => tracing::error!(error = %e, "failed to seed sample accounts"),
    }

    let predict_api = PredictApi::new(Arc::clone(&model_state));
    let auth_api = AuthApi::new(Arc::clone(&user_store), Arc::clone(&sessions), db.clone());
    let diag_api = DiagApi::new(Arc::clone(&user_store));

    // Create OpenAPI service with all endpoint groups
    let api_service = OpenApiService::new(
        (predict_api, auth_api, diag_api, HealthApi),
        "Aidline Backend",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://{}", settings.bind_addr));

    let ui = api_service.swagger_ui();

    let app = Route::new()
        .nest("/swagger", ui)
        .nest("/", api_service);

    tracing::info!(addr = %settings.bind_addr, "starting server");

    Server::new(TcpListener::bind(&settings.bind_addr))
        .run(app)
        .await
}
