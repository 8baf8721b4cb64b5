use axum::{Router, Server, middleware::from_fn};
use scheduler_backend::db::models::{NewPerson, NewShift};
use scheduler_backend::db::repositories::{PersonnelRepo, ShiftsRepo};
use scheduler_backend::{AppState, db::Db};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = scheduler_backend::config::Config::from_env().expect("Failed to load config");
    scheduler_backend::init_tracing(&config);

    let db = Db::new();
    if config.seed_demo_data {
        seed_demo_data(&db);
    }

    let state = Arc::new(AppState::new(db, config.clone()));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(scheduler_backend::routes::create_router(state))
        .layer(cors)
        .layer(from_fn(scheduler_backend::middleware::logger::logger));

    let addr = config
        .server_address()
        .parse()
        .expect("Invalid server address");
    tracing::info!("Server running at http://{}", addr);
    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("Server error");
}

fn seed_demo_data(db: &Db) {
    let t = |h, m| chrono::NaiveTime::from_hms_opt(h, m, 0).unwrap();

    for (name, start, end) in [
        ("Morning", t(8, 0), t(16, 0)),
        ("Evening", t(16, 0), t(0, 0)),
        ("Night", t(22, 0), t(6, 0)),
    ] {
        ShiftsRepo::insert(
            db,
            NewShift {
                name: name.to_string(),
                description: None,
                start_time: Some(start),
                end_time: Some(end),
            },
            true,
        );
    }

    for (first, last, emp) in [
        ("Ayse", "Yilmaz", "P-1001"),
        ("Mehmet", "Demir", "P-1002"),
        ("Elif", "Kaya", "P-1003"),
    ] {
        PersonnelRepo::insert(
            db,
            NewPerson {
                first_name: first.to_string(),
                last_name: last.to_string(),
                employee_id: emp.to_string(),
            },
        );
    }

    tracing::info!("Seeded demo shifts and personnel");
}
