//! Single binary web server: one live tournament, driven by actions over REST, state pushed via SSE.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT. Set ENTRIES_FILE (.json or .csv) to seed entries and open the first pairing.

use actix_web::{
    get, post,
    web::{Bytes, Data, Json},
    App, HttpResponse, HttpServer, Responder,
};
use futures_util::stream;
use head_to_head::{load_entries, Action, Store, TournamentState};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Snapshots waiting for a slow event-stream client before it skips ahead.
const EVENT_BUFFER: usize = 64;

type AppStore = Data<Store>;
type StateEvents = Data<broadcast::Sender<Arc<TournamentState>>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "head-to-head",
    })
}

/// Current tournament state.
#[get("/api/state")]
async fn api_get_state(store: AppStore) -> HttpResponse {
    HttpResponse::Ok().json(store.get_state().as_ref())
}

/// Apply one action (SET_ENTRIES, NEXT, VOTE). Returns the new state, or 400 if rejected.
#[post("/api/actions")]
async fn api_dispatch(store: AppStore, body: Json<Action>) -> HttpResponse {
    match store.dispatch(&body) {
        Ok(state) => HttpResponse::Ok().json(state.as_ref()),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

fn sse_frame(state: &TournamentState) -> Result<Bytes, actix_web::Error> {
    let json = serde_json::to_string(state).map_err(actix_web::error::ErrorInternalServerError)?;
    Ok(Bytes::from(format!("event: state\ndata: {}\n\n", json)))
}

/// Server-sent events: the current state right away, then every new state.
#[get("/api/state/events")]
async fn api_state_events(store: AppStore, events: StateEvents) -> HttpResponse {
    // Subscribe before reading the snapshot so no change falls in between.
    let rx = events.subscribe();
    let initial = store.get_state();
    let frames = stream::unfold((rx, Some(initial)), |(mut rx, pending)| async move {
        if let Some(state) = pending {
            return Some((sse_frame(&state), (rx, None)));
        }
        loop {
            match rx.recv().await {
                Ok(state) => return Some((sse_frame(&state), (rx, None))),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    log::warn!("Event stream client lagged, skipped {} state(s)", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    });
    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("Cache-Control", "no-cache"))
        .streaming(frames)
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Load ENTRIES_FILE (if set), install it, and open the first pairing.
fn seed_from_env(store: &Store) -> std::io::Result<()> {
    let Ok(path) = std::env::var("ENTRIES_FILE") else {
        log::info!("ENTRIES_FILE not set; waiting for a SET_ENTRIES action");
        return Ok(());
    };
    let entries = load_entries(&path).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    log::info!("Loaded {} entries from {}", entries.len(), path);
    store
        .dispatch(&Action::SetEntries { entries })
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    if let Err(e) = store.dispatch(&Action::Advance) {
        log::warn!("Could not open the first pairing: {}", e);
    }
    Ok(())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);

    let store = Data::new(Store::new());
    let (tx, _) = broadcast::channel::<Arc<TournamentState>>(EVENT_BUFFER);
    let publisher = tx.clone();
    store.subscribe(move |state| {
        // No receivers just means no client is listening right now.
        let _ = publisher.send(Arc::clone(state));
    });
    let events = Data::new(tx);

    seed_from_env(&store)?;

    log::info!("Starting server at http://{}:{}", bind.0, bind.1);
    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(events.clone())
            .service(api_health)
            .service(favicon)
            .service(api_get_state)
            .service(api_state_events)
            .service(api_dispatch)
    })
    .bind(bind)?
    .run()
    .await
}
