//! Single binary web server: JSON API over the roster engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Optional env RULES_CONFIG: path to a JSON rule configuration (defaults otherwise).
//!
//! Stateless: every request carries the snapshot (players, teams with matches, composition,
//! selection) the caller wants validated.

use actix_web::{
    get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use tt_roster_rules::{
    assignable_teams, can_assign_at, classify_championship_type, resolve_paris_structure_with,
    storage_championship_type, validate_all, validate_state, Composition, Equipe, Player,
    RuleConfig, RuleSet, Selection, ValidationContext,
};

type AppState = Data<RuleConfig>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Everything the rules read, as sent by the UI.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    players: Vec<Player>,
    equipes: Vec<Equipe>,
    #[serde(default)]
    composition: Composition,
    selection: Selection,
}

impl Snapshot {
    fn context<'a>(&'a self, config: &'a RuleConfig) -> ValidationContext<'a> {
        ValidationContext::new(
            &self.players,
            &self.equipes,
            &self.composition,
            self.selection,
            config,
        )
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CanAssignBody {
    snapshot: Snapshot,
    player_id: String,
    team_id: String,
    #[serde(default)]
    slot: Option<usize>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateStateBody {
    snapshot: Snapshot,
    team_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotBody {
    snapshot: Snapshot,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssignableTeamsBody {
    snapshot: Snapshot,
    player_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClassifyBody {
    equipe: Equipe,
    #[serde(default)]
    rule_set: RuleSet,
}

/// Path segment: raw division label (e.g. /api/paris-structure/Excellence)
#[derive(Deserialize)]
struct DivisionPath {
    division: String,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tt-roster-rules",
    })
}

/// Can this player be placed into this team? Always 200; the answer is in `canAssign`.
#[post("/api/can-assign")]
async fn api_can_assign(state: AppState, body: Json<CanAssignBody>) -> HttpResponse {
    let ctx = body.snapshot.context(&state);
    let outcome = can_assign_at(&body.player_id, &body.team_id, body.slot, &ctx);
    HttpResponse::Ok().json(outcome)
}

/// Is the saved roster of one team still valid?
#[post("/api/validate-state")]
async fn api_validate_state(state: AppState, body: Json<ValidateStateBody>) -> HttpResponse {
    let ctx = body.snapshot.context(&state);
    HttpResponse::Ok().json(validate_state(&body.team_id, &ctx))
}

/// Validate every roster of the composition (error badges).
#[post("/api/validate-all")]
async fn api_validate_all(state: AppState, body: Json<SnapshotBody>) -> HttpResponse {
    let ctx = body.snapshot.context(&state);
    HttpResponse::Ok().json(validate_all(&ctx))
}

/// Teams the player may be dropped into.
#[post("/api/assignable-teams")]
async fn api_assignable_teams(state: AppState, body: Json<AssignableTeamsBody>) -> HttpResponse {
    let ctx = body.snapshot.context(&state);
    HttpResponse::Ok().json(serde_json::json!({
        "teamIds": assignable_teams(&body.player_id, &ctx)
    }))
}

/// Group structure of a Paris division (404 for unknown labels).
#[get("/api/paris-structure/{division}")]
async fn api_paris_structure(state: AppState, path: Path<DivisionPath>) -> HttpResponse {
    match resolve_paris_structure_with(&path.division, state.paris_group_size) {
        Some(structure) => HttpResponse::Ok().json(structure),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": "Unknown Paris division",
            "fallbackTeamSize": state.paris_fallback_team_size,
        })),
    }
}

/// Masculine/feminine classification of a team, and the slice it is stored under.
#[post("/api/classify")]
async fn api_classify(body: Json<ClassifyBody>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "championshipType": classify_championship_type(&body.equipe),
        "storageChampionshipType": storage_championship_type(&body.equipe, body.rule_set),
    }))
}

/// Malformed JSON bodies become `400 {"error": ...}` like every other failure.
fn json_config() -> actix_web::web::JsonConfig {
    actix_web::web::JsonConfig::default()
        .limit(4 * 1024 * 1024)
        .error_handler(|err, _req| {
            let message = err.to_string();
            log::debug!("Rejected request body: {}", message);
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(serde_json::json!({ "error": message })),
            )
            .into()
        })
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn load_config() -> std::io::Result<RuleConfig> {
    match std::env::var("RULES_CONFIG") {
        Ok(path) => {
            let config = RuleConfig::from_json_file(&path)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            log::info!("Loaded rule configuration from {}", path);
            Ok(config)
        }
        Err(_) => {
            log::info!("RULES_CONFIG not set, using default rules");
            Ok(RuleConfig::default())
        }
    }
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

    let config = load_config()?;
    log::info!(
        "Rules: trigger matchday {}, team size {}, Paris group size {}",
        config.trigger_journee,
        config.standard_team_size,
        config.paris_group_size
    );
    let state = Data::new(config);

    log::info!("Starting server at http://{}:{}", bind.0, bind.1);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(json_config())
            .service(api_health)
            .service(api_can_assign)
            .service(api_validate_state)
            .service(api_validate_all)
            .service(api_assignable_teams)
            .service(api_paris_structure)
            .service(api_classify)
    })
    .bind(bind)?
    .run()
    .await
}
