//! Single binary web server: dashboard, match entry, standings pages and downloads, JSON API.
//! Pages are static templates that read the JSON API from the browser.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT, DATA_DIR.

use actix_files::Files;
use actix_web::{
    error::{InternalError, JsonPayloadError},
    get,
    http::header,
    post,
    web::{self, Data, Json, Path},
    App, HttpRequest, HttpResponse, HttpServer, Responder,
};
use bgmi_points_table::{
    record_submission, report, standings, AppConfig, Group, MatchNo, MatchStore, MatchSubmission,
    SaveMatchResponse, ScoreError, Scope, Standings,
};
use chrono::Local;
use serde::{Deserialize, Serialize};

type AppState = Data<MatchStore>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct GroupSummary {
    group: Group,
    match_count: usize,
    next_match_no: MatchNo,
}

#[derive(Serialize)]
struct SummaryResponse {
    groups: Vec<GroupSummary>,
    total_matches: usize,
}

/// What the entry form needs: the group's roster and the number the match will get.
#[derive(Serialize)]
struct GroupInfo {
    group: Group,
    next_match_no: MatchNo,
    roster: &'static [&'static str],
}

/// Standings plus the headings the standings page shows.
#[derive(Serialize)]
struct LeaderboardResponse {
    #[serde(flatten)]
    standings: Standings,
    title: String,
    subtitle: String,
    columns: Vec<&'static str>,
}

impl LeaderboardResponse {
    fn new(standings: Standings) -> Self {
        let scope = standings.scope;
        Self {
            title: report::title(scope),
            subtitle: report::subtitle(scope, standings.match_count, Local::now().date_naive()),
            columns: report::columns(scope),
            standings,
        }
    }
}

/// Path segment: group id (e.g. /leaderboard/{group})
#[derive(Deserialize)]
struct GroupPath {
    group: String,
}

fn redirect_home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

fn html(body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

const INDEX_PAGE: &str = include_str!("../../templates/index.html");
const ADD_MATCH_PAGE: &str = include_str!("../../templates/add_match.html");
const LEADERBOARD_PAGE: &str = include_str!("../../templates/leaderboard.html");

fn storage_error(e: ScoreError) -> HttpResponse {
    log::error!("{}", e);
    HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
}

/// Standings document as a download, or 404 when the scope has no matches.
fn download(state: &MatchStore, scope: Scope) -> HttpResponse {
    let standings = match standings(state, scope) {
        Ok(s) => s,
        Err(e) => return storage_error(e),
    };
    match report::render_document(&standings, Local::now().date_naive()) {
        Ok(doc) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", report::document_filename(scope)),
            ))
            .body(doc),
        Err(ScoreError::NoData(_)) => HttpResponse::NotFound().body("No data available"),
        Err(e) => storage_error(e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "bgmi-points-table",
    })
}

/// No favicon; answer 204 so browsers stop asking.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Dashboard; match counts come from /api/summary.
#[get("/")]
async fn index() -> HttpResponse {
    html(INDEX_PAGE)
}

/// Entry form for the next match of a group. Unknown group goes back to the dashboard.
#[get("/add-match/{group}")]
async fn add_match_page(path: Path<GroupPath>) -> HttpResponse {
    match path.group.parse::<Group>() {
        Ok(_) => html(ADD_MATCH_PAGE),
        Err(_) => redirect_home(),
    }
}

/// Match counts per group.
#[get("/api/summary")]
async fn api_summary(state: AppState) -> HttpResponse {
    let mut groups = Vec::with_capacity(Group::ALL.len());
    for group in Group::ALL {
        let match_count = match state.match_count(group) {
            Ok(n) => n,
            Err(e) => return storage_error(e),
        };
        groups.push(GroupSummary {
            group,
            match_count,
            next_match_no: match_count as MatchNo + 1,
        });
    }
    let total_matches = groups.iter().map(|g| g.match_count).sum();
    HttpResponse::Ok().json(SummaryResponse { groups, total_matches })
}

/// Roster and next match number for the entry form.
#[get("/api/groups/{group}")]
async fn api_group(state: AppState, path: Path<GroupPath>) -> HttpResponse {
    let group = match path.group.parse::<Group>() {
        Ok(g) => g,
        Err(e) => return HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() })),
    };
    match state.next_match_no(group) {
        Ok(next_match_no) => HttpResponse::Ok().json(GroupInfo {
            group,
            next_match_no,
            roster: group.roster(),
        }),
        Err(e) => storage_error(e),
    }
}

/// Record one match. Invalid input is answered with `success: false`, not an HTTP error.
#[post("/api/save-match")]
async fn api_save_match(state: AppState, body: Json<MatchSubmission>) -> HttpResponse {
    match record_submission(&state, &body) {
        Ok(recorded) => HttpResponse::Ok().json(SaveMatchResponse::from(&recorded)),
        Err(e) if e.is_invalid_input() => {
            log::warn!("Rejected match submission: {}", e);
            HttpResponse::Ok().json(SaveMatchResponse::failure(e.to_string()))
        }
        Err(e) => {
            log::error!("Failed to save match: {}", e);
            HttpResponse::InternalServerError().json(SaveMatchResponse::failure(e.to_string()))
        }
    }
}

/// Group standings page.
#[get("/leaderboard/{group}")]
async fn leaderboard(path: Path<GroupPath>) -> HttpResponse {
    match path.group.parse::<Group>() {
        Ok(_) => html(LEADERBOARD_PAGE),
        Err(_) => redirect_home(),
    }
}

/// Combined standings page (all groups re-ranked together).
#[get("/combined-leaderboard")]
async fn combined_leaderboard() -> HttpResponse {
    html(LEADERBOARD_PAGE)
}

#[get("/download-leaderboard/{group}")]
async fn download_leaderboard(state: AppState, path: Path<GroupPath>) -> HttpResponse {
    match path.group.parse::<Group>() {
        Ok(group) => download(&state, Scope::Group(group)),
        Err(_) => redirect_home(),
    }
}

#[get("/download-combined-leaderboard")]
async fn download_combined_leaderboard(state: AppState) -> HttpResponse {
    download(&state, Scope::Combined)
}

/// Standings as JSON; `{group}` is A, B, C or `combined`.
#[get("/api/leaderboard/{group}")]
async fn api_leaderboard(state: AppState, path: Path<GroupPath>) -> HttpResponse {
    let scope = match path.group.parse::<Scope>() {
        Ok(s) => s,
        Err(e) => return HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() })),
    };
    match standings(&state, scope) {
        Ok(s) => HttpResponse::Ok().json(LeaderboardResponse::new(s)),
        Err(e) => storage_error(e),
    }
}

/// Malformed save-match bodies get the same `{success, message}` shape as other rejections.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid data: {}", err);
    log::warn!("{}", message);
    let response = HttpResponse::BadRequest().json(SaveMatchResponse::failure(message));
    InternalError::from_response(err, response).into()
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(api_health)
        .service(favicon)
        .service(index)
        .service(add_match_page)
        .service(api_summary)
        .service(api_group)
        .service(api_save_match)
        .service(leaderboard)
        .service(combined_leaderboard)
        .service(download_leaderboard)
        .service(download_combined_leaderboard)
        .service(api_leaderboard)
        .service(Files::new("/static", "static"));
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    let store = MatchStore::new(&config.data_dir);
    if let Err(e) = store.ensure_layout() {
        log::error!("Cannot create data folders under {}: {}", config.data_dir.display(), e);
        return Err(std::io::Error::other(e.to_string()));
    }
    log::info!("Match data in {}", config.data_dir.display());

    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(store);
    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes))
        .bind(bind)?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};

    macro_rules! app {
        ($store:expr) => {
            test::init_service(App::new().app_data(Data::new($store)).configure(routes)).await
        };
    }

    #[actix_web::test]
    async fn save_match_then_read_leaderboard() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(MatchStore::new(dir.path()));

        let req = test::TestRequest::post()
            .uri("/api/save-match")
            .set_json(json!({
                "group": "A",
                "match_data": [
                    { "team": "X", "rank": 1, "kills": 5 },
                    { "team": "Y", "rank": 2, "kills": 3 }
                ]
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "success": true, "message": "Match 1 saved successfully!", "match_no": 1 }));

        let req = test::TestRequest::get().uri("/api/leaderboard/A").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["group"], "A");
        assert_eq!(body["match_count"], 1);
        assert_eq!(body["rows"][0]["team"], "X");
        assert_eq!(body["rows"][0]["total"], 15);
        assert_eq!(body["rows"][1]["rank"], 2);
        assert_eq!(body["rows"][1]["total"], 9);
    }

    #[actix_web::test]
    async fn invalid_submissions_are_structured_failures() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(MatchStore::new(dir.path()));

        for payload in [
            json!({ "group": "D", "match_data": [{ "team": "X", "rank": 1, "kills": 0 }] }),
            json!({ "group": "A", "match_data": [] }),
            json!({ "group": "A" }),
            json!({ "match_data": [{ "team": "X", "rank": 1, "kills": 0 }] }),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/save-match")
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["success"], false);
            assert!(body.get("match_no").is_none());
        }

        let req = test::TestRequest::post()
            .uri("/api/save-match")
            .set_json(json!({ "group": "A", "match_data": [{ "team": "X", "rank": "first", "kills": 0 }] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);

        assert_eq!(MatchStore::new(dir.path()).match_count(Group::A).unwrap(), 0);
    }

    #[actix_web::test]
    async fn downloads_need_data() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(MatchStore::new(dir.path()));

        let req = test::TestRequest::get().uri("/download-leaderboard/B").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
        let req = test::TestRequest::get().uri("/download-combined-leaderboard").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::post()
            .uri("/api/save-match")
            .set_json(json!({ "group": "B", "match_data": [{ "team": "RushX", "rank": 1, "kills": 2 }] }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/download-leaderboard/B").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let disposition = resp.headers().get(header::CONTENT_DISPOSITION).unwrap().to_str().unwrap();
        assert!(disposition.contains("AAROHAN_BGMI_Group_B_Leaderboard.html"));
        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("RushX"));
    }

    #[actix_web::test]
    async fn unknown_group_pages_redirect_home() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(MatchStore::new(dir.path()));

        for uri in ["/add-match/Z", "/leaderboard/a", "/download-leaderboard/ABC"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::FOUND);
            assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
        }
    }

    #[actix_web::test]
    async fn empty_leaderboards_render() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(MatchStore::new(dir.path()));

        let req = test::TestRequest::get().uri("/api/leaderboard/combined").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["rows"], json!([]));

        assert_eq!(body["title"], "AAROHAN BGMI ELIMS - OVERALL STANDINGS");
        assert_eq!(body["columns"][2], "GROUP");

        let req = test::TestRequest::get().uri("/leaderboard/C").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn pages_are_templates_fed_by_the_api() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(MatchStore::new(dir.path()));

        for (uri, script) in [
            ("/", "/static/js/dashboard.js"),
            ("/add-match/B", "/static/js/match.js"),
            ("/leaderboard/A", "/static/js/leaderboard.js"),
            ("/combined-leaderboard", "/static/js/leaderboard.js"),
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let body = test::call_and_read_body(&app, req).await;
            let page = std::str::from_utf8(&body).unwrap();
            assert!(page.contains(script), "{uri} should load {script}");
        }

        let req = test::TestRequest::post()
            .uri("/api/save-match")
            .set_json(json!({ "group": "C", "match_data": [{ "team": "<b>Divas</b>", "rank": 1, "kills": 0 }] }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/api/summary").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total_matches"], 1);
        assert_eq!(body["groups"][2], json!({ "group": "C", "match_count": 1, "next_match_no": 2 }));

        let req = test::TestRequest::get().uri("/api/groups/C").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["next_match_no"], 2);
        assert_eq!(body["roster"].as_array().unwrap().len(), 15);

        let req = test::TestRequest::get().uri("/api/groups/D").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        // Names travel as JSON data; the page inserts them as text.
        let req = test::TestRequest::get().uri("/api/leaderboard/C").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["rows"][0]["team"], "<b>Divas</b>");
        assert_eq!(body["title"], "AAROHAN BGMI ELIMS - GROUP C");
    }

    #[actix_web::test]
    async fn rank_takes_any_integer_but_kills_must_be_a_count() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(MatchStore::new(dir.path()));

        let req = test::TestRequest::post()
            .uri("/api/save-match")
            .set_json(json!({ "group": "A", "match_data": [
                { "team": "X", "rank": -1, "kills": 2 },
                { "team": "Y", "rank": 40, "kills": 1 }
            ] }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);

        let req = test::TestRequest::get().uri("/api/leaderboard/A").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["rows"][0]["team"], "X");
        assert_eq!(body["rows"][0]["points"], 0);
        assert_eq!(body["rows"][0]["total"], 2);

        let req = test::TestRequest::post()
            .uri("/api/save-match")
            .set_json(json!({ "group": "A", "match_data": [{ "team": "X", "rank": 1, "kills": -3 }] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(MatchStore::new(dir.path()).match_count(Group::A).unwrap(), 1);
    }
}
