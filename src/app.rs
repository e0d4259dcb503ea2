use actix_web::{middleware, web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::model::{LaunchDataset, PayloadRange, SiteFilter};
use crate::error::AppError;
use crate::state::{ChartView, InputEvent, Inputs};
use crate::ui::layout::PageLayout;
use crate::ui::INDEX_HTML;

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// Read-only snapshot shared by every request handler.
pub struct AppState {
    pub dataset: LaunchDataset,
    pub colors: ColorMap,
    pub layout: PageLayout,
}

impl AppState {
    pub fn new(dataset: LaunchDataset) -> Self {
        let colors = ColorMap::new(dataset.booster_categories());
        let layout = PageLayout::new(&dataset);
        Self {
            dataset,
            colors,
            layout,
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Current control values, sent by the page on every input event.
#[derive(Debug, Default, Deserialize)]
pub struct ChartRequest {
    /// Expected a site name or `ALL`; anything else means no site restriction.
    #[serde(default)]
    pub site: Option<JsonValue>,
    /// Expected `[min, max]`; anything else means no payload restriction.
    #[serde(default)]
    pub payload_range: Option<JsonValue>,
}

impl ChartRequest {
    /// The control changes this request carries, applied on top of the initial inputs.
    fn events(&self) -> Vec<InputEvent> {
        let mut events = Vec::with_capacity(2);
        if let Some(site) = &self.site {
            events.push(InputEvent::SiteChanged(parse_site(site)));
        }
        if let Some(range) = &self.payload_range {
            events.push(InputEvent::RangeChanged(parse_range(range)));
        }
        events
    }
}

fn parse_site(value: &JsonValue) -> SiteFilter {
    match value {
        JsonValue::String(site) => SiteFilter::parse(Some(site.as_str())),
        JsonValue::Null => SiteFilter::All,
        other => {
            log::warn!("ignoring invalid site {other}; showing all sites");
            SiteFilter::All
        }
    }
}

fn parse_range(value: &JsonValue) -> Option<PayloadRange> {
    let bounds: Option<Vec<f64>> = value
        .as_array()
        .and_then(|items| items.iter().map(JsonValue::as_f64).collect());

    let range = bounds.as_deref().and_then(PayloadRange::from_slice);
    if range.is_none() {
        log::warn!("ignoring invalid payload range {value}; showing all payloads");
    }
    range
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub records: usize,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

async fn layout(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&state.layout)
}

/// Recompute both charts for the posted control values.
async fn charts(state: web::Data<AppState>, req: web::Json<ChartRequest>) -> impl Responder {
    let mut inputs = Inputs::initial(&state.dataset);
    for event in req.events() {
        inputs.apply(event);
    }
    HttpResponse::Ok().json(ChartView::compute(&state.dataset, &state.colors, &inputs))
}

async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records: state.dataset.len(),
    })
}

/// Route table, shared by the server and the tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .route("/", web::get().to(index))
    .route("/health", web::get().to(health_check))
    .route("/api/layout", web::get().to(layout))
    .route("/api/charts", web::post().to(charts));
}

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

pub async fn serve(config: DashboardConfig, dataset: LaunchDataset) -> std::io::Result<()> {
    let addr = config.bind_addr();
    let state = web::Data::new(AppState::new(dataset));

    log::info!("Starting dashboard at http://{addr}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(routes)
    })
    .bind(&addr)?
    .run()
    .await
}
