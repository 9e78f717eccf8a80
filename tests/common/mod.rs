//! Shared fixtures for integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;

use buildwise_client::config::{Environment, Settings};
pub use buildwise_client::host::testing::{HostEvent, RecordingHost};
use buildwise_client::report::{PdfOptions, PdfRenderer, ReportDocument};
use buildwise_client::ui::page::{Display, Page, SharedPage};
use buildwise_client::ui::ids;
use buildwise_client::{AppState, ClientError, ClientResult};

/// Renderer that records what it was given instead of converting.
#[derive(Default)]
pub struct FakePdf {
    pub fail: bool,
    pub rendered: Mutex<Vec<ReportDocument>>,
    /// Template display observed at render time.
    pub display_seen: Mutex<Option<Display>>,
    pub page: Mutex<Option<SharedPage>>,
}

impl FakePdf {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl PdfRenderer for FakePdf {
    async fn render(&self, document: &ReportDocument, options: &PdfOptions) -> ClientResult<PathBuf> {
        let page = self.page.lock().clone();
        if let Some(page) = page {
            let display = page.lock().get(ids::REPORT_TEMPLATE)?.display;
            *self.display_seen.lock() = Some(display);
        }
        self.rendered.lock().push(document.clone());

        if self.fail {
            return Err(ClientError::Pdf("converter crashed".to_string()));
        }
        Ok(PathBuf::from(&options.filename))
    }
}

pub fn settings(estimate_api_url: &str, auth_base_url: &str) -> Settings {
    Settings {
        env: Environment::Dev,
        estimate_api_url: estimate_api_url.to_string(),
        auth_base_url: auth_base_url.to_string(),
        http_timeout_seconds: 5,
        report_output_dir: PathBuf::from("."),
        pdf_converter_bin: "wkhtmltopdf".to_string(),
    }
}

pub fn state_with(
    estimate_api_url: &str,
    auth_base_url: &str,
    pdf: Arc<FakePdf>,
) -> (Arc<AppState>, Arc<RecordingHost>) {
    state_on_page(Page::buildwise(), estimate_api_url, auth_base_url, pdf)
}

pub fn state_on_page(
    page: Page,
    estimate_api_url: &str,
    auth_base_url: &str,
    pdf: Arc<FakePdf>,
) -> (Arc<AppState>, Arc<RecordingHost>) {
    let host = Arc::new(RecordingHost::default());
    let state = AppState::with_page(
        page,
        settings(estimate_api_url, auth_base_url),
        host.clone(),
        pdf.clone(),
    )
    .expect("state");
    *pdf.page.lock() = Some(state.page.clone());
    (state, host)
}

pub fn state(estimate_api_url: &str, auth_base_url: &str) -> (Arc<AppState>, Arc<RecordingHost>) {
    state_with(estimate_api_url, auth_base_url, Arc::new(FakePdf::default()))
}

pub const CURRENT_SCHEMA: &str = r#"{
    "summary": "Two-storey residence on a standard budget.",
    "currency": "INR",
    "total_estimated_cost": 5400000,
    "summary_breakdown": {"material": 3000000, "labor": 1800000, "other": 600000},
    "material_cost_breakdown": {"cement": 513000, "steel_bars": 900000},
    "labor_breakdown": {
        "skilled": {"workforce": 10, "duration": 90, "daily_wage": 1200, "total_cost": 1080000},
        "unskilled": {"workforce": 15, "duration": 80, "daily_wage": 600, "total_cost": 720000},
        "total_workforce": 25,
        "total_days": 90,
        "total_labor_cost": 1800000
    },
    "materials": {"cement": 1140, "steel": 4500, "sand": 60, "bricks": 24000},
    "workers_per_day": 25,
    "timeline_weeks": 16,
    "schedule_phases": [
        {"phase": "Foundation", "description": "Excavation and footings", "start_week": 1, "end_week": 1},
        {"phase": "Structure", "description": "Columns and slabs", "start_week": 2, "end_week": 8}
    ],
    "risks": ["Monsoon delays"],
    "optimizations": ["Bulk cement purchase"]
}"#;

pub const LEGACY_SCHEMA: &str = r#"{
    "summary": "Two-storey residence on a standard budget.",
    "currency": "INR",
    "cost_breakdown": {"material": 3000000, "labor": 1800000, "other": 600000, "total": 5400000},
    "timeline_weeks": 16,
    "schedule_phases": [
        {"phase": "Foundation", "description": "Excavation and footings", "weeks": "1-2"}
    ]
}"#;
