//! Project form submission.
//!
//! One submission is one request. While it is in flight the loading overlay
//! is up and its status line rotates; both are torn down when the
//! `LoadingIndicator` drops, whichever way the request ends.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::app::AppState;
use crate::domain::estimate::Estimate;
use crate::domain::request::EstimateForm;
use crate::error::{ClientError, ClientResult};
use crate::render::{self, Dashboard};
use crate::ui::ids;
use crate::ui::page::{Page, SharedPage};
use crate::ui::view;

pub const LOADING_MESSAGES: [&str; 4] = [
    "Analyzing project dimensions...",
    "Checking regional rates...",
    "Optimizing workforce...",
    "Finalizing blueprint...",
];

pub const LOADING_ROTATION: Duration = Duration::from_millis(1200);

pub const SUBMIT_FAILED_MESSAGE: &str = "Error generating plan. Please check console.";

/// Tab shown once results are in.
pub const RESULTS_TAB: &str = "overview";

/// Overlay plus rotating status text, alive for as long as the value is.
pub struct LoadingIndicator {
    page: SharedPage,
    ticker: JoinHandle<()>,
}

impl LoadingIndicator {
    pub fn start(page: SharedPage) -> ClientResult<Self> {
        page.lock().show(ids::LOADING_OVERLAY)?;
        let ticker = tokio::spawn(rotate_loading_text(page.clone()));
        Ok(Self { page, ticker })
    }
}

impl Drop for LoadingIndicator {
    fn drop(&mut self) {
        self.ticker.abort();
        if let Err(e) = self.page.lock().hide(ids::LOADING_OVERLAY) {
            warn!(error = %e, "Failed to hide loading overlay");
        }
    }
}

async fn rotate_loading_text(page: SharedPage) {
    let mut ticks = interval_at(Instant::now() + LOADING_ROTATION, LOADING_ROTATION);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    for message in LOADING_MESSAGES.iter().cycle() {
        ticks.tick().await;
        if let Err(e) = page.lock().set_text(ids::LOADING_TEXT, *message) {
            debug!(error = %e, "Loading text element missing");
        }
    }
}

/// Read the seven project fields off the form.
pub fn gather_form(page: &Page) -> ClientResult<EstimateForm> {
    Ok(EstimateForm {
        area: page.value(ids::AREA)?.to_string(),
        floors: page.value(ids::FLOORS)?.to_string(),
        project_type: page.value(ids::PROJECT_TYPE)?.to_string(),
        budget: page.value(ids::BUDGET_PREF)?.to_string(),
        timeline: page.value(ids::TIME_PREF)?.to_string(),
        country: page.value(ids::COUNTRY)?.to_string(),
        currency: page.value(ids::CURRENCY)?.to_string(),
    })
}

/// Submit the project form and render the estimate.
///
/// Every failure is terminal for this submission: the user gets a single
/// alert, the details go to the log. Concurrent submissions are not
/// coordinated.
pub async fn submit(state: &AppState) -> ClientResult<Dashboard> {
    let form = gather_form(&state.page.lock())?;
    let request = match form.validate() {
        Ok(request) => request,
        Err(err) => {
            state.host.alert(&err.public_message());
            return Err(err);
        }
    };

    let _loading = LoadingIndicator::start(state.page.clone())?;

    let outcome = async {
        let raw = state.estimate_client.calculate(&request).await?;
        let estimate = Estimate::from_raw(raw);

        let mut page = state.page.lock();
        let dashboard = render::render(&mut page, &estimate)?;
        view::open_tab(&mut page, RESULTS_TAB)?;
        Ok::<_, ClientError>(dashboard)
    }
    .await;

    match &outcome {
        Ok(_) => info!(area = request.area, floors = request.floors, "Estimate rendered"),
        Err(e) => {
            error!(error = %e, code = e.error_code(), "Estimate submission failed");
            state.host.alert(SUBMIT_FAILED_MESSAGE);
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared() -> SharedPage {
        Page::buildwise().into_shared()
    }

    fn loading_text(page: &SharedPage) -> String {
        page.lock().text(ids::LOADING_TEXT).unwrap().to_string()
    }

    #[tokio::test(start_paused = true)]
    async fn loading_text_rotates_and_wraps() {
        let page = shared();
        let initial = loading_text(&page);
        let _indicator = LoadingIndicator::start(page.clone()).unwrap();
        assert!(!page.lock().is_hidden(ids::LOADING_OVERLAY).unwrap());

        // Nothing changes before the first period elapses
        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(loading_text(&page), initial);

        let mut seen = Vec::new();
        for _ in 0..5 {
            tokio::time::sleep(LOADING_ROTATION).await;
            seen.push(loading_text(&page));
        }
        assert_eq!(
            seen,
            vec![
                LOADING_MESSAGES[0],
                LOADING_MESSAGES[1],
                LOADING_MESSAGES[2],
                LOADING_MESSAGES[3],
                LOADING_MESSAGES[0],
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_indicator_hides_overlay_and_stops_rotation() {
        let page = shared();
        let indicator = LoadingIndicator::start(page.clone()).unwrap();
        tokio::time::sleep(Duration::from_millis(1300)).await;
        assert_eq!(loading_text(&page), LOADING_MESSAGES[0]);

        drop(indicator);
        assert!(page.lock().is_hidden(ids::LOADING_OVERLAY).unwrap());

        tokio::time::sleep(LOADING_ROTATION * 5).await;
        assert_eq!(loading_text(&page), LOADING_MESSAGES[0]);
    }

    #[test]
    fn gather_form_reads_all_fields() {
        let mut page = Page::buildwise();
        page.set_value(ids::AREA, "2400").unwrap();
        page.set_value(ids::CURRENCY, "GBP").unwrap();

        let form = gather_form(&page).unwrap();
        assert_eq!(form.area, "2400");
        assert_eq!(form.floors, "1");
        assert_eq!(form.project_type, "Residential");
        assert_eq!(form.budget, "Standard");
        assert_eq!(form.timeline, "Standard");
        assert_eq!(form.country, "India");
        assert_eq!(form.currency, "GBP");
    }
}
