//! Report export.
//!
//! The report is built from the dashboard's rendered text, not from the
//! estimate, so the PDF always matches what is on screen. The template is
//! made visible only for the duration of the conversion.

pub mod html;
pub mod pdf;

use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use tracing::{error, info};

use crate::app::AppState;
use crate::error::ClientResult;
use crate::ui::ids;
use crate::ui::page::{Display, Fragment, Page};

pub use pdf::{CommandPdfRenderer, PdfOptions, PdfRenderer};

pub const GENERATING_LABEL: &str = "Generating...";
pub const PDF_FAILED_MESSAGE: &str = "Error generating PDF. Check console.";

/// Snapshot of the populated report template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDocument {
    pub date: String,
    pub project_type: String,
    pub area: String,
    pub summary: String,
    pub total: String,
    pub material_cost: String,
    pub labor_cost: String,
    pub duration: String,
    pub workers: String,
    pub cement: String,
    pub steel: String,
    pub sand: String,
    pub bricks: String,
    pub material_rows: Vec<Fragment>,
    pub labor_rows: Vec<Fragment>,
    pub timeline: Vec<Fragment>,
}

impl ReportDocument {
    /// Read the report template as currently populated.
    pub fn capture(page: &Page) -> ClientResult<Self> {
        let text = |id: &str| page.text(id).map(str::to_string);

        Ok(Self {
            date: text(ids::REP_DATE)?,
            project_type: text(ids::REP_TYPE)?,
            area: text(ids::REP_AREA)?,
            summary: text(ids::REP_SUMMARY)?,
            total: text(ids::REP_TOTAL)?,
            material_cost: text(ids::REP_MAT_COST)?,
            labor_cost: text(ids::REP_LAB_COST)?,
            duration: text(ids::REP_DURATION)?,
            workers: text(ids::REP_WORKERS)?,
            cement: text(ids::REP_CEMENT)?,
            steel: text(ids::REP_STEEL)?,
            sand: text(ids::REP_SAND)?,
            bricks: text(ids::REP_BRICKS)?,
            material_rows: page.children(ids::REP_MAT_TABLE_BODY)?.to_vec(),
            labor_rows: page.children(ids::REP_LAB_TABLE_BODY)?.to_vec(),
            timeline: page.children(ids::REP_TIMELINE_LIST)?.to_vec(),
        })
    }
}

/// Copy the dashboard's rendered text into the report template.
pub fn populate_template(page: &mut Page, today: NaiveDate) -> ClientResult<()> {
    page.set_text(ids::REP_DATE, today.format("%-m/%-d/%Y").to_string())?;

    let project_type = page.value(ids::PROJECT_TYPE)?.to_string();
    page.set_text(ids::REP_TYPE, project_type)?;
    let area = format!("{} SQ FT", page.value(ids::AREA)?);
    page.set_text(ids::REP_AREA, area)?;

    for (target, source) in [
        (ids::REP_SUMMARY, ids::SUMMARY_TEXT),
        (ids::REP_TOTAL, ids::TOTAL_COST),
        (ids::REP_MAT_COST, ids::COST_MATERIAL),
        (ids::REP_LAB_COST, ids::COST_LABOR),
        (ids::REP_DURATION, ids::TOTAL_WEEKS),
        (ids::REP_WORKERS, ids::WORKER_TEXT),
        (ids::REP_CEMENT, ids::MAT_CEMENT),
        (ids::REP_STEEL, ids::MAT_STEEL),
        (ids::REP_SAND, ids::MAT_SAND),
        (ids::REP_BRICKS, ids::MAT_BRICKS),
    ] {
        let text = page.text(source)?.to_string();
        page.set_text(target, text)?;
    }

    for (target, source) in [
        (ids::REP_MAT_TABLE_BODY, ids::MATERIAL_TABLE_BODY),
        (ids::REP_LAB_TABLE_BODY, ids::LABOR_TABLE_BODY),
        (ids::REP_TIMELINE_LIST, ids::TIMELINE_LIST),
    ] {
        let children = page.children(source)?.to_vec();
        page.set_children(target, children)?;
    }

    Ok(())
}

fn set_template_display(page: &mut Page, display: Display) -> ClientResult<()> {
    page.get_mut(ids::REPORT_TEMPLATE)?.display = display;
    Ok(())
}

/// Handler for the download button.
///
/// The template is re-hidden and the button label restored whatever the
/// outcome; a failure is also logged and alerted.
pub async fn export(state: &AppState) -> ClientResult<PathBuf> {
    let original_label = {
        let mut page = state.page.lock();
        let label = page.text(ids::DOWNLOAD_BUTTON)?.to_string();
        page.set_text(ids::DOWNLOAD_BUTTON, GENERATING_LABEL)?;
        label
    };

    let result = async {
        let document = {
            let mut page = state.page.lock();
            populate_template(&mut page, Local::now().date_naive())?;
            set_template_display(&mut page, Display::Block)?;
            ReportDocument::capture(&page)?
        };

        state.pdf.render(&document, &PdfOptions::default()).await
    }
    .await;

    match &result {
        Ok(path) => info!(path = %path.display(), "Report exported"),
        Err(e) => {
            error!(error = %e, "PDF generation failed");
            state.host.alert(PDF_FAILED_MESSAGE);
        }
    }

    let mut page = state.page.lock();
    // Restore the label even if the template has gone missing
    let hidden = set_template_display(&mut page, Display::None);
    let restored = page.set_text(ids::DOWNLOAD_BUTTON, original_label);
    hidden?;
    restored?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_page() -> Page {
        let mut page = Page::buildwise();
        page.set_value(ids::AREA, "1500").unwrap();
        page.set_value(ids::PROJECT_TYPE, "Commercial").unwrap();
        page.set_text(ids::SUMMARY_TEXT, "Two storey office").unwrap();
        page.set_text(ids::TOTAL_COST, "₹5,400,000").unwrap();
        page.set_text(ids::TOTAL_WEEKS, "12 WEEKS").unwrap();
        page.set_text(ids::WORKER_TEXT, "25").unwrap();
        page.set_text(ids::MAT_CEMENT, "600").unwrap();
        page.set_children(
            ids::MATERIAL_TABLE_BODY,
            vec![Fragment::Row(vec!["Cement".into(), "₹513,000".into()])],
        )
        .unwrap();
        page.set_children(
            ids::TIMELINE_LIST,
            vec![Fragment::Phase {
                weeks: "WEEK 1".into(),
                name: "Site prep".into(),
                description: "Clearing".into(),
            }],
        )
        .unwrap();
        page
    }

    #[test]
    fn template_copies_rendered_dashboard() {
        let mut page = rendered_page();
        let today = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();

        populate_template(&mut page, today).unwrap();

        assert_eq!(page.text(ids::REP_DATE).unwrap(), "3/4/2026");
        assert_eq!(page.text(ids::REP_TYPE).unwrap(), "Commercial");
        assert_eq!(page.text(ids::REP_AREA).unwrap(), "1500 SQ FT");
        assert_eq!(page.text(ids::REP_TOTAL).unwrap(), "₹5,400,000");
        assert_eq!(page.text(ids::REP_DURATION).unwrap(), "12 WEEKS");
        assert_eq!(page.text(ids::REP_WORKERS).unwrap(), "25");
        assert_eq!(page.text(ids::REP_CEMENT).unwrap(), "600");
        assert_eq!(
            page.children(ids::REP_MAT_TABLE_BODY).unwrap(),
            page.children(ids::MATERIAL_TABLE_BODY).unwrap()
        );
        assert_eq!(page.children(ids::REP_TIMELINE_LIST).unwrap().len(), 1);
    }

    #[test]
    fn capture_reads_populated_template() {
        let mut page = rendered_page();
        populate_template(&mut page, NaiveDate::from_ymd_opt(2026, 12, 25).unwrap()).unwrap();

        let doc = ReportDocument::capture(&page).unwrap();
        assert_eq!(doc.date, "12/25/2026");
        assert_eq!(doc.summary, "Two storey office");
        assert_eq!(doc.material_rows.len(), 1);
        assert!(doc.labor_rows.is_empty());
    }
}
