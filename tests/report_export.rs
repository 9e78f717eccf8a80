//! Report export through the download button.

mod common;

use std::sync::Arc;

use buildwise_client::report::{self, GENERATING_LABEL, PDF_FAILED_MESSAGE};
use buildwise_client::ui::ids;
use buildwise_client::ui::page::{Display, Element, Fragment, Page};
use buildwise_client::{AppState, ClientError};

use common::FakePdf;

const UNUSED: &str = "http://127.0.0.1:9";

fn render_dashboard(state: &AppState) {
    let mut page = state.page.lock();
    page.set_value(ids::AREA, "1500").unwrap();
    page.set_text(ids::SUMMARY_TEXT, "Two-storey residence").unwrap();
    page.set_text(ids::TOTAL_COST, "₹5,400,000").unwrap();
    page.set_text(ids::COST_LABOR, "₹1,800,000").unwrap();
    page.set_text(ids::TOTAL_WEEKS, "16 WEEKS").unwrap();
    page.set_children(
        ids::LABOR_TABLE_BODY,
        vec![Fragment::Row(vec![
            "Skilled".into(),
            "10 workers".into(),
            "90 days".into(),
            "₹1,200".into(),
            "₹1,080,000".into(),
        ])],
    )
    .unwrap();
}

#[tokio::test]
async fn test_export_hands_rendered_text_to_converter() {
    let pdf = Arc::new(FakePdf::default());
    let (state, host) = common::state_with(UNUSED, UNUSED, pdf.clone());
    render_dashboard(&state);

    let path = report::export(&state).await.unwrap();
    assert_eq!(path.to_str(), Some("BuildWise_Plan.pdf"));
    assert!(host.alerts().is_empty());

    // Template is visible only while converting
    assert_eq!(*pdf.display_seen.lock(), Some(Display::Block));

    let rendered = pdf.rendered.lock();
    let doc = &rendered[0];
    assert_eq!(doc.project_type, "Residential");
    assert_eq!(doc.area, "1500 SQ FT");
    assert_eq!(doc.summary, "Two-storey residence");
    assert_eq!(doc.total, "₹5,400,000");
    assert_eq!(doc.labor_cost, "₹1,800,000");
    assert_eq!(doc.duration, "16 WEEKS");
    assert_eq!(doc.labor_rows.len(), 1);
    assert!(!doc.date.is_empty());

    let page = state.page.lock();
    assert_eq!(page.get(ids::REPORT_TEMPLATE).unwrap().display, Display::None);
    assert_eq!(page.text(ids::DOWNLOAD_BUTTON).unwrap(), "Download Report");
}

#[tokio::test]
async fn test_export_failure_alerts_and_restores() {
    let pdf = Arc::new(FakePdf::failing());
    let (state, host) = common::state_with(UNUSED, UNUSED, pdf.clone());
    render_dashboard(&state);
    state
        .page
        .lock()
        .set_text(ids::DOWNLOAD_BUTTON, "Save PDF")
        .unwrap();

    let err = report::export(&state).await.unwrap_err();
    assert!(matches!(err, ClientError::Pdf(_)));
    assert_eq!(host.alerts(), vec![PDF_FAILED_MESSAGE.to_string()]);

    let page = state.page.lock();
    assert_eq!(page.get(ids::REPORT_TEMPLATE).unwrap().display, Display::None);
    assert_eq!(page.text(ids::DOWNLOAD_BUTTON).unwrap(), "Save PDF");
    assert_ne!(page.text(ids::DOWNLOAD_BUTTON).unwrap(), GENERATING_LABEL);
}

#[tokio::test]
async fn test_label_restored_when_template_is_missing() {
    let mut page = Page::new();
    page.insert(Element::new(ids::DOWNLOAD_BUTTON).with_text("Download Report"));
    let pdf = Arc::new(FakePdf::default());
    let (state, host) = common::state_on_page(page, UNUSED, UNUSED, pdf.clone());

    let err = report::export(&state).await.unwrap_err();
    assert!(matches!(err, ClientError::MissingElement(_)));
    assert!(pdf.rendered.lock().is_empty());
    assert_eq!(host.alerts(), vec![PDF_FAILED_MESSAGE.to_string()]);
    assert_eq!(
        state.page.lock().text(ids::DOWNLOAD_BUTTON).unwrap(),
        "Download Report"
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_command_renderer_runs_converter() {
    use buildwise_client::report::{CommandPdfRenderer, PdfOptions, PdfRenderer, ReportDocument};
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();

    // Copies the HTML source to the target so the output can be inspected
    let copying = dir.path().join("convert.sh");
    std::fs::write(
        &copying,
        "#!/bin/sh\nn=$#\neval \"src=\\${$((n - 1))}\"\neval \"out=\\${$n}\"\ncp \"$src\" \"$out\"\n",
    )
    .unwrap();
    let crashing = dir.path().join("crash.sh");
    std::fs::write(&crashing, "#!/bin/sh\necho 'no display' >&2\nexit 3\n").unwrap();
    for script in [&copying, &crashing] {
        std::fs::set_permissions(script, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    let document = ReportDocument {
        summary: "Duplex & garage".into(),
        total: "$250,000".into(),
        ..ReportDocument::default()
    };
    let out_dir = dir.path().join("reports");

    let renderer = CommandPdfRenderer::new(copying.to_string_lossy(), &out_dir);
    let path = renderer
        .render(&document, &PdfOptions::default())
        .await
        .unwrap();
    assert_eq!(path, out_dir.join("BuildWise_Plan.pdf"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("Duplex &amp; garage"));
    assert!(written.contains("$250,000"));

    let renderer = CommandPdfRenderer::new(crashing.to_string_lossy(), &out_dir);
    match renderer.render(&document, &PdfOptions::default()).await {
        Err(ClientError::Pdf(message)) => assert!(message.contains("no display")),
        other => panic!("expected converter failure, got {:?}", other),
    }
}
