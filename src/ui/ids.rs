//! Element IDs and class names shared with the page markup.
//!
//! Renaming any of these breaks the binding to the served HTML.

// Views and wizard
pub const LANDING_VIEW: &str = "landing-view";
pub const APP_VIEW: &str = "app-view";
pub const STEP_1: &str = "step-1";
pub const STEP_2: &str = "step-2";

// Project form
pub const PLAN_FORM: &str = "plan-form";
pub const AREA: &str = "area";
pub const FLOORS: &str = "floors";
pub const PROJECT_TYPE: &str = "type";
pub const BUDGET_PREF: &str = "budget-pref";
pub const TIME_PREF: &str = "time-pref";
pub const COUNTRY: &str = "country";
pub const CURRENCY: &str = "currency";

// Loading overlay
pub const LOADING_OVERLAY: &str = "loading-overlay";
pub const LOADING_TEXT: &str = "loading-text";

// Dashboard
pub const SUMMARY_TEXT: &str = "summary-text";
pub const TOTAL_COST: &str = "total-cost";
pub const COST_MATERIAL: &str = "cost-material";
pub const COST_LABOR: &str = "cost-labor";
pub const COST_OTHER: &str = "cost-other";
pub const MATERIAL_TABLE_BODY: &str = "material-table-body";
pub const MAT_TABLE_TOTAL: &str = "mat-table-total";
pub const LABOR_TABLE_BODY: &str = "labor-table-body";
pub const LAB_TOTAL_WORKERS: &str = "lab-total-workers";
pub const LAB_TOTAL_DAYS: &str = "lab-total-days";
pub const LAB_TABLE_TOTAL: &str = "lab-table-total";
pub const MAT_CEMENT: &str = "mat-cement";
pub const MAT_STEEL: &str = "mat-steel";
pub const MAT_SAND: &str = "mat-sand";
pub const MAT_BRICKS: &str = "mat-bricks";
pub const WORKER_TEXT: &str = "worker-text";
pub const TOTAL_WEEKS: &str = "total-weeks";
pub const TIMELINE_LIST: &str = "timeline-list";
pub const RISKS_LIST: &str = "risks-list";
pub const OPTS_LIST: &str = "opts-list";

// Report template
pub const DOWNLOAD_BUTTON: &str = "btn-download";
pub const REPORT_TEMPLATE: &str = "report-template";
pub const REP_DATE: &str = "rep-date";
pub const REP_TYPE: &str = "rep-type";
pub const REP_AREA: &str = "rep-area";
pub const REP_SUMMARY: &str = "rep-summary";
pub const REP_TOTAL: &str = "rep-total";
pub const REP_MAT_COST: &str = "rep-mat-cost";
pub const REP_LAB_COST: &str = "rep-lab-cost";
pub const REP_DURATION: &str = "rep-duration";
pub const REP_WORKERS: &str = "rep-workers";
pub const REP_CEMENT: &str = "rep-cement";
pub const REP_STEEL: &str = "rep-steel";
pub const REP_SAND: &str = "rep-sand";
pub const REP_BRICKS: &str = "rep-bricks";
pub const REP_MAT_TABLE_BODY: &str = "rep-mat-table-body";
pub const REP_LAB_TABLE_BODY: &str = "rep-lab-table-body";
pub const REP_TIMELINE_LIST: &str = "rep-timeline-list";

// Auth modal
pub const AUTH_MODAL: &str = "auth-modal";
pub const FORM_LOGIN: &str = "form-login";
pub const FORM_SIGNUP: &str = "form-signup";
pub const TAB_LOGIN: &str = "tab-login";
pub const TAB_SIGNUP: &str = "tab-signup";
pub const LOGIN_EMAIL: &str = "login-email";
pub const LOGIN_PASSWORD: &str = "login-password";
pub const LOGIN_SUBMIT: &str = "login-submit";
pub const LOGIN_ERROR: &str = "login-error";
pub const SIGNUP_SUBMIT: &str = "signup-submit";

// Class names
pub const HIDDEN: &str = "hidden";
pub const ACTIVE: &str = "active";
pub const TAB_CONTENT: &str = "tab-content";
pub const TAB_BUTTON: &str = "tab-btn";

/// Result tabs as `(name, button label)`. The pane ID is `tab-{name}`.
pub const RESULT_TABS: [(&str, &str); 5] = [
    ("overview", "Overview"),
    ("cost", "Cost Breakdown"),
    ("materials", "Materials"),
    ("timeline", "Timeline"),
    ("risks", "Risks & Optimizations"),
];

pub fn tab_pane(name: &str) -> String {
    format!("tab-{}", name)
}
