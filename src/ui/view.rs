//! View switching: landing/app, wizard steps and result tabs.

use crate::domain::request::validate_area;
use crate::error::{ClientError, ClientResult};
use crate::host::Host;
use crate::ui::ids;
use crate::ui::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    App,
}

pub fn switch_view(page: &mut Page, view: View) -> ClientResult<()> {
    let (shown, hidden) = match view {
        View::App => (ids::APP_VIEW, ids::LANDING_VIEW),
        View::Landing => (ids::LANDING_VIEW, ids::APP_VIEW),
    };
    page.hide(hidden)?;
    page.show(shown)
}

/// Advance the wizard to step 2 once the area passes validation.
///
/// On failure the user is alerted and nothing on the page changes.
pub fn next_step(page: &mut Page, host: &dyn Host) -> ClientResult<()> {
    if let Err(err) = validate_area(page.value(ids::AREA)?) {
        host.alert(&err.public_message());
        return Err(err);
    }

    page.hide(ids::STEP_1)?;
    page.show(ids::STEP_2)
}

pub fn prev_step(page: &mut Page) -> ClientResult<()> {
    page.hide(ids::STEP_2)?;
    page.show(ids::STEP_1)
}

/// Activate one result tab and the first button whose label contains its name.
pub fn open_tab(page: &mut Page, name: &str) -> ClientResult<()> {
    let pane_id = ids::tab_pane(name);
    match page.get(&pane_id) {
        Ok(pane) if pane.has_class(ids::TAB_CONTENT) => {}
        _ => return Err(ClientError::UnknownTab(name.to_string())),
    }

    for pane in page.by_class_mut(ids::TAB_CONTENT) {
        pane.remove_class(ids::ACTIVE);
    }
    for button in page.by_class_mut(ids::TAB_BUTTON) {
        button.remove_class(ids::ACTIVE);
    }

    page.get_mut(&pane_id)?.add_class(ids::ACTIVE);

    let needle = name.to_lowercase();
    if let Some(button) = page
        .by_class_mut(ids::TAB_BUTTON)
        .find(|b| b.text.to_lowercase().contains(&needle))
    {
        button.add_class(ids::ACTIVE);
    }

    Ok(())
}
