//! Login/signup modal.

use std::time::Duration;
use tracing::{info, warn};

use crate::app::AppState;
use crate::domain::auth::{AuthMode, LoginForm, LoginOutcome};
use crate::error::ClientResult;
use crate::ui::ids;
use crate::ui::page::Page;

pub const LOGIN_LABEL: &str = "Access Dashboard →";
pub const LOGIN_PENDING_LABEL: &str = "Verifying...";
pub const SIGNUP_LABEL: &str = "Create Account →";
pub const SIGNUP_PENDING_LABEL: &str = "Creating Account...";
pub const SIGNUP_DONE_MESSAGE: &str = "Account created successfully! Please login.";

/// Signup is simulated; this is how long it pretends to work.
pub const SIGNUP_DELAY: Duration = Duration::from_secs(1);

pub fn open_modal(page: &mut Page, mode: AuthMode) -> ClientResult<()> {
    page.show(ids::AUTH_MODAL)?;
    switch_auth_tab(page, mode)
}

pub fn close_modal(page: &mut Page) -> ClientResult<()> {
    page.hide(ids::AUTH_MODAL)
}

/// Click inside the modal. Only a click on the backdrop itself closes it.
pub fn click(page: &mut Page, target_id: &str) -> ClientResult<bool> {
    if target_id == ids::AUTH_MODAL {
        close_modal(page)?;
        return Ok(true);
    }
    Ok(false)
}

pub fn switch_auth_tab(page: &mut Page, mode: AuthMode) -> ClientResult<()> {
    let (show_form, hide_form, active_tab, idle_tab) = match mode {
        AuthMode::Login => (ids::FORM_LOGIN, ids::FORM_SIGNUP, ids::TAB_LOGIN, ids::TAB_SIGNUP),
        AuthMode::Signup => (ids::FORM_SIGNUP, ids::FORM_LOGIN, ids::TAB_SIGNUP, ids::TAB_LOGIN),
    };

    page.show(show_form)?;
    page.hide(hide_form)?;
    page.get_mut(active_tab)?.add_class(ids::ACTIVE);
    page.get_mut(idle_tab)?.remove_class(ids::ACTIVE);
    Ok(())
}

pub fn gather_login(page: &Page) -> ClientResult<LoginForm> {
    Ok(LoginForm {
        email: page.value(ids::LOGIN_EMAIL)?.to_string(),
        password: page.value(ids::LOGIN_PASSWORD)?.to_string(),
    })
}

/// Post the login form and act on the server's answer.
///
/// Failures are shown inline under the form. The submit button is
/// re-enabled however the attempt ends.
pub async fn handle_login(state: &AppState) -> ClientResult<LoginOutcome> {
    let form = {
        let mut page = state.page.lock();
        let form = gather_login(&page)?;
        page.hide(ids::LOGIN_ERROR)?;
        let button = page.get_mut(ids::LOGIN_SUBMIT)?;
        button.disabled = true;
        button.text = LOGIN_PENDING_LABEL.to_string();
        form
    };

    let result = state.auth_client.login(&form).await;

    let mut page = state.page.lock();
    let shown = match &result {
        Ok(LoginOutcome::Reload) => {
            info!("Login accepted");
            state.host.reload();
            Ok(())
        }
        Ok(LoginOutcome::Redirect(url)) => {
            info!(url = %url, "Login redirected");
            state.host.navigate(url);
            Ok(())
        }
        Ok(LoginOutcome::Rejected(message)) => show_login_error(&mut page, message),
        Err(e) => {
            warn!(error = %e, "Login request failed");
            show_login_error(&mut page, &e.to_string())
        }
    };

    // Re-enable even if the error element was missing
    let enabled = page.get_mut(ids::LOGIN_SUBMIT).map(|b| b.disabled = false);
    shown?;
    enabled?;
    result
}

fn show_login_error(page: &mut Page, message: &str) -> ClientResult<()> {
    page.set_text(ids::LOGIN_ERROR, message)?;
    page.show(ids::LOGIN_ERROR)?;
    page.set_text(ids::LOGIN_SUBMIT, LOGIN_LABEL)
}

/// Placeholder signup: no account is created anywhere.
pub async fn handle_signup(state: &AppState) -> ClientResult<()> {
    {
        let mut page = state.page.lock();
        let button = page.get_mut(ids::SIGNUP_SUBMIT)?;
        button.text = SIGNUP_PENDING_LABEL.to_string();
        button.disabled = true;
    }

    tokio::time::sleep(SIGNUP_DELAY).await;

    state.host.alert(SIGNUP_DONE_MESSAGE);

    let mut page = state.page.lock();
    switch_auth_tab(&mut page, AuthMode::Login)?;
    let button = page.get_mut(ids::SIGNUP_SUBMIT)?;
    button.disabled = false;
    button.text = SIGNUP_LABEL.to_string();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_active(page: &Page, id: &str) -> bool {
        page.get(id).unwrap().has_class(ids::ACTIVE)
    }

    #[test]
    fn open_and_close_modal() {
        let mut page = Page::buildwise();
        open_modal(&mut page, AuthMode::Signup).unwrap();
        assert!(!page.is_hidden(ids::AUTH_MODAL).unwrap());
        assert!(!page.is_hidden(ids::FORM_SIGNUP).unwrap());
        assert!(page.is_hidden(ids::FORM_LOGIN).unwrap());

        close_modal(&mut page).unwrap();
        assert!(page.is_hidden(ids::AUTH_MODAL).unwrap());
    }

    #[test]
    fn only_backdrop_click_closes() {
        let mut page = Page::buildwise();
        open_modal(&mut page, AuthMode::Login).unwrap();

        assert!(!click(&mut page, ids::LOGIN_EMAIL).unwrap());
        assert!(!page.is_hidden(ids::AUTH_MODAL).unwrap());

        assert!(click(&mut page, ids::AUTH_MODAL).unwrap());
        assert!(page.is_hidden(ids::AUTH_MODAL).unwrap());
    }

    #[test]
    fn switching_tabs_shows_exactly_one_form() {
        let mut page = Page::buildwise();
        for mode in [AuthMode::Signup, AuthMode::Login, AuthMode::Login, AuthMode::Signup] {
            switch_auth_tab(&mut page, mode).unwrap();
            let login = mode == AuthMode::Login;
            assert_eq!(page.is_hidden(ids::FORM_LOGIN).unwrap(), !login);
            assert_eq!(page.is_hidden(ids::FORM_SIGNUP).unwrap(), login);
            assert_eq!(is_active(&page, ids::TAB_LOGIN), login);
            assert_eq!(is_active(&page, ids::TAB_SIGNUP), !login);
        }
    }
}
