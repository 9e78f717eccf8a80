//! In-memory model of the BuildWise page.
//!
//! Elements are addressed by their markup ID, or by class for the few
//! anonymous ones (result tab buttons). Visibility uses the `hidden` class,
//! except for the report template, which toggles its inline `display` style.

use parking_lot::Mutex;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::error::{ClientError, ClientResult};
use crate::ui::ids;

/// Page shared between handlers and background tasks.
pub type SharedPage = Arc<Mutex<Page>>;

/// Inline `display` style of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Inherit,
    Block,
    None,
}

/// Generated child content of a container (table body, list, timeline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Row(Vec<String>),
    Item(String),
    Phase {
        weeks: String,
        name: String,
        description: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    id: Option<String>,
    classes: BTreeSet<String>,
    pub text: String,
    pub value: String,
    pub disabled: bool,
    pub display: Display,
    pub children: Vec<Fragment>,
}

impl Element {
    pub fn new(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }

    /// Element without an ID, reachable only by class.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn hidden(self) -> Self {
        self.with_class(ids::HIDDEN)
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn is_hidden(&self) -> bool {
        self.has_class(ids::HIDDEN)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: Vec<Element>,
    index: HashMap<String, usize>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element. The first element registered under an ID wins lookups.
    pub fn insert(&mut self, element: Element) {
        let position = self.elements.len();
        if let Some(id) = element.id() {
            self.index.entry(id.to_string()).or_insert(position);
        }
        self.elements.push(element);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> ClientResult<&Element> {
        self.index
            .get(id)
            .map(|&i| &self.elements[i])
            .ok_or_else(|| ClientError::missing(id))
    }

    pub fn get_mut(&mut self, id: &str) -> ClientResult<&mut Element> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.elements[i]),
            None => Err(ClientError::missing(id)),
        }
    }

    pub fn by_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements.iter().filter(move |e| e.has_class(class))
    }

    pub fn by_class_mut<'a>(
        &'a mut self,
        class: &'a str,
    ) -> impl Iterator<Item = &'a mut Element> + 'a {
        self.elements.iter_mut().filter(move |e| e.has_class(class))
    }

    pub fn text(&self, id: &str) -> ClientResult<&str> {
        Ok(self.get(id)?.text.as_str())
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> ClientResult<()> {
        self.get_mut(id)?.text = text.into();
        Ok(())
    }

    pub fn value(&self, id: &str) -> ClientResult<&str> {
        Ok(self.get(id)?.value.as_str())
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> ClientResult<()> {
        self.get_mut(id)?.value = value.into();
        Ok(())
    }

    pub fn show(&mut self, id: &str) -> ClientResult<()> {
        self.get_mut(id)?.remove_class(ids::HIDDEN);
        Ok(())
    }

    pub fn hide(&mut self, id: &str) -> ClientResult<()> {
        self.get_mut(id)?.add_class(ids::HIDDEN);
        Ok(())
    }

    pub fn is_hidden(&self, id: &str) -> ClientResult<bool> {
        Ok(self.get(id)?.is_hidden())
    }

    pub fn children(&self, id: &str) -> ClientResult<&[Fragment]> {
        Ok(self.get(id)?.children.as_slice())
    }

    pub fn set_children(&mut self, id: &str, children: Vec<Fragment>) -> ClientResult<()> {
        self.get_mut(id)?.children = children;
        Ok(())
    }

    pub fn into_shared(self) -> SharedPage {
        Arc::new(Mutex::new(self))
    }

    /// The BuildWise page as served: landing view up, wizard on step 1,
    /// overview tab active, overlay, report template and auth modal hidden.
    pub fn buildwise() -> Self {
        let mut page = Page::new();

        page.insert(Element::new(ids::LANDING_VIEW));
        page.insert(Element::new(ids::APP_VIEW).hidden());
        page.insert(Element::new(ids::STEP_1));
        page.insert(Element::new(ids::STEP_2).hidden());

        page.insert(Element::new(ids::PLAN_FORM));
        for (id, value) in [
            (ids::AREA, ""),
            (ids::FLOORS, "1"),
            (ids::PROJECT_TYPE, "Residential"),
            (ids::BUDGET_PREF, "Standard"),
            (ids::TIME_PREF, "Standard"),
            (ids::COUNTRY, "India"),
            (ids::CURRENCY, "INR"),
        ] {
            page.insert(Element::new(id).with_value(value));
        }

        page.insert(Element::new(ids::LOADING_OVERLAY).hidden());
        page.insert(Element::new(ids::LOADING_TEXT).with_text("Generating your plan..."));

        for (position, (name, label)) in ids::RESULT_TABS.iter().enumerate() {
            let mut button = Element::anonymous()
                .with_class(ids::TAB_BUTTON)
                .with_text(label);
            let mut pane = Element::new(&ids::tab_pane(name)).with_class(ids::TAB_CONTENT);
            if position == 0 {
                button.add_class(ids::ACTIVE);
                pane.add_class(ids::ACTIVE);
            }
            page.insert(button);
            page.insert(pane);
        }

        for id in [
            ids::SUMMARY_TEXT,
            ids::TOTAL_COST,
            ids::COST_MATERIAL,
            ids::COST_LABOR,
            ids::COST_OTHER,
            ids::MATERIAL_TABLE_BODY,
            ids::MAT_TABLE_TOTAL,
            ids::LABOR_TABLE_BODY,
            ids::LAB_TOTAL_WORKERS,
            ids::LAB_TOTAL_DAYS,
            ids::LAB_TABLE_TOTAL,
            ids::MAT_CEMENT,
            ids::MAT_STEEL,
            ids::MAT_SAND,
            ids::MAT_BRICKS,
            ids::WORKER_TEXT,
            ids::TOTAL_WEEKS,
            ids::TIMELINE_LIST,
            ids::RISKS_LIST,
            ids::OPTS_LIST,
        ] {
            page.insert(Element::new(id));
        }

        page.insert(Element::new(ids::DOWNLOAD_BUTTON).with_text("Download Report"));
        let mut template = Element::new(ids::REPORT_TEMPLATE);
        template.display = Display::None;
        page.insert(template);
        for id in [
            ids::REP_DATE,
            ids::REP_TYPE,
            ids::REP_AREA,
            ids::REP_SUMMARY,
            ids::REP_TOTAL,
            ids::REP_MAT_COST,
            ids::REP_LAB_COST,
            ids::REP_DURATION,
            ids::REP_WORKERS,
            ids::REP_CEMENT,
            ids::REP_STEEL,
            ids::REP_SAND,
            ids::REP_BRICKS,
            ids::REP_MAT_TABLE_BODY,
            ids::REP_LAB_TABLE_BODY,
            ids::REP_TIMELINE_LIST,
        ] {
            page.insert(Element::new(id));
        }

        page.insert(Element::new(ids::AUTH_MODAL).hidden());
        page.insert(Element::new(ids::FORM_LOGIN));
        page.insert(Element::new(ids::FORM_SIGNUP).hidden());
        page.insert(Element::new(ids::TAB_LOGIN).with_class(ids::ACTIVE));
        page.insert(Element::new(ids::TAB_SIGNUP));
        page.insert(Element::new(ids::LOGIN_EMAIL));
        page.insert(Element::new(ids::LOGIN_PASSWORD));
        page.insert(Element::new(ids::LOGIN_SUBMIT).with_text("Access Dashboard →"));
        page.insert(Element::new(ids::LOGIN_ERROR).hidden());
        page.insert(Element::new(ids::SIGNUP_SUBMIT).with_text("Create Account →"));

        page
    }
}
