//! Dashboard rendering.
//!
//! `Dashboard::project` is a pure function of the canonical estimate;
//! `Dashboard::apply` binds the result to page elements. Dynamic containers
//! (tables, timeline, lists) are replaced wholesale on every render.

pub mod format;

use crate::domain::estimate::{Crew, Estimate};
use crate::error::ClientResult;
use crate::ui::ids;
use crate::ui::page::{Fragment, Page};

pub const NO_SUMMARY: &str = "No summary provided.";
pub const NO_WORKFORCE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostCards {
    pub total: String,
    pub material: String,
    pub labor: String,
    pub other: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaborTotals {
    pub workers: String,
    pub days: String,
    pub cost: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityCards {
    pub cement: String,
    pub steel: String,
    pub sand: String,
    pub bricks: String,
}

/// Everything the results view shows, as display text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dashboard {
    pub summary: String,
    /// `None` leaves the cost cards as they were.
    pub costs: Option<CostCards>,
    pub material_rows: Vec<Fragment>,
    pub material_total: Option<String>,
    pub labor_rows: Vec<Fragment>,
    pub labor_totals: Option<LaborTotals>,
    pub quantities: Option<QuantityCards>,
    pub workers: String,
    pub total_weeks: String,
    pub timeline: Vec<Fragment>,
    pub risks: Vec<Fragment>,
    pub optimizations: Vec<Fragment>,
}

impl Dashboard {
    pub fn project(estimate: &Estimate) -> Self {
        let symbol = format::currency_symbol(estimate.currency.as_deref());
        let money = |value: f64| format::money(&symbol, value);

        let costs = estimate.costs.map(|c| CostCards {
            total: money(c.total),
            material: money(c.material),
            labor: money(c.labor),
            other: money(c.other),
        });

        let (material_rows, material_total) = match &estimate.material_costs {
            Some(items) => {
                let rows = items
                    .iter()
                    .map(|m| Fragment::Row(vec![format::title_case(&m.item), money(m.cost)]))
                    .collect();
                let sum: f64 = items.iter().map(|m| m.cost).sum();
                (rows, Some(money(sum)))
            }
            None => (Vec::new(), None),
        };

        let crew_row = |label: &str, crew: &Crew| {
            Fragment::Row(vec![
                label.to_string(),
                format!("{} workers", format::plain(crew.workforce)),
                format!("{} days", format::plain(crew.duration)),
                money(crew.daily_wage),
                money(crew.total_cost),
            ])
        };

        let (labor_rows, labor_totals) = match &estimate.labor {
            Some(labor) => (
                vec![
                    crew_row("Skilled", &labor.skilled),
                    crew_row("Unskilled", &labor.unskilled),
                ],
                Some(LaborTotals {
                    workers: format!("{} Workers", format::plain(labor.total_workforce)),
                    days: format!("{} Days", format::plain(labor.total_days)),
                    cost: money(labor.total_labor_cost),
                }),
            ),
            None => (Vec::new(), None),
        };

        let quantities = estimate.quantities.as_ref().map(|q| QuantityCards {
            cement: format!("{} bags", q.cement),
            steel: format!("{} kg", q.steel),
            sand: format!("{} tons", q.sand),
            bricks: format!("{} pcs", q.bricks),
        });

        let total_weeks = match &estimate.timeline_weeks {
            Some(weeks) => format!("{} WEEKS", weeks),
            None => "0 WEEKS".to_string(),
        };

        let timeline = estimate
            .phases
            .iter()
            .map(|phase| Fragment::Phase {
                weeks: phase.weeks.label(),
                name: phase.name.clone(),
                description: phase.description.clone(),
            })
            .collect();

        Self {
            summary: estimate
                .summary
                .clone()
                .unwrap_or_else(|| NO_SUMMARY.to_string()),
            costs,
            material_rows,
            material_total,
            labor_rows,
            labor_totals,
            quantities,
            workers: estimate
                .workers_per_day
                .clone()
                .unwrap_or_else(|| NO_WORKFORCE.to_string()),
            total_weeks,
            timeline,
            risks: items(&estimate.risks),
            optimizations: items(&estimate.optimizations),
        }
    }

    pub fn apply(&self, page: &mut Page) -> ClientResult<()> {
        page.set_text(ids::SUMMARY_TEXT, self.summary.as_str())?;

        if let Some(costs) = &self.costs {
            page.set_text(ids::TOTAL_COST, costs.total.as_str())?;
            page.set_text(ids::COST_MATERIAL, costs.material.as_str())?;
            page.set_text(ids::COST_LABOR, costs.labor.as_str())?;
            page.set_text(ids::COST_OTHER, costs.other.as_str())?;
        }

        page.set_children(ids::MATERIAL_TABLE_BODY, self.material_rows.clone())?;
        if let Some(total) = &self.material_total {
            page.set_text(ids::MAT_TABLE_TOTAL, total.as_str())?;
        }

        page.set_children(ids::LABOR_TABLE_BODY, self.labor_rows.clone())?;
        if let Some(totals) = &self.labor_totals {
            page.set_text(ids::LAB_TOTAL_WORKERS, totals.workers.as_str())?;
            page.set_text(ids::LAB_TOTAL_DAYS, totals.days.as_str())?;
            page.set_text(ids::LAB_TABLE_TOTAL, totals.cost.as_str())?;
        }

        if let Some(q) = &self.quantities {
            page.set_text(ids::MAT_CEMENT, q.cement.as_str())?;
            page.set_text(ids::MAT_STEEL, q.steel.as_str())?;
            page.set_text(ids::MAT_SAND, q.sand.as_str())?;
            page.set_text(ids::MAT_BRICKS, q.bricks.as_str())?;
        }

        page.set_text(ids::WORKER_TEXT, self.workers.as_str())?;
        page.set_text(ids::TOTAL_WEEKS, self.total_weeks.as_str())?;
        page.set_children(ids::TIMELINE_LIST, self.timeline.clone())?;
        page.set_children(ids::RISKS_LIST, self.risks.clone())?;
        page.set_children(ids::OPTS_LIST, self.optimizations.clone())?;

        Ok(())
    }
}

/// Project and bind in one go.
pub fn render(page: &mut Page, estimate: &Estimate) -> ClientResult<Dashboard> {
    let dashboard = Dashboard::project(estimate);
    dashboard.apply(page)?;
    Ok(dashboard)
}

fn items(texts: &[String]) -> Vec<Fragment> {
    texts.iter().cloned().map(Fragment::Item).collect()
}
