use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::app::AppState;
use crate::domain::auth::{AuthMode, LoginOutcome};
use crate::error::ClientResult;
use crate::report;
use crate::ui::page::{Fragment, Page};
use crate::ui::{auth_modal, ids, submit, view, View};

#[derive(Parser, Debug)]
#[command(name = "buildwise", version, about = "BuildWise construction planner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Request a cost and schedule estimate for a project
    Estimate(EstimateArgs),
    /// Sign in against the BuildWise site
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct EstimateArgs {
    #[arg(long, help = "Built-up area in square feet (min 200)")]
    pub area: String,
    #[arg(long, default_value = "1")]
    pub floors: String,
    #[arg(long = "type", default_value = "Residential")]
    pub project_type: String,
    #[arg(long, default_value = "Standard")]
    pub budget: String,
    #[arg(long, default_value = "Standard")]
    pub timeline: String,
    #[arg(long, default_value = "India")]
    pub country: String,
    #[arg(long, default_value = "INR")]
    pub currency: String,
    #[arg(long, default_value_t = false, help = "Also export the plan as a PDF")]
    pub pdf: bool,
}

impl EstimateArgs {
    fn fill(&self, page: &mut Page) -> ClientResult<()> {
        for (id, value) in [
            (ids::AREA, &self.area),
            (ids::FLOORS, &self.floors),
            (ids::PROJECT_TYPE, &self.project_type),
            (ids::BUDGET_PREF, &self.budget),
            (ids::TIME_PREF, &self.timeline),
            (ids::COUNTRY, &self.country),
            (ids::CURRENCY, &self.currency),
        ] {
            page.set_value(id, value.as_str())?;
        }
        Ok(())
    }
}

pub async fn run(cli: Cli, state: &AppState) -> Result<()> {
    match cli.command {
        Commands::Estimate(args) => estimate(&args, state).await,
        Commands::Login { email, password } => login(email, password, state).await,
    }
}

async fn estimate(args: &EstimateArgs, state: &AppState) -> Result<()> {
    {
        let mut page = state.page.lock();
        view::switch_view(&mut page, View::App)?;
        args.fill(&mut page)?;
        view::next_step(&mut page, state.host.as_ref())?;
    }

    submit::submit(state).await?;
    print!("{}", dashboard_text(&state.page.lock())?);

    if args.pdf {
        let path = report::export(state).await?;
        println!("Report saved to {}", path.display());
    }
    Ok(())
}

async fn login(email: String, password: String, state: &AppState) -> Result<()> {
    {
        let mut page = state.page.lock();
        auth_modal::open_modal(&mut page, AuthMode::Login)?;
        page.set_value(ids::LOGIN_EMAIL, email)?;
        page.set_value(ids::LOGIN_PASSWORD, password)?;
    }

    if let LoginOutcome::Rejected(message) = auth_modal::handle_login(state).await? {
        anyhow::bail!(message);
    }
    Ok(())
}

/// The results view as plain text.
pub fn dashboard_text(page: &Page) -> ClientResult<String> {
    let mut out = String::new();
    let mut line = |label: &str, id: &str| -> ClientResult<()> {
        out.push_str(&format!("{:<16}{}\n", label, page.text(id)?));
        Ok(())
    };

    line("Summary", ids::SUMMARY_TEXT)?;
    line("Total cost", ids::TOTAL_COST)?;
    line("Materials", ids::COST_MATERIAL)?;
    line("Labor", ids::COST_LABOR)?;
    line("Other", ids::COST_OTHER)?;
    line("Workforce", ids::WORKER_TEXT)?;
    line("Duration", ids::TOTAL_WEEKS)?;
    line("Cement", ids::MAT_CEMENT)?;
    line("Steel", ids::MAT_STEEL)?;
    line("Sand", ids::MAT_SAND)?;
    line("Bricks", ids::MAT_BRICKS)?;

    for (title, id) in [
        ("Material costs", ids::MATERIAL_TABLE_BODY),
        ("Labor", ids::LABOR_TABLE_BODY),
        ("Timeline", ids::TIMELINE_LIST),
        ("Risks", ids::RISKS_LIST),
        ("Optimizations", ids::OPTS_LIST),
    ] {
        let children = page.children(id)?;
        if children.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{}\n", title));
        for child in children {
            match child {
                Fragment::Row(cells) => out.push_str(&format!("  {}\n", cells.join(" | "))),
                Fragment::Item(text) => out.push_str(&format!("  - {}\n", text)),
                Fragment::Phase {
                    weeks,
                    name,
                    description,
                } => out.push_str(&format!("  {:<12}{}: {}\n", weeks, name, description)),
            }
        }
    }

    Ok(out)
}
