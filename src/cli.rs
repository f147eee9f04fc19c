//! Command-line arguments for the terminal host.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, ConfigError};
use crate::pager::{clamp_page, compute_render_plan, ControlDescriptor, RenderPlan};

#[derive(Debug, Parser)]
#[command(
    name = "pagerline",
    version,
    about = "Page-number navigation controls in the terminal"
)]
pub struct Cli {
    /// Config file (default: ~/.config/pagerline/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Page count for the first configured pager
    #[arg(long, value_name = "N")]
    pub total: Option<u32>,

    /// Current page for the first configured pager
    #[arg(long, value_name = "P")]
    pub page: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the controls for one page/total pair and exit
    Plan {
        #[arg(long, value_name = "N")]
        total: u32,

        #[arg(long, value_name = "P", default_value_t = 1)]
        page: u32,

        /// Print JSON instead of the one-line form
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Load the config file and apply `--total`/`--page`.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        let Some(first) = config.pagers.first_mut() else {
            return;
        };
        if let Some(total) = self.total {
            first.total_pages = total;
        }
        if let Some(page) = self.page {
            first.current_page = page;
        }
    }
}

/// One-line form of a plan: `[1] [2] (3) [4] ... [100]`, current page in
/// parentheses.
pub fn format_plan(plan: &RenderPlan) -> String {
    match plan {
        RenderPlan::Empty => "no pages".to_string(),
        RenderPlan::Controls(controls) => controls
            .iter()
            .map(|control| match control {
                ControlDescriptor::PageButton {
                    page,
                    is_current: true,
                } => format!("({page})"),
                ControlDescriptor::PageButton { page, .. } => format!("[{page}]"),
                ControlDescriptor::Ellipsis => "...".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Output of `pagerline plan`. An out-of-range page is clamped first; no
/// config or logging is involved.
pub fn plan_output(total: u32, page: u32, json: bool) -> serde_json::Result<String> {
    let plan = compute_render_plan(clamp_page(page, total), total);
    if json {
        serde_json::to_string_pretty(&plan)
    } else {
        Ok(format_plan(&plan))
    }
}
