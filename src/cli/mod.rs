mod apply;
mod args;
mod config;
mod fs;
mod logging;
mod main;
mod plan;
mod prompt;
mod ui;

pub use apply::apply_plan;
pub use config::Config;
pub use main::{exit_code, main, run};
pub use plan::{plan_edits, EditPlan, FieldEdit};
pub use prompt::{parse_answer, Prompter};
pub use ui::print_error;
