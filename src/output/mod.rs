mod summary;

pub use summary::{render_dry_run, render_summary};
