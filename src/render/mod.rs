pub mod chart;
pub mod html;
pub mod table;

pub use chart::{format_bar_chart, format_bar_charts};
pub use html::format_html;
pub use table::{format_table, should_use_colors};
