mod header;
mod results;
mod upload_section;

pub use header::render_header;
pub use results::{render_error_message, render_results};
pub use upload_section::render_upload_section;
