pub mod dashboard;
pub mod health_check;
pub mod landing;
pub mod popup;

pub use dashboard::dashboard;
pub use health_check::health_check;
pub use landing::landing;
pub use popup::{open_dashboard, popup_check, popup_input, popup_report, popup_view};
