pub mod health;
pub mod history;
pub mod view;

pub use health::health_check;
pub use history::{create_history, delete_history, list_history};
pub use view::history_page;
