pub mod fixtures;
mod purchase_history;
mod recipe;

pub use purchase_history::PurchaseHistory;
pub use recipe::Recipe;
