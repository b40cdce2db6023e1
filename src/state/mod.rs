mod export;
mod persistence;

pub use export::export_shopping_csv;
pub use persistence::{load_profile, save_profile};
