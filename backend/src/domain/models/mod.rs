pub mod premises;
pub mod sales_history;

pub use premises::*;
pub use sales_history::*;
