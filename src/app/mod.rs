pub mod demos;
pub mod menu;

pub use demos::{run_all, run_facade_demo, run_strategy_demo};
pub use menu::{run_menu, MenuChoice};
