//! Reusable view components.

pub mod board_column;
pub mod filter_bar;
pub mod page_header;
pub mod task_card;
