pub mod board;

pub use board::{clock_line, header, render_board, render_row, snapshot, BoardSnapshot, MarketSnapshot};
