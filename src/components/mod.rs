pub mod app;
pub mod board;
pub mod clue_bar;
pub mod clue_lists;
pub mod controls_panel;
pub mod keyboard;
pub mod puzzle_view;
pub mod result_overlay;
pub mod settings_modal;
pub mod time_display;
