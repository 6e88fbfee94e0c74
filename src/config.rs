// Shared front-end constants.
pub const APP_TITLE: &str = "NUMBER SPIRAL";
pub const PROMPT: &str = "Please enter an integer or \"q\" to quit: ";
pub const QUIT_COMMAND: &str = "q";
pub const MIN_PANE_WIDTH: u16 = 46; // prompt, cursor and two borders
pub const INPUT_H: u16 = 3;
pub const CONTROLS_H: u16 = 4;
pub const POLL_MS: u64 = 50;
pub const PAGE_STEP: u16 = 10; // rows/cols moved by PageUp/PageDown
