/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[97m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Colors used by tables and summaries, chosen from the `DarkMode` setting.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub header: &'static str,
    pub accent: &'static str,
    pub muted: &'static str,
}

impl Palette {
    pub fn for_dark_mode(dark: bool) -> Self {
        if dark {
            Palette {
                header: WHITE,
                accent: CYAN,
                muted: GREY,
            }
        } else {
            Palette {
                header: BLUE,
                accent: MAGENTA,
                muted: GREY,
            }
        }
    }
}

/// RPE color: easy → green, moderate → yellow, hard → red.
pub fn color_for_rpe(rpe: Option<u8>) -> &'static str {
    match rpe {
        None => GREY,
        Some(1..=4) => GREEN,
        Some(5..=7) => YELLOW,
        Some(_) => RED,
    }
}
