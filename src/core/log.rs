use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::store::log::read_all;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

const OP_MAX_WIDTH: usize = 48;

fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// Color for each logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "backup" => Colour::Blue,
        "settings" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &RecordStore) -> AppResult<()> {
        let lines = read_all(store)?;

        if lines.is_empty() {
            info("Activity log is empty.");
            return Ok(());
        }

        let num_w = lines.len().to_string().len();
        let date_w = lines.iter().map(|l| l.date.len()).max().unwrap_or(10);

        println!("📜 Activity log:\n");

        for (idx, line) in lines.iter().enumerate() {
            let color = color_for_operation(&line.operation);

            let mut colored = color.paint(line.operation.as_str()).to_string();
            if !line.target.is_empty() {
                colored.push_str(&format!(" ({})", line.target));
            }

            // truncate on the visible text, then re-apply the color to the op word
            let visible = strip_ansi(&colored);
            let shown = if visible.chars().count() > OP_MAX_WIDTH {
                let mut s: String = visible.chars().take(OP_MAX_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                visible
            };

            let recolored = match shown.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(shown.as_str()).to_string(),
            };

            let padding = " ".repeat(OP_MAX_WIDTH.saturating_sub(strip_ansi(&recolored).chars().count()));

            println!(
                "{:>num_w$}: {:<date_w$} | {}{} => {}",
                idx + 1,
                line.date,
                recolored,
                padding,
                line.message,
            );
        }

        Ok(())
    }
}
