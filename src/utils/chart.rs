//! Terminal charts: horizontal bars for categorical counts and rates,
//! and a share chart that stands in for a pie.

use crate::utils::formatting::{format_number, pad_left, pad_right, truncate};
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

const PALETTE: &[Colour] = &[
    Colour::Cyan,
    Colour::Yellow,
    Colour::Green,
    Colour::Purple,
    Colour::Blue,
    Colour::Red,
];

const LABEL_MAX: usize = 28;
const BAR_WIDTH: usize = 40;

fn label_width(data: &[(String, f64)]) -> usize {
    data.iter()
        .map(|(l, _)| UnicodeWidthStr::width(l.as_str()))
        .max()
        .unwrap_or(0)
        .min(LABEL_MAX)
}

/// Bars scaled to the largest value. Negative values draw no bar.
pub fn bar_chart(title: &str, data: &[(String, f64)]) -> String {
    let mut out = format!("{}\n", Colour::White.bold().paint(title));
    if data.is_empty() {
        return out;
    }

    let lw = label_width(data);
    let max = data.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

    for (i, (label, value)) in data.iter().enumerate() {
        let len = if max > 0.0 && *value > 0.0 {
            ((value / max) * BAR_WIDTH as f64).round().max(1.0) as usize
        } else {
            0
        };
        let colour = PALETTE[i % PALETTE.len()];
        out.push_str(&format!(
            "  {} │{} {}\n",
            pad_left(&truncate(label, lw), lw),
            colour.paint("█".repeat(len)),
            format_number(*value)
        ));
    }
    out
}

/// Each slice as a percentage of the total.
pub fn share_chart(title: &str, data: &[(String, f64)]) -> String {
    let mut out = format!("{}\n", Colour::White.bold().paint(title));
    let total: f64 = data.iter().map(|(_, v)| v.max(0.0)).sum();
    if total <= 0.0 {
        return out;
    }

    let lw = label_width(data);
    for (i, (label, value)) in data.iter().enumerate() {
        let pct = value.max(0.0) / total * 100.0;
        let len = (pct / 100.0 * BAR_WIDTH as f64).round() as usize;
        let colour = PALETTE[i % PALETTE.len()];
        out.push_str(&format!(
            "  {} {} {:>5.1}% ({})\n",
            pad_right(&truncate(label, lw), lw),
            colour.paint(format!("{}{}", "■".repeat(len), " ".repeat(BAR_WIDTH - len))),
            pct,
            format_number(*value)
        ));
    }
    out
}
