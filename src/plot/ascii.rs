//! ASCII horizontal bar charts for terminal output.
//!
//! Bars are scaled against the largest count in the chart, so the biggest
//! category always spans the full width. Output is deterministic, which keeps
//! it easy to assert on in tests.

use crate::report::DatasetStats;

const BAR_CHAR: char = '#';
const MIN_WIDTH: usize = 10;

/// One labeled bar chart.
pub fn render_bar_chart(title: &str, entries: &[(String, usize)], width: usize) -> String {
    let width = width.max(MIN_WIDTH);
    let label_width = entries.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let max_value = entries.iter().map(|(_, v)| *v).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');

    for (label, value) in entries {
        let len = bar_len(*value, max_value, width);
        let bar: String = std::iter::repeat_n(BAR_CHAR, len).collect();
        out.push_str(format!("{label:<label_width$} | {bar:<width$} {value}\n").as_str());
    }

    out
}

/// Gender, location, age-group and credit-level charts for a dataset.
pub fn render_distribution_charts(stats: &DatasetStats, width: usize) -> String {
    let gender: Vec<(String, usize)> = stats
        .gender_counts
        .iter()
        .map(|(g, n)| (g.display_name().to_string(), *n))
        .collect();
    let location: Vec<(String, usize)> = stats
        .location_counts
        .iter()
        .map(|(l, n)| (l.display_name().to_string(), *n))
        .collect();
    let ages: Vec<(String, usize)> = stats
        .age_groups
        .iter()
        .map(|(g, n)| (g.label().to_string(), *n))
        .collect();
    let levels: Vec<(String, usize)> = stats
        .level_counts
        .iter()
        .map(|(lvl, n)| (lvl.band_label().to_string(), *n))
        .collect();

    [
        render_bar_chart("Gender Distribution", &gender, width),
        render_bar_chart("Location Distribution", &location, width),
        render_bar_chart("Age Group Distribution", &ages, width),
        render_bar_chart("Credit Score Distribution", &levels, width),
    ]
    .join("\n")
}

fn bar_len(value: usize, max_value: usize, width: usize) -> usize {
    if max_value == 0 {
        return 0;
    }
    // Round to nearest; any non-zero count gets at least one cell.
    let len = (value * width + max_value / 2) / max_value;
    if value > 0 { len.max(1) } else { 0 }
}
