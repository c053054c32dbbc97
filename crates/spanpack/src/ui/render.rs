//! Plain-text rendering of the item list and solve results.

use crate::domain::model::{Item, Selection};
use crate::infra::config::Config;

const BAR_WIDTH: usize = 30;

/// Render the ordered item list as a table. Rows inside the selected range
/// are marked with `*` in the first column.
pub fn item_table(items: &[Item], selection: Option<&Selection>, config: &Config) -> String {
    let precision = config.defaults.precision;
    let volume_unit = &config.units.volume;
    let weight_unit = &config.units.weight;

    let mut out = String::new();
    out.push_str(&format!(
        "   {:>4}  {:>14}  {:>14}  {:>14}\n",
        "#",
        format!("volume ({volume_unit})"),
        format!("weight ({weight_unit})"),
        format!("{weight_unit}/{volume_unit}")
    ));
    for (index, item) in items.iter().enumerate() {
        let marker = match selection {
            Some(selection) if selection.contains(index) => '*',
            _ => ' ',
        };
        let efficiency = item
            .efficiency()
            .map(|value| format!("{value:.precision$}"))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{marker}  {index:>4}  {:>14}  {:>14}  {efficiency:>14}\n",
            format!("{:.precision$}", item.volume),
            format!("{:.precision$}", item.weight),
        ));
    }
    out
}

/// Render the summary block for a solved selection, including the derived
/// display-only metrics and a textual volume-usage bar.
pub fn solution_summary(selection: &Selection, capacity: f64, config: &Config) -> String {
    let precision = config.defaults.precision;
    let volume_unit = &config.units.volume;
    let weight_unit = &config.units.weight;

    let capacity_used = selection
        .capacity_used(capacity)
        .map(|value| format!("{value:.precision$}%"))
        .unwrap_or_else(|| "-".to_string());
    let efficiency = selection
        .efficiency()
        .map(|value| format!("{value:.precision$} {weight_unit}/{volume_unit}"))
        .unwrap_or_else(|| "-".to_string());

    let mut out = String::new();
    out.push_str(&format!(
        "selected range  items {}..={} ({} item{})\n",
        selection.start_index,
        selection.end_index,
        selection.len(),
        if selection.len() == 1 { "" } else { "s" }
    ));
    out.push_str(&format!(
        "total volume    {:.precision$} {volume_unit}\n",
        selection.total_volume
    ));
    out.push_str(&format!(
        "total weight    {:.precision$} {weight_unit}\n",
        selection.total_weight
    ));
    out.push_str(&format!("capacity used   {capacity_used}\n"));
    out.push_str(&format!("efficiency      {efficiency}\n"));

    if let Some(percent) = selection.capacity_used(capacity) {
        out.push_str(&format!(
            "{} {:.precision$} / {:.precision$} {volume_unit} ({percent:.precision$}%)\n",
            usage_bar(percent),
            selection.total_volume,
            capacity,
        ));
    }
    out
}

fn usage_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
