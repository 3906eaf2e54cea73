use crate::{StatsItem, TimeFrame};

const NO_DATA: &str = "No data";

/// Flattens stats into one display line per item/range entry that carries
/// the requested window. Entries without that window contribute nothing.
pub fn shape_data_lines(items: &[StatsItem], time_frame: TimeFrame) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| {
            item.range.iter().filter_map(move |entry| {
                let slot = entry.slot(time_frame)?;
                let value = slot.display_data().unwrap_or_else(|| NO_DATA.to_string());
                Some(format!("{}, Data: {}", item.label, value))
            })
        })
        .collect()
}
