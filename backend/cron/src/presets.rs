//! Built-in schedules offered by the console's preset picker.

use serde::Serialize;

/// A named, fixed schedule.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: &'static str,
    pub label: &'static str,
    pub expression: &'static str,
}

/// Presets in picker order. 2:00 is the console's default backup slot.
pub const PRESETS: &[Preset] = &[
    Preset { id: "every-minute", label: "毎分", expression: "* * * * *" },
    Preset { id: "every-15-minutes", label: "15分ごと", expression: "*/15 * * * *" },
    Preset { id: "hourly", label: "毎時0分", expression: "0 * * * *" },
    Preset { id: "daily", label: "毎日 2:00", expression: "0 2 * * *" },
    Preset { id: "weekday-mornings", label: "平日 9:00", expression: "0 9 * * 1-5" },
    Preset { id: "weekly", label: "毎週日曜 2:00", expression: "0 2 * * 0" },
    Preset { id: "monthly", label: "毎月1日 2:00", expression: "0 2 1 * *" },
];

/// Look up a preset by its id.
pub fn find(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}
