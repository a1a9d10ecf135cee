//! Assembling a cron expression from the console's discrete per-field
//! inputs. Empty inputs mean "any", i.e. `*`.

use serde::{Deserialize, Serialize};

/// Raw text of the 5 per-field inputs in the schedule builder form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpressionParts {
    pub minute: String,
    pub hour: String,
    pub day: String,
    pub month: String,
    pub day_of_week: String,
}

impl ExpressionParts {
    /// Join the fields into a candidate expression, substituting `*` for
    /// any field left empty. The result is a candidate only — run it
    /// through `validate` before use.
    pub fn assemble(&self) -> String {
        [&self.minute, &self.hour, &self.day, &self.month, &self.day_of_week]
            .iter()
            .map(|field| {
                let trimmed = field.trim();
                if trimmed.is_empty() { "*" } else { trimmed }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
