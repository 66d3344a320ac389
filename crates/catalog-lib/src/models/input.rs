use serde::{Deserialize, Serialize};

/// A source preference, rendered by the host and read back by the source
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum Input {
    Text {
        name: String,
        state: Option<String>,
    },
    Checkbox {
        name: String,
        state: Option<bool>,
    },
    Select {
        name: String,
        values: Vec<String>,
        state: Option<i64>,
    },
}

impl Input {
    pub fn name(&self) -> &str {
        match self {
            Input::Text { name, .. } | Input::Checkbox { name, .. } | Input::Select { name, .. } => {
                name
            }
        }
    }
}
