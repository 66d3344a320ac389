use serde::{Deserialize, Serialize};

/// Publication status of a comic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ongoing,
    Completed,
    /// the story is complete but releases are still being uploaded
    PublishingFinished,
    OnHiatus,
    Cancelled,
    #[default]
    Unknown,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_status_serialized_snake_case() {
        assert_eq!(
            serde_json::to_string(&Status::PublishingFinished).unwrap(),
            "\"publishing_finished\""
        );
        assert_eq!(Status::default(), Status::Unknown);
    }
}
