use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which half of the candidate range survives an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Target is on or before the probe.
    Before,
    /// Target is strictly after the probe.
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Affirmative,
    Negative,
    Unrecognized,
}

impl Classification {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Affirmative => Some(Direction::Before),
            Self::Negative => Some(Direction::After),
            Self::Unrecognized => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionStatus {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMethod {
    Search,
    DirectDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub index: usize,
    pub date: NaiveDate,
    pub label: String,
    pub attempts: u32,
    pub method: ResolutionMethod,
}

impl Resolution {
    pub fn message(&self) -> String {
        match self.method {
            ResolutionMethod::Search => format!(
                "Your birthday is {}! (Attempts: {})",
                self.label, self.attempts
            ),
            ResolutionMethod::DirectDate => format!("Your birthday is {}!", self.label),
        }
    }
}

/// What the surrounding I/O layer should do after a session step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Question {
        text: String,
        probe_index: usize,
        attempts: u32,
    },
    Resolved(Resolution),
    Reprompt {
        text: String,
    },
    /// Input arrived while no session was in progress.
    Ignored,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub status: SessionStatus,
    pub attempts: u32,
    pub turns: usize,
    pub resolution: Option<Resolution>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolution(method: ResolutionMethod) -> Resolution {
        Resolution {
            index: 299,
            date: NaiveDate::from_ymd_opt(2024, 10, 26).unwrap(),
            label: "October 26".to_string(),
            attempts: 4,
            method,
        }
    }

    #[test]
    fn test_resolution_messages() {
        assert_eq!(
            resolution(ResolutionMethod::Search).message(),
            "Your birthday is October 26! (Attempts: 4)"
        );
        assert_eq!(
            resolution(ResolutionMethod::DirectDate).message(),
            "Your birthday is October 26!"
        );
    }

    #[test]
    fn test_classification_direction() {
        assert_eq!(Classification::Affirmative.direction(), Some(Direction::Before));
        assert_eq!(Classification::Negative.direction(), Some(Direction::After));
        assert_eq!(Classification::Unrecognized.direction(), None);
    }

    #[test]
    fn test_resolution_serializes_method_in_snake_case() {
        let json = serde_json::to_value(resolution(ResolutionMethod::DirectDate)).unwrap();
        assert_eq!(json["method"], "direct_date");
        assert_eq!(json["date"], "2024-10-26");
    }
}
