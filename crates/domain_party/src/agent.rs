//! Desk agent profile

use std::fmt;

use chrono::{Timelike, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::AgentId;
use crate::error::PartyError;

/// Part of the day used to pick a greeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
}

impl DayPeriod {
    /// Morning before noon, afternoon until 18:00, evening otherwise
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=11 => DayPeriod::Morning,
            12..=17 => DayPeriod::Afternoon,
            _ => DayPeriod::Evening,
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DayPeriod::Morning => "morning",
            DayPeriod::Afternoon => "afternoon",
            DayPeriod::Evening => "evening",
        };
        f.write_str(s)
    }
}

/// The agent working the claims desk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub agent_id: AgentId,
    pub display_name: String,
    pub role: String,
    /// Lines of business the agent usually handles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

impl AgentProfile {
    /// Creates a profile with a fresh agent ID
    ///
    /// # Errors
    ///
    /// Returns `PartyError::InvalidProfile` if the display name is blank.
    pub fn new(display_name: impl Into<String>, role: impl Into<String>) -> Result<Self, PartyError> {
        let display_name = display_name.into().trim().to_string();
        if display_name.is_empty() {
            return Err(PartyError::invalid("display name must not be blank"));
        }

        Ok(Self {
            agent_id: AgentId::new_v7(),
            display_name,
            role: role.into(),
            specialty: None,
        })
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    /// First word of the display name
    pub fn first_name(&self) -> &str {
        self.display_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.display_name)
    }

    /// Greeting for the given hour of the day (0-23)
    pub fn greeting_at(&self, hour: u32) -> String {
        format!("Good {}, {}", DayPeriod::from_hour(hour), self.first_name())
    }

    /// Greeting for the current UTC hour
    pub fn greeting(&self) -> String {
        self.greeting_at(Utc::now().hour())
    }
}
