use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What the user submitted in the add-league form.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct ProvisioningRequest {
    league_id: String,
    year: u16,
}

impl ProvisioningRequest {
    pub fn new(league_id: String, year: u16) -> Self {
        Self { league_id, year }
    }

    /// Build a request from raw form values.
    pub fn from_form(league_id: &str, year: &str) -> Result<Self, InvalidRequest> {
        let league_id = league_id.trim();
        if league_id.is_empty() {
            return Err(InvalidRequest::MissingLeagueId);
        }
        if !league_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(InvalidRequest::MalformedLeagueId(league_id.to_owned()));
        }

        let year = year.trim();
        if year.is_empty() {
            return Err(InvalidRequest::MissingYear);
        }
        let year = year
            .parse::<u16>()
            .map_err(|_| InvalidRequest::MalformedYear(year.to_owned()))?;

        Ok(Self::new(league_id.to_owned(), year))
    }

    pub fn league_id_body(&self) -> LeagueIdBody {
        LeagueIdBody {
            league_id: self.league_id.clone(),
        }
    }
}

/// Body shared by every provisioning step after the league creation.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct LeagueIdBody {
    league_id: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("You must enter a League ID!")]
    MissingLeagueId,
    #[error("League ID `{0}` should only contain digits.")]
    MalformedLeagueId(String),
    #[error("You must enter a year!")]
    MissingYear,
    #[error("Year `{0}` is not a valid year.")]
    MalformedYear(String),
}
