use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const RECORD_SEPARATOR: &str = ">, ";
const TEAM_ID_MARKER: &str = "team_id";
const NOISE_TOKENS: [&str; 5] = ["PlayerModel", "[", "]", "<", ">"];

/// Body of a save-trade request.
/// `player_ids` keeps the proposal order: the first id is the player traded away.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct SaveTrade {
    trading_player_id: u32,
    player_ids: Vec<u32>,
}

impl SaveTrade {
    pub fn new(trading_player_id: u32, player_ids: Vec<u32>) -> Self {
        Self {
            trading_player_id,
            player_ids,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TradeIdsError {
    #[error("Record `{0}` has no `team_id` field.")]
    MissingTeamIdMarker(String),
    #[error("Record `{0}` has no `id=` field.")]
    MissingIdField(String),
    #[error("Record `{0}` has an id that is not an integer.")]
    InvalidId(String),
}

/// Extract player ids from the textual dump of a list of player records,
/// e.g. `[<PlayerModel id=12 team_id=3 ...>, <PlayerModel id=9 team_id=5 ...>]`.
///
/// Only kept for pages that don't provide the ids as a JSON list.
/// The format is the server's debug representation: reordering or renaming fields breaks it.
pub fn parse_trade_ids(dump: &str) -> Result<Vec<u32>, TradeIdsError> {
    if strip_noise(dump).trim().is_empty() {
        return Ok(vec![]);
    }

    dump.split(RECORD_SEPARATOR).map(parse_record_id).collect()
}

fn parse_record_id(record: &str) -> Result<u32, TradeIdsError> {
    let fragment = strip_noise(record);
    let (left, _) = fragment
        .split_once(TEAM_ID_MARKER)
        .ok_or_else(|| TradeIdsError::MissingTeamIdMarker(record.to_owned()))?;
    let (_, id) = left
        .rsplit_once('=')
        .ok_or_else(|| TradeIdsError::MissingIdField(record.to_owned()))?;
    id.trim()
        .parse::<u32>()
        .map_err(|_| TradeIdsError::InvalidId(record.to_owned()))
}

fn strip_noise(record: &str) -> String {
    NOISE_TOKENS
        .iter()
        .fold(record.to_owned(), |fragment, token| fragment.replace(token, ""))
}
