use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct PlayerStat {
    name: String,
    value: f64,
}

impl PlayerStat {
    pub fn new(name: String, value: f64) -> Self {
        Self { name, value }
    }
}
