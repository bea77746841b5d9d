use crate::provisioning_step::ProvisioningStep;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Ok,
    Fail,
}

/// What the server answers to a provisioning step.
///
/// Servers may answer with an explicit `status`, or only with a human-readable `message`.
/// When `status` is present, it wins over the message.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone, Default)]
pub struct StepResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<StepStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    league_model_id: Option<u32>,
}

impl StepResponse {
    pub fn new(
        status: Option<StepStatus>,
        message: Option<String>,
        league_model_id: Option<u32>,
    ) -> Self {
        Self {
            status,
            message,
            league_model_id,
        }
    }

    /// Response a server running the message-only protocol would send on success.
    pub fn legacy_success(step: ProvisioningStep, league_model_id: Option<u32>) -> Self {
        Self::new(
            None,
            Some(step.success_message().to_owned()),
            league_model_id,
        )
    }

    pub fn is_success_for(&self, step: ProvisioningStep) -> bool {
        match self.status {
            Some(status) => status == StepStatus::Ok,
            None => self.message.as_deref() == Some(step.success_message()),
        }
    }
}
