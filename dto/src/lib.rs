pub mod player_outlook;
pub mod player_stat;
pub mod provisioning_request;
pub mod provisioning_step;
pub mod step_response;
pub mod trade;
