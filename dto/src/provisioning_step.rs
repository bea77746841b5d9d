use std::fmt::{Display, Formatter};

/// Remote calls that turn a league id into a fully graded league, in the order they must run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProvisioningStep {
    FetchLeague,
    FetchTeams,
    FetchPlayers,
    PersistPlayers,
    GradePlayers,
}

impl ProvisioningStep {
    pub const ALL: [ProvisioningStep; 5] = [
        ProvisioningStep::FetchLeague,
        ProvisioningStep::FetchTeams,
        ProvisioningStep::FetchPlayers,
        ProvisioningStep::PersistPlayers,
        ProvisioningStep::GradePlayers,
    ];

    /// Text displayed in the progress area while the step runs.
    pub fn label(&self) -> &'static str {
        match self {
            ProvisioningStep::FetchLeague => "Getting league info...",
            ProvisioningStep::FetchTeams => "Getting teams...",
            ProvisioningStep::FetchPlayers => "Getting players...",
            ProvisioningStep::PersistPlayers => "Saving players...",
            ProvisioningStep::GradePlayers => "Grading players...",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            ProvisioningStep::FetchLeague => "/create-league",
            ProvisioningStep::FetchTeams => "/create-teams",
            ProvisioningStep::FetchPlayers => "/create-players",
            ProvisioningStep::PersistPlayers => "/add-players-to-db",
            ProvisioningStep::GradePlayers => "/get-player-grades",
        }
    }

    /// Message the server answers with when the step succeeded.
    pub fn success_message(&self) -> &'static str {
        match self {
            ProvisioningStep::FetchLeague => "League Created!",
            ProvisioningStep::FetchTeams => "Teams Created!",
            ProvisioningStep::FetchPlayers => "Players Created!",
            ProvisioningStep::PersistPlayers => "Players Added to DB!",
            ProvisioningStep::GradePlayers => "Grades Created!",
        }
    }

    pub fn yields_league_model_id(&self) -> bool {
        *self == ProvisioningStep::FetchLeague
    }
}

impl Display for ProvisioningStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProvisioningStep::FetchLeague => "fetch league",
            ProvisioningStep::FetchTeams => "fetch teams",
            ProvisioningStep::FetchPlayers => "fetch players",
            ProvisioningStep::PersistPlayers => "persist players",
            ProvisioningStep::GradePlayers => "grade players",
        };
        write!(f, "{name}")
    }
}
