use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Goal,
    Assist,
    Penalty,
    Warning,
    PenaltySaved,
    WarningAvoided,
}

impl EventKind {
    pub const ALL: [EventKind; 6] = [
        EventKind::Goal,
        EventKind::Assist,
        EventKind::Penalty,
        EventKind::Warning,
        EventKind::PenaltySaved,
        EventKind::WarningAvoided,
    ];

    /// Points credited towards the player-of-the-match score.
    pub fn mvp_weight(self) -> u32 {
        match self {
            EventKind::Goal => 2,
            EventKind::Assist => 1,
            EventKind::PenaltySaved => 3,
            EventKind::WarningAvoided => 1,
            EventKind::Penalty | EventKind::Warning => 0,
        }
    }
}

/// A single action recorded against a match. The category is optional in the stored
/// shape so that incomplete documents can be read and rejected rather than failing the
/// whole file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type", default)]
    pub kind: Option<EventKind>,
    #[serde(default)]
    pub player: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub minute: Option<u32>,
}

impl Event {
    pub fn new(kind: EventKind, player: &str, team: &str, minute: u32) -> Self {
        Self {
            kind: Some(kind),
            player: Some(player.to_string()),
            team: Some(team.to_string()),
            minute: Some(minute),
        }
    }

    /// The acting player, treating a blank name as absent.
    pub fn player_name(&self) -> Option<&str> {
        self.player.as_deref().filter(|name| !name.is_empty())
    }

    pub fn team_name(&self) -> Option<&str> {
        self.team.as_deref().filter(|name| !name.is_empty())
    }
}
