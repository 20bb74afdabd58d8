use serde::{Deserialize, Serialize};

/// Creator category picked on the landing page. Drives which question set is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CreatorRole {
    Photographer,
    Developer,
    VideoEditor,
    Creative,
}

impl CreatorRole {
    pub const ALL: [CreatorRole; 4] = [
        CreatorRole::Photographer,
        CreatorRole::Developer,
        CreatorRole::VideoEditor,
        CreatorRole::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CreatorRole::Photographer => "photographer",
            CreatorRole::Developer => "developer",
            CreatorRole::VideoEditor => "video-editor",
            CreatorRole::Creative => "creative",
        }
    }
}

impl std::fmt::Display for CreatorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CreatorRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        CreatorRole::ALL
            .into_iter()
            .find(|role| role.as_str() == wanted)
            .ok_or_else(|| {
                let valid: Vec<&str> = CreatorRole::ALL.iter().map(CreatorRole::as_str).collect();
                format!("Invalid role: {}. Must be one of {}", s, valid.join(", "))
            })
    }
}
