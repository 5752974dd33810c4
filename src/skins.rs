//! Avatar skin selection
//!
//! A closed enumeration replacing the string-keyed asset map of the canvas
//! version; unknown keys are rejected at customization time. Changing the
//! skin never affects physics or collision geometry.

use serde::{Deserialize, Serialize};

/// Selectable avatar skins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SkinId {
    #[default]
    Classic,
    Player2,
    Player3,
    Player4,
    Player5,
    Player6,
    Player7,
    Player8,
    Player9,
    Player10,
    Player11,
}

impl SkinId {
    /// All skins in menu order
    pub const ALL: [SkinId; 11] = [
        SkinId::Classic,
        SkinId::Player2,
        SkinId::Player3,
        SkinId::Player4,
        SkinId::Player5,
        SkinId::Player6,
        SkinId::Player7,
        SkinId::Player8,
        SkinId::Player9,
        SkinId::Player10,
        SkinId::Player11,
    ];

    /// Stable key used by the customization UI and saved selections
    pub fn key(&self) -> &'static str {
        match self {
            SkinId::Classic => "default",
            SkinId::Player2 => "player2",
            SkinId::Player3 => "player3",
            SkinId::Player4 => "player4",
            SkinId::Player5 => "player5",
            SkinId::Player6 => "player6",
            SkinId::Player7 => "player7",
            SkinId::Player8 => "player8",
            SkinId::Player9 => "player9",
            SkinId::Player10 => "player10",
            SkinId::Player11 => "player11",
        }
    }

    /// Parse a saved/UI key; unknown keys are rejected
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.key() == key)
    }

    /// Asset file the rendering layer should draw for this skin
    pub fn asset_path(&self) -> &'static str {
        match self {
            SkinId::Classic => "player.gif",
            SkinId::Player2 => "player2.gif",
            SkinId::Player3 => "player3.webp",
            SkinId::Player4 => "player4.webp",
            SkinId::Player5 => "player5.webp",
            SkinId::Player6 => "player6.webp",
            SkinId::Player7 => "player7.webp",
            SkinId::Player8 => "player8.webp",
            SkinId::Player9 => "player9.webp",
            SkinId::Player10 => "player10.webp",
            SkinId::Player11 => "player11.webp",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for skin in SkinId::ALL {
            assert_eq!(SkinId::from_key(skin.key()), Some(skin));
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert_eq!(SkinId::from_key("player99"), None);
        assert_eq!(SkinId::from_key(""), None);
        assert_eq!(SkinId::from_key("Default"), None);
    }

    #[test]
    fn test_default_skin() {
        assert_eq!(SkinId::default(), SkinId::Classic);
        assert_eq!(SkinId::default().asset_path(), "player.gif");
    }

    #[test]
    fn test_all_skins_distinct() {
        for (i, a) in SkinId::ALL.iter().enumerate() {
            for b in &SkinId::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
                assert_ne!(a.asset_path(), b.asset_path());
            }
        }
    }
}
