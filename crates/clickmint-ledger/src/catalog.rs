use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{MissionCategory, MissionKind};
use crate::{LedgerError, LedgerResult};

/// One sponsored unit a user can consume for a reward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RewardUnit {
    pub id: String,
    pub kind: UnitKind,
    pub brand: String,
    pub title: String,
    pub reward: Decimal,
    /// Client-side watch delay before the reward may be claimed.
    pub duration_secs: u32,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Video,
    Site,
}

/// A goal-based task cloned onto each account at registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MissionTemplate {
    pub id: String,
    pub kind: MissionKind,
    pub category: MissionCategory,
    pub title: String,
    pub description: String,
    pub reward: Decimal,
    pub goal: i32,
    #[serde(default)]
    pub link: Option<String>,
}

/// Immutable configuration for the mission engine: the reward units on
/// offer, the mission templates accounts start with, and the cooldown
/// window applied once every unit has been consumed in a day.
///
/// Accounts reference templates by id; the catalog is never duplicated
/// per account beyond the cloned progress rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub units: Vec<RewardUnit>,
    pub missions: Vec<MissionTemplate>,
    /// Hours until the day's unit list reopens after all units are consumed.
    #[serde(default = "default_cooldown_hours")]
    pub cooldown_hours: u32,
}

fn default_cooldown_hours() -> u32 {
    12
}

impl Catalog {
    /// The stock catalog: two daily watch missions, three social missions,
    /// and fifteen sponsored units.
    pub fn builtin() -> Self {
        use rust_decimal::prelude::*;

        let missions = vec![
            MissionTemplate {
                id: "m1".into(),
                kind: MissionKind::Watch,
                category: MissionCategory::Daily,
                title: "Daily Starter".into(),
                description: "Visit 5 sites today".into(),
                reward: dec!(5),
                goal: 5,
                link: None,
            },
            MissionTemplate {
                id: "m2".into(),
                kind: MissionKind::Watch,
                category: MissionCategory::Daily,
                title: "Welcome Bonus".into(),
                description: "Visit your first site".into(),
                reward: dec!(10),
                goal: 1,
                link: None,
            },
            MissionTemplate {
                id: "s1".into(),
                kind: MissionKind::Social,
                category: MissionCategory::Social,
                title: "Follow on Facebook".into(),
                description: "Follow our Facebook page".into(),
                reward: dec!(15),
                goal: 1,
                link: Some("https://facebook.com".into()),
            },
            MissionTemplate {
                id: "s2".into(),
                kind: MissionKind::Social,
                category: MissionCategory::Social,
                title: "Subscribe to YouTube".into(),
                description: "Subscribe to our YouTube channel".into(),
                reward: dec!(15),
                goal: 1,
                link: Some("https://youtube.com".into()),
            },
            MissionTemplate {
                id: "s3".into(),
                kind: MissionKind::Social,
                category: MissionCategory::Social,
                title: "Follow on X".into(),
                description: "Follow us on X (Twitter)".into(),
                reward: dec!(10),
                goal: 1,
                link: Some("https://x.com".into()),
            },
        ];

        let units = (1..=15)
            .map(|i| {
                let is_video = i % 2 == 1;
                RewardUnit {
                    id: format!("ad{}", i),
                    kind: if is_video {
                        UnitKind::Video
                    } else {
                        UnitKind::Site
                    },
                    brand: format!("Brand {}", (b'A' + ((i - 1) % 10) as u8) as char),
                    title: if is_video {
                        format!("Product Demo #{}", i)
                    } else {
                        format!("Visit Website #{}", i)
                    },
                    reward: dec!(1.50),
                    duration_secs: 25 + (i as u32 * 7) % 26,
                    url: if is_video {
                        "placeholder".into()
                    } else {
                        "https://example.com".into()
                    },
                }
            })
            .collect();

        Self {
            units,
            missions,
            cooldown_hours: default_cooldown_hours(),
        }
    }

    /// Load a catalog from a YAML file.
    pub fn from_yaml_file<P: AsRef<std::path::Path>>(path: P) -> LedgerResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| LedgerError::Validation(format!("Failed to read catalog: {}", e)))?;
        let catalog: Catalog = serde_yaml::from_str(&raw)
            .map_err(|e| LedgerError::Validation(format!("Invalid catalog YAML: {}", e)))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reject catalogs the engine cannot honor: duplicate ids, non-positive
    /// rewards or goals.
    pub fn validate(&self) -> LedgerResult<()> {
        let mut seen = std::collections::HashSet::new();
        for unit in &self.units {
            if !seen.insert(unit.id.as_str()) {
                return Err(LedgerError::Validation(format!(
                    "Duplicate unit id: {}",
                    unit.id
                )));
            }
            if unit.reward <= Decimal::ZERO {
                return Err(LedgerError::Validation(format!(
                    "Unit {} has non-positive reward",
                    unit.id
                )));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for mission in &self.missions {
            if !seen.insert(mission.id.as_str()) {
                return Err(LedgerError::Validation(format!(
                    "Duplicate mission id: {}",
                    mission.id
                )));
            }
            if mission.goal < 1 {
                return Err(LedgerError::Validation(format!(
                    "Mission {} has goal < 1",
                    mission.id
                )));
            }
            if mission.reward <= Decimal::ZERO {
                return Err(LedgerError::Validation(format!(
                    "Mission {} has non-positive reward",
                    mission.id
                )));
            }
        }

        Ok(())
    }

    pub fn unit(&self, unit_id: &str) -> Option<&RewardUnit> {
        self.units.iter().find(|u| u.id == unit_id)
    }

    pub fn cooldown(&self) -> chrono::Duration {
        chrono::Duration::hours(self.cooldown_hours as i64)
    }
}
