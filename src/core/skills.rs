//! Skill-level derivation and rotation for a fixed team roster
//!
//! Roster, vocabulary and the initial assignment are pure functions of the [`Mode`];
//! switching modes re-derives all three from scratch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Names of the base roster used when no settings override them.
pub const DEFAULT_BASE_MEMBERS: [&str; 4] = ["Alex", "Blair", "Casey", "Devon"];

/// Name of the member appended in extended mode.
pub const DEFAULT_EXTRA_MEMBER: &str = "Emery";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    #[serde(rename = "Lower-Intermediate")]
    LowerIntermediate,
    #[serde(rename = "Middle-Intermediate")]
    MiddleIntermediate,
    #[serde(rename = "Upper-Intermediate")]
    UpperIntermediate,
    Advanced,
}

impl SkillLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::LowerIntermediate => "Lower-Intermediate",
            SkillLevel::MiddleIntermediate => "Middle-Intermediate",
            SkillLevel::UpperIntermediate => "Upper-Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(SkillLevel::Beginner),
            "lower-intermediate" => Ok(SkillLevel::LowerIntermediate),
            "middle-intermediate" => Ok(SkillLevel::MiddleIntermediate),
            "upper-intermediate" => Ok(SkillLevel::UpperIntermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            other => Err(format!("Unknown skill level: {other}")),
        }
    }
}

/// The two rotator configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Four members, intermediates split into lower and upper.
    #[default]
    Split,
    /// Five members, with an added middle-intermediate tier.
    Extended,
}

impl Mode {
    pub fn from_extended(extended: bool) -> Self {
        if extended {
            Mode::Extended
        } else {
            Mode::Split
        }
    }

    pub fn is_extended(&self) -> bool {
        matches!(self, Mode::Extended)
    }

    pub fn toggle(self) -> Self {
        match self {
            Mode::Split => Mode::Extended,
            Mode::Extended => Mode::Split,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Split => "Split Intermediates",
            Mode::Extended => "Extra Tier (Middle-Int)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
}

impl TeamMember {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The externally supplied roster: four base members plus one extra.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSource {
    pub base: Vec<TeamMember>,
    pub extra: TeamMember,
}

impl RosterSource {
    pub fn from_names<S: AsRef<str>>(base: &[S], extra: &str) -> Self {
        let base = base
            .iter()
            .enumerate()
            .map(|(index, name)| TeamMember::new((index + 1).to_string(), name.as_ref()))
            .collect::<Vec<_>>();
        let extra = TeamMember::new((base.len() + 1).to_string(), extra);
        Self { base, extra }
    }
}

impl Default for RosterSource {
    fn default() -> Self {
        Self::from_names(&DEFAULT_BASE_MEMBERS, DEFAULT_EXTRA_MEMBER)
    }
}

pub fn derive_roster(source: &RosterSource, extended: bool) -> Vec<TeamMember> {
    let mut roster = source.base.clone();
    if extended {
        roster.push(source.extra.clone());
    }
    roster
}

pub fn derive_vocabulary(extended: bool) -> Vec<SkillLevel> {
    if extended {
        vec![
            SkillLevel::Beginner,
            SkillLevel::LowerIntermediate,
            SkillLevel::MiddleIntermediate,
            SkillLevel::UpperIntermediate,
            SkillLevel::Advanced,
        ]
    } else {
        vec![
            SkillLevel::Beginner,
            SkillLevel::LowerIntermediate,
            SkillLevel::UpperIntermediate,
            SkillLevel::Advanced,
        ]
    }
}

/// Assigns `vocabulary[i % vocabulary.len()]` to the member at index `i`.
///
/// An empty vocabulary yields no assignments.
pub fn derive_initial_skills(roster: &[TeamMember], vocabulary: &[SkillLevel]) -> Vec<SkillLevel> {
    if vocabulary.is_empty() {
        return Vec::new();
    }
    (0..roster.len())
        .map(|index| vocabulary[index % vocabulary.len()])
        .collect()
}

/// Moves the last element to the front, shifting the rest one place toward the end.
pub fn rotate(skills: &[SkillLevel]) -> Vec<SkillLevel> {
    let mut rotated = skills.to_vec();
    if !rotated.is_empty() {
        rotated.rotate_right(1);
    }
    rotated
}

/// Roster, vocabulary and initial skills for one mode, derived together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub mode: Mode,
    pub roster: Vec<TeamMember>,
    pub vocabulary: Vec<SkillLevel>,
    pub skills: Vec<SkillLevel>,
}

impl Assignment {
    pub fn derive(source: &RosterSource, mode: Mode) -> Self {
        let extended = mode.is_extended();
        let roster = derive_roster(source, extended);
        let vocabulary = derive_vocabulary(extended);
        let skills = derive_initial_skills(&roster, &vocabulary);
        Self {
            mode,
            roster,
            vocabulary,
            skills,
        }
    }

    /// Pairs each member with the skill at the same index.
    pub fn pairs(&self) -> impl Iterator<Item = (&TeamMember, &SkillLevel)> {
        self.roster.iter().zip(self.skills.iter())
    }
}
