//! Validation for level definitions.

use super::data::*;

/// A problem in a level that still lets it load.
#[derive(Debug, Clone, PartialEq)]
pub enum LevelValidationIssue {
    NoRespawnPoints,
    NoDefaultRespawnPoint,
    MultipleDefaultRespawnPoints(usize),
    NoGround,
    /// A box with zero or negative width or height
    DegenerateRect { kind: &'static str, index: usize },
}

impl std::fmt::Display for LevelValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRespawnPoints => write!(f, "no respawn points; deaths cannot respawn"),
            Self::NoDefaultRespawnPoint => {
                write!(f, "no default respawn point; the first point is used")
            }
            Self::MultipleDefaultRespawnPoints(count) => write!(
                f,
                "{} default respawn points; the first one is used",
                count
            ),
            Self::NoGround => write!(f, "no ground"),
            Self::DegenerateRect { kind, index } => {
                write!(f, "{} #{} has a non-positive size", kind, index)
            }
        }
    }
}

fn check_rect(
    issues: &mut Vec<LevelValidationIssue>,
    kind: &'static str,
    index: usize,
    rect: &RectDef,
) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        issues.push(LevelValidationIssue::DegenerateRect { kind, index });
    }
}

/// Validate a level definition.
/// Returns a list of issues, empty if the level is well formed.
pub fn validate_level(level: &LevelDef) -> Vec<LevelValidationIssue> {
    let mut issues = Vec::new();

    let defaults = level
        .respawn_points
        .iter()
        .filter(|point| point.is_default)
        .count();
    if level.respawn_points.is_empty() {
        issues.push(LevelValidationIssue::NoRespawnPoints);
    } else if defaults == 0 {
        issues.push(LevelValidationIssue::NoDefaultRespawnPoint);
    } else if defaults > 1 {
        issues.push(LevelValidationIssue::MultipleDefaultRespawnPoints(defaults));
    }

    if level.ground.is_empty() {
        issues.push(LevelValidationIssue::NoGround);
    }

    for (index, rect) in level.ground.iter().enumerate() {
        check_rect(&mut issues, "ground", index, rect);
    }
    for (index, rect) in level.hazards.iter().enumerate() {
        check_rect(&mut issues, "hazard", index, rect);
    }
    for (index, object) in level.objects.iter().enumerate() {
        check_rect(&mut issues, "object", index, &object.rect);
    }

    issues
}
