/// XP needed to go from level 1 to level 2
pub const BASE_LEVEL_XP: u64 = 60;

/// Each level costs this much more than the previous one
pub const LEVEL_GROWTH: f64 = 1.12;

/// Approximate Duolingo course level reached with `xp` experience points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: u32,
    /// Percent of the way to the next level, 0..=100
    pub progress: u32,
}

/// Walk the level curve, spending `xp` on each level's cost until the next
/// one no longer fits.
///
/// The constants approximate Duolingo's own curve and must stay fixed so the
/// output matches what the site has always shown.
pub fn level_for_xp(xp: u64) -> LevelProgress {
    let mut level = 1;
    let mut requirement = BASE_LEVEL_XP;
    let mut remaining = xp;

    while remaining >= requirement {
        remaining -= requirement;
        level += 1;
        requirement = next_requirement(requirement);
    }

    let ratio = remaining as f64 / requirement as f64;
    let progress = ((ratio * 100.0).round() as u32).min(100);

    LevelProgress { level, progress }
}

fn next_requirement(requirement: u64) -> u64 {
    (requirement as f64 * LEVEL_GROWTH).floor() as u64
}
