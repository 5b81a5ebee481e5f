use serde::Deserialize;
use serde_json::Value;

use crate::domain::{LeetCodeSummary, SolvedCounts, ranking_or_fallback};
use crate::errors::UpstreamError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchedUser {
    username: Option<String>,
    submit_stats: SubmitStats,
    profile: Profile,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitStats {
    ac_submission_num: Vec<DifficultyCount>,
}

#[derive(Debug, Deserialize)]
struct DifficultyCount {
    difficulty: Option<String>,
    #[serde(default)]
    count: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Profile {
    ranking: Option<i64>,
    reputation: Option<i64>,
    star_rating: Option<f64>,
    user_avatar: Option<String>,
}

/// Locate `data.matchedUser`, treating an explicit null as missing
pub fn matched_user(payload: &Value) -> Option<&Value> {
    payload
        .get("data")?
        .get("matchedUser")
        .filter(|user| !user.is_null())
}

/// Turn a GraphQL profile payload into a summary.
///
/// A missing `matchedUser` is reported as [`UpstreamError::NotFound`]; any
/// other missing piece is [`UpstreamError::Malformed`].
pub fn parse_profile(
    payload: &Value,
    username: &str,
    profile_url: String,
) -> Result<LeetCodeSummary, UpstreamError> {
    let user = matched_user(payload)
        .ok_or_else(|| UpstreamError::not_found(format!("No LeetCode user named {}", username)))?;

    let user = MatchedUser::deserialize(user).map_err(|e| UpstreamError::malformed(e.to_string()))?;

    let solved = extract_solved(&user.submit_stats.ac_submission_num).or_fallback();

    Ok(LeetCodeSummary {
        username: user.username.unwrap_or_else(|| username.to_string()),
        profile_url,
        solved,
        ranking: ranking_or_fallback(user.profile.ranking),
        reputation: user.profile.reputation,
        star_rating: user.profile.star_rating,
        avatar: user.profile.user_avatar,
    })
}

fn extract_solved(counts: &[DifficultyCount]) -> SolvedCounts {
    let count_for = |difficulty: &str| {
        counts
            .iter()
            .find(|entry| entry.difficulty.as_deref() == Some(difficulty))
            .map(|entry| parse_count(&entry.count))
            .unwrap_or(0)
    };

    SolvedCounts {
        total: count_for("All"),
        easy: count_for("Easy"),
        medium: count_for("Medium"),
        hard: count_for("Hard"),
    }
}

/// Read a count given either as a JSON number or as a string with a leading
/// integer; anything else counts as zero
fn parse_count(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => parse_leading_int(s).unwrap_or(0),
        _ => 0,
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
