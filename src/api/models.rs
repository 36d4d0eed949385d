use serde::{Deserialize, Deserializer, Serialize};

// Every DTO defaults missing or null fields and ignores unknown ones, the
// upstream schema is loose and differs between games.

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// validate/{game}/{username}/{platform}
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Validation {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
}

// stats/{game}/{username}/{platform}
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UserStats {
    #[serde(deserialize_with = "null_as_default")]
    pub identifier: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub match_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user: UserProfile,
    #[serde(deserialize_with = "null_as_default")]
    pub cache: CacheInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub stats: StatBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub matches: Vec<MatchSummary>,
    #[serde(rename = "lastmatch", deserialize_with = "null_as_default")]
    pub last_match: LastMatch,
    #[serde(rename = "weapondata", deserialize_with = "null_as_default")]
    pub weapon_data: Vec<WeaponUsage>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UserProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub avatar: String,
}

/// Upstream cache window for the stats payload, epoch seconds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub expire: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub interval: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StatBlock {
    #[serde(deserialize_with = "null_as_default")]
    pub level: i64,
    #[serde(rename = "maxlevel", deserialize_with = "null_as_default")]
    pub max_level: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub prestige: i64,
    #[serde(rename = "prestigeid", deserialize_with = "null_as_default")]
    pub prestige_id: i64,
    #[serde(rename = "maxprestige", deserialize_with = "null_as_default")]
    pub max_prestige: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub kills: i64,
    #[serde(rename = "killsconfirmed", deserialize_with = "null_as_default")]
    pub kills_confirmed: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub deaths: i64,
    #[serde(rename = "gamesplayed", deserialize_with = "null_as_default")]
    pub games_played: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub wins: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub losses: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub melee: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub hits: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub misses: i64,
    #[serde(rename = "rankxp", deserialize_with = "null_as_default")]
    pub rank_xp: i64,
    #[serde(rename = "careerscore", deserialize_with = "null_as_default")]
    pub career_score: i64,
    #[serde(rename = "totalheals", deserialize_with = "null_as_default")]
    pub total_heals: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ekia: i64,
    #[serde(rename = "longestkillstreak", deserialize_with = "null_as_default")]
    pub longest_kill_streak: i64,
    #[serde(rename = "curwinstreak", deserialize_with = "null_as_default")]
    pub cur_win_streak: i64,
    #[serde(rename = "totalshots", deserialize_with = "null_as_default")]
    pub total_shots: i64,
    #[serde(rename = "teamkills", deserialize_with = "null_as_default")]
    pub team_kills: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub suicides: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub offends: i64,
    #[serde(rename = "killsdenied", deserialize_with = "null_as_default")]
    pub kills_denied: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub captures: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub defends: i64,
    #[serde(rename = "timeplayed", deserialize_with = "null_as_default")]
    pub time_played: i64,
    // Name of the most used weapon, the breakdown lives in UserStats::weapon_data
    #[serde(rename = "weapondata", deserialize_with = "null_as_default")]
    pub weapon_data: String,
}

impl StatBlock {
    pub fn kd_ratio(&self) -> f64 {
        if self.deaths == 0 {
            self.kills as f64
        } else {
            self.kills as f64 / self.deaths as f64
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.wins as f64 / self.games_played as f64
        }
    }
}

/// Per game-mode totals.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub identifier: String,
    #[serde(deserialize_with = "null_as_default")]
    pub kills: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub deaths: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ekia: i64,
    #[serde(rename = "gamesplayed", deserialize_with = "null_as_default")]
    pub games_played: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub wins: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub losses: i64,
    #[serde(rename = "totalshots", deserialize_with = "null_as_default")]
    pub total_shots: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub captures: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub defends: i64,
    #[serde(rename = "careerscore", deserialize_with = "null_as_default")]
    pub career_score: i64,
    #[serde(rename = "timeplayed", deserialize_with = "null_as_default")]
    pub time_played: i64,
    #[serde(rename = "rankxp", deserialize_with = "null_as_default")]
    pub rank_xp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LastMatch {
    #[serde(deserialize_with = "null_as_default")]
    pub identifier: String,
    #[serde(deserialize_with = "null_as_default")]
    pub kills: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub deaths: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ekia: i64,
    #[serde(rename = "gamesplayed", deserialize_with = "null_as_default")]
    pub games_played: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub wins: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub losses: i64,
    #[serde(rename = "totalshots", deserialize_with = "null_as_default")]
    pub total_shots: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub captures: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub defends: i64,
    #[serde(rename = "careerscore", deserialize_with = "null_as_default")]
    pub career_score: i64,
    // upstream spells it "timesplayed" here, unlike MatchSummary
    #[serde(rename = "timesplayed", deserialize_with = "null_as_default")]
    pub times_played: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WeaponUsage {
    #[serde(deserialize_with = "null_as_default")]
    pub identifier: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub kills: i64,
    #[serde(rename = "backstabberkills", deserialize_with = "null_as_default")]
    pub backstabber_kills: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub deaths: i64,
    #[serde(rename = "timesused", deserialize_with = "null_as_default")]
    pub times_used: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub used: i64,
    #[serde(rename = "deathsduringuse", deserialize_with = "null_as_default")]
    pub deaths_during_use: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub hits: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ekia: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub destroyed: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub headshots: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub shots: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub assists: i64,
    #[serde(rename = "damagedone", deserialize_with = "null_as_default")]
    pub damage_done: i64,
}

// matches/recent?rows={n}
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RecentMatches {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub rows: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub game: String,
    #[serde(deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(alias = "Entries", deserialize_with = "null_as_default")]
    pub entries: Vec<MatchEntry>,
}

// matches/get?mid={id}
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub game: String,
    #[serde(deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(alias = "Entries", deserialize_with = "null_as_default")]
    pub entries: Vec<MatchEntry>,
}

impl MatchDetails {
    pub fn entry(&self) -> Option<&MatchEntry> {
        self.entries.first()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub mid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub utc_start: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub utc_end: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub match_info: MatchInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub teams: Teams,
    #[serde(deserialize_with = "null_as_default")]
    pub player_entries: Vec<PlayerEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub match_duration: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub match_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub match_map_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub match_mode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Teams {
    #[serde(alias = "TeamScore", deserialize_with = "null_as_default")]
    pub team_score: TeamScore,
    #[serde(deserialize_with = "null_as_default")]
    pub winning_team: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TeamScore {
    #[serde(deserialize_with = "null_as_default")]
    pub team1: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub team2: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub uid: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub prestige: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub rank: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub team: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub position: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub kills: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub deaths: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ekia: i64,
    #[serde(rename = "highestkillstreak", deserialize_with = "null_as_default")]
    pub highest_kill_streak: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub assists: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub headshots: i64,
    #[serde(rename = "shotsfired", deserialize_with = "null_as_default")]
    pub shots_fired: i64,
    #[serde(rename = "shotslanded", deserialize_with = "null_as_default")]
    pub shots_landed: i64,
    #[serde(rename = "shotsmissed", deserialize_with = "null_as_default")]
    pub shots_missed: i64,
}

// leaderboard/{game}/{platform}/{scope}?rows={n}
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Leaderboard {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub rows: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub game: String,
    #[serde(deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(deserialize_with = "null_as_default")]
    pub scope: String,
    #[serde(deserialize_with = "null_as_default")]
    pub entries: Vec<LeaderboardEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LeaderboardEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub rank: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub uid: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(deserialize_with = "null_as_default")]
    pub level: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub prestige: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub kills: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub deaths: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ekia: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub wins: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub losses: i64,
    #[serde(rename = "gamesplayed", deserialize_with = "null_as_default")]
    pub games_played: i64,
    #[serde(rename = "careerscore", deserialize_with = "null_as_default")]
    pub career_score: i64,
    #[serde(rename = "timeplayed", deserialize_with = "null_as_default")]
    pub time_played: i64,
}

// users/ids?id={u1}&id={u2}...
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UserNames {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub users: Vec<UserName>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UserName {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub platform: String,
}
