use chrono::DateTime;
use cod_stats::{
    Leaderboard, MatchDetails, MatchEntry, RecentMatches, UserNames, UserStats, Validation,
};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct MatchRow {
    mid: String,
    started: String,
    duration: String,
    mode: String,
    map: String,
    score: String,
    players: String,
}

#[derive(Tabled)]
struct PlayerRow {
    uid: String,
    team: String,
    position: String,
    kills: String,
    deaths: String,
    ekia: String,
    assists: String,
    headshots: String,
    accuracy: String,
}

#[derive(Tabled)]
struct ModeRow {
    mode: String,
    games: String,
    wins: String,
    kills: String,
    deaths: String,
    ekia: String,
}

#[derive(Tabled)]
struct WeaponRow {
    weapon: String,
    kills: String,
    headshots: String,
    used: String,
    damage: String,
}

#[derive(Tabled)]
struct LeaderboardRow {
    #[tabled(rename = "#")]
    rank: String,
    player: String,
    level: String,
    kills: String,
    deaths: String,
    ekia: String,
    wins: String,
}

#[derive(Tabled)]
struct UserRow {
    id: String,
    username: String,
    platform: String,
}

fn format_timestamp(epoch_secs: i64) -> String {
    if epoch_secs <= 0 {
        return "-".to_string();
    }
    DateTime::from_timestamp(epoch_secs, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| epoch_secs.to_string())
}

fn format_duration(secs: i64) -> String {
    format!("{}m {:02}s", secs / 60, secs % 60)
}

fn header(title: &str) {
    println!("\n{}", title.bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());
}

fn print_table<T: Tabled>(rows: Vec<T>) {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_validation(validation: &Validation) {
    if validation.success {
        println!(
            "{} {} exists (id {})",
            "✓".green(),
            validation.username,
            validation.id
        );
    } else {
        println!("{} player not found", "✗".red());
    }
}

pub fn display_user_stats(stats: &UserStats) {
    let user = &stats.user;
    let block = &stats.stats;

    header(&format!("🎮 {} ({}) - {}", user.username, user.platform, stats.match_type));

    println!(
        "{} level {} / {}, prestige {} / {}",
        "📈 Progress:".bold(),
        block.level,
        block.max_level,
        block.prestige,
        block.max_prestige
    );
    println!(
        "{} {} W / {} L ({:.1}% WR) over {} games",
        "🏆 Record:".bold(),
        block.wins.to_string().green(),
        block.losses.to_string().red(),
        block.win_rate() * 100.0,
        block.games_played
    );
    println!(
        "{} {} kills, {} deaths ({:.2} K/D), {} EKIA, best streak {}",
        "🎯 Combat:".bold(),
        block.kills,
        block.deaths,
        block.kd_ratio(),
        block.ekia,
        block.longest_kill_streak
    );
    if !block.weapon_data.is_empty() {
        println!("{} {}", "🔫 Favourite weapon:".bold(), block.weapon_data);
    }
    println!();

    if !stats.matches.is_empty() {
        println!("{}", "Per mode".bold().yellow());
        let rows = stats
            .matches
            .iter()
            .map(|m| ModeRow {
                mode: m.identifier.clone(),
                games: m.games_played.to_string(),
                wins: m.wins.to_string(),
                kills: m.kills.to_string(),
                deaths: m.deaths.to_string(),
                ekia: m.ekia.to_string(),
            })
            .collect();
        print_table::<ModeRow>(rows);
    }

    if !stats.weapon_data.is_empty() {
        println!("{}", "Weapons".bold().yellow());
        let mut weapons: Vec<_> = stats.weapon_data.iter().collect();
        weapons.sort_by(|a, b| b.kills.cmp(&a.kills));
        let rows = weapons
            .into_iter()
            .map(|w| WeaponRow {
                weapon: if w.name.is_empty() {
                    w.identifier.clone()
                } else {
                    w.name.clone()
                },
                kills: w.kills.to_string(),
                headshots: w.headshots.to_string(),
                used: w.used.to_string(),
                damage: w.damage_done.to_string(),
            })
            .collect();
        print_table::<WeaponRow>(rows);
    }
}

fn match_row(entry: &MatchEntry) -> MatchRow {
    let score = &entry.teams.team_score;
    MatchRow {
        mid: entry.mid.clone(),
        started: format_timestamp(entry.utc_start),
        duration: format_duration(entry.match_info.match_duration),
        mode: entry.match_info.match_mode.clone(),
        map: entry.match_info.match_map_id.clone(),
        score: format!("{} - {}", score.team1, score.team2),
        players: entry.player_entries.len().to_string(),
    }
}

pub fn display_recent_matches(matches: &RecentMatches) {
    header(&format!(
        "📊 RECENT MATCHES ({} {})",
        matches.game, matches.platform
    ));

    if matches.entries.is_empty() {
        println!("{}", "No matches returned".yellow());
        return;
    }

    print_table(matches.entries.iter().map(match_row).collect());
}

pub fn display_match(mid: &str, details: &MatchDetails) {
    let Some(entry) = details.entry() else {
        println!("{} no data for match {}", "✗".red(), mid);
        return;
    };

    header(&format!("📊 MATCH {}", entry.mid));
    print_table(vec![match_row(entry)]);

    println!(
        "{} team {}",
        "🏆 Winner:".bold(),
        entry.teams.winning_team.to_string().green()
    );

    let mut players: Vec<_> = entry.player_entries.iter().collect();
    players.sort_by_key(|p| (p.team, p.position));
    let rows = players
        .into_iter()
        .map(|p| {
            let accuracy = if p.shots_fired == 0 {
                "-".to_string()
            } else {
                format!("{:.1}%", p.shots_landed as f64 / p.shots_fired as f64 * 100.0)
            };
            PlayerRow {
                uid: p.uid.to_string(),
                team: p.team.to_string(),
                position: p.position.to_string(),
                kills: p.kills.to_string(),
                deaths: p.deaths.to_string(),
                ekia: p.ekia.to_string(),
                assists: p.assists.to_string(),
                headshots: p.headshots.to_string(),
                accuracy,
            }
        })
        .collect();
    print_table::<PlayerRow>(rows);
}

pub fn display_leaderboard(leaderboard: &Leaderboard) {
    header(&format!(
        "🏆 LEADERBOARD {} {} ({})",
        leaderboard.game, leaderboard.platform, leaderboard.scope
    ));

    if leaderboard.entries.is_empty() {
        println!("{}", "Leaderboard is empty".yellow());
        return;
    }

    let rows = leaderboard
        .entries
        .iter()
        .map(|e| LeaderboardRow {
            rank: e.rank.to_string(),
            player: e.username.clone(),
            level: format!("{} (P{})", e.level, e.prestige),
            kills: e.kills.to_string(),
            deaths: e.deaths.to_string(),
            ekia: e.ekia.to_string(),
            wins: e.wins.to_string(),
        })
        .collect();
    print_table::<LeaderboardRow>(rows);
}

pub fn display_user_names(names: &UserNames) {
    if names.users.is_empty() {
        println!("{}", "No users found".yellow());
        return;
    }

    let rows = names
        .users
        .iter()
        .map(|u| UserRow {
            id: u.id.to_string(),
            username: u.username.clone(),
            platform: u.platform.clone(),
        })
        .collect();
    print_table::<UserRow>(rows);
}
