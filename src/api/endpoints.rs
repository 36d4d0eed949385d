// Relative endpoint paths, resolved against BASE_URL by the client.
use urlencoding::encode;

pub const BASE_URL: &str = "https://cod-api.theapinetwork.com/api/";

pub fn validate(game: &str, username: &str, platform: &str) -> String {
    format!(
        "validate/{}/{}/{}",
        encode(game),
        encode(username),
        encode(platform)
    )
}

pub fn user_stats(game: &str, username: &str, platform: &str, match_type: &str) -> String {
    format!(
        "stats/{}/{}/{}?type={}",
        encode(game),
        encode(username),
        encode(platform),
        encode(match_type)
    )
}

pub fn recent_matches(rows: u32) -> String {
    format!("matches/recent?rows={}", rows)
}

pub fn match_by_id(mid: &str) -> String {
    format!("matches/get?mid={}", encode(mid))
}

pub fn leaderboard(game: &str, platform: &str, scope: &str, rows: u32) -> String {
    format!(
        "leaderboard/{}/{}/{}?rows={}",
        encode(game),
        encode(platform),
        encode(scope),
        rows
    )
}

/// Ids become repeated `id=` parameters in call order.
pub fn user_names(ids: &[u64]) -> String {
    let query = ids
        .iter()
        .map(|id| format!("id={}", id))
        .collect::<Vec<_>>()
        .join("&");

    format!("users/ids?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_escapes_username() {
        assert_eq!(validate("bo4", "a b", "psn"), "validate/bo4/a%20b/psn");
    }

    #[test]
    fn user_stats_carries_match_type() {
        assert_eq!(
            user_stats("bo4", "Player#123", "battle", "blackout"),
            "stats/bo4/Player%23123/battle?type=blackout"
        );
    }

    #[test]
    fn user_stats_escapes_reserved_characters() {
        assert_eq!(
            user_stats("bo4", "a/b?c", "psn", "multi player"),
            "stats/bo4/a%2Fb%3Fc/psn?type=multi%20player"
        );
    }

    #[test]
    fn recent_matches_rows() {
        assert_eq!(recent_matches(25), "matches/recent?rows=25");
    }

    #[test]
    fn match_by_id_escapes_mid() {
        assert_eq!(match_by_id("123 456"), "matches/get?mid=123%20456");
        assert_eq!(match_by_id("9981"), "matches/get?mid=9981");
    }

    #[test]
    fn leaderboard_path() {
        assert_eq!(
            leaderboard("bo4", "psn", "weekly", 10),
            "leaderboard/bo4/psn/weekly?rows=10"
        );
    }

    #[test]
    fn user_names_repeats_id_in_order() {
        assert_eq!(user_names(&[1, 2, 3]), "users/ids?id=1&id=2&id=3");
        assert_eq!(user_names(&[42]), "users/ids?id=42");
        assert_eq!(user_names(&[3, 1, 3]), "users/ids?id=3&id=1&id=3");
    }

    #[test]
    fn user_names_without_ids_has_empty_query() {
        assert_eq!(user_names(&[]), "users/ids?");
    }
}
