//! Valuation ranking for the draft pool.

use crate::types::player::Player;

/// Default mid-tier score for goalies with no recorded statistics.
///
/// A tuning parameter, not a structural constant: callers with a different
/// scoring scale should set their own baseline through
/// [`DraftSettings`](crate::draft::DraftSettings).
pub const DEFAULT_GOALIE_BASELINE: f64 = 50.0;

/// The score a player is ranked by.
///
/// A goalie with a valuation of exactly zero has no recorded statistics and
/// receives the baseline instead, so the position stays draftable rather
/// than sinking to the bottom of the pool.
pub fn effective_valuation(player: &Player, goalie_baseline: f64) -> f64 {
    if player.position.is_goalie() && player.valuation == 0.0 {
        goalie_baseline
    } else {
        player.valuation
    }
}

/// Ranks the pool by effective valuation, descending.
///
/// Ties are broken by ascending player id, making the order total: the same
/// pool always ranks the same way, which is what keeps a re-run draft
/// reproducible.
pub fn rank_players(mut players: Vec<Player>, goalie_baseline: f64) -> Vec<Player> {
    players.sort_by(|a, b| {
        effective_valuation(b, goalie_baseline)
            .total_cmp(&effective_valuation(a, goalie_baseline))
            .then_with(|| a.id.cmp(&b.id))
    });
    players
}
