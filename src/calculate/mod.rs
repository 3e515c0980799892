//! Standings calculation engine.
//!
//! Aggregates match records into per-team statistics and ranks them:
//! - One linear pass over the match list, splitting played from upcoming
//! - Symmetric per-side stat updates with per-team match history
//! - Stable two-level sort: points, then set differential
//!
//! Pure functions of (roster, matches); no I/O and no ambient state.

use std::collections::HashMap;

use crate::models::{HistoryEntry, MatchOutcome, MatchRecord, Roster, Standings, TeamStats};

/// Compute ranked standings from the full match list.
///
/// Every roster team appears in the output, zeroed if it has not played.
/// Matches referencing teams outside the roster update nothing for that
/// side. The sort is stable, so teams tied on points and set differential
/// keep roster order, and recomputation on identical input is identical.
pub fn compute_standings(roster: &Roster, matches: &[MatchRecord]) -> Standings {
    // Stats in roster order; the index map keeps the update rule O(1)
    // without losing that order.
    let mut teams: Vec<TeamStats> = roster.iter().map(TeamStats::zeroed).collect();
    let index: HashMap<&str, usize> = roster
        .iter()
        .enumerate()
        .map(|(i, name)| (name, i))
        .collect();

    let mut results = Vec::new();
    let mut upcoming = Vec::new();

    for m in matches {
        if !m.played {
            upcoming.push(m.clone());
            continue;
        }

        record_side(&mut teams, &index, &m.t1, m.s1, m.s2, &m.t2, m.id);
        record_side(&mut teams, &index, &m.t2, m.s2, m.s1, &m.t1, m.id);
        results.push(m.clone());
    }

    teams.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.set_difference().cmp(&a.set_difference()))
    });

    Standings::new(teams, results, upcoming)
}

/// Apply one completed match to one side.
///
/// A team missing from the roster index is skipped silently. Equal scores
/// fall into the lost branch for both sides; set counts cannot tie in this
/// domain, so the case never produces a ranked draw.
fn record_side(
    teams: &mut [TeamStats],
    index: &HashMap<&str, usize>,
    team: &str,
    own_score: u32,
    opp_score: u32,
    opponent: &str,
    match_id: u32,
) {
    let Some(&i) = index.get(team) else {
        return;
    };
    let stats = &mut teams[i];

    stats.matches += 1;
    stats.sets_for += own_score;
    stats.sets_against += opp_score;

    let outcome = if own_score > opp_score {
        stats.won += 1;
        stats.points += 2;
        MatchOutcome::Won
    } else {
        stats.lost += 1;
        MatchOutcome::Lost
    };

    stats.history.push(HistoryEntry {
        match_id,
        opponent: opponent.to_string(),
        score_own: own_score,
        score_opp: opp_score,
        outcome,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn roster(names: &[&str]) -> Roster {
        Roster::from(names)
    }

    #[test]
    fn test_single_played_match() {
        let standings = compute_standings(
            &roster(&["A", "B"]),
            &[MatchRecord::played(1, "A", "B", 3, 1)],
        );

        let a = standings.team("A").unwrap();
        assert_eq!((a.matches, a.won, a.lost, a.points), (1, 1, 0, 2));
        assert_eq!((a.sets_for, a.sets_against), (3, 1));

        let b = standings.team("B").unwrap();
        assert_eq!((b.matches, b.won, b.lost, b.points), (1, 0, 1, 0));
        assert_eq!((b.sets_for, b.sets_against), (1, 3));

        // Winner ranks first
        assert_eq!(standings.teams[0].name, "A");
        assert_eq!(standings.teams[1].name, "B");
    }

    #[test]
    fn test_upcoming_match_leaves_stats_untouched() {
        let standings = compute_standings(
            &roster(&["A", "B"]),
            &[MatchRecord::scheduled(2, "A", "B")],
        );

        for team in &standings.teams {
            assert_eq!(team.matches, 0);
            assert!(team.history.is_empty());
        }
        assert!(standings.results.is_empty());
        assert_eq!(standings.upcoming.len(), 1);
        assert_eq!(standings.upcoming[0].id, 2);
    }

    #[test]
    fn test_history_records_both_perspectives() {
        let standings = compute_standings(
            &roster(&["A", "B"]),
            &[MatchRecord::played(5, "A", "B", 3, 2)],
        );

        let a = &standings.team("A").unwrap().history[0];
        assert_eq!(a.match_id, 5);
        assert_eq!(a.opponent, "B");
        assert_eq!((a.score_own, a.score_opp), (3, 2));
        assert_eq!(a.outcome, MatchOutcome::Won);

        let b = &standings.team("B").unwrap().history[0];
        assert_eq!(b.opponent, "A");
        assert_eq!((b.score_own, b.score_opp), (2, 3));
        assert_eq!(b.outcome, MatchOutcome::Lost);
    }

    #[test]
    fn test_points_ranking_beats_set_difference() {
        // B has a huge set differential but fewer points than A.
        let standings = compute_standings(
            &roster(&["A", "B", "C"]),
            &[
                MatchRecord::played(1, "B", "C", 5, 0),
                MatchRecord::played(2, "A", "C", 2, 1),
                MatchRecord::played(3, "A", "B", 2, 1),
            ],
        );

        let order: Vec<&str> = standings.teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_set_difference_breaks_point_ties() {
        // A and B both 1-1, but A's differential is better.
        let standings = compute_standings(
            &roster(&["A", "B", "C", "D"]),
            &[
                MatchRecord::played(1, "A", "C", 3, 0),
                MatchRecord::played(2, "B", "C", 2, 1),
                MatchRecord::played(3, "D", "A", 2, 1),
                MatchRecord::played(4, "D", "B", 2, 1),
            ],
        );

        let a_pos = standings.teams.iter().position(|t| t.name == "A").unwrap();
        let b_pos = standings.teams.iter().position(|t| t.name == "B").unwrap();
        assert_eq!(standings.team("A").unwrap().points, 2);
        assert_eq!(standings.team("B").unwrap().points, 2);
        assert!(a_pos < b_pos);
    }

    #[test]
    fn test_full_ties_keep_roster_order() {
        let standings = compute_standings(&roster(&["C", "A", "B"]), &[]);
        let order: Vec<&str> = standings.teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_unknown_team_is_skipped_silently() {
        let standings = compute_standings(
            &roster(&["A", "B"]),
            &[MatchRecord::played(1, "A", "Ghosts", 3, 1)],
        );

        // A still gets credit; the unknown side updates nothing.
        let a = standings.team("A").unwrap();
        assert_eq!(a.won, 1);
        assert!(standings.team("Ghosts").is_none());

        let b = standings.team("B").unwrap();
        assert_eq!(b.matches, 0);

        // The match itself still shows up as a result card.
        assert_eq!(standings.results.len(), 1);
    }

    #[test]
    fn test_equal_scores_count_as_loss_for_both() {
        let standings = compute_standings(
            &roster(&["A", "B"]),
            &[MatchRecord::played(1, "A", "B", 2, 2)],
        );

        for name in ["A", "B"] {
            let t = standings.team(name).unwrap();
            assert_eq!(t.won, 0);
            assert_eq!(t.lost, 1);
            assert_eq!(t.points, 0);
            assert_eq!(t.history[0].outcome, MatchOutcome::Lost);
        }
    }

    #[test]
    fn test_wins_and_losses_sum_to_played_matches() {
        let matches = vec![
            MatchRecord::played(1, "A", "B", 3, 1),
            MatchRecord::played(2, "C", "A", 0, 2),
            MatchRecord::played(3, "B", "C", 3, 2),
            MatchRecord::scheduled(4, "A", "C"),
        ];
        let standings = compute_standings(&roster(&["A", "B", "C"]), &matches);

        let played = standings.results.len() as u32;
        let won: u32 = standings.teams.iter().map(|t| t.won).sum();
        let lost: u32 = standings.teams.iter().map(|t| t.lost).sum();
        assert_eq!(won, played);
        assert_eq!(lost, played);

        for t in &standings.teams {
            assert_eq!(t.matches, t.won + t.lost);
            assert_eq!(t.matches as usize, t.history.len());
            assert_eq!(t.points, 2 * t.won);
        }
    }

    #[test]
    fn test_recomputation_is_identical() {
        let matches = vec![
            MatchRecord::played(1, "A", "B", 3, 1),
            MatchRecord::played(2, "B", "C", 2, 1),
            MatchRecord::scheduled(3, "C", "A"),
        ];
        let r = roster(&["A", "B", "C"]);

        let first = compute_standings(&r, &matches);
        let second = compute_standings(&r, &matches);
        assert_eq!(first.teams, second.teams);
        assert_eq!(first.results, second.results);
        assert_eq!(first.upcoming, second.upcoming);
    }

    #[test]
    fn test_partitions_keep_input_order() {
        let matches = vec![
            MatchRecord::scheduled(9, "A", "B"),
            MatchRecord::played(4, "A", "B", 1, 3),
            MatchRecord::scheduled(2, "B", "C"),
            MatchRecord::played(7, "C", "A", 2, 0),
        ];
        let standings = compute_standings(&roster(&["A", "B", "C"]), &matches);

        let result_ids: Vec<u32> = standings.results.iter().map(|m| m.id).collect();
        let upcoming_ids: Vec<u32> = standings.upcoming.iter().map(|m| m.id).collect();
        assert_eq!(result_ids, vec![4, 7]);
        assert_eq!(upcoming_ids, vec![9, 2]);
    }

    #[test]
    fn test_empty_inputs() {
        let standings = compute_standings(&roster(&[]), &[]);
        assert!(standings.teams.is_empty());
        assert!(standings.results.is_empty());
        assert!(standings.upcoming.is_empty());
    }
}
