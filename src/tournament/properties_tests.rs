//! Property-based tests over arbitrary rosters and match histories.

use super::*;
use crate::models::match_report::Match;
use crate::models::player::Player;
use crate::tournament::fixtures::{played, player};
use proptest::prelude::*;
use std::collections::HashSet;

/// A roster of `size` players with ids 1..=size and a random history of
/// matches between distinct roster members.
fn tournament(max_players: usize) -> impl Strategy<Value = (Vec<Player>, Vec<Match>)> {
    (0..=max_players).prop_flat_map(|size| {
        let bound = size.max(1);
        prop::collection::vec((0..bound, 0..bound), 0..80).prop_map(move |results| {
            let players: Vec<Player> = (1..=size as i32)
                .map(|id| player(id, &format!("Player {id}")))
                .collect();
            let matches: Vec<Match> = results
                .into_iter()
                .filter(|(winner, loser)| size > 1 && winner != loser)
                .zip(1..)
                .map(|((winner, loser), id)| played(id, winner as i32 + 1, loser as i32 + 1))
                .collect();
            (players, matches)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_even_roster_is_fully_paired((players, matches) in tournament(40)) {
        prop_assume!(players.len() % 2 == 0);
        let standings = compute_standings(&players, &matches);
        let pairings = compute_pairings(&standings).unwrap();

        prop_assert_eq!(pairings.len(), players.len() / 2);

        let mut seen = HashSet::new();
        for pairing in &pairings {
            prop_assert_ne!(pairing.id1, pairing.id2);
            prop_assert!(seen.insert(pairing.id1), "player {} paired twice", pairing.id1);
            prop_assert!(seen.insert(pairing.id2), "player {} paired twice", pairing.id2);
        }
        let roster: HashSet<i32> = players.iter().map(|p| p.id).collect();
        prop_assert_eq!(seen, roster);
    }

    #[test]
    fn prop_odd_roster_is_rejected((players, matches) in tournament(41)) {
        prop_assume!(players.len() % 2 == 1);
        let standings = compute_standings(&players, &matches);
        prop_assert_eq!(
            compute_pairings(&standings),
            Err(InvalidRosterError { players: players.len() })
        );
    }

    #[test]
    fn prop_standings_are_deterministic((players, matches) in tournament(30)) {
        prop_assert_eq!(
            compute_standings(&players, &matches),
            compute_standings(&players, &matches)
        );
    }

    #[test]
    fn prop_standings_records_are_consistent((players, matches) in tournament(30)) {
        let standings = compute_standings(&players, &matches);

        prop_assert_eq!(standings.len(), players.len());
        for row in &standings {
            prop_assert!(row.wins <= row.matches);
        }
        let total_wins: u32 = standings.iter().map(|row| row.wins).sum();
        prop_assert_eq!(total_wins as usize, matches.len());
        let total_played: u32 = standings.iter().map(|row| row.matches).sum();
        prop_assert_eq!(total_played as usize, matches.len() * 2);
    }

    #[test]
    fn prop_standings_are_ranked((players, matches) in tournament(30)) {
        let standings = compute_standings(&players, &matches);
        for window in standings.windows(2) {
            let (above, below) = (&window[0], &window[1]);
            prop_assert!(
                above.wins > below.wins || (above.wins == below.wins && above.id < below.id)
            );
        }
    }

    #[test]
    fn prop_pairings_join_nearest_records((players, matches) in tournament(40)) {
        prop_assume!(players.len() % 2 == 0);
        let standings = compute_standings(&players, &matches);
        let pairings = compute_pairings(&standings).unwrap();

        for (pairing, pair) in pairings.iter().zip(standings.chunks_exact(2)) {
            prop_assert_eq!(pairing.id1, pair[0].id);
            prop_assert_eq!(pairing.id2, pair[1].id);
            prop_assert!(pair[0].wins >= pair[1].wins);
        }
    }
}
