use crate::analysis_types::{PlayerStat, TeamStat};
use crate::match_reader::CheckedMatch;
use crate::stat_collection::Accumulator;

/// Running player-of-the-match scores for a single fixture, kept in the order players
/// first earned points.
#[derive(Debug, Default)]
pub struct MatchScores<'a> {
    scores: Vec<(&'a str, u32)>,
}

impl<'a> MatchScores<'a> {
    pub fn credit(&mut self, player: &'a str, points: u32) {
        if points == 0 {
            return;
        }
        match self.scores.iter_mut().find(|(name, _)| *name == player) {
            Some((_, score)) => *score += points,
            None => self.scores.push((player, points)),
        }
    }

    pub fn score_of(&self, player: &str) -> u32 {
        self.scores
            .iter()
            .find(|(name, _)| *name == player)
            .map_or(0, |&(_, score)| score)
    }

    /// The player with the strictly highest score. An equal score later in the order never
    /// displaces the current leader.
    pub fn leader(&self) -> Option<&'a str> {
        let mut best: Option<(&'a str, u32)> = None;
        for &(player, score) in &self.scores {
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((player, score));
            }
        }
        best.map(|(player, _)| player)
    }
}

/// Folds one validated match into the running team and player tables and returns its
/// player of the match, if anybody scored points.
pub fn process_match<'a>(
    fixture: &CheckedMatch<'a>,
    teams: &mut Accumulator<TeamStat>,
    players: &mut Accumulator<PlayerStat>,
) -> Option<&'a str> {
    teams
        .get_or_init(fixture.home)
        .record_result(fixture.home_score, fixture.away_score);
    teams
        .get_or_init(fixture.away)
        .record_result(fixture.away_score, fixture.home_score);

    let mut scores = MatchScores::default();
    for event in &fixture.events {
        let Some(player) = event.player else {
            continue;
        };
        players.get_or_init(player).record(event.kind);
        scores.credit(player, event.kind.mvp_weight());
    }

    let mvp = scores.leader()?;
    players.get_or_init(mvp).mvp_count += 1;
    Some(mvp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use crate::testing::MatchBuilder;

    fn run(record: &crate::match_reader::Match) -> (Accumulator<TeamStat>, Accumulator<PlayerStat>, Option<String>) {
        let mut teams = Accumulator::default();
        let mut players = Accumulator::default();
        let fixture = record.validate().unwrap();
        let mvp = process_match(&fixture, &mut teams, &mut players).map(str::to_string);
        (teams, players, mvp)
    }

    #[test]
    fn scores_credit_in_first_scoring_order() {
        let mut scores = MatchScores::default();
        scores.credit("Rice", 0);
        scores.credit("Saka", 2);
        scores.credit("Rice", 2);
        scores.credit("Saka", 1);
        assert_eq!(3, scores.score_of("Saka"));
        assert_eq!(2, scores.score_of("Rice"));
        assert_eq!(0, scores.score_of("Odegaard"));
        assert_eq!(Some("Saka"), scores.leader());
    }

    #[test]
    fn no_leader_without_points() {
        let mut scores = MatchScores::default();
        scores.credit("Rice", 0);
        assert_eq!(None, scores.leader());
    }

    #[test]
    fn goal_plus_assist_beats_goal() {
        let record = MatchBuilder::new("m1", "Arsenal", "Chelsea")
            .score(1, 1)
            .goal("B", "Chelsea")
            .goal("A", "Arsenal")
            .assist("A", "Arsenal")
            .build();
        let (_, players, mvp) = run(&record);
        assert_eq!(Some("A".to_string()), mvp);
        assert_eq!(1, players.get("A").unwrap().mvp_count);
        assert_eq!(0, players.get("B").unwrap().mvp_count);
    }

    #[test]
    fn equal_scores_keep_first_leader() {
        let record = MatchBuilder::new("m1", "Arsenal", "Chelsea")
            .score(1, 1)
            .goal("Havertz", "Arsenal")
            .goal("Palmer", "Chelsea")
            .build();
        let (_, _, mvp) = run(&record);
        assert_eq!(Some("Havertz".to_string()), mvp);
    }

    #[test]
    fn later_strictly_higher_score_wins() {
        let record = MatchBuilder::new("m1", "Arsenal", "Chelsea")
            .score(0, 0)
            .event(EventKind::WarningAvoided, "White", "Arsenal")
            .event(EventKind::PenaltySaved, "Sanchez", "Chelsea")
            .build();
        let (_, players, mvp) = run(&record);
        assert_eq!(Some("Sanchez".to_string()), mvp);
        assert_eq!(1, players.get("Sanchez").unwrap().saved_penalties);
        assert_eq!(PlayerStat::default(), *players.get("White").unwrap());
    }

    #[test]
    fn no_mvp_without_scoring_events() {
        let record = MatchBuilder::new("m1", "Arsenal", "Chelsea")
            .score(0, 0)
            .event(EventKind::Warning, "Rice", "Arsenal")
            .event(EventKind::Penalty, "Jackson", "Chelsea")
            .build();
        let (_, players, mvp) = run(&record);
        assert_eq!(None, mvp);
        assert_eq!(1, players.get("Rice").unwrap().warnings);
        assert_eq!(1, players.get("Jackson").unwrap().penalties);
        assert!(players.iter().all(|(_, stat)| stat.mvp_count == 0));
    }

    #[test]
    fn events_with_blank_player_are_skipped() {
        let record = MatchBuilder::new("m1", "Arsenal", "Chelsea")
            .score(1, 0)
            .event(EventKind::Goal, "", "Arsenal")
            .build();
        let (_, players, mvp) = run(&record);
        assert_eq!(None, mvp);
        assert!(players.is_empty());
    }

    #[test]
    fn events_without_player_are_skipped() {
        let mut record = MatchBuilder::new("m1", "Arsenal", "Chelsea")
            .score(2, 0)
            .goal("unnamed", "Arsenal")
            .event(EventKind::PenaltySaved, "unnamed", "Arsenal")
            .goal("Saka", "Arsenal")
            .build();
        record.events[0].player = None;
        record.events[1].player = None;
        let (teams, players, mvp) = run(&record);
        assert_eq!(Some("Saka".to_string()), mvp);
        assert_eq!(vec!["Saka"], players.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>());
        assert_eq!(1, players.get("Saka").unwrap().goals);
        assert_eq!(2, teams.get("Arsenal").unwrap().goals_for);

        let stored: crate::match_reader::Match = serde_json::from_value(serde_json::json!({
            "id": "m2",
            "date": "2024-03-10T15:00:00Z",
            "teams": {"home": "Arsenal", "away": "Chelsea"},
            "score": {"home": 1, "away": 0},
            "events": [
                {"type": "goal", "player": null, "team": "Arsenal"},
                {"type": "penaltySaved", "team": "Chelsea"}
            ]
        }))
        .unwrap();
        let (_, players, mvp) = run(&stored);
        assert_eq!(None, mvp);
        assert!(players.is_empty());
    }

    #[test]
    fn home_clean_sheet() {
        let record = MatchBuilder::new("m1", "Arsenal", "Chelsea").score(2, 0).build();
        let (teams, _, _) = run(&record);
        let home = teams.get("Arsenal").unwrap();
        let away = teams.get("Chelsea").unwrap();
        assert_eq!((1, 0, 0), (home.wins, home.losses, home.draws));
        assert_eq!((2, 0, 1), (home.goals_for, home.goals_against, home.clean_sheets));
        assert_eq!((0, 1, 0), (away.wins, away.losses, away.draws));
        assert_eq!((0, 2, 0), (away.goals_for, away.goals_against, away.clean_sheets));
    }

    #[test]
    fn goalless_draw_gives_both_clean_sheets() {
        let record = MatchBuilder::new("m1", "Arsenal", "Chelsea").score(0, 0).build();
        let (teams, _, _) = run(&record);
        for team in ["Arsenal", "Chelsea"] {
            let stat = teams.get(team).unwrap();
            assert_eq!(1, stat.draws);
            assert_eq!(1, stat.clean_sheets);
        }
    }

    #[test]
    fn away_win() {
        let record = MatchBuilder::new("m1", "Arsenal", "Chelsea").score(1, 3).build();
        let (teams, _, _) = run(&record);
        assert_eq!(1, teams.get("Chelsea").unwrap().wins);
        assert_eq!(1, teams.get("Arsenal").unwrap().losses);
        assert_eq!(0, teams.get("Arsenal").unwrap().clean_sheets);
        assert_eq!(0, teams.get("Chelsea").unwrap().clean_sheets);
    }
}
