//! Fixtures shared by the unit tests.

use chrono::{NaiveDate, NaiveTime};

use crate::events::{Event, EventKind};
use crate::match_reader::{Lineup, Match, Score, Teams};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub struct MatchBuilder {
    record: Match,
}

impl MatchBuilder {
    pub fn new(id: &str, home: &str, away: &str) -> Self {
        Self {
            record: Match {
                id: id.to_string(),
                date: date(2024, 1, 1).and_time(NaiveTime::MIN).and_utc(),
                competition: "Premier League".to_string(),
                season: "2023".to_string(),
                teams: Teams {
                    home: Some(home.to_string()),
                    away: Some(away.to_string()),
                },
                score: Score {
                    home: Some(0),
                    away: Some(0),
                },
                location: String::new(),
                referees: vec![],
                events: vec![],
                line_up: Lineup::default(),
            },
        }
    }

    pub fn score(mut self, home: u32, away: u32) -> Self {
        self.record.score = Score {
            home: Some(home),
            away: Some(away),
        };
        self
    }

    pub fn on(mut self, year: i32, month: u32, day: u32) -> Self {
        self.record.date = date(year, month, day)
            .and_time(NaiveTime::from_hms_opt(15, 0, 0).unwrap())
            .and_utc();
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.record.location = location.to_string();
        self
    }

    pub fn event(mut self, kind: EventKind, player: &str, team: &str) -> Self {
        let minute = self.record.events.len() as u32 * 7 + 3;
        self.record.events.push(Event::new(kind, player, team, minute));
        self
    }

    pub fn goal(self, player: &str, team: &str) -> Self {
        self.event(EventKind::Goal, player, team)
    }

    pub fn assist(self, player: &str, team: &str) -> Self {
        self.event(EventKind::Assist, player, team)
    }

    pub fn build(self) -> Match {
        self.record
    }
}

const CLUBS: [&str; 6] = ["Arsenal", "Chelsea", "Liverpool", "Man City", "Spurs", "Villa"];

/// A deterministic batch of fixtures with a varied mix of results and events, every
/// fixture on its own day of 2024.
pub fn sample_season(fixtures: usize) -> Vec<Match> {
    (0..fixtures)
        .map(|i| {
            let home = CLUBS[i % CLUBS.len()];
            let away = CLUBS[(i + 1 + i / CLUBS.len()) % CLUBS.len()];
            let away = if away == home { CLUBS[(i + 2) % CLUBS.len()] } else { away };
            let home_score = (i * 7 % 5) as u32;
            let away_score = (i * 3 % 4) as u32;
            let day = date(2024, 1, 1) + chrono::Days::new(i as u64);

            let mut builder = MatchBuilder::new(&format!("m{i:03}"), home, away)
                .score(home_score, away_score)
                .location(&format!("{home} Ground"));
            builder.record.date = day.and_time(NaiveTime::from_hms_opt(15, 0, 0).unwrap()).and_utc();

            for goal in 0..home_score as usize {
                builder = builder.goal(&format!("{home} #{}", 9 + (i + goal) % 3), home);
                if goal % 2 == 0 {
                    builder = builder.assist(&format!("{home} #{}", 7 + goal % 2), home);
                }
            }
            for goal in 0..away_score as usize {
                builder = builder.goal(&format!("{away} #{}", 9 + (i + goal) % 2), away);
            }
            match i % 4 {
                0 => builder = builder.event(EventKind::Warning, &format!("{away} #4"), away),
                1 => builder = builder.event(EventKind::PenaltySaved, &format!("{home} #1"), home),
                2 => builder = builder.event(EventKind::WarningAvoided, &format!("{away} #5"), away),
                _ => builder = builder.event(EventKind::Penalty, &format!("{home} #9"), home),
            }
            builder.build()
        })
        .collect()
}
