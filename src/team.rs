//! Teams, their shots and the analysis of a fixture between two of them.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use thiserror::Error;
use tracing::debug;

use crate::outcome;
use crate::outcome::OutcomeDistribution;
use crate::poisson_binomial;
use crate::poisson_binomial::InvalidProbability;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Side {
    Home,
    Away,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{side} team {team}: {invalid}")]
pub struct InvalidShots {
    pub side: Side,
    pub team: String,
    #[source]
    pub invalid: InvalidProbability,
}

/// A team and the scoring probability of each of its shots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub shots: Vec<f64>,
}
impl Team {
    pub fn new(name: impl Into<String>, shots: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            shots,
        }
    }

    pub fn expected_goals(&self) -> f64 {
        poisson_binomial::expected_count(&self.shots)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub home: Team,
    pub away: Team,
}
impl Fixture {
    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// Probability of the given side scoring exactly `k` goals, indexed by `k`.
    pub fn goals(&self, side: Side) -> Result<Vec<f64>, InvalidShots> {
        let team = self.team(side);
        poisson_binomial::distribution(&team.shots).map_err(|invalid| InvalidShots {
            side,
            team: team.name.clone(),
            invalid,
        })
    }

    pub fn analyse(&self) -> Result<Analysis, InvalidShots> {
        let home_goals = self.goals(Side::Home)?;
        let away_goals = self.goals(Side::Away)?;
        let outcome = outcome::compare(&home_goals, &away_goals);
        debug!("{} v {}: {outcome:?}", self.home.name, self.away.name);
        let home = TeamSummary {
            name: self.home.name.clone(),
            shots: self.home.shots.len(),
            expected_goals: self.home.expected_goals(),
            expected_points: outcome.expected_points(),
            goals: home_goals,
        };
        let away = TeamSummary {
            name: self.away.name.clone(),
            shots: self.away.shots.len(),
            expected_goals: self.away.expected_goals(),
            expected_points: outcome.expected_points_against(),
            goals: away_goals,
        };
        Ok(Analysis { outcome, home, away })
    }
}

impl Default for Fixture {
    /// Arsenal v Manchester United, as charted shot by shot in _The Expected Goals Philosophy_.
    fn default() -> Self {
        Self {
            home: Team::new(
                "Arsenal",
                vec![
                    0.02, 0.02, 0.03, 0.04, 0.04, 0.05, 0.06, 0.07, 0.09, 0.10, 0.12, 0.13, 0.76,
                ],
            ),
            away: Team::new(
                "Manchester United",
                vec![
                    0.01, 0.02, 0.02, 0.02, 0.03, 0.05, 0.05, 0.05, 0.06, 0.22, 0.30, 0.43, 0.48,
                    0.63,
                ],
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    pub name: String,
    pub shots: usize,
    pub expected_goals: f64,
    pub expected_points: f64,
    /// Probability of scoring exactly `k` goals, indexed by `k`.
    pub goals: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Win, draw and loss probabilities from the home side's perspective.
    pub outcome: OutcomeDistribution,
    pub home: TeamSummary,
    pub away: TeamSummary,
}
impl Analysis {
    pub fn team(&self, side: Side) -> &TeamSummary {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// Win, draw and loss probabilities from the perspective of the given side.
    pub fn outcome(&self, side: Side) -> OutcomeDistribution {
        match side {
            Side::Home => self.outcome,
            Side::Away => self.outcome.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use strum::IntoEnumIterator;

    use crate::probs::SliceExt;
    use crate::testing::assert_slice_f64_relative;

    use super::*;

    #[test]
    fn expected_goals() {
        let fixture = Fixture::default();
        assert_float_absolute_eq!(1.53, fixture.home.expected_goals(), 1e-9);
        assert_float_absolute_eq!(2.37, fixture.away.expected_goals(), 1e-9);
        assert_eq!(0.0, Team::new("Nobody", vec![]).expected_goals());
    }

    #[test]
    fn analyse_default() {
        let analysis = Fixture::default().analyse().unwrap();
        assert_eq!("Arsenal", analysis.home.name);
        assert_eq!(13, analysis.home.shots);
        assert_eq!(14, analysis.home.goals.len());
        assert_eq!("Manchester United", analysis.away.name);
        assert_eq!(14, analysis.away.shots);
        assert_eq!(15, analysis.away.goals.len());
        assert_float_absolute_eq!(1.0, analysis.outcome.sum(), 1e-9);
        assert_float_absolute_eq!(0.7733271929447239, analysis.home.expected_points, 1e-9);
        assert_float_absolute_eq!(2.0007366048865247, analysis.away.expected_points, 1e-9);
        for side in Side::iter() {
            assert_float_absolute_eq!(1.0, analysis.team(side).goals.sum(), 1e-9);
        }
        assert_slice_f64_relative(
            &[0.10729953191895032, 0.43019338219863973, 0.32005790249076965, 0.11426518464757139],
            &analysis.home.goals[..4],
            1e-9,
        );
    }

    #[test]
    fn outcome_by_side() {
        let analysis = Fixture::default().analyse().unwrap();
        assert_eq!(analysis.outcome, analysis.outcome(Side::Home));
        assert_eq!(analysis.outcome.reverse(), analysis.outcome(Side::Away));
        assert_eq!(analysis.outcome.less, analysis.outcome(Side::Away).greater);
    }

    #[test]
    fn analyse_invalid() {
        let fixture = Fixture {
            home: Team::new("Rovers", vec![0.1, 0.2]),
            away: Team::new("United", vec![0.3, 2.0]),
        };
        let err = fixture.analyse().unwrap_err();
        assert_eq!(
            InvalidShots {
                side: Side::Away,
                team: "United".into(),
                invalid: InvalidProbability {
                    index: 1,
                    value: 2.0
                },
            },
            err
        );
        assert_eq!(
            "Away team United: invalid probability 2 at index 1",
            err.to_string()
        );
    }

    #[test]
    fn analyse_invalid_on_both_sides() {
        let fixture = Fixture {
            home: Team::new("Rovers", vec![0.1, 1.5, 0.2]),
            away: Team::new("United", vec![0.3, 2.0]),
        };
        let err = fixture.analyse().unwrap_err();
        assert_eq!(Side::Home, err.side);
        assert_eq!(1.5, err.invalid.value);
    }

    #[test]
    fn analyse_matches_outcome_distribution() {
        let fixture = Fixture::default();
        let analysis = fixture.analyse().unwrap();
        let outcome = outcome::outcome_distribution(&fixture.home.shots, &fixture.away.shots).unwrap();
        assert_float_absolute_eq!(outcome.greater, analysis.outcome.greater, 1e-12);
        assert_float_absolute_eq!(outcome.equal, analysis.outcome.equal, 1e-12);
        assert_float_absolute_eq!(outcome.less, analysis.outcome.less, 1e-12);
        assert_eq!(fixture.goals(Side::Away).unwrap(), analysis.away.goals);
    }

    #[test]
    fn fixture_from_json() {
        let json = r#"{"home": {"name": "Home", "shots": [0.5]}, "away": {"name": "Away", "shots": []}}"#;
        let fixture: Fixture = serde_json::from_str(json).unwrap();
        assert_eq!(Team::new("Home", vec![0.5]), fixture.home);
        assert_eq!(Team::new("Away", vec![]), *fixture.team(Side::Away));

        let analysis = fixture.analyse().unwrap();
        assert_float_absolute_eq!(0.5, analysis.outcome.greater, 1e-9);
        assert_float_absolute_eq!(0.5, analysis.outcome.equal, 1e-9);
        assert_float_absolute_eq!(0.0, analysis.outcome.less, 1e-9);
    }

    #[test]
    fn side_display() {
        assert_eq!(
            vec!["Home", "Away"],
            Side::iter().map(|side| side.to_string()).collect::<Vec<_>>()
        );
    }
}
