//! Tabulation of an [Analysis] for console output.

use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};
use strum::IntoEnumIterator;

use crate::team::{Analysis, Side};

pub fn tabulate_summary(analysis: &Analysis) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(20)).with(Left)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec![
                "Team".into(),
                "Shots".into(),
                "xG".into(),
                "Win".into(),
                "Draw".into(),
                "Loss".into(),
                "xP".into(),
            ],
        ));
    for side in Side::iter() {
        let team = analysis.team(side);
        let outcome = analysis.outcome(side);
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{} ({side})", team.name).into(),
                format!("{}", team.shots).into(),
                format!("{:.2}", team.expected_goals).into(),
                format!("{:.6}", outcome.greater).into(),
                format!("{:.6}", outcome.equal).into(),
                format!("{:.6}", outcome.less).into(),
                format!("{:.3}", team.expected_points).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_distribution(analysis: &Analysis) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(20)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(20)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec![
                "Goals".into(),
                analysis.home.name.clone().into(),
                analysis.away.name.clone().into(),
            ],
        ));
    let max_goals = usize::max(analysis.home.goals.len(), analysis.away.goals.len());
    for goals in 0..max_goals {
        let mut row_cells = vec![format!("{goals}").into()];
        for side in Side::iter() {
            let prob = analysis.team(side).goals.get(goals).copied().unwrap_or_default();
            row_cells.push(format!("{prob:.9}").into());
        }
        table.push_row(Row::new(Styles::default(), row_cells));
    }
    table
}
