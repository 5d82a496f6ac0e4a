//! Statistics screen: summary table, grouped bar chart, recent rounds.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, Block, Borders, Paragraph, Row, Table},
};

use crate::{
    difficulty::Bucket,
    ui::app::App,
    ui::types::StatsView,
};

impl App {
    pub(in crate::ui) fn draw_stats(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(3)])
            .split(area);

        match self.stats_view {
            StatsView::Summary => self.draw_stats_summary(f, chunks[0]),
            StatsView::Chart => self.draw_stats_chart(f, chunks[0]),
            StatsView::Rounds => self.draw_recent_rounds(f, chunks[0]),
        }

        self.draw_input(f, chunks[1], "Player name (Tab = next view)", false);
    }

    fn stats_title(&self, view: &str) -> String {
        format!("Statistics — {} — {}", self.stats_target, view)
    }

    fn draw_stats_summary(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.stats_title("summary"));

        let Ok(rows) = self.stats.chart_rows(&self.stats_target) else {
            f.render_widget(
                Paragraph::new("No record for this player").block(block),
                area,
            );
            return;
        };

        let table_rows: Vec<Row> = rows
            .iter()
            .map(|(bucket, counters)| {
                Row::new(vec![
                    bucket.label().to_string(),
                    counters.played.to_string(),
                    counters.won.to_string(),
                ])
            })
            .collect();

        let table = Table::new(
            table_rows,
            [
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(10),
            ],
        )
        .header(
            Row::new(vec!["", "Jugadas", "Ganadas"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(block);

        f.render_widget(table, area);
    }

    /// Grouped horizontal bars: a won/played pair per bucket.
    fn draw_stats_chart(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.stats_title("chart"));

        let Ok(rows) = self.stats.chart_rows(&self.stats_target) else {
            f.render_widget(
                Paragraph::new("No record for this player").block(block),
                area,
            );
            return;
        };

        let mut bars: Vec<Bar> = Vec::with_capacity(Bucket::ALL.len() * 2);
        for (bucket, counters) in rows {
            bars.push(
                Bar::with_label(format!("{:>7} won", bucket.label()), counters.won)
                    .text_value(counters.won.to_string())
                    .style(Style::default().fg(Color::Green)),
            );
            bars.push(
                Bar::with_label(format!("{:>7} played", bucket.label()), counters.played)
                    .text_value(counters.played.to_string())
                    .style(Style::default().fg(Color::Blue)),
            );
        }

        let chart = BarChart::new(bars)
            .direction(Direction::Horizontal)
            .bar_gap(0)
            .block(block);

        f.render_widget(chart, area);
    }

    fn draw_recent_rounds(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.stats_title("recent rounds"));

        if self.recent_rounds.is_empty() {
            f.render_widget(
                Paragraph::new(vec![
                    Line::from(""),
                    Line::from("No rounds recorded yet. Play one first!"),
                ])
                .block(block),
                area,
            );
            return;
        }

        let rows: Vec<Row> = self
            .recent_rounds
            .iter()
            .map(|record| {
                Row::new(vec![
                    record.timestamp.format("%Y-%m-%d %H:%M").to_string(),
                    record.player.clone(),
                    record.difficulty.label().to_string(),
                    record.attempts_used.to_string(),
                    record.outcome.to_string(),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(17),
                Constraint::Length(14),
                Constraint::Length(9),
                Constraint::Length(9),
                Constraint::Length(6),
            ],
        )
        .header(
            Row::new(vec!["When", "Player", "Difficulty", "Attempts", "Result"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(block);

        f.render_widget(table, area);
    }
}
