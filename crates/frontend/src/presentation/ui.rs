//! Frame composition: the scene canvas plus a one-line status bar.
use anyhow::Result;
use behavior_tree::Status;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, canvas::Canvas},
};
use sisyphus_sim::{Simulation, World};

use crate::presentation::{
    draw::{Draw, Projection},
    terminal::Tui,
    theme,
};

pub const TITLE: &str = " Sisyphean Myth Simulation ";

pub fn render(terminal: &mut Tui, sim: &Simulation) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, sim))?;
    Ok(())
}

pub(crate) fn render_frame(frame: &mut Frame, sim: &Simulation) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    render_scene(frame, chunks[0], sim.world());
    render_status(frame, chunks[1], sim);
}

fn render_scene(frame: &mut Frame, area: Rect, world: &World) {
    let projection = Projection::new(world.bounds.height);

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(TITLE))
        .background_color(theme::BACKGROUND)
        .marker(Marker::Braille)
        .x_bounds([0.0, world.bounds.width])
        .y_bounds([0.0, world.bounds.height])
        .paint(|ctx| {
            world.hill.draw(ctx, projection);
            ctx.layer();
            world.boulder.draw(ctx, projection);
            world.sisyphus.draw(ctx, projection);
        });

    frame.render_widget(canvas, area);
}

fn render_status(frame: &mut Frame, area: Rect, sim: &Simulation) {
    let phase = match (sim.phase(), sim.status()) {
        (Some(phase), _) => Span::styled(phase.to_string(), theme::phase()),
        (None, None) => Span::styled("Waiting", theme::phase()),
        (None, Some(status)) => {
            Span::styled(format!("Done ({})", label(status)), theme::finished())
        }
    };

    let line = Line::from(vec![
        Span::raw(" "),
        phase,
        Span::raw(format!("  |  tick {}", sim.tick_count())),
        Span::raw("  |  q: quit"),
    ]);

    frame.render_widget(Paragraph::new(line).style(theme::status_bar()), area);
}

fn label(status: Status) -> &'static str {
    match status {
        Status::Running => "running",
        Status::Success => "success",
        Status::Failure => "failure",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use sisyphus_sim::SimConfig;

    fn rendered_text(sim: &Simulation) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render_frame(frame, sim)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn status_bar_shows_active_phase() {
        let mut sim = Simulation::new(&SimConfig::default());
        sim.step();

        let text = rendered_text(&sim);
        assert!(text.contains("Push Boulder"));
        assert!(text.contains("tick 1"));
        assert!(text.contains("Sisyphean Myth Simulation"));
    }

    #[test]
    fn status_bar_reports_completion() {
        let mut sim = Simulation::new(&SimConfig::default());
        sim.run_until_done(2_000).unwrap();

        assert!(rendered_text(&sim).contains("Done (success)"));
    }
}
