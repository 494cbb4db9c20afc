//! Screen rendering: one function per session state, driven entirely by the
//! snapshot.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Circle};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use nightwatch_core::constants::{ENEMY_SIZE, FIELD_HEIGHT, FIELD_WIDTH, TICK_RATE};
use nightwatch_core::enums::{CyclePhase, EnemyKind, SessionState};
use nightwatch_core::state::GameStateSnapshot;

pub fn draw(f: &mut Frame, snap: &GameStateSnapshot) {
    match snap.session {
        SessionState::Title => draw_title(f),
        SessionState::Explanation => draw_explanation(f),
        SessionState::Play => draw_play(f, snap),
        SessionState::GameOver => draw_game_over(f, snap),
    }
}

fn draw_title(f: &mut Frame) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::styled(
            "N I G H T   W A T C H",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("The horde comes after dark."),
        Line::from(""),
        Line::from(""),
        Line::styled("Press ENTER", Style::default().fg(Color::DarkGray)),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, f.area());
}

fn draw_explanation(f: &mut Frame) {
    let lines = vec![
        Line::from(""),
        Line::styled(
            "How to play",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("Day: spend points on upgrades"),
        Line::from("  [1] Attack +2"),
        Line::from("  [2] Defense +2"),
        Line::from("  [3] Heal +10"),
        Line::from("  [R] Undo this day's spending"),
        Line::from("  [ENTER] Skip to night"),
        Line::from(""),
        Line::from("Night: the horde attacks on its own;"),
        Line::from("the report comes at dawn."),
        Line::from(""),
        Line::styled("Press ENTER to play", Style::default().fg(Color::DarkGray)),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, f.area());
}

fn draw_play(f: &mut Frame, snap: &GameStateSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(7), // Stats
            Constraint::Min(8),    // Phase content
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], snap);
    render_stats(f, chunks[1], snap);
    match snap.phase {
        CyclePhase::Day => render_day_menu(f, chunks[2], snap),
        CyclePhase::Night => render_night_field(f, chunks[2], snap),
        CyclePhase::Result => render_morning_report(f, chunks[2], snap),
    }
    render_footer(f, chunks[3], snap);
}

fn render_header(f: &mut Frame, area: Rect, snap: &GameStateSnapshot) {
    let (label, color, ticks_left) = match snap.phase {
        CyclePhase::Day => ("DAY", Color::Cyan, snap.day_ticks_left),
        CyclePhase::Night => ("NIGHT", Color::Blue, snap.night_ticks_left),
        CyclePhase::Result => ("MORNING", Color::Yellow, 0),
    };

    let title = if ticks_left > 0 {
        format!(
            " Day {} | {} | {}s left ",
            snap.day,
            label,
            ticks_left.div_ceil(TICK_RATE)
        )
    } else {
        format!(" Day {} | {} ", snap.day, label)
    };

    let header = Paragraph::new(title)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn render_stats(f: &mut Frame, area: Rect, snap: &GameStateSnapshot) {
    let eco = &snap.economy;
    let lines = vec![
        Line::from(format!("HP:      {} / {}", eco.hp, eco.max_hp)),
        Line::from(format!("Attack:  {}", eco.attack)),
        Line::from(format!("Defense: {}", eco.defense)),
        Line::from(format!("Points:  {}", eco.points)),
    ];
    let widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Base "));
    f.render_widget(widget, area);
}

fn render_day_menu(f: &mut Frame, area: Rect, snap: &GameStateSnapshot) {
    let lines = vec![
        Line::from(format!(
            "[1] Attack UP  (+2)  Cost: {}",
            snap.costs.attack
        )),
        Line::from(format!(
            "[2] Defense UP (+2)  Cost: {}",
            snap.costs.defense
        )),
        Line::from(format!("[3] Heal       (+10) Cost: {}", snap.costs.heal)),
        Line::from("[R] Undo this day's spending"),
        Line::from(""),
        Line::from("[ENTER] Skip to night"),
    ];
    let widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Day Phase "));
    f.render_widget(widget, area);
}

fn render_night_field(f: &mut Frame, area: Rect, snap: &GameStateSnapshot) {
    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(" Night "))
        .x_bounds([0.0, f64::from(FIELD_WIDTH)])
        .y_bounds([0.0, f64::from(FIELD_HEIGHT)])
        .paint(|ctx| {
            for enemy in &snap.enemies {
                ctx.draw(&Circle {
                    x: f64::from(enemy.position.x + ENEMY_SIZE / 2.0),
                    // Field y grows downward; canvas y grows upward.
                    y: f64::from(FIELD_HEIGHT - (enemy.position.y + ENEMY_SIZE / 2.0)),
                    radius: f64::from(ENEMY_SIZE / 2.0),
                    color: kind_color(enemy.kind),
                });
            }
        });
    f.render_widget(canvas, area);
}

fn kind_color(kind: EnemyKind) -> Color {
    match kind {
        EnemyKind::Red => Color::Rgb(220, 30, 30),
        EnemyKind::Blue => Color::Rgb(30, 120, 220),
        EnemyKind::Gray => Color::Rgb(170, 170, 170),
        EnemyKind::Yellow => Color::Rgb(240, 200, 40),
    }
}

fn render_morning_report(f: &mut Frame, area: Rect, snap: &GameStateSnapshot) {
    let mut lines = vec![
        Line::from(format!(
            "Points earned:      {}",
            snap.economy.last_earned_points
        )),
        Line::from(format!("HP lost last night: {}", snap.hp_lost_last_night)),
        Line::from(""),
    ];
    if let Some(message) = &snap.event_message {
        lines.push(Line::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
        lines.push(Line::from(""));
    }
    lines.push(Line::from("[ENTER] Continue"));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Morning Report "),
    );
    f.render_widget(widget, area);
}

fn render_footer(f: &mut Frame, area: Rect, snap: &GameStateSnapshot) {
    let hint = match snap.phase {
        CyclePhase::Day => "1/2/3 buy | R undo | ENTER skip | q quit",
        CyclePhase::Night => "Survive until morning | q quit",
        CyclePhase::Result => "ENTER continue | q quit",
    };
    let footer = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

fn draw_game_over(f: &mut Frame, snap: &GameStateSnapshot) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::styled(
            "G A M E   O V E R",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Survived {} days", snap.day)),
        Line::from(""),
        Line::from(""),
        Line::styled(
            "Press ENTER to return to the title",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, f.area());
}
