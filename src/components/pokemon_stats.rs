use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{ACCENT_GOLD, ACCENT_RED, ACCENT_TEAL, TEXT_DIM, TEXT_MAIN};
use super::Component;
use crate::action::Action;
use crate::panels::PanelModule;

const STAT_FALLBACK_LABELS: [&str; 6] = ["HP", "Attack", "Defense", "Sp. Atk", "Sp. Def", "Speed"];
const LABEL_WIDTH: usize = 10;

pub struct PokemonStats;

pub struct PokemonStatsProps<'a> {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
    pub module: &'a PanelModule,
}

impl PokemonStatsProps<'_> {
    fn values(&self) -> [u16; 6] {
        [
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
    }
}

/// Filled cells of a `width`-cell bar for `value` out of `scale`
pub fn bar_fill(value: u16, scale: u16, width: u16) -> u16 {
    if scale == 0 || width == 0 {
        return 0;
    }
    let filled = u32::from(value.min(scale)) * u32::from(width) / u32::from(scale);
    filled as u16
}

fn bar_color(value: u16) -> Color {
    match value {
        0..=49 => ACCENT_RED,
        50..=89 => ACCENT_GOLD,
        _ => ACCENT_TEAL,
    }
}

impl Component<Action> for PokemonStats {
    type Props<'a> = PokemonStatsProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Heading
            Constraint::Min(1),    // Stat rows
        ])
        .split(area);

        let heading = Line::from(Span::styled(
            props.module.heading.clone(),
            Style::default().fg(ACCENT_TEAL).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(heading), chunks[0]);

        let values = props.values();
        // label + space + 3-digit value + space
        let bar_width = chunks[1].width.saturating_sub(LABEL_WIDTH as u16 + 5);

        let mut lines: Vec<Line> = values
            .iter()
            .zip(STAT_FALLBACK_LABELS)
            .enumerate()
            .map(|(index, (value, fallback))| {
                let label = props.module.label(index, fallback);
                let mut spans = vec![
                    Span::styled(
                        format!("{label:<width$}", width = LABEL_WIDTH),
                        Style::default().fg(TEXT_DIM),
                    ),
                    Span::styled(format!(" {value:>3} "), Style::default().fg(TEXT_MAIN)),
                ];
                if props.module.scale > 0 {
                    let filled = bar_fill(*value, props.module.scale, bar_width);
                    spans.push(Span::styled(
                        "\u{2588}".repeat(usize::from(filled)),
                        Style::default().fg(bar_color(*value)),
                    ));
                    spans.push(Span::styled(
                        "\u{2591}".repeat(usize::from(bar_width - filled)),
                        Style::default().fg(TEXT_DIM),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        let total: u32 = values.iter().copied().map(u32::from).sum();
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<width$}", props.module.label(6, "Total"), width = LABEL_WIDTH),
                Style::default().fg(TEXT_DIM),
            ),
            Span::styled(
                format!(" {total:>3}"),
                Style::default().fg(TEXT_MAIN).add_modifier(Modifier::BOLD),
            ),
        ]));
        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }
}
