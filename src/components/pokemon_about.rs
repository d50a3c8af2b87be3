use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::theme::{ACCENT_TEAL, TEXT_DIM, TEXT_MAIN};
use super::Component;
use crate::action::Action;
use crate::panels::PanelModule;

pub struct PokemonAbout;

pub struct PokemonAboutProps<'a> {
    pub experience: u32,
    pub height: u32,
    pub weight: u32,
    pub abilities: &'a [String],
    pub description: &'a str,
    pub module: &'a PanelModule,
}

/// Decimetres to metres
pub fn format_height(height: u32) -> String {
    format!("{:.1} m", height as f32 / 10.0)
}

/// Hectograms to kilograms
pub fn format_weight(weight: u32) -> String {
    format!("{:.1} kg", weight as f32 / 10.0)
}

impl Component<Action> for PokemonAbout {
    type Props<'a> = PokemonAboutProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Heading
            Constraint::Min(2),    // Description
            Constraint::Length(4), // Attributes
        ])
        .split(area);

        let heading = Line::from(Span::styled(
            props.module.heading.clone(),
            Style::default().fg(ACCENT_TEAL).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(heading), chunks[0]);

        let description = if props.description.trim().is_empty() {
            Paragraph::new(props.module.empty_text().to_string())
                .style(Style::default().fg(TEXT_DIM))
        } else {
            Paragraph::new(props.description.to_string()).style(Style::default().fg(TEXT_MAIN))
        };
        frame.render_widget(description.wrap(Wrap { trim: true }), chunks[1]);

        let abilities = if props.abilities.is_empty() {
            "-".to_string()
        } else {
            props.abilities.join(", ")
        };
        let rows = [
            (props.module.label(0, "Base Exp."), props.experience.to_string()),
            (props.module.label(1, "Height"), format_height(props.height)),
            (props.module.label(2, "Weight"), format_weight(props.weight)),
            (props.module.label(3, "Abilities"), abilities),
        ];
        let lines: Vec<Line> = rows
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{label:<12}"), Style::default().fg(TEXT_DIM)),
                    Span::styled(value, Style::default().fg(TEXT_MAIN)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), chunks[2]);
    }
}
