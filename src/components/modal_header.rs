use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::theme::{on_type_color, type_color, ACCENT_RED, BG_PANEL, TEXT_MAIN};
use super::Component;
use crate::action::Action;

pub const FAVOURITE_ICON: &str = "\u{2665}";
pub const NOT_FAVOURITE_ICON: &str = "\u{2661}";
pub const BACK_LABEL: &str = "\u{2190} Back";

/// Back / favourite controls, name heading and type chips
pub struct ModalHeader;

pub struct ModalHeaderProps<'a> {
    pub name: &'a str,
    pub types: &'a [String],
    pub is_favourite: bool,
}

/// One chip per type label, in input order
pub fn type_chips(types: &[String]) -> Line<'static> {
    let mut spans = Vec::with_capacity(types.len() * 2);
    for (index, kind) in types.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {kind} "),
            Style::default()
                .bg(type_color(kind))
                .fg(on_type_color(kind))
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

impl Component<Action> for ModalHeader {
    type Props<'a> = ModalHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let bg = props
            .types
            .first()
            .map(|kind| type_color(kind))
            .unwrap_or(BG_PANEL);
        let fg = props
            .types
            .first()
            .map(|kind| on_type_color(kind))
            .unwrap_or(TEXT_MAIN);
        frame.render_widget(Block::default().style(Style::default().bg(bg).fg(fg)), area);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Controls
            Constraint::Length(1), // Name
            Constraint::Length(1), // Type chips
            Constraint::Min(0),    // Artwork overlap
        ])
        .split(area);

        let back = Line::from(Span::styled(BACK_LABEL, Style::default().fg(fg)));
        frame.render_widget(Paragraph::new(back), chunks[0]);

        let (icon, icon_style) = if props.is_favourite {
            (FAVOURITE_ICON, Style::default().fg(ACCENT_RED).add_modifier(Modifier::BOLD))
        } else {
            (NOT_FAVOURITE_ICON, Style::default().fg(fg))
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(icon, icon_style)).right_aligned()),
            chunks[0],
        );

        let name = Line::from(Span::styled(
            props.name.to_string(),
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(name), chunks[1]);
        frame.render_widget(Paragraph::new(type_chips(props.types)), chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    fn render_header(name: &str, types: &[String], is_favourite: bool) -> String {
        let mut render = RenderHarness::new(40, 5);
        render.render_to_string_plain(|frame| {
            ModalHeader.render(
                frame,
                frame.area(),
                ModalHeaderProps {
                    name,
                    types,
                    is_favourite,
                },
            );
        })
    }

    #[test]
    fn test_chips_follow_input_order() {
        let types = vec!["fire".to_string(), "flying".to_string()];
        let chips = type_chips(&types);
        let chip_texts: Vec<_> = chips
            .spans
            .iter()
            .map(|span| span.content.trim())
            .filter(|text| !text.is_empty())
            .collect();
        assert_eq!(chip_texts, vec!["fire", "flying"]);
    }

    #[test]
    fn test_no_types_no_chips() {
        assert!(type_chips(&[]).spans.is_empty());
    }

    #[test]
    fn test_favourite_icon_follows_prop() {
        let types = vec!["ghost".to_string()];

        let output = render_header("Gengar", &types, false);
        assert!(output.contains(NOT_FAVOURITE_ICON));
        assert!(!output.contains(FAVOURITE_ICON));

        let output = render_header("Gengar", &types, true);
        assert!(output.contains(FAVOURITE_ICON));
        assert!(output.contains("Gengar"));
        assert!(output.contains("Back"));
    }
}
