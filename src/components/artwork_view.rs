use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::theme::{BG_BASE, TEXT_DIM};
use super::Component;
use crate::action::Action;
use crate::artwork::Artwork;

/// Artwork region of the modal; falls back to the reference as a label
pub struct ArtworkView;

pub struct ArtworkViewProps<'a> {
    pub artwork: Option<&'a Artwork>,
    pub reference: &'a str,
}

impl Component<Action> for ArtworkView {
    type Props<'a> = ArtworkViewProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if let Some(artwork) = props.artwork {
            frame.render_widget(artwork, area);
            return;
        }
        if props.reference.is_empty() || area.height == 0 {
            return;
        }

        let label_area = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        frame.render_widget(Clear, label_area);
        let label = Paragraph::new(Line::from(props.reference.to_string()).centered())
            .style(
                Style::default()
                    .bg(BG_BASE)
                    .fg(TEXT_DIM)
                    .add_modifier(Modifier::ITALIC),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(label, label_area);
    }
}
