use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use tui_dispatch::DataResource;

use super::theme::TEXT_DIM;
use super::Component;
use crate::action::Action;
use crate::panels::PanelModule;

pub const LOADING_TEXT: &str = "Loading...";

/// Loading boundary around one content view.
///
/// Renders the view only once its panel module is resolved. Pending and failed
/// modules both keep the placeholder; failures are reported by the status bar.
pub struct Suspense;

pub struct SuspenseProps<'a> {
    pub module: &'a DataResource<PanelModule>,
    pub render_content: &'a mut dyn FnMut(&mut Frame, Rect, &PanelModule),
}

impl Component<Action> for Suspense {
    type Props<'a> = SuspenseProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match props.module.data() {
            Some(module) => (props.render_content)(frame, area, module),
            None => {
                let placeholder = Paragraph::new(LOADING_TEXT)
                    .style(Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC));
                frame.render_widget(placeholder, area);
            }
        }
    }
}
