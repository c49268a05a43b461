use iced::widget::{Space, container};
use iced::{Element, Length};

use crate::shared::ui::theme::ThemeProps;

const SEPARATOR_HEIGHT: f32 = 1.0;

/// Props for rendering a horizontal separator.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SeparatorProps<'a> {
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a thin full-width rule.
pub(crate) fn view<'a, Message: 'a>(
    props: SeparatorProps<'a>,
) -> Element<'a, Message> {
    let color = props.theme.palette().separator;

    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(SEPARATOR_HEIGHT))
        .style(move |_| container::Style {
            background: Some(color.into()),
            ..Default::default()
        })
        .into()
}
