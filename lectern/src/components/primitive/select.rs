use std::fmt::Display;

use iced::widget::text::Wrapping;
use iced::widget::{column, pick_list, text};
use iced::{Border, Element, Length};

use crate::shared::ui::theme::ThemeProps;

const TITLE_SPACING: f32 = 8.0;
const LIST_PADDING: [f32; 2] = [10.0, 14.0];

/// UI events emitted by a select.
#[derive(Debug, Clone)]
pub(crate) enum SelectEvent<T> {
    Changed(T),
}

/// Props for rendering a titled dropdown.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SelectProps<'a, T> {
    pub(crate) title: &'a str,
    pub(crate) options: &'a [T],
    pub(crate) selected: T,
    pub(crate) text_size: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a dropdown that only ever reports values drawn from `options`.
pub(crate) fn view<'a, T>(
    props: SelectProps<'a, T>,
) -> Element<'a, SelectEvent<T>>
where
    T: Display + PartialEq + Clone + 'a,
{
    let palette = props.theme.palette().clone();

    let title = text(props.title.to_uppercase())
        .size(props.text_size)
        .color(palette.dim_foreground)
        .wrapping(Wrapping::None);

    let list =
        pick_list(props.options, Some(props.selected), SelectEvent::Changed)
            .text_size(props.text_size)
            .padding(LIST_PADDING)
            .width(Length::Fill)
            .style(move |theme, status| {
                let mut style = pick_list::default(theme, status);
                style.background = palette.background.into();
                style.text_color = palette.foreground;
                style.border = Border {
                    width: 1.0,
                    color: palette.border,
                    ..Border::default()
                };
                style
            });

    column![title, list]
        .spacing(TITLE_SPACING)
        .width(Length::Fill)
        .into()
}
