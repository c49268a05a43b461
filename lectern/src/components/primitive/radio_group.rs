use std::fmt::Display;

use iced::widget::text::Wrapping;
use iced::widget::{Row, column, radio, text};
use iced::{Element, Length};

use crate::shared::ui::theme::{PanelPalette, ThemeProps};

const TITLE_SPACING: f32 = 8.0;
const OPTION_SPACING: f32 = 24.0;
const DOT_SIZE: f32 = 18.0;

/// UI events emitted by a radio group.
#[derive(Debug, Clone)]
pub(crate) enum RadioGroupEvent<T> {
    Changed(T),
}

/// Props for rendering a titled row of radio buttons.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RadioGroupProps<'a, T> {
    pub(crate) title: &'a str,
    pub(crate) options: &'a [T],
    pub(crate) selected: T,
    pub(crate) text_size: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render one radio button per option; the selected one is matched by
/// equality, not identity.
pub(crate) fn view<'a, T>(
    props: RadioGroupProps<'a, T>,
) -> Element<'a, RadioGroupEvent<T>>
where
    T: Display + Copy + Eq + 'a,
{
    let palette = props.theme.palette();

    let title = text(props.title.to_uppercase())
        .size(props.text_size)
        .color(palette.dim_foreground)
        .wrapping(Wrapping::None);

    let options = props.options.iter().map(|option| {
        radio_option(*option, props.selected, props.text_size, palette)
    });

    let group = Row::with_children(options)
        .spacing(OPTION_SPACING)
        .width(Length::Fill);

    column![title, group]
        .spacing(TITLE_SPACING)
        .width(Length::Fill)
        .into()
}

fn radio_option<'a, T>(
    option: T,
    selected: T,
    text_size: f32,
    palette: &PanelPalette,
) -> Element<'a, RadioGroupEvent<T>>
where
    T: Display + Copy + Eq + 'a,
{
    let dot_color = palette.foreground;
    let border_color = palette.border;

    radio(
        option.to_string(),
        option,
        Some(selected),
        RadioGroupEvent::Changed,
    )
    .size(DOT_SIZE)
    .text_size(text_size)
    .style(move |theme, status| {
        let mut style = radio::default(theme, status);
        style.dot_color = dot_color;
        style.border_color = border_color;
        style.text_color = Some(dot_color);
        style
    })
    .into()
}
