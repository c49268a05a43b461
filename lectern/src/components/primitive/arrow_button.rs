use iced::widget::{button, container, svg};
use iced::{Border, Element, Length, Shadow, Vector, alignment};

use crate::shared::ui::theme::ThemeProps;

const ARROW_RIGHT: &[u8] = br#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M9 5l7 7-7 7" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;
const ARROW_LEFT: &[u8] = br#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M15 5l-7 7 7 7" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

const ICON_RATIO: f32 = 0.5;

/// UI events emitted by the arrow toggle.
#[derive(Debug, Clone)]
pub(crate) enum ArrowButtonEvent {
    Pressed,
}

/// Props for rendering the arrow toggle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArrowButtonProps<'a> {
    pub(crate) is_open: bool,
    pub(crate) size: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the round arrow that opens and closes the side panel.
///
/// The arrow points toward the state the press leads to.
pub(crate) fn view<'a>(
    props: ArrowButtonProps<'a>,
) -> Element<'a, ArrowButtonEvent> {
    let palette = props.theme.palette().clone();
    let icon_bytes = if props.is_open { ARROW_LEFT } else { ARROW_RIGHT };
    let icon_size = props.size * ICON_RATIO;
    let icon_color = palette.foreground;

    let icon = svg::Svg::new(svg::Handle::from_memory(icon_bytes))
        .width(Length::Fixed(icon_size))
        .height(Length::Fixed(icon_size))
        .style(move |_, _| svg::Style {
            color: Some(icon_color),
        });

    let content = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(content)
        .on_press(ArrowButtonEvent::Pressed)
        .padding(0.0)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => {
                    palette.accent
                },
                _ => palette.background,
            };

            button::Style {
                background: Some(background.into()),
                text_color: palette.foreground,
                border: Border {
                    radius: (props.size / 2.0).into(),
                    width: 1.0,
                    color: palette.border,
                },
                shadow: Shadow {
                    color: palette.shadow,
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 6.0,
                },
                ..Default::default()
            }
        })
        .into()
}
