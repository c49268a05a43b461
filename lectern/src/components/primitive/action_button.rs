use iced::widget::{button, container, text};
use iced::{Border, Element, Length, alignment};

use crate::shared::ui::theme::{PanelPalette, ThemeProps};

const BUTTON_HEIGHT: f32 = 52.0;
const BUTTON_PADDING_X: f32 = 24.0;

/// Visual intent of a form button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ButtonIntent {
    Clear,
    Apply,
}

/// Form action a button triggers when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormAction {
    Submit,
    Reset,
}

/// UI events emitted by an action button.
#[derive(Debug, Clone)]
pub(crate) enum ActionButtonEvent {
    Pressed(FormAction),
}

/// Props for rendering a form action button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ActionButtonProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) intent: ButtonIntent,
    pub(crate) action: FormAction,
    pub(crate) text_size: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a labelled button that reports its form action on press.
pub(crate) fn view<'a>(
    props: ActionButtonProps<'a>,
) -> Element<'a, ActionButtonEvent> {
    let palette = props.theme.palette().clone();
    let intent = props.intent;

    let label = container(
        text(props.label.to_uppercase())
            .size(props.text_size)
            .align_x(alignment::Horizontal::Center),
    )
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .height(Length::Fill);

    button(label)
        .on_press(ActionButtonEvent::Pressed(props.action))
        .padding([0.0, BUTTON_PADDING_X])
        .height(Length::Fixed(BUTTON_HEIGHT))
        .style(move |_, status| button_style(&palette, intent, status))
        .into()
}

fn button_style(
    palette: &PanelPalette,
    intent: ButtonIntent,
    status: button::Status,
) -> button::Style {
    let hovered =
        matches!(status, button::Status::Hovered | button::Status::Pressed);

    let (background, text_color, border_width) = match intent {
        ButtonIntent::Apply if hovered => {
            (palette.accent_hover, palette.on_accent, 0.0)
        },
        ButtonIntent::Apply => (palette.accent, palette.on_accent, 0.0),
        ButtonIntent::Clear if hovered => {
            (palette.hover, palette.foreground, 1.0)
        },
        ButtonIntent::Clear => (palette.background, palette.foreground, 1.0),
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            width: border_width,
            color: palette.border,
            ..Border::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use iced::widget::button;

    use super::{ButtonIntent, button_style};
    use crate::shared::ui::theme::PanelPalette;

    #[test]
    fn given_apply_intent_when_idle_then_uses_accent_background() {
        let palette = PanelPalette::default();

        let style =
            button_style(&palette, ButtonIntent::Apply, button::Status::Active);

        assert_eq!(style.background, Some(palette.accent.into()));
        assert_eq!(style.text_color, palette.on_accent);
        assert_eq!(style.border.width, 0.0);
    }

    #[test]
    fn given_clear_intent_when_hovered_then_keeps_outline() {
        let palette = PanelPalette::default();

        let style = button_style(
            &palette,
            ButtonIntent::Clear,
            button::Status::Hovered,
        );

        assert_eq!(style.background, Some(palette.hover.into()));
        assert_eq!(style.border.width, 1.0);
    }
}
