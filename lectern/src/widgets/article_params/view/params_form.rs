use iced::widget::{column, container, row, text};
use iced::{Alignment, Element, Length, alignment};

use super::super::event::ArticleParamsEvent;
use super::super::model::{ArticleParamsViewModel, ParamOption, SettingsField};
use crate::components::primitive::action_button::{
    ActionButtonEvent, ActionButtonProps, ButtonIntent, FormAction,
    view as action_button_view,
};
use crate::components::primitive::arrow_button::{
    ArrowButtonEvent, ArrowButtonProps, view as arrow_button_view,
};
use crate::components::primitive::radio_group::{
    RadioGroupEvent, RadioGroupProps, view as radio_group_view,
};
use crate::components::primitive::select::{
    SelectEvent, SelectProps, view as select_view,
};
use crate::components::primitive::separator::{
    SeparatorProps, view as separator_view,
};
use crate::geometry::PanelLayout;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;

const PANEL_TITLE: &str = "Set parameters";
const RESET_LABEL: &str = "Reset";
const APPLY_LABEL: &str = "Apply";
const FIELD_SPACING: f32 = 50.0;
const BUTTON_SPACING: f32 = 10.0;

/// Props for rendering the side panel and its toggle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParamsFormProps<'a> {
    pub(crate) vm: ArticleParamsViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
    pub(crate) layout: PanelLayout,
}

/// Render the arrow toggle, preceded by the parameters form when open.
///
/// The toggle sits at the bounds reported by
/// [`toggle_bounds`](crate::geometry::toggle_bounds), so outside-click
/// hit-testing agrees with what is drawn.
pub(crate) fn view(
    props: ParamsFormProps<'_>,
) -> Element<'_, ArticleParamsEvent> {
    let toggle = arrow_button_view(ArrowButtonProps {
        is_open: props.vm.is_open,
        size: props.layout.toggle_size,
        theme: props.theme,
    })
    .map(|event| match event {
        ArrowButtonEvent::Pressed => ArticleParamsEvent::TogglePressed,
    });
    let toggle = container(toggle).padding(props.layout.toggle_margin);

    if !props.vm.is_open {
        return toggle.into();
    }

    row![panel(props), toggle]
        .height(Length::Fill)
        .align_y(Alignment::Start)
        .into()
}

fn panel(props: ParamsFormProps<'_>) -> Element<'_, ArticleParamsEvent> {
    let palette = props.theme.palette();
    let background = palette.background;
    let foreground = palette.foreground;

    let heading = text(PANEL_TITLE.to_uppercase())
        .size(props.fonts.heading.size)
        .font(props.fonts.heading.font_type);

    let fields = column![
        heading,
        field_select(props, SettingsField::FontFamily),
        field_radio(props, SettingsField::FontSize),
        field_select(props, SettingsField::FontColor),
        separator_view(SeparatorProps { theme: props.theme }),
        field_select(props, SettingsField::BackgroundColor),
        field_select(props, SettingsField::ContentWidth),
    ]
    .spacing(FIELD_SPACING)
    .width(Length::Fill);

    let buttons = row![
        form_button(props, RESET_LABEL, ButtonIntent::Clear, FormAction::Reset),
        form_button(
            props,
            APPLY_LABEL,
            ButtonIntent::Apply,
            FormAction::Submit
        ),
    ]
    .spacing(BUTTON_SPACING);

    let bottom = container(buttons)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom);

    container(column![fields, bottom].height(Length::Fill))
        .width(Length::Fixed(props.layout.width))
        .height(Length::Fill)
        .padding(props.layout.padding)
        .style(move |_| container::Style {
            background: Some(background.into()),
            text_color: Some(foreground),
            ..Default::default()
        })
        .into()
}

fn field_select(
    props: ParamsFormProps<'_>,
    field: SettingsField,
) -> Element<'_, ArticleParamsEvent> {
    select_view(SelectProps {
        title: field.title(),
        options: field.options(),
        selected: props.vm.draft.field(field),
        text_size: props.fonts.ui.size,
        theme: props.theme,
    })
    .map(move |event| match event {
        SelectEvent::Changed(option) => changed(field, option),
    })
}

fn field_radio(
    props: ParamsFormProps<'_>,
    field: SettingsField,
) -> Element<'_, ArticleParamsEvent> {
    radio_group_view(RadioGroupProps {
        title: field.title(),
        options: field.options(),
        selected: props.vm.draft.field(field),
        text_size: props.fonts.ui.size,
        theme: props.theme,
    })
    .map(move |event| match event {
        RadioGroupEvent::Changed(option) => changed(field, option),
    })
}

fn form_button<'a>(
    props: ParamsFormProps<'a>,
    label: &'a str,
    intent: ButtonIntent,
    action: FormAction,
) -> Element<'a, ArticleParamsEvent> {
    action_button_view(ActionButtonProps {
        label,
        intent,
        action,
        text_size: props.fonts.ui.label_size,
        theme: props.theme,
    })
    .map(|event| match event {
        ActionButtonEvent::Pressed(FormAction::Submit) => {
            ArticleParamsEvent::Submit
        },
        ActionButtonEvent::Pressed(FormAction::Reset) => {
            ArticleParamsEvent::Reset
        },
    })
}

fn changed(field: SettingsField, option: ParamOption) -> ArticleParamsEvent {
    ArticleParamsEvent::FieldChanged { field, option }
}
