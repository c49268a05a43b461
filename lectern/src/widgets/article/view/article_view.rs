use iced::widget::{Column, column, container, scrollable, text};
use iced::{Element, Length, alignment};

use super::super::model::ArticleContent;
use super::super::style::ArticleStyle;

const TITLE_SCALE: f32 = 2.2;
const SUBTITLE_SCALE: f32 = 1.3;
const PARAGRAPH_SPACING: f32 = 24.0;
const HEADER_SPACING: f32 = 12.0;
const ARTICLE_PADDING: f32 = 96.0;

/// Props for rendering the article body.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArticleViewProps<'a> {
    pub(crate) content: &'a ArticleContent,
    pub(crate) style: &'a ArticleStyle,
}

/// Render the article on its background, centered and capped at the
/// configured content width.
pub(crate) fn view<'a, Message: 'a>(
    props: ArticleViewProps<'a>,
) -> Element<'a, Message> {
    let style = *props.style;

    let header = column![
        text(&props.content.title)
            .size(style.font_size * TITLE_SCALE)
            .font(style.font)
            .color(style.text_color),
        text(&props.content.subtitle)
            .size(style.font_size * SUBTITLE_SCALE)
            .font(style.font)
            .color(style.text_color),
    ]
    .spacing(HEADER_SPACING);

    let paragraphs = props.content.paragraphs.iter().map(|paragraph| {
        text(paragraph)
            .size(style.font_size)
            .font(style.font)
            .color(style.text_color)
            .into()
    });

    let body: Column<'a, Message> =
        Column::with_children(paragraphs).spacing(PARAGRAPH_SPACING);

    let article = column![header, body]
        .spacing(PARAGRAPH_SPACING * 2.0)
        .width(Length::Fill)
        .max_width(style.max_width);

    let centered = container(article)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(ARTICLE_PADDING);

    container(scrollable(centered).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(style.background.into()),
            ..Default::default()
        })
        .into()
}
