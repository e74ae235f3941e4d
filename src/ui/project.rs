// SPDX-License-Identifier: MPL-2.0
//! Project header shown above the gallery.
//!
//! The view is generic over the message type so it can be embedded in the
//! gallery's scrollable content; link presses map through `on_link`.

use crate::gallery::Project;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::gallery::ImageSlot;
use crate::ui::styles;
use iced::widget::{button, container, image, rule, text, Column, Row};
use iced::{Alignment, Color, ContentFit, Element, Length};

/// Height of the cover banner above the title.
const COVER_HEIGHT: f32 = 280.0;

/// A message displayed above the project (load failures, config warnings).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    fn color(self) -> Color {
        match self {
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

pub struct ViewContext<'a, Message> {
    pub i18n: &'a I18n,
    pub project: Option<&'a Project>,
    pub cover: Option<&'a ImageSlot>,
    pub notices: &'a [Notice],
    pub on_link: fn(String) -> Message,
}

pub fn view<'a, Message: Clone + 'a>(ctx: ViewContext<'a, Message>) -> Element<'a, Message> {
    let content = notices(ctx.notices);

    let Some(project) = ctx.project else {
        return content.push(missing(ctx.i18n)).into();
    };

    let mut content = content;
    if let Some(ImageSlot::Ready(handle)) = ctx.cover {
        content = content.push(
            image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(COVER_HEIGHT))
                .content_fit(ContentFit::Cover),
        );
    }

    content = content.push(text(project.title.as_str()).size(typography::TITLE_LG));
    if let Some(subtitle) = project.subtitle.as_deref() {
        content = content.push(text(subtitle).size(typography::TITLE_SM));
    }

    if let Some(tags) = tags(ctx.i18n, project) {
        content = content.push(tags);
    }
    if let Some(facts) = facts(ctx.i18n, project) {
        content = content.push(text(facts).size(typography::BODY));
    }

    if let Some(blurb) = project.blurb() {
        content = content.push(text(blurb).size(typography::BODY_LG));
    }

    for (key, paragraphs) in [
        ("project-overview", &project.overview),
        ("project-contribution", &project.contribution),
    ] {
        if paragraphs.is_empty() {
            continue;
        }
        content = content
            .push(rule::horizontal(1))
            .push(text(ctx.i18n.tr(key)).size(typography::TITLE_SM));
        for paragraph in paragraphs {
            content = content.push(text(paragraph.as_str()).size(typography::BODY));
        }
    }

    if let Some(row) = links(project, ctx.on_link) {
        content = content
            .push(rule::horizontal(1))
            .push(text(ctx.i18n.tr("project-links")).size(typography::TITLE_SM))
            .push(row);
    }

    content.push(rule::horizontal(1)).into()
}

/// Notices stacked in a column other content can be appended to.
pub fn notices<'a, Message: 'a>(notices: &'a [Notice]) -> Column<'a, Message> {
    notices.iter().fold(
        Column::new().spacing(spacing::SM).width(Length::Fill),
        |column, notice| {
            column.push(
                container(text(notice.text.as_str()).size(typography::BODY))
                    .width(Length::Fill)
                    .padding([spacing::XS, spacing::SM])
                    .style(styles::container::notice(notice.severity.color())),
            )
        },
    )
}

/// Placeholder shown until a manifest is loaded.
pub fn missing<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(text(i18n.tr("project-none-title")).size(typography::TITLE_LG))
        .push(text(i18n.tr("project-none-hint")).size(typography::BODY_LG))
        .into()
}

/// Client and location joined on one line.
fn facts(i18n: &I18n, project: &Project) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(client) = project.client.as_deref() {
        parts.push(i18n.tr_with_args("project-client", &[("client", client)]));
    }
    if let Some(location) = project.location.as_deref() {
        parts.push(i18n.tr_with_args("project-location", &[("location", location)]));
    }
    (!parts.is_empty()).then(|| parts.join(" · "))
}

/// One button per link with a usable URL.
fn links<'a, Message: Clone + 'a>(
    project: &'a Project,
    on_link: fn(String) -> Message,
) -> Option<Element<'a, Message>> {
    let buttons: Vec<Element<'a, Message>> = project
        .links
        .iter()
        .filter_map(|link| {
            let url = link.url.as_deref().filter(|url| !url.trim().is_empty())?;
            let label = format!("{} \u{2197}", link.text()?);
            Some(
                button(text(label).size(typography::BODY))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::unselected)
                    .on_press(on_link(url.to_string()))
                    .into(),
            )
        })
        .collect();

    (!buttons.is_empty()).then(|| Row::with_children(buttons).spacing(spacing::XS).wrap().into())
}

/// Year, type, roles and tags on one line; `None` when the project has none of them.
fn tags<'a, Message: 'a>(i18n: &I18n, project: &'a Project) -> Option<Element<'a, Message>> {
    let mut labels: Vec<String> = Vec::new();
    if let Some(year) = project.year {
        labels.push(year.to_string());
    }
    if let Some(kind) = project.project_type {
        labels.push(i18n.tr(kind.i18n_key()));
    }
    labels.extend(project.roles.iter().cloned());
    labels.extend(project.tags.iter().map(|tag| format!("#{tag}")));

    if labels.is_empty() {
        return None;
    }

    let row = labels.into_iter().fold(
        Row::new().spacing(spacing::XS).align_y(Alignment::Center),
        |row, label| {
            row.push(
                container(text(label).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::tag),
            )
        },
    );
    Some(row.wrap().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{ProjectLink, ProjectType};

    #[derive(Debug, Clone, PartialEq)]
    enum Pressed {
        Link(String),
    }

    fn project() -> Project {
        Project {
            title: "Harbor Lights".into(),
            subtitle: Some("Installation".into()),
            year: Some(2024),
            project_type: Some(ProjectType::Personal),
            roles: vec!["Design".into()],
            tags: vec!["light".into()],
            client: Some("Harbor Festival".into()),
            location: Some("Rotterdam".into()),
            summary: Some("Short intro.".into()),
            overview: vec!["One.".into(), "Two.".into()],
            contribution: vec!["Wiring.".into()],
            links: vec![
                ProjectLink {
                    label: Some("Case study".into()),
                    url: Some("https://example.com/case".into()),
                },
                ProjectLink {
                    label: Some("No target".into()),
                    url: None,
                },
            ],
            ..Project::default()
        }
    }

    #[test]
    fn view_renders_full_project() {
        let i18n = I18n::default();
        let project = project();
        let notices = [Notice {
            severity: Severity::Warning,
            text: "careful".into(),
        }];
        let _element: Element<'_, Pressed> = view(ViewContext {
            i18n: &i18n,
            project: Some(&project),
            cover: Some(&ImageSlot::Loading),
            notices: &notices,
            on_link: Pressed::Link,
        });
    }

    #[test]
    fn view_renders_without_project() {
        let i18n = I18n::default();
        let _element: Element<'_, Pressed> = view(ViewContext {
            i18n: &i18n,
            project: None,
            cover: None,
            notices: &[],
            on_link: Pressed::Link,
        });
    }

    #[test]
    fn tags_are_omitted_when_empty() {
        let i18n = I18n::default();
        let project = Project {
            year: None,
            project_type: None,
            roles: Vec::new(),
            tags: Vec::new(),
            ..project()
        };
        assert!(tags::<()>(&i18n, &project).is_none());
    }

    #[test]
    fn links_without_url_are_skipped() {
        let project = project();
        assert!(links(&project, Pressed::Link).is_some());

        let unlinked = Project {
            links: vec![ProjectLink {
                label: Some("Soon".into()),
                url: Some("  ".into()),
            }],
            ..project
        };
        assert!(links(&unlinked, Pressed::Link).is_none());
    }

    #[test]
    fn facts_join_client_and_location() {
        let i18n = I18n::default();
        let line = facts(&i18n, &project()).expect("client and location");
        assert!(line.contains("Harbor Festival"));
        assert!(line.contains("Rotterdam"));
        assert!(facts(&i18n, &Project::default()).is_none());
    }
}
