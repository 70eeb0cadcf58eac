use pulldown_cmark::{CowStr, Event, HeadingLevel, LinkType, Parser, Tag, TagEnd};

use super::CatalogError;
use crate::models::{Catalog, Footer, Guideline, Link, Section};
use crate::parsing::inline::kinds::CodeSpan;

const LAST_UPDATED: &str = "Last updated:";

/// Reads a Markdown catalog.
///
/// Layout: the first `#` heading is the title (a leading bold run becomes
/// the highlight), the first paragraph before any `##` is the tagline, each
/// `##` heading opens a section and its bullets are the guidelines. A
/// paragraph after a thematic break starting with `Last updated:` is the
/// footer. Inline code, emphasis, links and inline HTML are written back in
/// source form so descriptions read the same as in TOML or JSON catalogs.
pub fn parse_markdown_catalog(text: &str) -> Result<Catalog, CatalogError> {
    let mut builder = CatalogBuilder {
        source: text,
        ..CatalogBuilder::default()
    };
    for (event, range) in Parser::new(text).into_offset_iter() {
        builder.push(event, range.start)?;
    }
    builder.finish()
}

/// Names the first part of `expected` that `actual` does not reproduce.
pub(super) fn first_difference(expected: &Catalog, actual: &Catalog) -> Option<String> {
    if expected == actual {
        return None;
    }
    if expected.title != actual.title || expected.highlight != actual.highlight {
        return Some(format!(
            "title '{}' with highlight {:?}",
            expected.title, expected.highlight
        ));
    }
    if expected.tagline != actual.tagline {
        return Some(format!("tagline {:?}", expected.tagline));
    }
    for (i, section) in expected.sections.iter().enumerate() {
        let Some(other) = actual.sections.get(i) else {
            return Some(format!("section '{}'", section.title));
        };
        if section.title != other.title {
            return Some(format!("section '{}'", section.title));
        }
        for (j, item) in section.items.iter().enumerate() {
            if other.items.get(j) != Some(item) {
                return Some(format!(
                    "guideline '{}' in section '{}'",
                    item.description, section.title
                ));
            }
        }
        if section.items.len() != other.items.len() {
            return Some(format!("section '{}'", section.title));
        }
    }
    if expected.sections.len() != actual.sections.len() {
        return Some("section list".to_string());
    }
    Some("footer".to_string())
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Context {
    #[default]
    Outside,
    Title,
    SectionTitle,
    Item,
    Paragraph,
    Ignored,
}

struct OpenLink {
    autolink: bool,
    dest: String,
    title: String,
}

#[derive(Default)]
struct CatalogBuilder<'a> {
    source: &'a str,

    title: Option<String>,
    highlight: Option<String>,
    tagline: Option<String>,
    sections: Vec<Section>,
    footer: Option<Footer>,

    context: Context,
    buf: String,
    highlight_buf: Option<String>,
    after_rule: bool,
    /// Delimiter characters of the emphasis runs currently open.
    emphasis: Vec<char>,
    links: Vec<OpenLink>,
    link: Option<Link>,
    before_link: Option<String>,
    in_link: bool,
}

impl CatalogBuilder<'_> {
    fn push(&mut self, event: Event<'_>, offset: usize) -> Result<(), CatalogError> {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                self.buf.clear();
                self.context = match level {
                    HeadingLevel::H1 if self.title.is_none() => Context::Title,
                    HeadingLevel::H2 => Context::SectionTitle,
                    _ => Context::Ignored,
                };
            }
            Event::End(TagEnd::Heading(_)) => {
                let text = self.buf.trim().to_string();
                match self.context {
                    Context::Title => self.title = Some(text),
                    Context::SectionTitle => {
                        self.sections.push(Section::new(text, Vec::<Guideline>::new()));
                        self.after_rule = false;
                    }
                    _ => log::debug!("Ignoring heading '{text}'"),
                }
                self.context = Context::Outside;
            }
            Event::Start(Tag::Item) => {
                if self.context == Context::Item {
                    // Nested list: the parent's text so far is its own guideline.
                    self.finish_item()?;
                }
                self.buf.clear();
                self.context = Context::Item;
            }
            Event::End(TagEnd::Item) => {
                if self.context == Context::Item {
                    self.finish_item()?;
                }
                self.context = Context::Outside;
            }
            Event::Start(Tag::Paragraph) => {
                if self.context != Context::Item {
                    self.buf.clear();
                    self.link = None;
                    self.before_link = None;
                    self.context = Context::Paragraph;
                }
            }
            Event::End(TagEnd::Paragraph) => {
                if self.context == Context::Paragraph {
                    self.finish_paragraph();
                    self.context = Context::Outside;
                }
            }
            Event::Start(Tag::Strong) => {
                if self.context == Context::Title
                    && self.highlight.is_none()
                    && self.buf.trim().is_empty()
                {
                    self.highlight_buf = Some(String::new());
                } else {
                    self.open_emphasis(offset, 2);
                }
            }
            Event::End(TagEnd::Strong) => match self.highlight_buf.take() {
                Some(highlight) => self.highlight = Some(highlight.trim().to_string()),
                None => self.close_emphasis(2),
            },
            Event::Start(Tag::Emphasis) => self.open_emphasis(offset, 1),
            Event::End(TagEnd::Emphasis) => self.close_emphasis(1),
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                ..
            }) => {
                if self.context == Context::Paragraph && self.links.is_empty() {
                    self.before_link = Some(self.buf.clone());
                    self.in_link = true;
                    self.link = Some(Link {
                        label: String::new(),
                        href: dest_url.to_string(),
                    });
                }
                self.open_link("[", link_type, dest_url, title);
            }
            Event::End(TagEnd::Link) => {
                self.in_link = false;
                self.close_link();
            }
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                ..
            }) => self.open_link("![", link_type, dest_url, title),
            Event::End(TagEnd::Image) => self.close_link(),
            Event::Text(text) => {
                self.buf.push_str(&text);
                if let Some(highlight) = self.highlight_buf.as_mut() {
                    highlight.push_str(&text);
                }
                if self.in_link
                    && let Some(link) = self.link.as_mut()
                {
                    link.label.push_str(&text);
                }
            }
            Event::Code(code) => {
                if code.bytes().any(|b| b == CodeSpan::TICK) {
                    log::warn!("Inline code '{code}' contains a backtick and will not read back as code");
                }
                self.buf.push_str(&CodeSpan::wrap(&code));
            }
            Event::Html(html) | Event::InlineHtml(html) => self.buf.push_str(&html),
            Event::SoftBreak | Event::HardBreak => self.buf.push(' '),
            Event::Rule => self.after_rule = true,
            _ => {}
        }
        Ok(())
    }

    /// Writes the opening delimiter of an emphasis run, `*` or `_` as in the source.
    fn open_emphasis(&mut self, offset: usize, count: usize) {
        let delimiter = self
            .source
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .filter(|c| matches!(c, '*' | '_'))
            .unwrap_or('*');
        self.emphasis.push(delimiter);
        self.buf.extend(std::iter::repeat_n(delimiter, count));
    }

    fn close_emphasis(&mut self, count: usize) {
        let delimiter = self.emphasis.pop().unwrap_or('*');
        self.buf.extend(std::iter::repeat_n(delimiter, count));
    }

    fn open_link(&mut self, opener: &str, link_type: LinkType, dest: CowStr<'_>, title: CowStr<'_>) {
        let autolink = matches!(link_type, LinkType::Autolink | LinkType::Email);
        self.buf.push_str(if autolink { "<" } else { opener });
        self.links.push(OpenLink {
            autolink,
            dest: dest.to_string(),
            title: title.to_string(),
        });
    }

    fn close_link(&mut self) {
        let Some(link) = self.links.pop() else {
            return;
        };
        if link.autolink {
            self.buf.push('>');
            return;
        }
        self.buf.push_str("](");
        self.buf.push_str(&link.dest);
        if !link.title.is_empty() {
            self.buf.push_str(" \"");
            self.buf.push_str(&link.title);
            self.buf.push('"');
        }
        self.buf.push(')');
    }

    fn finish_item(&mut self) -> Result<(), CatalogError> {
        let description = self.buf.trim().to_string();
        self.buf.clear();
        if description.is_empty() {
            return Ok(());
        }
        let section = self.sections.last_mut().ok_or_else(|| {
            CatalogError::Markdown(format!(
                "guideline '{description}' appears before any '##' section heading"
            ))
        })?;
        section.items.push(Guideline::new(description));
        Ok(())
    }

    fn finish_paragraph(&mut self) {
        let text = self.buf.trim().to_string();
        if self.after_rule && self.footer.is_none() && text.starts_with(LAST_UPDATED) {
            let lead = self.before_link.take().unwrap_or_else(|| text.clone());
            let last_updated = lead
                .trim()
                .trim_start_matches(LAST_UPDATED)
                .trim()
                .trim_end_matches('\u{2022}')
                .trim()
                .to_string();
            self.footer = Some(Footer {
                last_updated,
                link: self.link.take(),
            });
        } else if self.title.is_some() && self.sections.is_empty() && self.tagline.is_none() {
            self.tagline = Some(text);
        } else {
            log::debug!("Ignoring paragraph '{text}'");
        }
    }

    fn finish(self) -> Result<Catalog, CatalogError> {
        let title = self
            .title
            .ok_or_else(|| CatalogError::Markdown("missing '#' title heading".to_string()))?;
        Ok(Catalog {
            title,
            highlight: self.highlight,
            tagline: self.tagline,
            sections: self.sections,
            footer: self.footer,
        })
    }
}
