//! Markdown to HTML rendering.

use std::fmt;

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};
use syntect::parsing::SyntaxSet;

use crate::codeblock::CodeBlock;
use crate::config::RenderConfig;
use crate::links;

/// Errors that can occur while rendering Markdown.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to highlight {language} code block: {message}")]
    Highlight { language: String, message: String },
}

/// Markdown renderer with custom link and code block rules.
///
/// Built once and shared by reference; rendering never mutates it, so one
/// renderer can serve many threads.
pub struct Renderer {
    config: RenderConfig,
    syntaxes: SyntaxSet,
}

impl Renderer {
    /// Create a renderer, loading the bundled grammars.
    pub fn new(config: RenderConfig) -> Self {
        Self::with_syntaxes(config, SyntaxSet::load_defaults_newlines())
    }

    /// Create a renderer using a caller-supplied grammar set.
    pub fn with_syntaxes(config: RenderConfig, syntaxes: SyntaxSet) -> Self {
        Self { config, syntaxes }
    }

    /// Settings this renderer was built with.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render Markdown to HTML.
    ///
    /// Links and fenced code blocks go through [`links::open_tag`] and
    /// [`CodeBlock::render`]; everything else is standard CommonMark output.
    pub fn render(&self, content: &str) -> Result<String, RenderError> {
        let mut events = Vec::new();
        let mut code_block: Option<CodeBlock> = None;
        // Links inside image alt text are flattened to text by the HTML writer.
        let mut image_depth = 0usize;

        for event in Parser::new_ext(content, markdown_options()) {
            if let Some(block) = code_block.as_mut() {
                match event {
                    Event::Text(text) => block.push_str(&text),
                    Event::End(TagEnd::CodeBlock) => {
                        let html = block.render(&self.syntaxes, &self.config.fallback_language)?;
                        events.push(Event::Html(html.into()));
                        code_block = None;
                    }
                    _ => {}
                }
                continue;
            }

            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    code_block = Some(CodeBlock::from_kind(&kind));
                }
                Event::Start(Tag::Link {
                    link_type,
                    dest_url,
                    title,
                    ..
                }) if image_depth == 0 => {
                    let href = links::link_href(link_type, &dest_url);
                    events.push(Event::InlineHtml(links::open_tag(&href, &title).into()));
                }
                Event::End(TagEnd::Link) if image_depth == 0 => {
                    events.push(Event::InlineHtml("</a>".into()));
                }
                Event::Start(Tag::Image { .. }) => {
                    image_depth += 1;
                    events.push(event);
                }
                Event::End(TagEnd::Image) => {
                    image_depth = image_depth.saturating_sub(1);
                    events.push(event);
                }
                other => events.push(other),
            }
        }

        let mut html_output = String::with_capacity(content.len() * 3 / 2);
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("config", &self.config)
            .field("syntaxes", &self.syntaxes.syntaxes().len())
            .finish()
    }
}

fn markdown_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
}
