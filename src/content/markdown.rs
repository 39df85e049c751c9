//! Markdown rendering for post bodies, with syntax-highlighted code blocks

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::HighlightConfig;
use crate::helpers::html_escape;

const MORE_MARKER: &str = "<!-- more -->";

pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    highlight: HighlightConfig,
}

impl MarkdownRenderer {
    pub fn new(highlight: HighlightConfig) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            highlight,
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        // Some(lang) while inside a code block; lang may be empty
        let mut code_lang: Option<String> = None;
        let mut code = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    code_lang = Some(match kind {
                        CodeBlockKind::Fenced(lang) => lang.to_string(),
                        CodeBlockKind::Indented => String::new(),
                    });
                    code.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    let lang = code_lang.take().unwrap_or_default();
                    events.push(Event::Html(CowStr::from(self.code_block(&code, &lang))));
                }
                Event::Text(text) if code_lang.is_some() => code.push_str(&text),
                other => events.push(other),
            }
        }

        let mut output = String::new();
        html::push_html(&mut output, events.into_iter());
        output
    }

    fn code_block(&self, code: &str, lang: &str) -> String {
        let lang = if lang.is_empty() { "text" } else { lang };
        let plain = || {
            format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                lang,
                html_escape(code)
            )
        };

        if !self.highlight.enable {
            return plain();
        }

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let Some(theme) = self
            .theme_set
            .themes
            .get(&self.highlight.theme)
            .or_else(|| self.theme_set.themes.values().next())
        else {
            return plain();
        };

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            Ok(highlighted) if self.highlight.line_number => with_line_numbers(&highlighted, lang),
            Ok(highlighted) => format!(r#"<figure class="highlight {}">{}</figure>"#, lang, highlighted),
            Err(e) => {
                tracing::debug!("Highlighting {} failed: {}", lang, e);
                plain()
            }
        }
    }

    /// Split off the part before `<!-- more -->`, if the marker is present
    pub fn split_excerpt(markdown: &str) -> (Option<&str>, String) {
        match markdown.split_once(MORE_MARKER) {
            Some((excerpt, rest)) => (
                Some(excerpt.trim()),
                format!("{}\n\n{}", excerpt.trim(), rest.trim()),
            ),
            None => (None, markdown.to_string()),
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(HighlightConfig::default())
    }
}

fn with_line_numbers(highlighted: &str, lang: &str) -> String {
    let lines: Vec<&str> = highlighted.lines().collect();
    let gutter: Vec<String> = (1..=lines.len())
        .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
        .collect();

    format!(
        r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code">{}</td></tr></table></figure>"#,
        lang,
        gutter.join("\n"),
        lines.join("\n")
    )
}
