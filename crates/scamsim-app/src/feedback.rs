//! Terminal rendering of the analysis markup.
//!
//! The critique arrives as simple HTML limited to `<p>`, `<b>`, `<ul>` and
//! `<li>`. Those become paragraphs, bold spans and bullet lines; any other
//! tag is dropped and its text kept.

use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<\s*(/?)\s*([a-z][a-z0-9]*)[^>]*>").unwrap());
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*```[A-Za-z]*[ \t]*$").unwrap());
static SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Span>),
    List(Vec<Vec<Span>>),
}

#[derive(Default)]
struct Parser {
    blocks: Vec<Block>,
    paragraph: Vec<Span>,
    items: Vec<Vec<Span>>,
    item: Option<Vec<Span>>,
    bold: bool,
}

impl Parser {
    fn text(&mut self, raw: &str) {
        let text = SPACE_RE.replace_all(&decode_entities(raw), " ").into_owned();
        let target = match self.item.as_mut() {
            Some(item) => item,
            None => &mut self.paragraph,
        };
        if target.is_empty() && text.trim().is_empty() {
            return;
        }
        match target.last_mut() {
            Some(last) if last.bold == self.bold => last.text.push_str(&text),
            _ => target.push(Span {
                text,
                bold: self.bold,
            }),
        }
    }

    fn flush_paragraph(&mut self) {
        let spans = trim_spans(std::mem::take(&mut self.paragraph));
        if !spans.is_empty() {
            self.blocks.push(Block::Paragraph(spans));
        }
    }

    fn flush_item(&mut self) {
        if let Some(item) = self.item.take() {
            let spans = trim_spans(item);
            if !spans.is_empty() {
                self.items.push(spans);
            }
        }
    }

    fn flush_list(&mut self) {
        self.flush_item();
        if !self.items.is_empty() {
            let items = std::mem::take(&mut self.items);
            self.blocks.push(Block::List(items));
        }
    }

    fn tag(&mut self, closing: bool, name: &str) {
        match (name, closing) {
            ("p" | "br", _) | ("div", _) => {
                if self.item.is_none() {
                    self.flush_paragraph();
                }
            }
            ("b" | "strong", closing) => self.bold = !closing,
            ("ul" | "ol", false) => {
                self.flush_paragraph();
                self.flush_list();
            }
            ("ul" | "ol", true) => self.flush_list(),
            ("li", false) => {
                self.flush_paragraph();
                self.flush_item();
                self.item = Some(Vec::new());
            }
            ("li", true) => self.flush_item(),
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_paragraph();
        self.flush_list();
        self.blocks
    }
}

/// Parse analysis markup into blocks.
pub fn parse(markup: &str) -> Vec<Block> {
    let source = FENCE_RE.replace_all(markup, "");
    let mut parser = Parser::default();
    let mut last = 0;

    for caps in TAG_RE.captures_iter(&source) {
        let Some(whole) = caps.get(0) else { continue };
        parser.text(&source[last..whole.start()]);
        let closing = !caps[1].is_empty();
        parser.tag(closing, &caps[2].to_ascii_lowercase());
        last = whole.end();
    }
    parser.text(&source[last..]);
    parser.finish()
}

/// Render blocks as terminal text; `ansi` enables bold escapes.
pub fn render(blocks: &[Block], ansi: bool) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Paragraph(spans) => {
                push_spans(&mut out, spans, ansi);
                out.push_str("\n\n");
            }
            Block::List(items) => {
                for item in items {
                    out.push_str("  • ");
                    push_spans(&mut out, item, ansi);
                    out.push('\n');
                }
                out.push('\n');
            }
        }
    }
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out
}

/// Parse and render in one step.
pub fn to_terminal(markup: &str, ansi: bool) -> String {
    render(&parse(markup), ansi)
}

fn push_spans(out: &mut String, spans: &[Span], ansi: bool) {
    for span in spans {
        if span.bold && ansi {
            out.push_str("\x1b[1m");
            out.push_str(&span.text);
            out.push_str("\x1b[0m");
        } else {
            out.push_str(&span.text);
        }
    }
}

fn trim_spans(mut spans: Vec<Span>) -> Vec<Span> {
    if let Some(first) = spans.first_mut() {
        first.text = first.text.trim_start().to_string();
    }
    if let Some(last) = spans.last_mut() {
        last.text = last.text.trim_end().to_string();
    }
    spans.retain(|s| !s.text.is_empty());
    spans
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
