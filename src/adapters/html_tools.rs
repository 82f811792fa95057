// Generic HTML cleanup helpers shared by site sanitizers.
//
// scraper's DOM is read-only, so instead of decomposing and unwrapping tags
// in place these helpers walk the tree once and emit either plain text or a
// reduced HTML rendering that keeps only tags meaningful for text analysis.

use scraper::node::Node;
use scraper::ElementRef;

/// Tags whose whole subtree is dropped.
pub const DEFAULT_BLACKLIST_TAGS: &[&str] = &["script", "time"];

/// Layout tags replaced by their children in the cleaned HTML.
pub const DEFAULT_UNWRAPLIST_TAGS: &[&str] = &[
    "div", "p", "span", "address", "article", "header", "footer",
];

/// Tags after which a word boundary is forced in plain text output.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "blockquote", "br", "div", "footer", "h1", "h2", "h3", "h4", "h5",
    "h6", "header", "li", "p", "section", "td", "tr",
];

const VOID_TAGS: &[&str] = &["br", "hr", "img"];

/// Collect the text under `root`, skipping blacklisted subtrees.
///
/// Runs of whitespace are collapsed to single spaces and block-level tags
/// always separate words, so `<p>one</p><p>two</p>` gives `"one two"`.
pub fn collect_text(root: ElementRef<'_>, blacklist: &[&str]) -> String {
    let mut raw = String::new();
    push_text(root, blacklist, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn push_text(element: ElementRef<'_>, blacklist: &[&str], out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                if blacklist.contains(&el.name()) {
                    continue;
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    let block = BLOCK_TAGS.contains(&el.name());
                    if block {
                        out.push(' ');
                    }
                    push_text(child_el, blacklist, out);
                    if block {
                        out.push(' ');
                    }
                }
            }
            _ => {}
        }
    }
}

/// Render the children of `root` as reduced HTML.
///
/// Blacklisted subtrees are dropped, unwrap-listed tags are replaced by
/// their content, and every attribute is removed except `a[href]` and
/// `img[src]`.
pub fn render_clean_html(root: ElementRef<'_>, blacklist: &[&str], unwraplist: &[&str]) -> String {
    let mut out = String::new();
    push_html(root, blacklist, unwraplist, &mut out);
    out.trim().to_string()
}

fn push_html(element: ElementRef<'_>, blacklist: &[&str], unwraplist: &[&str], out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&escape(text)),
            Node::Element(el) => {
                let name = el.name();
                if blacklist.contains(&name) {
                    continue;
                }
                let Some(child_el) = ElementRef::wrap(child) else {
                    continue;
                };
                if unwraplist.contains(&name) {
                    push_html(child_el, blacklist, unwraplist, out);
                    continue;
                }

                out.push('<');
                out.push_str(name);
                let kept_attr = match name {
                    "a" => Some("href"),
                    "img" => Some("src"),
                    _ => None,
                };
                if let Some(attr) = kept_attr {
                    if let Some(value) = el.attr(attr) {
                        out.push_str(&format!(" {attr}=\"{}\"", escape(value)));
                    }
                }
                out.push('>');

                if VOID_TAGS.contains(&name) {
                    continue;
                }
                push_html(child_el, blacklist, unwraplist, out);
                out.push_str(&format!("</{name}>"));
            }
            _ => {}
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
