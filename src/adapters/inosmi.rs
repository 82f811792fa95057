// inosmi.ru sanitizer.
//
// Article pages wrap the story in `div.article__body` inside an `<article>`.
// Older and AMP layouts lack the inner div, so fall back to `<article>` and
// then `<body>` before giving up and using the whole document.

use scraper::{ElementRef, Html, Selector};

use super::html_tools::{collect_text, render_clean_html, DEFAULT_UNWRAPLIST_TAGS};
use super::Sanitizer;

pub const HOST: &str = "inosmi.ru";

/// Container selectors, most specific first.
const CONTAINERS: &[&str] = &["div.article__body", "article", "body"];

/// Dropped on top of the default blacklist: styling, embeds, sidebars.
const BLACKLIST_TAGS: &[&str] = &["script", "time", "style", "noscript", "aside", "iframe"];

pub struct InosmiSanitizer;

impl Sanitizer for InosmiSanitizer {
    fn sanitize(&self, html: &str, plaintext: bool) -> String {
        let document = Html::parse_document(html);
        let root = article_root(&document);

        if plaintext {
            collect_text(root, BLACKLIST_TAGS)
        } else {
            render_clean_html(root, BLACKLIST_TAGS, DEFAULT_UNWRAPLIST_TAGS)
        }
    }
}

fn article_root(document: &Html) -> ElementRef<'_> {
    for css in CONTAINERS {
        // Static selectors; a parse failure just means trying the next one
        let Ok(selector) = Selector::parse(css) else {
            continue;
        };
        if let Some(found) = document.select(&selector).next() {
            return found;
        }
    }
    document.root_element()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head><title>ИноСМИ</title><style>.x{}</style></head>
        <body>
          <header>Меню сайта</header>
          <article>
            <h1>Заголовок статьи</h1>
            <div class="article__body">
              <div class="article__text">«Удивительно, но это стало началом!»</div>
              <script>track();</script>
              <time>06.02.2023</time>
              <aside>Читайте также</aside>
              <div class="article__text">Во-первых, он хочет, чтобы</div>
            </div>
          </article>
        </body></html>"#;

    #[test]
    fn plaintext_keeps_only_article_body() {
        let text = InosmiSanitizer.sanitize(PAGE, true);
        assert_eq!(
            text,
            "«Удивительно, но это стало началом!» Во-первых, он хочет, чтобы"
        );
    }

    #[test]
    fn html_mode_strips_layout() {
        let html = InosmiSanitizer.sanitize(PAGE, false);
        assert!(html.contains("Во-первых"));
        assert!(!html.contains("<div"));
        assert!(!html.contains("track()"));
    }

    #[test]
    fn falls_back_to_article_then_body() {
        let text = InosmiSanitizer.sanitize("<html><body><p>Просто текст</p></body></html>", true);
        assert_eq!(text, "Просто текст");

        let text = InosmiSanitizer.sanitize("<article><p>Статья</p></article>", true);
        assert_eq!(text, "Статья");
    }

    #[test]
    fn garbage_input_does_not_fail() {
        assert_eq!(InosmiSanitizer.sanitize("", true), "");
        let _ = InosmiSanitizer.sanitize("<<<>>not html", true);
    }
}
