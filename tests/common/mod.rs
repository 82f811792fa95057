// Shared fixtures for integration tests.
//
// TestSite is a minimal in-process HTTP/1.1 server standing in for a news
// site, so pipeline tests never touch the network. Routes:
//   /article  200, a small inosmi-style article
//   /bomb     200, an article containing BOMB_WORD
//   /huge     200, a very long article
//   /slow     200 after SLOW_DELAY
//   /held     200 after HELD_DELAY, counted by the site's RequestGauge
//   /missing  404
//   /error    500

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use jaundice::adapters::inosmi::InosmiSanitizer;
use jaundice::adapters::SanitizerRegistry;
use jaundice::normalizer::lexicon::LexiconNormalizer;
use jaundice::normalizer::traits::WordNormalizer;
use jaundice::processing::article::PipelineTimeouts;
use jaundice::processing::bulk::Analyzer;
use jaundice::text::charged::ChargedWordSet;

pub const SLOW_DELAY: Duration = Duration::from_secs(2);
pub const HELD_DELAY: Duration = Duration::from_millis(100);
pub const BOMB_WORD: &str = "бомба";

pub const ARTICLE_TEXT: &str = "«Удивительно, но это стало началом!» Во-первых, он хочет, чтобы";

/// Normalized words of ARTICLE_TEXT:
/// удивительно, это, стать, начало, во-первых, хотеть, чтобы
pub const ARTICLE_WORDS: usize = 7;

pub fn article_html(text: &str) -> String {
    format!(
        "<html><head><title>ИноСМИ</title></head><body><header>Меню</header>\
         <article><div class=\"article__body\"><div class=\"article__text\">{text}</div>\
         <script>track();</script><time>06.02.2023</time></div></article></body></html>"
    )
}

/// Tracks how many `/held` requests the site is serving at once.
#[derive(Debug, Default)]
pub struct RequestGauge {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl RequestGauge {
    fn enter(&self) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
    }

    fn leave(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    /// Highest number of concurrent `/held` requests seen so far.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

pub struct TestSite {
    pub addr: SocketAddr,
    pub gauge: Arc<RequestGauge>,
}

impl TestSite {
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let gauge = Arc::new(RequestGauge::default());

        let site_gauge = Arc::clone(&gauge);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                tokio::spawn(serve_connection(stream, Arc::clone(&site_gauge)));
            }
        });

        Self { addr, gauge }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

async fn serve_connection(mut stream: TcpStream, gauge: Arc<RequestGauge>) {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let head = String::from_utf8_lossy(&request);
    let path = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    let (status, body) = match path.as_str() {
        "/article" => ("200 OK", article_html(ARTICLE_TEXT)),
        "/bomb" => ("200 OK", article_html(&format!("{ARTICLE_TEXT} {BOMB_WORD}"))),
        "/huge" => ("200 OK", article_html(&format!("{ARTICLE_TEXT} ").repeat(20_000))),
        "/slow" => {
            tokio::time::sleep(SLOW_DELAY).await;
            ("200 OK", article_html(ARTICLE_TEXT))
        }
        "/held" => {
            gauge.enter();
            tokio::time::sleep(HELD_DELAY).await;
            gauge.leave();
            ("200 OK", article_html(ARTICLE_TEXT))
        }
        "/error" => ("500 Internal Server Error", "boom".to_string()),
        _ => ("404 Not Found", "not found".to_string()),
    };

    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\n\
         Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

pub fn test_lexicon() -> LexiconNormalizer {
    LexiconNormalizer::from_pairs([
        ("хочет", "хотеть"),
        ("стало", "стать"),
        ("началом", "начало"),
    ])
}

pub fn charged_words() -> Arc<ChargedWordSet> {
    Arc::new(ChargedWordSet::from_iter(["удивительно", "начало"]))
}

/// Analyzer that treats the local test site as a supported news source.
pub fn analyzer_with(normalizer: Arc<dyn WordNormalizer>, timeouts: PipelineTimeouts) -> Analyzer {
    Analyzer::new(normalizer)
        .unwrap()
        .with_sanitizers(
            SanitizerRegistry::default().with("127.0.0.1", Arc::new(InosmiSanitizer)),
        )
        .with_timeouts(timeouts)
}

pub fn analyzer() -> Analyzer {
    analyzer_with(
        Arc::new(test_lexicon()),
        PipelineTimeouts {
            fetch: Duration::from_secs(5),
            split: Duration::from_secs(5),
        },
    )
}

/// A local URL nothing is listening on.
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/article")
}
