//! Reads HTML from stdin, captures the first matching selector and prints
//! the response envelope as JSON on stdout. `data` is the full normalized
//! text, the same payload the library builds from a `Capture`;
//! `--max-length` only bounds the preview logged on stderr.
//!
//! Usage: `capture_stdin [--url <location>] [--max-length <n>] <selector>...`
//!
//! Set `RUST_LOG=page_capture=debug` to see which selector matched.

use std::env;
use std::io::{self, Read};

use page_capture::{
    capture, dom, resolve_bytes, CaptureResponse, LivePage, Options, DEFAULT_MAX_LENGTH,
};
use tracing_subscriber::EnvFilter;

struct Args {
    url: Option<String>,
    max_length: Option<usize>,
    selectors: Vec<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        url: None,
        max_length: None,
        selectors: Vec::new(),
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--url" => {
                args.url = Some(iter.next().ok_or("--url needs a value")?);
            }
            "--max-length" => {
                let raw = iter.next().ok_or("--max-length needs a value")?;
                let n = raw
                    .parse()
                    .map_err(|_| format!("--max-length: not a number: {raw}"))?;
                args.max_length = Some(n);
            }
            _ => args.selectors.push(arg),
        }
    }

    Ok(args)
}

fn run(args: &Args) -> Result<String, String> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .map_err(|e| format!("failed to read stdin: {e}"))?;
    capture_markup(&bytes, args)
}

fn capture_markup(bytes: &[u8], args: &Args) -> Result<String, String> {
    let options = Options {
        max_length: args.max_length.unwrap_or(DEFAULT_MAX_LENGTH),
        base_url: args.url.clone(),
        ..Options::default()
    };

    let resolved = resolve_bytes(bytes, options.base_url.as_deref());
    let page = match resolved.base_url.as_deref() {
        Some(url) => LivePage::with_location(&resolved.html, url).map_err(|e| e.to_string())?,
        None => LivePage::from_html(&resolved.html),
    };

    let result = capture(
        &page,
        args.selectors.iter().map(String::as_str),
        dom::trimmed_text,
        &options,
    );
    tracing::info!(
        preview = %result.preview,
        is_markdown = result.is_markdown,
        chars = result.text.chars().count(),
        "captured"
    );

    Ok(CaptureResponse::from(result).data.unwrap_or_default())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let response = match parse_args() {
        Ok(args) => CaptureResponse::from(run(&args)),
        Err(message) => CaptureResponse::failure(message),
    };

    match response.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
