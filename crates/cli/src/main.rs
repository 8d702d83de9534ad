// ABOUTME: CLI exposing the thesolver text utilities as subcommands.
// ABOUTME: Reads text from arguments, files, or stdin and prints the transformed result.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use thesolver_utils::{
    byte_size_human, close_markup_with, collect_elements, duration_hhmmss, duration_human,
    encode, enumerate_class_descriptors, parse_duration_seconds, pattern, title_sort_key_with,
    truncate_with, ClassOptions, CloseOptions, ElementClasses, Hyperlink, TruncateOptions,
    DEFAULT_PRECISION,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Small text utilities: encoding, links, tag closing, truncation, and formatting.
#[derive(Parser, Debug)]
#[command(name = "thesolver")]
#[command(about = "Text, markup, and formatting helpers", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// HTML-encode text. Use "-" to read stdin.
    Encode { text: String },

    /// Build an <a> element.
    Link {
        href: String,
        text: String,
        #[arg(long)]
        target: Option<String>,
        /// Title attribute (defaults to the link text).
        #[arg(long, conflicts_with = "no_title")]
        title: Option<String>,
        /// Leave the title attribute off.
        #[arg(long)]
        no_title: bool,
        #[arg(long)]
        class: Option<String>,
        /// Do not encode the text and title.
        #[arg(long)]
        no_encode: bool,
        /// Extra attribute as NAME=VALUE, written verbatim. Repeatable.
        #[arg(long = "attr", value_parser = parse_attr)]
        attrs: Vec<(String, String)>,
    },

    /// Close tags left open in a markup fragment. Use "-" to read stdin.
    CloseHtml {
        text: String,
        /// Do not balance img/br/hr/input or self-closing tags.
        #[arg(long)]
        skip_void: bool,
    },

    /// Shorten text to a maximum length with an ellipsis. Use "-" to read stdin.
    Truncate {
        text: String,
        max_length: usize,
        /// HTML-encode the output.
        #[arg(long)]
        encode: bool,
        /// Cut mid-word.
        #[arg(long)]
        anywhere: bool,
        /// Treat the input as markup.
        #[arg(long)]
        html: bool,
    },

    /// Format a duration given as seconds, MM:SS, HH:MM:SS, or "1h30m".
    Duration {
        value: String,
        /// Always print HH:MM:SS.
        #[arg(long)]
        hhmmss: bool,
    },

    /// Format a byte count as KB/MB/GB.
    Size {
        bytes: u64,
        #[arg(long, default_value_t = DEFAULT_PRECISION)]
        precision: usize,
    },

    /// Print the sort key of a title.
    SortTitle {
        title: String,
        /// Keep quote characters.
        #[arg(long)]
        keep_quotes: bool,
    },

    /// Check a regular expression, optionally against sample strings.
    Regex {
        pattern: String,
        /// String to test against the pattern. Repeatable.
        #[arg(long = "test")]
        tests: Vec<String>,
    },

    /// Count tag.class descriptors in an HTML file ("-" for stdin) and print JSON.
    Classes {
        input: String,
        /// Only look inside elements matching this CSS selector.
        #[arg(long)]
        scope: Option<String>,
        /// Also count each class of multi-class elements on its own.
        #[arg(long)]
        verbose: bool,
        /// Sort class names within each element.
        #[arg(long)]
        sort: bool,
        /// Input is a JSON array of {"tag_name", "classes"} objects instead of HTML.
        #[arg(long, conflicts_with = "scope")]
        elements: bool,
        /// Output compact JSON instead of pretty.
        #[arg(long, default_value_t = false)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    debug!(command = ?args.command, "running");

    let output = match args.command {
        Command::Encode { text } => encode(&load_text(&text)?),
        Command::Link {
            href,
            text,
            target,
            title,
            no_title,
            class,
            no_encode,
            attrs,
        } => {
            let mut link = Hyperlink::new(href, text);
            if let Some(target) = target {
                link = link.target(target);
            }
            if let Some(title) = title {
                link = link.title(title);
            }
            if no_title {
                link = link.no_title();
            }
            if let Some(class) = class {
                link = link.class(class);
            }
            if no_encode {
                link = link.no_encode();
            }
            for (name, value) in attrs {
                link = link.attribute(name, value);
            }
            link.render()
        }
        Command::CloseHtml { text, skip_void } => {
            let opts = CloseOptions::new().skip_void_tags(skip_void);
            close_markup_with(&load_text(&text)?, &opts)
        }
        Command::Truncate {
            text,
            max_length,
            encode,
            anywhere,
            html,
        } => {
            let opts = TruncateOptions::new()
                .encode_output(encode)
                .break_anywhere(anywhere)
                .is_markup(html);
            truncate_with(&load_text(&text)?, max_length, &opts)
        }
        Command::Duration { value, hhmmss } => {
            let secs = parse_duration_seconds(&value)
                .ok_or_else(|| anyhow!("unrecognised duration: {}", value))?;
            if hhmmss {
                duration_hhmmss(secs)
            } else {
                duration_human(secs)
            }
        }
        Command::Size { bytes, precision } => byte_size_human(bytes, precision),
        Command::SortTitle { title, keep_quotes } => title_sort_key_with(&title, !keep_quotes),
        Command::Regex { pattern: source, tests } => {
            let re = pattern::compile(&source)?;
            let mut lines = vec![format!("valid: {}", re.as_str())];
            for sample in tests {
                let verdict = if re.is_match(&sample) { "match" } else { "no match" };
                lines.push(format!("{}: {}", sample, verdict));
            }
            lines.join("\n")
        }
        Command::Classes {
            input,
            scope,
            verbose,
            sort,
            elements,
            compact,
        } => {
            let text = load_file(&input)?;
            let found: Vec<ElementClasses> = if elements {
                serde_json::from_str(&text).context("parsing element list")?
            } else {
                collect_elements(&text, scope.as_deref())?
            };
            let opts = ClassOptions::new().verbose(verbose).sort_class_names(sort);
            let counts = enumerate_class_descriptors(&found, &opts);
            if compact {
                serde_json::to_string(&counts)?
            } else {
                serde_json::to_string_pretty(&counts)?
            }
        }
    };

    println!("{}", output);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_attr(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got {:?}", raw))
}

/// Returns the argument text, or stdin when it is "-".
fn load_text(arg: &str) -> Result<String> {
    if arg == "-" {
        return read_stdin();
    }
    Ok(arg.to_string())
}

/// Reads a file, or stdin when the path is "-".
fn load_file(target: &str) -> Result<String> {
    if target == "-" {
        return read_stdin();
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_attr() {
        assert_eq!(
            parse_attr("rel=nofollow"),
            Ok(("rel".to_string(), "nofollow".to_string()))
        );
        assert_eq!(parse_attr("data-x=a=b"), Ok(("data-x".to_string(), "a=b".to_string())));
        assert!(parse_attr("novalue").is_err());
        assert!(parse_attr("=x").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["thesolver", "truncate", "hello world", "8", "--anywhere"])
            .unwrap();
        match args.command {
            Command::Truncate { max_length, anywhere, .. } => {
                assert_eq!(max_length, 8);
                assert!(anywhere);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
