//! Command-line interface for mathnav
//! Reads an HTML file, enriches every annotated math expression with ARIA
//! metadata, and writes the rewritten document to stdout.
//!
//! Usage:
//!   mathnav `<path>`                 - Print the rewritten HTML
//!   mathnav `<path>` --dump tree     - Print the built semantic trees instead
//!   mathnav `<path>` --dump json     - Same, as JSON
//!   mathnav `<path>` --nav           - Navigate the first expression with arrow keys

use clap::{Arg, ArgAction, Command, ValueHint};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, serialize, serialize::SerializeOpts};
use markup5ever_rcdom::{RcDom, SerializableHandle};
use mathnav::focus::NavigatorRegistry;
use mathnav::semantic::to_treeviz;
use mathnav::enhance_document;
use std::fs;
use std::io;

fn main() {
    let matches = Command::new("mathnav")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Enrich rendered math in an HTML document with ARIA metadata and keyboard navigation")
        .arg(
            Arg::new("path")
                .help("Path to the HTML file")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("dump")
                .long("dump")
                .short('d')
                .help("Print the built semantic trees instead of the rewritten HTML")
                .value_parser(["tree", "json"]),
        )
        .arg(
            Arg::new("nav")
                .long("nav")
                .help("Interactively navigate the first expression with the arrow keys")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error: cannot read {path}: {e}");
        std::process::exit(1);
    });

    let dom = parse_document(RcDom::default(), Default::default()).one(source.as_str());
    let (mut registry, errors) = enhance_document(&dom);
    for error in &errors {
        eprintln!("Warning: {error}");
    }

    if let Some(dump) = matches.get_one::<String>("dump") {
        handle_dump_command(&registry, dump);
        return;
    }

    if matches.get_flag("nav") {
        if let Err(e) = run_nav(&mut registry) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return;
    }

    match serialize_html(&dom) {
        Ok(html) => println!("{html}"),
        Err(e) => {
            eprintln!("Error: serialization failed: {e}");
            std::process::exit(1);
        }
    }
}

/// Print every built semantic tree in the requested format
fn handle_dump_command(registry: &NavigatorRegistry, format: &str) {
    for name in registry.names() {
        let Some(navigator) = registry.navigator(name) else {
            continue;
        };
        let tree = navigator.tree();
        match format {
            "json" => match serde_json::to_string_pretty(tree) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("Warning: cannot dump {name}: {e}"),
            },
            _ => println!("{}", to_treeviz(tree)),
        }
    }
}

/// Serialize the whole document back to HTML
fn serialize_html(dom: &RcDom) -> io::Result<String> {
    let mut output = Vec::new();
    let serializable = SerializableHandle::from(dom.document.clone());
    serialize(&mut output, &serializable, SerializeOpts::default())?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}

/// Interactive navigation over the first discovered expression
fn run_nav(registry: &mut NavigatorRegistry) -> io::Result<()> {
    let Some(focused) = registry.names().first().map(|s| s.to_string()) else {
        eprintln!("No navigable expressions found");
        return Ok(());
    };
    println!("Navigating {focused}; arrow keys move, q or Esc quits");

    enable_raw_mode()?;
    let result = nav_loop(registry, &focused);
    disable_raw_mode()?;
    result
}

fn nav_loop(registry: &mut NavigatorRegistry, focused: &str) -> io::Result<()> {
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => break,
            _ => {
                if registry.handle_key(focused, key) {
                    let name = registry.active_name(focused).unwrap_or_default();
                    match registry.active_speech(focused) {
                        // Raw mode needs explicit carriage returns
                        Some(speech) => print!("{name}: {speech}\r\n"),
                        None => print!("{name}\r\n"),
                    }
                }
            }
        }
    }
    Ok(())
}
