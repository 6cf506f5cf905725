use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use ctxml::{parse_file, Node, Result};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file path (UTF-8 or UTF-16 with a byte-order mark)
    #[arg(short, long)]
    file: String,

    /// Slash-separated child path to select, e.g. `config/server`
    #[arg(short, long)]
    path: Option<String>,

    /// Print this attribute of the selected node instead of its body
    #[arg(short, long)]
    attr: Option<String>,
}

fn main() {
    // Initialize the default subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    info!("Reading file: {}", args.file);
    let document = parse_file(&args.file)?;

    let Some(path) = args.path else {
        print_outline(document.root(), 0);
        return Ok(());
    };

    let selected = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .try_fold(document.root(), |node, segment| node.child(segment));

    let Some(node) = selected else {
        error!("No element at path: {}", path);
        std::process::exit(2);
    };

    let output = match &args.attr {
        Some(name) => node.attribute_bytes(name),
        None => node.body_bytes(),
    };
    match output {
        Some(bytes) => println!("{}", String::from_utf8_lossy(bytes)),
        None => info!("Selected node has no value to print"),
    }

    Ok(())
}

fn print_outline(node: Node<'_>, depth: usize) {
    if let Some(name) = node.name() {
        let attributes: String = node
            .attributes()
            .iter()
            .map(|attr| {
                let value = String::from_utf8_lossy(attr.value_bytes());
                format!(" {}=\"{}\"", attr.name(), value)
            })
            .collect();
        let body = node
            .body_bytes()
            .map(|bytes| format!(": {:?}", String::from_utf8_lossy(bytes)))
            .unwrap_or_default();
        println!("{}{}{}{}", "  ".repeat(depth), name, attributes, body);
    }

    let depth = if node.is_root() { depth } else { depth + 1 };
    for child in node.children() {
        print_outline(child, depth);
    }
}
