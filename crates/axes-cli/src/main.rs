//! `axes` binary: parse queries and search canvas snapshots

use anyhow::Context;
use axes_cli::{load_canvas, logging, AxesConfig, SearchPolicy};
use axes_graph::EdgeOrientation;
use clap::{Arg, ArgAction, ArgMatches, Command};

fn cli() -> Command {
    Command::new("axes")
        .version(axes_cli::VERSION)
        .about("Query identity and access relationships in an artifact canvas")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Show how a query is parsed")
                .arg(Arg::new("query").required(true).help("Query text"))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output statements as JSON"),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("List artifacts matching a query plus everything connected to them")
                .arg(
                    Arg::new("canvas")
                        .long("canvas")
                        .required(true)
                        .help("Canvas snapshot (JSON)"),
                )
                .arg(
                    Arg::new("query")
                        .long("query")
                        .required(true)
                        .help("Query text"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help("Configuration file (TOML)"),
                )
                .arg(
                    Arg::new("directed")
                        .long("directed")
                        .action(ArgAction::SetTrue)
                        .help("Follow edges from source to target only"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output full nodes as JSON"),
                ),
        )
}

fn run_parse(args: &ArgMatches) -> anyhow::Result<()> {
    logging::init(AxesConfig::default().logging.profile);
    let raw = args.get_one::<String>("query").map_or("", String::as_str);
    let query = axes_query::parse(raw);

    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&query)?);
    } else {
        for statement in &query {
            println!("{statement}");
        }
    }
    Ok(())
}

fn run_search(args: &ArgMatches) -> anyhow::Result<()> {
    let config = match args.get_one::<String>("config") {
        Some(path) => AxesConfig::load(path).with_context(|| format!("loading {path}"))?,
        None => AxesConfig::default(),
    };
    logging::init(config.logging.profile);

    let mut policy = SearchPolicy::from(&config);
    if args.get_flag("directed") {
        policy = policy.with_orientation(EdgeOrientation::Directed);
    }

    let canvas_path = args
        .get_one::<String>("canvas")
        .context("missing --canvas")?;
    let raw = args.get_one::<String>("query").map_or("", String::as_str);
    let canvas = load_canvas(canvas_path).with_context(|| format!("loading {canvas_path}"))?;

    let shown = policy.filter(&canvas, raw);
    tracing::info!("{} of {} nodes shown", shown.len(), canvas.nodes.len());

    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&shown)?);
    } else {
        for node in shown {
            println!("{}", node.id());
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("parse", args)) => run_parse(args),
        Some(("search", args)) => run_search(args),
        _ => Ok(()),
    }
}
