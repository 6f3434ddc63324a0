use std::env;
use std::process;

use sssp_lab::comparison::AlgorithmSelection;
use sssp_lab::graph::Graph;
use sssp_lab::{AlgorithmKind, Error, LabConfig, Session};

const USAGE: &str = "usage: sssp <graph-file> <start> [destination] \
[--algorithm dijkstra|bellman-ford|both] [--trace] [--export <file>] [--report <file>]";

/// Command line options; vertex numbers are 1-based as in graph files
#[derive(Debug)]
struct Options {
    graph_file: String,
    start: usize,
    destination: Option<usize>,
    selection: AlgorithmSelection,
    trace: bool,
    export_file: Option<String>,
    report_file: Option<String>,
}

fn parse_vertex(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(v) if v >= 1 => Ok(v - 1),
        _ => Err(format!("invalid vertex number: {}", arg)),
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut positional = Vec::new();
    let mut selection = AlgorithmSelection::Dijkstra;
    let mut trace = false;
    let mut export_file = None;
    let mut report_file = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--trace" => trace = true,
            "--algorithm" => {
                let value = iter.next().ok_or("--algorithm needs a value")?;
                selection = value.parse()?;
            }
            "--export" => export_file = Some(iter.next().ok_or("--export needs a file")?.clone()),
            "--report" => report_file = Some(iter.next().ok_or("--report needs a file")?.clone()),
            _ => positional.push(arg.as_str()),
        }
    }

    let (graph_file, start) = match positional.as_slice() {
        [file, start, ..] => (file.to_string(), parse_vertex(start)?),
        _ => return Err(USAGE.to_string()),
    };
    let destination = positional.get(2).map(|d| parse_vertex(d)).transpose()?;

    Ok(Options {
        graph_file,
        start,
        destination,
        selection,
        trace,
        export_file,
        report_file,
    })
}

fn run(options: Options) -> sssp_lab::Result<()> {
    let mut config = LabConfig::default();
    config.graph_file = options.graph_file.into();
    if let Some(file) = options.export_file.as_ref() {
        config.export_file = file.into();
    }
    if let Some(file) = options.report_file.as_ref() {
        config.report_file = file.into();
    }

    let mut session: Session<i32> = Session::new(config);
    match session.load() {
        Err(Error::GraphFileMissing(path)) => {
            eprintln!("Graph file {} does not exist; create it first", path.display());
            return Ok(());
        }
        other => other?,
    }

    let graph = session.graph();
    println!(
        "Loaded {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    if options.selection == AlgorithmSelection::Both {
        let report = session.compare(options.start, options.selection)?;
        for line in &report.logs {
            println!("{}", line);
        }
        if options.report_file.is_some() {
            session.save_report(&report)?;
        }
        return Ok(());
    }

    let kind = match options.selection {
        AlgorithmSelection::BellmanFord => AlgorithmKind::BellmanFord,
        _ => AlgorithmKind::Dijkstra,
    };

    let Some(result) = session.run(kind, options.start, options.trace)? else {
        eprintln!("The graph has negative weights; use --algorithm bellman-ford");
        return Ok(());
    };

    for line in &result.logs {
        println!("{}", line);
    }
    if result.has_negative_cycle {
        println!("Negative cycle reachable from the start vertex; distances are unreliable.");
    }

    if let Some(destination) = options.destination {
        let distance = result.distance_to(destination)?;
        let path = session
            .path_to(destination)
            .map(<[usize]>::to_vec)
            .unwrap_or_default();
        match distance {
            Some(d) if !path.is_empty() => {
                let labels: Vec<String> = path
                    .iter()
                    .map(|&v| session.graph().display_label(v))
                    .collect();
                println!("Shortest path ({}): {}", d, labels.join(" -> "));
            }
            _ => println!("No path to vertex {}", destination + 1),
        }
    }

    if options.report_file.is_some() {
        let report = session.compare(options.start, options.selection)?;
        session.save_report(&report)?;
    }

    if options.export_file.is_some() {
        session.export_last_path()?;
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(2);
        }
    };

    if let Err(e) = run(options) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
