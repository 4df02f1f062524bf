//! Command-line parsing and trace construction
//!
//! ```text
//! stepviz [sort] [ALGORITHM] [--array 5,3,8] [--size N] [--seed S] [--preset P]
//! stepviz graph [ALGORITHM] [--edges A-B:1,B-C:2] [--directed] [--start A] [--target C]
//! stepviz cycle [--values 1,2,3,4] [--cycle-to 1 | --no-cycle] [--max-steps 50]
//! stepviz list
//!
//! global: --export  --speed MS  --config PATH  -h/--help
//! ```

use crate::config::Settings;
use crate::errors::{Result, StepvizError};
use crate::frame::{Timeline, Trace};
use crate::graph::{Graph, GraphAlgorithm};
use crate::input::{generate_array, parse_array, parse_edges, ArrayPreset, EdgeSpec};
use crate::sorting::SortAlgorithm;
use crate::structures::LinkedList;
use std::path::PathBuf;
use std::str::FromStr;

/// Graph used when `--edges` is not given
pub const DEFAULT_EDGES: &str = "A-B:4,A-C:2,B-C:5,B-D:10,C-E:3,E-D:4,D-F:11";

/// List used when `--values` is not given
pub const DEFAULT_CYCLE_VALUES: [i64; 4] = [1, 2, 3, 4];

pub const USAGE: &str = "\
Usage: stepviz [COMMAND] [OPTIONS]

Commands:
  sort [ALGORITHM]    record a sorting algorithm (default)
  graph [ALGORITHM]   record a graph algorithm (default: bfs)
  cycle               record Floyd's cycle detection on a linked list
  list                list the available algorithms

Sort options:
  --array 5,3,8       sort these values instead of a generated array
  --size N            generated array size (3-15)
  --seed S            generator seed
  --preset P          random, sorted, reverse or nearly

Graph options:
  --edges A-B:1,B-C   edge list, weights default to 1
  --directed          treat edges as one-way
  --start V           start vertex (default: first vertex)
  --target V          target vertex (default: last vertex)

Cycle options:
  --values 1,2,3,4    list contents
  --cycle-to I        tail links back to index I (default: 1)
  --no-cycle          leave the list acyclic
  --max-steps N       stop after N pointer moves

Global options:
  --export            print the recorded frames as JSON instead of playing them
  --speed MS          delay between frames while playing
  --config PATH       settings file (default: ./stepviz.toml if present)
  -h, --help          show this message";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Sort {
        algorithm: Option<SortAlgorithm>,
        array: Option<Vec<i64>>,
        size: Option<usize>,
        seed: Option<u64>,
        preset: Option<ArrayPreset>,
    },
    Graph {
        algorithm: GraphAlgorithm,
        edges: Option<Vec<EdgeSpec>>,
        directed: bool,
        start: Option<String>,
        target: Option<String>,
    },
    Cycle {
        values: Option<Vec<i64>>,
        cycle_to: Option<usize>,
        no_cycle: bool,
        max_steps: Option<usize>,
    },
    List,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cli {
    pub command: Command,
    pub export: bool,
    pub speed_ms: Option<u64>,
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse arguments, not including the program name
    pub fn parse<I, S>(args: I) -> Result<Cli>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into).peekable();

        let mut cli = Cli {
            command: Command::Sort {
                algorithm: None,
                array: None,
                size: None,
                seed: None,
                preset: None,
            },
            export: false,
            speed_ms: None,
            config: None,
        };

        match args.peek().map(String::as_str) {
            Some("sort") => {
                args.next();
            }
            Some("graph") => {
                args.next();
                cli.command = Command::Graph {
                    algorithm: GraphAlgorithm::Bfs,
                    edges: None,
                    directed: false,
                    start: None,
                    target: None,
                };
            }
            Some("cycle") => {
                args.next();
                cli.command = Command::Cycle {
                    values: None,
                    cycle_to: None,
                    no_cycle: false,
                    max_steps: None,
                };
            }
            Some("list") => {
                args.next();
                cli.command = Command::List;
            }
            _ => {}
        }

        while let Some(arg) = args.next() {
            let mut value = |flag: &str| args.next().ok_or_else(|| StepvizError::MissingValue(flag.to_string()));

            match arg.as_str() {
                "-h" | "--help" => cli.command = Command::Help,
                "--export" => cli.export = true,
                "--speed" => cli.speed_ms = Some(parse_number("--speed", &value("--speed")?)?),
                "--config" => cli.config = Some(PathBuf::from(value("--config")?)),
                flag if flag.starts_with('-') => apply_command_flag(&mut cli.command, flag, &mut value)?,
                positional => set_positional(&mut cli.command, positional)?,
            }
        }

        Ok(cli)
    }

    /// Fold the command-line overrides into `settings`
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(speed) = self.speed_ms {
            settings.speed_ms = speed;
        }
        if let Command::Sort { algorithm, size, seed, preset, .. } = &self.command {
            settings.algorithm = algorithm.unwrap_or(settings.algorithm);
            settings.array_size = size.unwrap_or(settings.array_size);
            settings.seed = seed.unwrap_or(settings.seed);
            settings.preset = preset.unwrap_or(settings.preset);
        }
        if let Command::Cycle { max_steps: Some(steps), .. } = &self.command {
            settings.max_floyd_steps = *steps;
        }
        *settings = settings.clone().normalized();
    }
}

fn parse_number<T: FromStr>(flag: &str, text: &str) -> Result<T> {
    text.trim().parse().map_err(|_| StepvizError::InvalidValue {
        flag: flag.to_string(),
        value: text.to_string(),
    })
}

fn set_positional(command: &mut Command, arg: &str) -> Result<()> {
    match command {
        Command::Sort { algorithm, .. } if algorithm.is_none() => {
            *algorithm = Some(arg.parse()?);
        }
        Command::Graph { algorithm, .. } => *algorithm = arg.parse()?,
        _ => return Err(StepvizError::UnknownCommand(arg.to_string())),
    }
    Ok(())
}

fn apply_command_flag(
    command: &mut Command,
    flag: &str,
    value: &mut impl FnMut(&str) -> Result<String>,
) -> Result<()> {
    match (command, flag) {
        (Command::Sort { array, .. }, "--array") => {
            let text = value(flag)?;
            *array = Some(parse_array(&text).ok_or(StepvizError::EmptyArray(text))?);
        }
        (Command::Sort { size, .. }, "--size") => *size = Some(parse_number(flag, &value(flag)?)?),
        (Command::Sort { seed, .. }, "--seed") => *seed = Some(parse_number(flag, &value(flag)?)?),
        (Command::Sort { preset, .. }, "--preset") => *preset = Some(value(flag)?.parse()?),

        (Command::Graph { edges, .. }, "--edges") => *edges = Some(parse_edges(&value(flag)?)?),
        (Command::Graph { directed, .. }, "--directed") => *directed = true,
        (Command::Graph { start, .. }, "--start") => *start = Some(value(flag)?),
        (Command::Graph { target, .. }, "--target") => *target = Some(value(flag)?),

        (Command::Cycle { values, .. }, "--values") => {
            let text = value(flag)?;
            *values = Some(parse_array(&text).ok_or(StepvizError::EmptyArray(text))?);
        }
        (Command::Cycle { cycle_to, .. }, "--cycle-to") => {
            *cycle_to = Some(parse_number(flag, &value(flag)?)?)
        }
        (Command::Cycle { no_cycle, .. }, "--no-cycle") => *no_cycle = true,
        (Command::Cycle { max_steps, .. }, "--max-steps") => {
            *max_steps = Some(parse_number(flag, &value(flag)?)?)
        }

        _ => return Err(StepvizError::UnknownFlag(flag.to_string())),
    }
    Ok(())
}

/// Record the trace a command asks for
pub fn build_trace(command: &Command, settings: &Settings) -> Result<Trace> {
    match command {
        Command::Sort { array, .. } => {
            let input = match array {
                Some(values) => values.clone(),
                None => generate_array(settings.array_size, settings.seed, settings.preset),
            };
            let algorithm = settings.algorithm;
            Ok(Trace::Sort {
                algorithm,
                timeline: Timeline::new(algorithm.record(&input)),
            })
        }

        Command::Graph {
            algorithm,
            edges,
            directed,
            start,
            target,
        } => {
            let edges = match edges {
                Some(edges) => edges.clone(),
                None => parse_edges(DEFAULT_EDGES)?,
            };
            let mut graph = Graph::new(*directed);
            for edge in edges {
                graph.add_edge(edge.from, edge.to, edge.weight);
            }

            let vertices = graph.vertices();
            let start = start.clone().or_else(|| vertices.first().cloned()).unwrap_or_default();
            let target = target.clone().or_else(|| vertices.last().cloned()).unwrap_or_default();
            for (needed, vertex) in [
                (algorithm.needs_start(), &start),
                (algorithm.needs_target(), &target),
            ] {
                if needed && !graph.contains_vertex(vertex) {
                    tracing::warn!(vertex = %vertex, "vertex not in graph");
                    return Err(StepvizError::VertexNotFound(vertex.clone()));
                }
            }

            let frames = algorithm.record(&graph, &start, &target);
            if frames.is_empty() {
                return Err(StepvizError::EmptyTrace(format!("{} on an empty graph", algorithm.title())));
            }
            Ok(Trace::Graph {
                title: algorithm.title().to_string(),
                graph: graph.serialize(),
                timeline: Timeline::new(frames),
            })
        }

        Command::Cycle {
            values,
            cycle_to,
            no_cycle,
            ..
        } => {
            let values = values.clone().unwrap_or_else(|| DEFAULT_CYCLE_VALUES.to_vec());
            let mut list = LinkedList::new();
            for &value in &values {
                list.append(value);
            }

            if !no_cycle {
                let index = cycle_to.unwrap_or(1);
                if list.create_tail_cycle_to_index(index).is_none() {
                    return Err(StepvizError::InvalidCycleIndex {
                        index,
                        len: list.len(),
                    });
                }
            }

            Ok(Trace::Cycle {
                cycle_to_index: list.cycle_to_index(),
                timeline: Timeline::new(list.detect_cycle_floyd_steps(settings.max_floyd_steps)),
                values,
            })
        }

        Command::List | Command::Help => Err(StepvizError::EmptyTrace(
            "this command does not record anything".to_string(),
        )),
    }
}

/// Text printed by `stepviz list`
pub fn algorithm_listing() -> String {
    let mut out = String::from("Sorting algorithms:\n");
    for algorithm in SortAlgorithm::ALL {
        let stable = if algorithm.is_stable() { "  (stable)" } else { "" };
        out.push_str(&format!("  {:<12}{}{}\n", algorithm.key(), algorithm.title(), stable));
    }
    out.push_str("\nGraph algorithms:\n");
    for algorithm in GraphAlgorithm::ALL {
        out.push_str(&format!("  {:<15}{}\n", algorithm.key(), algorithm.title()));
    }
    out
}
