/*!
# IO

Utilities for reading and writing graphs from and to line-oriented text formats.

## Formats

- **EdgeList**: one edge per line, `u v` or `u v w`.
- **Adjacency**: one vertex per line followed by its neighbors, `u v1 v2 v3 ...`.
- **WeightedAdjacency**: like Adjacency but tab-separated with weights, `u<TAB>v1,w1<TAB>v2,w2 ...`.

Vertex keys are parsed with [`FromStr`], so any key type of the graph works (`String`, integers, ...).
Empty lines and lines starting with the comment identifier (default `#`) are skipped;
a last line without a trailing line break is read as well.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format.
- [`GraphRead`] and [`GraphWrite`] abstract over reading/writing using a given [`FileFormat`].
*/

pub mod adjacency;
pub mod edge_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
    str::FromStr,
};

use crate::{ops::*, *};

pub use adjacency::*;
pub use edge_list::*;

/// Supported text formats
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    EdgeList,
    Adjacency,
    WeightedAdjacency,
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "edgelist" => Ok(FileFormat::EdgeList),
            "adjacency" => Ok(FileFormat::Adjacency),
            "weightedadjacency" => Ok(FileFormat::WeightedAdjacency),
            _ => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("Unknown FileFormat: {s}")
            )),
        }
    }
}

/// Trait for reading a graph with a configured reader
pub trait GraphReader<G> {
    /// Reads a graph from any buffered reader
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Opens the file at `path` and reads a graph from it
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for writing a graph with a configured writer
pub trait GraphWriter<G> {
    /// Writes the graph into any writer
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Creates the file at `path` and writes the graph into it
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Trait for reading undirected graphs when only a [`FileFormat`] is known.
/// Use the format-specific readers for other settings.
///
/// Automatically implemented for every editable graph whose keys can be parsed.
pub trait GraphRead: Sized {
    /// Reads a graph from the given reader according to the specified [`FileFormat`].
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead;

    /// Reads a graph from the given file according to the specified [`FileFormat`].
    fn try_from_file<P>(path: P, format: FileFormat) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?), format)
    }
}

impl<G> GraphRead for G
where
    G: GraphNew + GraphEdgeEditing,
    G::Key: FromStr,
{
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead,
    {
        match format {
            FileFormat::EdgeList => EdgeListReader::new().try_read_graph(reader),
            FileFormat::Adjacency => AdjacencyReader::new().try_read_graph(reader),
            FileFormat::WeightedAdjacency => AdjacencyReader::weighted().try_read_graph(reader),
        }
    }
}

/// Trait for writing graphs when only a [`FileFormat`] is known.
pub trait GraphWrite {
    /// Writes the graph to the given writer according to the specified [`FileFormat`].
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the graph to the given file according to the specified [`FileFormat`].
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_to_writer(BufWriter::new(File::create(path)?), format)
    }
}

impl<G: AdjacencyList> GraphWrite for G {
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::EdgeList => EdgeListWriter::new().try_write_graph(self, writer),
            FileFormat::Adjacency => AdjacencyWriter::new().try_write_graph(self, writer),
            FileFormat::WeightedAdjacency => {
                AdjacencyWriter::weighted().try_write_graph(self, writer)
            }
        }
    }
}

/// Returns the next line that is neither empty nor a comment, trimmed
fn next_content_line<R: BufRead>(
    lines: &mut std::io::Lines<R>,
    comment_identifier: &str,
) -> Result<Option<String>> {
    for line in lines {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(comment_identifier) {
            continue;
        }
        return Ok(Some(trimmed.to_string()));
    }
    Ok(None)
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let Some(token) = $iterator.next() else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of line when parsing {}.", $name)
            ));
        };
        parse_token!(token, $name)
    }};
}

/// Tries to parse a token and returns early if it fails
macro_rules! parse_token {
    ($token : expr, $name : expr) => {{
        let token = $token;
        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid value {:?} found. Cannot parse {}.", token, $name)
                ));
            }
        }
    }};
}

use io_error;
use parse_next_value;
use parse_token;
use raise_error_unless;
