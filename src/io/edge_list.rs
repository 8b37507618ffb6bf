//! # EdgeList
//!
//! The EdgeList-Format consists of one non-comment-line per edge, `u v` for an unweighted
//! or `u v w` for a weighted edge. Vertices only exist as endpoints of edges.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Lines, Write},
    marker::PhantomData,
    path::Path,
};

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Whether the created graph is directed
    directed: bool,
    /// Whether repeated edges are merged (keeping the smaller weight)
    deduplicate: bool,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            directed: false,
            deduplicate: false,
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader for undirected multigraphs
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the graph read is directed
    pub fn directed(mut self, directed: bool) -> EdgeListReader {
        self.directed = directed;
        self
    }

    /// Sets whether repeated edges are merged into one
    pub fn deduplicate(mut self, deduplicate: bool) -> EdgeListReader {
        self.deduplicate = deduplicate;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G> GraphReader<G> for EdgeListReader
where
    G: GraphNew + GraphEdgeEditing,
    G::Key: FromStr,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut graph = G::new(self.directed);
        for edge in EdgeListEdgesReader::new(reader, &self.comment_identifier) {
            let Edge {
                source,
                target,
                weight,
            } = edge?;
            graph.add_vertices_and_edge(source, target, weight, !self.deduplicate);
        }
        Ok(graph)
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphNew + GraphEdgeEditing,
    G::Key: FromStr,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Iterator over the edges of an EdgeList-input that consumes the reader
pub struct EdgeListEdgesReader<'a, R, K> {
    /// Lines in the reader
    lines: Lines<R>,
    /// Comment identifier
    comment_identifier: &'a str,
    _key: PhantomData<K>,
}

impl<'a, R: BufRead, K: FromStr> EdgeListEdgesReader<'a, R, K> {
    /// Creates a new EdgeListEdgesReader
    pub fn new(reader: R, comment_identifier: &'a str) -> Self {
        Self {
            lines: reader.lines(),
            comment_identifier,
            _key: PhantomData,
        }
    }

    /// Tries to parse an edge from the next non-comment-line
    fn parse_edge_line(&mut self) -> Result<Option<Edge<K>>> {
        let Some(line) = next_content_line(&mut self.lines, self.comment_identifier)? else {
            return Ok(None);
        };
        let mut parts = line.split_whitespace();

        let source: K = parse_next_value!(parts, "Source vertex");
        let target: K = parse_next_value!(parts, "Target vertex");
        let weight: Weight = match parts.next() {
            Some(token) => parse_token!(token, "Weight"),
            None => 0.0,
        };

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            format!("Too many values in edge line {line:?}")
        );

        Ok(Some(Edge::new(source, target, weight)))
    }
}

impl<'a, R: BufRead, K: FromStr> Iterator for EdgeListEdgesReader<'a, R, K> {
    type Item = Result<Edge<K>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line().transpose()
    }
}

/// A writer for the EdgeList-Format.
/// Undirected edges are written once; unweighted edges without a weight column.
#[derive(Debug, Clone)]
pub struct EdgeListWriter {
    /// Whether weights are written at all
    weights: bool,
}

impl Default for EdgeListWriter {
    fn default() -> Self {
        Self { weights: true }
    }
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the weight column is written
    pub fn weights(mut self, weights: bool) -> EdgeListWriter {
        self.weights = weights;
        self
    }
}

impl<G: AdjacencyList> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        for Edge {
            source,
            target,
            weight,
        } in graph.keyed_edges()
        {
            if self.weights && weight != 0.0 {
                writeln!(writer, "{source} {target} {weight}")?;
            } else {
                writeln!(writer, "{source} {target}")?;
            }
        }

        writer.flush()
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: AdjacencyList> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}
