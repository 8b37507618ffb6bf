//! # Adjacency
//!
//! Both adjacency formats list one vertex per line, followed by its neighbors:
//! - unweighted: `u v1 v2 ...` separated by whitespace,
//! - weighted: `u<TAB>v1,w1<TAB>v2,w2 ...` separated by tabs.
//!
//! A line with a single vertex adds the vertex without edges.
//! Undirected graphs usually list every edge from both endpoints, so repeated edges are merged by
//! default (keeping the smaller weight).

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Write},
    path::Path,
};

use super::*;

/// A GraphReader for both adjacency formats
#[derive(Debug, Clone)]
pub struct AdjacencyReader {
    /// Whether entries are tab-separated `v,w` pairs
    weighted: bool,
    /// Whether the created graph is directed
    directed: bool,
    /// Whether repeated edges are merged
    deduplicate: bool,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for AdjacencyReader {
    fn default() -> Self {
        Self {
            weighted: false,
            directed: false,
            deduplicate: true,
            comment_identifier: "#".to_string(),
        }
    }
}

impl AdjacencyReader {
    /// Creates a reader for the unweighted format
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reader for the weighted format
    pub fn weighted() -> Self {
        Self {
            weighted: true,
            ..Self::default()
        }
    }

    /// Sets whether the graph read is directed
    pub fn directed(mut self, directed: bool) -> AdjacencyReader {
        self.directed = directed;
        self
    }

    /// Sets whether repeated edges are merged into one
    pub fn deduplicate(mut self, deduplicate: bool) -> AdjacencyReader {
        self.deduplicate = deduplicate;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> AdjacencyReader {
        self.comment_identifier = c.into();
        self
    }

    /// Splits a weighted entry `v,w`; a missing weight reads as unweighted
    fn parse_weighted_entry<K: FromStr>(entry: &str) -> Result<(K, Weight)> {
        let (v, w) = match entry.split_once(',') {
            Some((v, w)) => (v.trim(), Some(w.trim())),
            None => (entry.trim(), None),
        };

        let v: K = parse_token!(v, "Neighbor");
        let w: Weight = match w {
            Some(w) => parse_token!(w, "Weight"),
            None => 0.0,
        };
        Ok((v, w))
    }
}

impl<G> GraphReader<G> for AdjacencyReader
where
    G: GraphNew + GraphEdgeEditing,
    G::Key: FromStr,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut graph = G::new(self.directed);
        let mut lines = reader.lines();

        while let Some(line) = next_content_line(&mut lines, &self.comment_identifier)? {
            let mut parts: Box<dyn Iterator<Item = &str>> = if self.weighted {
                Box::new(line.split('\t').filter(|t| !t.trim().is_empty()))
            } else {
                Box::new(line.split_whitespace())
            };

            let u: G::Key = parse_next_value!(parts, "Vertex");
            graph.add_vertex(u.clone());

            for entry in parts {
                let (v, w): (G::Key, Weight) = if self.weighted {
                    Self::parse_weighted_entry(entry)?
                } else {
                    (parse_token!(entry, "Neighbor"), 0.0)
                };
                graph.add_vertices_and_edge(u.clone(), v, w, !self.deduplicate);
            }
        }

        Ok(graph)
    }
}

/// Trait for creating graphs from an AdjacencyReader.
/// Used as shorthand for default settings of either format
pub trait AdjacencyRead: Sized {
    /// Tries to read the graph in the unweighted format from a given reader
    fn try_read_adjacency<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph in the weighted format from a given reader
    fn try_read_weighted_adjacency<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph in the unweighted format from a given file
    fn try_read_adjacency_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_adjacency(BufReader::new(File::open(path)?))
    }

    /// Tries to read the graph in the weighted format from a given file
    fn try_read_weighted_adjacency_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_weighted_adjacency(BufReader::new(File::open(path)?))
    }
}

impl<G> AdjacencyRead for G
where
    G: GraphNew + GraphEdgeEditing,
    G::Key: FromStr,
{
    fn try_read_adjacency<R: BufRead>(reader: R) -> Result<Self> {
        AdjacencyReader::new().try_read_graph(reader)
    }

    fn try_read_weighted_adjacency<R: BufRead>(reader: R) -> Result<Self> {
        AdjacencyReader::weighted().try_read_graph(reader)
    }
}

/// A writer for both adjacency formats.
/// Every vertex gets its own line, including vertices without neighbors.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyWriter {
    /// Whether entries are written as tab-separated `v,w` pairs
    weighted: bool,
}

impl AdjacencyWriter {
    /// Creates a writer for the unweighted format
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer for the weighted format
    pub fn weighted() -> Self {
        Self { weighted: true }
    }
}

impl<G: AdjacencyList> GraphWriter<G> for AdjacencyWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        for u in graph.vertices() {
            write!(writer, "{}", graph.key_of(u))?;
            for nb in graph.neighbors_of(u) {
                if self.weighted {
                    write!(writer, "\t{},{}", graph.key_of(nb.node), nb.weight())?;
                } else {
                    write!(writer, " {}", graph.key_of(nb.node))?;
                }
            }
            writeln!(writer)?;
        }

        writer.flush()
    }
}

/// Trait for writing a graph in either adjacency format.
/// Shorthand for default settings.
pub trait AdjacencyWrite {
    /// Tries to write the graph in the unweighted format
    fn try_write_adjacency<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph in the weighted format
    fn try_write_weighted_adjacency<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph in the unweighted format to a file
    fn try_write_adjacency_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.try_write_adjacency(BufWriter::new(File::create(path)?))
    }

    /// Tries to write the graph in the weighted format to a file
    fn try_write_weighted_adjacency_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.try_write_weighted_adjacency(BufWriter::new(File::create(path)?))
    }
}

impl<G: AdjacencyList> AdjacencyWrite for G {
    fn try_write_adjacency<W: Write>(&self, writer: W) -> Result<()> {
        AdjacencyWriter::new().try_write_graph(self, writer)
    }

    fn try_write_weighted_adjacency<W: Write>(&self, writer: W) -> Result<()> {
        AdjacencyWriter::weighted().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn undirected_lines_are_merged() {
        let input = "1 2 3\n2 1\n3 1 3\n4";
        let g: Graph<u32> = Graph::try_read_adjacency(input.as_bytes()).unwrap();

        assert_eq!(g.keys().copied().collect_vec(), vec![1, 2, 3, 4]);
        assert_eq!(g.edge_multiplicity(&1, &2), 1);
        assert_eq!(g.edge_multiplicity(&1, &3), 1);
        assert!(g.is_neighbor(&3, &3));
        assert_eq!(g.number_of_edges(), 3);
        assert_eq!(g.degree_of(g.node_of(&4).unwrap()), 0);
    }

    #[test]
    fn keep_duplicates() {
        let input = "a b\nb a\n";
        let g: Graph<String> = AdjacencyReader::new()
            .deduplicate(false)
            .try_read_graph(input.as_bytes())
            .unwrap();
        assert_eq!(g.edge_multiplicity(&"a".into(), &"b".into()), 2);
    }

    #[test]
    fn directed_weighted() {
        let input = "s\tt,2\tu,7\nt\tu,3\n# u has no successors\nu\n";
        let g: Graph<char> = AdjacencyReader::weighted()
            .directed(true)
            .try_read_graph(input.as_bytes())
            .unwrap();

        assert!(g.is_directed());
        assert_eq!(g.number_of_edges(), 3);
        assert_eq!(g.weight_of(&'s', &'u'), Some(7.0));
        assert_eq!(g.weight_of(&'u', &'s'), None);
    }

    #[test]
    fn invalid_entries() {
        for input in ["1\t2,x\n", "1\tz,3\n", "a\t1,2\n"] {
            let err = Graph::<u32>::try_read_weighted_adjacency(input.as_bytes()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{input:?}");
        }
    }

    #[test]
    fn write_lists() {
        let mut g = Graph::from_edges(true, [(1, 2, 4.0), (1, 3, 0.0)]);
        g.add_vertex(4);

        let mut buffer = Vec::new();
        g.try_write_adjacency(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "1 2 3\n2\n3\n4\n");

        let mut buffer = Vec::new();
        g.try_write_weighted_adjacency(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "1\t2,4\t3,0\n2\n3\n4\n");
    }

    #[test]
    fn weighted_file_keeps_weights() {
        let mut g = Graph::from_edges(false, [(1, 2, 1.5), (2, 3, -2.0), (3, 1, 0.0)]);
        g.add_vertex(4);

        let path = std::env::temp_dir().join(format!(
            "wgraphs-weighted-adjacency-{}.txt",
            std::process::id()
        ));
        g.try_write_weighted_adjacency_file(&path).unwrap();
        let read = Graph::<u32>::try_read_weighted_adjacency_file(&path);
        std::fs::remove_file(&path).unwrap();
        let read = read.unwrap();

        assert_eq!(read.keys().copied().collect_vec(), vec![1, 2, 3, 4]);
        assert_eq!(read.number_of_edges(), 3);
        assert_eq!(read.weight_of(&1, &2), Some(1.5));
        assert_eq!(read.weight_of(&3, &2), Some(-2.0));
        assert_eq!(read.weight_of(&1, &3), Some(0.0));
        assert_eq!(read.degree_of(read.node_of(&4).unwrap()), 0);
    }
}
