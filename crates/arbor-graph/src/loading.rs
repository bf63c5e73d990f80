// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


//! DIMACS graph loader.
//!
//! Reads the edge format used by the DIMACS clique and colouring benchmarks
//! into a [`SimpleGraph`]:
//!
//! ```raw
//! c optional comment lines
//! p edge <num_vertices> <num_edges>
//! e <u> <v>
//! ...
//! ```
//!
//! Vertex ids in the file are 1-based and converted to 0-based
//! `VertexIndex` values. The header keyword may be `edge`, `edges` or `col`.
//! Blank lines are skipped. Repeated edges are accepted (as in many of the
//! published instances) and stored once; the declared edge count is only
//! checked when `strict_edge_count` is enabled.

use crate::{
    index::VertexIndex,
    simple::{GraphBuilder, SimpleGraph},
};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    num::ParseIntError,
    path::Path,
};
use thiserror::Error;

/// The error type for the graph loading process.
#[derive(Debug, Error)]
pub enum GraphLoaderError {
    /// An I/O error occurred while reading the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The input ended before a `p` header line was seen.
    #[error("missing `p edge <n> <m>` header line")]
    MissingHeader,
    /// A second `p` line was encountered.
    #[error("line {line}: duplicate problem header")]
    DuplicateHeader { line: usize },
    /// An `e` line appeared before the header.
    #[error("line {line}: edge line before problem header")]
    EdgeBeforeHeader { line: usize },
    /// A line did not have the expected shape.
    #[error("line {line}: malformed line `{content}`")]
    MalformedLine { line: usize, content: String },
    /// A numeric token could not be parsed.
    #[error("line {line}: could not parse token `{token}`: {source}")]
    Parse {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    /// An edge endpoint was `0` or larger than the declared vertex count.
    #[error("line {line}: vertex id {vertex} out of range 1..={num_vertices}")]
    VertexOutOfRange {
        line: usize,
        vertex: usize,
        num_vertices: usize,
    },
    /// An edge joined a vertex to itself.
    #[error("line {line}: self-loop on vertex {vertex}")]
    SelfLoop { line: usize, vertex: usize },
    /// The header declares more vertices than the loader accepts.
    #[error("line {line}: header declares {num_vertices} vertices, more than the limit of {limit}")]
    TooManyVertices {
        line: usize,
        num_vertices: usize,
        limit: usize,
    },
    /// The number of distinct edges differs from the header (strict mode only).
    #[error("header declares {declared} edges but {found} distinct edges were read")]
    EdgeCountMismatch { declared: usize, found: usize },
}

/// Default upper bound on the vertex count accepted from a header.
/// The adjacency matrix of such a graph occupies 128 MiB.
pub const DEFAULT_MAX_VERTICES: usize = 1 << 15;

/// A configurable loader for DIMACS edge-format graphs.
///
/// # Configuration
/// * `strict_edge_count`: if true, loading fails when the number of distinct
///   edges read differs from the count declared in the header.
/// * `max_vertices`: headers declaring more vertices are rejected before any
///   adjacency storage is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphLoader {
    strict_edge_count: bool,
    max_vertices: usize,
}

impl Default for GraphLoader {
    fn default() -> Self {
        Self {
            strict_edge_count: false,
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }
}

impl GraphLoader {
    /// Creates a new `GraphLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether the declared edge count must match the edges read.
    #[inline]
    pub fn strict_edge_count(mut self, yes: bool) -> Self {
        self.strict_edge_count = yes;
        self
    }

    /// Sets the largest vertex count a header may declare.
    #[inline]
    pub fn max_vertices(mut self, limit: usize) -> Self {
        self.max_vertices = limit;
        self
    }

    /// Loads a graph from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<SimpleGraph, GraphLoaderError> {
        let mut builder: Option<GraphBuilder> = None;
        let mut declared_edges = 0usize;

        for (line_index, line) in rdr.lines().enumerate() {
            let line_number = line_index + 1;
            let line = line?;
            let trimmed = line.trim();
            let mut tokens = trimmed.split_whitespace();

            match tokens.next() {
                None | Some("c") => continue,
                Some("p") => {
                    if builder.is_some() {
                        return Err(GraphLoaderError::DuplicateHeader { line: line_number });
                    }
                    match tokens.next() {
                        Some("edge" | "edges" | "col") => {}
                        _ => return Err(malformed(line_number, trimmed)),
                    }
                    let num_vertices = parse_token(&mut tokens, line_number, trimmed)?;
                    declared_edges = parse_token(&mut tokens, line_number, trimmed)?;
                    if tokens.next().is_some() {
                        return Err(malformed(line_number, trimmed));
                    }
                    if num_vertices > self.max_vertices {
                        return Err(GraphLoaderError::TooManyVertices {
                            line: line_number,
                            num_vertices,
                            limit: self.max_vertices,
                        });
                    }
                    builder = Some(GraphBuilder::new(num_vertices));
                }
                Some("e") => {
                    let graph = builder
                        .as_mut()
                        .ok_or(GraphLoaderError::EdgeBeforeHeader { line: line_number })?;
                    let u = parse_token(&mut tokens, line_number, trimmed)?;
                    let v = parse_token(&mut tokens, line_number, trimmed)?;
                    if tokens.next().is_some() {
                        return Err(malformed(line_number, trimmed));
                    }

                    let num_vertices = graph.num_vertices();
                    for vertex in [u, v] {
                        if vertex == 0 || vertex > num_vertices {
                            return Err(GraphLoaderError::VertexOutOfRange {
                                line: line_number,
                                vertex,
                                num_vertices,
                            });
                        }
                    }
                    if u == v {
                        return Err(GraphLoaderError::SelfLoop {
                            line: line_number,
                            vertex: u,
                        });
                    }

                    graph.add_edge(VertexIndex::new(u - 1), VertexIndex::new(v - 1));
                }
                Some(_) => return Err(malformed(line_number, trimmed)),
            }
        }

        let builder = builder.ok_or(GraphLoaderError::MissingHeader)?;
        if self.strict_edge_count && builder.num_edges() != declared_edges {
            return Err(GraphLoaderError::EdgeCountMismatch {
                declared: declared_edges,
                found: builder.num_edges(),
            });
        }
        Ok(builder.build())
    }

    /// Loads a graph from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<SimpleGraph, GraphLoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads a graph from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<SimpleGraph, GraphLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads a graph from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<SimpleGraph, GraphLoaderError> {
        self.from_bufread(s.as_bytes())
    }
}

#[inline]
fn malformed(line: usize, content: &str) -> GraphLoaderError {
    GraphLoaderError::MalformedLine {
        line,
        content: content.to_string(),
    }
}

fn parse_token<'a, I>(tokens: &mut I, line: usize, content: &str) -> Result<usize, GraphLoaderError>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next().ok_or_else(|| malformed(line, content))?;
    token.parse::<usize>().map_err(|source| GraphLoaderError::Parse {
        line,
        token: token.to_string(),
        source,
    })
}
