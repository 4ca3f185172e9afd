//! Core graph types
//!
//! This module contains the read-only view of a graph that the resolver and
//! serializer work against, plus its implementations for petgraph graphs.

use petgraph::EdgeType;
use petgraph::graph::{Graph, IndexType};
use petgraph::stable_graph::StableGraph;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

/// A node as seen by the serializer
#[derive(Debug, Clone, Copy)]
pub struct DrawNode<'a, N> {
    pub index: usize,
    pub weight: &'a N,
}

/// An edge as seen by the serializer
#[derive(Debug, Clone, Copy)]
pub struct DrawEdge<'a, E> {
    pub index: usize,
    pub source: usize,
    pub target: usize,
    pub weight: &'a E,
}

pub type NodeIter<'a, N> = Box<dyn Iterator<Item = DrawNode<'a, N>> + 'a>;
pub type EdgeIter<'a, E> = Box<dyn Iterator<Item = DrawEdge<'a, E>> + 'a>;

/// Read-only traversal of a graph with stable integer node identifiers.
///
/// Node and edge iteration order is the order statements are emitted in.
pub trait DrawableGraph {
    type Node;
    type Edge;

    fn is_directed(&self) -> bool;

    fn draw_nodes(&self) -> NodeIter<'_, Self::Node>;

    fn draw_edges(&self) -> EdgeIter<'_, Self::Edge>;

    fn draw_node_count(&self) -> usize {
        self.draw_nodes().count()
    }

    fn draw_edge_count(&self) -> usize {
        self.draw_edges().count()
    }
}

impl<N, E, Ty: EdgeType, Ix: IndexType> DrawableGraph for Graph<N, E, Ty, Ix> {
    type Node = N;
    type Edge = E;

    fn is_directed(&self) -> bool {
        Graph::is_directed(self)
    }

    fn draw_nodes(&self) -> NodeIter<'_, N> {
        Box::new(self.node_indices().map(move |idx| DrawNode {
            index: idx.index(),
            weight: &self[idx],
        }))
    }

    fn draw_edges(&self) -> EdgeIter<'_, E> {
        Box::new(self.edge_references().map(move |edge| DrawEdge {
            index: edge.id().index(),
            source: edge.source().index(),
            target: edge.target().index(),
            weight: &self[edge.id()],
        }))
    }

    fn draw_node_count(&self) -> usize {
        self.node_count()
    }

    fn draw_edge_count(&self) -> usize {
        self.edge_count()
    }
}

impl<N, E, Ty: EdgeType, Ix: IndexType> DrawableGraph for StableGraph<N, E, Ty, Ix> {
    type Node = N;
    type Edge = E;

    fn is_directed(&self) -> bool {
        StableGraph::is_directed(self)
    }

    fn draw_nodes(&self) -> NodeIter<'_, N> {
        Box::new(self.node_indices().map(move |idx| DrawNode {
            index: idx.index(),
            weight: &self[idx],
        }))
    }

    fn draw_edges(&self) -> EdgeIter<'_, E> {
        Box::new(IntoEdgeReferences::edge_references(self).map(move |edge| DrawEdge {
            index: edge.id().index(),
            source: edge.source().index(),
            target: edge.target().index(),
            weight: &self[edge.id()],
        }))
    }

    fn draw_node_count(&self) -> usize {
        self.node_count()
    }

    fn draw_edge_count(&self) -> usize {
        self.edge_count()
    }
}
