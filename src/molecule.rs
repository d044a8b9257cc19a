use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::element;

/// The bond written between two atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bond {
    /// No symbol was written.
    #[default]
    Unspecified,
    Single,
    Double,
    Triple,
    Aromatic,
    /// `/`
    Up,
    /// `\`
    Down,
}

impl Bond {
    pub fn from_symbol(c: char) -> Option<Self> {
        Some(match c {
            '-' => Bond::Single,
            '=' => Bond::Double,
            '#' => Bond::Triple,
            ':' => Bond::Aromatic,
            '/' => Bond::Up,
            '\\' => Bond::Down,
            _ => return None,
        })
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Bond::Unspecified => "",
            Bond::Single => "-",
            Bond::Double => "=",
            Bond::Triple => "#",
            Bond::Aromatic => ":",
            Bond::Up => "/",
            Bond::Down => "\\",
        }
    }

    pub fn is_directional(&self) -> bool {
        matches!(self, Bond::Up | Bond::Down)
    }
}

impl Display for Bond {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.symbol())
    }
}

/// A single atom, as written in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    pub(crate) index: usize,
    pub(crate) symbol: &'static str,
    pub(crate) isotope: Option<u16>,
    pub(crate) charge: i8,
    pub(crate) hydrogens: Option<u8>,
    pub(crate) chirality: Option<String>,
    pub(crate) class: Option<u32>,
    pub(crate) bracket: bool,
}

impl Atom {
    pub(crate) fn organic(symbol: &'static str) -> Self {
        Self {
            index: 0,
            symbol,
            isotope: None,
            charge: 0,
            hydrogens: None,
            chirality: None,
            class: None,
            bracket: false,
        }
    }

    /// Position of the atom in order of appearance.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The symbol as written; lowercase for aromatic atoms.
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// The capitalized element symbol, `*` for the wildcard.
    pub fn element(&self) -> &'static str {
        element::element_of(self.symbol)
    }

    pub fn atomic_number(&self) -> u8 {
        element::atomic_number(self.symbol).unwrap_or(0)
    }

    pub fn is_aromatic(&self) -> bool {
        element::is_aromatic_symbol(self.symbol)
    }

    pub fn isotope(&self) -> Option<u16> {
        self.isotope
    }

    pub fn charge(&self) -> i8 {
        self.charge
    }

    /// Explicit hydrogen count; only bracket atoms carry one.
    pub fn hydrogen_count(&self) -> Option<u8> {
        self.hydrogens
    }

    pub fn chirality(&self) -> Option<&str> {
        self.chirality.as_deref()
    }

    pub fn atom_class(&self) -> Option<u32> {
        self.class
    }

    pub fn is_bracket(&self) -> bool {
        self.bracket
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        if !self.bracket {
            return write!(f, "{}", self.symbol);
        }
        write!(f, "[")?;
        if let Some(isotope) = self.isotope {
            write!(f, "{isotope}")?;
        }
        write!(f, "{}", self.symbol)?;
        if let Some(chirality) = &self.chirality {
            write!(f, "{chirality}")?;
        }
        match self.hydrogens {
            Some(0) | None => {}
            Some(1) => write!(f, "H")?,
            Some(n) => write!(f, "H{n}")?,
        }
        match self.charge {
            0 => {}
            1 => write!(f, "+")?,
            -1 => write!(f, "-")?,
            c if c > 0 => write!(f, "+{c}")?,
            c => write!(f, "{c}")?,
        }
        if let Some(class) = self.class {
            write!(f, ":{class}")?;
        }
        write!(f, "]")
    }
}

pub type MoleculeGraph = UnGraph<Atom, Bond>;

/// A parsed molecule. Node `i` of the graph is atom `i`.
///
/// Only the parser builds molecules; once returned they are read-only.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    graph: MoleculeGraph,
    fragments: usize,
}

impl Molecule {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds an atom, assigning it the next index.
    pub(crate) fn add_atom(&mut self, mut atom: Atom) -> usize {
        atom.index = self.graph.node_count();
        self.graph.add_node(atom).index()
    }

    /// Callers guarantee `a != b` and that the pair is not bonded yet.
    pub(crate) fn add_bond(&mut self, a: usize, b: usize, bond: Bond) -> EdgeIndex {
        debug_assert!(a != b && !self.has_bond(a, b));
        self.graph
            .add_edge(NodeIndex::new(a), NodeIndex::new(b), bond)
    }

    pub(crate) fn set_fragment_count(&mut self, fragments: usize) {
        self.fragments = fragments;
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.graph.node_weight(NodeIndex::new(index))
    }

    pub fn atoms(&self) -> impl Iterator<Item = &Atom> + '_ {
        self.graph.node_weights()
    }

    /// Every bond as `(a, b, bond)` with `a < b`, in order of creation.
    pub fn bonds(&self) -> impl Iterator<Item = (usize, usize, Bond)> + '_ {
        self.graph.edge_references().map(|edge| {
            let (a, b) = (edge.source().index(), edge.target().index());
            (a.min(b), a.max(b), *edge.weight())
        })
    }

    /// Whether atoms `a` and `b` are bonded. Order does not matter;
    /// out-of-range indices are simply not bonded.
    pub fn has_bond(&self, a: usize, b: usize) -> bool {
        self.bond(a, b).is_some()
    }

    pub fn bond(&self, a: usize, b: usize) -> Option<Bond> {
        if a >= self.atom_count() || b >= self.atom_count() {
            return None;
        }
        self.graph
            .find_edge(NodeIndex::new(a), NodeIndex::new(b))
            .map(|edge| self.graph[edge])
    }

    /// Number of `.`-separated fragments the input was written as.
    pub fn fragment_count(&self) -> usize {
        self.fragments
    }

    pub fn graph(&self) -> &MoleculeGraph {
        &self.graph
    }
}
