use lazy_static::lazy_static;
use std::collections::HashMap;

/// Every element symbol accepted inside a bracket atom, in periodic order.
const PERIODIC_TABLE: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh",
    "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Symbols that may be written without brackets.
/// Two-letter symbols come first so that the longest match wins.
pub const ORGANIC_SUBSET: [&str; 17] = [
    "Cl", "Br", "B", "C", "N", "O", "P", "S", "F", "I", "b", "c", "n", "o", "p", "s", "*",
];

/// Aromatic spellings accepted inside brackets, two-letter forms first.
const BRACKET_AROMATIC: [&str; 9] = ["se", "as", "te", "b", "c", "n", "o", "p", "s"];

pub const WILDCARD: &str = "*";

lazy_static! {
    /// Maps every symbol a bracket atom may spell to its atomic number
    /// (0 for the wildcard). Aromatic spellings share the number of their element.
    static ref BRACKET_SYMBOLS: HashMap<&'static str, u8> = {
        let mut symbols = HashMap::new();
        for (i, symbol) in PERIODIC_TABLE.iter().enumerate() {
            symbols.insert(*symbol, i as u8 + 1);
        }
        for aromatic in BRACKET_AROMATIC {
            let number = PERIODIC_TABLE
                .iter()
                .position(|s| s.eq_ignore_ascii_case(aromatic))
                .map(|i| i as u8 + 1)
                .unwrap_or(0);
            symbols.insert(aromatic, number);
        }
        symbols.insert(WILDCARD, 0);
        symbols
    };
}

/// Returns the interned spelling of a bracket-atom symbol, if it names an element.
pub fn bracket_symbol(symbol: &str) -> Option<&'static str> {
    BRACKET_SYMBOLS.get_key_value(symbol).map(|(k, _)| *k)
}

/// Longest organic-subset symbol at the start of `input`.
pub fn organic_symbol(input: &str) -> Option<&'static str> {
    ORGANIC_SUBSET
        .iter()
        .find(|symbol| input.starts_with(**symbol))
        .copied()
}

/// Atomic number of a symbol as written (lowercase aromatic forms included).
pub fn atomic_number(symbol: &str) -> Option<u8> {
    BRACKET_SYMBOLS.get(symbol).copied()
}

/// The capitalized element symbol for an atom as written, e.g. `se` -> `Se`.
pub fn element_of(symbol: &'static str) -> &'static str {
    match atomic_number(symbol) {
        Some(n) if n > 0 => PERIODIC_TABLE[n as usize - 1],
        _ => symbol,
    }
}

/// Lowercase spellings mark aromatic atoms.
pub fn is_aromatic_symbol(symbol: &str) -> bool {
    symbol.starts_with(|c: char| c.is_ascii_lowercase())
}
