use tracing::{debug, instrument, trace, warn};

use super::atom::{read_bracket_atom, read_organic_atom, semantic_warning};
use super::ring::{closing_bond, OpenRing, RingTable};
use super::SmilesError;
use crate::{Atom, Bond, Molecule, RulePolicy};

/// Parses a SMILES string into a [`Molecule`].
///
/// # Arguments
///
/// * `smiles` - The SMILES string to parse.
/// * `strict` - Reject semantic oddities (out-of-range charges or hydrogen
///   counts) instead of logging them.
/// * `policy` - Grammar relaxations to tolerate.
///
/// # Returns
///
/// * `Result<Molecule, SmilesError>` - The molecule, or the first rule the input breaks.
#[instrument(level = "debug")]
pub fn parse_smiles(smiles: &str, strict: bool, policy: RulePolicy) -> Result<Molecule, SmilesError> {
    if smiles.is_empty() {
        return Err(SmilesError::EmptyInput { pos: 0 });
    }
    Parser::new(smiles, strict, policy).run()
}

/// Parses with no relaxations, logging semantic warnings.
pub fn parse_smiles_default(smiles: &str) -> Result<Molecule, SmilesError> {
    parse_smiles(smiles, false, RulePolicy::empty())
}

/// What the scan saw last. Decides which tokens may come next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prev {
    Start,
    Atom,
    RingLabel,
    Bond,
    OpenBranch,
    CloseBranch,
    Dot,
}

#[derive(Debug, Clone, Copy)]
struct PendingBond {
    bond: Bond,
    symbol: char,
    pos: usize,
    /// Written directly after an atom or ring label, so a label may follow.
    after_atom: bool,
}

#[derive(Debug, Clone, Copy)]
struct Branch {
    /// `None` only when a branch without a preceding atom was tolerated.
    atom: Option<usize>,
    component: usize,
    pos: usize,
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    strict: bool,
    policy: RulePolicy,
    molecule: Molecule,
    current: Option<usize>,
    pending: Option<PendingBond>,
    branches: Vec<Branch>,
    rings: RingTable,
    prev: Prev,
    component: usize,
    components: usize,
    /// An atom was placed since the last separator.
    fragment_has_atom: bool,
    /// Offset of the last separator.
    last_dot: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, strict: bool, policy: RulePolicy) -> Self {
        Self {
            input,
            pos: 0,
            strict,
            policy,
            molecule: Molecule::new(),
            current: None,
            pending: None,
            branches: Vec::new(),
            rings: RingTable::default(),
            prev: Prev::Start,
            component: 0,
            components: 1,
            fragment_has_atom: false,
            last_dot: 0,
        }
    }

    fn run(mut self) -> Result<Molecule, SmilesError> {
        while let Some(c) = self.peek() {
            trace!(pos = self.pos, token = %c, "scan");
            match c {
                '(' => self.open_branch()?,
                ')' => self.close_branch()?,
                '.' => self.separator()?,
                '%' | '0'..='9' => self.ring_label(c)?,
                '[' => {
                    let (atom, len) = read_bracket_atom(&self.input[self.pos..], self.pos)?;
                    self.check_semantics(&atom)?;
                    self.place_atom(atom, len);
                }
                _ => match Bond::from_symbol(c) {
                    Some(bond) => self.bond_symbol(bond, c)?,
                    None => self.organic_atom(c)?,
                },
            }
        }
        self.finish()
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Accepts a relaxed construct when the policy allows it.
    fn tolerate(&self, relaxation: RulePolicy, err: SmilesError) -> Result<(), SmilesError> {
        if self.policy.allows(relaxation) {
            warn!(?relaxation, "Tolerating: {err}");
            Ok(())
        } else {
            Err(err)
        }
    }

    /// A bond symbol must be followed by an atom or ring label.
    fn reject_pending_bond(&self) -> Result<(), SmilesError> {
        match self.pending {
            Some(pending) => Err(SmilesError::DanglingBondSymbol {
                pos: pending.pos,
                symbol: pending.symbol,
            }),
            None => Ok(()),
        }
    }

    fn check_semantics(&self, atom: &Atom) -> Result<(), SmilesError> {
        if let Some(reason) = semantic_warning(atom) {
            if self.strict {
                return Err(SmilesError::StrictViolation {
                    pos: self.pos,
                    reason,
                });
            }
            warn!(pos = self.pos, "{reason}");
        }
        Ok(())
    }

    fn organic_atom(&mut self, c: char) -> Result<(), SmilesError> {
        match read_organic_atom(&self.input[self.pos..]) {
            Some((atom, len)) => {
                self.place_atom(atom, len);
                Ok(())
            }
            None if c.is_ascii_alphabetic() => Err(SmilesError::UnrecognizedAtom {
                pos: self.pos,
                symbol: c,
            }),
            None => Err(SmilesError::UnexpectedCharacter {
                pos: self.pos,
                found: c,
            }),
        }
    }

    /// Adds the atom and bonds it to the current atom, if there is one.
    fn place_atom(&mut self, atom: Atom, len: usize) {
        let index = self.molecule.add_atom(atom);
        let bond = self.pending.take().map(|pending| pending.bond);
        if let Some(previous) = self.current {
            self.molecule
                .add_bond(previous, index, bond.unwrap_or_default());
        }
        self.current = Some(index);
        self.fragment_has_atom = true;
        self.prev = Prev::Atom;
        self.pos += len;
    }

    fn bond_symbol(&mut self, bond: Bond, symbol: char) -> Result<(), SmilesError> {
        self.reject_pending_bond()?;
        if self.current.is_none() {
            return Err(SmilesError::BondSymbolWithoutPrecedingAtom {
                pos: self.pos,
                symbol,
            });
        }
        self.pending = Some(PendingBond {
            bond,
            symbol,
            pos: self.pos,
            after_atom: matches!(self.prev, Prev::Atom | Prev::RingLabel),
        });
        self.prev = Prev::Bond;
        self.pos += 1;
        Ok(())
    }

    fn open_branch(&mut self) -> Result<(), SmilesError> {
        let pos = self.pos;
        self.reject_pending_bond()?;
        if self.current.is_none() || self.prev == Prev::OpenBranch {
            self.tolerate(
                RulePolicy::NO_PRECEDING_ATOM,
                SmilesError::BranchWithoutPrecedingAtom { pos },
            )?;
        }
        debug!(pos, atom = ?self.current, depth = self.branches.len() + 1, "Opening branch");
        self.branches.push(Branch {
            atom: self.current,
            component: self.component,
            pos,
        });
        self.prev = Prev::OpenBranch;
        self.pos += 1;
        Ok(())
    }

    fn close_branch(&mut self) -> Result<(), SmilesError> {
        let pos = self.pos;
        self.reject_pending_bond()?;
        let branch = self
            .branches
            .pop()
            .ok_or(SmilesError::UnmatchedParenthesis { pos })?;
        match self.prev {
            Prev::OpenBranch => self.tolerate(
                RulePolicy::EMPTY_BRANCH,
                SmilesError::EmptyBranch { pos: branch.pos },
            )?,
            Prev::Dot => self.tolerate(RulePolicy::EMPTY_FRAGMENT, SmilesError::EmptyFragment { pos })?,
            _ => {}
        }
        debug!(pos, atom = ?branch.atom, depth = self.branches.len(), "Closing branch");
        self.current = branch.atom;
        self.component = branch.component;
        self.prev = Prev::CloseBranch;
        self.pos += 1;
        Ok(())
    }

    fn separator(&mut self) -> Result<(), SmilesError> {
        let pos = self.pos;
        self.reject_pending_bond()?;
        if !self.branches.is_empty() {
            self.tolerate(RulePolicy::DOT_IN_BRANCH, SmilesError::DotInsideBranch { pos })?;
        }
        match self.prev {
            Prev::Start => self.tolerate(
                RulePolicy::NO_PRECEDING_ATOM,
                SmilesError::EmptyFragment { pos },
            )?,
            // `C.().C`: a tolerated empty branch is no atom either.
            _ if self.prev == Prev::OpenBranch || !self.fragment_has_atom => {
                self.tolerate(RulePolicy::EMPTY_FRAGMENT, SmilesError::EmptyFragment { pos })?
            }
            _ => {}
        }
        self.current = None;
        self.fragment_has_atom = false;
        self.last_dot = pos;
        self.component = self.components;
        self.components += 1;
        self.prev = Prev::Dot;
        self.pos += 1;
        Ok(())
    }

    /// Reads `<digit>` or `%<digit><digit>`, returning the label and its length.
    fn read_label(&self, c: char) -> Result<(u8, usize), SmilesError> {
        let bytes = &self.input.as_bytes()[self.pos..];
        if c != '%' {
            return Ok((bytes[0] - b'0', 1));
        }
        match (bytes.get(1), bytes.get(2)) {
            (Some(tens), Some(ones)) if tens.is_ascii_digit() && ones.is_ascii_digit() => {
                Ok(((tens - b'0') * 10 + (ones - b'0'), 3))
            }
            _ => Err(SmilesError::UnexpectedCharacter {
                pos: self.pos,
                found: '%',
            }),
        }
    }

    fn ring_label(&mut self, c: char) -> Result<(), SmilesError> {
        let pos = self.pos;
        let (label, len) = self.read_label(c)?;

        // Labels attach to the atom just written, optionally through a bond symbol.
        let follows_atom = match self.prev {
            Prev::Atom | Prev::RingLabel => true,
            Prev::Bond => self.pending.is_some_and(|pending| pending.after_atom),
            _ => false,
        };
        let atom = match self.current {
            Some(atom) if follows_atom => atom,
            _ => return Err(SmilesError::UnexpectedCharacter { pos, found: c }),
        };
        let bond = self.pending.take().map(|pending| pending.bond);

        let ring = OpenRing {
            atom,
            bond,
            component: self.component,
            pos,
        };
        match self.rings.visit(label, ring) {
            None => debug!(label, atom, "Opened ring closure"),
            Some(opened) => {
                if opened.atom == atom || self.molecule.has_bond(opened.atom, atom) {
                    return Err(SmilesError::SelfRingClosure { pos, label, atom });
                }
                let bond = closing_bond(opened.bond, bond).map_err(|(opening, closing)| {
                    SmilesError::ConflictingRingBond {
                        pos,
                        label,
                        opening,
                        closing,
                    }
                })?;
                if opened.component != self.component {
                    self.tolerate(
                        RulePolicy::CROSS_COMPONENT_RING,
                        SmilesError::CrossComponentRingClosure { pos, label },
                    )?;
                }
                debug!(label, from = opened.atom, to = atom, ?bond, "Closed ring");
                self.molecule.add_bond(opened.atom, atom, bond);
            }
        }
        self.prev = Prev::RingLabel;
        self.pos += len;
        Ok(())
    }

    fn finish(mut self) -> Result<Molecule, SmilesError> {
        self.reject_pending_bond()?;
        if let Some(branch) = self.branches.last() {
            return Err(SmilesError::UnmatchedParenthesis { pos: branch.pos });
        }
        if !self.fragment_has_atom {
            self.tolerate(
                RulePolicy::EMPTY_FRAGMENT,
                SmilesError::EmptyFragment { pos: self.last_dot },
            )?;
        }
        if let Some((label, ring)) = self.rings.first_open() {
            return Err(SmilesError::DanglingRingClosure {
                pos: ring.pos,
                label,
            });
        }
        self.molecule.set_fragment_count(self.components);
        debug!(
            atoms = self.molecule.atom_count(),
            bonds = self.molecule.bond_count(),
            "Parsed SMILES"
        );
        Ok(self.molecule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn parse(smiles: &str) -> Result<Molecule, SmilesError> {
        parse_smiles_default(smiles)
    }

    fn kind(smiles: &str, policy: u8) -> ErrorKind {
        parse_smiles(smiles, false, policy.into())
            .expect_err(smiles)
            .kind()
    }

    #[test]
    fn test_parse_ethanol() {
        let molecule = parse("CCO").unwrap();
        assert_eq!(molecule.atom_count(), 3);
        assert_eq!(molecule.bond_count(), 2);
        assert!(molecule.has_bond(0, 1));
        assert!(molecule.has_bond(1, 2));
        assert!(!molecule.has_bond(0, 2));
        assert_eq!(molecule.atom(2).unwrap().element(), "O");
        assert_eq!(molecule.bond(0, 1), Some(Bond::Unspecified));
    }

    #[test]
    fn test_parse_isobutane() {
        let molecule = parse("CC(C)C").unwrap();
        assert_eq!(molecule.atom_count(), 4);
        assert_eq!(molecule.bond_count(), 3);
        assert!(molecule.has_bond(0, 1));
        assert!(molecule.has_bond(1, 2));
        assert!(molecule.has_bond(1, 3));
        assert!(!molecule.has_bond(2, 3));
    }

    #[test]
    fn test_parse_cyclohexane() {
        let molecule = parse("C1CCCCC1").unwrap();
        assert_eq!(molecule.atom_count(), 6);
        assert_eq!(molecule.bond_count(), 6);
        assert!(molecule.has_bond(0, 5));
        for atom in 0..6 {
            let degree = molecule.bonds().filter(|(a, b, _)| *a == atom || *b == atom).count();
            assert_eq!(degree, 2, "Atom {atom} has degree {degree}");
        }
    }

    #[test]
    fn test_parse_benzene() {
        let molecule = parse("c1ccccc1").unwrap();
        assert!(molecule.atoms().all(Atom::is_aromatic));
        assert_eq!(molecule.bond_count(), 6);
    }

    #[test]
    fn test_ciprofloxacin() {
        let molecule = parse("C1CNCCN1c(c2)c(F)cc3c2N(C4CC4)C=C(C3=O)C(=O)O").unwrap();
        assert_eq!(molecule.atom_count(), 24);
        assert_eq!(molecule.bond_count(), 27);
    }

    #[test]
    fn test_parse_chloroethane() {
        let molecule = parse("CCCl").unwrap();
        assert_eq!(molecule.atom_count(), 3);
        assert_eq!(molecule.atom(2).unwrap().symbol(), "Cl");
    }

    #[test]
    fn explicit_bonds_are_recorded() {
        let molecule = parse("C-C#C").unwrap();
        assert_eq!(molecule.bond(0, 1), Some(Bond::Single));
        assert_eq!(molecule.bond(1, 2), Some(Bond::Triple));

        let molecule = parse("C/C=C/Cl").unwrap();
        assert_eq!(molecule.bond(0, 1), Some(Bond::Up));
        assert_eq!(molecule.bond(1, 2), Some(Bond::Double));
        assert_eq!(molecule.bond(2, 3), Some(Bond::Up));

        let molecule = parse(r"F/C=C\F").unwrap();
        assert_eq!(molecule.bond(2, 3), Some(Bond::Down));

        let molecule = parse("C(=O)Cl").unwrap();
        assert_eq!(molecule.bond(0, 1), Some(Bond::Double));
        assert_eq!(molecule.bond(0, 2), Some(Bond::Unspecified));

        let molecule = parse("CC(C)=O").unwrap();
        assert_eq!(molecule.bond(1, 3), Some(Bond::Double));
    }

    #[test]
    fn bond_symbol_adjacency() {
        assert_eq!(kind("C-=C", 0), ErrorKind::DanglingBondSymbol);
        assert_eq!(kind("C--C", 0), ErrorKind::DanglingBondSymbol);
        assert_eq!(kind("C-(C)", 0), ErrorKind::DanglingBondSymbol);
        assert_eq!(kind("C(C-)Cl", 0), ErrorKind::DanglingBondSymbol);
        assert_eq!(kind("C-.C", 0), ErrorKind::DanglingBondSymbol);
        assert_eq!(kind("C-", 0), ErrorKind::DanglingBondSymbol);
        assert_eq!(kind("-C", 0), ErrorKind::BondSymbolWithoutPrecedingAtom);
        assert_eq!(kind("C.-C", 0), ErrorKind::BondSymbolWithoutPrecedingAtom);
        // No policy bit relaxes bond placement.
        assert_eq!(kind("-C", 31), ErrorKind::BondSymbolWithoutPrecedingAtom);
        assert_eq!(kind("C-(C)", 31), ErrorKind::DanglingBondSymbol);
    }

    #[test]
    fn dangling_bond_reports_the_first_symbol() {
        assert_eq!(
            parse("C-=C").unwrap_err(),
            SmilesError::DanglingBondSymbol { pos: 1, symbol: '-' }
        );
    }

    #[test]
    fn ring_closures() {
        let molecule = parse("C%23CCC%23").unwrap();
        assert!(molecule.has_bond(0, 3));

        let molecule = parse("C-1OC1").unwrap();
        assert_eq!(molecule.bond(0, 2), Some(Bond::Single));

        let molecule = parse("C-1OC-1").unwrap();
        assert_eq!(molecule.bond(0, 2), Some(Bond::Single));

        let molecule = parse("C1OC=1").unwrap();
        assert_eq!(molecule.bond(0, 2), Some(Bond::Double));

        assert_eq!(kind("C-1OC=1", 0), ErrorKind::ConflictingRingBond);
        assert_eq!(kind("C1CC", 0), ErrorKind::DanglingRingClosure);
        assert_eq!(kind("C11C", 0), ErrorKind::SelfRingClosure);
        assert_eq!(kind("C1C1", 0), ErrorKind::SelfRingClosure);
        assert_eq!(kind("C1C1", 31), ErrorKind::SelfRingClosure);
        assert_eq!(kind("1C", 0), ErrorKind::UnexpectedCharacter);
        assert_eq!(kind("%12C", 0), ErrorKind::UnexpectedCharacter);
        assert_eq!(kind("C.1C", 0), ErrorKind::UnexpectedCharacter);
        assert_eq!(kind("C%1C", 0), ErrorKind::UnexpectedCharacter);
        assert_eq!(kind("C(C)1CC1", 0), ErrorKind::UnexpectedCharacter);
    }

    #[test]
    fn ring_labels_are_reusable() {
        let molecule = parse("C1CC1CC1CC1").unwrap();
        assert_eq!(molecule.atom_count(), 7);
        assert!(molecule.has_bond(0, 2));
        assert!(molecule.has_bond(4, 6));
        assert_eq!(molecule.bond_count(), 8);
        // A third use opens a fresh closure, which must itself be closed.
        assert_eq!(kind("C1CC1C1", 0), ErrorKind::DanglingRingClosure);
    }

    #[test]
    fn percent_and_digit_labels_share_keys() {
        let molecule = parse("C%05CCC5").unwrap();
        assert!(molecule.has_bond(0, 3));
    }

    #[test]
    fn multiple_rings_on_one_atom() {
        let molecule = parse("C12CC1CC2").unwrap();
        assert!(molecule.has_bond(0, 2));
        assert!(molecule.has_bond(0, 4));
        assert_eq!(molecule.bond_count(), 6);
    }

    #[test]
    fn parentheses() {
        for smiles in ["C(", "C(C(", "C)", "CCC.)", ")C", "C(C))C"] {
            for policy in [0, 31] {
                assert_eq!(kind(smiles, policy), ErrorKind::UnmatchedParenthesis, "{smiles}");
            }
        }
        assert_eq!(kind("(C)", 0), ErrorKind::BranchWithoutPrecedingAtom);
        assert_eq!(kind("C((C))", 0), ErrorKind::BranchWithoutPrecedingAtom);
        assert_eq!(kind("C.(C)", 0), ErrorKind::BranchWithoutPrecedingAtom);
    }

    #[test]
    fn unmatched_open_reports_its_position() {
        assert_eq!(
            parse("CC(C(C)").unwrap_err(),
            SmilesError::UnmatchedParenthesis { pos: 2 }
        );
    }

    #[test]
    fn dots() {
        let molecule = parse("C.C").unwrap();
        assert_eq!(molecule.bond_count(), 0);
        assert_eq!(molecule.fragment_count(), 2);
        assert_eq!(kind(".C", 0), ErrorKind::EmptyFragment);
        assert_eq!(kind("C..C", 0), ErrorKind::EmptyFragment);
        assert_eq!(kind("C.", 0), ErrorKind::EmptyFragment);
        assert!(parse_smiles("C.", false, RulePolicy::EMPTY_FRAGMENT).is_ok());
        assert!(parse_smiles(".C", false, RulePolicy::NO_PRECEDING_ATOM).is_ok());
    }

    #[test]
    fn empty_fragment_policy() {
        assert_eq!(kind("C..C", 0), ErrorKind::EmptyFragment);
        let molecule = parse_smiles("C..C", false, 1.into()).unwrap();
        assert_eq!(molecule.atom_count(), 2);
        assert_eq!(molecule.bond_count(), 0);
    }

    #[test]
    fn fragment_of_only_an_empty_branch() {
        assert_eq!(kind("C.().C", 6), ErrorKind::EmptyFragment);
        assert_eq!(
            parse_smiles("C.()", false, 6.into()).unwrap_err(),
            SmilesError::EmptyFragment { pos: 1 }
        );
        let molecule = parse_smiles("C.().C", false, 7.into()).unwrap();
        assert_eq!(molecule.atom_count(), 2);
        assert_eq!(molecule.fragment_count(), 3);
        assert!(parse_smiles("C.()", false, 7.into()).is_ok());
    }

    #[test]
    fn empty_branch_policy() {
        assert_eq!(kind("C()C", 0), ErrorKind::EmptyBranch);
        let molecule = parse_smiles("C()C", false, 2.into()).unwrap();
        assert!(molecule.has_bond(0, 1));
    }

    #[test]
    fn no_preceding_atom_policy() {
        for smiles in ["(CC)", "C.(CC)"] {
            assert_eq!(kind(smiles, 0), ErrorKind::BranchWithoutPrecedingAtom);
            assert!(parse_smiles(smiles, false, 4.into()).is_ok(), "{smiles}");
        }
        let molecule = parse_smiles("C.(CC)C", false, 4.into()).unwrap();
        assert!(molecule.has_bond(1, 2));
        // The tolerated branch has no anchor, so nothing bonds to atom 0.
        assert!(!molecule.has_bond(0, 1));
        assert!(!molecule.has_bond(0, 3));
        assert!(!molecule.has_bond(1, 3));
    }

    #[test]
    fn dot_in_branch_policy() {
        assert_eq!(kind("C(C.C)C", 0), ErrorKind::DotInsideBranch);
        let molecule = parse_smiles("C(C.C)C", false, 8.into()).unwrap();
        assert!(molecule.has_bond(0, 1));
        assert!(!molecule.has_bond(1, 2));
        assert!(molecule.has_bond(0, 3));
    }

    #[test]
    fn cross_component_policy() {
        assert_eq!(kind("C1.C1", 0), ErrorKind::CrossComponentRingClosure);
        let molecule = parse_smiles("C1.C1", false, 16.into()).unwrap();
        assert!(molecule.has_bond(0, 1));
    }

    #[test]
    fn branch_restores_component() {
        // The ring opens and closes in the same fragment once the branch closes.
        let molecule = parse_smiles("C1(C.C)CC1", false, 8.into()).unwrap();
        assert!(molecule.has_bond(0, 4));
    }

    #[test]
    fn policies_are_independent() {
        let cases = [("C..C", 1u8), ("C()C", 2), ("(CC)", 4), ("C(C.C)C", 8), ("C1.C1", 16)];
        for (smiles, bit) in cases {
            for (_, other) in cases.iter().filter(|(_, other)| *other != bit) {
                assert!(parse_smiles(smiles, false, (*other).into()).is_err(), "{smiles} under {other}");
            }
            assert!(parse_smiles(smiles, false, bit.into()).is_ok(), "{smiles} under {bit}");
            assert!(parse_smiles(smiles, true, RulePolicy::all()).is_ok(), "{smiles} under all");
        }
    }

    #[test]
    fn bracket_atoms() {
        let molecule = parse("[12CH4]").unwrap();
        assert_eq!(molecule.atom(0).unwrap().isotope(), Some(12));
        assert_eq!(kind("[0CH4]", 0), ErrorKind::InvalidIsotope);
        assert_eq!(kind("[16C)", 0), ErrorKind::MalformedBracketAtom);
        assert_eq!(kind("C[C", 0), ErrorKind::MalformedBracketAtom);

        let molecule = parse("C[N+](=O)[O-]").unwrap();
        assert_eq!(molecule.atom(1).unwrap().charge(), 1);
        assert_eq!(molecule.atom(3).unwrap().charge(), -1);
        assert!(molecule.has_bond(1, 3));

        let molecule = parse("[Na+].[Cl-]").unwrap();
        assert_eq!(molecule.bond_count(), 0);
        assert_eq!(molecule.atom(1).unwrap().element(), "Cl");
    }

    #[test]
    fn unrecognized_atoms() {
        assert_eq!(
            parse("CX").unwrap_err(),
            SmilesError::UnrecognizedAtom { pos: 1, symbol: 'X' }
        );
        assert_eq!(kind("C]", 0), ErrorKind::UnexpectedCharacter);
        assert_eq!(kind("C C", 0), ErrorKind::UnexpectedCharacter);
        assert_eq!(kind("Cé", 0), ErrorKind::UnexpectedCharacter);
    }

    #[test]
    fn strict_mode_rejects_semantic_oddities() {
        assert!(parse_smiles("[C+16]", false, RulePolicy::empty()).is_ok());
        assert_eq!(
            parse_smiles("C[C+16]", true, RulePolicy::empty()).unwrap_err().kind(),
            ErrorKind::StrictViolation
        );
        assert!(parse_smiles("[NH4+]", true, RulePolicy::empty()).is_ok());
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse("").unwrap_err(), SmilesError::EmptyInput { pos: 0 });
    }

    #[test]
    fn deep_nesting_does_not_recurse() {
        let depth = 10_000;
        let smiles = format!("C{}{}", "(C".repeat(depth), ")".repeat(depth));
        let molecule = parse(&smiles).unwrap();
        assert_eq!(molecule.atom_count(), depth + 1);
        assert_eq!(molecule.bond_count(), depth);
    }
}
