use bitflags::bitflags;

bitflags! {
    /// Grammar relaxations. Each set flag turns one structural error into an
    /// accepted construct; the flags are independent of one another.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RulePolicy: u8 {
        /// `C..C`: a fragment separator with nothing before or after it.
        const EMPTY_FRAGMENT = 1;
        /// `C()C`
        const EMPTY_BRANCH = 2;
        /// `(CC)`, `.C`: a branch or separator with no atom before it.
        const NO_PRECEDING_ATOM = 4;
        /// `C(C.C)C`
        const DOT_IN_BRANCH = 8;
        /// `C1.C1`: a ring closure joining two disconnected fragments.
        const CROSS_COMPONENT_RING = 16;
    }
}

impl RulePolicy {
    pub fn allows(self, relaxation: RulePolicy) -> bool {
        self.contains(relaxation)
    }

    /// Looks up a flag by its kebab-case name, e.g. `empty-branch`.
    pub fn from_kebab_name(name: &str) -> Option<Self> {
        let name = name.replace('-', "_").to_ascii_uppercase();
        Self::all()
            .iter_names()
            .find(|(flag, _)| *flag == name)
            .map(|(_, value)| value)
    }
}

impl From<u8> for RulePolicy {
    fn from(bits: u8) -> Self {
        Self::from_bits_truncate(bits)
    }
}
