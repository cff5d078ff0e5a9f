//! Static key → ability table.
//!
//! Each physical key carries up to four abilities, one per modifier
//! [`Branch`]. Branch precedence lives in [`Branch::from_modifiers`] and is
//! the only place the rule is encoded.
use super::ability::Ability;
use super::key::{Key, Modifiers};

/// Which modifier combination a key press falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Branch {
    ControlShift,
    Control,
    Shift,
    None,
}

impl Branch {
    /// Picks the branch for `modifiers`, first match wins:
    /// control+shift, control, shift, none.
    pub fn from_modifiers(modifiers: Modifiers) -> Self {
        if modifiers.control() && modifiers.shift() {
            Self::ControlShift
        } else if modifiers.control() {
            Self::Control
        } else if modifiers.shift() {
            Self::Shift
        } else {
            Self::None
        }
    }

    pub const fn uses_control(self) -> bool {
        matches!(self, Self::ControlShift | Self::Control)
    }

    /// Enhanced mode only rewrites the unmodified and shift branches.
    pub const fn accepts_enhanced(self) -> bool {
        matches!(self, Self::Shift | Self::None)
    }
}

/// Abilities bound to one key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    pub key: Key,
    pub none: Option<Ability>,
    pub shift: Option<Ability>,
    pub control: Option<Ability>,
    pub control_shift: Option<Ability>,
    /// Control combinations on this key trigger a host default action
    /// (bookmark dialog, address bar, reload) that must be suppressed.
    pub suppresses_default: bool,
}

impl Binding {
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            none: None,
            shift: None,
            control: None,
            control_shift: None,
            suppresses_default: false,
        }
    }

    pub const fn none(mut self, ability: Ability) -> Self {
        self.none = Some(ability);
        self
    }

    pub const fn shift(mut self, ability: Ability) -> Self {
        self.shift = Some(ability);
        self
    }

    pub const fn control(mut self, ability: Ability) -> Self {
        self.control = Some(ability);
        self
    }

    pub const fn control_shift(mut self, ability: Ability) -> Self {
        self.control_shift = Some(ability);
        self
    }

    pub const fn suppressing_default(mut self) -> Self {
        self.suppresses_default = true;
        self
    }

    pub const fn slot(&self, branch: Branch) -> Option<Ability> {
        match branch {
            Branch::ControlShift => self.control_shift,
            Branch::Control => self.control,
            Branch::Shift => self.shift,
            Branch::None => self.none,
        }
    }

    /// Whether a match on `branch` must suppress the host default.
    pub const fn suppresses(&self, branch: Branch) -> bool {
        self.suppresses_default && branch.uses_control()
    }
}

/// The Sage layout.
pub const SAGE_BINDINGS: &[Binding] = &[
    // ctrl+e opens the address bar dropdown
    Binding::new(Key::Char('e'))
        .none(Ability::Dosis)
        .shift(Ability::Diagnosis)
        .control(Ability::Prognosis)
        .control_shift(Ability::Zoe)
        .suppressing_default(),
    // ctrl+r reloads
    Binding::new(Key::Char('r'))
        .none(Ability::Prognosis)
        .shift(Ability::Krasis)
        .control(Ability::Panhaima)
        .control_shift(Ability::Pneuma)
        .suppressing_default(),
    // ctrl+d opens the bookmark dialog; plain d is movement
    Binding::new(Key::Char('d'))
        .control(Ability::Swiftcast)
        .suppressing_default(),
    Binding::new(Key::Char('q')).none(Ability::Toxikon),
    Binding::new(Key::Char('x')).none(Ability::Eukrasia),
];

/// Lookup view over a binding slice.
#[derive(Clone, Copy, Debug)]
pub struct BindingTable {
    bindings: &'static [Binding],
}

impl BindingTable {
    pub const fn new(bindings: &'static [Binding]) -> Self {
        Self { bindings }
    }

    pub fn get(&self, key: Key) -> Option<&Binding> {
        self.bindings.iter().find(|binding| binding.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }
}

impl Default for BindingTable {
    fn default() -> Self {
        Self::new(SAGE_BINDINGS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn branch_precedence() {
        let both = Modifiers::CONTROL | Modifiers::SHIFT;
        assert_eq!(Branch::from_modifiers(both), Branch::ControlShift);
        assert_eq!(Branch::from_modifiers(Modifiers::CONTROL), Branch::Control);
        assert_eq!(Branch::from_modifiers(Modifiers::SHIFT), Branch::Shift);
        assert_eq!(Branch::from_modifiers(Modifiers::empty()), Branch::None);
    }

    #[test]
    fn keys_are_unique() {
        let table = BindingTable::default();
        let keys: HashSet<_> = table.iter().map(|binding| binding.key).collect();
        assert_eq!(keys.len(), SAGE_BINDINGS.len());
    }

    #[test]
    fn every_eukrasian_cast_is_reachable() {
        let table = BindingTable::default();
        for enhanced in [
            Ability::EukrasianDosis,
            Ability::EukrasianDiagnosis,
            Ability::EukrasianPrognosis,
        ] {
            let reachable = table.iter().any(|binding| {
                [Branch::None, Branch::Shift]
                    .into_iter()
                    .filter_map(|branch| binding.slot(branch))
                    .any(|ability| ability.eukrasian() == Some(enhanced))
            });
            assert!(reachable, "{enhanced} unreachable");
        }
    }

    #[test]
    fn suppression_only_applies_to_control_branches() {
        let table = BindingTable::default();
        let d = table.get(Key::Char('d')).unwrap();
        assert!(d.suppresses(Branch::Control));
        assert!(d.suppresses(Branch::ControlShift));
        assert!(!d.suppresses(Branch::None));

        let q = table.get(Key::Char('q')).unwrap();
        assert!(!q.suppresses(Branch::Control));
    }
}
