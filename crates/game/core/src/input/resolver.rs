//! Key press → ability resolution with the eukrasia state machine.
//!
//! [`EnhancedMode::transition`] is the single transition function: it takes
//! the current mode and a key press and returns the next mode together with
//! the resolution, so arming, consuming and naming happen in one step.
use super::ability::Ability;
use super::bindings::{BindingTable, Branch};
use super::key::{Key, KeyPress};
use crate::state::AbilityState;

/// Two-state machine for the one-shot enhanced toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnhancedMode {
    #[default]
    Idle,
    Armed,
}

/// A key press that matched a bound branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub ability: Ability,
    pub branch: Branch,
    /// Enhanced mode after this press.
    pub enhanced: EnhancedMode,
    /// The host must not run its default action for this combination.
    pub suppress_default: bool,
}

/// Outcome of resolving a single key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Resolved(Resolved),
    /// Key is in the table but nothing is bound for these modifiers.
    Unbound(KeyPress),
    /// Key has no entry in the table.
    Unmapped(Key),
}

impl Resolution {
    pub fn ability(&self) -> Option<Ability> {
        match self {
            Self::Resolved(resolved) => Some(resolved.ability),
            Self::Unbound(_) | Self::Unmapped(_) => None,
        }
    }

    pub fn suppress_default(&self) -> bool {
        matches!(self, Self::Resolved(resolved) if resolved.suppress_default)
    }
}

impl EnhancedMode {
    pub const fn is_armed(self) -> bool {
        matches!(self, Self::Armed)
    }

    /// Resolves `press` against `table` from this mode.
    ///
    /// - The eukrasia trigger arms the mode (arming twice stays armed).
    /// - While armed, a press on the none or shift branch whose ability has a
    ///   eukrasian form resolves to that form and disarms.
    /// - Control branches and abilities without a eukrasian form resolve
    ///   plainly and leave the mode untouched.
    pub fn transition(self, table: &BindingTable, press: KeyPress) -> (EnhancedMode, Resolution) {
        let Some(binding) = table.get(press.key) else {
            return (self, Resolution::Unmapped(press.key));
        };

        let branch = Branch::from_modifiers(press.modifiers);
        let Some(base) = binding.slot(branch) else {
            return (self, Resolution::Unbound(press));
        };

        let (next, ability) = match (self, base) {
            (_, Ability::Eukrasia) => (Self::Armed, Ability::Eukrasia),
            (Self::Armed, base) if branch.accepts_enhanced() => match base.eukrasian() {
                Some(enhanced) => (Self::Idle, enhanced),
                None => (Self::Armed, base),
            },
            (mode, base) => (mode, base),
        };

        let resolved = Resolved {
            ability,
            branch,
            enhanced: next,
            suppress_default: binding.suppresses(branch),
        };
        (next, Resolution::Resolved(resolved))
    }
}

/// Applies key presses to an [`AbilityState`].
#[derive(Clone, Copy, Debug, Default)]
pub struct InputResolver {
    table: BindingTable,
}

impl InputResolver {
    pub const fn new(table: BindingTable) -> Self {
        Self { table }
    }

    /// Resolves `press` and commits the new ability name and enhanced mode.
    ///
    /// Unbound and unmapped presses leave `state` untouched.
    pub fn on_key_press(&self, state: &mut AbilityState, press: KeyPress) -> Resolution {
        let (next, resolution) = state.enhanced.transition(&self.table, press);
        if let Resolution::Resolved(resolved) = resolution {
            state.current = resolved.ability;
            state.enhanced = next;
        }
        resolution
    }
}
