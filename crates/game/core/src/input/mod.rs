//! Ability input: keys, modifiers, the binding table and the resolver.
mod ability;
mod bindings;
mod key;
mod resolver;

pub use ability::Ability;
pub use bindings::{Binding, BindingTable, Branch, SAGE_BINDINGS};
pub use key::{Key, KeyPress, Modifiers};
pub use resolver::{EnhancedMode, InputResolver, Resolution, Resolved};
