// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Project list.
    #[default]
    Home,
    /// Detail page and gallery of the selected project.
    Project,
    Fretboard,
    About,
}
