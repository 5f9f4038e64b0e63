//! Sub-view contract for the template library
//!
//! Every unit the modal mounts into a region implements `LibraryView`:
//! the regular `Component` surface plus a `ViewKind` tag. The tag is the
//! closed set of things the library knows how to display - there is no
//! string-keyed lookup anywhere; the controller constructs concrete views
//! directly and the tag exists for introspection (routing decisions, tests).

use crate::component::Component;

/// The closed set of sub-views the library can mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// App mark shown in the logo region on the browse screen
    HeaderLogo,
    /// Back navigation shown in the logo region away from browse
    HeaderBack,
    /// Library actions bar (tools region, browse screen)
    HeaderActions,
    /// Category menu (menu region, browse screen only)
    HeaderMenu,
    /// Per-template insert/upsell bar (tools region, preview screen)
    HeaderPreview,
    /// The template collection browser (content region)
    TemplateList,
    /// Save-the-current-page form (content region)
    SaveTemplateForm,
    /// Import-a-template-file form (content region)
    ImportForm,
    /// License connect form (content region)
    ConnectForm,
    /// Template preview (content region)
    PreviewFrame,
}

/// A renderable unit the modal can mount into a region
///
/// Views are created fresh on each transition, bound to their input data at
/// construction, and dropped when superseded or when the modal closes.
/// Dropping is the release: a view that holds resources cleans them up in
/// `Drop`, and the region guarantees that happens exactly once.
pub trait LibraryView: Component {
    fn kind(&self) -> ViewKind;
}
