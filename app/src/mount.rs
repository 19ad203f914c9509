use crate::error::StartupError;
use leptos::{mount::mount_to, prelude::IntoView};
use std::any::Any;
use web_sys::HtmlElement;

/// The page markup the app is mounted into.
///
/// Implemented for [`web_sys::Document`]; tests substitute an in-memory page.
pub trait HostDocument {
    type Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

impl HostDocument for web_sys::Document {
    type Element = web_sys::Element;

    fn element_by_id(&self, id: &str) -> Option<web_sys::Element> {
        self.get_element_by_id(id)
    }
}

/// Finds the element the app renders into.
///
/// A page without it cannot run the app at all, so absence is reported as
/// [`StartupError::MissingMountTarget`] instead of rendering nothing.
pub fn resolve_mount_target<D>(
    document: &D,
    id: &str,
) -> Result<D::Element, StartupError>
where
    D: HostDocument,
{
    document
        .element_by_id(id)
        .ok_or_else(|| StartupError::MissingMountTarget { id: id.to_string() })
}

/// Owns the mount target and the view currently rendered into it.
///
/// The target must not be mutated by other code while a view is mounted.
pub struct Shell {
    target: HtmlElement,
    // an `UnmountHandle`; dropping it unmounts the view and disposes its reactive owner
    mounted: Option<Box<dyn Any>>,
}

impl Shell {
    pub fn new(target: HtmlElement) -> Self {
        Self {
            target,
            mounted: None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Renders the view built by `f` into the target, replacing whatever it held.
    pub fn mount<F, N>(&mut self, f: F)
    where
        F: FnOnce() -> N + 'static,
        N: IntoView + 'static,
    {
        if self.mounted.take().is_some() {
            log::debug!("unmounting previous view before remounting");
        }
        // markup left behind by the host page or by an earlier shell on this node
        self.target.set_inner_html("");

        let handle = mount_to(self.target.clone(), f);
        self.mounted = Some(Box::new(handle));
    }

    /// Leaks the shell so the mounted view lives as long as the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}
