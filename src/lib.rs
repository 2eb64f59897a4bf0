pub mod check;
pub mod config;
pub mod evaluate;
pub mod feeds;
pub mod fetch;
pub mod summary;

/// Which kind of monitored entity an item describes.
///
/// The Monit feed only ever reports services; the Icinga feed reports
/// hosts or services depending on the requested mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Host,
    Service,
}

/// One monitored entity, normalized from an upstream feed.
///
/// `failed` and `not_monitored` are independent axes: a Monit service
/// can be in a failed state while simultaneously not being actively
/// monitored, so they are two flags rather than one state tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    pub failed: bool,
    pub not_monitored: bool,
}

impl Item {
    pub fn healthy(&self) -> bool {
        !self.failed && !self.not_monitored
    }
}
