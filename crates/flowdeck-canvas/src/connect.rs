//! Connect mode
//!
//! Two-click edge creation: the first click on a node's connect affordance
//! arms the mode with that node as the source; the next node selection
//! completes or cancels it. The machine itself only tracks the source; the
//! completion decision lives in the controller.

use flowdeck_core::NodeId;

/// State of the two-click connection gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectMode {
    /// No connection in progress
    #[default]
    Idle,
    /// Waiting for a target; holds the armed source node
    Connecting { from: NodeId },
}

impl ConnectMode {
    /// Arm the mode from a source node; re-arming retargets the source
    pub fn start(&mut self, from: NodeId) {
        *self = ConnectMode::Connecting { from };
    }

    /// Return to idle
    pub fn cancel(&mut self) {
        *self = ConnectMode::Idle;
    }

    /// The armed source node, if connecting
    #[inline]
    #[must_use]
    pub fn source(&self) -> Option<NodeId> {
        match self {
            ConnectMode::Idle => None,
            ConnectMode::Connecting { from } => Some(*from),
        }
    }

    /// Whether a connection is in progress
    #[inline]
    #[must_use]
    pub fn is_connecting(&self) -> bool {
        matches!(self, ConnectMode::Connecting { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        assert_eq!(ConnectMode::default(), ConnectMode::Idle);
        assert!(!ConnectMode::default().is_connecting());
    }

    #[test]
    fn start_retargets_when_already_connecting() {
        let mut mode = ConnectMode::default();
        let first = NodeId::new();
        let second = NodeId::new();
        mode.start(first);
        mode.start(second);
        assert_eq!(mode.source(), Some(second));
    }

    #[test]
    fn cancel_is_unconditional() {
        let mut mode = ConnectMode::default();
        mode.cancel();
        assert_eq!(mode, ConnectMode::Idle);
        mode.start(NodeId::new());
        mode.cancel();
        assert_eq!(mode, ConnectMode::Idle);
    }
}
