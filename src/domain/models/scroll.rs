use serde::{Deserialize, Serialize};

/// Scroll notification delivered to the browser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollEvent {
    /// The window scrolled rather than an inner container
    pub is_window_event: bool,
    pub is_reaching_top: bool,
    pub is_reaching_bottom: bool,
}

impl ScrollEvent {
    /// Container scroll that reached the bottom edge
    pub fn container_bottom() -> Self {
        Self {
            is_window_event: false,
            is_reaching_top: false,
            is_reaching_bottom: true,
        }
    }

    pub fn requests_next_page(&self) -> bool {
        !self.is_window_event && self.is_reaching_bottom
    }
}

/// Raw scroll geometry of an element, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Distance left to scroll before the bottom edge
    pub fn remaining(&self) -> f64 {
        (self.scroll_height - self.scroll_top - self.client_height).max(0.0)
    }

    /// Classify the metrics; an edge is reached within `offset_px` of it
    pub fn to_event(&self, is_window_event: bool, offset_px: f64) -> ScrollEvent {
        ScrollEvent {
            is_window_event,
            is_reaching_top: self.scroll_top <= offset_px,
            is_reaching_bottom: self.remaining() <= offset_px,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_next_page() {
        assert!(ScrollEvent::container_bottom().requests_next_page());
        let window = ScrollEvent {
            is_window_event: true,
            ..ScrollEvent::container_bottom()
        };
        assert!(!window.requests_next_page());
        assert!(!ScrollEvent::default().requests_next_page());
    }

    #[test]
    fn test_metrics_near_bottom() {
        let metrics = ScrollMetrics {
            scroll_top: 1450.0,
            scroll_height: 2000.0,
            client_height: 500.0,
        };
        assert_eq!(metrics.remaining(), 50.0);
        let event = metrics.to_event(false, 100.0);
        assert!(event.is_reaching_bottom);
        assert!(!event.is_reaching_top);
        assert!(event.requests_next_page());
    }

    #[test]
    fn test_metrics_at_top() {
        let metrics = ScrollMetrics {
            scroll_top: 0.0,
            scroll_height: 2000.0,
            client_height: 500.0,
        };
        let event = metrics.to_event(false, 100.0);
        assert!(event.is_reaching_top);
        assert!(!event.is_reaching_bottom);
    }

    #[test]
    fn test_short_content_is_always_at_bottom() {
        let metrics = ScrollMetrics {
            scroll_top: 0.0,
            scroll_height: 300.0,
            client_height: 500.0,
        };
        assert_eq!(metrics.remaining(), 0.0);
        assert!(metrics.to_event(false, 0.0).is_reaching_bottom);
    }
}
