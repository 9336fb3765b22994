//! Capped log of recent gameplay events.

/// Ring of gameplay messages (crashes, kills, camera switches). The
/// harness drains it for the end-of-run summary; a HUD would render it.
#[derive(Debug, Default)]
pub struct SimEvents {
    events: Vec<String>,
}

impl SimEvents {
    /// Oldest entries are dropped past this count.
    const CAPACITY: usize = 50;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::info!("{text}");
        self.events.push(text);
        if self.events.len() > Self::CAPACITY {
            self.events.remove(0);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
