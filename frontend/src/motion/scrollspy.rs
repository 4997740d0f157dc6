/// Tracks which page section the reader is currently in.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpy {
    section_ids: Vec<String>,
    offset: f64,
    active: Option<String>,
}

impl ScrollSpy {
    pub fn new(section_ids: Vec<String>, offset: f64) -> Self {
        Self {
            section_ids,
            offset,
            active: None,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn section_ids(&self) -> &[String] {
        &self.section_ids
    }

    /// Re-targets the spy, keeping the current active id until the next scan.
    pub fn reconfigure(&mut self, section_ids: Vec<String>, offset: f64) {
        self.section_ids = section_ids;
        self.offset = offset;
    }

    /// Scans the sections bottom-up. `section_top` resolves a section id to
    /// its top edge in document coordinates, or `None` when the element is
    /// missing. Returns true when the active section changed.
    pub fn scan<F>(&mut self, scroll_y: f64, mut section_top: F) -> bool
    where
        F: FnMut(&str) -> Option<f64>,
    {
        let line = scroll_y + self.offset;
        let hit = self
            .section_ids
            .iter()
            .rev()
            .find(|id| section_top(id).is_some_and(|top| top <= line));

        match hit {
            Some(id) if self.active.as_deref() != Some(id.as_str()) => {
                self.active = Some(id.clone());
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy() -> ScrollSpy {
        ScrollSpy::new(vec!["#a".into(), "#b".into(), "#c".into()], 100.0)
    }

    fn layout(id: &str) -> Option<f64> {
        match id {
            "#a" => Some(0.0),
            "#b" => Some(500.0),
            "#c" => Some(1_200.0),
            _ => None,
        }
    }

    #[test]
    fn picks_last_section_above_the_line() {
        let mut spy = spy();
        assert!(spy.scan(600.0, layout));
        assert_eq!(spy.active(), Some("#b"));

        assert!(spy.scan(1_100.0, layout));
        assert_eq!(spy.active(), Some("#c"));

        assert!(spy.scan(0.0, layout));
        assert_eq!(spy.active(), Some("#a"));
    }

    #[test]
    fn scrolling_within_a_section_reports_no_change() {
        let mut spy = spy();
        assert!(spy.scan(600.0, layout));
        assert!(!spy.scan(650.0, layout));
        assert!(!spy.scan(1_000.0, layout));
        assert_eq!(spy.active(), Some("#b"));
    }

    #[test]
    fn line_on_the_edge_counts() {
        let mut spy = spy();
        spy.scan(400.0, layout);
        assert_eq!(spy.active(), Some("#b"));
    }

    #[test]
    fn keeps_previous_when_nothing_qualifies() {
        let mut spy = ScrollSpy::new(vec!["#b".into(), "#c".into()], 0.0);
        assert!(!spy.scan(10.0, layout));
        assert_eq!(spy.active(), None);

        spy.scan(700.0, layout);
        assert_eq!(spy.active(), Some("#b"));
        assert!(!spy.scan(10.0, layout));
        assert_eq!(spy.active(), Some("#b"));
    }

    #[test]
    fn missing_elements_are_skipped() {
        let mut spy = ScrollSpy::new(vec!["#a".into(), "#b".into(), "#gone".into()], 100.0);
        spy.scan(5_000.0, layout);
        assert_eq!(spy.active(), Some("#b"));
    }

    #[test]
    fn reconfigure_applies_on_next_scan() {
        let mut spy = spy();
        spy.scan(600.0, layout);
        spy.reconfigure(vec!["#a".into(), "#c".into()], 700.0);
        assert_eq!(spy.active(), Some("#b"));
        assert!(spy.scan(600.0, layout));
        assert_eq!(spy.active(), Some("#c"));
    }
}
