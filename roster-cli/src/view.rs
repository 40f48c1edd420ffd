//! Terminal roster view: category switcher, live filter and selection.
//!
//! Mirrors what a windowed front end does on each event: every change to the
//! filter text re-runs the search over the active category and replaces the
//! displayed list; selecting a row renders its detail card.

use colored::{Color, ColoredString, Colorize};

use roster_core::{format, query, Palette, RosterCategory, RosterEntry, Team};

/// Resolved terminal colors for one view.
#[derive(Debug, Clone, Copy)]
pub struct Styles {
    pub primary: Color,
    pub accent: Color,
    pub highlight: Color,
    pub muted: Color,
}

impl Styles {
    /// Unknown color names fall back to the default palette's color.
    pub fn from_palette(palette: &Palette) -> Self {
        let defaults = Palette::default();
        let resolve = |name: &str, fallback: &str| {
            name.parse::<Color>()
                .or_else(|_| fallback.parse::<Color>())
                .unwrap_or(Color::White)
        };
        Self {
            primary: resolve(&palette.primary, &defaults.primary),
            accent: resolve(&palette.accent, &defaults.accent),
            highlight: resolve(&palette.highlight, &defaults.highlight),
            muted: resolve(&palette.muted, &defaults.muted),
        }
    }

    pub fn heading(&self, text: &str) -> ColoredString {
        text.color(self.primary).bold()
    }

    pub fn dim(&self, text: &str) -> ColoredString {
        text.color(self.muted)
    }
}

/// State of one roster view over a borrowed [`Team`].
pub struct RosterView<'a> {
    team: &'a Team,
    styles: Styles,
    category: RosterCategory,
    query: String,
    shown: Vec<RosterEntry>,
    selected: Option<usize>,
}

impl<'a> RosterView<'a> {
    /// A view showing every player, nothing selected.
    pub fn new(team: &'a Team, palette: &Palette) -> Self {
        let category = RosterCategory::default();
        Self {
            team,
            styles: Styles::from_palette(palette),
            category,
            query: String::new(),
            shown: team.entries(category),
            selected: None,
        }
    }

    pub fn category(&self) -> RosterCategory {
        self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn shown(&self) -> &[RosterEntry] {
        &self.shown
    }

    pub fn selected(&self) -> Option<&RosterEntry> {
        self.selected.and_then(|i| self.shown.get(i))
    }

    /// Switch category; clears the filter and selection.
    pub fn set_category(&mut self, category: RosterCategory) {
        self.category = category;
        self.query.clear();
        self.selected = None;
        self.shown = self.team.entries(category);
        tracing::debug!(%category, shown = self.shown.len(), "view category changed");
    }

    /// Replace the filter text and re-run the search over the active category.
    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_owned();
        self.selected = None;
        self.shown = query::search_category(self.team, self.category, text);
        tracing::debug!(query = text, shown = self.shown.len(), "view filter changed");
    }

    /// Select the row at `index`, returning its detail card.
    ///
    /// Out-of-range indices clear the selection and return `None`.
    pub fn select(&mut self, index: usize) -> Option<String> {
        if index >= self.shown.len() {
            self.selected = None;
            return None;
        }
        self.selected = Some(index);
        Some(format::detail_card(&self.shown[index]))
    }

    /// Header plus one numbered row per displayed entry.
    pub fn render(&self) -> String {
        let mut out = format!(
            "{} {}\n",
            self.styles.heading(&self.category().to_string().to_uppercase()),
            self.styles.dim(&format!(
                "filter: '{}' ({} shown)",
                self.query(),
                self.shown.len()
            )),
        );
        if self.shown.is_empty() {
            out.push_str("  (no matches)\n");
            return out;
        }
        for (i, entry) in self.shown.iter().enumerate() {
            let row = format!("{i:>3}. {entry}");
            if self.selected == Some(i) {
                out.push_str(&format!("> {}\n", row.color(self.styles.highlight).bold()));
            } else {
                out.push_str(&format!("  {row}\n"));
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{Coach, Player, RosterMember, Staff};

    fn team() -> Team {
        let mut t = Team::new("Philadelphia Eagles", "Nick Sirianni", "Linc", "NFC East");
        t.add_player(Player::new(1, "Jalen Hurts", "Quarterback", "Oklahoma"));
        t.add_player(Player::new(6, "DeVonta Smith", "Wide Receiver", "Alabama"));
        t.add_coach(Coach::new("Nick Sirianni", "Head Coach", "Offense"));
        t.add_staff(Staff::new("Brett Drake", "Scouting", "Scout Director"));
        t
    }

    #[test]
    fn starts_on_full_player_list() {
        let t = team();
        let view = RosterView::new(&t, &Palette::default());
        assert_eq!(view.category(), RosterCategory::Players);
        assert_eq!(view.shown().len(), 2);
        assert!(view.selected().is_none());
    }

    #[test]
    fn every_keystroke_refilters() {
        let t = team();
        let mut view = RosterView::new(&t, &Palette::default());
        for (typed, expected) in [("s", 2), ("sm", 1), ("smi", 1), ("", 2), ("q", 0)] {
            view.set_query(typed);
            assert_eq!(view.shown().len(), expected, "after typing {typed:?}");
        }
    }

    #[test]
    fn category_switch_resets_filter_and_selection() {
        let t = team();
        let mut view = RosterView::new(&t, &Palette::default());
        view.set_query("hurts");
        view.select(0);
        view.set_category(RosterCategory::Coaches);
        assert_eq!(view.query(), "");
        assert!(view.selected().is_none());
        assert_eq!(view.shown()[0].display_name(), "Nick Sirianni");
    }

    #[test]
    fn select_returns_card_or_none() {
        let t = team();
        let mut view = RosterView::new(&t, &Palette::default());
        let card = view.select(1).expect("in range");
        assert!(card.contains("DeVonta Smith"));
        assert_eq!(view.selected().map(|e| e.display_name()), Some("DeVonta Smith"));

        assert!(view.select(5).is_none());
        assert!(view.selected().is_none());
    }

    #[test]
    fn render_marks_selection() {
        colored::control::set_override(false);
        let t = team();
        let mut view = RosterView::new(&t, &Palette::default());
        view.select(0);
        let text = view.render();
        assert!(text.starts_with("PLAYERS filter: '' (2 shown)\n"));
        assert!(text.contains(">   0. #1 Jalen Hurts — Quarterback (Oklahoma)\n"));
        assert!(text.contains("    1. #6 DeVonta Smith"));
    }

    #[test]
    fn unknown_palette_names_fall_back() {
        let palette = Palette {
            primary: "not-a-color".to_string(),
            ..Palette::default()
        };
        let styles = Styles::from_palette(&palette);
        assert_eq!(styles.primary, Color::Green);
    }
}
