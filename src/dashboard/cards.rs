use crate::dashboard::templates::Template;

/// Delay added per card position so the cards fade in one after another.
pub const REVEAL_STAGGER_MS: u32 = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct StatTile {
    pub value: String,
    pub label: String,
}

impl StatTile {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// One rendered widget card of the dashboard preview.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetCard {
    pub key: String,
    pub title: String,
    pub description: String,
    pub tiles: [StatTile; 3],
    pub reveal_delay_ms: u32,
}

impl WidgetCard {
    /// CSS `animation-delay` value, e.g. `0s`, `0.1s`.
    pub fn animation_delay(&self) -> String {
        format!("{}s", f64::from(self.reveal_delay_ms) / 1000.0)
    }
}

/// Builds the cards for one template in widget order.
///
/// The third tile always shows the template title under an "Industry"
/// label, not data from the widget itself.
pub fn project(industry: &str, template: &Template) -> Vec<WidgetCard> {
    template
        .widgets
        .iter()
        .enumerate()
        .map(|(i, widget)| WidgetCard {
            key: format!("{}-{}", industry, i),
            title: widget.title.clone(),
            description: widget.description.clone(),
            tiles: [
                StatTile::new(&widget.stats[0], &widget.stats[1]),
                StatTile::new(&widget.stats[2], "Trend"),
                StatTile::new(&template.title, "Industry"),
            ],
            reveal_delay_ms: i as u32 * REVEAL_STAGGER_MS,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::templates::TemplateRegistry;

    fn registry() -> TemplateRegistry {
        TemplateRegistry::builtin().unwrap()
    }

    #[test]
    fn every_industry_renders_one_card_per_widget_in_order() {
        let registry = registry();
        for (key, template) in registry.iter() {
            let cards = project(key, template);
            assert_eq!(cards.len(), template.widgets.len());
            for (card, widget) in cards.iter().zip(&template.widgets) {
                assert_eq!(card.title, widget.title);
                assert_eq!(card.description, widget.description);
            }
        }
    }

    #[test]
    fn trend_and_industry_tiles() {
        let registry = registry();
        for (key, template) in registry.iter() {
            for (card, widget) in project(key, template).iter().zip(&template.widgets) {
                assert_eq!(card.tiles[1].value, widget.stats[2]);
                assert_eq!(card.tiles[1].label, "Trend");
                assert_eq!(card.tiles[2].value, template.title);
                assert_eq!(card.tiles[2].label, "Industry");
            }
        }
    }

    #[test]
    fn farming_first_card() {
        let registry = registry();
        let (key, template) = registry.resolve(Some("farming"));
        let cards = project(key, template);

        assert_eq!(cards.len(), 3);
        let tiles = &cards[0].tiles;
        assert_eq!((tiles[0].value.as_str(), tiles[0].label.as_str()), ("85%", "Growth"));
        assert_eq!((tiles[1].value.as_str(), tiles[1].label.as_str()), ("Rate", "Trend"));
        assert_eq!(
            (tiles[2].value.as_str(), tiles[2].label.as_str()),
            ("Urban Farming Hub", "Industry")
        );
    }

    #[test]
    fn empty_selection_projects_business_dashboard() {
        let registry = registry();
        let (key, template) = registry.resolve(Some(""));
        let cards = project(key, template);
        assert_eq!(cards.len(), 3);
        assert!(cards.iter().all(|c| c.tiles[2].value == "Business Dashboard"));
        assert_eq!(cards[0].title, "Revenue Overview");
    }

    #[test]
    fn rendering_twice_is_idempotent() {
        let registry = registry();
        let (key, template) = registry.resolve(Some("finance"));
        assert_eq!(project(key, template), project(key, template));
    }

    #[test]
    fn switching_industry_leaves_no_previous_cards() {
        let registry = registry();
        let (a_key, a) = registry.resolve(Some("design"));
        let (b_key, b) = registry.resolve(Some("healthcare"));
        let before = project(a_key, a);
        let after = project(b_key, b);

        assert!(after.iter().all(|card| before.iter().all(|old| old.key != card.key)));
        assert!(after.iter().all(|card| card.tiles[2].value == "Healthcare Analytics"));
    }

    #[test]
    fn reveal_delay_is_staggered_by_index() {
        let registry = registry();
        let (key, template) = registry.resolve(None);
        let delays: Vec<String> = project(key, template)
            .iter()
            .map(WidgetCard::animation_delay)
            .collect();
        assert_eq!(delays, vec!["0s", "0.1s", "0.2s"]);
    }
}
