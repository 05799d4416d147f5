use indexmap::IndexMap;

/// One plant type from the built-in catalog. The CO2 figure is a fixed
/// yearly absorption constant in kg, not something we compute.
#[derive(Debug, Clone)]
pub struct PlantEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub co2_per_year: f32,
}

/// Fixed lookup table of supported plants, in display order.
#[derive(Debug, Clone)]
pub struct PlantCatalog {
    entries: IndexMap<String, PlantEntry>,
}

impl PlantCatalog {
    pub fn get(&self, id: &str) -> Option<&PlantEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Catalog keys in declaration order.
    pub fn ids(&self) -> Vec<&str> {
        self.entries.keys().map(|k| k.as_str()).collect()
    }
}

impl Default for PlantCatalog {
    fn default() -> Self {
        let mut entries = IndexMap::new();

        let mut add = |id: &str, name: &str, description: &str, co2_per_year: f32| {
            entries.insert(
                id.to_string(),
                PlantEntry {
                    id: id.to_string(),
                    name: name.to_string(),
                    description: description.to_string(),
                    co2_per_year,
                },
            );
        };

        add(
            "rose",
            "Rose",
            "Roses are classic flowering plants known for their beauty and fragrance. \
             They require regular watering (2-3 times per week) and prefer temperatures \
             between 15-25°C. Roses are excellent air purifiers and can absorb \
             approximately 5.5 kg of CO₂ per year.",
            5.5,
        );
        add(
            "tulip",
            "Tulip",
            "Tulips are spring-blooming perennials with vibrant colors. They need \
             moderate watering and prefer cooler temperatures (15-20°C). Tulips can \
             absorb about 3.5 kg of CO₂ annually and add a cheerful ambiance to any space.",
            3.5,
        );
        add(
            "orchid",
            "Orchid",
            "Orchids are elegant, exotic flowers that thrive in humid environments. \
             They require minimal watering (once per week) and prefer temperatures \
             between 18-24°C. Orchids absorb approximately 4.2 kg of CO₂ per year and \
             release oxygen at night.",
            4.2,
        );
        add(
            "sunflower",
            "Sunflower",
            "Sunflowers are bright, cheerful plants that follow the sun. They need \
             regular watering and thrive in temperatures of 20-25°C. These large plants \
             can absorb 7.2 kg of CO₂ annually and are excellent for improving air quality.",
            7.2,
        );
        add(
            "lavender",
            "Lavender",
            "Lavender is a fragrant herb known for its calming properties. It requires \
             moderate watering and prefers warm temperatures (20-25°C). Lavender absorbs \
             about 3.8 kg of CO₂ per year and has natural pest-repelling qualities.",
            3.8,
        );
        add(
            "lily",
            "Lily",
            "Lilies are graceful flowers with a strong fragrance. They need regular \
             watering and prefer temperatures of 18-23°C. Lilies can absorb approximately \
             4.6 kg of CO₂ annually and are known for their air-purifying abilities.",
            4.6,
        );
        add(
            "daisy",
            "Daisy",
            "Daisies are cheerful, low-maintenance flowers. They require moderate \
             watering and thrive in temperatures of 15-22°C. Daisies absorb about 3.2 kg \
             of CO₂ per year and are perfect for beginners.",
            3.2,
        );

        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_seven_entries() {
        let catalog = PlantCatalog::default();
        assert_eq!(catalog.len(), 7);
    }

    #[test]
    fn test_catalog_order_is_declaration_order() {
        let catalog = PlantCatalog::default();
        assert_eq!(
            catalog.ids(),
            vec!["rose", "tulip", "orchid", "sunflower", "lavender", "lily", "daisy"]
        );
    }

    #[test]
    fn test_lookup_known_plant() {
        let catalog = PlantCatalog::default();
        let rose = catalog.get("rose").unwrap();
        assert_eq!(rose.name, "Rose");
        assert_eq!(rose.co2_per_year, 5.5);
    }

    #[test]
    fn test_lookup_unknown_plant() {
        let catalog = PlantCatalog::default();
        assert!(catalog.get("cactus").is_none());
    }
}
