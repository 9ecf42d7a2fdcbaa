use std::collections::HashMap;

use super::models::{Reference, Team, Tournament};

/// Entity that matches can point at by id or slug
pub trait Referenced {
    fn id(&self) -> &Reference;
    fn slug(&self) -> &Reference;
}

impl Referenced for Team {
    fn id(&self) -> &Reference {
        &self.id
    }

    fn slug(&self) -> &Reference {
        Team::slug(self)
    }
}

impl Referenced for Tournament {
    fn id(&self) -> &Reference {
        &self.id
    }

    fn slug(&self) -> &Reference {
        Tournament::slug(self)
    }
}

/// Entities indexed by both id and slug.
///
/// Ids are indexed before slugs, so a slug never shadows another entity's id.
/// On duplicate keys the first entity in document order wins.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    items: Vec<T>,
    index: HashMap<Reference, usize>,
}

impl<T: Referenced> Catalog<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut index = HashMap::with_capacity(items.len() * 2);

        for (position, item) in items.iter().enumerate() {
            index.entry(item.id().clone()).or_insert(position);
        }
        for (position, item) in items.iter().enumerate() {
            index.entry(item.slug().clone()).or_insert(position);
        }

        Self { items, index }
    }

    pub fn get(&self, reference: &Reference) -> Option<&T> {
        self.index.get(reference).map(|&position| &self.items[position])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Referenced> Default for Catalog<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: &str, slug: Option<&str>, name: &str) -> Team {
        Team {
            id: Reference::from(id),
            slug: slug.map(Reference::from),
            name: name.to_string(),
            logo: None,
        }
    }

    #[test]
    fn test_lookup_by_id_and_slug() {
        let catalog = Catalog::new(vec![team("7", Some("sao-paulo"), "São Paulo")]);

        assert_eq!(catalog.get(&"7".into()).map(|t| t.name.as_str()), Some("São Paulo"));
        assert_eq!(catalog.get(&"sao-paulo".into()).map(|t| t.name.as_str()), Some("São Paulo"));
        assert!(catalog.get(&"santos".into()).is_none());
    }

    #[test]
    fn test_ids_take_precedence_over_slugs() {
        let catalog = Catalog::new(vec![
            team("botafogo-sp", Some("botafogo"), "Botafogo-SP"),
            team("botafogo", None, "Botafogo"),
        ]);

        assert_eq!(catalog.get(&"botafogo".into()).map(|t| t.name.as_str()), Some("Botafogo"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_default_catalog_is_empty() {
        let catalog: Catalog<Team> = Catalog::default();

        assert!(catalog.is_empty());
        assert!(catalog.get(&"flamengo".into()).is_none());
    }
}
