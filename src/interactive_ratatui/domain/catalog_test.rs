#[cfg(test)]
mod tests {
    use super::super::catalog::*;
    use super::super::models::PageId;
    use crate::config::Config;
    use crate::interactive_ratatui::ui::registry::RegistryError;

    #[test]
    fn test_catalog_builds_a_valid_registry() {
        let registry = build_registry(&Config::default()).unwrap();
        assert_eq!(registry.current(), HOME);
        assert_eq!(registry.len(), 15);
        assert!(!registry.is_empty());
        assert!(registry.result_page_ids().is_empty());
    }

    #[test]
    fn test_home_menu_lists_the_four_categories() {
        let registry = build_registry(&Config::default()).unwrap();
        let home = registry.page(HOME).and_then(|p| p.as_menu()).unwrap();
        let labels: Vec<&str> = home.options().iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["DNA", "RNA", "Protein", "Literature"]);
        assert_eq!(home.options()[0].1, DNA);
    }

    #[test]
    fn test_search_pages_use_configured_database() {
        let mut config = Config::default();
        config.entrez.database = "nucleotide".to_string();
        let registry = build_registry(&config).unwrap();

        let genbank = registry.page(GENBANK).and_then(|p| p.as_search()).unwrap();
        assert_eq!(genbank.database(), "nucleotide");
        assert_eq!(genbank.filter(), "genbank");

        let swissprot = registry.page(SWISSPROT).and_then(|p| p.as_search()).unwrap();
        assert_eq!(swissprot.database(), "protein");
    }

    #[test]
    fn test_result_offset_must_clear_static_ids() {
        let config = Config {
            result_page_offset: 30,
            ..Config::default()
        };
        let error = build_registry(&config).unwrap_err();
        assert!(matches!(
            error,
            RegistryError::StaticIdInResultRange { offset: PageId(30), .. }
        ));
    }

    #[test]
    fn test_every_static_id_is_below_default_offset() {
        let config = Config::default();
        for (id, _) in build_pages(&config) {
            assert!(id < PageId::new(config.result_page_offset), "{id}");
        }
    }
}
