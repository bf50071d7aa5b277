#[cfg(test)]
mod tests {
    use super::super::registry::*;
    use crate::config::{Config, Theme};
    use crate::entrez::Record;
    use crate::interactive_ratatui::domain::catalog::{self, build_registry};
    use crate::interactive_ratatui::domain::models::{FetchPayload, InputMode, PageId};
    use crate::interactive_ratatui::ui::commands::Command;
    use crate::interactive_ratatui::ui::events::{Action, TextEdit};
    use crate::interactive_ratatui::ui::keymap::KeyMap;
    use crate::interactive_ratatui::ui::pages::{MenuPage, Page, SearchPhase};
    use ratatui::text::Text;

    fn create_registry() -> Registry {
        build_registry(&Config::default()).unwrap()
    }

    fn menu(title: &str, options: &[(&str, u32)]) -> Page {
        Page::from(MenuPage::new(
            title,
            "",
            options
                .iter()
                .map(|(label, id)| (label.to_string(), PageId(*id)))
                .collect(),
        ))
    }

    fn rendered(registry: &Registry) -> Vec<String> {
        let theme = Theme::default();
        let keymap = KeyMap::new();
        let text: Text = registry.render(&RenderContext {
            theme: &theme,
            keymap: &keymap,
        });
        text.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn payload(count: usize) -> FetchPayload {
        FetchPayload {
            ids: (0..count).map(|i| i.to_string()).collect(),
            query_translation: "insulin[All Fields]".to_string(),
            records: (0..count)
                .map(|i| Record {
                    accession: format!("NM_{i:06}"),
                    ..Record::default()
                })
                .collect(),
        }
    }

    fn search_for(registry: &mut Registry, text: &str) -> Command {
        for c in text.chars() {
            registry.dispatch(Action::Edit(TextEdit::Insert(c)));
        }
        registry.dispatch(Action::Select)
    }

    /// Home > DNA > GenBank
    fn open_genbank(registry: &mut Registry) {
        registry.dispatch(Action::Select);
        registry.dispatch(Action::Select);
        assert_eq!(registry.current(), catalog::GENBANK);
    }

    #[test]
    fn test_construction_rejects_bad_tables() {
        let offset = PageId(1000);

        let missing_root = Registry::new(vec![(PageId(1), menu("A", &[("x", 1)]))], PageId(0), offset);
        assert_eq!(missing_root.unwrap_err(), RegistryError::MissingRoot(PageId(0)));

        let duplicate = Registry::new(
            vec![
                (PageId(0), menu("A", &[("x", 0)])),
                (PageId(0), menu("B", &[("x", 0)])),
            ],
            PageId(0),
            offset,
        );
        assert_eq!(duplicate.unwrap_err(), RegistryError::DuplicatePage(PageId(0)));

        let empty = Registry::new(vec![(PageId(0), menu("A", &[]))], PageId(0), offset);
        assert_eq!(
            empty.unwrap_err(),
            RegistryError::EmptyMenu { menu: PageId(0) }
        );

        let dangling = Registry::new(vec![(PageId(0), menu("A", &[("x", 7)]))], PageId(0), offset);
        assert_eq!(
            dangling.unwrap_err(),
            RegistryError::DanglingDestination {
                menu: PageId(0),
                target: PageId(7)
            }
        );

        let in_range = Registry::new(vec![(PageId(1000), menu("A", &[("x", 1000)]))], PageId(1000), offset);
        assert_eq!(
            in_range.unwrap_err(),
            RegistryError::StaticIdInResultRange {
                page: PageId(1000),
                offset
            }
        );
    }

    #[test]
    fn test_select_then_back_returns_home() {
        let mut registry = create_registry();

        registry.dispatch(Action::Select);
        assert_eq!(registry.current(), catalog::DNA);
        assert_eq!(registry.current_page().unwrap().title(), "DNA");
        assert_eq!(registry.nav().depth(), 1);

        registry.dispatch(Action::Back);
        assert_eq!(registry.current(), catalog::HOME);
        assert_eq!(registry.nav().depth(), 0);

        // Back at the root stays put
        registry.dispatch(Action::Back);
        assert_eq!(registry.current(), catalog::HOME);
    }

    #[test]
    fn test_quit_short_circuits() {
        let mut registry = create_registry();
        assert_eq!(registry.dispatch(Action::Quit), Command::Quit);
        assert!(registry.is_quitting());
        assert_eq!(rendered(&registry), vec!["", "See you later!", ""]);
    }

    #[test]
    fn test_toggle_help_is_not_forwarded() {
        let mut registry = create_registry();
        open_genbank(&mut registry);
        search_for(&mut registry, "ins");

        assert_eq!(registry.dispatch(Action::ToggleHelp), Command::None);
        assert!(registry.nav().show_help());
        registry.dispatch(Action::ToggleHelp);
        assert!(!registry.nav().show_help());

        let search = registry.current_page().and_then(|p| p.as_search()).unwrap();
        assert_eq!(search.phase(), SearchPhase::Loading);
        assert_eq!(search.input().text(), "ins");
    }

    #[test]
    fn test_resize_is_stored_and_forwarded() {
        let mut registry = create_registry();
        registry.dispatch(Action::Resize(120, 50));
        assert_eq!(registry.nav().size(), (120, 50));
        assert_eq!(registry.nav().viewport(), (100, 42));
    }

    #[test]
    fn test_genbank_search_end_to_end() {
        let mut registry = create_registry();
        open_genbank(&mut registry);
        assert_eq!(registry.input_mode(), InputMode::TextEntry);

        let command = search_for(&mut registry, "insulin");
        let Command::Fetch(request) = command else {
            panic!("expected a fetch, got {command:?}");
        };
        assert_eq!(request.database, "nuccore");
        assert_eq!(request.filter, "genbank");
        assert_eq!(request.query, "insulin");
        assert_eq!(request.origin, catalog::GENBANK);

        registry.dispatch(Action::FetchSucceeded {
            origin: request.origin,
            payload: payload(3),
        });

        assert_eq!(
            registry.result_page_ids(),
            vec![PageId(1000), PageId(1001), PageId(1002)]
        );
        for id in registry.result_page_ids() {
            assert!(registry.page(id).unwrap().as_result_detail().is_some());
        }
        let search = registry.current_page().and_then(|p| p.as_search()).unwrap();
        assert_eq!(search.phase(), SearchPhase::Received);
        assert_eq!(search.results().items_count(), 3);
        assert_eq!(registry.input_mode(), InputMode::Navigation);

        registry.dispatch(Action::MoveDown);
        registry.dispatch(Action::Select);
        assert_eq!(registry.current(), PageId(1001));
        assert_eq!(registry.current_page().unwrap().title(), "NM_000001");

        let screen = rendered(&registry);
        assert_eq!(screen[1], " Home > DNA > GenBank > NM_000001 ");
    }

    #[test]
    fn test_resize_on_result_page_keeps_list_selection_visible() {
        let mut registry = create_registry();
        registry.dispatch(Action::Resize(100, 60));
        open_genbank(&mut registry);
        search_for(&mut registry, "insulin");
        registry.dispatch(Action::FetchSucceeded {
            origin: catalog::GENBANK,
            payload: payload(12),
        });

        for _ in 0..10 {
            registry.dispatch(Action::MoveDown);
        }
        registry.dispatch(Action::Select);
        assert_eq!(registry.current(), PageId(1010));

        // Shrink while the search page is in the background
        registry.dispatch(Action::Resize(100, 20));
        registry.dispatch(Action::Back);
        assert_eq!(registry.current(), catalog::GENBANK);

        let screen = rendered(&registry);
        assert!(
            screen.iter().any(|line| line.starts_with("│ NM_000010")),
            "selected entry missing from {screen:#?}"
        );
        assert!(!screen.iter().any(|line| line.contains("NM_000000")));

        registry.dispatch(Action::Select);
        assert_eq!(registry.current(), PageId(1010));
    }

    #[test]
    fn test_completion_reaches_page_that_is_no_longer_current() {
        let mut registry = create_registry();
        open_genbank(&mut registry);
        search_for(&mut registry, "insulin");

        registry.dispatch(Action::Back);
        registry.dispatch(Action::Back);
        assert_eq!(registry.current(), catalog::HOME);

        registry.dispatch(Action::FetchSucceeded {
            origin: catalog::GENBANK,
            payload: payload(2),
        });
        assert_eq!(registry.current(), catalog::HOME);
        assert_eq!(registry.result_page_ids().len(), 2);
        let search = registry
            .page(catalog::GENBANK)
            .and_then(|p| p.as_search())
            .unwrap();
        assert_eq!(search.phase(), SearchPhase::Received);
    }

    #[test]
    fn test_result_ids_unique_across_search_pages() {
        let mut registry = create_registry();
        open_genbank(&mut registry);
        search_for(&mut registry, "insulin");
        registry.dispatch(Action::FetchSucceeded {
            origin: catalog::GENBANK,
            payload: payload(2),
        });

        // Reset the list, leave for DNA, then open RefSeq
        registry.dispatch(Action::Back);
        registry.dispatch(Action::Back);
        assert_eq!(registry.current(), catalog::DNA);
        registry.dispatch(Action::MoveDown);
        registry.dispatch(Action::Select);
        assert_eq!(registry.current(), catalog::REFSEQ_NUCLEOTIDE);

        search_for(&mut registry, "actin");
        registry.dispatch(Action::FetchSucceeded {
            origin: catalog::REFSEQ_NUCLEOTIDE,
            payload: payload(2),
        });

        assert_eq!(
            registry.result_page_ids(),
            vec![PageId(1000), PageId(1001), PageId(1002), PageId(1003)]
        );
        let refseq = registry.current_page().and_then(|p| p.as_search()).unwrap();
        assert_eq!(refseq.result_pages(), &[PageId(1002), PageId(1003)]);
    }

    #[test]
    fn test_strict_policy_aborts() {
        let config = Config {
            fatal_fetch_errors: true,
            ..Config::default()
        };
        let mut registry = build_registry(&config).unwrap();
        open_genbank(&mut registry);
        search_for(&mut registry, "insulin");

        let command = registry.dispatch(Action::FetchFailed {
            origin: catalog::GENBANK,
            error: "HTTP 500".to_string(),
        });
        assert!(matches!(command, Command::Abort(reason) if reason.contains("HTTP 500")));
    }

    #[test]
    fn test_completion_for_unknown_page_is_dropped() {
        let mut registry = create_registry();
        let command = registry.dispatch(Action::FetchSucceeded {
            origin: PageId(999),
            payload: payload(1),
        });
        assert_eq!(command, Command::None);
        assert!(registry.result_page_ids().is_empty());
    }

    #[test]
    fn test_help_legend_is_anchored_to_bottom() {
        let mut registry = create_registry();
        registry.dispatch(Action::Resize(100, 40));

        let without_help = rendered(&registry);
        registry.dispatch(Action::ToggleHelp);
        let with_help = rendered(&registry);

        assert_eq!(with_help.len(), 40);
        assert!(without_help.len() < 40);
        assert!(with_help.last().unwrap().contains("quit"));
        assert_eq!(with_help[without_help.len()], "");
    }

    #[test]
    fn test_breadcrumb_lists_history() {
        let mut registry = create_registry();
        registry.dispatch(Action::MoveDown);
        registry.dispatch(Action::Select);
        let screen = rendered(&registry);
        assert_eq!(screen[1], " Home > RNA ");
    }
}
