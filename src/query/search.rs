use crate::evm::EvaluatedProject;

/// Case-insensitive substring match on code or name (pure).
fn matches_query(item: &EvaluatedProject<'_>, needle: &str) -> bool {
    item.project.code.to_lowercase().contains(needle)
        || item.project.name.to_lowercase().contains(needle)
}

/// Registry search box: keep projects whose code or name contains `query`,
/// ignoring case. An empty query keeps everything. Order is preserved.
pub fn filter_by_search<'a>(
    projects: &[EvaluatedProject<'a>],
    query: &str,
) -> Vec<EvaluatedProject<'a>> {
    let needle = query.to_lowercase();
    projects
        .iter()
        .filter(|item| matches_query(item, &needle))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvmPolicy;
    use crate::core::{Project, ProjectStage};
    use crate::evm::evaluate_portfolio;

    fn registry() -> Vec<Project> {
        vec![
            Project::new("PRJ-001", "Refinery Upgrade Phase 2"),
            Project::new("PRJ-002", "ERP Rollout"),
            Project::new("HSE-010", "Landfill cleanup").with_stage(ProjectStage::Commissioning),
        ]
    }

    fn codes(items: &[EvaluatedProject<'_>]) -> Vec<String> {
        items.iter().map(|i| i.project.code.clone()).collect()
    }

    #[test]
    fn search_is_case_insensitive_on_code() {
        let projects = registry();
        let evaluated = evaluate_portfolio(&projects, &EvmPolicy::default());
        assert_eq!(codes(&filter_by_search(&evaluated, "prj-001")), vec!["PRJ-001"]);
    }

    #[test]
    fn search_matches_name_substring() {
        let projects = registry();
        let evaluated = evaluate_portfolio(&projects, &EvmPolicy::default());
        assert_eq!(codes(&filter_by_search(&evaluated, "UPGRADE")), vec!["PRJ-001"]);
        assert_eq!(
            codes(&filter_by_search(&evaluated, "prj")),
            vec!["PRJ-001", "PRJ-002"]
        );
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let projects = registry();
        let evaluated = evaluate_portfolio(&projects, &EvmPolicy::default());
        assert_eq!(
            codes(&filter_by_search(&evaluated, "")),
            vec!["PRJ-001", "PRJ-002", "HSE-010"]
        );
    }

    #[test]
    fn no_match_is_empty() {
        let projects = registry();
        let evaluated = evaluate_portfolio(&projects, &EvmPolicy::default());
        assert!(filter_by_search(&evaluated, "pipeline").is_empty());
    }
}
