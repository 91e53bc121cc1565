#[cfg(test)]
mod tests {
    use crate::runner::{Bencher, Registry};
    use anyhow::Result;
    use regex::Regex;

    fn noop(b: &mut Bencher) -> Result<()> {
        b.iter(|_| Ok(()))
    }

    #[test]
    fn test_default_suite_lists_every_snippet() {
        let registry = Registry::default_suite();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(
            names,
            [
                "NewBuffers",
                "ReuseBuffers",
                "UnbufferedFileWrite",
                "BufferedFileWrite",
                "ParseInt32Text",
                "ParseInt32Binary",
                "ParseTimeText",
                "ParseTimeBinary",
                "BinaryWrite",
                "BinaryPut",
            ]
        );
    }

    #[test]
    fn test_matching_filters_by_regex() {
        let registry = Registry::default_suite();
        let re = Regex::new("^ParseTime").unwrap();
        let picked: Vec<&str> = registry.matching(Some(&re)).iter().map(|b| b.name).collect();
        assert_eq!(picked, ["ParseTimeText", "ParseTimeBinary"]);

        let re = Regex::new("FileWrite$").unwrap();
        assert_eq!(registry.matching(Some(&re)).len(), 2);

        let re = Regex::new("NoSuchBench").unwrap();
        assert!(registry.matching(Some(&re)).is_empty());
    }

    #[test]
    fn test_matching_without_pattern_keeps_order() {
        let registry = Registry::default_suite();
        let all = registry.matching(None);
        assert_eq!(all.len(), registry.len());
        assert_eq!(all[0].display_name(), "BenchmarkNewBuffers");
    }

    #[test]
    fn test_register_rejects_duplicates() -> Result<()> {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        registry.register("Noop", noop)?;
        let err = registry.register("Noop", noop).unwrap_err();
        assert!(err.to_string().contains("already registered"));
        assert_eq!(registry.len(), 1);
        Ok(())
    }
}
